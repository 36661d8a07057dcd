use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::CatalogEntity;
use crate::shared::domain::{EntityId, Slug};
use crate::shared::errors::AppResult;

/// Model manufacturer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    #[serde(rename = "_id")]
    pub id: EntityId,
    pub slug: Slug,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub last_modified: DateTime<Utc>,
}

impl Brand {
    pub fn new(name: &str) -> AppResult<Self> {
        Ok(Self {
            id: EntityId::new(),
            slug: Slug::from_name(name)?,
            name: name.trim().to_string(),
            website: None,
            last_modified: Utc::now(),
        })
    }

    pub fn with_website(mut self, website: &str) -> Self {
        self.website = Some(website.to_string());
        self
    }
}

impl CatalogEntity for Brand {
    fn slug(&self) -> &Slug {
        &self.slug
    }
}
