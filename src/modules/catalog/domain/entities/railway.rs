use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::CatalogEntity;
use crate::shared::domain::{EntityId, Slug};
use crate::shared::errors::AppResult;

/// Railway operator (company whose livery a model carries)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Railway {
    #[serde(rename = "_id")]
    pub id: EntityId,
    pub slug: Slug,
    pub name: String,
    /// ISO 3166 country code, lowercase
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub last_modified: DateTime<Utc>,
}

impl Railway {
    pub fn new(name: &str) -> AppResult<Self> {
        Ok(Self {
            id: EntityId::new(),
            slug: Slug::from_name(name)?,
            name: name.trim().to_string(),
            country: None,
            last_modified: Utc::now(),
        })
    }

    pub fn with_country(mut self, country: &str) -> Self {
        self.country = Some(country.to_lowercase());
        self
    }
}

impl CatalogEntity for Railway {
    fn slug(&self) -> &Slug {
        &self.slug
    }
}
