use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::CatalogEntity;
use crate::shared::domain::{EntityId, Slug};
use crate::shared::errors::{AppError, AppResult};

/// Model scale (`H0` is 1:87)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scale {
    #[serde(rename = "_id")]
    pub id: EntityId,
    pub slug: Slug,
    pub name: String,
    pub ratio: f32,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub last_modified: DateTime<Utc>,
}

impl Scale {
    pub fn new(name: &str, ratio: f32) -> AppResult<Self> {
        if ratio <= 0.0 {
            return Err(AppError::ValidationError(format!(
                "Scale ratio must be positive, got {}",
                ratio
            )));
        }

        Ok(Self {
            id: EntityId::new(),
            slug: Slug::from_name(name)?,
            name: name.trim().to_string(),
            ratio,
            last_modified: Utc::now(),
        })
    }

    /// Ratio rendered as `1:87`
    pub fn ratio_label(&self) -> String {
        format!("1:{}", self.ratio)
    }
}

impl CatalogEntity for Scale {
    fn slug(&self) -> &Slug {
        &self.slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_ratio_label() {
        let scale = Scale::new("H0", 87.0).unwrap();

        assert_eq!(scale.slug.as_str(), "h0");
        assert_eq!(scale.ratio_label(), "1:87");
    }

    #[test]
    fn test_scale_rejects_non_positive_ratio() {
        assert!(Scale::new("Z", 0.0).is_err());
    }
}
