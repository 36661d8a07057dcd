use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::catalog::domain::{Category, Era, PowerMethod};
use crate::shared::application::Identified;
use crate::shared::domain::{EntityId, Slug};
use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;

/// Stored field names of rolling stock documents
pub mod fields {
    pub const ID: &str = crate::shared::infrastructure::ID_FIELD;
    pub const SLUG: &str = "slug";
    pub const BRAND_NAME: &str = "brandName";
    pub const RAILWAY_NAME: &str = "railwayName";
    pub const SCALE_NAME: &str = "scaleName";
    pub const CATEGORY: &str = "category";
    pub const ERA: &str = "era";
    pub const POWER_METHOD: &str = "powerMethod";
    pub const LAST_MODIFIED: &str = "lastModified";
}

/// A catalog model (locomotive, car, set...) as stored in the
/// `rollingStocks` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollingStock {
    #[serde(rename = "_id")]
    pub id: EntityId,
    pub slug: Slug,
    pub brand_name: Slug,
    pub item_number: String,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub railway_name: Option<Slug>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale_name: Option<Slug>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub era: Option<Era>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power_method: Option<PowerMethod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub last_modified: DateTime<Utc>,
}

impl RollingStock {
    /// New model with slug `<brand>-<item number>`
    pub fn new(brand: Slug, item_number: &str, category: Category) -> AppResult<Self> {
        Validator::validate_item_number(item_number)?;
        let slug = Slug::from_name(&format!("{} {}", brand, item_number))?;

        Ok(Self {
            id: EntityId::new(),
            slug,
            brand_name: brand,
            item_number: item_number.trim().to_string(),
            category,
            railway_name: None,
            scale_name: None,
            era: None,
            power_method: None,
            description: None,
            last_modified: Utc::now(),
        })
    }

    pub fn with_id(mut self, id: EntityId) -> Self {
        self.id = id;
        self
    }

    pub fn with_railway(mut self, railway: Slug) -> Self {
        self.railway_name = Some(railway);
        self
    }

    pub fn with_scale(mut self, scale: Slug) -> Self {
        self.scale_name = Some(scale);
        self
    }

    pub fn with_era(mut self, era: Era) -> Self {
        self.era = Some(era);
        self
    }

    pub fn with_power_method(mut self, power_method: PowerMethod) -> Self {
        self.power_method = Some(power_method);
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn with_last_modified(mut self, last_modified: DateTime<Utc>) -> Self {
        self.last_modified = last_modified;
        self
    }
}

impl Identified for RollingStock {
    fn entity_id(&self) -> EntityId {
        self.id
    }
}
