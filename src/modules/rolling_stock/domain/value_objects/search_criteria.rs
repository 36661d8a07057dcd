use std::fmt;

use super::catalog_ref::CatalogRef;
use crate::modules::catalog::domain::{
    Brand, Cat, CatalogEntity, Category, Era, PowerMethod, Railway, Scale,
};
use crate::shared::errors::AppResult;

/// Filters for browsing rolling stock.
///
/// Every dimension is optional; criteria with nothing set are empty and match
/// the whole catalog. Instances are only created through
/// [`SearchCriteriaBuilder`] and never change afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    brand: Option<CatalogRef<Brand>>,
    railway: Option<CatalogRef<Railway>>,
    scale: Option<CatalogRef<Scale>>,
    category: Option<Category>,
    era: Option<Era>,
    power_method: Option<PowerMethod>,
    cat: Option<Cat>,
}

/// Entities found for the slugs of some criteria
#[derive(Debug, Clone, Default)]
pub struct ResolvedEntities {
    pub brand: Option<Brand>,
    pub railway: Option<Railway>,
    pub scale: Option<Scale>,
}

impl SearchCriteria {
    pub fn builder() -> SearchCriteriaBuilder {
        SearchCriteriaBuilder::new()
    }

    /// Criteria matching everything
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builder pre-filled with these criteria
    pub fn to_builder(&self) -> SearchCriteriaBuilder {
        SearchCriteriaBuilder {
            brand: self.brand.clone(),
            railway: self.railway.clone(),
            scale: self.scale.clone(),
            category: self.category,
            era: self.era,
            power_method: self.power_method,
            cat: self.cat,
        }
    }

    /// New criteria with the given entities attached to the matching slug
    /// references. Entities that do not match the stored slug are ignored and
    /// already resolved references are kept.
    pub fn with_resolved(&self, resolved: ResolvedEntities) -> Self {
        let mut criteria = self.clone();
        criteria.brand = attach(criteria.brand, resolved.brand);
        criteria.railway = attach(criteria.railway, resolved.railway);
        criteria.scale = attach(criteria.scale, resolved.scale);
        criteria
    }

    pub fn brand(&self) -> Option<&CatalogRef<Brand>> {
        self.brand.as_ref()
    }

    pub fn railway(&self) -> Option<&CatalogRef<Railway>> {
        self.railway.as_ref()
    }

    pub fn scale(&self) -> Option<&CatalogRef<Scale>> {
        self.scale.as_ref()
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn era(&self) -> Option<Era> {
        self.era
    }

    pub fn power_method(&self) -> Option<PowerMethod> {
        self.power_method
    }

    pub fn cat(&self) -> Option<Cat> {
        self.cat
    }

    pub fn has_brand(&self) -> bool {
        self.brand.is_some()
    }

    pub fn has_railway(&self) -> bool {
        self.railway.is_some()
    }

    pub fn has_scale(&self) -> bool {
        self.scale.is_some()
    }

    pub fn has_category(&self) -> bool {
        self.category.is_some()
    }

    pub fn has_era(&self) -> bool {
        self.era.is_some()
    }

    pub fn has_power_method(&self) -> bool {
        self.power_method.is_some()
    }

    pub fn has_cat(&self) -> bool {
        self.cat.is_some()
    }

    pub fn is_empty(&self) -> bool {
        !(self.has_brand()
            || self.has_railway()
            || self.has_scale()
            || self.has_category()
            || self.has_era()
            || self.has_power_method()
            || self.has_cat())
    }

    /// True when every set slug reference carries its entity
    pub fn is_fully_resolved(&self) -> bool {
        self.brand.as_ref().map_or(true, CatalogRef::is_resolved)
            && self.railway.as_ref().map_or(true, CatalogRef::is_resolved)
            && self.scale.as_ref().map_or(true, CatalogRef::is_resolved)
    }
}

fn attach<T: CatalogEntity>(
    current: Option<CatalogRef<T>>,
    entity: Option<T>,
) -> Option<CatalogRef<T>> {
    match (current, entity) {
        (Some(CatalogRef::BySlug(slug)), Some(entity)) if entity.slug() == &slug => {
            Some(CatalogRef::Resolved(entity))
        }
        (current, _) => current,
    }
}

impl fmt::Display for SearchCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("(any)");
        }

        let mut parts: Vec<String> = Vec::new();
        if let Some(brand) = &self.brand {
            parts.push(format!("brand={}", brand));
        }
        if let Some(railway) = &self.railway {
            parts.push(format!("railway={}", railway));
        }
        if let Some(scale) = &self.scale {
            parts.push(format!("scale={}", scale));
        }
        if let Some(cat) = &self.cat {
            parts.push(format!("cat={}", cat));
        }
        if let Some(category) = &self.category {
            parts.push(format!("category={}", category));
        }
        if let Some(era) = &self.era {
            parts.push(format!("era={}", era));
        }
        if let Some(power_method) = &self.power_method {
            parts.push(format!("powerMethod={}", power_method));
        }
        f.write_str(&parts.join(", "))
    }
}

/// Accumulates filter values; the last value set for a dimension wins.
///
/// `cat` always takes precedence over `category` and `power_method`,
/// whichever order the setters were called in.
#[derive(Debug, Clone, Default)]
pub struct SearchCriteriaBuilder {
    brand: Option<CatalogRef<Brand>>,
    railway: Option<CatalogRef<Railway>>,
    scale: Option<CatalogRef<Scale>>,
    category: Option<Category>,
    era: Option<Era>,
    power_method: Option<PowerMethod>,
    cat: Option<Cat>,
}

impl SearchCriteriaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Brand by slug or resolved entity
    pub fn brand(mut self, brand: impl Into<CatalogRef<Brand>>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn railway(mut self, railway: impl Into<CatalogRef<Railway>>) -> Self {
        self.railway = Some(railway.into());
        self
    }

    pub fn scale(mut self, scale: impl Into<CatalogRef<Scale>>) -> Self {
        self.scale = Some(scale.into());
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn era(mut self, era: Era) -> Self {
        self.era = Some(era);
        self
    }

    pub fn power_method(mut self, power_method: PowerMethod) -> Self {
        self.power_method = Some(power_method);
        self
    }

    /// Parses the compound shorthand; malformed values are rejected here
    pub fn cat(self, value: &str) -> AppResult<Self> {
        let cat = Cat::parse(value)?;
        Ok(self.cat_value(cat))
    }

    pub fn cat_value(mut self, cat: Cat) -> Self {
        self.cat = Some(cat);
        self
    }

    pub fn build(self) -> SearchCriteria {
        let (category, power_method) = match self.cat {
            Some(cat) => (Some(cat.category()), cat.power_method()),
            None => (self.category, self.power_method),
        };

        SearchCriteria {
            brand: self.brand,
            railway: self.railway,
            scale: self.scale,
            category,
            era: self.era,
            power_method,
            cat: self.cat,
        }
    }
}
