use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;

/// Normalized identifier used in URLs and as the stored name of brands,
/// railways and scales (`"ACME Trains"` becomes `acme-trains`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(String);

impl Slug {
    /// Accepts an already normalized slug
    pub fn parse(value: &str) -> AppResult<Self> {
        Validator::validate_slug(value).map_err(|e| match e {
            AppError::ValidationError(message) => AppError::InvalidInput(message),
            other => other,
        })?;
        Ok(Self(value.to_string()))
    }

    /// Normalizes a display name into a slug
    pub fn from_name(name: &str) -> AppResult<Self> {
        let mut slug = String::with_capacity(name.len());
        let mut pending_dash = false;

        for c in name.chars() {
            if c.is_ascii_alphanumeric() {
                if pending_dash && !slug.is_empty() {
                    slug.push('-');
                }
                pending_dash = false;
                slug.push(c.to_ascii_lowercase());
            } else {
                pending_dash = true;
            }
        }

        if slug.is_empty() {
            return Err(AppError::InvalidInput(format!(
                "Cannot build a slug from '{}'",
                name
            )));
        }

        Self::parse(&slug)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Slug {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Slug {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Slug> for String {
    fn from(slug: Slug) -> Self {
        slug.0
    }
}
