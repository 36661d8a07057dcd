use regex::Regex;
use std::sync::LazyLock;

use crate::shared::errors::AppError;

static SLUG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("slug pattern is valid"));

pub struct Validator;

impl Validator {
    /// Slugs are lowercase ASCII words joined by single dashes
    pub fn validate_slug(slug: &str) -> Result<(), AppError> {
        if slug.is_empty() {
            return Err(AppError::ValidationError(
                "Slug cannot be empty".to_string(),
            ));
        }
        if slug.len() > 100 {
            return Err(AppError::ValidationError(
                "Slug too long (max 100 characters)".to_string(),
            ));
        }
        if !SLUG_PATTERN.is_match(slug) {
            return Err(AppError::ValidationError(format!(
                "Slug '{}' is not normalized",
                slug
            )));
        }
        Ok(())
    }

    pub fn validate_page_size(count: u32) -> Result<(), AppError> {
        if count == 0 {
            return Err(AppError::InvalidInput(
                "Page size must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_item_number(item_number: &str) -> Result<(), AppError> {
        if item_number.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Item number cannot be empty".to_string(),
            ));
        }
        if item_number.len() > 25 {
            return Err(AppError::ValidationError(
                "Item number too long (max 25 characters)".to_string(),
            ));
        }
        Ok(())
    }
}
