use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{Category, PowerMethod};
use crate::shared::errors::AppError;

const SEPARATOR: char = '-';

/// Compound "cat" shorthand: an optional power method prefix plus a
/// category, e.g. `ac-electric-locomotives` or just `railcars`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cat {
    power_method: Option<PowerMethod>,
    category: Category,
}

impl Cat {
    pub fn new(power_method: Option<PowerMethod>, category: Category) -> Self {
        Self {
            power_method,
            category,
        }
    }

    /// Splits on the first separator. A recognized power method prefix must be
    /// followed by a valid category; otherwise the whole value has to be a
    /// category label (which may itself contain separators).
    pub fn parse(value: &str) -> Result<Self, AppError> {
        let value = value.trim();

        if let Some((prefix, suffix)) = value.split_once(SEPARATOR) {
            if let Ok(power_method) = prefix.parse::<PowerMethod>() {
                let category = suffix.parse::<Category>().map_err(|_| {
                    AppError::InvalidInput(format!(
                        "Invalid cat '{}': unknown category '{}'",
                        value, suffix
                    ))
                })?;
                return Ok(Self::new(Some(power_method), category));
            }
        }

        value
            .parse::<Category>()
            .map(|category| Self::new(None, category))
            .map_err(|_| AppError::InvalidInput(format!("Invalid cat '{}'", value)))
    }

    pub fn power_method(&self) -> Option<PowerMethod> {
        self.power_method
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Human readable form, e.g. "AC electric locomotives"
    pub fn display_name(&self) -> String {
        match self.power_method {
            Some(power_method) => format!(
                "{} {}",
                power_method.display_name(),
                self.category.display_name().to_lowercase()
            ),
            None => self.category.display_name().to_string(),
        }
    }
}

impl fmt::Display for Cat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.power_method {
            Some(power_method) => write!(f, "{}{}{}", power_method, SEPARATOR, self.category),
            None => write!(f, "{}", self.category),
        }
    }
}

impl FromStr for Cat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Cat {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Cat> for String {
    fn from(cat: Cat) -> Self {
        cat.to_string()
    }
}
