use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::errors::AppError;

/// Power/control method of a model (two-rail DC or three-rail AC)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerMethod {
    Ac,
    Dc,
}

impl PowerMethod {
    pub const ALL: [PowerMethod; 2] = [PowerMethod::Ac, PowerMethod::Dc];

    pub fn label(&self) -> &'static str {
        match self {
            PowerMethod::Ac => "ac",
            PowerMethod::Dc => "dc",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PowerMethod::Ac => "AC",
            PowerMethod::Dc => "DC",
        }
    }
}

impl fmt::Display for PowerMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PowerMethod {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ac" => Ok(PowerMethod::Ac),
            "dc" => Ok(PowerMethod::Dc),
            _ => Err(AppError::InvalidInput(format!("Invalid power method: {}", s))),
        }
    }
}
