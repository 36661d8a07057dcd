use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::errors::AppError;

/// Historical operating eras (NEM 806)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Era {
    I,
    II,
    III,
    IV,
    V,
    VI,
}

impl Era {
    pub const ALL: [Era; 6] = [Era::I, Era::II, Era::III, Era::IV, Era::V, Era::VI];

    pub fn label(&self) -> &'static str {
        match self {
            Era::I => "i",
            Era::II => "ii",
            Era::III => "iii",
            Era::IV => "iv",
            Era::V => "v",
            Era::VI => "vi",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Era::I => "Era I",
            Era::II => "Era II",
            Era::III => "Era III",
            Era::IV => "Era IV",
            Era::V => "Era V",
            Era::VI => "Era VI",
        }
    }
}

impl fmt::Display for Era {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Era {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "i" => Ok(Era::I),
            "ii" => Ok(Era::II),
            "iii" => Ok(Era::III),
            "iv" => Ok(Era::IV),
            "v" => Ok(Era::V),
            "vi" => Ok(Era::VI),
            _ => Err(AppError::InvalidInput(format!("Invalid era: {}", s))),
        }
    }
}
