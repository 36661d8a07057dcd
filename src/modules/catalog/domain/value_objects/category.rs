use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::errors::AppError;

/// Rolling stock categories, labelled the way they appear in URLs and
/// stored documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "steam-locomotives")]
    SteamLocomotives,
    #[serde(rename = "diesel-locomotives")]
    DieselLocomotives,
    #[serde(rename = "electric-locomotives")]
    ElectricLocomotives,
    #[serde(rename = "railcars")]
    Railcars,
    #[serde(rename = "electric-multiple-units")]
    ElectricMultipleUnits,
    #[serde(rename = "freight-cars")]
    FreightCars,
    #[serde(rename = "passenger-cars")]
    PassengerCars,
    #[serde(rename = "train-sets")]
    TrainSets,
    #[serde(rename = "starter-sets")]
    StarterSets,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::SteamLocomotives,
        Category::DieselLocomotives,
        Category::ElectricLocomotives,
        Category::Railcars,
        Category::ElectricMultipleUnits,
        Category::FreightCars,
        Category::PassengerCars,
        Category::TrainSets,
        Category::StarterSets,
    ];

    /// Canonical lowercase label
    pub fn label(&self) -> &'static str {
        match self {
            Category::SteamLocomotives => "steam-locomotives",
            Category::DieselLocomotives => "diesel-locomotives",
            Category::ElectricLocomotives => "electric-locomotives",
            Category::Railcars => "railcars",
            Category::ElectricMultipleUnits => "electric-multiple-units",
            Category::FreightCars => "freight-cars",
            Category::PassengerCars => "passenger-cars",
            Category::TrainSets => "train-sets",
            Category::StarterSets => "starter-sets",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::SteamLocomotives => "Steam locomotives",
            Category::DieselLocomotives => "Diesel locomotives",
            Category::ElectricLocomotives => "Electric locomotives",
            Category::Railcars => "Railcars",
            Category::ElectricMultipleUnits => "Electric multiple units",
            Category::FreightCars => "Freight cars",
            Category::PassengerCars => "Passenger cars",
            Category::TrainSets => "Train sets",
            Category::StarterSets => "Starter sets",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "steam-locomotives" => Ok(Category::SteamLocomotives),
            "diesel-locomotives" => Ok(Category::DieselLocomotives),
            "electric-locomotives" => Ok(Category::ElectricLocomotives),
            "railcars" => Ok(Category::Railcars),
            "electric-multiple-units" => Ok(Category::ElectricMultipleUnits),
            "freight-cars" => Ok(Category::FreightCars),
            "passenger-cars" => Ok(Category::PassengerCars),
            "train-sets" => Ok(Category::TrainSets),
            "starter-sets" => Ok(Category::StarterSets),
            _ => Err(AppError::InvalidInput(format!("Invalid category: {}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_parse_back() {
        for category in Category::ALL {
            assert_eq!(category.label().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_from_str_accepts_exact_labels_only() {
        assert_eq!(
            "electric-locomotives".parse::<Category>().unwrap(),
            Category::ElectricLocomotives
        );
        assert!(matches!(
            "Electric-Locomotives".parse::<Category>(),
            Err(AppError::InvalidInput(_))
        ));
        assert!(matches!(
            "electric".parse::<Category>(),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_serde_uses_labels() {
        assert_eq!(
            serde_json::to_value(Category::FreightCars).unwrap(),
            serde_json::json!("freight-cars")
        );
    }
}
