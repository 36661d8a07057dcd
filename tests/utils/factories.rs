/// Test data factories using builder pattern
///
/// Rolling stock built here gets ids and modification times that grow
/// together with the sequence number, so "newest first" and "highest id
/// first" describe the same order.
use chrono::{DateTime, Duration, TimeZone, Utc};
use trenako_lib::modules::rolling_stock::RollingStock;
use trenako_lib::shared::domain::{EntityId, Slug};
use trenako_lib::{Category, Era, PowerMethod};
use uuid::Uuid;

pub struct RollingStockFactory {
    sequence: u32,
    brand: String,
    item_number: Option<String>,
    category: Category,
    railway: Option<String>,
    scale: Option<String>,
    era: Option<Era>,
    power_method: Option<PowerMethod>,
}

impl Default for RollingStockFactory {
    fn default() -> Self {
        Self {
            sequence: 1,
            brand: "acme".to_string(),
            item_number: None,
            category: Category::ElectricLocomotives,
            railway: None,
            scale: None,
            era: None,
            power_method: None,
        }
    }
}

impl RollingStockFactory {
    pub fn new(sequence: u32) -> Self {
        Self {
            sequence,
            ..Self::default()
        }
    }

    /// AC electric locomotive of the Italian railways in H0, era IV
    pub fn electric_locomotive(sequence: u32) -> Self {
        Self::new(sequence)
            .with_railway("fs")
            .with_scale("h0")
            .with_era(Era::IV)
            .with_power_method(PowerMethod::Ac)
    }

    pub fn with_brand(mut self, brand: &str) -> Self {
        self.brand = brand.to_string();
        self
    }

    pub fn with_item_number(mut self, item_number: &str) -> Self {
        self.item_number = Some(item_number.to_string());
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn with_railway(mut self, railway: &str) -> Self {
        self.railway = Some(railway.to_string());
        self
    }

    pub fn with_scale(mut self, scale: &str) -> Self {
        self.scale = Some(scale.to_string());
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

    pub fn build(self) -> RollingStock {
        let item_number = self
            .item_number
            .unwrap_or_else(|| format!("{:05}", self.sequence));

        let mut rolling_stock =
            RollingStock::new(Slug::parse(&self.brand).unwrap(), &item_number, self.category)
                .unwrap()
                .with_id(sequence_id(self.sequence))
                .with_last_modified(modified_at(self.sequence));

        if let Some(railway) = self.railway {
            rolling_stock = rolling_stock.with_railway(Slug::parse(&railway).unwrap());
        }
        if let Some(scale) = self.scale {
            rolling_stock = rolling_stock.with_scale(Slug::parse(&scale).unwrap());
        }
        if let Some(era) = self.era {
            rolling_stock = rolling_stock.with_era(era);
        }
        if let Some(power_method) = self.power_method {
            rolling_stock = rolling_stock.with_power_method(power_method);
        }

        rolling_stock
    }
}

pub fn sequence_id(sequence: u32) -> EntityId {
    EntityId::from_uuid(Uuid::from_u128(sequence as u128))
}

pub fn modified_at(sequence: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::minutes(sequence as i64)
}

/// `count` electric locomotives with sequence numbers `1..=count`
pub fn locomotives(count: u32) -> Vec<RollingStock> {
    (1..=count)
        .map(|sequence| RollingStockFactory::electric_locomotive(sequence).build())
        .collect()
}
