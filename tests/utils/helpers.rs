/// Test helper functions and service builders
use std::sync::Arc;
use trenako_lib::modules::catalog::infrastructure::catalog_lookup_impl::{
    BRANDS_COLLECTION, RAILWAYS_COLLECTION, SCALES_COLLECTION,
};
use trenako_lib::modules::rolling_stock::infrastructure::ROLLING_STOCKS_COLLECTION;
use trenako_lib::modules::rolling_stock::RollingStock;
use trenako_lib::shared::infrastructure::InMemoryCollection;
use trenako_lib::shared::utils::init_logger;
use trenako_lib::{CatalogServices, SearchConfig};

pub struct TestServices {
    pub services: CatalogServices,
    pub rolling_stocks: Arc<InMemoryCollection>,
}

/// Build search services over in-memory collections
pub fn build_test_services() -> TestServices {
    build_test_services_with(SearchConfig::default())
}

pub fn build_test_services_with(config: SearchConfig) -> TestServices {
    init_logger();
    let rolling_stocks = Arc::new(InMemoryCollection::new(ROLLING_STOCKS_COLLECTION));

    let services = CatalogServices::new(
        config,
        rolling_stocks.clone(),
        Arc::new(InMemoryCollection::new(BRANDS_COLLECTION)),
        Arc::new(InMemoryCollection::new(RAILWAYS_COLLECTION)),
        Arc::new(InMemoryCollection::new(SCALES_COLLECTION)),
    )
    .expect("default configuration is valid");

    TestServices {
        services,
        rolling_stocks,
    }
}

pub async fn seed(services: &CatalogServices, items: &[RollingStock]) {
    for item in items {
        services
            .rolling_stocks
            .save(item)
            .await
            .expect("Failed to seed rolling stock");
    }
}
