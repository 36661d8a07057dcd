pub mod modules;
pub mod shared;

use modules::{
    catalog::{
        infrastructure::catalog_lookup_impl::{
            BRANDS_COLLECTION, RAILWAYS_COLLECTION, SCALES_COLLECTION,
        },
        CatalogLookup, CatalogLookupImpl,
    },
    rolling_stock::{
        infrastructure::ROLLING_STOCKS_COLLECTION, CriteriaResolver, RollingStockQueryTranslator,
        RollingStockRepository, RollingStockRepositoryImpl, SearchRollingStocksHandler,
    },
};
use shared::{
    infrastructure::{DocumentCollection, InMemoryCollection},
    utils::logger::init_logger_with_filter,
};
use std::sync::Arc;


pub use modules::catalog::{Brand, Cat, Category, Era, PowerMethod, Railway, Scale};
pub use modules::rolling_stock::{
    RollingStock, SearchCriteria, SearchRollingStocksQuery, SearchRollingStocksResult,
};
pub use shared::application::{PaginatedResults, Query, RangeRequest};
pub use shared::{AppError, AppResult, SearchConfig};

/// Wired search services over a set of document collections
pub struct CatalogServices {
    pub catalog: Arc<CatalogLookupImpl>,
    pub rolling_stocks: Arc<dyn RollingStockRepository>,
    pub search: Arc<SearchRollingStocksHandler>,
    pub config: SearchConfig,
}

impl CatalogServices {
    /// Wires the services from explicit collections
    pub fn new(
        config: SearchConfig,
        rolling_stocks: Arc<dyn DocumentCollection>,
        brands: Arc<dyn DocumentCollection>,
        railways: Arc<dyn DocumentCollection>,
        scales: Arc<dyn DocumentCollection>,
    ) -> AppResult<Self> {
        if let Err(e) = config.validate() {
            log_error!("Invalid search configuration: {}", e);
            return Err(e);
        }

        let catalog = Arc::new(CatalogLookupImpl::new(brands, railways, scales));
        let lookup: Arc<dyn CatalogLookup> = catalog.clone();

        // Repository translates criteria into document queries
        let translator = RollingStockQueryTranslator::new(&config);
        let rolling_stocks: Arc<dyn RollingStockRepository> =
            Arc::new(RollingStockRepositoryImpl::new(rolling_stocks, translator));

        let resolver = Arc::new(CriteriaResolver::new(lookup));
        let search = Arc::new(
            SearchRollingStocksHandler::new(Arc::clone(&rolling_stocks), config.clone())
                .with_resolver(resolver),
        );

        Ok(Self {
            catalog,
            rolling_stocks,
            search,
            config,
        })
    }

    /// Services over fresh in-memory collections
    pub fn in_memory(config: SearchConfig) -> AppResult<Self> {
        Self::new(
            config,
            Arc::new(InMemoryCollection::new(ROLLING_STOCKS_COLLECTION)),
            Arc::new(InMemoryCollection::new(BRANDS_COLLECTION)),
            Arc::new(InMemoryCollection::new(RAILWAYS_COLLECTION)),
            Arc::new(InMemoryCollection::new(SCALES_COLLECTION)),
        )
    }

    /// Loads configuration from the environment, initializes logging and
    /// wires in-memory services
    pub fn from_env() -> AppResult<Self> {
        let config = SearchConfig::from_env()?;
        init_logger_with_filter(config.log_filter.as_deref());
        log_info!(
            "Search configured: default page size {}, max page size {}",
            config.default_page_size,
            config.max_page_size
        );

        Self::in_memory(config)
    }
}
