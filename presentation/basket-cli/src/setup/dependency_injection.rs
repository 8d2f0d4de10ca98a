use std::sync::Arc;

use business::application::basket::price::PriceBasketUseCaseImpl;
use business::domain::basket::use_cases::price::PriceBasketUseCase;
use catalog::source::load_catalog;
use logger::TracingLogger;

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub price_basket: Arc<dyn PriceBasketUseCase>,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let product_catalog = Arc::new(load_catalog(&config.catalog)?);

        let price_basket = Arc::new(PriceBasketUseCaseImpl {
            lookup: product_catalog,
            logger,
        });

        Ok(Self { price_basket })
    }
}
