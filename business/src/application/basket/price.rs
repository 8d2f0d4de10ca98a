use std::sync::Arc;

use crate::domain::basket::model::Basket;
use crate::domain::basket::summary::BasketSummary;
use crate::domain::basket::use_cases::price::{PriceBasketParams, PriceBasketUseCase};
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::lookup::ProductLookup;

pub struct PriceBasketUseCaseImpl {
    pub lookup: Arc<dyn ProductLookup>,
    pub logger: Arc<dyn Logger>,
}

impl PriceBasketUseCase for PriceBasketUseCaseImpl {
    fn execute(&self, params: PriceBasketParams) -> Result<BasketSummary, ProductError> {
        self.logger.info(&format!(
            "Pricing basket with {} products and {} vouchers",
            params.product_ids.len(),
            params.vouchers.len()
        ));

        let mut basket = Basket::new(self.lookup.clone());

        for id in params.product_ids {
            basket.add_product(id).inspect_err(|_| {
                self.logger
                    .warn(&format!("Product not found in catalog: {}", id));
            })?;
            self.logger.debug(&format!("Added product {} to basket", id));
        }

        for voucher in params.vouchers {
            self.logger
                .debug(&format!("Applying gift voucher: {}", voucher.name));
            basket.add_gift_voucher(voucher);
        }

        let summary = basket.summary();
        if let Some(message) = &summary.message {
            self.logger.warn(message);
        }

        self.logger
            .info(&format!("Basket priced at {}", summary.formatted_total));
        Ok(summary)
    }
}
