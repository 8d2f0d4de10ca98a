use crate::domain::basket::summary::BasketSummary;
use crate::domain::product::errors::ProductError;
use crate::domain::product::value_objects::ProductId;
use crate::domain::voucher::model::GiftVoucher;

pub struct PriceBasketParams {
    pub product_ids: Vec<ProductId>,
    pub vouchers: Vec<GiftVoucher>,
}

pub trait PriceBasketUseCase: Send + Sync {
    fn execute(&self, params: PriceBasketParams) -> Result<BasketSummary, ProductError>;
}
