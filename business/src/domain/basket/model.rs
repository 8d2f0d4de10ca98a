use std::sync::Arc;

use bigdecimal::BigDecimal;

use crate::domain::product::errors::ProductError;
use crate::domain::product::lookup::ProductLookup;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::ProductId;
use crate::domain::voucher::model::GiftVoucher;
use crate::domain::voucher::redemption::{Redemption, RedemptionNotice, format_amount, redeem};

use super::summary::BasketSummary;

/// Products and vouchers gathered for a single order.
///
/// The total and the notice are recomputed after every mutation, so reads
/// are always consistent with the current contents. Not meant to be shared
/// between threads without external locking.
pub struct Basket {
    lookup: Arc<dyn ProductLookup>,
    products: Vec<Product>,
    vouchers: Vec<GiftVoucher>,
    redemption: Redemption,
}

impl Basket {
    pub fn new(lookup: Arc<dyn ProductLookup>) -> Self {
        Self {
            lookup,
            products: Vec::new(),
            vouchers: Vec::new(),
            redemption: Redemption::default(),
        }
    }

    /// Resolves the product and adds it to the basket.
    ///
    /// An unknown id leaves the basket untouched.
    pub fn add_product(&mut self, id: ProductId) -> Result<(), ProductError> {
        let product = self.lookup.get(id)?;
        self.products.push(product);
        self.recompute();
        Ok(())
    }

    pub fn add_gift_voucher(&mut self, voucher: GiftVoucher) {
        self.vouchers.push(voucher);
        self.recompute();
    }

    pub fn total(&self) -> &BigDecimal {
        &self.redemption.total
    }

    pub fn notice(&self) -> Option<&RedemptionNotice> {
        self.redemption.notice.as_ref()
    }

    /// User-facing text of the current notice, if any.
    pub fn message(&self) -> Option<String> {
        self.notice().map(|notice| notice.to_string())
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn vouchers(&self) -> &[GiftVoucher] {
        &self.vouchers
    }

    pub fn summary(&self) -> BasketSummary {
        BasketSummary {
            total: self.total().clone(),
            formatted_total: format_amount(self.total()),
            message: self.message(),
            product_count: self.products.len(),
            voucher_count: self.vouchers.len(),
        }
    }

    fn recompute(&mut self) {
        self.redemption = redeem(&self.products, &self.vouchers);
    }
}
