use bigdecimal::BigDecimal;
use num_traits::Zero;
use serde::Serialize;

use super::errors::VoucherError;

/// A fixed-value voucher redeemed against the basket total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GiftVoucher {
    pub name: String,
    pub value: BigDecimal,
}

impl GiftVoucher {
    pub fn new(name: impl Into<String>, value: BigDecimal) -> Result<Self, VoucherError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(VoucherError::NameEmpty);
        }

        if value < BigDecimal::zero() {
            return Err(VoucherError::NegativeValue);
        }

        Ok(Self { name, value })
    }
}
