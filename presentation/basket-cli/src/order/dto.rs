use std::str::FromStr;

use bigdecimal::BigDecimal;
use serde::{Deserialize, Deserializer};

use business::domain::basket::use_cases::price::PriceBasketParams;
use business::domain::product::value_objects::ProductId;
use business::domain::voucher::errors::VoucherError;
use business::domain::voucher::model::GiftVoucher;

#[derive(Debug, Deserialize)]
pub struct VoucherDto {
    pub name: String,
    #[serde(deserialize_with = "decimal_from_text")]
    pub value: BigDecimal,
}

fn decimal_from_text<'de, D>(deserializer: D) -> Result<BigDecimal, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    BigDecimal::from_str(text.trim()).map_err(serde::de::Error::custom)
}

/// Order file contents.
#[derive(Debug, Deserialize)]
pub struct OrderRequest {
    #[serde(default)]
    pub product_ids: Vec<i32>,
    #[serde(default)]
    pub vouchers: Vec<VoucherDto>,
}

impl OrderRequest {
    pub fn into_params(self) -> Result<PriceBasketParams, VoucherError> {
        let vouchers = self
            .vouchers
            .into_iter()
            .map(|v| GiftVoucher::new(v.name, v.value))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PriceBasketParams {
            product_ids: self.product_ids.into_iter().map(ProductId::new).collect(),
            vouchers,
        })
    }
}
