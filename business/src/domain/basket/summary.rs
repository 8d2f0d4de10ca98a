use bigdecimal::BigDecimal;
use serde::Serialize;

/// Snapshot of a priced basket, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BasketSummary {
    pub total: BigDecimal,
    pub formatted_total: String,
    pub message: Option<String>,
    pub product_count: usize,
    pub voucher_count: usize,
}
