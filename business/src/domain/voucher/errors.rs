#[derive(Debug, thiserror::Error)]
pub enum VoucherError {
    #[error("voucher.name_empty")]
    NameEmpty,
    #[error("voucher.negative_value")]
    NegativeValue,
}
