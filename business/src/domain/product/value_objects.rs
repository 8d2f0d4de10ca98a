use serde::{Deserialize, Serialize};

/// Catalog identifier of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i32);

impl ProductId {
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for ProductId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    Clothing,
    GiftVoucher,
    HeadGear,
}

impl ProductCategory {
    /// Maps the integer code stored in catalog records.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(ProductCategory::Clothing),
            2 => Some(ProductCategory::GiftVoucher),
            3 => Some(ProductCategory::HeadGear),
            _ => None,
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            ProductCategory::Clothing => 1,
            ProductCategory::GiftVoucher => 2,
            ProductCategory::HeadGear => 3,
        }
    }

    /// Gift vouchers bought as products cannot be paid for with other vouchers.
    pub fn is_redeemable(&self) -> bool {
        *self != ProductCategory::GiftVoucher
    }
}

impl std::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductCategory::Clothing => write!(f, "clothing"),
            ProductCategory::GiftVoucher => write!(f, "gift_voucher"),
            ProductCategory::HeadGear => write!(f, "head_gear"),
        }
    }
}

impl std::str::FromStr for ProductCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clothing" => Ok(ProductCategory::Clothing),
            "gift_voucher" => Ok(ProductCategory::GiftVoucher),
            "head_gear" => Ok(ProductCategory::HeadGear),
            _ => Err(format!("Invalid product category: {}", s)),
        }
    }
}
