use bigdecimal::BigDecimal;
use num_traits::Zero;

use crate::domain::product::model::Product;

use super::model::GiftVoucher;

/// Non-fatal outcome of redeeming vouchers against a basket.
#[derive(Debug, Clone, PartialEq)]
pub enum RedemptionNotice {
    /// The basket contains gift-voucher products while vouchers are applied.
    GiftVoucherProductsInBasket,
    /// Voucher value left over after the basket was paid in full.
    UnspentBalance(BigDecimal),
}

impl std::fmt::Display for RedemptionNotice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RedemptionNotice::GiftVoucherProductsInBasket => write!(
                f,
                "Gift vouchers can only be redeemed against non gift voucher products."
            ),
            RedemptionNotice::UnspentBalance(balance) => write!(
                f,
                "You still have {} left on the gift voucher",
                format_amount(balance)
            ),
        }
    }
}

/// Total and notice produced by [`redeem`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Redemption {
    pub total: BigDecimal,
    pub notice: Option<RedemptionNotice>,
}

/// Formats a monetary amount with exactly two decimals.
pub fn format_amount(amount: &BigDecimal) -> String {
    let (cents, _) = amount.round(2).with_scale(2).as_bigint_and_exponent();
    let digits = cents.to_string();
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(unsigned) => ("-", unsigned),
        None => ("", digits.as_str()),
    };
    let padded = format!("{:0>3}", digits);
    let (units, fraction) = padded.split_at(padded.len() - 2);
    format!("{}{}.{}", sign, units, fraction)
}

/// Applies the vouchers to the products and returns the amount due.
///
/// Business rules:
/// - Gift-voucher products in the basket with vouchers applied -> vouchers are
///   ignored, every product is charged in full, conflict notice
/// - Vouchers worth more than the redeemable products -> total 0, notice with
///   the unspent balance
/// - Otherwise -> all products minus the vouchers, no notice
pub fn redeem(products: &[Product], vouchers: &[GiftVoucher]) -> Redemption {
    let (redeemable, gift_voucher_products): (Vec<&Product>, Vec<&Product>) =
        products.iter().partition(|p| p.is_redeemable());

    let redeemable_sum: BigDecimal = redeemable.iter().map(|p| &p.price).sum();
    let gift_voucher_products_sum: BigDecimal =
        gift_voucher_products.iter().map(|p| &p.price).sum();
    let voucher_sum: BigDecimal = vouchers.iter().map(|v| &v.value).sum();

    if gift_voucher_products_sum > BigDecimal::zero() && !vouchers.is_empty() {
        return Redemption {
            total: redeemable_sum + gift_voucher_products_sum,
            notice: Some(RedemptionNotice::GiftVoucherProductsInBasket),
        };
    }

    if voucher_sum > redeemable_sum {
        return Redemption {
            total: BigDecimal::zero(),
            notice: Some(RedemptionNotice::UnspentBalance(voucher_sum - redeemable_sum)),
        };
    }

    // Gift-voucher products only reach this point priced at zero or without vouchers.
    Redemption {
        total: redeemable_sum + gift_voucher_products_sum - voucher_sum,
        notice: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::value_objects::{ProductCategory, ProductId};
    use proptest::prelude::*;
    use std::str::FromStr;

    fn product(id: i32, price: i32, category: ProductCategory) -> Product {
        Product::from_catalog(
            ProductId::new(id),
            format!("product-{}", id),
            BigDecimal::from(price),
            category,
        )
    }

    fn voucher(value: i32) -> GiftVoucher {
        GiftVoucher::new("XXX-XXX", BigDecimal::from(value)).unwrap()
    }

    fn cents(value: u32) -> BigDecimal {
        BigDecimal::new(value.into(), 2)
    }

    #[test]
    fn should_return_zero_for_empty_basket() {
        let redemption = redeem(&[], &[]);

        assert_eq!(redemption.total, BigDecimal::zero());
        assert!(redemption.notice.is_none());
    }

    #[test]
    fn should_charge_gift_voucher_products_when_no_voucher_applied() {
        let products = [
            product(1, 30, ProductCategory::Clothing),
            product(2, 20, ProductCategory::GiftVoucher),
        ];

        let redemption = redeem(&products, &[]);

        assert_eq!(redemption.total, BigDecimal::from(50));
        assert!(redemption.notice.is_none());
    }

    #[test]
    fn should_ignore_vouchers_when_basket_holds_gift_voucher_products() {
        let products = [
            product(1, 30, ProductCategory::Clothing),
            product(2, 20, ProductCategory::GiftVoucher),
        ];

        let redemption = redeem(&products, &[voucher(5)]);

        assert_eq!(redemption.total, BigDecimal::from(50));
        assert_eq!(
            redemption.notice,
            Some(RedemptionNotice::GiftVoucherProductsInBasket)
        );
    }

    #[test]
    fn should_redeem_against_free_gift_voucher_products() {
        let products = [
            product(1, 30, ProductCategory::Clothing),
            product(2, 0, ProductCategory::GiftVoucher),
        ];

        let redemption = redeem(&products, &[voucher(10)]);

        assert_eq!(redemption.total, BigDecimal::from(20));
        assert!(redemption.notice.is_none());
    }

    #[test]
    fn should_report_unspent_balance_when_vouchers_exceed_redeemable_total() {
        let products = [product(1, 30, ProductCategory::HeadGear)];

        let redemption = redeem(&products, &[voucher(50), voucher(50)]);

        assert_eq!(redemption.total, BigDecimal::zero());
        assert_eq!(
            redemption.notice,
            Some(RedemptionNotice::UnspentBalance(BigDecimal::from(70)))
        );
    }

    #[test]
    fn should_not_report_balance_when_vouchers_match_total() {
        let products = [product(1, 30, ProductCategory::Clothing)];

        let redemption = redeem(&products, &[voucher(30)]);

        assert_eq!(redemption.total, BigDecimal::zero());
        assert!(redemption.notice.is_none());
    }

    #[test]
    fn should_format_notices_with_two_decimals() {
        let balance = RedemptionNotice::UnspentBalance(BigDecimal::from(20));
        let fractional =
            RedemptionNotice::UnspentBalance(BigDecimal::from_str("4.5").unwrap());

        assert_eq!(balance.to_string(), "You still have 20.00 left on the gift voucher");
        assert_eq!(
            fractional.to_string(),
            "You still have 4.50 left on the gift voucher"
        );
        assert_eq!(
            RedemptionNotice::GiftVoucherProductsInBasket.to_string(),
            "Gift vouchers can only be redeemed against non gift voucher products."
        );
    }

    #[test]
    fn should_round_amounts_to_cents() {
        assert_eq!(format_amount(&BigDecimal::from(205)), "205.00");
        assert_eq!(format_amount(&BigDecimal::from_str("19.999").unwrap()), "20.00");
        assert_eq!(format_amount(&BigDecimal::from_str("0.1").unwrap()), "0.10");
        assert_eq!(format_amount(&BigDecimal::from_str("0.05").unwrap()), "0.05");
        assert_eq!(format_amount(&BigDecimal::zero()), "0.00");
    }

    #[test]
    fn should_show_sub_cent_balance_as_zero_cents() {
        let products = [product(1, 30, ProductCategory::Clothing)];
        let voucher =
            GiftVoucher::new("XXX-XXX", BigDecimal::from_str("30.004").unwrap()).unwrap();

        let redemption = redeem(&products, &[voucher]);

        assert_eq!(redemption.total, BigDecimal::zero());
        assert_eq!(
            redemption.notice.map(|notice| notice.to_string()).as_deref(),
            Some("You still have 0.00 left on the gift voucher")
        );
    }

    proptest! {
        #[test]
        fn should_charge_every_product_when_no_voucher_applied(
            prices in prop::collection::vec((0u32..100_000, any::<bool>()), 0..8)
        ) {
            let products: Vec<Product> = prices
                .iter()
                .enumerate()
                .map(|(i, (price, gift))| {
                    let category = if *gift {
                        ProductCategory::GiftVoucher
                    } else {
                        ProductCategory::Clothing
                    };
                    Product::from_catalog(
                        ProductId::new(i as i32),
                        "item".to_string(),
                        cents(*price),
                        category,
                    )
                })
                .collect();
            let expected: BigDecimal = products.iter().map(|p| &p.price).sum();

            let redemption = redeem(&products, &[]);

            prop_assert_eq!(redemption.total, expected);
            prop_assert!(redemption.notice.is_none());
        }

        #[test]
        fn should_never_go_below_zero_and_report_exact_shortfall(
            prices in prop::collection::vec(0u32..100_000, 0..6),
            values in prop::collection::vec(0u32..100_000, 1..6)
        ) {
            let products: Vec<Product> = prices
                .iter()
                .enumerate()
                .map(|(i, price)| {
                    Product::from_catalog(
                        ProductId::new(i as i32),
                        "item".to_string(),
                        cents(*price),
                        ProductCategory::Clothing,
                    )
                })
                .collect();
            let vouchers: Vec<GiftVoucher> = values
                .iter()
                .map(|value| GiftVoucher::new("XXX-XXX", cents(*value)).unwrap())
                .collect();
            let redeemable: BigDecimal = products.iter().map(|p| &p.price).sum();
            let applied: BigDecimal = vouchers.iter().map(|v| &v.value).sum();

            let redemption = redeem(&products, &vouchers);

            prop_assert!(redemption.total >= BigDecimal::zero());
            if applied > redeemable {
                prop_assert_eq!(redemption.total, BigDecimal::zero());
                prop_assert_eq!(
                    redemption.notice,
                    Some(RedemptionNotice::UnspentBalance(applied - redeemable))
                );
            } else {
                prop_assert_eq!(redemption.total, redeemable - applied);
                prop_assert!(redemption.notice.is_none());
            }
        }
    }
}
