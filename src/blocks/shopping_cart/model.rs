//! Shopping Cart View-Model

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::domain::line_item::LineItem;
use crate::domain::money::Money;
use crate::domain::progress::percent_of_target;
use crate::domain::status::StockStatus;
use crate::domain::summary::{DEFAULT_TAX_RATE, OrderSummary, SummaryLine, subtotal, unit_count};

/// A promo code already applied to the cart
#[derive(Debug, Clone, PartialEq)]
pub struct PromoCode {
    pub code: String,
    pub discount: Money,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingCartProps {
    pub items: Vec<LineItem>,
    pub promo: Option<PromoCode>,
    /// Standard shipping charge below the free-shipping threshold
    pub shipping: Money,
    pub free_shipping_threshold: Money,
    pub tax_rate: Decimal,
}

impl ShoppingCartProps {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn unit_count(&self) -> u32 {
        unit_count(&self.items)
    }

    pub fn qualifies_for_free_shipping(&self) -> bool {
        subtotal(&self.items) >= self.free_shipping_threshold
    }

    /// Shipping actually charged
    pub fn shipping_charge(&self) -> Money {
        if self.is_empty() || self.qualifies_for_free_shipping() {
            Money::ZERO
        } else {
            self.shipping
        }
    }

    /// Amount still needed for free shipping, `None` once reached
    pub fn amount_to_free_shipping(&self) -> Option<Money> {
        (!self.qualifies_for_free_shipping())
            .then(|| self.free_shipping_threshold - subtotal(&self.items))
    }

    pub fn free_shipping_progress(&self) -> f32 {
        percent_of_target(
            subtotal(&self.items).to_f64(),
            self.free_shipping_threshold.to_f64(),
        )
    }

    /// Promo discount actually taken, never more than the subtotal
    pub fn applied_discount(&self) -> Money {
        self.promo.as_ref().map_or(Money::ZERO, |promo| {
            promo.discount.min(subtotal(&self.items)).max(Money::ZERO)
        })
    }

    pub fn summary(&self) -> OrderSummary {
        OrderSummary::compute(
            &self.items,
            self.tax_rate,
            self.shipping_charge(),
            self.applied_discount(),
        )
    }

    pub fn summary_lines(&self) -> Vec<SummaryLine> {
        self.summary().lines()
    }

    pub fn sample() -> Self {
        Self {
            items: vec![
                LineItem::new("sku-aurora", "Aurora Wireless Headphones", Money::from_cents(29999))
                    .variant("Midnight Black")
                    .original_price(Money::from_cents(34999))
                    .image("https://images.unsplash.com/photo-1505740420928-5e560c06d30e"),
                LineItem::new("sku-lumen", "Lumen Smart Watch", Money::from_cents(39999))
                    .variant("44 mm / Silver")
                    .stock(StockStatus::LowStock),
                LineItem::new("sku-cable", "Braided USB-C Cable", Money::from_cents(1999))
                    .variant("2 m")
                    .quantity(2),
            ],
            promo: Some(PromoCode {
                code: "SPRING10".into(),
                discount: Money::from_cents(1000),
            }),
            shipping: Money::new(dec!(9.99)),
            free_shipping_threshold: Money::from_cents(100_000),
            tax_rate: DEFAULT_TAX_RATE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headphones_and_watch_subtotal() {
        let props = ShoppingCartProps::sample();
        assert_eq!(subtotal(&props.items[..2]).to_string(), "$699.98");
    }

    #[test]
    fn sample_summary_reconciles() {
        let props = ShoppingCartProps::sample();
        let summary = props.summary();
        assert_eq!(summary.subtotal.to_string(), "$739.96");
        assert_eq!(summary.savings.to_string(), "$50.00");
        assert_eq!(summary.shipping, props.shipping);
        assert_eq!(summary.tax.to_string(), "$59.20");
        assert_eq!(
            summary.total,
            summary.subtotal + summary.tax - summary.discount + summary.shipping
        );
        assert_eq!(props.unit_count(), 4);
    }

    #[test]
    fn free_shipping_applies_at_threshold() {
        let mut props = ShoppingCartProps::sample();
        assert_eq!(
            props.amount_to_free_shipping().map(|m| m.to_string()),
            Some("$260.04".to_string())
        );
        props.items[0] = props.items[0].clone().quantity(2);
        assert!(props.qualifies_for_free_shipping());
        assert_eq!(props.shipping_charge(), Money::ZERO);
        assert_eq!(props.free_shipping_progress(), 100.0);
        assert!(props.amount_to_free_shipping().is_none());
    }

    #[test]
    fn no_promo_means_no_discount_line() {
        let mut props = ShoppingCartProps::sample();
        props.promo = None;
        let lines = props.summary_lines();
        assert!(!lines.iter().any(|l| l.label == "Discount"));
    }

    #[test]
    fn empty_cart_ships_free_and_totals_zero() {
        let props = ShoppingCartProps {
            items: Vec::new(),
            promo: None,
            ..ShoppingCartProps::sample()
        };
        assert!(props.is_empty());
        assert_eq!(props.summary().total, Money::ZERO);
    }

    #[test]
    fn promo_on_empty_cart_keeps_total_at_zero() {
        let props = ShoppingCartProps {
            items: Vec::new(),
            ..ShoppingCartProps::sample()
        };
        assert!(props.promo.is_some());
        assert_eq!(props.applied_discount(), Money::ZERO);
        assert_eq!(props.summary().total, Money::ZERO);
        assert!(!props.summary_lines().iter().any(|l| l.label == "Discount"));
    }

    #[test]
    fn promo_is_capped_at_the_subtotal() {
        let props = ShoppingCartProps {
            items: vec![LineItem::new("sku-sticker", "Sticker Pack", Money::from_cents(500))],
            ..ShoppingCartProps::sample()
        };
        assert_eq!(props.applied_discount().to_string(), "$5.00");
        let summary = props.summary();
        assert_eq!(summary.total, summary.tax + summary.shipping);
        assert!(summary.total >= Money::ZERO);
    }
}
