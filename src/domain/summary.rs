//! Summary - Order Totals Derived From Line Items
//!
//! Totals are recomputed from the item list on every render; nothing is
//! cached. Tax is charged on the subtotal alone.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::domain::line_item::LineItem;
use crate::domain::money::Money;

/// Default sales tax rate
pub const DEFAULT_TAX_RATE: Decimal = dec!(0.08);

/// How a summary line is emphasised
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryVariant {
    /// Plain label/value line
    Default,
    /// Money taken off, rendered negative in a success tone
    Discount,
    /// Grand total, rendered bold
    Total,
}

/// One label/value line in an order summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLine {
    pub label: String,
    pub value: String,
    pub variant: SummaryVariant,
}

impl SummaryLine {
    pub fn new(label: impl Into<String>, value: impl Into<String>, variant: SummaryVariant) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            variant,
        }
    }
}

/// Totals for a list of line items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderSummary {
    /// Sum of line totals
    pub subtotal: Money,
    /// Markdown savings, informational only
    pub savings: Money,
    /// Promo or coupon discount taken off the total
    pub discount: Money,
    /// Shipping charge, zero means free
    pub shipping: Money,
    /// `subtotal × rate`, rounded to cents
    pub tax: Money,
    /// `subtotal + tax - discount + shipping`
    pub total: Money,
}

impl OrderSummary {
    /// Compute totals from line items
    pub fn compute(items: &[LineItem], tax_rate: Decimal, shipping: Money, discount: Money) -> Self {
        let subtotal = subtotal(items);
        let tax = subtotal.apply_rate(tax_rate);
        Self {
            subtotal,
            savings: savings(items),
            discount,
            shipping,
            tax,
            total: subtotal + tax - discount + shipping,
        }
    }

    /// Summary lines in display order
    ///
    /// The savings and discount lines are omitted when zero.
    pub fn lines(&self) -> Vec<SummaryLine> {
        let mut lines = vec![SummaryLine::new(
            "Subtotal",
            self.subtotal.to_string(),
            SummaryVariant::Default,
        )];

        if self.savings.is_positive() {
            lines.push(SummaryLine::new(
                "You save",
                self.savings.to_string(),
                SummaryVariant::Discount,
            ));
        }

        if self.discount.is_positive() {
            lines.push(SummaryLine::new(
                "Discount",
                format!("-{}", self.discount),
                SummaryVariant::Discount,
            ));
        }

        let shipping = if self.shipping.is_zero() {
            "Free".to_string()
        } else {
            self.shipping.to_string()
        };
        lines.push(SummaryLine::new("Shipping", shipping, SummaryVariant::Default));
        lines.push(SummaryLine::new("Tax", self.tax.to_string(), SummaryVariant::Default));
        lines.push(SummaryLine::new("Total", self.total.to_string(), SummaryVariant::Total));
        lines
    }
}

/// `Σ price × quantity`
pub fn subtotal(items: &[LineItem]) -> Money {
    items.iter().map(LineItem::line_total).sum()
}

/// `Σ (original - price) × quantity` over items that carry an original price
pub fn savings(items: &[LineItem]) -> Money {
    items.iter().map(LineItem::savings).sum()
}

/// Total number of units across all lines
pub fn unit_count(items: &[LineItem]) -> u32 {
    items.iter().map(|item| item.quantity).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, price: Decimal, quantity: u32) -> LineItem {
        LineItem::new(id, id, Money::new(price)).quantity(quantity)
    }

    #[test]
    fn subtotal_of_two_items() {
        let items = [item("a", dec!(299.99), 1), item("b", dec!(399.99), 1)];
        assert_eq!(subtotal(&items).to_string(), "$699.98");
    }

    #[test]
    fn total_is_subtotal_plus_tax_minus_discount_plus_shipping() {
        let items = [item("a", dec!(129.99), 1), item("b", dec!(49.99), 2)];
        let summary =
            OrderSummary::compute(&items, DEFAULT_TAX_RATE, Money::new(dec!(19.99)), Money::ZERO);

        assert_eq!(summary.subtotal, Money::new(dec!(229.97)));
        assert_eq!(summary.tax, Money::new(dec!(18.40)));
        assert_eq!(
            summary.total,
            summary.subtotal + summary.tax - summary.discount + summary.shipping
        );
    }

    #[test]
    fn tax_is_charged_on_subtotal_alone() {
        let items = [item("a", dec!(229.98), 1)];
        let summary =
            OrderSummary::compute(&items, DEFAULT_TAX_RATE, Money::new(dec!(19.99)), Money::ZERO);

        assert_eq!(summary.tax.to_string(), "$18.40");
        assert_eq!(summary.total.to_string(), "$268.37");
    }

    #[test]
    fn discount_reduces_total() {
        let items = [item("a", dec!(100), 1)];
        let summary =
            OrderSummary::compute(&items, DEFAULT_TAX_RATE, Money::ZERO, Money::new(dec!(10)));

        assert_eq!(summary.total, Money::new(dec!(98)));
    }

    #[test]
    fn lines_omit_zero_savings_and_discount() {
        let items = [item("a", dec!(20), 1)];
        let summary = OrderSummary::compute(&items, DEFAULT_TAX_RATE, Money::ZERO, Money::ZERO);
        let labels: Vec<_> = summary.lines().into_iter().map(|l| l.label).collect();

        assert_eq!(labels, vec!["Subtotal", "Shipping", "Tax", "Total"]);
        assert_eq!(summary.lines()[1].value, "Free");
    }

    #[test]
    fn lines_include_savings_when_marked_down() {
        let items = [item("a", dec!(80), 1).original_price(Money::new(dec!(100)))];
        let summary =
            OrderSummary::compute(&items, DEFAULT_TAX_RATE, Money::new(dec!(5)), Money::new(dec!(3)));
        let lines = summary.lines();

        assert_eq!(lines[1], SummaryLine::new("You save", "$20.00", SummaryVariant::Discount));
        assert_eq!(lines[2], SummaryLine::new("Discount", "-$3.00", SummaryVariant::Discount));
        assert_eq!(lines.last().map(|l| l.variant), Some(SummaryVariant::Total));
    }

    #[test]
    fn unit_count_sums_quantities() {
        let items = [item("a", dec!(1), 2), item("b", dec!(1), 3)];
        assert_eq!(unit_count(&items), 5);
    }
}
