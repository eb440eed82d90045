//! LineItem - A Product Line in a Cart or Order

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::money::Money;
use crate::domain::status::StockStatus;

/// A product line with unit price and quantity
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    /// Stable identifier
    pub id: String,
    /// Product name
    pub name: String,
    /// Variant description ("Black / Large")
    pub variant: Option<String>,
    /// Unit price actually charged
    pub price: Money,
    /// Unit price before markdown
    pub original_price: Option<Money>,
    /// Quantity, at least 1
    pub quantity: u32,
    /// Image reference
    pub image: Option<String>,
    /// Inventory status
    pub stock: StockStatus,
}

impl LineItem {
    /// Create a line item with quantity 1 and no optional fields
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Money) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            variant: None,
            price,
            original_price: None,
            quantity: 1,
            image: None,
            stock: StockStatus::InStock,
        }
    }

    pub fn variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = Some(variant.into());
        self
    }

    pub fn original_price(mut self, original: Money) -> Self {
        self.original_price = Some(original);
        self
    }

    /// Set the quantity, clamped to at least 1
    pub fn quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity.max(1);
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn stock(mut self, stock: StockStatus) -> Self {
        self.stock = stock;
        self
    }

    /// `price × quantity`
    pub fn line_total(&self) -> Money {
        self.price * self.quantity
    }

    /// `(original_price - price) × quantity`, zero without an original price
    pub fn savings(&self) -> Money {
        self.original_price
            .map(|original| (original - self.price) * self.quantity)
            .unwrap_or(Money::ZERO)
    }

    /// Markdown as a whole percentage of the original price
    ///
    /// `None` when there is no original price or it is not above the price.
    pub fn discount_percent(&self) -> Option<u32> {
        discount_percent(self.price, self.original_price)
    }
}

/// Whole-percent markdown of `price` relative to `original`
pub fn discount_percent(price: Money, original: Option<Money>) -> Option<u32> {
    let original = original?;
    if original <= price || !original.is_positive() {
        return None;
    }
    let pct = (original.amount() - price.amount()) / original.amount() * Decimal::ONE_HUNDRED;
    pct.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn line_total_multiplies_quantity() {
        let item = LineItem::new("a", "Headphones", Money::new(dec!(149.50))).quantity(3);
        assert_eq!(item.line_total(), Money::new(dec!(448.50)));
    }

    #[test]
    fn savings_only_with_original_price() {
        let plain = LineItem::new("a", "Lamp", Money::new(dec!(40))).quantity(2);
        assert_eq!(plain.savings(), Money::ZERO);
        assert_eq!(plain.discount_percent(), None);

        let marked = plain.original_price(Money::new(dec!(50)));
        assert_eq!(marked.savings(), Money::new(dec!(20)));
        assert_eq!(marked.discount_percent(), Some(20));
    }

    #[test]
    fn quantity_never_zero() {
        let item = LineItem::new("a", "Mug", Money::new(dec!(9))).quantity(0);
        assert_eq!(item.quantity, 1);
    }

    #[test]
    fn no_discount_when_original_not_higher() {
        assert_eq!(
            discount_percent(Money::new(dec!(10)), Some(Money::new(dec!(10)))),
            None
        );
        assert_eq!(
            discount_percent(Money::new(dec!(299.99)), Some(Money::new(dec!(399.99)))),
            Some(25)
        );
    }
}
