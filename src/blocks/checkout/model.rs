//! Checkout View-Model

use rust_decimal::Decimal;

use crate::domain::line_item::LineItem;
use crate::domain::money::Money;
use crate::domain::summary::{DEFAULT_TAX_RATE, OrderSummary, SummaryLine};

#[derive(Debug, Clone, PartialEq)]
pub struct ContactInfo {
    pub email: String,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShippingAddress {
    pub name: String,
    pub line1: String,
    pub line2: Option<String>,
    pub city: String,
    pub region: String,
    pub postal_code: String,
    pub country: String,
}

impl ShippingAddress {
    /// Postal lines in display order, skipping the empty second line
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![self.name.clone(), self.line1.clone()];
        lines.extend(self.line2.clone());
        lines.push(format!("{}, {} {}", self.city, self.region, self.postal_code));
        lines.push(self.country.clone());
        lines
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryMethod {
    pub id: String,
    pub label: String,
    /// Delivery estimate, e.g. "4-10 business days"
    pub estimate: String,
    pub cost: Money,
}

impl DeliveryMethod {
    pub fn cost_label(&self) -> String {
        if self.cost.is_zero() {
            "Free".to_string()
        } else {
            self.cost.to_string()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    Card,
    PayPal,
    ApplePay,
    BankTransfer,
}

impl PaymentMethod {
    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::Card => "Credit card",
            PaymentMethod::PayPal => "PayPal",
            PaymentMethod::ApplePay => "Apple Pay",
            PaymentMethod::BankTransfer => "Bank transfer",
        }
    }

    /// Stable value used by the select
    pub fn value(self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::PayPal => "paypal",
            PaymentMethod::ApplePay => "apple-pay",
            PaymentMethod::BankTransfer => "bank-transfer",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        [
            PaymentMethod::Card,
            PaymentMethod::PayPal,
            PaymentMethod::ApplePay,
            PaymentMethod::BankTransfer,
        ]
        .into_iter()
        .find(|method| method.value() == value)
    }

    /// Card fields are shown only for card payments
    pub fn needs_card_details(self) -> bool {
        matches!(self, PaymentMethod::Card)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutProps {
    pub contact: ContactInfo,
    pub address: ShippingAddress,
    pub delivery_methods: Vec<DeliveryMethod>,
    pub payment_methods: Vec<PaymentMethod>,
    pub items: Vec<LineItem>,
    pub instructions: Option<String>,
    pub tax_rate: Decimal,
}

impl CheckoutProps {
    pub fn shows_instructions(&self) -> bool {
        self.instructions.is_some()
    }

    /// Shipping for the chosen delivery method; zero when out of range
    pub fn shipping_for(&self, delivery_ix: usize) -> Money {
        self.delivery_methods
            .get(delivery_ix)
            .map_or(Money::ZERO, |method| method.cost)
    }

    pub fn summary(&self, delivery_ix: usize) -> OrderSummary {
        OrderSummary::compute(
            &self.items,
            self.tax_rate,
            self.shipping_for(delivery_ix),
            Money::ZERO,
        )
    }

    pub fn summary_lines(&self, delivery_ix: usize) -> Vec<SummaryLine> {
        self.summary(delivery_ix).lines()
    }

    pub fn sample() -> Self {
        Self {
            contact: ContactInfo {
                email: "olivia.martin@example.com".into(),
                phone: Some("+1 (555) 201-7788".into()),
            },
            address: ShippingAddress {
                name: "Olivia Martin".into(),
                line1: "1600 Market Street".into(),
                line2: Some("Apt 12B".into()),
                city: "San Francisco".into(),
                region: "CA".into(),
                postal_code: "94103".into(),
                country: "United States".into(),
            },
            delivery_methods: vec![
                DeliveryMethod {
                    id: "standard".into(),
                    label: "Standard".into(),
                    estimate: "4-10 business days".into(),
                    cost: Money::from_cents(499),
                },
                DeliveryMethod {
                    id: "express".into(),
                    label: "Express".into(),
                    estimate: "2-5 business days".into(),
                    cost: Money::from_cents(1999),
                },
                DeliveryMethod {
                    id: "pickup".into(),
                    label: "Store pickup".into(),
                    estimate: "Ready tomorrow".into(),
                    cost: Money::ZERO,
                },
            ],
            payment_methods: vec![
                PaymentMethod::Card,
                PaymentMethod::PayPal,
                PaymentMethod::ApplePay,
                PaymentMethod::BankTransfer,
            ],
            items: vec![
                LineItem::new("sku-trail", "Trail Runner Sneakers", Money::from_cents(14999))
                    .variant("Size 9 / Slate"),
                LineItem::new("sku-pack", "Everyday Daypack", Money::from_cents(7999))
                    .variant("Olive")
                    .original_price(Money::from_cents(9999)),
            ],
            instructions: Some("Leave the parcel with the front desk.".into()),
            tax_rate: DEFAULT_TAX_RATE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn express_delivery_totals() {
        let props = CheckoutProps::sample();
        let summary = props.summary(1);
        assert_eq!(summary.subtotal.to_string(), "$229.98");
        assert_eq!(summary.shipping.to_string(), "$19.99");
        assert_eq!(summary.tax.to_string(), "$18.40");
        assert_eq!(summary.total.to_string(), "$268.37");
    }

    #[test]
    fn tax_ignores_shipping() {
        let props = CheckoutProps::sample();
        assert_eq!(props.summary(0).tax, props.summary(2).tax);
        assert_eq!(props.summary(2).shipping, Money::ZERO);
        assert_eq!(props.delivery_methods[2].cost_label(), "Free");
    }

    #[test]
    fn unknown_delivery_method_ships_free() {
        let props = CheckoutProps::sample();
        assert_eq!(props.shipping_for(9), Money::ZERO);
    }

    #[test]
    fn instructions_row_follows_the_optional_field() {
        let mut props = CheckoutProps::sample();
        assert!(props.shows_instructions());
        props.instructions = None;
        assert!(!props.shows_instructions());
    }

    #[test]
    fn address_lines_skip_missing_second_line() {
        let mut address = CheckoutProps::sample().address;
        assert_eq!(address.lines().len(), 5);
        address.line2 = None;
        assert_eq!(
            address.lines(),
            [
                "Olivia Martin",
                "1600 Market Street",
                "San Francisco, CA 94103",
                "United States"
            ]
        );
    }

    #[test]
    fn payment_values_round_trip() {
        for method in CheckoutProps::sample().payment_methods {
            assert_eq!(PaymentMethod::from_value(method.value()), Some(method));
        }
        assert!(PaymentMethod::Card.needs_card_details());
        assert!(!PaymentMethod::PayPal.needs_card_details());
    }
}
