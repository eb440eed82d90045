//! Order History View-Model

use chrono::NaiveDate;

use crate::domain::date::ymd;
use crate::domain::line_item::LineItem;
use crate::domain::money::Money;
use crate::domain::status::{OrderStatus, PaymentStatus};
use crate::domain::summary::{DEFAULT_TAX_RATE, OrderSummary, unit_count};

/// Carrier tracking for a shipped order
#[derive(Debug, Clone, PartialEq)]
pub struct Tracking {
    pub carrier: String,
    pub number: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    /// Display number, e.g. `ORD-1042`
    pub number: String,
    pub placed_on: NaiveDate,
    pub status: OrderStatus,
    pub payment: PaymentStatus,
    pub items: Vec<LineItem>,
    pub shipping: Money,
    pub ship_to: String,
    pub tracking: Option<Tracking>,
}

impl Order {
    pub fn summary(&self) -> OrderSummary {
        OrderSummary::compute(&self.items, DEFAULT_TAX_RATE, self.shipping, Money::ZERO)
    }

    pub fn total(&self) -> Money {
        self.summary().total
    }

    pub fn unit_count(&self) -> u32 {
        unit_count(&self.items)
    }

    /// Cancelled and refunded orders do not count towards spend
    pub fn counts_towards_spend(&self) -> bool {
        !matches!(self.status, OrderStatus::Cancelled | OrderStatus::Refunded)
    }

    /// Orders still on their way may be cancelled
    pub fn can_cancel(&self) -> bool {
        matches!(self.status, OrderStatus::Pending | OrderStatus::Processing)
    }
}

/// Status filter shown as tabs above the table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OrderFilter {
    #[default]
    All,
    InProgress,
    Delivered,
    Closed,
}

impl OrderFilter {
    pub fn all() -> &'static [OrderFilter] {
        &[
            OrderFilter::All,
            OrderFilter::InProgress,
            OrderFilter::Delivered,
            OrderFilter::Closed,
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            OrderFilter::All => "All",
            OrderFilter::InProgress => "In progress",
            OrderFilter::Delivered => "Delivered",
            OrderFilter::Closed => "Cancelled",
        }
    }

    pub fn matches(self, status: OrderStatus) -> bool {
        match self {
            OrderFilter::All => true,
            OrderFilter::InProgress => matches!(
                status,
                OrderStatus::Pending | OrderStatus::Processing | OrderStatus::Shipped
            ),
            OrderFilter::Delivered => status == OrderStatus::Delivered,
            OrderFilter::Closed => {
                matches!(status, OrderStatus::Cancelled | OrderStatus::Refunded)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderHistoryProps {
    pub customer: String,
    pub orders: Vec<Order>,
}

impl OrderHistoryProps {
    /// Orders matching the filter, newest first
    pub fn filtered(&self, filter: OrderFilter) -> Vec<Order> {
        let mut orders: Vec<Order> = self
            .orders
            .iter()
            .filter(|order| filter.matches(order.status))
            .cloned()
            .collect();
        orders.sort_by(|a, b| b.placed_on.cmp(&a.placed_on));
        orders
    }

    pub fn count(&self, filter: OrderFilter) -> usize {
        self.orders
            .iter()
            .filter(|order| filter.matches(order.status))
            .count()
    }

    pub fn total_spent(&self) -> Money {
        self.orders
            .iter()
            .filter(|order| order.counts_towards_spend())
            .map(Order::total)
            .sum()
    }

    pub fn find(&self, number: &str) -> Option<&Order> {
        self.orders.iter().find(|order| order.number == number)
    }

    pub fn sample() -> Self {
        let ship_to = "Jordan Lee, 418 Harbor Street, Portland, OR 97204".to_string();
        Self {
            customer: "Jordan Lee".into(),
            orders: vec![
                Order {
                    number: "ORD-1048".into(),
                    placed_on: ymd(2024, 6, 2),
                    status: OrderStatus::Processing,
                    payment: PaymentStatus::Paid,
                    items: vec![
                        LineItem::new("sku-aurora", "Aurora Wireless Headphones", Money::from_cents(29999))
                            .variant("Midnight"),
                    ],
                    shipping: Money::ZERO,
                    ship_to: ship_to.clone(),
                    tracking: None,
                },
                Order {
                    number: "ORD-1042".into(),
                    placed_on: ymd(2024, 5, 21),
                    status: OrderStatus::Shipped,
                    payment: PaymentStatus::Paid,
                    items: vec![
                        LineItem::new("sku-trail", "Trail Runner Sneakers", Money::from_cents(14999))
                            .variant("Size 10"),
                        LineItem::new("sku-socks", "Merino Running Socks", Money::from_cents(1499))
                            .quantity(3),
                    ],
                    shipping: Money::from_cents(499),
                    ship_to: ship_to.clone(),
                    tracking: Some(Tracking {
                        carrier: "UPS".into(),
                        number: "1Z999AA10123456784".into(),
                        url: "https://www.ups.com/track?tracknum=1Z999AA10123456784".into(),
                    }),
                },
                Order {
                    number: "ORD-1031".into(),
                    placed_on: ymd(2024, 4, 30),
                    status: OrderStatus::Delivered,
                    payment: PaymentStatus::Paid,
                    items: vec![
                        LineItem::new("sku-pack", "Everyday Daypack", Money::from_cents(7999))
                            .original_price(Money::from_cents(9999)),
                    ],
                    shipping: Money::from_cents(499),
                    ship_to: ship_to.clone(),
                    tracking: None,
                },
                Order {
                    number: "ORD-1027".into(),
                    placed_on: ymd(2024, 4, 12),
                    status: OrderStatus::Pending,
                    payment: PaymentStatus::Pending,
                    items: vec![
                        LineItem::new("sku-bottle", "Insulated Bottle", Money::from_cents(2499))
                            .quantity(2),
                    ],
                    shipping: Money::from_cents(499),
                    ship_to: ship_to.clone(),
                    tracking: None,
                },
                Order {
                    number: "ORD-1019".into(),
                    placed_on: ymd(2024, 3, 18),
                    status: OrderStatus::Refunded,
                    payment: PaymentStatus::Refunded,
                    items: vec![LineItem::new("sku-lamp", "Desk Lamp", Money::from_cents(5900))],
                    shipping: Money::from_cents(499),
                    ship_to: ship_to.clone(),
                    tracking: None,
                },
                Order {
                    number: "ORD-1008".into(),
                    placed_on: ymd(2024, 2, 27),
                    status: OrderStatus::Cancelled,
                    payment: PaymentStatus::Failed,
                    items: vec![LineItem::new("sku-mug", "Ceramic Mug Set", Money::from_cents(3200))],
                    shipping: Money::from_cents(499),
                    ship_to,
                    tracking: None,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_total_includes_tax_and_shipping() {
        let props = OrderHistoryProps::sample();
        let order = props.find("ORD-1042").unwrap();
        // 149.99 + 3 × 14.99 = 194.96; tax 15.60; shipping 4.99
        assert_eq!(order.summary().subtotal.to_string(), "$194.96");
        assert_eq!(order.total().to_string(), "$215.55");
        assert_eq!(order.unit_count(), 4);
    }

    #[test]
    fn filters_partition_by_status() {
        let props = OrderHistoryProps::sample();
        assert_eq!(props.count(OrderFilter::All), 6);
        assert_eq!(props.count(OrderFilter::InProgress), 3);
        assert_eq!(props.count(OrderFilter::Delivered), 1);
        assert_eq!(props.count(OrderFilter::Closed), 2);
    }

    #[test]
    fn filtered_orders_are_newest_first() {
        let props = OrderHistoryProps::sample();
        let numbers: Vec<_> = props
            .filtered(OrderFilter::InProgress)
            .into_iter()
            .map(|order| order.number)
            .collect();
        assert_eq!(numbers, ["ORD-1048", "ORD-1042", "ORD-1027"]);
    }

    #[test]
    fn spend_excludes_cancelled_and_refunded() {
        let props = OrderHistoryProps::sample();
        let expected: Money = props
            .orders
            .iter()
            .filter(|order| order.counts_towards_spend())
            .map(Order::total)
            .sum();
        assert_eq!(props.total_spent(), expected);
        assert!(props.total_spent() < props.orders.iter().map(Order::total).sum::<Money>());
    }

    #[test]
    fn only_open_orders_can_be_cancelled() {
        let props = OrderHistoryProps::sample();
        assert!(props.find("ORD-1027").unwrap().can_cancel());
        assert!(!props.find("ORD-1042").unwrap().can_cancel());
    }

    #[test]
    fn tracking_is_optional() {
        let props = OrderHistoryProps::sample();
        assert!(props.find("ORD-1042").unwrap().tracking.is_some());
        assert!(props.find("ORD-1031").unwrap().tracking.is_none());
    }
}
