//! Gift Planner View-Model
//!
//! Each recipient owns its gift list; budget figures are derived from it.

use chrono::NaiveDate;

use crate::domain::date::ymd;
use crate::domain::money::Money;
use crate::domain::progress::percent_of_target;

#[derive(Debug, Clone, PartialEq)]
pub struct GiftItem {
    pub id: String,
    pub name: String,
    pub store: String,
    pub price: Money,
    pub purchased: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GiftRecipient {
    pub id: String,
    pub name: String,
    pub relationship: String,
    pub occasion: String,
    pub occasion_date: NaiveDate,
    pub budget: Money,
    pub items: Vec<GiftItem>,
    pub notes: Option<String>,
}

impl GiftRecipient {
    /// Sum of every planned gift
    pub fn planned_total(&self) -> Money {
        self.items.iter().map(|item| item.price).sum()
    }

    pub fn purchased_total(&self) -> Money {
        self.items
            .iter()
            .filter(|item| item.purchased)
            .map(|item| item.price)
            .sum()
    }

    pub fn purchased_count(&self) -> usize {
        self.items.iter().filter(|item| item.purchased).count()
    }

    /// Planned spend as a percentage of budget, clamped to 100
    pub fn budget_progress(&self) -> f32 {
        percent_of_target(self.planned_total().to_f64(), self.budget.to_f64())
    }

    pub fn over_budget(&self) -> bool {
        self.planned_total() > self.budget
    }

    /// Budget left after planned gifts; zero once over budget
    pub fn remaining(&self) -> Money {
        if self.over_budget() {
            Money::ZERO
        } else {
            self.budget - self.planned_total()
        }
    }

    pub fn shows_notes(&self) -> bool {
        self.notes.is_some()
    }

    pub fn is_complete(&self) -> bool {
        !self.items.is_empty() && self.purchased_count() == self.items.len()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GiftPlannerProps {
    pub title: String,
    pub recipients: Vec<GiftRecipient>,
}

impl GiftPlannerProps {
    pub fn total_budget(&self) -> Money {
        self.recipients.iter().map(|recipient| recipient.budget).sum()
    }

    pub fn total_planned(&self) -> Money {
        self.recipients.iter().map(GiftRecipient::planned_total).sum()
    }

    pub fn overall_progress(&self) -> f32 {
        percent_of_target(self.total_planned().to_f64(), self.total_budget().to_f64())
    }

    pub fn over_budget_count(&self) -> usize {
        self.recipients
            .iter()
            .filter(|recipient| recipient.over_budget())
            .count()
    }

    pub fn gift_count(&self) -> usize {
        self.recipients.iter().map(|recipient| recipient.items.len()).sum()
    }

    pub fn sample() -> Self {
        Self {
            title: "Holiday gifts 2024".into(),
            recipients: vec![
                GiftRecipient {
                    id: "mom".into(),
                    name: "Elena Lee".into(),
                    relationship: "Mom".into(),
                    occasion: "Christmas".into(),
                    occasion_date: ymd(2024, 12, 25),
                    budget: Money::from_cents(25_000),
                    items: vec![
                        GiftItem {
                            id: "cashmere".into(),
                            name: "Cashmere scarf".into(),
                            store: "Nordline".into(),
                            price: Money::from_cents(12_900),
                            purchased: true,
                        },
                        GiftItem {
                            id: "tea".into(),
                            name: "Loose leaf tea sampler".into(),
                            store: "Leaf & Co".into(),
                            price: Money::from_cents(4_500),
                            purchased: false,
                        },
                    ],
                    notes: Some("Prefers neutral colors. Allergic to wool blends.".into()),
                },
                GiftRecipient {
                    id: "sam".into(),
                    name: "Sam Patel".into(),
                    relationship: "Partner".into(),
                    occasion: "Christmas".into(),
                    occasion_date: ymd(2024, 12, 25),
                    budget: Money::from_cents(30_000),
                    items: vec![
                        GiftItem {
                            id: "headphones".into(),
                            name: "Aurora Wireless Headphones".into(),
                            store: "Storefront".into(),
                            price: Money::from_cents(29_999),
                            purchased: false,
                        },
                        GiftItem {
                            id: "vinyl".into(),
                            name: "Limited edition vinyl".into(),
                            store: "Groove Records".into(),
                            price: Money::from_cents(3_800),
                            purchased: false,
                        },
                    ],
                    notes: None,
                },
                GiftRecipient {
                    id: "maya".into(),
                    name: "Maya Lee".into(),
                    relationship: "Niece".into(),
                    occasion: "Birthday".into(),
                    occasion_date: ymd(2024, 12, 9),
                    budget: Money::from_cents(6_000),
                    items: vec![GiftItem {
                        id: "puzzle".into(),
                        name: "1000-piece space puzzle".into(),
                        store: "Toy Harbor".into(),
                        price: Money::from_cents(2_499),
                        purchased: true,
                    }],
                    notes: Some("Turning 9. Loves astronomy.".into()),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipient(id: &str) -> GiftRecipient {
        GiftPlannerProps::sample()
            .recipients
            .into_iter()
            .find(|recipient| recipient.id == id)
            .unwrap()
    }

    #[test]
    fn planned_and_purchased_totals() {
        let mom = recipient("mom");
        assert_eq!(mom.planned_total().to_string(), "$174.00");
        assert_eq!(mom.purchased_total().to_string(), "$129.00");
        assert_eq!(mom.remaining().to_string(), "$76.00");
        assert!(!mom.over_budget());
    }

    #[test]
    fn over_budget_clamps_progress_and_remaining() {
        let sam = recipient("sam");
        assert!(sam.over_budget());
        assert_eq!(sam.budget_progress(), 100.0);
        assert_eq!(sam.remaining(), Money::ZERO);
    }

    #[test]
    fn notes_are_optional() {
        assert!(recipient("mom").shows_notes());
        assert!(!recipient("sam").shows_notes());
    }

    #[test]
    fn completion_requires_every_gift_purchased() {
        assert!(recipient("maya").is_complete());
        assert!(!recipient("mom").is_complete());

        let mut empty = recipient("maya");
        empty.items.clear();
        assert!(!empty.is_complete());
    }

    #[test]
    fn plan_totals() {
        let props = GiftPlannerProps::sample();
        assert_eq!(props.total_budget().to_string(), "$610.00");
        assert_eq!(props.total_planned().to_string(), "$536.98");
        assert_eq!(props.over_budget_count(), 1);
        assert_eq!(props.gift_count(), 5);
    }
}
