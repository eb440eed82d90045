//! Support Tickets View-Model

use chrono::NaiveDate;

use crate::domain::date::ymd;
use crate::domain::status::{TicketPriority, TicketStatus};

/// Shown in place of a missing assignee
pub const UNASSIGNED: &str = "Unassigned";

#[derive(Debug, Clone, PartialEq)]
pub struct TicketMessage {
    pub author: String,
    pub body: String,
    pub sent_on: NaiveDate,
    /// `false` for replies from the support team
    pub from_customer: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub id: String,
    pub subject: String,
    pub customer: String,
    pub category: String,
    pub priority: TicketPriority,
    pub status: TicketStatus,
    pub assignee: Option<String>,
    pub opened_on: NaiveDate,
    pub messages: Vec<TicketMessage>,
}

impl Ticket {
    pub fn assignee_label(&self) -> &str {
        self.assignee.as_deref().unwrap_or(UNASSIGNED)
    }

    /// Open and in-progress tickets still need work
    pub fn is_active(&self) -> bool {
        matches!(self.status, TicketStatus::Open | TicketStatus::InProgress)
    }

    pub fn last_activity(&self) -> NaiveDate {
        self.messages
            .iter()
            .map(|message| message.sent_on)
            .max()
            .unwrap_or(self.opened_on)
    }

    /// A reply from the team is expected when the customer spoke last
    pub fn awaiting_reply(&self) -> bool {
        self.is_active()
            && self
                .messages
                .last()
                .is_some_and(|message| message.from_customer)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SupportTicketsProps {
    pub tickets: Vec<Ticket>,
}

impl SupportTicketsProps {
    /// Active tickets at the given priority
    pub fn count_by_priority(&self, priority: TicketPriority) -> usize {
        self.tickets
            .iter()
            .filter(|ticket| ticket.is_active() && ticket.priority == priority)
            .count()
    }

    pub fn active_count(&self) -> usize {
        self.tickets.iter().filter(|ticket| ticket.is_active()).count()
    }

    pub fn unassigned_count(&self) -> usize {
        self.tickets
            .iter()
            .filter(|ticket| ticket.is_active() && ticket.assignee.is_none())
            .count()
    }

    /// Active tickets first, then highest priority, then most recent activity
    pub fn sorted(&self) -> Vec<Ticket> {
        let mut tickets = self.tickets.clone();
        tickets.sort_by(|a, b| {
            b.is_active()
                .cmp(&a.is_active())
                .then(b.priority.cmp(&a.priority))
                .then(b.last_activity().cmp(&a.last_activity()))
        });
        tickets
    }

    pub fn sample() -> Self {
        Self {
            tickets: vec![
                Ticket {
                    id: "TCK-2041".into(),
                    subject: "Charged twice for order ORD-1042".into(),
                    customer: "Jordan Lee".into(),
                    category: "Billing".into(),
                    priority: TicketPriority::Urgent,
                    status: TicketStatus::Open,
                    assignee: None,
                    opened_on: ymd(2024, 6, 3),
                    messages: vec![TicketMessage {
                        author: "Jordan Lee".into(),
                        body: "My card shows two charges of $215.55 for the same order. Please refund one.".into(),
                        sent_on: ymd(2024, 6, 3),
                        from_customer: true,
                    }],
                },
                Ticket {
                    id: "TCK-2038".into(),
                    subject: "Package marked delivered but not received".into(),
                    customer: "Priya Raman".into(),
                    category: "Shipping".into(),
                    priority: TicketPriority::High,
                    status: TicketStatus::InProgress,
                    assignee: Some("Marcus Chen".into()),
                    opened_on: ymd(2024, 5, 30),
                    messages: vec![
                        TicketMessage {
                            author: "Priya Raman".into(),
                            body: "Tracking says delivered yesterday but nothing arrived.".into(),
                            sent_on: ymd(2024, 5, 30),
                            from_customer: true,
                        },
                        TicketMessage {
                            author: "Marcus Chen".into(),
                            body: "Sorry about that. I've opened a claim with the carrier and will update you within 48 hours.".into(),
                            sent_on: ymd(2024, 5, 31),
                            from_customer: false,
                        },
                    ],
                },
                Ticket {
                    id: "TCK-2035".into(),
                    subject: "How do I change my shipping address?".into(),
                    customer: "Alex Moreno".into(),
                    category: "Account".into(),
                    priority: TicketPriority::Low,
                    status: TicketStatus::Open,
                    assignee: None,
                    opened_on: ymd(2024, 5, 28),
                    messages: vec![TicketMessage {
                        author: "Alex Moreno".into(),
                        body: "I moved last week and need to update my default address.".into(),
                        sent_on: ymd(2024, 5, 28),
                        from_customer: true,
                    }],
                },
                Ticket {
                    id: "TCK-2029".into(),
                    subject: "Discount code SPRING10 not applying".into(),
                    customer: "Sam Patel".into(),
                    category: "Promotions".into(),
                    priority: TicketPriority::Medium,
                    status: TicketStatus::InProgress,
                    assignee: Some("Dana Whitfield".into()),
                    opened_on: ymd(2024, 5, 24),
                    messages: vec![
                        TicketMessage {
                            author: "Sam Patel".into(),
                            body: "The checkout says the code is invalid.".into(),
                            sent_on: ymd(2024, 5, 24),
                            from_customer: true,
                        },
                        TicketMessage {
                            author: "Dana Whitfield".into(),
                            body: "The code requires a $50 minimum. Could you confirm your cart total?".into(),
                            sent_on: ymd(2024, 5, 25),
                            from_customer: false,
                        },
                        TicketMessage {
                            author: "Sam Patel".into(),
                            body: "It's $64.98 before tax.".into(),
                            sent_on: ymd(2024, 5, 26),
                            from_customer: true,
                        },
                    ],
                },
                Ticket {
                    id: "TCK-2017".into(),
                    subject: "Return label request".into(),
                    customer: "Morgan Blake".into(),
                    category: "Returns".into(),
                    priority: TicketPriority::Medium,
                    status: TicketStatus::Resolved,
                    assignee: Some("Marcus Chen".into()),
                    opened_on: ymd(2024, 5, 12),
                    messages: vec![TicketMessage {
                        author: "Marcus Chen".into(),
                        body: "A prepaid return label has been emailed to you.".into(),
                        sent_on: ymd(2024, 5, 13),
                        from_customer: false,
                    }],
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_assignee_reads_unassigned() {
        let props = SupportTicketsProps::sample();
        assert_eq!(props.tickets[0].assignee_label(), UNASSIGNED);
        assert_eq!(props.tickets[1].assignee_label(), "Marcus Chen");
    }

    #[test]
    fn counts_active_tickets_by_priority() {
        let props = SupportTicketsProps::sample();
        assert_eq!(props.count_by_priority(TicketPriority::Urgent), 1);
        assert_eq!(props.count_by_priority(TicketPriority::High), 1);
        // the resolved medium ticket is not counted
        assert_eq!(props.count_by_priority(TicketPriority::Medium), 1);
        assert_eq!(props.count_by_priority(TicketPriority::Low), 1);
        assert_eq!(props.active_count(), 4);
        assert_eq!(props.unassigned_count(), 2);
    }

    #[test]
    fn sorted_puts_urgent_active_first_and_resolved_last() {
        let ids: Vec<_> = SupportTicketsProps::sample()
            .sorted()
            .into_iter()
            .map(|ticket| ticket.id)
            .collect();
        assert_eq!(ids, ["TCK-2041", "TCK-2038", "TCK-2029", "TCK-2035", "TCK-2017"]);
    }

    #[test]
    fn last_activity_falls_back_to_opened_date() {
        let mut ticket = SupportTicketsProps::sample().tickets.remove(3);
        assert_eq!(ticket.last_activity(), ymd(2024, 5, 26));
        ticket.messages.clear();
        assert_eq!(ticket.last_activity(), ymd(2024, 5, 24));
    }

    #[test]
    fn awaiting_reply_when_customer_spoke_last() {
        let props = SupportTicketsProps::sample();
        assert!(props.tickets[0].awaiting_reply());
        assert!(!props.tickets[1].awaiting_reply());
        assert!(!props.tickets[4].awaiting_reply());
    }
}
