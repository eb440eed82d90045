//! Status Appearance - Status → {label, tone, glyph} Tables
//!
//! Each table is an exhaustive `match` with no wildcard arm, so adding a
//! status variant fails to compile until it is given an appearance.

use crate::assets::Glyph;
use crate::domain::status::{
    CampaignStatus, IntegrationHealth, OrderStatus, PaymentStatus, ProjectStatus, StockStatus,
    TicketPriority, TicketStatus,
};
use crate::theme::tone::Tone;

/// Visual appearance of one status variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusAppearance {
    pub label: &'static str,
    pub tone: Tone,
    pub glyph: Glyph,
}

impl StatusAppearance {
    const fn new(label: &'static str, tone: Tone, glyph: Glyph) -> Self {
        Self { label, tone, glyph }
    }
}

/// A closed status set with a total appearance table
pub trait StatusStyle: Copy + 'static {
    /// Appearance of this variant
    fn appearance(self) -> StatusAppearance;

    /// Every variant, in display order
    fn variants() -> &'static [Self];
}

impl StatusStyle for OrderStatus {
    fn appearance(self) -> StatusAppearance {
        match self {
            OrderStatus::Pending => StatusAppearance::new("Pending", Tone::Warning, Glyph::Clock),
            OrderStatus::Processing => {
                StatusAppearance::new("Processing", Tone::Info, Glyph::Loader)
            }
            OrderStatus::Shipped => StatusAppearance::new("Shipped", Tone::Accent, Glyph::Truck),
            OrderStatus::Delivered => {
                StatusAppearance::new("Delivered", Tone::Success, Glyph::CheckCircle)
            }
            OrderStatus::Cancelled => {
                StatusAppearance::new("Cancelled", Tone::Danger, Glyph::XCircle)
            }
            OrderStatus::Refunded => {
                StatusAppearance::new("Refunded", Tone::Neutral, Glyph::RotateCcw)
            }
        }
    }

    fn variants() -> &'static [Self] {
        OrderStatus::all()
    }
}

impl StatusStyle for PaymentStatus {
    fn appearance(self) -> StatusAppearance {
        match self {
            PaymentStatus::Paid => StatusAppearance::new("Paid", Tone::Success, Glyph::Check),
            PaymentStatus::Pending => StatusAppearance::new("Pending", Tone::Warning, Glyph::Clock),
            PaymentStatus::Failed => {
                StatusAppearance::new("Failed", Tone::Danger, Glyph::AlertTriangle)
            }
            PaymentStatus::Refunded => {
                StatusAppearance::new("Refunded", Tone::Neutral, Glyph::RotateCcw)
            }
        }
    }

    fn variants() -> &'static [Self] {
        PaymentStatus::all()
    }
}

impl StatusStyle for CampaignStatus {
    fn appearance(self) -> StatusAppearance {
        match self {
            CampaignStatus::Active => StatusAppearance::new("Active", Tone::Success, Glyph::Play),
            CampaignStatus::Paused => StatusAppearance::new("Paused", Tone::Warning, Glyph::Pause),
            CampaignStatus::Completed => {
                StatusAppearance::new("Completed", Tone::Neutral, Glyph::CheckCircle)
            }
            CampaignStatus::Scheduled => {
                StatusAppearance::new("Scheduled", Tone::Info, Glyph::Calendar)
            }
        }
    }

    fn variants() -> &'static [Self] {
        CampaignStatus::all()
    }
}

impl StatusStyle for TicketPriority {
    fn appearance(self) -> StatusAppearance {
        match self {
            TicketPriority::Low => StatusAppearance::new("Low", Tone::Neutral, Glyph::ArrowDown),
            TicketPriority::Medium => StatusAppearance::new("Medium", Tone::Info, Glyph::Minus),
            TicketPriority::High => StatusAppearance::new("High", Tone::Warning, Glyph::ArrowUp),
            TicketPriority::Urgent => {
                StatusAppearance::new("Urgent", Tone::Danger, Glyph::AlertTriangle)
            }
        }
    }

    fn variants() -> &'static [Self] {
        TicketPriority::all()
    }
}

impl StatusStyle for TicketStatus {
    fn appearance(self) -> StatusAppearance {
        match self {
            TicketStatus::Open => StatusAppearance::new("Open", Tone::Info, Glyph::Circle),
            TicketStatus::InProgress => {
                StatusAppearance::new("In progress", Tone::Warning, Glyph::Loader)
            }
            TicketStatus::Resolved => {
                StatusAppearance::new("Resolved", Tone::Success, Glyph::CheckCircle)
            }
            TicketStatus::Closed => StatusAppearance::new("Closed", Tone::Neutral, Glyph::Archive),
        }
    }

    fn variants() -> &'static [Self] {
        TicketStatus::all()
    }
}

impl StatusStyle for IntegrationHealth {
    fn appearance(self) -> StatusAppearance {
        match self {
            IntegrationHealth::Healthy => {
                StatusAppearance::new("Healthy", Tone::Success, Glyph::CheckCircle)
            }
            IntegrationHealth::Degraded => {
                StatusAppearance::new("Degraded", Tone::Warning, Glyph::AlertTriangle)
            }
            IntegrationHealth::Down => StatusAppearance::new("Down", Tone::Danger, Glyph::XCircle),
            IntegrationHealth::Disconnected => {
                StatusAppearance::new("Not connected", Tone::Neutral, Glyph::WifiOff)
            }
        }
    }

    fn variants() -> &'static [Self] {
        IntegrationHealth::all()
    }
}

impl StatusStyle for StockStatus {
    fn appearance(self) -> StatusAppearance {
        match self {
            StockStatus::InStock => StatusAppearance::new("In stock", Tone::Success, Glyph::Check),
            StockStatus::LowStock => {
                StatusAppearance::new("Low stock", Tone::Warning, Glyph::AlertTriangle)
            }
            StockStatus::OutOfStock => {
                StatusAppearance::new("Out of stock", Tone::Danger, Glyph::XCircle)
            }
            StockStatus::Backorder => {
                StatusAppearance::new("Backorder", Tone::Info, Glyph::Clock)
            }
        }
    }

    fn variants() -> &'static [Self] {
        StockStatus::all()
    }
}

impl StatusStyle for ProjectStatus {
    fn appearance(self) -> StatusAppearance {
        match self {
            ProjectStatus::Live => StatusAppearance::new("Live", Tone::Success, Glyph::Zap),
            ProjectStatus::InProgress => {
                StatusAppearance::new("In progress", Tone::Info, Glyph::Loader)
            }
            ProjectStatus::Archived => {
                StatusAppearance::new("Archived", Tone::Neutral, Glyph::Archive)
            }
        }
    }

    fn variants() -> &'static [Self] {
        ProjectStatus::all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_distinct<S: StatusStyle>() {
        let variants = S::variants();
        let tones: HashSet<_> = variants.iter().map(|s| s.appearance().tone).collect();
        let labels: HashSet<_> = variants.iter().map(|s| s.appearance().label).collect();
        assert_eq!(tones.len(), variants.len(), "tones must be distinct");
        assert_eq!(labels.len(), variants.len(), "labels must be distinct");
        assert!(labels.iter().all(|label| !label.is_empty()));
    }

    #[test]
    fn campaign_statuses_render_distinct_badges() {
        assert_eq!(CampaignStatus::variants().len(), 4);
        assert_distinct::<CampaignStatus>();
    }

    #[test]
    fn every_status_table_is_distinct() {
        assert_distinct::<OrderStatus>();
        assert_distinct::<PaymentStatus>();
        assert_distinct::<TicketPriority>();
        assert_distinct::<TicketStatus>();
        assert_distinct::<IntegrationHealth>();
        assert_distinct::<StockStatus>();
        assert_distinct::<ProjectStatus>();
    }

    #[test]
    fn urgent_tickets_are_danger() {
        assert_eq!(TicketPriority::Urgent.appearance().tone, Tone::Danger);
        assert_eq!(OrderStatus::Delivered.appearance().glyph, Glyph::CheckCircle);
    }
}
