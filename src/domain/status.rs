//! Status - Closed Status Sets
//!
//! Every status field in the catalog is one of these enums. The visual
//! appearance for each variant lives in `theme::status`.

/// Order fulfilment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    Refunded,
}

impl OrderStatus {
    pub fn all() -> &'static [OrderStatus] {
        &[
            OrderStatus::Pending,
            OrderStatus::Processing,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
            OrderStatus::Refunded,
        ]
    }
}

/// Payment status of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentStatus {
    Paid,
    Pending,
    Failed,
    Refunded,
}

impl PaymentStatus {
    pub fn all() -> &'static [PaymentStatus] {
        &[
            PaymentStatus::Paid,
            PaymentStatus::Pending,
            PaymentStatus::Failed,
            PaymentStatus::Refunded,
        ]
    }
}

/// Marketing campaign lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CampaignStatus {
    Active,
    Paused,
    Completed,
    Scheduled,
}

impl CampaignStatus {
    pub fn all() -> &'static [CampaignStatus] {
        &[
            CampaignStatus::Active,
            CampaignStatus::Paused,
            CampaignStatus::Completed,
            CampaignStatus::Scheduled,
        ]
    }
}

/// Support ticket priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TicketPriority {
    Low,
    Medium,
    High,
    Urgent,
}

impl TicketPriority {
    pub fn all() -> &'static [TicketPriority] {
        &[
            TicketPriority::Low,
            TicketPriority::Medium,
            TicketPriority::High,
            TicketPriority::Urgent,
        ]
    }
}

/// Support ticket workflow status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TicketStatus {
    Open,
    InProgress,
    Resolved,
    Closed,
}

impl TicketStatus {
    pub fn all() -> &'static [TicketStatus] {
        &[
            TicketStatus::Open,
            TicketStatus::InProgress,
            TicketStatus::Resolved,
            TicketStatus::Closed,
        ]
    }
}

/// Health of a third-party integration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntegrationHealth {
    Healthy,
    Degraded,
    Down,
    Disconnected,
}

impl IntegrationHealth {
    pub fn all() -> &'static [IntegrationHealth] {
        &[
            IntegrationHealth::Healthy,
            IntegrationHealth::Degraded,
            IntegrationHealth::Down,
            IntegrationHealth::Disconnected,
        ]
    }
}

/// Inventory status of a product
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StockStatus {
    #[default]
    InStock,
    LowStock,
    OutOfStock,
    Backorder,
}

impl StockStatus {
    pub fn all() -> &'static [StockStatus] {
        &[
            StockStatus::InStock,
            StockStatus::LowStock,
            StockStatus::OutOfStock,
            StockStatus::Backorder,
        ]
    }
}

/// Portfolio project status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectStatus {
    Live,
    InProgress,
    Archived,
}

impl ProjectStatus {
    pub fn all() -> &'static [ProjectStatus] {
        &[
            ProjectStatus::Live,
            ProjectStatus::InProgress,
            ProjectStatus::Archived,
        ]
    }
}
