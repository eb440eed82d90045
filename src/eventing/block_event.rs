//! BlockEvent - Interactions Raised by Blocks
//!
//! Blocks never mutate their view-model. Controls that would change domain
//! data (quantity steppers, remove buttons, submit buttons, links) emit a
//! `BlockEvent`; the workspace records it in the activity panel and logs it.

use std::fmt;

/// An interaction a block reports to its owner
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockEvent {
    /// Quantity stepper pressed on a line item
    QuantityChanged { item: String, quantity: u32 },
    /// Remove pressed on a line item
    ItemRemoved { item: String },
    /// A button with no local effect, such as "Place order"
    Action { label: String },
    /// A link was followed
    LinkOpened { href: String },
    /// A switch or checkbox was flipped
    Toggled { setting: String, on: bool },
    /// A choice was picked in a select, radio group or filter
    Selected { control: String, value: String },
}

impl BlockEvent {
    pub fn action(label: impl Into<String>) -> Self {
        BlockEvent::Action {
            label: label.into(),
        }
    }

    pub fn link(href: impl Into<String>) -> Self {
        BlockEvent::LinkOpened { href: href.into() }
    }

    pub fn toggled(setting: impl Into<String>, on: bool) -> Self {
        BlockEvent::Toggled {
            setting: setting.into(),
            on,
        }
    }

    pub fn selected(control: impl Into<String>, value: impl Into<String>) -> Self {
        BlockEvent::Selected {
            control: control.into(),
            value: value.into(),
        }
    }

    /// Short machine-readable kind, used as a log field
    pub fn kind(&self) -> &'static str {
        match self {
            BlockEvent::QuantityChanged { .. } => "quantity",
            BlockEvent::ItemRemoved { .. } => "remove",
            BlockEvent::Action { .. } => "action",
            BlockEvent::LinkOpened { .. } => "link",
            BlockEvent::Toggled { .. } => "toggle",
            BlockEvent::Selected { .. } => "select",
        }
    }
}

impl fmt::Display for BlockEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockEvent::QuantityChanged { item, quantity } => {
                write!(f, "Set quantity of {item} to {quantity}")
            }
            BlockEvent::ItemRemoved { item } => write!(f, "Remove {item}"),
            BlockEvent::Action { label } => write!(f, "{label}"),
            BlockEvent::LinkOpened { href } => write!(f, "Open {href}"),
            BlockEvent::Toggled { setting, on } => {
                write!(f, "{setting} {}", if *on { "on" } else { "off" })
            }
            BlockEvent::Selected { control, value } => write!(f, "{control}: {value}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_each_event() {
        let quantity = BlockEvent::QuantityChanged {
            item: "Wireless Headphones".into(),
            quantity: 3,
        };
        assert_eq!(quantity.to_string(), "Set quantity of Wireless Headphones to 3");
        assert_eq!(BlockEvent::toggled("Email alerts", false).to_string(), "Email alerts off");
        assert_eq!(
            BlockEvent::selected("Payment", "PayPal").to_string(),
            "Payment: PayPal"
        );
        assert_eq!(BlockEvent::link("/orders/1042").to_string(), "Open /orders/1042");
    }

    #[test]
    fn kinds_are_stable() {
        assert_eq!(BlockEvent::action("Checkout").kind(), "action");
        assert_eq!(
            BlockEvent::ItemRemoved { item: "x".into() }.kind(),
            "remove"
        );
    }
}
