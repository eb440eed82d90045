//! Primitive Components
//!
//! Basic building blocks like buttons, badges, inputs, etc.

pub mod accordion;
pub mod avatar;
pub mod badge;
pub mod button;
pub mod card;
pub mod checkbox;
pub mod icon;
pub mod input;
pub mod link;
pub mod progress;
pub mod radio_group;
pub mod select;
pub mod separator;
pub mod tabs;
