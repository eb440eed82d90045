//! Eventing - Events Flowing From Blocks to the Workspace

pub mod block_event;

pub use block_event::BlockEvent;
