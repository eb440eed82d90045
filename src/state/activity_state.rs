//! ActivityState - Recent Block Events
//!
//! A bounded history of what the user did inside blocks, newest shown first
//! in the activity panel.

use chrono::{DateTime, Local};

use crate::app::navigation::BlockId;
use crate::eventing::BlockEvent;
use crate::helpers::BoundedDeque;

/// A single recorded event
#[derive(Debug, Clone)]
pub struct ActivityEntry {
    pub id: u64,
    pub block: BlockId,
    pub event: BlockEvent,
    pub timestamp: DateTime<Local>,
}

impl ActivityEntry {
    /// Time of day with milliseconds
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M:%S%.3f").to_string()
    }
}

/// Recent block events with FIFO eviction
#[derive(Debug)]
pub struct ActivityState {
    entries: BoundedDeque<ActivityEntry>,
    next_id: u64,
}

impl ActivityState {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: BoundedDeque::new(capacity),
            next_id: 1,
        }
    }

    /// Record an event with the current time and log it
    pub fn record(&mut self, block: BlockId, event: BlockEvent) {
        tracing::info!(
            block = block.slug(),
            kind = event.kind(),
            detail = %event,
            "Block event"
        );
        self.record_at(block, event, Local::now());
    }

    pub fn record_at(&mut self, block: BlockId, event: BlockEvent, timestamp: DateTime<Local>) {
        let entry = ActivityEntry {
            id: self.next_id,
            block,
            event,
            timestamp,
        };
        self.next_id += 1;
        self.entries.push(entry);
    }

    /// Newest first, at most `limit` entries
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &ActivityEntry> {
        self.entries.iter_rev().take(limit)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Events recorded since startup, including evicted ones
    pub fn total_recorded(&self) -> u64 {
        self.next_id - 1
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for ActivityState {
    fn default() -> Self {
        Self::new(crate::constants::ACTIVITY_LOG_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recent_is_newest_first() {
        let mut state = ActivityState::new(10);
        state.record_at(BlockId::ShoppingCart, BlockEvent::action("Checkout"), Local::now());
        state.record_at(BlockId::Checkout, BlockEvent::action("Place order"), Local::now());

        let recent: Vec<_> = state.recent(5).map(|entry| entry.block).collect();
        assert_eq!(recent, vec![BlockId::Checkout, BlockId::ShoppingCart]);
    }

    #[test]
    fn oldest_events_are_evicted() {
        let mut state = ActivityState::new(2);
        for label in ["a", "b", "c"] {
            state.record_at(BlockId::MarketingHero, BlockEvent::action(label), Local::now());
        }
        assert_eq!(state.len(), 2);
        assert_eq!(state.total_recorded(), 3);
        let ids: Vec<u64> = state.recent(10).map(|entry| entry.id).collect();
        assert_eq!(ids, vec![3, 2]);
    }

    #[test]
    fn clear_keeps_the_id_sequence() {
        let mut state = ActivityState::default();
        state.record_at(BlockId::Portfolio, BlockEvent::link("https://example.com"), Local::now());
        state.clear();
        assert!(state.is_empty());
        state.record_at(BlockId::Portfolio, BlockEvent::link("https://example.com"), Local::now());
        assert_eq!(state.recent(1).next().map(|entry| entry.id), Some(2));
    }
}
