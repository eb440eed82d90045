//! CatalogState - Active Block Selection

use crate::app::navigation::BlockId;

/// Which block the content area shows
#[derive(Debug, Default)]
pub struct CatalogState {
    /// Currently active block
    pub active_block: BlockId,
}

impl CatalogState {
    pub fn new(active_block: BlockId) -> Self {
        Self { active_block }
    }

    /// Set the active block (from a sidebar click); returns whether it changed
    pub fn set_active_block(&mut self, block: BlockId) -> bool {
        if self.active_block == block {
            return false;
        }
        self.active_block = block;
        true
    }

    /// Step through blocks in sidebar order, wrapping at both ends
    pub fn cycle(&mut self, forward: bool) -> BlockId {
        let all = BlockId::all();
        let current = all
            .iter()
            .position(|block| *block == self.active_block)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % all.len()
        } else {
            (current + all.len() - 1) % all.len()
        };
        self.active_block = all[next];
        self.active_block
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_active_reports_changes() {
        let mut state = CatalogState::default();
        assert!(!state.set_active_block(BlockId::ProductReviews));
        assert!(state.set_active_block(BlockId::Checkout));
        assert_eq!(state.active_block, BlockId::Checkout);
    }

    #[test]
    fn cycling_wraps_around() {
        let mut state = CatalogState::new(BlockId::Portfolio);
        assert_eq!(state.cycle(true), BlockId::ProductReviews);
        assert_eq!(state.cycle(false), BlockId::Portfolio);
    }
}
