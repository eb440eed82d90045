//! AppEntities - Global Entity Handles
//!
//! All global GPUI entities are collected here for easy access. State is
//! split by update frequency: the active block changes on navigation, the
//! activity log on every block interaction.

use gpui::{App, AppContext, Entity, Global};

use crate::state::{
    activity_state::ActivityState, catalog_state::CatalogState, settings::CatalogSettings,
};

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Persisted preferences
    pub settings: Entity<CatalogSettings>,
    /// Active block selection
    pub catalog: Entity<CatalogState>,
    /// Recent block events (ring buffer)
    pub activity: Entity<ActivityState>,
}

impl Global for AppEntities {}

impl AppEntities {
    /// Initialize all entities, starting on the last viewed block
    pub fn init(settings: CatalogSettings, cx: &mut App) -> Self {
        let active_block = settings.last_block;
        Self {
            settings: cx.new(|_| settings),
            catalog: cx.new(|_| CatalogState::new(active_block)),
            activity: cx.new(|_| ActivityState::default()),
        }
    }
}
