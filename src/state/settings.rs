//! CatalogSettings - Persisted Shell Preferences
//!
//! Stored as TOML in the platform config directory. A missing or empty file
//! yields the defaults; a file that fails to parse is reported and replaced
//! by the defaults on the next save.
//!
//! Saves run on the background executor. Each save takes a ticket when it is
//! requested; a snapshot older than the last one written is dropped, and the
//! file is replaced by rename so readers never see a partial write.

use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use gpui::App;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::app::entities::AppEntities;
use crate::app::navigation::BlockId;
use crate::constants::{
    DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
};
use crate::error::Result;
use crate::helpers::get_or_create_config_dir;

const SETTINGS_FILE: &str = "block-catalog.toml";
const SETTINGS_TMP_EXTENSION: &str = "toml.tmp";

static SAVE_QUEUE: SaveQueue = SaveQueue::new();

fn get_config_path() -> Result<PathBuf> {
    Ok(get_or_create_config_dir()?.join(SETTINGS_FILE))
}

/// Persisted catalog preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Block shown on startup
    pub last_block: BlockId,
    pub sidebar_collapsed: bool,
    pub activity_panel_expanded: bool,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            last_block: BlockId::default(),
            sidebar_collapsed: false,
            activity_panel_expanded: true,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

impl CatalogSettings {
    /// Parse settings text; blank text yields the defaults
    pub fn parse(value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(toml::from_str(value)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Load settings from the config file
    pub fn try_load() -> Result<Self> {
        let path = get_config_path()?;
        info!(path = ?path, "Loading settings file");
        if !path.exists() {
            return Ok(Self::default());
        }
        let value = std::fs::read_to_string(&path)?;
        Self::parse(&value).inspect_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse settings file");
        })
    }

    /// Load settings, falling back to the defaults on any failure
    pub fn load_or_default() -> Self {
        Self::try_load().unwrap_or_else(|e| {
            warn!(error = %e, "Using default settings");
            Self::default()
        })
    }

    /// Write settings to the config file
    pub fn save(&self) -> Result<()> {
        self.save_to(&get_config_path()?)
    }

    /// Write to a sibling temp file, then rename it over `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let tmp = path.with_extension(SETTINGS_TMP_EXTENSION);
        std::fs::write(&tmp, self.to_toml()?)?;
        std::fs::rename(&tmp, path)?;
        Ok(())
    }

    /// Window size, never below the minimum
    pub fn window_size(&self) -> (f32, f32) {
        let width = if self.window_width.is_finite() {
            self.window_width.max(MIN_WINDOW_WIDTH)
        } else {
            DEFAULT_WINDOW_WIDTH
        };
        let height = if self.window_height.is_finite() {
            self.window_height.max(MIN_WINDOW_HEIGHT)
        } else {
            DEFAULT_WINDOW_HEIGHT
        };
        (width, height)
    }
}

/// Orders background saves so an older snapshot never replaces a newer one
#[derive(Debug)]
pub struct SaveQueue {
    issued: AtomicU64,
    written: Mutex<u64>,
}

impl SaveQueue {
    pub const fn new() -> Self {
        Self {
            issued: AtomicU64::new(0),
            written: Mutex::new(0),
        }
    }

    /// Ticket for a snapshot taken now; later snapshots get larger tickets
    pub fn next_ticket(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Run `write` unless a newer snapshot was requested or already written.
    /// Returns whether `write` ran.
    pub fn write_if_current<F>(&self, ticket: u64, write: F) -> Result<bool>
    where
        F: FnOnce() -> Result<()>,
    {
        let mut written = self
            .written
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        if ticket <= *written || ticket < self.issued.load(Ordering::SeqCst) {
            return Ok(false);
        }
        write()?;
        *written = ticket;
        Ok(true)
    }
}

impl Default for SaveQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// Update the settings entity and save a snapshot on the background executor
pub fn update_settings_and_save<F>(cx: &mut App, action_name: &'static str, mutation: F)
where
    F: FnOnce(&mut CatalogSettings),
{
    let settings = cx.global::<AppEntities>().settings.clone();

    let (snapshot, ticket) = settings.update(cx, |settings, cx| {
        mutation(settings);
        cx.notify();
        (settings.clone(), SAVE_QUEUE.next_ticket())
    });

    cx.background_executor()
        .spawn(async move {
            match SAVE_QUEUE.write_if_current(ticket, || snapshot.save()) {
                Ok(true) => info!(action = action_name, "Settings saved"),
                Ok(false) => {
                    debug!(action = action_name, ticket, "Skipped superseded settings save")
                }
                Err(e) => error!(error = %e, action = action_name, "Failed to save settings"),
            }
        })
        .detach();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_file_gives_defaults() {
        let settings = CatalogSettings::parse("  \n").unwrap();
        assert_eq!(settings, CatalogSettings::default());
        assert!(settings.activity_panel_expanded);
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let settings = CatalogSettings::parse("last_block = \"shopping-cart\"\n").unwrap();
        assert_eq!(settings.last_block, BlockId::ShoppingCart);
        assert!(!settings.sidebar_collapsed);
        assert_eq!(settings.window_width, DEFAULT_WINDOW_WIDTH);
    }

    #[test]
    fn saved_text_reloads_to_the_same_settings() {
        let settings = CatalogSettings {
            last_block: BlockId::GiftPlanner,
            sidebar_collapsed: true,
            activity_panel_expanded: false,
            window_width: 1280.0,
            window_height: 800.0,
        };
        let text = settings.to_toml().unwrap();
        assert!(text.contains("last_block = \"gift-planner\""));
        assert_eq!(CatalogSettings::parse(&text).unwrap(), settings);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let err = CatalogSettings::parse("last_block = ").unwrap_err();
        assert!(matches!(err, crate::error::Error::TomlDe { .. }));
        assert!(CatalogSettings::parse("last_block = \"nowhere\"").is_err());
    }

    #[test]
    fn superseded_snapshots_are_not_written() {
        let queue = SaveQueue::new();
        let older = queue.next_ticket();
        let newer = queue.next_ticket();

        let mut writes = Vec::new();
        let wrote_newer = queue
            .write_if_current(newer, || {
                writes.push(newer);
                Ok(())
            })
            .unwrap();
        let wrote_older = queue
            .write_if_current(older, || {
                writes.push(older);
                Ok(())
            })
            .unwrap();

        assert!(wrote_newer);
        assert!(!wrote_older);
        assert_eq!(writes, [newer]);
    }

    #[test]
    fn failed_write_does_not_advance_the_queue() {
        let queue = SaveQueue::new();
        let ticket = queue.next_ticket();
        let failed = queue.write_if_current(ticket, || {
            Err(crate::error::Error::Invalid {
                message: "disk full".to_string(),
            })
        });
        assert!(failed.is_err());
        assert!(queue.write_if_current(ticket, || Ok(())).unwrap());
    }

    #[test]
    fn save_replaces_the_file_without_leaving_a_temp_file() {
        let dir = std::env::temp_dir()
            .join(format!("block-catalog-settings-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(SETTINGS_FILE);
        std::fs::write(&path, "last_block = \"portfolio\"\n").unwrap();

        let settings = CatalogSettings {
            last_block: BlockId::Checkout,
            ..CatalogSettings::default()
        };
        settings.save_to(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(CatalogSettings::parse(&text).unwrap(), settings);
        assert!(!path.with_extension(SETTINGS_TMP_EXTENSION).exists());
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn window_size_respects_minimum() {
        let settings = CatalogSettings {
            window_width: 200.0,
            window_height: f32::NAN,
            ..CatalogSettings::default()
        };
        assert_eq!(
            settings.window_size(),
            (MIN_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT)
        );
    }
}
