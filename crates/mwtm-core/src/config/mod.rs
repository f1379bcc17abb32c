mod loader;
pub mod template;

use serde::{Deserialize, Serialize};

use crate::Offset;
use crate::log::LogConfig;

pub use loader::{config_dir, config_path, try_load};

/// Largest accepted placement offset, in pixels.
const MAX_OFFSET: i32 = 1000;

/// Top-level configuration for mwtm.
///
/// Loaded from `~/.config/mwtm/config.toml`. Missing sections
/// fall back to defaults thanks to `#[serde(default)]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where moved windows land on their target monitor.
    pub placement: PlacementConfig,
    /// Diagnostic output settings.
    pub logging: LogConfig,
}

/// Placement settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    /// Horizontal distance in pixels from the monitor's left edge.
    pub offset_x: i32,
    /// Vertical distance in pixels from the monitor's top edge.
    pub offset_y: i32,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        let Offset { x, y } = Offset::default();
        Self {
            offset_x: x,
            offset_y: y,
        }
    }
}

impl PlacementConfig {
    pub fn offset(&self) -> Offset {
        Offset {
            x: self.offset_x,
            y: self.offset_y,
        }
    }
}

impl Config {
    /// Clamps offsets to a sane range and resets unknown log levels.
    pub fn validate(&mut self) {
        self.placement.offset_x = self.placement.offset_x.clamp(0, MAX_OFFSET);
        self.placement.offset_y = self.placement.offset_y.clamp(0, MAX_OFFSET);
        self.logging.validate();
    }
}
