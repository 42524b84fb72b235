mod loader;
pub mod template;

use serde::{Deserialize, Serialize};

use crate::log::LogConfig;

pub use loader::{config_dir, config_path, load, try_load};

/// Top-level configuration for voidmap.
///
/// Loaded from `~/.config/voidmap/config.toml`. Missing sections
/// fall back to defaults thanks to `#[serde(default)]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How results are printed.
    pub output: OutputConfig,
    /// File logging settings.
    pub logging: LogConfig,
}

/// Output settings, overridable per command on the CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Merge adjacent voids before printing.
    pub group: bool,
    /// Output format.
    pub format: OutputFormat,
}

/// How void rectangles are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `x,y widthxheight` line per rectangle.
    #[default]
    Text,
    /// A JSON array of rectangles.
    Json,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            group: false,
            format: OutputFormat::Text,
        }
    }
}

impl Config {
    /// Clamps values to safe ranges.
    pub fn validate(&mut self) {
        self.logging.max_file_mb = self.logging.max_file_mb.clamp(1, 100);
    }
}
