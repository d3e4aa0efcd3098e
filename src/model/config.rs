use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from config.toml (all sections optional)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Rows scrolled per wheel notch
    #[serde(default = "default_rows_per_notch")]
    pub rows_per_notch: u32,
    /// How many selection-reconciliation passes are skipped after a wheel
    /// event, so wheel scrolling doesn't snap back to the selection
    #[serde(default = "default_suppress_ticks")]
    pub suppress_ticks: u32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        ScrollConfig {
            rows_per_notch: default_rows_per_notch(),
            suppress_ticks: default_suppress_ticks(),
        }
    }
}

fn default_rows_per_notch() -> u32 {
    3
}

fn default_suppress_ticks() -> u32 {
    6
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Terminal lines per task row (2 shows the description under the name)
    #[serde(default = "default_row_lines")]
    pub row_lines: u16,
    /// Theme color overrides, hex strings keyed by color name
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            row_lines: default_row_lines(),
            colors: HashMap::new(),
        }
    }
}

fn default_row_lines() -> u16 {
    1
}
