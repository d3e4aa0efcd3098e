use std::fs;
use std::path::Path;

use crate::model::config::AppConfig;

const CONFIG_FILE: &str = "config.toml";

/// Load config.toml from the given directory. A missing or unparsable
/// file falls back to defaults; config is never required.
pub fn load_config(dir: &Path) -> AppConfig {
    let Ok(content) = fs::read_to_string(dir.join(CONFIG_FILE)) else {
        return AppConfig::default();
    };
    toml::from_str(&content).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_config_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let cfg = load_config(dir.path());
        assert_eq!(cfg.scroll.rows_per_notch, 3);
    }

    #[test]
    fn config_values_are_read() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            "[scroll]\nrows_per_notch = 2\nsuppress_ticks = 4\n\n[ui]\nrow_lines = 2\n",
        )
        .unwrap();
        let cfg = load_config(dir.path());
        assert_eq!(cfg.scroll.rows_per_notch, 2);
        assert_eq!(cfg.scroll.suppress_ticks, 4);
        assert_eq!(cfg.ui.row_lines, 2);
    }

    #[test]
    fn unparsable_config_gives_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "not toml [[[").unwrap();
        let cfg = load_config(dir.path());
        assert_eq!(cfg.scroll.rows_per_notch, 3);
    }
}
