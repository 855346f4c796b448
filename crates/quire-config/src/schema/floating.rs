//! Floating window geometry and persistence timing.

use serde::{Deserialize, Serialize};

/// Debounced layout persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistenceConfig {
    /// Quiet period after the last layout change before saving (valid range: 50-10000).
    pub debounce_ms: u64,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self { debounce_ms: 400 }
    }
}

/// Geometry used when a pane is floated without remembered bounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FloatingConfig {
    pub default_width: u32,
    pub default_height: u32,
    /// Floating windows never shrink below this.
    pub min_width: u32,
    pub min_height: u32,
}

impl Default for FloatingConfig {
    fn default() -> Self {
        Self {
            default_width: 640,
            default_height: 420,
            min_width: 360,
            min_height: 240,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floating_defaults() {
        let config = FloatingConfig::default();
        assert_eq!(config.default_width, 640);
        assert_eq!(config.default_height, 420);
        assert_eq!(config.min_width, 360);
        assert_eq!(config.min_height, 240);
    }

    #[test]
    fn persistence_partial_toml() {
        let config: PersistenceConfig = toml::from_str("debounce_ms = 1000").unwrap();
        assert_eq!(config.debounce_ms, 1000);
    }
}
