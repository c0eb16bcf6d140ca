//! Environment-driven settings for the demo driver.

use std::path::PathBuf;

use stockledger_inventory::{DEFAULT_LOW_THRESHOLD, DEFAULT_STORE_PATH};

pub const FILE_ENV: &str = "STOCKLEDGER_FILE";
pub const LOW_THRESHOLD_ENV: &str = "STOCKLEDGER_LOW_THRESHOLD";

#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    pub store_path: PathBuf,
    pub low_threshold: f64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            low_threshold: DEFAULT_LOW_THRESHOLD,
        }
    }
}

impl DemoConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup(FILE_ENV).filter(|p| !p.trim().is_empty()) {
            config.store_path = PathBuf::from(path);
        }

        if let Some(raw) = lookup(LOW_THRESHOLD_ENV) {
            match raw.trim().parse::<f64>() {
                Ok(t) if t.is_finite() && t >= 0.0 => config.low_threshold = t,
                _ => {
                    tracing::warn!(
                        value = %raw,
                        default = DEFAULT_LOW_THRESHOLD,
                        "{LOW_THRESHOLD_ENV} is not a non-negative number; using default"
                    );
                }
            }
        }

        config
    }
}
