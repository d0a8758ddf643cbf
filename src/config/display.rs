//! Display settings for the result screen.

use serde::{Deserialize, Serialize};

/// Display configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Marker shown in place of a grade that cannot be computed
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

pub fn default_placeholder() -> String {
    "-".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
        }
    }
}

impl DisplayConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.placeholder.trim().is_empty() {
            Err("Display placeholder must not be empty".to_string())
        } else {
            Ok(())
        }
    }
}
