//! # Hook Configuration
//!
//! Runtime knobs for a hook instance, loadable from TOML with the `client`
//! feature.

use crate::constants::DEFAULT_MAX_CROSSINGS_PER_TRADE;
use crate::errors::{HookError, HookResult};

/// Hook configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "client", serde(default))]
pub struct HookConfig {
    /// Maximum number of ranges a single trade may sweep. A trade crossing
    /// more is rejected before any order is touched.
    pub max_crossings_per_trade: u32,

    /// Record events for the embedding environment to drain
    pub emit_events: bool,
}

impl Default for HookConfig {
    fn default() -> Self {
        Self {
            max_crossings_per_trade: DEFAULT_MAX_CROSSINGS_PER_TRADE,
            emit_events: true,
        }
    }
}

impl HookConfig {
    /// Validate configuration
    pub fn validate(&self) -> HookResult<()> {
        if self.max_crossings_per_trade == 0 {
            return Err(HookError::invalid_config(
                "max_crossings_per_trade",
                "must be greater than 0",
            ));
        }
        Ok(())
    }

    /// Parse and validate a TOML document
    #[cfg(feature = "client")]
    pub fn from_toml_str(content: &str) -> HookResult<Self> {
        let config: HookConfig = toml::from_str(content)
            .map_err(|e| HookError::invalid_config("toml", e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    #[cfg(feature = "client")]
    pub fn load(path: impl AsRef<std::path::Path>) -> HookResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            HookError::invalid_config("path", format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }
}
