//! Session configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AssessError, AssessResult};
use crate::session::Mode;

/// Thirty minutes.
pub const DEFAULT_TIME_BUDGET_S: u32 = 30 * 60;

/// Missing fields fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Countdown length in seconds; one tick is one second.
    pub time_budget_s: u32,
    pub default_mode: Mode,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            time_budget_s: DEFAULT_TIME_BUDGET_S,
            default_mode: Mode::Practice,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> AssessResult<()> {
        if self.time_budget_s == 0 {
            return Err(AssessError::InvalidConfig {
                what: "time_budget_s must be at least one second".to_string(),
            });
        }
        Ok(())
    }
}

pub fn load_config_yaml(path: &Path) -> AssessResult<SessionConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: SessionConfig = serde_yaml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

pub fn load_config_json(path: &Path) -> AssessResult<SessionConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: SessionConfig = serde_json::from_str(&content)?;
    config.validate()?;
    Ok(config)
}
