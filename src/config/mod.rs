#[cfg(feature = "cli")]
pub mod cli;
pub mod file;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_SUGGESTIONS_PATH: &str = "/suggestions";
pub const DEFAULT_FINALIZE_PATH: &str = "/finalize";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Resolved backend settings handed to the HTTP adapters. The endpoint
/// paths are configurable because deployed backends disagree on them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendSettings {
    pub base_url: String,
    pub suggestions_path: String,
    pub finalize_path: String,
    pub timeout_secs: u64,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            suggestions_path: DEFAULT_SUGGESTIONS_PATH.to_string(),
            finalize_path: DEFAULT_FINALIZE_PATH.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ConfigProvider for BackendSettings {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn suggestions_path(&self) -> &str {
        &self.suggestions_path
    }

    fn finalize_path(&self) -> &str {
        &self.finalize_path
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Validate for BackendSettings {
    fn validate(&self) -> Result<()> {
        validation::validate_url("base_url", &self.base_url)?;
        validation::validate_route_path("suggestions_path", &self.suggestions_path)?;
        validation::validate_route_path("finalize_path", &self.finalize_path)?;
        validation::validate_positive_number("timeout_secs", self.timeout_secs as usize, 1)?;
        Ok(())
    }
}
