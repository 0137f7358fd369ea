use crate::config::BackendSettings;
use crate::utils::error::{MatchError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// TOML configuration file. Only the `[backend]` table is recognized;
/// every field is optional and fills in whatever the caller has not set
/// explicitly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    pub backend: BackendSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendSection {
    pub base_url: Option<String>,
    pub suggestions_path: Option<String>,
    pub finalize_path: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl FileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(MatchError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| MatchError::ConfigParseError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Copies present file values into `settings`.
    pub fn apply_to(&self, settings: &mut BackendSettings) {
        if let Some(base_url) = &self.backend.base_url {
            settings.base_url = base_url.clone();
        }
        if let Some(suggestions_path) = &self.backend.suggestions_path {
            settings.suggestions_path = suggestions_path.clone();
        }
        if let Some(finalize_path) = &self.backend.finalize_path {
            settings.finalize_path = finalize_path.clone();
        }
        if let Some(timeout_secs) = self.backend.timeout_secs {
            settings.timeout_secs = timeout_secs;
        }
    }
}

/// Replaces `${VAR_NAME}` placeholders with environment values. Unknown
/// variables are left intact so the parse error points at them.
fn substitute_env_vars(content: &str) -> String {
    let re = regex::Regex::new(r"\$\{([^}]+)\}").unwrap();

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    })
    .to_string()
}
