use crate::config::file::FileConfig;
use crate::config::BackendSettings;
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "vendorverse")]
#[command(about = "Match client project needs with vendor services")]
pub struct CliConfig {
    /// Base URL of the suggestion/finalize backend
    #[arg(long)]
    pub base_url: Option<String>,

    /// Route of the suggestion endpoint
    #[arg(long)]
    pub suggestions_path: Option<String>,

    /// Route of the finalize endpoint
    #[arg(long)]
    pub finalize_path: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Optional TOML configuration file
    #[arg(long)]
    pub config: Option<String>,

    /// Serve suggestions from the built-in catalog instead of a backend
    #[arg(long)]
    pub offline: bool,

    /// Client interest description; prompted for when omitted
    #[arg(long)]
    pub client_interest: Option<String>,

    /// Vendor capability description; prompted for when omitted
    #[arg(long)]
    pub vendor_capability: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Resolves the backend settings: command-line flags win, then file
    /// values, then the built-in defaults.
    pub fn resolve_settings(&self) -> Result<BackendSettings> {
        let mut settings = BackendSettings::default();

        if let Some(path) = &self.config {
            let file = FileConfig::from_file(path)?;
            file.apply_to(&mut settings);
        }

        if let Some(base_url) = &self.base_url {
            settings.base_url = base_url.clone();
        }
        if let Some(suggestions_path) = &self.suggestions_path {
            settings.suggestions_path = suggestions_path.clone();
        }
        if let Some(finalize_path) = &self.finalize_path {
            settings.finalize_path = finalize_path.clone();
        }
        if let Some(timeout_secs) = self.timeout_secs {
            settings.timeout_secs = timeout_secs;
        }

        Ok(settings)
    }
}
