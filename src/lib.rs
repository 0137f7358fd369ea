pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::http::{HttpFinalizeClient, HttpSuggestionClient};
pub use crate::adapters::memory::{AcceptAllSink, CatalogBackend};
#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;
pub use crate::config::BackendSettings;
pub use crate::core::round::RoundController;
pub use crate::core::selection::RoundPhase;
pub use crate::domain::model::{FinalizationOutcome, Service, SuggestionResult, ValidInput};
pub use crate::domain::ports::{ConfigProvider, FinalizeSink, SuggestionBackend};
pub use crate::utils::error::{MatchError, Result};
