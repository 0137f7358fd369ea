use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatchError {
    #[error("{message}")]
    ValidationError { field: &'static str, message: String },

    #[error("suggestion service error: {message}")]
    UpstreamError { message: String },

    #[error("suggestion request failed: {source}")]
    SuggestionTransportError { source: reqwest::Error },

    #[error("no services selected")]
    EmptySelectionError,

    #[error("finalize invoked with an empty selection")]
    EmptyFinalizeError,

    #[error("finalize request failed: {source}")]
    FinalizeTransportError { source: reqwest::Error },

    #[error("a suggestion request is already in flight")]
    SubmitInFlightError,

    #[error("a finalize request is already in flight")]
    FinalizeInFlightError,

    #[error("invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("configuration parsing error: {message}")]
    ConfigParseError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MatchError>;
