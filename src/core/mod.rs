pub mod round;
pub mod selection;

pub use crate::domain::model::{
    FinalizationOutcome, SelectionSet, Service, SuggestionResult, ValidInput,
};
pub use crate::domain::ports::{ConfigProvider, FinalizeSink, SuggestionBackend};
pub use crate::utils::error::Result;
