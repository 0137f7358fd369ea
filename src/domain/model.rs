use crate::utils::error::{MatchError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A candidate offering returned by the suggestion service. The title acts
/// as the candidate's identifier within a single result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub title: String,
    pub description: String,
}

/// A validated pair of free-text descriptions. Holds the user's original
/// untrimmed text; trimming happens only while measuring length during
/// validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidInput {
    client_interest: String,
    vendor_capability: String,
}

impl ValidInput {
    pub(crate) fn new(client_interest: String, vendor_capability: String) -> Self {
        Self {
            client_interest,
            vendor_capability,
        }
    }

    pub fn client_interest(&self) -> &str {
        &self.client_interest
    }

    pub fn vendor_capability(&self) -> &str {
        &self.vendor_capability
    }
}

/// The ordered candidate list produced by one suggestion request.
/// Construction enforces the collaborator contract: at least one service,
/// no empty titles or descriptions, titles unique within the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionResult {
    services: Vec<Service>,
}

impl SuggestionResult {
    pub fn new(services: Vec<Service>) -> Result<Self> {
        if services.is_empty() {
            return Err(MatchError::UpstreamError {
                message: "suggestion service returned no candidates".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for service in &services {
            if service.title.trim().is_empty() {
                return Err(MatchError::UpstreamError {
                    message: "suggestion service returned a candidate with an empty title"
                        .to_string(),
                });
            }
            if service.description.trim().is_empty() {
                return Err(MatchError::UpstreamError {
                    message: format!(
                        "suggestion service returned no description for '{}'",
                        service.title
                    ),
                });
            }
            if !seen.insert(service.title.as_str()) {
                return Err(MatchError::UpstreamError {
                    message: format!("duplicate candidate title: '{}'", service.title),
                });
            }
        }

        Ok(Self { services })
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn candidate_count(&self) -> usize {
        self.services.len()
    }

    pub fn contains_title(&self, title: &str) -> bool {
        self.services.iter().any(|s| s.title == title)
    }
}

/// The titles the user has chosen from the active candidate list.
/// Insertion order is preserved and duplicates are rejected; only the
/// selection state machine mutates it, which keeps every entry a valid
/// candidate title.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    titles: Vec<String>,
}

impl SelectionSet {
    pub fn contains(&self, title: &str) -> bool {
        self.titles.iter().any(|t| t == title)
    }

    pub(crate) fn insert(&mut self, title: String) {
        if !self.contains(&title) {
            self.titles.push(title);
        }
    }

    pub(crate) fn remove(&mut self, title: &str) {
        self.titles.retain(|t| t != title);
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }
}

/// The collaborator's verdict on a finalize request. Consumed immediately
/// by the controller to decide feedback and whether the round settles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalizationOutcome {
    pub success: bool,
    pub message: String,
}
