use crate::domain::model::{FinalizationOutcome, Service, SuggestionResult, ValidInput};
use crate::domain::ports::{FinalizeSink, SuggestionBackend};
use crate::utils::error::{MatchError, Result};
use async_trait::async_trait;

/// Deterministic in-process suggestion backend serving a fixed, ranked
/// catalog. Used for offline runs and as a collaborator stand-in.
pub struct CatalogBackend {
    catalog: Vec<Service>,
}

impl CatalogBackend {
    pub fn new(catalog: Vec<Service>) -> Self {
        Self { catalog }
    }

    /// The stock catalog of agency services.
    pub fn with_default_catalog() -> Self {
        let catalog = [
            (
                "Custom Website Development",
                "Building responsive and performant websites tailored to your brand.",
            ),
            (
                "Mobile App Development",
                "Creating native or cross-platform mobile applications for iOS and Android.",
            ),
            (
                "UI/UX Design Services",
                "Designing intuitive and beautiful user interfaces and experiences.",
            ),
            (
                "Cloud Infrastructure Setup",
                "Configuring and managing scalable cloud solutions on AWS, GCP, or Azure.",
            ),
            (
                "SEO & Digital Marketing",
                "Improving online visibility and driving traffic through strategic marketing.",
            ),
            (
                "E-commerce Platform Integration",
                "Setting up online stores with platforms like Shopify or WooCommerce.",
            ),
            (
                "API Development & Integration",
                "Building and connecting robust APIs to power your applications.",
            ),
            (
                "Data Analytics & Visualization",
                "Turning raw data into actionable insights with powerful dashboards.",
            ),
        ]
        .into_iter()
        .map(|(title, description)| Service {
            title: title.to_string(),
            description: description.to_string(),
        })
        .collect();

        Self::new(catalog)
    }
}

#[async_trait]
impl SuggestionBackend for CatalogBackend {
    async fn request_suggestions(&self, _input: &ValidInput) -> Result<SuggestionResult> {
        tracing::debug!(
            count = self.catalog.len(),
            "serving suggestions from the built-in catalog"
        );
        SuggestionResult::new(self.catalog.clone())
    }
}

/// Finalize sink that accepts every commit, logging the chosen titles.
pub struct AcceptAllSink;

#[async_trait]
impl FinalizeSink for AcceptAllSink {
    async fn finalize(&self, titles: &[String]) -> Result<FinalizationOutcome> {
        if titles.is_empty() {
            return Err(MatchError::EmptyFinalizeError);
        }

        tracing::info!(?titles, "finalized services");
        Ok(FinalizationOutcome {
            success: true,
            message: format!("Successfully finalized {} services.", titles.len()),
        })
    }
}
