//! HTTP client for the view-metrics service.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use folio_core::{Error, Result};

/// Counters held for one document by the metrics service.
///
/// The service may return more than `views`; unknown fields are ignored
/// and absent counters default to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewMetrics {
    /// Number of registered views.
    pub views: u64,
    /// Reader upvotes.
    pub upvotes: u64,
    /// Reader downvotes.
    pub downvotes: u64,
}

/// Abstraction over the metrics service, so views and tests can
/// substitute their own transport.
#[async_trait]
pub trait MetricsApi: Send + Sync {
    /// Notify the service that a document was displayed.
    async fn register_view(&self, id: &str) -> Result<()>;

    /// Fetch the current counters for a document.
    async fn fetch(&self, id: &str) -> Result<ViewMetrics>;

    /// Register a view, then fetch the updated counters.
    ///
    /// The service only counts a view after registration, so the two
    /// calls are sequenced — the fetch never races the register.
    async fn record_and_fetch(&self, id: &str) -> Result<ViewMetrics> {
        self.register_view(id).await?;
        self.fetch(id).await
    }
}

/// Request body for view registration.
#[derive(Debug, Serialize)]
struct ViewRequest<'a> {
    slug: &'a str,
}

/// reqwest-backed client for the metrics service.
pub struct MetricsClient {
    base_url: String,
    client: reqwest::Client,
}

impl MetricsClient {
    /// Create a client for the service at `base_url`.
    ///
    /// A trailing slash on the base URL is tolerated.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    fn view_url(&self) -> String {
        format!("{}/api/view", self.base_url)
    }

    fn metrics_url(&self, id: &str) -> String {
        format!("{}/api/metrics/{}", self.base_url, id)
    }
}

#[async_trait]
impl MetricsApi for MetricsClient {
    async fn register_view(&self, id: &str) -> Result<()> {
        let response = self
            .client
            .post(self.view_url())
            .json(&ViewRequest { slug: id })
            .send()
            .await
            .map_err(|e| Error::metrics(format!("register view for '{id}': {e}")))?;

        if !response.status().is_success() {
            return Err(Error::metrics(format!(
                "register view for '{id}': HTTP {}",
                response.status()
            )));
        }

        // No required response body.
        Ok(())
    }

    async fn fetch(&self, id: &str) -> Result<ViewMetrics> {
        let response = self
            .client
            .get(self.metrics_url(id))
            .send()
            .await
            .map_err(|e| Error::metrics(format!("fetch metrics for '{id}': {e}")))?;

        if !response.status().is_success() {
            return Err(Error::metrics(format!(
                "fetch metrics for '{id}': HTTP {}",
                response.status()
            )));
        }

        response
            .json::<ViewMetrics>()
            .await
            .map_err(|e| Error::metrics(format!("parse metrics for '{id}': {e}")))
    }
}
