use crate::client::builder::{ClassifAiClientBuilder, ClientConfig};
use crate::client::validation;
use crate::content::{Content, ContentItem, Resolved};
use crate::transport::{Endpoint, HttpTransport, TransportError};
use crate::types::{
    ClassifyOptions, ClassifyRequest, ClassifyResult, FeedbackRequest, FeedbackResult,
    GroundTruth, HealthStatus, ProjectStats,
};
use crate::{Error, Result};
use std::sync::Arc;
use tracing::debug;

/// Async client for the ClassifAI API.
///
/// Each operation is one request/response round trip. The client holds only
/// read-only configuration, so a single instance (or its clones) can serve
/// concurrent calls from many tasks. Failures are never retried internally.
#[derive(Clone)]
pub struct ClassifAiClient {
    config: Arc<ClientConfig>,
    transport: Arc<HttpTransport>,
}

impl ClassifAiClient {
    /// Client configured from the environment and defaults.
    pub fn new() -> Result<Self> {
        ClassifAiClientBuilder::new().build()
    }

    pub fn builder() -> ClassifAiClientBuilder {
        ClassifAiClientBuilder::new()
    }

    pub(crate) fn from_config(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self {
            config: Arc::new(config),
            transport: Arc::new(transport),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Classify content into one of the candidate labels.
    ///
    /// `content` may be a single string, path or [`ContentItem`], or any
    /// sequence of them; see [`crate::content`] for how each element is
    /// interpreted. All items are analyzed jointly into one result.
    ///
    /// Input is validated before any network call: empty content, a label
    /// count outside 2..=50, or no labels/description/project id fail with
    /// [`crate::Error::Validation`].
    pub async fn classify(
        &self,
        content: impl Into<Content>,
        options: ClassifyOptions,
    ) -> Result<ClassifyResult> {
        let content = content.into();
        validation::validate_classify(&content, &options)?;

        let items = self.resolve_content(&content).await?;
        let request = ClassifyRequest::new(items, &options);
        debug!(
            items = request.content.len(),
            labels = request.labels.as_ref().map(Vec::len).unwrap_or(0),
            project_id = request.project_id.as_deref().unwrap_or(""),
            "classify"
        );
        self.transport
            .send(Endpoint::Classify, Some(&request), options.timeout)
            .await
    }

    /// Normalize content into the items `classify` would send, downloading
    /// remote images along the way.
    pub async fn normalize(&self, content: impl Into<Content>) -> Result<Vec<ContentItem>> {
        self.resolve_content(&content.into()).await
    }

    /// Submit the correct label(s) for a prior detection.
    pub async fn submit_feedback(
        &self,
        detection_id: &str,
        ground_truth: impl Into<GroundTruth>,
    ) -> Result<FeedbackResult> {
        let ground_truth = ground_truth.into();
        validation::validate_feedback(detection_id, &ground_truth)?;

        let request = FeedbackRequest {
            detection_id: detection_id.to_string(),
            ground_truth,
        };
        self.transport
            .send(Endpoint::Feedback, Some(&request), None)
            .await
    }

    /// Statistics of a project. Fails with [`crate::Error::NotFound`] when the
    /// project does not exist.
    pub async fn get_project_stats(&self, project_id: &str) -> Result<ProjectStats> {
        validation::validate_project_id(project_id)?;

        let mut stats: ProjectStats = self
            .transport
            .send(Endpoint::ProjectStats(project_id), None::<&()>, None)
            .await?;
        if stats.project_id.is_empty() {
            stats.project_id = project_id.to_string();
        }
        Ok(stats)
    }

    /// Liveness probe.
    pub async fn health_check(&self) -> Result<HealthStatus> {
        self.transport
            .send(Endpoint::Health, None::<&()>, None)
            .await
    }

    /// Local files are read on the blocking pool; images can be large.
    async fn resolve_content(&self, content: &Content) -> Result<Vec<ContentItem>> {
        let pending = content.clone();
        let resolved = tokio::task::spawn_blocking(move || pending.resolve())
            .await
            .map_err(|e| {
                Error::Transport(TransportError::Other(format!(
                    "content resolution task failed: {}",
                    e
                )))
            })??;

        let mut items = Vec::with_capacity(resolved.len());
        for resolved in resolved {
            let item = match resolved {
                Resolved::Item(item) => item,
                Resolved::Remote(url) => self.transport.fetch_image(&url).await?,
            };
            items.push(item);
        }
        Ok(items)
    }
}

impl std::fmt::Debug for ClassifAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassifAiClient")
            .field("config", &self.config)
            .finish()
    }
}
