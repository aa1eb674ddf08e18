//! Blocking client with the same validation and error semantics as the async one.

use crate::client::builder::{ClassifAiClientBuilder, ClientConfig};
use crate::client::validation;
use crate::content::{Content, ContentItem, Resolved};
use crate::transport::{BlockingTransport, Endpoint};
use crate::types::{
    ClassifyOptions, ClassifyRequest, ClassifyResult, FeedbackRequest, FeedbackResult,
    GroundTruth, HealthStatus, ProjectStats,
};
use crate::Result;
use std::sync::Arc;

/// Blocking client for the ClassifAI API.
///
/// Do not call it from inside an async runtime.
#[derive(Clone)]
pub struct ClassifAiClient {
    config: Arc<ClientConfig>,
    transport: Arc<BlockingTransport>,
}

impl ClassifAiClient {
    pub fn new() -> Result<Self> {
        ClassifAiClientBuilder::new().build_blocking()
    }

    pub fn builder() -> ClassifAiClientBuilder {
        ClassifAiClientBuilder::new()
    }

    pub(crate) fn from_config(config: ClientConfig) -> Result<Self> {
        let transport = BlockingTransport::new(&config)?;
        Ok(Self {
            config: Arc::new(config),
            transport: Arc::new(transport),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// See [`crate::ClassifAiClient::classify`].
    pub fn classify(
        &self,
        content: impl Into<Content>,
        options: ClassifyOptions,
    ) -> Result<ClassifyResult> {
        let content = content.into();
        validation::validate_classify(&content, &options)?;

        let items = self.resolve_content(&content)?;
        let request = ClassifyRequest::new(items, &options);
        self.transport
            .send(Endpoint::Classify, Some(&request), options.timeout)
    }

    pub fn normalize(&self, content: impl Into<Content>) -> Result<Vec<ContentItem>> {
        self.resolve_content(&content.into())
    }

    pub fn submit_feedback(
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
        self.transport.send(Endpoint::Feedback, Some(&request), None)
    }

    pub fn get_project_stats(&self, project_id: &str) -> Result<ProjectStats> {
        validation::validate_project_id(project_id)?;

        let mut stats: ProjectStats =
            self.transport
                .send(Endpoint::ProjectStats(project_id), None::<&()>, None)?;
        if stats.project_id.is_empty() {
            stats.project_id = project_id.to_string();
        }
        Ok(stats)
    }

    pub fn health_check(&self) -> Result<HealthStatus> {
        self.transport.send(Endpoint::Health, None::<&()>, None)
    }

    fn resolve_content(&self, content: &Content) -> Result<Vec<ContentItem>> {
        content
            .resolve()?
            .into_iter()
            .map(|resolved| match resolved {
                Resolved::Item(item) => Ok(item),
                Resolved::Remote(url) => self.transport.fetch_image(&url),
            })
            .collect()
    }
}

impl std::fmt::Debug for ClassifAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("blocking::ClassifAiClient")
            .field("config", &self.config)
            .finish()
    }
}
