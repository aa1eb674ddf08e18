//! Classification request/response types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

use crate::content::ContentItem;

/// Smallest accepted candidate label set.
pub const MIN_LABELS: usize = 2;
/// Largest accepted candidate label set.
pub const MAX_LABELS: usize = 50;
/// Longest accepted description, in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 500;

/// Optional parameters of a `classify` call.
///
/// At least one of `labels`, `description` or `project_id` must be set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassifyOptions {
    /// Candidate labels, 2 to 50 of them. Default: none, in which case the
    /// service uses `description` or the project's stored labels. An empty
    /// list counts as none.
    pub labels: Option<Vec<String>>,
    /// Free-text description the service infers labels from when `labels` is
    /// absent. At most 500 characters. Default: none.
    pub description: Option<String>,
    /// Project whose stored label set is reused and whose statistics record
    /// this call. Default: none, the service assigns a project.
    pub project_id: Option<String>,
    /// Overrides the client-wide request timeout for this call. Default: none.
    pub timeout: Option<Duration>,
}

impl ClassifyOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Labels to send, with an empty list treated as absent.
    pub(crate) fn effective_labels(&self) -> Option<&[String]> {
        self.labels.as_deref().filter(|l| !l.is_empty())
    }

    pub(crate) fn effective_description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }

    pub(crate) fn effective_project_id(&self) -> Option<&str> {
        self.project_id.as_deref().filter(|p| !p.is_empty())
    }
}

/// Body of `POST /classify`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifyRequest {
    pub content: Vec<ContentItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

impl ClassifyRequest {
    pub fn new(content: Vec<ContentItem>, options: &ClassifyOptions) -> Self {
        Self {
            content,
            labels: options.effective_labels().map(<[String]>::to_vec),
            description: options.effective_description().map(String::from),
            project_id: options.effective_project_id().map(String::from),
        }
    }
}

/// Result of a classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifyResult {
    /// Selected label.
    pub label: String,
    /// Confidence in `[0, 1]` for every candidate label.
    pub labels: HashMap<String, f64>,
    /// Opaque id of this detection, used for feedback.
    pub detection_id: String,
    /// Project the call was recorded under (echoed or newly assigned).
    pub project_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels_used: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ground_truth_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_used: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processing_time_ms: Option<f64>,
}

impl ClassifyResult {
    /// Score of the selected label.
    pub fn confidence(&self) -> Option<f64> {
        self.labels.get(&self.label).copied()
    }

    /// Labels sorted by descending score; ties keep alphabetical order.
    pub fn ranked(&self) -> Vec<(&str, f64)> {
        let mut ranked: Vec<(&str, f64)> = self
            .labels
            .iter()
            .map(|(label, score)| (label.as_str(), *score))
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked
    }
}
