//! Ground-truth feedback types.

use serde::{Deserialize, Serialize};

/// Correct label(s) for a prior detection.
///
/// A single label goes over the wire as a JSON string, several as an array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GroundTruth {
    Single(String),
    Multiple(Vec<String>),
}

impl GroundTruth {
    pub fn labels(&self) -> Vec<&str> {
        match self {
            GroundTruth::Single(label) => vec![label.as_str()],
            GroundTruth::Multiple(labels) => labels.iter().map(String::as_str).collect(),
        }
    }

    /// True when no non-blank label is present.
    pub fn is_empty(&self) -> bool {
        self.labels().iter().all(|l| l.trim().is_empty())
    }
}

impl From<&str> for GroundTruth {
    fn from(label: &str) -> Self {
        GroundTruth::Single(label.to_string())
    }
}

impl From<String> for GroundTruth {
    fn from(label: String) -> Self {
        GroundTruth::Single(label)
    }
}

impl From<Vec<String>> for GroundTruth {
    fn from(labels: Vec<String>) -> Self {
        GroundTruth::Multiple(labels)
    }
}

impl From<Vec<&str>> for GroundTruth {
    fn from(labels: Vec<&str>) -> Self {
        GroundTruth::Multiple(labels.into_iter().map(String::from).collect())
    }
}

impl<const N: usize> From<[&str; N]> for GroundTruth {
    fn from(labels: [&str; N]) -> Self {
        GroundTruth::Multiple(labels.iter().map(|l| l.to_string()).collect())
    }
}

/// Body of `POST /feedback`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRequest {
    pub detection_id: String,
    pub ground_truth: GroundTruth,
}

/// Outcome of a feedback submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackResult {
    pub success: bool,
    pub message: String,
    /// Labels the feedback added to the project's label set.
    #[serde(default)]
    pub new_labels_added: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detection_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_content_count: Option<u64>,
}
