//! Project statistics.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Accumulated statistics of a project, from `GET /projects/{id}/stats`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectStats {
    /// Filled from the requested id when the payload omits it.
    #[serde(default)]
    pub project_id: String,
    pub total_classifications: u64,
    /// Accuracy measured against submitted ground truth, in `[0, 1]`.
    pub accuracy_rate: f64,
    /// Occurrences of each predicted label.
    pub label_distribution: HashMap<String, u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_content_items_classified: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_feedback_received: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ground_truth_distribution: Option<HashMap<String, u64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_types_used: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inferred_labels: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_used_at: Option<String>,
}

impl ProjectStats {
    /// Most frequently predicted label.
    pub fn top_label(&self) -> Option<&str> {
        self.label_distribution
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(label, _)| label.as_str())
    }
}
