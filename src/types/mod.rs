//! # Types Module
//!
//! Typed request and response values exchanged with the ClassifAI service.
//! None of them outlive a single call; the client keeps no state between calls.
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`ClassifyOptions`] | Optional parameters of a `classify` call |
//! | [`ClassifyRequest`] | Wire body of `POST /classify` |
//! | [`ClassifyResult`] | Selected label, per-label scores, detection id |
//! | [`GroundTruth`] | One or several correct labels for a detection |
//! | [`FeedbackResult`] | Outcome of a feedback submission |
//! | [`ProjectStats`] | Accumulated statistics of a project |
//! | [`HealthStatus`] | Service liveness payload |
//!
//! ## Example
//!
//! ```rust
//! use classifai::types::{ClassifyOptions, GroundTruth};
//!
//! let options = ClassifyOptions::new()
//!     .labels(["positive", "negative", "neutral"])
//!     .project_id("reviews");
//! assert_eq!(options.labels.as_ref().map(Vec::len), Some(3));
//!
//! let truth = GroundTruth::from(vec!["positive", "helpful"]);
//! assert_eq!(truth.labels(), vec!["positive", "helpful"]);
//! ```

pub mod classify;
pub mod feedback;
pub mod health;
pub mod project;

pub use classify::{
    ClassifyOptions, ClassifyRequest, ClassifyResult, MAX_DESCRIPTION_CHARS, MAX_LABELS,
    MIN_LABELS,
};
pub use feedback::{FeedbackRequest, FeedbackResult, GroundTruth};
pub use health::HealthStatus;
pub use project::ProjectStats;
