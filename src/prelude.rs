//! Minimal prelude for application code.

pub use crate::client::{ClassifAiClient, ClassifAiClientBuilder};
pub use crate::content::{Content, ContentItem};
pub use crate::error_code::ErrorCode;
pub use crate::types::{ClassifyOptions, ClassifyResult, FeedbackResult, GroundTruth, ProjectStats};
pub use crate::{Error, Result};
