//! # classifai
//!
//! Client library for the ClassifAI multimodal classification API.
//!
//! ## Overview
//!
//! All classification happens in the remote service. This crate builds
//! requests from text and image content, sends them over HTTPS, and parses the
//! typed responses for classification, ground-truth feedback and project
//! statistics.
//!
//! ## Key Features
//!
//! - **Content normalization**: strings are sniffed as local files, URLs or
//!   text ([`content`]); images are always sent base64-encoded
//! - **Typed results**: [`ClassifyResult`], [`FeedbackResult`], [`ProjectStats`]
//! - **Typed errors**: one [`Error`] variant per failure kind, with HTTP
//!   status and service message attached
//! - **Async and blocking**: [`ClassifAiClient`] on tokio, `blocking::ClassifAiClient`
//!   with identical semantics (feature `blocking`, on by default)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use classifai::{ClassifAiClient, ClassifyOptions};
//!
//! #[tokio::main]
//! async fn main() -> classifai::Result<()> {
//!     let client = ClassifAiClient::builder()
//!         .api_key("your-api-key")
//!         .build()?;
//!
//!     let result = client
//!         .classify(
//!             vec!["Customer reported error in checkout", "screenshot.png"],
//!             ClassifyOptions::new().labels(["bug_report", "feature_request", "question"]),
//!         )
//!         .await?;
//!     println!("{} ({:?})", result.label, result.confidence());
//!
//!     client.submit_feedback(&result.detection_id, "bug_report").await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Client builder, configuration and facades |
//! | [`content`] | Content items and the normalization precedence chain |
//! | [`types`] | Request and response types |
//! | [`error_code`] | HTTP status to canonical error code mapping |
//! | [`transport`] | HTTP transport shared by both clients |

pub mod client;
pub mod content;
pub mod error_code;
pub mod prelude;
pub mod transport;
pub mod types;

#[cfg(feature = "blocking")]
pub use client::blocking;

pub use client::{ClassifAiClient, ClassifAiClientBuilder, ClientConfig};
pub use content::{Content, ContentInput, ContentItem, ContentKind};
pub use types::{
    ClassifyOptions, ClassifyRequest, ClassifyResult, FeedbackResult, GroundTruth, HealthStatus,
    ProjectStats,
};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
