use crate::error_code::ErrorCode;
use crate::transport::TransportError;
use std::time::Duration;
use thiserror::Error;

/// Structured error context for locally detected failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Field path that caused the error (e.g., "options.labels", "content[2]")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., expected range, actual value)
    pub details: Option<String>,
    /// Source of the error (e.g., "classify_validator", "client_builder")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Unified error type for the ClassifAI client.
///
/// Each variant is one failure kind callers can match on. Remote failures keep
/// the HTTP status and the message the service returned.
#[derive(Debug, Error)]
pub enum Error {
    /// Caller input was rejected, either locally before any network call
    /// (`status` is `None`) or by the service with 400/422.
    #[error("Validation error: {message}{}{}", format_status(.status), format_context(.context))]
    Validation {
        message: String,
        context: ErrorContext,
        status: Option<u16>,
    },

    /// Credential missing or invalid (401), or not allowed to touch the resource (403).
    #[error("Authentication error: HTTP {status}: {message}")]
    Authentication { status: u16, message: String },

    /// Quota exceeded (429). `retry_after_ms` holds the server's `Retry-After` hint.
    #[error("Rate limit exceeded: HTTP {status}: {message}")]
    RateLimited {
        status: u16,
        message: String,
        retry_after_ms: Option<u64>,
    },

    /// Referenced project or detection does not exist (404).
    #[error("Not found: HTTP {status}: {message}")]
    NotFound { status: u16, message: String },

    /// A local file could not be read or a remote image could not be downloaded.
    #[error("Content fetch error ({source_ref}): {message}")]
    ContentFetch {
        source_ref: String,
        message: String,
        status: Option<u16>,
    },

    /// Catch-all service failure: 5xx, unmapped statuses, or a response whose
    /// shape does not match the expected result type.
    #[error("ClassifAI API error{}: {message}", format_status(.status))]
    Api { status: Option<u16>, message: String },

    /// The request never produced an HTTP response (connect failure, timeout).
    #[error("Network transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },
}

fn format_status(status: &Option<u16>) -> String {
    match status {
        Some(s) => format!(" (HTTP {})", s),
        None => String::new(),
    }
}

// Helper function to format error context for display
fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    /// Create a local validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::validation_with_context(msg, ErrorContext::new())
    }

    /// Create a local validation error with structured context.
    pub fn validation_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Validation {
            message: msg.into(),
            context,
            status: None,
        }
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::configuration_with_context(msg, ErrorContext::new())
    }

    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    pub fn content_fetch(
        source_ref: impl Into<String>,
        msg: impl Into<String>,
        status: Option<u16>,
    ) -> Self {
        Error::ContentFetch {
            source_ref: source_ref.into(),
            message: msg.into(),
            status,
        }
    }

    /// A success response whose body does not decode into the expected type.
    pub fn unexpected_response(status: u16, detail: impl std::fmt::Display) -> Self {
        Error::Api {
            status: Some(status),
            message: format!("unexpected response shape: {}", detail),
        }
    }

    /// Build the error for a non-success HTTP status.
    pub fn from_status(status: u16, message: impl Into<String>, retry_after_ms: Option<u64>) -> Self {
        let message = message.into();
        match ErrorCode::from_http_status(status) {
            ErrorCode::InvalidRequest => Error::Validation {
                message,
                context: ErrorContext::new().with_source("service"),
                status: Some(status),
            },
            ErrorCode::Authentication | ErrorCode::PermissionDenied => {
                Error::Authentication { status, message }
            }
            ErrorCode::NotFound => Error::NotFound { status, message },
            ErrorCode::RateLimited => Error::RateLimited {
                status,
                message,
                retry_after_ms,
            },
            _ => Error::Api {
                status: Some(status),
                message,
            },
        }
    }

    /// HTTP status attached to the error, if the service answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Validation { status, .. }
            | Error::ContentFetch { status, .. }
            | Error::Api { status, .. } => *status,
            Error::Authentication { status, .. }
            | Error::RateLimited { status, .. }
            | Error::NotFound { status, .. } => Some(*status),
            Error::Transport(_) | Error::Configuration { .. } => None,
        }
    }

    /// Canonical code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::Validation { .. } => ErrorCode::InvalidRequest,
            Error::Authentication { status, .. } => ErrorCode::from_http_status(*status),
            Error::RateLimited { .. } => ErrorCode::RateLimited,
            Error::NotFound { .. } => ErrorCode::NotFound,
            Error::ContentFetch { .. } => ErrorCode::ContentFetch,
            Error::Api { status, .. } => status
                .map(ErrorCode::from_http_status)
                .unwrap_or(ErrorCode::Unknown),
            Error::Transport(e) => e.code(),
            Error::Configuration { .. } => ErrorCode::Configuration,
        }
    }

    /// Server-provided wait hint for rate-limited calls.
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            Error::RateLimited {
                retry_after_ms: Some(ms),
                ..
            } => Some(Duration::from_millis(*ms)),
            _ => None,
        }
    }

    /// True when the failure came from the service or the network rather than
    /// from local checks.
    pub fn is_remote(&self) -> bool {
        match self {
            Error::Transport(_) => true,
            Error::ContentFetch { .. } | Error::Configuration { .. } => false,
            _ => self.status().is_some(),
        }
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Validation { context, .. } | Error::Configuration { context, .. } => {
                Some(context)
            }
            _ => None,
        }
    }
}
