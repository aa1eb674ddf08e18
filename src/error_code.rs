//! Canonical error codes for ClassifAI API failures.
//!
//! Every HTTP status returned by the service maps to one [`ErrorCode`]. The code
//! decides which [`crate::Error`] variant a failed call surfaces as, and carries
//! a `retryable` hint for callers that run their own retry loop. The client
//! itself never retries.
//!
//! | Prefix | Category | Description                     |
//! |--------|----------|---------------------------------|
//! | E1xxx  | client   | Request-side errors             |
//! | E2xxx  | rate     | Rate limit errors               |
//! | E3xxx  | server   | Service-side or network errors  |
//! | E4xxx  | content  | Local content resolution errors |
//! | E9xxx  | unknown  | Catch-all / unclassified        |
//!
//! ```rust
//! use classifai::error_code::ErrorCode;
//!
//! let code = ErrorCode::from_http_status(429);
//! assert_eq!(code.code(), "E2001");
//! assert!(code.retryable());
//! assert_eq!(code.category(), "rate");
//! ```

use std::fmt;

/// Canonical error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// E1001: Malformed request, invalid parameters, or missing required fields
    InvalidRequest,
    /// E1002: Invalid or missing API key
    Authentication,
    /// E1003: Valid credentials but the project belongs to someone else
    PermissionDenied,
    /// E1004: Project, detection, or endpoint does not exist
    NotFound,
    /// E1005: Payload too large for the service
    RequestTooLarge,
    /// E2001: Request rate limit exceeded
    RateLimited,
    /// E3001: Internal server error on the service side
    ServerError,
    /// E3002: Service temporarily unavailable
    Overloaded,
    /// E3003: Request timed out before a response was received
    Timeout,
    /// E3004: Connection could not be established or was dropped
    Network,
    /// E4001: Local file or remote image could not be read
    ContentFetch,
    /// E4002: Client configuration is invalid
    Configuration,
    /// E9999: Error could not be classified
    Unknown,
}

impl ErrorCode {
    /// Returns the canonical code string (e.g., `"E1001"`).
    #[inline]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidRequest => "E1001",
            Self::Authentication => "E1002",
            Self::PermissionDenied => "E1003",
            Self::NotFound => "E1004",
            Self::RequestTooLarge => "E1005",
            Self::RateLimited => "E2001",
            Self::ServerError => "E3001",
            Self::Overloaded => "E3002",
            Self::Timeout => "E3003",
            Self::Network => "E3004",
            Self::ContentFetch => "E4001",
            Self::Configuration => "E4002",
            Self::Unknown => "E9999",
        }
    }

    /// Returns the standard name (e.g., `"invalid_request"`).
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::InvalidRequest => "invalid_request",
            Self::Authentication => "authentication",
            Self::PermissionDenied => "permission_denied",
            Self::NotFound => "not_found",
            Self::RequestTooLarge => "request_too_large",
            Self::RateLimited => "rate_limited",
            Self::ServerError => "server_error",
            Self::Overloaded => "overloaded",
            Self::Timeout => "timeout",
            Self::Network => "network",
            Self::ContentFetch => "content_fetch",
            Self::Configuration => "configuration",
            Self::Unknown => "unknown",
        }
    }

    /// Whether a caller-side retry has a reasonable chance of succeeding.
    #[inline]
    pub fn retryable(&self) -> bool {
        matches!(
            self,
            Self::RateLimited | Self::ServerError | Self::Overloaded | Self::Timeout | Self::Network
        )
    }

    /// Returns the category: `"client"`, `"rate"`, `"server"`, `"content"`, or `"unknown"`.
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidRequest
            | Self::Authentication
            | Self::PermissionDenied
            | Self::NotFound
            | Self::RequestTooLarge => "client",
            Self::RateLimited => "rate",
            Self::ServerError | Self::Overloaded | Self::Timeout | Self::Network => "server",
            Self::ContentFetch | Self::Configuration => "content",
            Self::Unknown => "unknown",
        }
    }

    /// Maps an HTTP status code to its `ErrorCode`.
    ///
    /// 400 and 422 both mean the service rejected the request body. Statuses
    /// without a dedicated mapping fall back on their class: other 5xx are
    /// `ServerError`, everything else is `Unknown`.
    pub fn from_http_status(status: u16) -> Self {
        match status {
            400 | 422 => Self::InvalidRequest,
            401 => Self::Authentication,
            403 => Self::PermissionDenied,
            404 => Self::NotFound,
            408 | 504 => Self::Timeout,
            413 => Self::RequestTooLarge,
            429 => Self::RateLimited,
            502 | 503 => Self::Overloaded,
            500..=599 => Self::ServerError,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
