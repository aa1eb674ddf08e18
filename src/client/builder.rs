use crate::client::core::ClassifAiClient;
use crate::{Error, ErrorContext, Result};
use std::fmt;
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://api.classifai.dev";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

const KEYRING_SERVICE: &str = "classifai";
const KEYRING_USER: &str = "api_key";

/// Resolved, immutable client configuration.
#[derive(Clone)]
pub struct ClientConfig {
    pub(crate) api_key: Option<String>,
    pub(crate) base_url: Url,
    pub(crate) timeout: Duration,
    pub(crate) fetch_timeout: Duration,
    pub(crate) user_agent: String,
    pub(crate) proxy: Option<String>,
}

impl ClientConfig {
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn fetch_timeout(&self) -> Duration {
        self.fetch_timeout
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .field("fetch_timeout", &self.fetch_timeout)
            .field("user_agent", &self.user_agent)
            .field("proxy", &self.proxy)
            .finish()
    }
}

/// Builder for creating clients with custom configuration.
///
/// Unset values fall back on environment variables, then on defaults:
/// - `CLASSIFAI_API_KEY` (default: anonymous access)
/// - `CLASSIFAI_BASE_URL` (default `https://api.classifai.dev`)
/// - `CLASSIFAI_TIMEOUT_SECS` (default 30)
/// - `CLASSIFAI_FETCH_TIMEOUT_SECS` (default 30)
/// - `CLASSIFAI_PROXY_URL` (default: none)
pub struct ClassifAiClientBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    fetch_timeout: Option<Duration>,
    user_agent: Option<String>,
    proxy: Option<String>,
    use_keyring: bool,
}

impl ClassifAiClientBuilder {
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: None,
            timeout: None,
            fetch_timeout: None,
            user_agent: None,
            proxy: None,
            use_keyring: false,
        }
    }

    /// API key sent as a bearer credential.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Force anonymous access, ignoring `CLASSIFAI_API_KEY` and the keyring.
    pub fn anonymous(mut self) -> Self {
        self.api_key = Some(String::new());
        self.use_keyring = false;
        self
    }

    /// Override the service base URL (e.g., a staging host or a mock server).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Timeout for each call to the service.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Timeout for each image download during content normalization.
    pub fn fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Route all traffic through this proxy.
    pub fn proxy(mut self, proxy_url: impl Into<String>) -> Self {
        self.proxy = Some(proxy_url.into());
        self
    }

    /// Look the API key up in the OS keyring (service `classifai`, user
    /// `api_key`) when neither an explicit key nor `CLASSIFAI_API_KEY` is set.
    pub fn use_keyring(mut self, enable: bool) -> Self {
        self.use_keyring = enable;
        self
    }

    /// Build the async client.
    pub fn build(self) -> Result<ClassifAiClient> {
        ClassifAiClient::from_config(self.into_config()?)
    }

    /// Build the blocking client.
    #[cfg(feature = "blocking")]
    pub fn build_blocking(self) -> Result<crate::client::blocking::ClassifAiClient> {
        crate::client::blocking::ClassifAiClient::from_config(self.into_config()?)
    }

    pub(crate) fn into_config(self) -> Result<ClientConfig> {
        let api_key = match self.api_key {
            Some(key) => Some(key),
            None => std::env::var("CLASSIFAI_API_KEY").ok().or_else(|| {
                if self.use_keyring {
                    keyring_api_key()
                } else {
                    None
                }
            }),
        }
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty());

        let raw_base_url = self
            .base_url
            .or_else(|| std::env::var("CLASSIFAI_BASE_URL").ok())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = parse_base_url(&raw_base_url)?;

        let timeout = self
            .timeout
            .or_else(|| env_secs("CLASSIFAI_TIMEOUT_SECS"))
            .unwrap_or(DEFAULT_TIMEOUT);
        let fetch_timeout = self
            .fetch_timeout
            .or_else(|| env_secs("CLASSIFAI_FETCH_TIMEOUT_SECS"))
            .unwrap_or(DEFAULT_FETCH_TIMEOUT);
        if timeout.is_zero() || fetch_timeout.is_zero() {
            return Err(Error::configuration_with_context(
                "timeouts must be greater than zero",
                ErrorContext::new().with_source("client_builder"),
            ));
        }

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("classifai-rust/{}", env!("CARGO_PKG_VERSION")));
        let proxy = self
            .proxy
            .or_else(|| std::env::var("CLASSIFAI_PROXY_URL").ok())
            .filter(|p| !p.trim().is_empty());

        Ok(ClientConfig {
            api_key,
            base_url,
            timeout,
            fetch_timeout,
            user_agent,
            proxy,
        })
    }
}

impl Default for ClassifAiClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn env_secs(name: &str) -> Option<Duration> {
    std::env::var(name)
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
}

fn keyring_api_key() -> Option<String> {
    let entry = keyring::Entry::new(KEYRING_SERVICE, KEYRING_USER).ok()?;
    entry.get_password().ok()
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let context = || {
        ErrorContext::new()
            .with_field_path("base_url")
            .with_details(raw.to_string())
            .with_source("client_builder")
    };
    let url = Url::parse(raw.trim())
        .map_err(|e| Error::configuration_with_context(format!("invalid base URL: {}", e), context()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::configuration_with_context(
            format!("unsupported base URL scheme '{}'", url.scheme()),
            context(),
        ));
    }
    if url.cannot_be_a_base() {
        return Err(Error::configuration_with_context(
            "base URL cannot carry a path",
            context(),
        ));
    }
    Ok(url)
}
