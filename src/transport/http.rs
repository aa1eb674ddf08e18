use super::{fetch_failed, finish, parse_remote, Endpoint, TransportError, REQUEST_ID_HEADER};
use crate::client::ClientConfig;
use crate::content::ContentItem;
use crate::{Error, ErrorContext, Result};
use reqwest::header::ACCEPT;
use reqwest::Proxy;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::{debug, warn};
use url::Url;
use uuid::Uuid;

/// Async transport over a shared `reqwest::Client`.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
    api_key: Option<String>,
    fetch_timeout: Duration,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str());

        if let Some(proxy_url) = &config.proxy {
            let proxy = Proxy::all(proxy_url).map_err(|e| {
                Error::configuration_with_context(
                    format!("invalid proxy URL: {}", e),
                    ErrorContext::new().with_field_path("proxy"),
                )
            })?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| Error::Transport(TransportError::Other(e.to_string())))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            fetch_timeout: config.fetch_timeout,
        })
    }

    /// One round trip to the service. `timeout` overrides the client-wide timeout.
    pub(crate) async fn send<B, T>(
        &self,
        endpoint: Endpoint<'_>,
        body: Option<&B>,
        timeout: Option<Duration>,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = endpoint.url(&self.base_url)?;
        let request_id = Uuid::new_v4().to_string();

        let mut req = self
            .client
            .request(endpoint.method(), url)
            .header(ACCEPT, "application/json")
            .header(REQUEST_ID_HEADER, request_id.as_str());
        if let Some(key) = &self.api_key {
            req = req.bearer_auth(key);
        }
        if let Some(body) = body {
            req = req.json(body);
        }
        if let Some(timeout) = timeout {
            req = req.timeout(timeout);
        }

        debug!(
            endpoint = endpoint.name(),
            request_id = request_id.as_str(),
            authenticated = self.api_key.is_some(),
            "sending classifai request"
        );
        let started = Instant::now();
        let resp = req.send().await.map_err(TransportError::Http)?;

        let status = resp.status().as_u16();
        let headers = resp.headers().clone();
        let text = resp.text().await.map_err(TransportError::Http)?;
        finish(endpoint, &request_id, started, status, &headers, &text)
    }

    /// Download an image for the content normalizer.
    ///
    /// The API key is never sent to these URLs.
    pub(crate) async fn fetch_image(&self, raw_url: &str) -> Result<ContentItem> {
        let url = parse_remote(raw_url)?;
        let resp = self
            .client
            .get(url)
            .timeout(self.fetch_timeout)
            .send()
            .await
            .map_err(|e| fetch_failed(raw_url, e))?;

        let status = resp.status();
        if !status.is_success() {
            warn!(url = raw_url, http_status = status.as_u16(), "image download failed");
            return Err(Error::content_fetch(
                raw_url,
                format!("download failed with HTTP {}", status),
                Some(status.as_u16()),
            ));
        }

        let bytes = resp.bytes().await.map_err(|e| fetch_failed(raw_url, e))?;
        debug!(url = raw_url, size = bytes.len(), "downloaded remote image");
        Ok(ContentItem::image_bytes(bytes))
    }
}
