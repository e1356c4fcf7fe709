//! HTTP capability consumed by the extraction pipeline.
//!
//! Everything that touches the network goes through [`HttpFetch`] so tests
//! can swap in a fake and the pipeline stays independent of the client.

use async_trait::async_trait;
use reqwest::Client;

use crate::errors::FetchError;

const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    /// URL of the last response after following redirects.
    pub final_url: String,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn ensure_success(self) -> Result<Self, FetchError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(FetchError::Status(self.status))
        }
    }
}

#[async_trait]
pub trait HttpFetch: Send + Sync {
    /// GET `url`, following redirects. Non-2xx statuses are returned, not raised.
    async fn get(&self, url: &str) -> Result<HttpResponse, FetchError>;

    /// HEAD `url`, following redirects, and return the final URL.
    async fn head(&self, url: &str) -> Result<String, FetchError>;

    /// GET `url` as raw bytes. Non-2xx statuses are an error.
    async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// Indirection applied to requests the browser could not make cross-origin.
///
/// `Prefix` sends `prefix + percent-encoded(url)` instead of `url`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Relay {
    #[default]
    Direct,
    Prefix(String),
}

impl Relay {
    pub fn wrap(&self, url: &str) -> String {
        match self {
            Relay::Direct => url.to_string(),
            Relay::Prefix(prefix) => format!("{}{}", prefix, urlencoding::encode(url)),
        }
    }

    pub fn is_direct(&self) -> bool {
        matches!(self, Relay::Direct)
    }
}

pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    pub fn new() -> Self {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|_| Client::new());
        ReqwestFetcher { client }
    }
}

impl Default for ReqwestFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpFetch for ReqwestFetcher {
    async fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let final_url = response.url().to_string();
        let body = response.text().await?;

        Ok(HttpResponse {
            status,
            final_url,
            body,
        })
    }

    async fn head(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.head(url).send().await?;
        Ok(response.url().to_string())
    }

    async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}
