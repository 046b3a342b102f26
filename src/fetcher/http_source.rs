use crate::error::{FetchError, Result};
use crate::fetcher::{Payload, StationSource};
use reqwest::Client;
use tracing::debug;

/// `reqwest` client with default settings: no custom headers, no explicit timeout
#[derive(Debug, Clone, Default)]
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl StationSource for HttpSource {
    async fn fetch(&self, url: &str) -> Result<Payload> {
        let request_error = |source| FetchError::Request {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(request_error)?;
        let status = response.status();
        debug!("GET {} -> {}", url, status);

        let body = response.bytes().await.map_err(request_error)?;
        Ok(Payload::new(status.as_u16(), body.to_vec()))
    }
}
