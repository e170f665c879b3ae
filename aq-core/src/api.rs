//! Native transport over `reqwest`, for the CLI.

use log::warn;
use reqwest::Client;
use url::Url;

use crate::error::QueryError;
use crate::transport::Transport;

/// `reqwest` backed [`Transport`].
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: &Url) -> Result<String, QueryError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| QueryError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Bad response status for {}: {}", url, status);
            return Err(QueryError::Status {
                code: status.as_u16(),
                text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| QueryError::Transport(format!("failed to read response body: {}", e)))
    }
}
