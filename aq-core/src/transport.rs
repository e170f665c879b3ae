use url::Url;

use crate::error::QueryError;

/// Outbound GET against the status service.
///
/// Implementations return the response body on a success status and map
/// everything else to a [`QueryError`]. The browser build uses `fetch`;
/// the CLI uses `reqwest` (`api::HttpTransport`, behind the `api` feature).
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn get(&self, url: &Url) -> Result<String, QueryError>;
}
