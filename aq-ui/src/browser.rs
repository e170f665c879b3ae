//! Browser capabilities through `web-sys`.
//!
//! - [`BrowserTransport`]: the status request via `window.fetch`
//! - [`current_position`]: a one-shot geolocation fix
//! - [`origin_url`]: the page origin, used as the service base URL

use aq_core::{QueryError, Transport};
use js_sys::Promise;
use log::warn;
use url::Url;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Position as GeolocationPosition, Response};

/// Base URL used when the page origin cannot be read.
const FALLBACK_ORIGIN: &str = "http://localhost/";

/// [`Transport`] over the Fetch API.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    async fn get(&self, url: &Url) -> Result<String, QueryError> {
        let window =
            web_sys::window().ok_or_else(|| QueryError::Transport("no window".to_string()))?;

        let response = JsFuture::from(window.fetch_with_str(url.as_str()))
            .await
            .map_err(js_error)?;
        let response: Response = response
            .dyn_into()
            .map_err(|_| QueryError::Transport("fetch did not yield a Response".to_string()))?;

        if !response.ok() {
            warn!("Bad response status for {}: {}", url, response.status());
            return Err(QueryError::Status {
                code: response.status(),
                text: response.status_text(),
            });
        }

        let body = JsFuture::from(response.text().map_err(js_error)?)
            .await
            .map_err(js_error)?;
        body.as_string()
            .ok_or_else(|| QueryError::Decode("response body is not text".to_string()))
    }
}

/// Turn a rejected JS value into a readable transport error.
fn js_error(value: JsValue) -> QueryError {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    QueryError::Transport(message)
}

/// Ask the browser for the current position.
///
/// Returns `(latitude, longitude)`. A missing capability, a denied
/// permission or a timeout all yield `None`; the failure is only logged.
pub async fn current_position() -> Option<(f64, f64)> {
    let geolocation = match web_sys::window().map(|w| w.navigator().geolocation()) {
        Some(Ok(geolocation)) => geolocation,
        _ => {
            warn!("Geolocation is not available");
            return None;
        }
    };

    let promise = Promise::new(&mut |resolve, reject| {
        if let Err(e) = geolocation.get_current_position_with_error_callback(&resolve, Some(&reject))
        {
            let _ = reject.call1(&JsValue::NULL, &e);
        }
    });

    match JsFuture::from(promise).await {
        Ok(value) => {
            let coords = value.unchecked_into::<GeolocationPosition>().coords();
            Some((coords.latitude(), coords.longitude()))
        }
        Err(e) => {
            warn!("Geolocation failed: {:?}", e);
            None
        }
    }
}

/// The page origin as a base URL for `/api/status/*`.
pub fn origin_url() -> Url {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .and_then(|origin| Url::parse(&origin).ok())
        .unwrap_or_else(|| {
            warn!("Page origin unavailable, using {}", FALLBACK_ORIGIN);
            Url::parse(FALLBACK_ORIGIN).expect("fallback origin is a valid URL")
        })
}
