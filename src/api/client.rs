//! HTTP API Client
//!
//! Functions for communicating with the SubTrack REST API.

use gloo_net::http::Request;

/// Default API base URL, same-origin
pub const DEFAULT_API_BASE: &str = "/api";

/// Milliseconds before an in-flight delete is abandoned client-side
const DELETE_TIMEOUT_MS: u32 = 10_000;

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("subtrack_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item("subtrack_api_url", url);
        }
    }
}

/// Endpoint for one subscription
fn subscription_url(api_base: &str, id: i64) -> String {
    format!("{}/subscriptions/{}", api_base, id)
}

#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    pub error: String,
    #[serde(default)]
    pub code: Option<String>,
}

/// Cancel a subscription. The request is aborted client-side when the
/// server does not answer within the timeout, which surfaces as an
/// ordinary network error.
pub async fn delete_subscription(id: i64) -> Result<(), String> {
    let url = subscription_url(&get_api_base(), id);

    let request = Request::delete(&url);

    let request = match web_sys::AbortController::new() {
        Ok(controller) => {
            let signal = controller.signal();
            gloo_timers::callback::Timeout::new(DELETE_TIMEOUT_MS, move || {
                controller.abort();
            })
            .forget();
            request.abort_signal(Some(&signal))
        }
        Err(_) => request,
    };

    let response = request
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { error: "Unknown error".to_string(), code: None });
        return Err(error.error);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscription_url() {
        assert_eq!(subscription_url("/api", 7), "/api/subscriptions/7");
        assert_eq!(
            subscription_url("http://localhost:5000/api", 42),
            "http://localhost:5000/api/subscriptions/42"
        );
    }
}
