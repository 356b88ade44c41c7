//! API gateway for the finance backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` against
//! `base_url() + path` with a JSON content type on every request.
//! Server-side (SSR): stubs returning an error since requests are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failed request is flattened into an [`ApiError`] carrying a single
//! display string before it reaches a page. The original status and message
//! are logged to the console first; callers never see the HTTP taxonomy.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

/// Message for failures where no server response was received at all.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error occurred. Please check your connection.";
/// Message for a 404 without a server-supplied `message` field.
pub const NOT_FOUND_MESSAGE: &str = "Resource not found.";
/// Message for a 500 without a server-supplied `message` field.
pub const SERVER_ERROR_MESSAGE: &str = "Server error occurred. Please try again later.";
/// Message for any other non-2xx status without a `message` field.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred. Please try again.";

const DEFAULT_BASE_URL: &str = "/api";

/// Normalized request failure carrying only a user-facing message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiError(String);

impl ApiError {
    fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    /// The display string shown to the user.
    pub fn message(&self) -> &str {
        &self.0
    }

    /// Consume the error, yielding the display string.
    pub fn into_message(self) -> String {
        self.0
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Base URL for all requests: build-time override or the relative default.
pub fn base_url() -> &'static str {
    resolve_base_url(option_env!("FINTRACK_API_URL"))
}

fn resolve_base_url(override_url: Option<&str>) -> &str {
    match override_url {
        Some(url) if !url.trim().is_empty() => url,
        _ => DEFAULT_BASE_URL,
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn request_url(path: &str) -> String {
    format!("{}{path}", base_url())
}

/// Map a failed request to its user-facing message.
///
/// `status` is `None` when no response was received; `body` is the raw
/// response text, consulted for a server-supplied `message` field.
#[cfg(any(test, feature = "hydrate"))]
fn normalize_failure(status: Option<u16>, body: Option<&str>) -> String {
    let Some(status) = status else {
        return NETWORK_ERROR_MESSAGE.to_owned();
    };
    if let Some(message) = body.and_then(server_message) {
        return message;
    }
    match status {
        404 => NOT_FOUND_MESSAGE.to_owned(),
        500 => SERVER_ERROR_MESSAGE.to_owned(),
        _ => GENERIC_ERROR_MESSAGE.to_owned(),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("message")? {
        serde_json::Value::String(message) => Some(message.clone()),
        _ => None,
    }
}

/// `GET base_url + path`, resolving with the parsed body on any 2xx.
///
/// # Errors
///
/// Returns the normalized [`ApiError`] on any failure.
pub async fn get<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let sent = gloo_net::http::Request::get(&request_url(path))
            .header("Content-Type", "application/json")
            .send()
            .await;
        read_json(sent).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(server_side_stub())
    }
}

/// `POST base_url + path` with a JSON body.
///
/// # Errors
///
/// Returns the normalized [`ApiError`] on any failure.
pub async fn post<T: DeserializeOwned>(
    path: &str,
    body: &serde_json::Value,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = match gloo_net::http::Request::post(&request_url(path)).json(body) {
            Ok(request) => request,
            Err(err) => return Err(fail_without_response(&err)),
        };
        read_json(request.send().await).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(server_side_stub())
    }
}

/// `PUT base_url + path` with a JSON body.
///
/// # Errors
///
/// Returns the normalized [`ApiError`] on any failure.
pub async fn put<T: DeserializeOwned>(path: &str, body: &serde_json::Value) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = match gloo_net::http::Request::put(&request_url(path)).json(body) {
            Ok(request) => request,
            Err(err) => return Err(fail_without_response(&err)),
        };
        read_json(request.send().await).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(server_side_stub())
    }
}

/// `DELETE base_url + path`, discarding the body (the backend answers 204).
///
/// # Errors
///
/// Returns the normalized [`ApiError`] on any failure.
pub async fn delete(path: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let sent = gloo_net::http::Request::delete(&request_url(path))
            .header("Content-Type", "application/json")
            .send()
            .await;
        let resp = match sent {
            Ok(resp) => resp,
            Err(err) => return Err(fail_without_response(&err)),
        };
        if !resp.ok() {
            return Err(fail_with_response(&resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(server_side_stub())
    }
}

/// Fetch balance, distribution, and trends in parallel.
///
/// All-or-nothing join: if any one request fails, the whole fetch fails and
/// no partial data is handed back.
///
/// # Errors
///
/// Returns the first normalized [`ApiError`] among the three requests.
#[cfg(feature = "hydrate")]
pub async fn fetch_analytics() -> Result<
    (
        super::types::BalanceSummary,
        Vec<super::types::CategorySlice>,
        super::types::MonthlyTrends,
    ),
    ApiError,
> {
    futures::try_join!(
        get("/analytics/balance"),
        get("/analytics/category-distribution"),
        get("/analytics/monthly-trends"),
    )
}

#[cfg(feature = "hydrate")]
async fn read_json<T: DeserializeOwned>(
    sent: Result<gloo_net::http::Response, gloo_net::Error>,
) -> Result<T, ApiError> {
    let resp = match sent {
        Ok(resp) => resp,
        Err(err) => return Err(fail_without_response(&err)),
    };
    if !resp.ok() {
        return Err(fail_with_response(&resp).await);
    }
    match resp.json::<T>().await {
        Ok(body) => Ok(body),
        Err(err) => {
            let status = resp.status();
            log::error!("API Error ({status}): response decode failed: {err}");
            Err(ApiError::new(GENERIC_ERROR_MESSAGE))
        }
    }
}

#[cfg(feature = "hydrate")]
async fn fail_with_response(resp: &gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let body = resp.text().await.ok();
    let message = normalize_failure(Some(status), body.as_deref());
    log::error!("API Error ({status}): {message}");
    ApiError::new(message)
}

#[cfg(feature = "hydrate")]
fn fail_without_response(err: &gloo_net::Error) -> ApiError {
    log::error!("Network Error: {err}");
    ApiError::new(normalize_failure(None, None))
}

#[cfg(not(feature = "hydrate"))]
fn server_side_stub() -> ApiError {
    ApiError::new("not available on server")
}
