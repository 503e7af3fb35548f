//! HTTP helpers for the partners JSON API with consistent timeouts, cookie
//! credentials, and error handling. Feature clients use these helpers to avoid
//! duplicating request setup and to enforce a predictable timeout policy. Every
//! request includes credentials so the `HttpOnly` session cookie travels with it.

use super::{
    config::AppConfig,
    errors::{AppError, message_from_body},
};
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::callback::Timeout;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::to_string;
use tracing::{debug, warn};
use web_sys::{AbortController, AbortSignal, RequestCredentials};

/// Default request timeout (milliseconds) applied to all HTTP helpers.
const DEFAULT_TIMEOUT_MS: u32 = 10_000;

/// Fetches JSON with cookies and decodes it into the endpoint schema.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, AppError> {
    let url = AppConfig::load().api_url(path);
    let response = send_with_timeout(path, |signal| {
        Request::get(&url)
            .credentials(RequestCredentials::Include)
            .abort_signal(Some(signal))
            .build()
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(path, response).await
}

/// Posts a JSON body with cookies and ignores the response body.
pub async fn post_json_empty<B: Serialize>(path: &str, body: &B) -> Result<(), AppError> {
    let url = AppConfig::load().api_url(path);
    send_json(path, Request::post(&url), body).await
}

/// Replaces a resource with a JSON body and ignores the response body.
pub async fn put_json_empty<B: Serialize>(path: &str, body: &B) -> Result<(), AppError> {
    let url = AppConfig::load().api_url(path);
    send_json(path, Request::put(&url), body).await
}

/// Posts an empty body with cookies, used to clear a session.
pub async fn post_empty(path: &str) -> Result<(), AppError> {
    let url = AppConfig::load().api_url(path);
    let response = send_with_timeout(path, move |signal| {
        Request::post(&url)
            .credentials(RequestCredentials::Include)
            .abort_signal(Some(signal))
            .body("")
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_empty_response(path, response).await
}

async fn send_json<B: Serialize>(
    path: &str,
    builder: RequestBuilder,
    body: &B,
) -> Result<(), AppError> {
    let payload = to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
    let response = send_with_timeout(path, move |signal| {
        builder
            .header("Content-Type", "application/json")
            .credentials(RequestCredentials::Include)
            .abort_signal(Some(signal))
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_empty_response(path, response).await
}

/// Maps network errors into user-facing `AppError` variants with timeout detection.
fn map_request_error(err: gloo_net::Error) -> AppError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        AppError::Network(format!("Unable to reach the server: {message}"))
    }
}

/// Sends a request with an abort timeout to avoid hanging UI state.
async fn send_with_timeout(
    path: &str,
    build_request: impl FnOnce(&AbortSignal) -> Result<Request, AppError>,
) -> Result<Response, AppError> {
    let controller = AbortController::new()
        .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    debug!(path, "sending request");
    request.send().await.map_err(|err| {
        let err = map_request_error(err);
        warn!(path, error = %err, "request did not complete");
        err
    })
}

/// Parses JSON responses and surfaces HTTP errors with sanitized bodies.
async fn handle_json_response<T: DeserializeOwned>(
    path: &str,
    response: Response,
) -> Result<T, AppError> {
    if response.ok() {
        response.json::<T>().await.map_err(|err| {
            warn!(path, error = %err, "response did not match the expected schema");
            AppError::Parse(format!("Failed to decode response: {err}"))
        })
    } else {
        Err(http_error(path, response).await)
    }
}

/// Handles empty responses and returns sanitized HTTP errors when needed.
async fn handle_empty_response(path: &str, response: Response) -> Result<(), AppError> {
    if response.ok() {
        Ok(())
    } else {
        Err(http_error(path, response).await)
    }
}

async fn http_error(path: &str, response: Response) -> AppError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    warn!(path, status, "request rejected");
    AppError::Http {
        status,
        message: message_from_body(&body),
    }
}
