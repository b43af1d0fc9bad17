//! HTTP helpers for the verification API with a consistent timeout and error
//! mapping. The verification service reports both success and failure through
//! a JSON body carrying a human-readable `message`, so non-2xx responses are
//! decoded for that field before falling back to the raw body text.

use super::{config::AppConfig, errors::AppError};
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::to_string;
use web_sys::AbortController;

/// Request timeout (milliseconds) applied to every call, so a stalled server
/// cannot leave the form in its busy state forever.
const DEFAULT_TIMEOUT_MS: u32 = 10_000;
/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

/// Posts JSON and parses a JSON response.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, AppError> {
    let url = build_url(path);
    let payload = to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
    let response = send_with_timeout(move |signal| {
        Request::post(&url)
            .header("Content-Type", "application/json")
            .abort_signal(Some(signal))
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response).await
}

/// Builds a URL from the configured API base URL and the provided path.
fn build_url(path: &str) -> String {
    let config = AppConfig::load();
    build_url_with_base(&config.api_base_url, path)
}

/// Builds a URL from an explicit base URL and the provided path.
fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
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
    build_request: impl FnOnce(&web_sys::AbortSignal) -> Result<gloo_net::http::Request, AppError>,
) -> Result<gloo_net::http::Response, AppError> {
    let controller = AbortController::new()
        .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    request.send().await.map_err(map_request_error)
}

/// Parses JSON responses; non-2xx responses surface the server's `message`.
async fn handle_json_response<T: DeserializeOwned>(
    response: gloo_net::http::Response,
) -> Result<T, AppError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(AppError::Http {
            status,
            message: error_message(&body),
        })
    }
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    message: String,
}

/// Extracts the human-readable message from an error body, preferring the
/// JSON `message` field and falling back to the sanitized raw text.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) if !parsed.message.trim().is_empty() => parsed.message,
        _ => sanitize_body(body),
    }
}

/// Sanitizes HTTP error bodies for user-facing messages by trimming and truncating.
fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{
        AppError, MAX_ERROR_CHARS, build_url_with_base, error_message, map_request_error,
        sanitize_body,
    };

    #[test]
    fn error_message_prefers_the_json_message_field() {
        let body = r#"{"message":"The OTP is invalid"}"#;
        assert_eq!(error_message(body), "The OTP is invalid");
    }

    #[test]
    fn error_message_ignores_a_blank_json_message() {
        let body = r#"{"message":"   "}"#;
        assert_eq!(error_message(body), body, "blank messages fall back to the raw body");
    }

    #[test]
    fn error_message_passes_non_json_bodies_through() {
        assert_eq!(error_message("upstream unavailable"), "upstream unavailable");
    }

    #[test]
    fn sanitize_body_truncates_oversized_bodies() {
        let body = "x".repeat(MAX_ERROR_CHARS + 50);
        let sanitized = sanitize_body(&body);
        assert_eq!(sanitized.chars().count(), MAX_ERROR_CHARS);
    }

    #[test]
    fn sanitize_body_replaces_empty_bodies() {
        assert_eq!(sanitize_body(""), "Request failed.");
        assert_eq!(sanitize_body("  \n  "), "Request failed.");
    }

    #[test]
    fn build_url_with_base_joins_with_a_single_slash() {
        assert_eq!(
            build_url_with_base("http://localhost:4000/", "/otp/validate"),
            "http://localhost:4000/otp/validate"
        );
        assert_eq!(
            build_url_with_base("http://localhost:4000", "otp/validate"),
            "http://localhost:4000/otp/validate"
        );
        assert_eq!(build_url_with_base("", "otp/validate"), "otp/validate");
    }

    #[test]
    fn map_request_error_separates_timeouts_from_network_failures() {
        let aborted = map_request_error(gloo_net::Error::GlooError(
            "AbortError: The user aborted a request.".to_string(),
        ));
        assert!(matches!(aborted, AppError::Timeout(_)));

        let refused = map_request_error(gloo_net::Error::GlooError("Failed to fetch".to_string()));
        assert!(matches!(refused, AppError::Network(_)));
    }
}
