//! Shared HTTP response helpers.
//!
//! Centralizes the mapping from non-success status codes to operator-facing
//! messages so request code only deals with the happy path.

use reqwest::StatusCode;

use crate::error::{ApiError, NOT_FOUND_MESSAGE};

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success. Otherwise reads the body and
/// maps the status with [`error_for_status`].
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    let error = error_for_status(status, &body);
    tracing::debug!(status = status.as_u16(), %error, "backend returned an error status");
    Err(error)
}

/// Map a non-success status and its body to an [`ApiError`].
///
/// - 401 -> "Invalid credentials"
/// - 403 -> "Access Forbidden"
/// - 404 -> the body if non-empty, else a default not-found message
/// - 500 -> a generic server-problem message
/// - other -> the body's JSON `message` field, else a generic status line
#[must_use]
pub fn error_for_status(status: StatusCode, body: &str) -> ApiError {
    match status.as_u16() {
        401 => ApiError::Unauthorized,
        403 => ApiError::Forbidden,
        404 => {
            let body = body.trim();
            ApiError::NotFound {
                message: if body.is_empty() {
                    NOT_FOUND_MESSAGE.to_string()
                } else {
                    body.to_string()
                },
            }
        }
        500 => ApiError::ServerProblem,
        code => ApiError::Api {
            status: code,
            message: body_message(body)
                .unwrap_or_else(|| format!("Request failed with status code {code}")),
        },
    }
}

/// Extract a string `message` field from a JSON error body.
fn body_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(serde_json::Value::as_str)
        .map(str::to_string)
}
