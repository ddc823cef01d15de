use crate::application::ports::TranscriptionError;
use crate::infrastructure::observability::redact_secrets;

pub(super) fn request_failed(error: reqwest::Error) -> TranscriptionError {
    let kind = if error.is_timeout() {
        "timed out"
    } else if error.is_connect() {
        "connect"
    } else {
        "request"
    };
    TranscriptionError::ApiRequestFailed(redact_secrets(&format!("{}: {}", kind, error)))
}

/// Turns a non-2xx response into `ApiRequestFailed` carrying the redacted body.
pub(super) async fn require_success(
    response: reqwest::Response,
) -> Result<reqwest::Response, TranscriptionError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(TranscriptionError::ApiRequestFailed(format!(
        "status {}: {}",
        status,
        redact_secrets(body.trim())
    )))
}
