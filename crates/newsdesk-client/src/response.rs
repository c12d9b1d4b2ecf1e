//! Mapping of HTTP responses onto [`AppError`].

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use newsdesk_core::error::{AppError, ErrorKind};
use newsdesk_core::types::ApiMessage;

/// Error kind for a non-success status.
pub fn kind_for_status(status: StatusCode) -> ErrorKind {
    match status {
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => ErrorKind::Validation,
        StatusCode::UNAUTHORIZED => ErrorKind::Authentication,
        StatusCode::FORBIDDEN => ErrorKind::Authorization,
        StatusCode::NOT_FOUND => ErrorKind::NotFound,
        StatusCode::CONFLICT => ErrorKind::Conflict,
        StatusCode::BAD_GATEWAY
        | StatusCode::SERVICE_UNAVAILABLE
        | StatusCode::GATEWAY_TIMEOUT => ErrorKind::ServiceUnavailable,
        _ => ErrorKind::ExternalService,
    }
}

/// Build the error for a non-success response.
///
/// Uses the platform's `message` field when the body carries one.
pub fn error_for_status(status: StatusCode, body: &str) -> AppError {
    let message = serde_json::from_str::<ApiMessage>(body)
        .ok()
        .and_then(|m| m.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()));
    AppError::new(kind_for_status(status), message)
}

/// Error for a request that never produced a response.
pub fn transport_error(err: reqwest::Error) -> AppError {
    let message = if err.is_timeout() {
        "The news service did not respond in time".to_string()
    } else if err.is_connect() {
        "Could not connect to the news service".to_string()
    } else {
        format!("Request to the news service failed: {err}")
    };
    AppError::with_source(ErrorKind::ExternalService, message, err)
}

/// Decode a JSON body.
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, AppError> {
    serde_json::from_str(body).map_err(|e| {
        AppError::with_source(
            ErrorKind::Serialization,
            format!("Unexpected response from the news service: {e}"),
            e,
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_kinds() {
        assert_eq!(kind_for_status(StatusCode::UNAUTHORIZED), ErrorKind::Authentication);
        assert_eq!(kind_for_status(StatusCode::NOT_FOUND), ErrorKind::NotFound);
        assert_eq!(
            kind_for_status(StatusCode::SERVICE_UNAVAILABLE),
            ErrorKind::ServiceUnavailable
        );
        assert_eq!(kind_for_status(StatusCode::INTERNAL_SERVER_ERROR), ErrorKind::ExternalService);
    }

    #[test]
    fn test_message_from_body() {
        let body = r#"{"message":"Email already exists"}"#;
        let err = error_for_status(StatusCode::BAD_REQUEST, body);
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.message, "Email already exists");

        let err = error_for_status(StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>");
        assert_eq!(err.message, "Request failed with status 500");
        assert!(err.is_transient());
    }

    #[test]
    fn test_decode_failure_is_serialization() {
        let err = decode::<ApiMessage>("not json").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Serialization);
    }
}
