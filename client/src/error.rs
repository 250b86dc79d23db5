use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Fallback used for both message and details when none is supplied.
pub const DEFAULT_ERROR_TEXT: &str = "An unexpected error occurred";

/// Closed set of error kinds reported by the API and by this client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorKind {
    InvalidRequest,
    MissingParameters,
    InternalError,
    TranscriptUnavailable,
    VideoNotFound,
    VideoIdInvalid,
    YoutubeApiError,
    LimitExceeded,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidRequest => "invalid-request",
            ErrorKind::MissingParameters => "missing-parameters",
            ErrorKind::InternalError => "internal-error",
            ErrorKind::TranscriptUnavailable => "transcript-unavailable",
            ErrorKind::VideoNotFound => "video-not-found",
            ErrorKind::VideoIdInvalid => "video-id-invalid",
            ErrorKind::YoutubeApiError => "youtube-api-error",
            ErrorKind::LimitExceeded => "limit-exceeded",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured error body returned by the application tier.
///
/// Older API versions name the kind field `error`, newer ones `kind`. Either
/// or both may be present; `error` wins when they disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ErrorKind>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub documentation_url: Option<String>,
}

/// The single error type produced by every client operation.
///
/// Whatever went wrong (a local validation failure, a transport failure, a
/// gateway rejection or an error reported by the API itself) ends up here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
    pub details: String,
    pub documentation_url: String,
}

impl Error {
    /// Create an error of the given kind with every text field defaulted.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: DEFAULT_ERROR_TEXT.to_string(),
            details: DEFAULT_ERROR_TEXT.to_string(),
            documentation_url: String::new(),
        }
    }

    pub fn with_message<S: Into<String>>(mut self, message: S) -> Self {
        self.message = or_default(message.into());
        self
    }

    pub fn with_details<S: Into<String>>(mut self, details: S) -> Self {
        self.details = or_default(details.into());
        self
    }

    pub fn with_documentation_url<S: Into<String>>(mut self, url: S) -> Self {
        self.documentation_url = url.into();
        self
    }

    pub(crate) fn internal<M: Into<String>, D: Into<String>>(message: M, details: D) -> Self {
        Error::new(ErrorKind::InternalError)
            .with_message(message)
            .with_details(details)
    }

    pub(crate) fn invalid_request<M: Into<String>, D: Into<String>>(message: M, details: D) -> Self {
        Error::new(ErrorKind::InvalidRequest)
            .with_message(message)
            .with_details(details)
    }
}

impl ErrorBody {
    pub fn error_kind(&self) -> Option<ErrorKind> {
        self.error.or(self.kind)
    }

    /// The normalized error, or `None` when the body names no kind.
    pub fn into_error(self) -> Option<Error> {
        let kind = self.error_kind()?;
        Some(
            Error::new(kind)
                .with_message(self.message.unwrap_or_default())
                .with_details(self.details.unwrap_or_default())
                .with_documentation_url(self.documentation_url.unwrap_or_default()),
        )
    }
}

fn or_default(value: String) -> String {
    if value.is_empty() {
        DEFAULT_ERROR_TEXT.to_string()
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_error_uses_defaults() {
        let err = Error::new(ErrorKind::InvalidRequest);
        assert_eq!(err.kind, ErrorKind::InvalidRequest);
        assert_eq!(err.message, DEFAULT_ERROR_TEXT);
        assert_eq!(err.details, DEFAULT_ERROR_TEXT);
        assert_eq!(err.documentation_url, "");
    }

    #[test]
    fn test_empty_strings_fall_back() {
        let err = Error::new(ErrorKind::InternalError)
            .with_message("")
            .with_details("");
        assert_eq!(err.message, DEFAULT_ERROR_TEXT);
        assert_eq!(err.details, DEFAULT_ERROR_TEXT);
    }

    #[test]
    fn test_construction_is_idempotent() {
        let build = || {
            Error::new(ErrorKind::VideoNotFound)
                .with_message("Video not found")
                .with_details("gone")
                .with_documentation_url("https://docs.supadata.ai/errors")
        };
        assert_eq!(build(), build());
    }

    #[test]
    fn test_error_body_accepts_both_field_names() {
        let legacy: ErrorBody =
            serde_json::from_str(r#"{"error":"video-not-found","message":"m"}"#).unwrap();
        let current: ErrorBody =
            serde_json::from_str(r#"{"kind":"video-not-found","message":"m"}"#).unwrap();
        assert_eq!(legacy.error_kind(), Some(ErrorKind::VideoNotFound));
        assert_eq!(current.error_kind(), Some(ErrorKind::VideoNotFound));
    }

    #[test]
    fn test_error_body_with_both_field_names() {
        let body: ErrorBody = serde_json::from_str(
            r#"{"error":"video-not-found","kind":"video-not-found","message":"Video not found"}"#,
        )
        .unwrap();
        assert_eq!(body.error_kind(), Some(ErrorKind::VideoNotFound));
        let err = body.into_error().unwrap();
        assert_eq!(err.kind, ErrorKind::VideoNotFound);
        assert_eq!(err.message, "Video not found");
    }

    #[test]
    fn test_error_body_without_kind_is_not_an_error() {
        let body: ErrorBody = serde_json::from_str(r#"{"message":"m"}"#).unwrap();
        assert!(body.into_error().is_none());
    }

    #[test]
    fn test_error_from_body() {
        let body: ErrorBody = serde_json::from_str(
            r#"{"error":"limit-exceeded","message":"Slow down","details":"d","documentationUrl":"https://docs"}"#,
        )
        .unwrap();
        let err = body.into_error().unwrap();
        assert_eq!(err.kind, ErrorKind::LimitExceeded);
        assert_eq!(err.message, "Slow down");
        assert_eq!(err.details, "d");
        assert_eq!(err.documentation_url, "https://docs");
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        assert!(serde_json::from_str::<ErrorBody>(r#"{"error":"not-found"}"#).is_err());
    }

    #[test]
    fn test_display() {
        let err = Error::invalid_request("Invalid limit.", "x");
        assert_eq!(err.to_string(), "invalid-request: Invalid limit.");
    }
}
