//! Collapses every response outcome into either the parsed body or one
//! [`Error`].
//!
//! Order of evaluation:
//! 1. 2xx without a JSON content type is an invalid response format.
//! 2. 2xx with a body that does not parse is a parse failure.
//! 3. non-2xx with a JSON error body is passed through as reported.
//! 4. anything else is a gateway error, classified by status code.

use serde::de::DeserializeOwned;

use crate::{http::HttpResponse, Error, ErrorBody, ErrorKind, Result, DEFAULT_ERROR_TEXT};

const MISSING_KEY_DETAILS: &str = "Please ensure you have provided a valid API key";
const NO_ENDPOINT_DETAILS: &str = "The API endpoint you are trying to access does not exist";
const LIMIT_DETAILS: &str = "You have exceeded the request limit for the current period";

pub fn parse_response<T>(response: &HttpResponse) -> Result<T>
where
    T: DeserializeOwned,
{
    if !response.is_success() {
        return Err(error_from_response(response));
    }

    if !response.is_json() {
        return Err(Error::internal(
            "Invalid response format",
            format!(
                "Expected JSON response but received {}",
                response.content_type().unwrap_or("no content type")
            ),
        ));
    }

    serde_json::from_str(&response.body)
        .map_err(|err| Error::internal("Failed to parse response", err.to_string()))
}

/// Build the error for a non-2xx response.
pub fn error_from_response(response: &HttpResponse) -> Error {
    if response.is_json() {
        // A JSON body outside the documented error shape is treated like
        // gateway text.
        if let Some(err) = serde_json::from_str::<ErrorBody>(&response.body)
            .ok()
            .and_then(ErrorBody::into_error)
        {
            return err;
        }
    }
    gateway_error(response.status, &response.body)
}

/// Map a plaintext failure from the API gateway by status code alone.
pub fn gateway_error(status: u16, body: &str) -> Error {
    let (kind, message, fallback) = match status {
        403 => (
            ErrorKind::InvalidRequest,
            "Invalid or missing API key",
            MISSING_KEY_DETAILS,
        ),
        404 => (
            ErrorKind::InvalidRequest,
            "Endpoint does not exist",
            NO_ENDPOINT_DETAILS,
        ),
        429 => (ErrorKind::LimitExceeded, "Limit exceeded", LIMIT_DETAILS),
        _ => (ErrorKind::InternalError, DEFAULT_ERROR_TEXT, DEFAULT_ERROR_TEXT),
    };
    let details = if body.trim().is_empty() { fallback } else { body };

    Error::new(kind).with_message(message).with_details(details)
}
