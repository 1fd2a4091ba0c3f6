//! Error types and failure-message derivation.

use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use serde_json::Value;
use thiserror::Error;

/// Fallback when no usable message is found anywhere in the response.
const GENERIC_MESSAGE: &str = "There was an error with the request.";

/// Error type for client operations.
#[derive(Debug, Error)]
pub enum GraphqlClientError {
    /// Network-level failure raised by the HTTP transport before a response
    /// was received. Passed through unwrapped.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// Request serialization failed, or a body declared as JSON did not
    /// parse. The latter means the content type and body disagree.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The exchange completed but did not classify as a success.
    #[error(transparent)]
    Response(Box<ResponseError>),
}

/// Normalized error for a completed, non-success exchange.
///
/// Carries the decoded response (with status and headers) and the original
/// request payload alongside a single human-readable message. Built once per
/// failed exchange and never mutated.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ResponseError {
    /// First non-empty message found by the probe order, or a fallback.
    pub message: String,
    /// Decoded response context.
    pub response: ErrorResponse,
    /// Original request payload: a structured value when the wire body
    /// parses as JSON, the raw string otherwise.
    pub request: Value,
}

/// Response side of a [`ResponseError`].
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    /// HTTP status of the exchange.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// Decoded body; text bodies are wrapped as `{"error": <text>}`.
    pub body: Value,
}

impl ResponseError {
    pub(crate) fn new(response: ErrorResponse, request: Value) -> Self {
        let message = derive_message(&response.body, response.status);
        Self {
            message,
            response,
            request,
        }
    }
}

/// Ordered message probes; the first non-empty hit wins.
///
/// If more server shapes with good messages turn up, add their probes here.
const MESSAGE_PROBES: [fn(&Value) -> Option<&str>; 4] = [
    exception_messages_message,
    exception_data_message,
    first_error_message,
    single_error_message,
];

/// Derive a single human-readable message from an error body, falling back
/// to the status reason phrase and finally a generic message.
fn derive_message(body: &Value, status: StatusCode) -> String {
    MESSAGE_PROBES
        .iter()
        .filter_map(|probe| probe(body))
        .chain(status.canonical_reason())
        .find(|message| !message.is_empty())
        .unwrap_or(GENERIC_MESSAGE)
        .to_owned()
}

fn exception(body: &Value) -> Option<&Value> {
    body.get("errors")?.get(0)?.get("extensions")?.get("exception")
}

/// `errors[0].extensions.exception.data.message[0].messages[0].message`.
fn exception_messages_message(body: &Value) -> Option<&str> {
    exception(body)?
        .get("data")?
        .get("message")?
        .get(0)?
        .get("messages")?
        .get(0)?
        .get("message")?
        .as_str()
}

/// `errors[0].extensions.exception.data.data[0].messages[0].message`.
fn exception_data_message(body: &Value) -> Option<&str> {
    exception(body)?
        .get("data")?
        .get("data")?
        .get(0)?
        .get("messages")?
        .get(0)?
        .get("message")?
        .as_str()
}

/// `errors[0].message`.
fn first_error_message(body: &Value) -> Option<&str> {
    body.get("errors")?.get(0)?.get("message")?.as_str()
}

/// `errors.message`, for servers that return a single error object instead
/// of an array.
fn single_error_message(body: &Value) -> Option<&str> {
    body.get("errors")?.get("message")?.as_str()
}
