//! Response decoding and classification.

use reqwest::header::{CONTENT_TYPE, HeaderMap};
use reqwest::{Response, StatusCode};
use serde_json::{Value, json};

use crate::error::{ErrorResponse, GraphqlClientError, ResponseError};

/// Full response envelope for a successful exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphqlResponse {
    /// The `data` field of the response body.
    pub data: Value,
    /// The `extensions` field, when the server sent one.
    pub extensions: Option<Value>,
    /// HTTP status of the exchange.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
}

/// Response body decoded according to its declared content type.
#[derive(Debug)]
pub(crate) enum DecodedBody {
    Json(Value),
    Text(String),
}

/// Decode the body by `Content-Type`: an `application/json` prefix selects
/// JSON (parameters such as `; charset=utf-8` are ignored), anything else is
/// kept as text.
///
/// A parse failure on a declared-JSON body surfaces as
/// [`GraphqlClientError::Json`].
pub(crate) async fn decode_body(response: Response) -> Result<DecodedBody, GraphqlClientError> {
    let json = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/json"));
    let text = response.text().await?;
    if json {
        Ok(DecodedBody::Json(serde_json::from_str(&text)?))
    } else {
        Ok(DecodedBody::Text(text))
    }
}

/// Classify a completed exchange.
///
/// Success requires a 2xx status, no top-level `errors` field, and a `data`
/// field that is present and non-null. Anything else produces a
/// [`ResponseError`] whose request context is recovered from the wire body on
/// a best-effort basis: an unparseable body is kept as the raw string.
pub(crate) fn classify(
    status: StatusCode,
    headers: HeaderMap,
    body: DecodedBody,
    request_body: &str,
) -> Result<GraphqlResponse, Box<ResponseError>> {
    match body {
        DecodedBody::Json(mut value)
            if status.is_success()
                && value.get("errors").is_none()
                && value.get("data").is_some_and(|data| !data.is_null()) =>
        {
            let data = value.get_mut("data").map(Value::take).unwrap_or_default();
            let extensions = value.get_mut("extensions").map(Value::take);
            Ok(GraphqlResponse {
                data,
                extensions,
                status,
                headers,
            })
        }
        body => {
            let error_body = match body {
                DecodedBody::Json(value) => value,
                DecodedBody::Text(text) => json!({ "error": text }),
            };
            let request = serde_json::from_str(request_body)
                .unwrap_or_else(|_| Value::String(request_body.to_owned()));
            Err(Box::new(ResponseError::new(
                ErrorResponse {
                    status,
                    headers,
                    body: error_body,
                },
                request,
            )))
        }
    }
}
