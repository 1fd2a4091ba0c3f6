//! Minimal GraphQL-over-HTTP client.
//!
//! One [`GraphqlClient`] per endpoint. Every call is an independent POST
//! exchange: the request body is serialized once, sent, and the response is
//! decoded by content type and classified into either a success envelope or
//! a normalized error carrying the response and the original request.
//!
//! No retries, no batching, no caching, no subscriptions. Transport concerns
//! (TLS, redirects, proxies, connection pooling) belong to the configured
//! [`reqwest::Client`].

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

mod client;
mod error;
mod response;

pub use client::{
    GraphqlClient, GraphqlClientBuilder, GraphqlClientConfig, raw_request, raw_string_request,
    request, string_request,
};
pub use error::{ErrorResponse, GraphqlClientError, ResponseError};
pub use response::GraphqlResponse;
