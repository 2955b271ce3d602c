//! Plain-text error responses for the intersection endpoint.
//!
//! Client and server faults are reported as a short message followed by a
//! newline, served as `text/plain; charset=utf-8` with content sniffing
//! disabled.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use linecheck_lib::Error as LibError;

/// Content type used for every error body.
pub const TEXT_PLAIN_UTF8: &str = "text/plain; charset=utf-8";

/// Errors surfaced to HTTP clients.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request body was not a decodable line string.
    #[error("Invalid request body")]
    InvalidBody(#[source] LibError),

    /// The line string decoded but has fewer than two positions.
    #[error("Invalid linestring")]
    InvalidLineString(#[source] LibError),

    /// The intersection map could not be encoded.
    #[error("Failed to marshal response")]
    Marshal(#[source] serde_json::Error),
}

impl ServiceError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidBody(_) | Self::InvalidLineString(_) => StatusCode::BAD_REQUEST,
            Self::Marshal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Body text as written to the client, including the trailing newline.
    pub fn body(&self) -> String {
        format!("{}\n", self)
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let mut response = (self.status(), self.body()).into_response();
        let headers = response.headers_mut();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(TEXT_PLAIN_UTF8),
        );
        headers.insert(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        );
        response
    }
}
