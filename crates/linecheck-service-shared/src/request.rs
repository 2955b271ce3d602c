//! Request decoding and validation for the intersection endpoint.

use linecheck_lib::LineString;

use crate::ServiceError;

/// Validation trait for decoded request payloads.
pub trait Validate {
    /// Validate the payload, returning the client-facing error if it is unusable.
    fn validate(&self) -> Result<(), ServiceError>;
}

impl Validate for LineString {
    fn validate(&self) -> Result<(), ServiceError> {
        self.ensure_valid().map_err(ServiceError::InvalidLineString)
    }
}

/// Decode a request body into a line string without validating its length.
pub fn decode_line_string(body: &[u8]) -> Result<LineString, ServiceError> {
    LineString::from_json_slice(body).map_err(ServiceError::InvalidBody)
}

/// Decode and validate in one step, as the handler does.
pub fn parse_line_string(body: &[u8]) -> Result<LineString, ServiceError> {
    let line = decode_line_string(body)?;
    line.validate()?;
    Ok(line)
}
