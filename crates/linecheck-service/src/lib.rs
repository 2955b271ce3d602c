//! Polyline intersection check HTTP microservice.
//!
//! Checks a submitted line string against fifty freshly generated reference
//! lines and reports where they cross.
//!
//! # Endpoints
//!
//! - `ANY /checkIntersections` - Check a line string for intersections
//!
//! # Responses
//!
//! - `200` with `{"L07":[1.23,-4.56], ...}` as `application/json` when any
//!   reference line intersects
//! - `200` with the bare body `[]` when none do
//! - `400` with `Invalid request body` or `Invalid linestring` (plain text)
//! - `500` with `Failed to marshal response` (plain text)

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    routing::any,
};
use tracing::{debug, error};

use linecheck_lib::find_intersections;
use linecheck_service_shared::{AppState, RequestTraceLayer, ServiceError, parse_line_string};

/// Path of the intersection check route.
pub const CHECK_INTERSECTIONS_PATH: &str = "/checkIntersections";

/// Body written when no reference line intersects.
pub const EMPTY_RESULT: &str = "[]";

/// Build the service router around `state`.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route(CHECK_INTERSECTIONS_PATH, any(check_intersections))
        .layer(RequestTraceLayer)
        .with_state(state)
}

/// Handle `/checkIntersections` for any method.
pub async fn check_intersections(State(state): State<AppState>, body: Bytes) -> Response {
    match intersections_response(&state, &body) {
        Ok(response) => response,
        Err(err) => {
            match &err {
                ServiceError::Marshal(source) => {
                    error!(error = %source, "failed to encode intersections")
                }
                other => debug!(error = ?other, "rejected request"),
            }
            err.into_response()
        }
    }
}

fn intersections_response(state: &AppState, body: &[u8]) -> Result<Response, ServiceError> {
    let line = parse_line_string(body)?;

    let references = state.reference_lines();
    let intersections = find_intersections(&line, &references);

    debug!(
        positions = line.len(),
        references = references.len(),
        intersections = intersections.len(),
        "intersection check complete"
    );

    if intersections.is_empty() {
        // Served as plain text; only the non-empty result is labelled JSON.
        return Ok(EMPTY_RESULT.into_response());
    }

    let encoded = serde_json::to_vec(&intersections).map_err(ServiceError::Marshal)?;
    Ok(([(header::CONTENT_TYPE, "application/json")], encoded).into_response())
}
