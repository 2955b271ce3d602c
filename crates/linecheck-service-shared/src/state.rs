//! Application state for the HTTP service.
//!
//! Holds the source of reference lines that each request is checked against.
//! Nothing in the state is mutated after startup.

use std::sync::Arc;

use linecheck_lib::{RandomReferenceSource, ReferenceLine, ReferenceSource};

/// Shared application state for axum handlers.
///
/// Cheaply cloneable (using `Arc` internally) and shared via axum's `State`
/// extractor.
///
/// # Example
///
/// ```ignore
/// use axum::{Router, routing::any, extract::State};
/// use linecheck_service_shared::AppState;
///
/// async fn handler(State(state): State<AppState>) {
///     let lines = state.reference_lines();
///     // ... compare against lines
/// }
///
/// let app = Router::new()
///     .route("/checkIntersections", any(handler))
///     .with_state(AppState::random());
/// ```
#[derive(Clone)]
pub struct AppState {
    source: Arc<dyn ReferenceSource>,
}

impl AppState {
    /// Build state around an arbitrary reference source.
    pub fn new(source: impl ReferenceSource + 'static) -> Self {
        Self {
            source: Arc::new(source),
        }
    }

    /// Production state: a fresh random set of reference lines per request.
    pub fn random() -> Self {
        Self::new(RandomReferenceSource)
    }

    /// Reference lines for a single request.
    pub fn reference_lines(&self) -> Vec<ReferenceLine> {
        self.source.reference_lines()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::random()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
