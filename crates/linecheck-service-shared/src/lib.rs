//! Shared infrastructure for the line intersection HTTP service.
//!
//! This crate provides the HTTP glue around `linecheck-lib`:
//!
//! - [`AppState`]: Injected source of reference lines
//! - [`ServiceError`]: Plain-text client and server error responses
//! - [`ServiceConfig`]: Listener configuration
//! - [`logging`]: Structured JSON logging setup
//! - [`middleware`]: Request ID propagation and request tracing
//! - Request decoding with validation
//!
//! # Architecture
//!
//! The service follows a thin-handler pattern where all geometry lives in
//! `linecheck-lib`:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  axum Handler                                               │
//! │  - Decode request JSON                                      │
//! │  - Validate the line string                                 │
//! │  - Call linecheck-lib APIs                                  │
//! │  - Format response                                          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Testing Support
//!
//! The [`test_utils`] module provides deterministic states for handler
//! testing. Enable the `test-utils` feature to access it from dependent crates.

#![deny(warnings)]

mod config;
mod error;
pub mod logging;
pub mod middleware;
mod request;
mod state;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::{ServiceConfig, DEFAULT_PORT};
pub use error::{ServiceError, TEXT_PLAIN_UTF8};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use middleware::{extract_or_generate_request_id, RequestId, RequestTraceLayer};
pub use request::{decode_line_string, parse_line_string, Validate};
pub use state::AppState;
