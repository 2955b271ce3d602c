//! Polyline intersection check HTTP microservice.
//!
//! # Configuration
//!
//! - `RUST_LOG` - Log level (default: info)
//! - `LOG_FORMAT` - Log format: json (default) or text
//! - `SERVICE_PORT` - HTTP port (default: 8080)

use tracing::{error, info};

use linecheck_service::app;
use linecheck_service_shared::{AppState, LoggingConfig, ServiceConfig, init_logging};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let logging_config = LoggingConfig::from_env().with_service("linecheck");
    init_logging(&logging_config);

    let config = ServiceConfig::from_env();
    let addr = config.socket_addr();

    let router = app(AppState::random());

    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        error!(error = %e, addr = %addr, "failed to bind listener");
        e
    })?;

    info!(addr = %addr, port = config.port, "server started");

    axum::serve(listener, router).await.map_err(|e| {
        error!(error = %e, "server terminated");
        e
    })?;

    Ok(())
}
