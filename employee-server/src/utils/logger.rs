//! Logging Infrastructure
//!
//! Structured logging setup via tracing-subscriber.

/// Initialize the logger
///
/// Honors `RUST_LOG`; defaults to info for the server and tower-http.
pub fn init_logger() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "employee_server=info,tower_http=info".into()),
        )
        .init();
}
