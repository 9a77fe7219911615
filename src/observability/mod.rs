//! # Observability
//!
//! Structured logging through `tracing`. Request spans come from
//! `tower_http::trace::TraceLayer` in the HTTP server; everything else logs
//! with the `tracing` macros directly.

mod logging;

pub use logging::{build_filter, init_logging, LoggingConfig, LoggingError, DEFAULT_LOG_LEVEL};
