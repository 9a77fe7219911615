//! # HTTP Server Module
//!
//! Listener setup, request tracing and graceful shutdown around the
//! calculator REST API.

pub mod config;
pub mod server;

pub use config::HttpServerConfig;
pub use server::{shutdown_signal, BoundServer, HttpServer, ServerError, ServerResult};
