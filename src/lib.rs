//! calcserver - HTTP calculator with persistent calculation history
//!
//! - [`calc`]: operand parsing and arithmetic
//! - [`store`]: the `calculations` record store
//! - [`rest_api`]: HTTP handlers
//! - [`http_server`]: listener, tracing and shutdown
//! - [`config`], [`observability`], [`cli`]: process plumbing

pub mod calc;
pub mod cli;
pub mod config;
pub mod http_server;
pub mod observability;
pub mod rest_api;
pub mod store;

#[cfg(test)]
mod test_utils;
