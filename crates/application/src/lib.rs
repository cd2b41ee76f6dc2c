//! Vigil Application - Harness runner and ports
//!
//! This crate holds the use-case layer of the harness: the `HttpClient`
//! port that transports implement, the runner that executes scenarios
//! and judges their responses, the harness configuration, and the fixed
//! scenario catalog.

pub mod catalog;
pub mod config;
pub mod error;
pub mod ports;
pub mod runner;

pub use catalog::catalog;
pub use config::{ConfigError, HarnessConfig};
pub use error::{ApplicationError, ApplicationResult};
pub use ports::{HttpClient, HttpClientError};
pub use runner::Harness;
