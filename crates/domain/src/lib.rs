//! Vigil Domain - Core harness types
//!
//! This crate defines the domain model for the Vigil HTTP assertion
//! harness. All types here are pure Rust with no I/O dependencies.

pub mod body;
pub mod call;
pub mod check;
pub mod error;
pub mod method;
pub mod response;
pub mod result;
pub mod scenario;

pub use body::RequestBody;
pub use call::CallSpec;
pub use check::BodyCheck;
pub use error::{DomainError, DomainResult};
pub use method::HttpMethod;
pub use response::{Response, StatusCode};
pub use result::{FailureKind, Outcome, RunReport, ScenarioResult};
pub use scenario::Scenario;
