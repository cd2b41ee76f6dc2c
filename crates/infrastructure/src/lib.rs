//! Vigil Infrastructure - Transport adapters
//!
//! This crate provides concrete implementations of the `HttpClient`
//! port defined in the application layer: a `reqwest`-backed transport
//! for real runs and a canned stub for offline ones.

pub mod adapters;
pub mod testing;

pub use adapters::ReqwestHttpClient;
pub use testing::StubHttpClient;
