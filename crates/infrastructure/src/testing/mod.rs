//! Offline testing infrastructure.
//!
//! A canned transport that stands in for the network, so harness runs
//! can be exercised without touching the real backend.

mod stub;

pub use stub::StubHttpClient;
