//! API client module
//!
//! HTTP client for the InterProScan 5 REST service.

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::ApiClient;
pub use types::*;
