//! IPRS Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared types, utilities, and error handling for the IPRS workspace.
//!
//! # Overview
//!
//! This crate provides functionality used by every IPRS workspace member:
//!
//! - **Error Handling**: Custom error types and result types
//! - **Logging**: tracing initialization with env-based configuration
//! - **Types**: Job and job-status domain types
//! - **Validation**: Pre-submission input checks (e-mail, sequence data)
//!
//! # Example
//!
//! ```no_run
//! use iprs_common::types::JobStatus;
//!
//! let status: JobStatus = "FINISHED".parse().unwrap();
//! assert!(status.is_terminal());
//! ```

pub mod error;
pub mod logging;
pub mod types;
pub mod validate;

// Re-export commonly used types
pub use error::{IprsError, Result};
