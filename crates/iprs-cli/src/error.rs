//! Error types for the IPRS CLI
//!
//! User-facing errors with clear, actionable messages. Validation and
//! submission errors are fatal; polling timeouts and fetch failures carry
//! the job identifier so the user can retry the fetch later.

use iprs_common::types::JobStatus;
use iprs_common::validate::{EmailValidationError, SequenceValidationError};
use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Comprehensive error type for CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    /// E-mail address failed local validation (no request was sent)
    #[error("Invalid e-mail address: {0}. Provide a working address with --email; the service uses it for job notifications.")]
    InvalidEmail(#[from] EmailValidationError),

    /// Sequence input failed local validation (no request was sent)
    #[error("Invalid sequence input: {0}. Provide a FASTA file, raw sequence text, or a database identifier with --sequence.")]
    InvalidSequence(#[from] SequenceValidationError),

    /// The remote service rejected the job submission
    #[error("Submission rejected by the service: {0}")]
    Submission(String),

    /// The job never reached a terminal state within the check budget
    #[error("Job '{job_id}' did not reach a terminal state after {checks} status checks. The job may still finish; retry later with 'iprs fetch {job_id}'.")]
    PollTimeout { job_id: String, checks: u32 },

    /// The service reported a terminal failure status for the job
    #[error("Job '{job_id}' ended with status {status}; no results are available.")]
    JobFailed { job_id: String, status: JobStatus },

    /// One or more result types could not be downloaded
    #[error("Could not retrieve result type(s) [{failed}] for job '{job_id}'. Retry with 'iprs fetch {job_id}'.")]
    Fetch { job_id: String, failed: String },

    /// The status endpoint returned a token this client does not know
    #[error("Unexpected status token from the service: '{0}'")]
    Status(String),

    /// HTTP request failed
    #[error("Network request failed: {0}. Check your internet connection and the service base URL.")]
    Http(#[from] reqwest::Error),

    /// Service XML payload could not be parsed
    #[error("Failed to parse the service's XML response: {0}")]
    Xml(#[from] quick_xml::DeError),

    /// File system operation failed
    #[error("File operation failed: {0}. Check file permissions and disk space.")]
    Io(#[from] std::io::Error),

    /// Configuration is missing or invalid
    #[error("Configuration error: {0}. Check your flags and environment variables.")]
    Config(String),

    /// Generic anyhow error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// Create a submission error
    pub fn submission(msg: impl Into<String>) -> Self {
        Self::Submission(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a fetch error from the list of failed result types
    pub fn fetch(job_id: impl Into<String>, failed: &[String]) -> Self {
        Self::Fetch {
            job_id: job_id.into(),
            failed: failed.join(", "),
        }
    }
}
