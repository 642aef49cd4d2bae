//! Common types used across IPRS

use crate::error::IprsError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status of a job tracked by the remote service.
///
/// The service reports status as an upper-case plain-text token. RUNNING,
/// PENDING and QUEUED mean the job is still in flight; every other token is
/// terminal and no further transition will occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    /// Job is being processed
    Running,
    /// Job has been accepted but not yet scheduled
    Pending,
    /// Job is waiting in the service queue
    Queued,
    /// Job completed successfully; results are available
    Finished,
    /// Job failed due to a service-side error
    Error,
    /// Job failed
    Failure,
    /// The service does not know the job identifier
    NotFound,
}

impl JobStatus {
    /// Whether no further status transition will occur.
    pub fn is_terminal(self) -> bool {
        !matches!(
            self,
            JobStatus::Running | JobStatus::Pending | JobStatus::Queued
        )
    }

    /// Whether results are available for download.
    pub fn is_finished(self) -> bool {
        matches!(self, JobStatus::Finished)
    }
}

impl std::str::FromStr for JobStatus {
    type Err = IprsError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "RUNNING" => Ok(JobStatus::Running),
            "PENDING" => Ok(JobStatus::Pending),
            "QUEUED" => Ok(JobStatus::Queued),
            "FINISHED" => Ok(JobStatus::Finished),
            "ERROR" => Ok(JobStatus::Error),
            "FAILURE" => Ok(JobStatus::Failure),
            "NOT_FOUND" => Ok(JobStatus::NotFound),
            other => Err(IprsError::Parse(format!("unknown job status: {}", other))),
        }
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Mirror the service's own tokens so log lines match what the
        // status endpoint returned.
        match self {
            JobStatus::Running => write!(f, "RUNNING"),
            JobStatus::Pending => write!(f, "PENDING"),
            JobStatus::Queued => write!(f, "QUEUED"),
            JobStatus::Finished => write!(f, "FINISHED"),
            JobStatus::Error => write!(f, "ERROR"),
            JobStatus::Failure => write!(f, "FAILURE"),
            JobStatus::NotFound => write!(f, "NOT_FOUND"),
        }
    }
}

/// A unit of analysis work submitted to the remote service.
///
/// Created on submission and mutated only by polling; never persisted
/// beyond the lifetime of one invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    /// Opaque identifier issued by the service
    pub id: String,
    /// Last status reported by the service
    pub status: JobStatus,
    /// Timestamp when the job was submitted by this client
    pub submitted_at: DateTime<Utc>,
}

impl Job {
    /// Record a freshly submitted job.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            status: JobStatus::Pending,
            submitted_at: Utc::now(),
        }
    }

    /// Update the job with a status reported by the service.
    pub fn with_status(mut self, status: JobStatus) -> Self {
        self.status = status;
        self
    }
}
