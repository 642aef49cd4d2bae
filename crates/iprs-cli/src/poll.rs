//! Job status polling
//!
//! Bounded fixed-interval polling loop. The service recommends checking at
//! a fixed cadence, so there is no backoff. The sleep is injected as an
//! async closure, which lets tests drive the loop without real delays.

use crate::api::ApiClient;
use crate::config::{DEFAULT_MAX_CHECKS, DEFAULT_POLL_INTERVAL_SECS};
use crate::error::{CliError, Result};
use iprs_common::types::JobStatus;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// Polling cadence and budget
#[derive(Debug, Clone, Copy)]
pub struct PollConfig {
    /// Time to sleep between status checks
    pub interval: Duration,
    /// Maximum number of status checks before giving up
    pub max_checks: u32,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
            max_checks: DEFAULT_MAX_CHECKS,
        }
    }
}

/// Build a PollConfig from CLI flag values.
pub fn poll_config(interval_secs: u64, max_checks: u32) -> PollConfig {
    PollConfig {
        interval: Duration::from_secs(interval_secs),
        max_checks,
    }
}

/// Poll a job until it reaches a terminal status.
///
/// Issues one status request per check. A transient network failure
/// consumes a check and the loop continues; any other error aborts. When
/// the budget runs out the job id is reported back in the timeout error so
/// the user can retry later.
///
/// `on_check` is invoked with the check number and the reported status
/// after every successful request; callers use it to drive progress output.
pub async fn wait_for_completion<S, Fut, F>(
    client: &ApiClient,
    job_id: &str,
    config: PollConfig,
    mut sleep: S,
    mut on_check: F,
) -> Result<JobStatus>
where
    S: FnMut(Duration) -> Fut,
    Fut: Future<Output = ()>,
    F: FnMut(u32, JobStatus),
{
    for check in 1..=config.max_checks {
        match client.status(job_id).await {
            Ok(status) => {
                debug!(job_id = %job_id, status = %status, check, "Status check");
                on_check(check, status);

                if status.is_terminal() {
                    return Ok(status);
                }
            }
            Err(CliError::Http(e)) if is_transient(&e) => {
                warn!(job_id = %job_id, error = %e, check, "Status check failed; will retry");
            }
            Err(e) => return Err(e),
        }

        if check < config.max_checks {
            sleep(config.interval).await;
        }
    }

    Err(CliError::PollTimeout {
        job_id: job_id.to_string(),
        checks: config.max_checks,
    })
}

/// Whether a failed status request is worth another check. Client errors
/// (bad job id, bad URL path) will not heal by waiting.
fn is_transient(e: &reqwest::Error) -> bool {
    e.is_connect()
        || e.is_timeout()
        || e.status().is_some_and(|s| s.is_server_error())
}

/// Poll with the real clock.
pub async fn wait<F>(
    client: &ApiClient,
    job_id: &str,
    config: PollConfig,
    on_check: F,
) -> Result<JobStatus>
where
    F: FnMut(u32, JobStatus),
{
    wait_for_completion(client, job_id, config, tokio::time::sleep, on_check).await
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(max_checks: u32) -> PollConfig {
        PollConfig {
            interval: Duration::from_secs(0),
            max_checks,
        }
    }

    async fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::new(server.uri()).unwrap()
    }

    #[tokio::test]
    async fn test_poll_issues_exactly_three_checks_for_running_running_finished() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/status/job-1"))
            .respond_with(ResponseTemplate::new(200).set_body_string("RUNNING"))
            .up_to_n_times(2)
            .expect(2)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/status/job-1"))
            .respond_with(ResponseTemplate::new(200).set_body_string("FINISHED"))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let mut observed = Vec::new();

        let status = wait_for_completion(
            &client,
            "job-1",
            test_config(10),
            |_| async {},
            |check, status| observed.push((check, status)),
        )
        .await
        .unwrap();

        assert_eq!(status, JobStatus::Finished);
        // Never reports finished before the remote status transitions
        assert_eq!(
            observed,
            vec![
                (1, JobStatus::Running),
                (2, JobStatus::Running),
                (3, JobStatus::Finished),
            ]
        );
        // Mock expectations assert exactly 3 requests on drop
    }

    #[tokio::test]
    async fn test_poll_returns_terminal_failure() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/status/job-2"))
            .respond_with(ResponseTemplate::new(200).set_body_string("FAILURE"))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let status = wait_for_completion(
            &client,
            "job-2",
            test_config(10),
            |_| async {},
            |_, _| {},
        )
        .await
        .unwrap();

        assert_eq!(status, JobStatus::Failure);
        assert!(!status.is_finished());
    }

    #[tokio::test]
    async fn test_poll_times_out_when_budget_exhausted() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/status/job-3"))
            .respond_with(ResponseTemplate::new(200).set_body_string("RUNNING"))
            .expect(3)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let result = wait_for_completion(
            &client,
            "job-3",
            test_config(3),
            |_| async {},
            |_, _| {},
        )
        .await;

        match result {
            Err(CliError::PollTimeout { job_id, checks }) => {
                assert_eq!(job_id, "job-3");
                assert_eq!(checks, 3);
            }
            other => panic!("expected PollTimeout, got {:?}", other.map(|s| s.to_string())),
        }
    }

    #[tokio::test]
    async fn test_poll_retries_after_server_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/status/job-5"))
            .respond_with(ResponseTemplate::new(503))
            .up_to_n_times(1)
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/status/job-5"))
            .respond_with(ResponseTemplate::new(200).set_body_string("FINISHED"))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let status = wait_for_completion(
            &client,
            "job-5",
            test_config(10),
            |_| async {},
            |_, _| {},
        )
        .await
        .unwrap();

        assert_eq!(status, JobStatus::Finished);
    }

    #[tokio::test]
    async fn test_poll_aborts_on_client_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/status/job-6"))
            .respond_with(ResponseTemplate::new(400))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let result = wait_for_completion(
            &client,
            "job-6",
            test_config(10),
            |_| async {},
            |_, _| {},
        )
        .await;

        assert!(matches!(result, Err(CliError::Http(_))));
    }

    #[tokio::test]
    async fn test_poll_surfaces_unknown_status_token() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/status/job-4"))
            .respond_with(ResponseTemplate::new(200).set_body_string("EXPLODED"))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let result = wait_for_completion(
            &client,
            "job-4",
            test_config(10),
            |_| async {},
            |_, _| {},
        )
        .await;

        match result {
            Err(CliError::Status(token)) => assert_eq!(token, "EXPLODED"),
            other => panic!("expected Status error, got {:?}", other.map(|s| s.to_string())),
        }
    }
}
