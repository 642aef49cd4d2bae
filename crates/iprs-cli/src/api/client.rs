//! HTTP API client for the InterProScan 5 REST service
//!
//! One explicitly constructed client is created per command invocation and
//! passed by reference; there is no process-wide singleton.

use crate::api::{endpoints, types::*};
use crate::config::DEFAULT_API_TIMEOUT_SECS;
use crate::error::{CliError, Result};
use iprs_common::types::JobStatus;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// API client for the InterProScan 5 REST service
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(base_url: String) -> Result<Self> {
        url::Url::parse(&base_url)
            .map_err(|e| CliError::config(format!("invalid base URL '{}': {}", base_url, e)))?;

        let timeout_secs = std::env::var("IPRS_API_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_API_TIMEOUT_SECS);

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent())
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Submit a job; returns the identifier issued by the service.
    pub async fn run(&self, form: &RunForm) -> Result<String> {
        let url = endpoints::run_url(&self.base_url);
        debug!(url = %url, "Submitting job");

        let response = self.client.post(&url).form(&form.fields()).send().await?;

        // The service signals rejection through the HTTP status code and
        // puts a human-readable explanation in the body.
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let detail = if body.trim().is_empty() {
                status.to_string()
            } else {
                body.trim().to_string()
            };
            return Err(CliError::submission(detail));
        }

        let job_id = response.text().await?.trim().to_string();
        if job_id.is_empty() {
            return Err(CliError::submission(
                "service returned an empty job identifier",
            ));
        }

        debug!(job_id = %job_id, "Job submitted");
        Ok(job_id)
    }

    /// Get the current status of a job.
    pub async fn status(&self, job_id: &str) -> Result<JobStatus> {
        let url = endpoints::status_url(&self.base_url, job_id);
        let body = self.get_text(&url).await?;

        body.parse()
            .map_err(|_| CliError::Status(body.trim().to_string()))
    }

    /// List the result types available for a finished job.
    pub async fn result_types(&self, job_id: &str) -> Result<Vec<ResultType>> {
        let url = endpoints::result_types_url(&self.base_url, job_id);
        let xml = self.get_text(&url).await?;

        let list: ResultTypeList = quick_xml::de::from_str(&xml)?;
        Ok(list.types)
    }

    /// Download one result representation of a finished job.
    pub async fn result(&self, job_id: &str, type_id: &str) -> Result<Vec<u8>> {
        let url = endpoints::result_url(&self.base_url, job_id, type_id);
        debug!(url = %url, "Downloading result");

        let response = self.client.get(&url).send().await?.error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    }

    /// List the names of the service's input parameters.
    pub async fn parameters(&self) -> Result<Vec<String>> {
        let url = endpoints::parameters_url(&self.base_url);
        let xml = self.get_text(&url).await?;

        let list: ParameterList = quick_xml::de::from_str(&xml)?;
        Ok(list.ids)
    }

    /// Get the detail block for one input parameter.
    pub async fn parameter_detail(&self, name: &str) -> Result<ParameterDetail> {
        let url = endpoints::parameter_details_url(&self.base_url, name);
        let xml = self.get_text(&url).await?;

        Ok(quick_xml::de::from_str(&xml)?)
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_text(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}

/// User-agent for requests (see RFC 2616), identifying this client to the
/// service operators.
fn user_agent() -> String {
    format!(
        "iprs-cli/{} ({}; rust) reqwest",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS
    )
}
