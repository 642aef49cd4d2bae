//! API endpoint URL builders
//!
//! Helper functions to construct service endpoint URLs. The paths are fixed
//! by the remote service.

/// Build job submission endpoint URL
pub fn run_url(base_url: &str) -> String {
    format!("{}/run/", base_url)
}

/// Build job status URL
pub fn status_url(base_url: &str, job_id: &str) -> String {
    format!("{}/status/{}", base_url, job_id)
}

/// Build result types URL
pub fn result_types_url(base_url: &str, job_id: &str) -> String {
    format!("{}/result_types/{}", base_url, job_id)
}

/// Build result download URL
pub fn result_url(base_url: &str, job_id: &str, type_id: &str) -> String {
    format!("{}/result/{}/{}", base_url, job_id, type_id)
}

/// Build parameter list URL
pub fn parameters_url(base_url: &str) -> String {
    format!("{}/parameters", base_url)
}

/// Build parameter details URL
pub fn parameter_details_url(base_url: &str, name: &str) -> String {
    format!("{}/parameter_details/{}", base_url, name)
}
