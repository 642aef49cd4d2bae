//! `iprs fetch` command implementation
//!
//! Waits for a submitted job to reach a terminal state, then downloads its
//! result representations. Also hosts the poll + download path shared with
//! `iprs run`.

use crate::api::ApiClient;
use crate::error::{CliError, Result};
use crate::poll::{self, PollConfig};
use crate::progress;
use colored::Colorize;
use iprs_common::types::JobStatus;
use tracing::{info, warn};

/// Where result files go and which types are wanted.
#[derive(Debug, Clone, Default)]
pub struct OutputSelection {
    /// Base name for result files (the job id when None)
    pub outfile: Option<String>,
    /// Only download this result type (all types when None)
    pub outformat: Option<String>,
}

/// Wait for a job and download its results
pub async fn run(
    base_url: String,
    job_id: String,
    output: OutputSelection,
    config: PollConfig,
) -> Result<()> {
    let client = ApiClient::new(base_url)?;

    poll_to_finished(&client, &job_id, config).await?;
    download_results(&client, &job_id, &output).await?;

    println!("\n{} All results downloaded", "✓".green().bold());
    Ok(())
}

/// Poll until terminal, reporting progress on a spinner.
///
/// Returns Ok only for FINISHED; any other terminal status is a JobFailed
/// error, and no fetch is attempted for such jobs.
pub async fn poll_to_finished(
    client: &ApiClient,
    job_id: &str,
    config: PollConfig,
) -> Result<JobStatus> {
    let spinner = progress::create_spinner(&format!("Waiting for job {}...", job_id));

    let result = poll::wait(client, job_id, config, |check, status| {
        spinner.set_message(format!(
            "Job {}: {} (check {}/{})",
            job_id, status, check, config.max_checks
        ));
    })
    .await;

    spinner.finish_and_clear();
    let status = result?;

    if !status.is_finished() {
        return Err(CliError::JobFailed {
            job_id: job_id.to_string(),
            status,
        });
    }

    Ok(status)
}

/// Download the job's result representations.
///
/// One file per type, named `{base}.{identifier}` where base is the
/// `--outfile` value or the job id. A failed type is reported and the
/// remaining types are still downloaded; the command fails afterwards if
/// anything was missed.
pub async fn download_results(
    client: &ApiClient,
    job_id: &str,
    output: &OutputSelection,
) -> Result<()> {
    let mut types = client.result_types(job_id).await?;

    if let Some(ref wanted) = output.outformat {
        types.retain(|t| &t.identifier == wanted);
        if types.is_empty() {
            return Err(CliError::fetch(job_id, std::slice::from_ref(wanted)));
        }
    }

    let base = output.outfile.as_deref().unwrap_or(job_id);
    let mut failed = Vec::new();

    for result_type in &types {
        let filename = format!("{}.{}", base, result_type.identifier);

        match client.result(job_id, &result_type.identifier).await {
            Ok(bytes) => {
                tokio::fs::write(&filename, &bytes).await?;
                println!(
                    "{} {} ({})",
                    "✓".green(),
                    filename,
                    progress::format_bytes(bytes.len() as u64)
                );
                info!(job_id = %job_id, file = %filename, "Result written");
            }
            Err(e) => {
                eprintln!("{} {}: {}", "✗".red(), result_type.identifier, e);
                warn!(
                    job_id = %job_id,
                    result_type = %result_type.identifier,
                    error = %e,
                    "Result download failed"
                );
                failed.push(result_type.identifier.clone());
            }
        }
    }

    if !failed.is_empty() {
        return Err(CliError::fetch(job_id, &failed));
    }

    Ok(())
}
