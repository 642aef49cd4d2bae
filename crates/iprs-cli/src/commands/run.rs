//! `iprs run` command implementation
//!
//! Submits a sequence job. In the default synchronous mode the command then
//! waits for the job and downloads its results; with `--no-wait` it prints
//! the job identifier and exits.

use crate::api::{ApiClient, RunForm};
use crate::commands::fetch::{self, OutputSelection};
use crate::error::Result;
use crate::poll::PollConfig;
use crate::seq;
use colored::Colorize;
use iprs_common::types::Job;
use iprs_common::validate::validate_email;
use tracing::info;

/// User-supplied submission inputs.
#[derive(Debug, Clone)]
pub struct SubmitRequest {
    pub email: String,
    /// Sequence file path, raw sequence text, or database identifier
    pub sequence: String,
    pub title: Option<String>,
    pub appl: Vec<String>,
    pub goterms: Option<bool>,
    pub pathways: Option<bool>,
}

/// Submit a job and, unless `no_wait`, retrieve its results
pub async fn run(
    base_url: String,
    request: SubmitRequest,
    output: OutputSelection,
    no_wait: bool,
    config: PollConfig,
) -> Result<()> {
    // Local validation happens before any network traffic
    validate_email(&request.email)?;
    let sequence = seq::load(&request.sequence)?;

    let client = ApiClient::new(base_url)?;

    let form = RunForm {
        email: request.email,
        sequence,
        title: request.title,
        goterms: request.goterms,
        pathways: request.pathways,
        appl: request.appl,
    };

    let job = Job::new(client.run(&form).await?);
    info!(job_id = %job.id, "Job submitted");

    if no_wait {
        // Asynchronous mode: only the id goes to stdout, for scripting
        println!("{}", job.id);
        return Ok(());
    }

    println!("{} Submitted job {}", "→".cyan(), job.id);

    let status = fetch::poll_to_finished(&client, &job.id, config).await?;
    let job = job.with_status(status);
    info!(job_id = %job.id, status = %job.status, "Job reached terminal state");

    fetch::download_results(&client, &job.id, &output).await?;

    println!("\n{} All results downloaded", "✓".green().bold());
    Ok(())
}
