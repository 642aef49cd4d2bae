//! `iprs status` command implementation

use crate::api::ApiClient;
use crate::error::Result;

/// Print the current status of a job
pub async fn run(base_url: String, job_id: String) -> Result<()> {
    let client = ApiClient::new(base_url)?;

    let status = client.status(&job_id).await?;
    println!("{}", status);

    Ok(())
}
