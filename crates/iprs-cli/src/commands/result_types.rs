//! `iprs result-types` command implementation
//!
//! Lists the result representations the service offers for a finished job.

use crate::api::ApiClient;
use crate::error::Result;
use colored::Colorize;

/// List the result types available for a job
pub async fn run(base_url: String, job_id: String) -> Result<()> {
    let client = ApiClient::new(base_url)?;

    let types = client.result_types(&job_id).await?;

    if types.is_empty() {
        println!("No result types reported for job {}", job_id);
        return Ok(());
    }

    for result_type in &types {
        println!("{}", result_type.identifier.green());
        if let Some(ref label) = result_type.label {
            println!("  Label:       {}", label);
        }
        if let Some(ref description) = result_type.description {
            println!("  Description: {}", description);
        }
        if let Some(ref media_type) = result_type.media_type {
            println!("  Media type:  {}", media_type);
        }
        if let Some(ref suffix) = result_type.file_suffix {
            println!("  Suffix:      {}", suffix);
        }
        println!();
    }

    Ok(())
}
