//! `iprs params` command implementation
//!
//! Lists the service's input parameters, or shows the detail block for one
//! parameter including its allowed values.

use crate::api::ApiClient;
use crate::error::Result;
use colored::Colorize;

/// List parameter names, or show details for one parameter
pub async fn run(base_url: String, name: Option<String>) -> Result<()> {
    let client = ApiClient::new(base_url)?;

    match name {
        None => {
            for id in client.parameters().await? {
                println!("{}", id);
            }
        }
        Some(name) => {
            let detail = client.parameter_detail(&name).await?;

            println!(
                "{}\t{}",
                detail.name.green().bold(),
                detail.param_type.as_deref().unwrap_or("")
            );
            if let Some(ref description) = detail.description {
                println!("{}", description);
            }

            let values = detail.values.map(|v| v.values).unwrap_or_default();
            for value in &values {
                if value.default_value {
                    println!("{} {}", value.value, "(default)".cyan());
                } else {
                    println!("{}", value.value);
                }
                if let Some(ref label) = value.label {
                    println!("\t{}", label);
                }
                if let Some(ref properties) = value.properties {
                    for property in &properties.properties {
                        println!("\t{}\t{}", property.key, property.value);
                    }
                }
            }
        }
    }

    Ok(())
}
