//! IPRS CLI - Main entry point

use clap::Parser;
use iprs_cli::commands::{fetch, run};
use iprs_cli::{poll, Cli, Commands};
use iprs_common::logging::{init_logging, LogConfig, LogLevel};
use std::process;
use tracing::error;

#[tokio::main]
async fn main() {
    // Parse command-line arguments
    let cli = Cli::parse();

    // Handle markdown help generation
    if cli.markdown_help {
        println!("{}", clap_markdown::help_markdown::<Cli>());
        return;
    }

    // Ensure a command is provided
    if cli.command.is_none() {
        eprintln!("Error: A subcommand is required");
        eprintln!();
        eprintln!("For more information, try '--help'.");
        process::exit(2);
    }

    // Initialize logging based on verbose flag and environment
    let log_config = if cli.verbose {
        LogConfig::with_level(LogLevel::Debug)
    } else {
        LogConfig::with_level(LogLevel::Warn)
    };

    // Environment variables take precedence over the verbose flag
    let log_config = log_config.merge_env();

    // Initialize logging (ignore errors as the CLI should work without logging)
    let _ = init_logging(&log_config);

    // Execute command
    let result = execute_command(&cli).await;

    // Handle result
    if let Err(e) = result {
        error!(error = %e, "Command failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> iprs_cli::Result<()> {
    // Command is guaranteed to exist at this point (checked in main)
    let Some(ref command) = cli.command else {
        unreachable!("Command should have been validated in main");
    };

    match command {
        Commands::Run {
            email,
            sequence,
            title,
            appl,
            goterms,
            no_goterms,
            pathways,
            no_pathways,
            outfile,
            outformat,
            no_wait,
            poll_interval,
            max_checks,
        } => {
            let request = run::SubmitRequest {
                email: email.clone(),
                sequence: sequence.clone(),
                title: title.clone(),
                appl: appl.clone(),
                goterms: flag_pair(*goterms, *no_goterms),
                pathways: flag_pair(*pathways, *no_pathways),
            };
            let output = fetch::OutputSelection {
                outfile: outfile.clone(),
                outformat: outformat.clone(),
            };
            run::run(
                cli.base_url.clone(),
                request,
                output,
                *no_wait,
                poll::poll_config(*poll_interval, *max_checks),
            )
            .await
        }

        Commands::Status { job_id } => {
            iprs_cli::commands::status::run(cli.base_url.clone(), job_id.clone()).await
        }

        Commands::ResultTypes { job_id } => {
            iprs_cli::commands::result_types::run(cli.base_url.clone(), job_id.clone()).await
        }

        Commands::Fetch {
            job_id,
            outfile,
            outformat,
            poll_interval,
            max_checks,
        } => {
            let output = fetch::OutputSelection {
                outfile: outfile.clone(),
                outformat: outformat.clone(),
            };
            fetch::run(
                cli.base_url.clone(),
                job_id.clone(),
                output,
                poll::poll_config(*poll_interval, *max_checks),
            )
            .await
        }

        Commands::Params { name } => {
            iprs_cli::commands::params::run(cli.base_url.clone(), name.clone()).await
        }
    }
}

/// Collapse an enable/disable flag pair into an optional boolean.
fn flag_pair(enable: bool, disable: bool) -> Option<bool> {
    if enable {
        Some(true)
    } else if disable {
        Some(false)
    } else {
        None
    }
}
