//! IPRS CLI Library
//!
//! Command-line client for the InterProScan 5 (REST) web service.
//!
//! # Overview
//!
//! The IPRS CLI submits protein sequences to the remote InterProScan 5
//! service and retrieves the computed signature matches:
//!
//! - **Submission**: send a sequence job to the service (`iprs run`)
//! - **Polling**: wait for a submitted job to finish (`iprs fetch`)
//! - **Status Checking**: query the state of a job (`iprs status`)
//! - **Result Discovery**: list a job's result representations (`iprs result-types`)
//! - **Service Introspection**: list the service's input parameters (`iprs params`)
//!
//! All analytical work happens on the remote service; this client is a REST
//! front end with polling logic.

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod poll;
pub mod progress;
pub mod seq;

// Re-export commonly used types
pub use api::ApiClient;
pub use error::{CliError, Result};

use clap::{Parser, Subcommand};

/// IPRS - InterProScan 5 REST client
///
/// Identify protein family, domain and signal signatures in protein
/// sequences using the EMBL-EBI InterProScan 5 web service.
#[derive(Parser, Debug)]
#[command(name = "iprs")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print CLI documentation as markdown
    #[arg(long, hide = true)]
    pub markdown_help: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Base URL of the InterProScan 5 REST service
    #[arg(
        long,
        env = "IPRS_BASE_URL",
        default_value = config::DEFAULT_BASE_URL,
        global = true
    )]
    pub base_url: String,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Submit a sequence job, then wait for it and download the results
    Run {
        /// E-mail address; the service uses it for job notifications
        #[arg(short, long)]
        email: String,

        /// Sequence input: a FASTA file path, raw sequence text, or a
        /// database identifier (e.g. "sp:wap_rat")
        #[arg(short, long)]
        sequence: String,

        /// Job title shown by the service
        #[arg(short, long)]
        title: Option<String>,

        /// Signature methods to run (comma separated); see 'iprs params appl'
        #[arg(long, value_delimiter = ',')]
        appl: Vec<String>,

        /// Include GO term annotations in the results
        #[arg(long, overrides_with = "no_goterms")]
        goterms: bool,

        /// Exclude GO term annotations from the results
        #[arg(long, overrides_with = "goterms")]
        no_goterms: bool,

        /// Include pathway annotations in the results
        #[arg(long, overrides_with = "no_pathways")]
        pathways: bool,

        /// Exclude pathway annotations from the results
        #[arg(long, overrides_with = "pathways")]
        no_pathways: bool,

        /// Base name for result files (defaults to the job identifier)
        #[arg(short, long)]
        outfile: Option<String>,

        /// Download only this result type (defaults to all types)
        #[arg(long)]
        outformat: Option<String>,

        /// Print the job identifier and exit without waiting for results
        #[arg(long)]
        no_wait: bool,

        /// Seconds to sleep between status checks
        #[arg(
            long,
            env = "IPRS_POLL_INTERVAL_SECS",
            default_value_t = config::DEFAULT_POLL_INTERVAL_SECS
        )]
        poll_interval: u64,

        /// Maximum number of status checks before giving up
        #[arg(long, env = "IPRS_MAX_CHECKS", default_value_t = config::DEFAULT_MAX_CHECKS)]
        max_checks: u32,
    },

    /// Show the current status of a job
    Status {
        /// Job identifier returned by 'iprs run'
        job_id: String,
    },

    /// List the result types available for a finished job
    ResultTypes {
        /// Job identifier returned by 'iprs run'
        job_id: String,
    },

    /// Wait for a submitted job and download its results
    Fetch {
        /// Job identifier returned by 'iprs run'
        job_id: String,

        /// Base name for result files (defaults to the job identifier)
        #[arg(short, long)]
        outfile: Option<String>,

        /// Download only this result type (defaults to all types)
        #[arg(long)]
        outformat: Option<String>,

        /// Seconds to sleep between status checks
        #[arg(
            long,
            env = "IPRS_POLL_INTERVAL_SECS",
            default_value_t = config::DEFAULT_POLL_INTERVAL_SECS
        )]
        poll_interval: u64,

        /// Maximum number of status checks before giving up
        #[arg(long, env = "IPRS_MAX_CHECKS", default_value_t = config::DEFAULT_MAX_CHECKS)]
        max_checks: u32,
    },

    /// List the service's input parameters, or show details for one
    Params {
        /// Parameter name (e.g. "appl"); omit to list all parameter names
        name: Option<String>,
    },
}
