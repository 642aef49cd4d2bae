//! Sequence input loading
//!
//! The `--sequence` argument is either a path to a (multi-)FASTA file, raw
//! sequence text, or a database identifier such as `sp:wap_rat`. A readable
//! file is loaded into memory; anything else is passed through to the
//! service as-is after validation.

use crate::error::Result;
use iprs_common::validate::validate_sequence;
use std::path::Path;
use tracing::debug;

/// Resolve the sequence argument into the data submitted to the service.
pub fn load(input: &str) -> Result<String> {
    let path = Path::new(input);

    let data = if path.is_file() {
        debug!(path = %path.display(), "Reading sequence file");
        std::fs::read_to_string(path)?
    } else {
        input.to_string()
    };

    validate_sequence(&data)?;
    Ok(data)
}
