//! Pre-submission input validation
//!
//! Validates user-supplied submission inputs before any network request is
//! made.
//!
//! # Examples
//!
//! ```rust,ignore
//! use iprs_common::validate::{validate_email, validate_sequence};
//!
//! validate_email("user@example.org")?;
//! validate_sequence(">sp|P01308|INS_HUMAN\nMALWMRLLPLLALLALWGPDPAAA")?;
//! ```

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

/// Syntactic shape of an acceptable e-mail address: one `@`, no whitespace,
/// and a dotted domain part.
const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_re() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        #[allow(clippy::expect_used)]
        // EMAIL_PATTERN is a fixed literal; it always compiles.
        Regex::new(EMAIL_PATTERN).expect("email pattern compiles")
    })
}

/// Errors that can occur during e-mail validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EmailValidationError {
    #[error("an e-mail address is required and cannot be empty")]
    Required,

    #[error("'{address}' is not a syntactically valid e-mail address")]
    InvalidFormat { address: String },
}

/// Errors that can occur during sequence validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SequenceValidationError {
    #[error("sequence data is required and cannot be empty")]
    Empty,

    #[error("FASTA record '{header}' has no sequence lines")]
    EmptyRecord { header: String },
}

/// Validate an e-mail address
///
/// # Rules
/// - Must not be empty
/// - Must match `local@domain.tld` syntactically
///
/// The service requires a working address for job-state notifications, but
/// only the syntactic shape can be checked client-side.
pub fn validate_email(email: &str) -> Result<(), EmailValidationError> {
    let email = email.trim();

    if email.is_empty() {
        return Err(EmailValidationError::Required);
    }

    if !email_re().is_match(email) {
        return Err(EmailValidationError::InvalidFormat {
            address: email.to_string(),
        });
    }

    Ok(())
}

/// Validate sequence input
///
/// # Rules
/// - Must not be empty after trimming
/// - If the input is FASTA (starts with `>`), every record must carry at
///   least one non-empty sequence line
///
/// Raw sequence text and database accessions (e.g. `sp:wap_rat`) are passed
/// through untouched; the service resolves those itself.
pub fn validate_sequence(input: &str) -> Result<(), SequenceValidationError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(SequenceValidationError::Empty);
    }

    if !trimmed.starts_with('>') {
        return Ok(());
    }

    let mut header: Option<&str> = None;
    let mut has_residues = false;

    for line in trimmed.lines() {
        let line = line.trim();
        if let Some(rest) = line.strip_prefix('>') {
            if let Some(prev) = header {
                if !has_residues {
                    return Err(SequenceValidationError::EmptyRecord {
                        header: prev.to_string(),
                    });
                }
            }
            header = Some(rest);
            has_residues = false;
        } else if !line.is_empty() {
            has_residues = true;
        }
    }

    if let Some(last) = header {
        if !has_residues {
            return Err(SequenceValidationError::EmptyRecord {
                header: last.to_string(),
            });
        }
    }

    Ok(())
}
