//! Input loading and candidate expansion.
//!
//! Base names come from a plain-text file, one per line. Each surviving
//! name is combined with every configured TLD to form the candidate list.

use crate::error::SweepError;
use crate::types::DomainCandidate;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::warn;

/// Load base names from a file, one per line.
///
/// Blank lines and lines starting with '#' are skipped, as is anything after
/// an inline '#'. Names that fail basic syntax checks are skipped with a
/// warning. A file that cannot be read, or that yields no valid names, is a
/// fatal error.
pub fn load_base_names(file_path: &str) -> Result<Vec<String>, SweepError> {
    let path = Path::new(file_path);
    if !path.exists() {
        return Err(SweepError::file_error(file_path, "Input file not found"));
    }

    let file = File::open(path)
        .map_err(|e| SweepError::file_error(file_path, format!("Failed to open file: {}", e)))?;
    let reader = BufReader::new(file);

    let mut names = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line
            .map_err(|e| SweepError::file_error(file_path, format!("Failed to read line: {}", e)))?;
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let name = trimmed.split('#').next().unwrap_or("").trim();
        if name.is_empty() {
            continue;
        }

        if let Err(reason) = check_base_name(name) {
            warn!(line = idx + 1, name, reason, "skipping invalid base name");
            continue;
        }

        names.push(name.to_string());
    }

    if names.is_empty() {
        return Err(SweepError::file_error(
            file_path,
            "No valid base names found in the file",
        ));
    }

    Ok(names)
}

/// Validate that a base name (without TLD) is acceptable.
///
/// Minimum two characters, alphanumeric and hyphens only, and no leading or
/// trailing hyphen. Dots are rejected: TLDs come from the configuration.
pub fn check_base_name(name: &str) -> Result<(), &'static str> {
    if name.len() < 2 {
        return Err("name too short");
    }
    if name.starts_with('-') || name.ends_with('-') {
        return Err("cannot start or end with a hyphen");
    }
    if !name.chars().all(|c| c.is_alphanumeric() || c == '-') {
        return Err("only alphanumeric characters and hyphens are allowed");
    }
    Ok(())
}

/// Produce the cartesian product of base names and TLDs.
///
/// Candidate order is base-major: every TLD for the first base, then every
/// TLD for the second base, and so on. The result length is always
/// `bases.len() * tlds.len()`.
pub fn combine(bases: &[String], tlds: &[String]) -> Vec<DomainCandidate> {
    let mut candidates = Vec::with_capacity(bases.len() * tlds.len());

    for base in bases {
        for tld in tlds {
            candidates.push(DomainCandidate::new(base.clone(), tld.clone()));
        }
    }

    candidates
}
