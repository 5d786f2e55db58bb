//! Core data types for the domain sweep.
//!
//! This module defines the main data structures used throughout the library:
//! candidates, sweep results, availability status, and sweep configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A single (base name, TLD) combination to be checked.
///
/// Candidates are derived by concatenation and never mutated. The sweep
/// checks candidates in the order they were produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainCandidate {
    /// Base name without any TLD (e.g., "pumpupthejam")
    pub base: String,

    /// Top-level domain without the leading dot (e.g., "com")
    pub tld: String,
}

impl DomainCandidate {
    pub fn new<B: Into<String>, T: Into<String>>(base: B, tld: T) -> Self {
        Self {
            base: base.into(),
            tld: tld.into(),
        }
    }

    /// The full domain string for this candidate (e.g., "pumpupthejam.com").
    pub fn fqdn(&self) -> String {
        format!("{}.{}", self.base, self.tld)
    }
}

impl std::fmt::Display for DomainCandidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.base, self.tld)
    }
}

/// Availability status of a checked domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Availability {
    /// The domain is not registered and can be claimed
    #[serde(rename = "available")]
    Available,

    /// The domain is already registered
    #[serde(rename = "registered")]
    Registered,

    /// The lookup failed; status could not be determined
    #[serde(rename = "unknown")]
    Unknown,
}

impl std::fmt::Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Availability::Available => write!(f, "available"),
            Availability::Registered => write!(f, "registered"),
            Availability::Unknown => write!(f, "unknown"),
        }
    }
}

/// Method used to determine domain availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LookupMethod {
    /// Domain checked via RDAP protocol
    #[serde(rename = "rdap")]
    Rdap,

    /// Domain checked via WHOIS protocol
    #[serde(rename = "whois")]
    Whois,

    /// Lookup failed or method unknown
    #[serde(rename = "none")]
    None,
}

impl std::fmt::Display for LookupMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LookupMethod::Rdap => write!(f, "RDAP"),
            LookupMethod::Whois => write!(f, "WHOIS"),
            LookupMethod::None => write!(f, "none"),
        }
    }
}

/// Result of checking a single candidate.
///
/// One `CheckResult` is produced per candidate, in candidate order,
/// regardless of whether the lookup succeeded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    /// The full domain that was checked (e.g., "pumpupthejam.com")
    pub domain: String,

    /// Base name the domain was derived from
    pub base: String,

    /// TLD the domain was derived from
    pub tld: String,

    /// Availability status determined by the lookup
    pub status: Availability,

    /// Which protocol produced the answer
    pub method: LookupMethod,

    /// How long the lookup took
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed: Option<Duration>,

    /// Error message when the lookup failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl CheckResult {
    /// Build a result for a candidate whose lookup failed.
    pub fn failed(candidate: &DomainCandidate, error: String) -> Self {
        Self {
            domain: candidate.fqdn(),
            base: candidate.base.clone(),
            tld: candidate.tld.clone(),
            status: Availability::Unknown,
            method: LookupMethod::None,
            elapsed: None,
            error_message: Some(error),
        }
    }

    pub fn is_available(&self) -> bool {
        self.status == Availability::Available
    }
}

/// Configuration options for a sweep.
///
/// Loaded once at startup and read-only thereafter.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// Ordered list of TLDs to combine with each base name
    pub tlds: Vec<String>,

    /// Timeout for each individual lookup
    pub timeout: Duration,

    /// Whether to fall back to WHOIS when RDAP fails
    pub enable_whois_fallback: bool,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            tlds: vec!["com".to_string()],
            timeout: Duration::from_secs(5),
            enable_whois_fallback: true,
        }
    }
}

impl SweepConfig {
    /// Set the TLD list to combine with each base name.
    pub fn with_tlds(mut self, tlds: Vec<String>) -> Self {
        self.tlds = tlds;
        self
    }

    /// Set the per-lookup timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Enable or disable WHOIS fallback.
    pub fn with_whois_fallback(mut self, enabled: bool) -> Self {
        self.enable_whois_fallback = enabled;
        self
    }
}
