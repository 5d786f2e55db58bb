//! Configuration file parsing.
//!
//! Sweeps are driven by a TOML file listing the TLDs to combine with each
//! base name, plus optional default settings. Malformed configuration is a
//! fatal startup error; a lookup-time problem never is.
//!
//! ```toml
//! top_level_domains = ["com", "net", "org"]
//!
//! [defaults]
//! timeout = "5s"
//! whois_fallback = true
//! pretty = false
//! ```

use crate::error::SweepError;
use crate::types::SweepConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Configuration loaded from a TOML file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    /// Ordered list of TLDs to check for each base name
    pub top_level_domains: Vec<String>,

    /// Default values for sweep options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsConfig>,
}

/// Default option values that the CLI can override.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DefaultsConfig {
    /// Per-lookup timeout (as a string, e.g., "5s", "30s", "2m")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>,

    /// Whether to fall back to WHOIS when RDAP fails
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whois_fallback: Option<bool>,

    /// Grouped, colored output by default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pretty: Option<bool>,
}

impl FileConfig {
    /// Load and validate configuration from a TOML file.
    ///
    /// A missing file, unparseable TOML, or an invalid TLD list is an error;
    /// callers treat all of these as fatal at startup.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SweepError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(SweepError::file_error(
                path.to_string_lossy(),
                "Configuration file not found",
            ));
        }

        let content = fs::read_to_string(path).map_err(|e| {
            SweepError::file_error(
                path.to_string_lossy(),
                format!("Failed to read configuration file: {}", e),
            )
        })?;

        let config: FileConfig = toml::from_str(&content)
            .map_err(|e| SweepError::config(format!("Failed to parse TOML configuration: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the TLD list and default values.
    fn validate(&self) -> Result<(), SweepError> {
        if self.top_level_domains.is_empty() {
            return Err(SweepError::config(
                "'top_level_domains' must list at least one TLD",
            ));
        }

        for tld in &self.top_level_domains {
            if tld.is_empty() || tld.contains('.') || tld.contains(char::is_whitespace) {
                return Err(SweepError::config(format!(
                    "Invalid TLD '{}' in 'top_level_domains'",
                    tld
                )));
            }
        }

        if let Some(defaults) = &self.defaults {
            if let Some(timeout_str) = &defaults.timeout {
                if parse_timeout_string(timeout_str).is_none() {
                    return Err(SweepError::config(format!(
                        "Invalid timeout format '{}'. Use format like '5s', '30s', '2m'",
                        timeout_str
                    )));
                }
            }
        }

        Ok(())
    }

    /// Fold this file configuration into a `SweepConfig`.
    pub fn apply_to(&self, mut config: SweepConfig) -> SweepConfig {
        config.tlds = self.top_level_domains.clone();

        if let Some(defaults) = &self.defaults {
            if let Some(timeout_str) = &defaults.timeout {
                if let Some(secs) = parse_timeout_string(timeout_str) {
                    config.timeout = Duration::from_secs(secs);
                }
            }
            if let Some(whois_fallback) = defaults.whois_fallback {
                config.enable_whois_fallback = whois_fallback;
            }
        }

        config
    }
}

/// Parse a timeout string like "5s", "30s", "2m" into seconds.
///
/// A bare number is taken as seconds. Returns None if parsing fails.
pub fn parse_timeout_string(timeout_str: &str) -> Option<u64> {
    let timeout_str = timeout_str.trim().to_lowercase();

    if let Some(s) = timeout_str.strip_suffix('s') {
        s.parse::<u64>().ok()
    } else if let Some(m) = timeout_str.strip_suffix('m') {
        m.parse::<u64>().ok().map(|m| m * 60)
    } else {
        timeout_str.parse::<u64>().ok()
    }
}
