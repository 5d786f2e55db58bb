//! Error handling for domain sweep operations.
//!
//! This module defines an error type covering the different ways a sweep can
//! fail, from malformed input names to network issues during a lookup.

use std::fmt;

/// Main error type for domain sweep operations.
#[derive(Debug, Clone)]
pub enum SweepError {
    /// Invalid base name or domain format
    InvalidName { name: String, reason: String },

    /// Network-related errors (connection, DNS, etc.)
    Network {
        message: String,
        source: Option<String>,
    },

    /// RDAP protocol specific errors
    Rdap {
        domain: String,
        message: String,
        status_code: Option<u16>,
    },

    /// WHOIS protocol specific errors
    Whois { domain: String, message: String },

    /// No lookup endpoint is known for the TLD
    UnknownTld { tld: String },

    /// Configuration errors (malformed TOML, invalid TLD list, etc.)
    Config { message: String },

    /// File I/O errors when reading name lists or config files
    File { path: String, message: String },

    /// Timeout errors when a lookup takes too long
    Timeout {
        operation: String,
        duration: std::time::Duration,
    },

    /// Internal errors that don't fit other categories
    Internal { message: String },
}

impl SweepError {
    /// Create a new invalid name error.
    pub fn invalid_name<N: Into<String>, R: Into<String>>(name: N, reason: R) -> Self {
        Self::InvalidName {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create a new network error.
    pub fn network<M: Into<String>>(message: M) -> Self {
        Self::Network {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new network error with source information.
    pub fn network_with_source<M: Into<String>, S: Into<String>>(message: M, source: S) -> Self {
        Self::Network {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Create a new RDAP error.
    pub fn rdap<D: Into<String>, M: Into<String>>(domain: D, message: M) -> Self {
        Self::Rdap {
            domain: domain.into(),
            message: message.into(),
            status_code: None,
        }
    }

    /// Create a new RDAP error with HTTP status code.
    pub fn rdap_with_status<D: Into<String>, M: Into<String>>(
        domain: D,
        message: M,
        status_code: u16,
    ) -> Self {
        Self::Rdap {
            domain: domain.into(),
            message: message.into(),
            status_code: Some(status_code),
        }
    }

    /// Create a new WHOIS error.
    pub fn whois<D: Into<String>, M: Into<String>>(domain: D, message: M) -> Self {
        Self::Whois {
            domain: domain.into(),
            message: message.into(),
        }
    }

    /// Create a new unknown-TLD error.
    pub fn unknown_tld<T: Into<String>>(tld: T) -> Self {
        Self::UnknownTld { tld: tld.into() }
    }

    /// Create a new configuration error.
    pub fn config<M: Into<String>>(message: M) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new file error.
    pub fn file_error<P: Into<String>, M: Into<String>>(path: P, message: M) -> Self {
        Self::File {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a new timeout error.
    pub fn timeout<O: Into<String>>(operation: O, duration: std::time::Duration) -> Self {
        Self::Timeout {
            operation: operation.into(),
            duration,
        }
    }

    /// Create a new internal error.
    pub fn internal<M: Into<String>>(message: M) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Check if this error indicates the domain is definitely available.
    ///
    /// Some error conditions (RDAP 404, WHOIS "no match") actually indicate
    /// availability rather than a failed lookup.
    pub fn indicates_available(&self) -> bool {
        match self {
            Self::Rdap {
                status_code: Some(404),
                ..
            } => true,
            Self::Whois { message, .. } => {
                let msg = message.to_lowercase();
                msg.contains("not found")
                    || msg.contains("no match")
                    || msg.contains("no data found")
                    || msg.contains("domain available")
            }
            _ => false,
        }
    }

    /// Check if this error is fatal for the whole run rather than one lookup.
    ///
    /// Startup problems (bad config, unreadable input file) abort the sweep;
    /// everything else is recorded per candidate.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Config { .. } | Self::File { .. })
    }
}

impl fmt::Display for SweepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidName { name, reason } => {
                write!(f, "Invalid name '{}': {}", name, reason)
            }
            Self::Network { message, source } => {
                if let Some(source) = source {
                    write!(f, "Network error: {} (source: {})", message, source)
                } else {
                    write!(f, "Network error: {}", message)
                }
            }
            Self::Rdap {
                domain,
                message,
                status_code,
            } => {
                if let Some(code) = status_code {
                    write!(f, "RDAP error for '{}' (HTTP {}): {}", domain, code, message)
                } else {
                    write!(f, "RDAP error for '{}': {}", domain, message)
                }
            }
            Self::Whois { domain, message } => {
                write!(f, "WHOIS error for '{}': {}", domain, message)
            }
            Self::UnknownTld { tld } => {
                write!(f, "No lookup endpoint known for TLD '{}'", tld)
            }
            Self::Config { message } => {
                write!(f, "Configuration error: {}", message)
            }
            Self::File { path, message } => {
                write!(f, "File error at '{}': {}", path, message)
            }
            Self::Timeout {
                operation,
                duration,
            } => {
                write!(f, "Timeout after {:?} during: {}", duration, operation)
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {}", message)
            }
        }
    }
}

impl std::error::Error for SweepError {}

impl From<reqwest::Error> for SweepError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::timeout("HTTP request", std::time::Duration::from_secs(30))
        } else if err.is_connect() {
            Self::network_with_source("Connection failed", err.to_string())
        } else {
            Self::network_with_source("HTTP request failed", err.to_string())
        }
    }
}

impl From<serde_json::Error> for SweepError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal {
            message: format!("JSON parsing failed: {}", err),
        }
    }
}

impl From<std::io::Error> for SweepError {
    fn from(err: std::io::Error) -> Self {
        Self::Internal {
            message: format!("I/O error: {}", err),
        }
    }
}
