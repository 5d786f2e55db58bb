//! WHOIS fallback via the system whois command.
//!
//! WHOIS answers are unstructured registry text, so this client shells out
//! to the system `whois` tool and classifies the response against known
//! phrase lists. It is only consulted when RDAP cannot answer.

use crate::error::SweepError;
use crate::types::{Availability, CheckResult, DomainCandidate, LookupMethod};
use std::time::{Duration, Instant};
use tokio::process::Command;
use tracing::debug;

/// Phrases that indicate an unregistered domain.
const AVAILABLE_PHRASES: &[&str] = &[
    "no match",
    "not found",
    "no data found",
    "no entries found",
    "domain not found",
    "domain available",
    "status: available",
    "status: free",
    "not registered",
    "no matching record",
    "the queried object does not exist",
    "object does not exist",
    "this domain name has not been registered",
];

/// Phrases that indicate a registered domain. Registries disagree on
/// wording, so a single hit is not trusted; two or more are required.
const REGISTERED_PHRASES: &[&str] = &[
    "domain status:",
    "registrar:",
    "creation date:",
    "created:",
    "registry domain id:",
    "registrant:",
    "name server:",
    "nameservers:",
    "expiry date:",
    "expires:",
    "updated:",
];

/// Phrases that mean the TLD itself is not serviced by whois.
const UNSUPPORTED_TLD_PHRASES: &[&str] = &[
    "no whois server is known",
    "no whois server",
    "invalid tld",
    "unknown tld",
    "no such tld",
];

/// WHOIS client that queries via the system's whois command.
#[derive(Clone)]
pub struct WhoisClient {
    /// Timeout for each WHOIS query
    timeout: Duration,
}

impl WhoisClient {
    /// Create a new WHOIS client with the given per-query timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Check a single candidate via WHOIS.
    ///
    /// # Errors
    ///
    /// Returns `SweepError` if the whois command cannot be executed, the
    /// query times out, or the response cannot be classified.
    pub async fn check(&self, candidate: &DomainCandidate) -> Result<CheckResult, SweepError> {
        let domain = candidate.fqdn();
        let start = Instant::now();

        debug!(%domain, "whois lookup");

        let result = tokio::time::timeout(self.timeout, self.query(&domain)).await;
        let elapsed = start.elapsed();

        match result {
            Ok(Ok(status)) => Ok(CheckResult {
                domain,
                base: candidate.base.clone(),
                tld: candidate.tld.clone(),
                status,
                method: LookupMethod::Whois,
                elapsed: Some(elapsed),
                error_message: None,
            }),
            Ok(Err(e)) => Err(e),
            Err(_) => Err(SweepError::timeout("WHOIS query", self.timeout)),
        }
    }

    /// Run the whois command and classify its output.
    async fn query(&self, domain: &str) -> Result<Availability, SweepError> {
        let output = Command::new("whois")
            .arg(domain)
            .output()
            .await
            .map_err(|e| {
                SweepError::whois(
                    domain,
                    format!(
                        "Failed to execute whois command: {}. Make sure 'whois' is installed.",
                        e
                    ),
                )
            })?;

        let text = String::from_utf8_lossy(&output.stdout).to_string();
        classify_whois_response(domain, &text)
    }
}

/// Classify a raw WHOIS response as available or registered.
///
/// Ambiguous output produces an error instead of a guess; a wrong "available"
/// answer is worse than an unknown one.
pub fn classify_whois_response(domain: &str, response: &str) -> Result<Availability, SweepError> {
    let text = response.to_lowercase();

    for phrase in UNSUPPORTED_TLD_PHRASES {
        if text.contains(phrase) {
            return Err(SweepError::whois(
                domain,
                "TLD is not serviced by WHOIS lookup",
            ));
        }
    }

    for phrase in AVAILABLE_PHRASES {
        if text.contains(phrase) {
            return Ok(Availability::Available);
        }
    }

    let registered_hits = REGISTERED_PHRASES
        .iter()
        .filter(|phrase| text.contains(*phrase))
        .count();
    if registered_hits >= 2 {
        return Ok(Availability::Registered);
    }

    // Some registries answer unregistered queries with a near-empty response
    if text.trim().len() < 50 {
        return Ok(Availability::Available);
    }

    Err(SweepError::whois(
        domain,
        "Unable to determine domain status from WHOIS response",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_available_responses() {
        let text = "No matching record found for some-unregistered-name.com";
        assert_eq!(
            classify_whois_response("some-unregistered-name.com", text).unwrap(),
            Availability::Available
        );

        let text = "Domain not found";
        assert_eq!(
            classify_whois_response("x.org", text).unwrap(),
            Availability::Available
        );
    }

    #[test]
    fn test_classify_registered_response() {
        let text = "Domain Status: clientTransferProhibited\n\
                    Registrar: Example Registrar\n\
                    Creation Date: 2020-01-01";
        assert_eq!(
            classify_whois_response("example.com", text).unwrap(),
            Availability::Registered
        );
    }

    #[test]
    fn test_single_registered_phrase_is_not_enough() {
        // One hit with a long response stays ambiguous
        let mut text = String::from("registrar: maybe\n");
        text.push_str(&"lorem ipsum dolor sit amet ".repeat(10));
        let result = classify_whois_response("example.com", &text);
        assert!(matches!(result, Err(SweepError::Whois { .. })));
    }

    #[test]
    fn test_short_response_counts_as_available() {
        assert_eq!(
            classify_whois_response("example.com", "\n").unwrap(),
            Availability::Available
        );
    }

    #[test]
    fn test_unsupported_tld_is_error() {
        let text = "No whois server is known for this kind of object.";
        let result = classify_whois_response("example.zz", text);
        assert!(matches!(result, Err(SweepError::Whois { .. })));
    }

    #[test]
    fn test_whois_client_creation() {
        let client = WhoisClient::with_timeout(Duration::from_secs(10));
        assert_eq!(client.timeout, Duration::from_secs(10));
    }
}
