//! RDAP (Registration Data Access Protocol) lookups.
//!
//! RDAP is the structured successor to WHOIS: a plain HTTP GET against the
//! registry endpoint for the TLD. A 200 means the domain exists, a 404 means
//! it is unregistered. Anything else is treated as a failed lookup.

use crate::error::SweepError;
use crate::protocols::registry::rdap_url;
use crate::types::{Availability, CheckResult, DomainCandidate, LookupMethod};
use reqwest::StatusCode;
use std::time::{Duration, Instant};
use tracing::debug;

/// RDAP client for checking domain availability.
#[derive(Clone)]
pub struct RdapClient {
    /// HTTP client for making RDAP requests
    http_client: reqwest::Client,
    /// Timeout for each RDAP request
    timeout: Duration,
}

impl RdapClient {
    /// Create a new RDAP client with the given per-request timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, SweepError> {
        // The HTTP-level timeout gets a small buffer; tokio::time::timeout
        // below enforces the configured limit.
        let http_client = reqwest::Client::builder()
            .timeout(timeout + Duration::from_secs(2))
            .build()
            .map_err(|e| {
                SweepError::network_with_source("Failed to create RDAP HTTP client", e.to_string())
            })?;

        Ok(Self {
            http_client,
            timeout,
        })
    }

    /// Check a single candidate via RDAP.
    ///
    /// # Errors
    ///
    /// Returns `SweepError` if the TLD has no known RDAP endpoint, the
    /// request fails or times out, or the server returns an unexpected
    /// status code.
    pub async fn check(&self, candidate: &DomainCandidate) -> Result<CheckResult, SweepError> {
        let domain = candidate.fqdn();
        let url = rdap_url(&domain, &candidate.tld)?;
        let start = Instant::now();

        debug!(%domain, %url, "rdap lookup");

        let result = tokio::time::timeout(self.timeout, self.query(&url, &domain)).await;
        let elapsed = start.elapsed();

        match result {
            Ok(Ok(status)) => Ok(CheckResult {
                domain,
                base: candidate.base.clone(),
                tld: candidate.tld.clone(),
                status,
                method: LookupMethod::Rdap,
                elapsed: Some(elapsed),
                error_message: None,
            }),
            Ok(Err(e)) => Err(e),
            Err(_) => Err(SweepError::timeout("RDAP request", self.timeout)),
        }
    }

    /// Issue the RDAP GET and map the status code to an availability answer.
    async fn query(&self, url: &str, domain: &str) -> Result<Availability, SweepError> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| SweepError::rdap(domain, format!("Request failed: {}", e)))?;

        match response.status() {
            StatusCode::OK => Ok(Availability::Registered),
            StatusCode::NOT_FOUND => Ok(Availability::Available),
            code => {
                debug!(%domain, status = %code, "rdap server returned error");
                Err(SweepError::rdap_with_status(
                    domain,
                    format!("RDAP server returned error: {}", code),
                    code.as_u16(),
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rdap_client_creation() {
        let client = RdapClient::with_timeout(Duration::from_secs(3));
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_unknown_tld_fails_without_network() {
        let client = RdapClient::with_timeout(Duration::from_secs(3)).unwrap();
        let candidate = DomainCandidate::new("example", "zz-not-a-tld");
        let result = client.check(&candidate).await;
        assert!(matches!(result, Err(SweepError::UnknownTld { .. })));
    }
}
