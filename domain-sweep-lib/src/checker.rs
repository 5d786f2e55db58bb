//! The sweep loop.
//!
//! `DomainSweeper` walks a candidate list one lookup at a time: RDAP first,
//! WHOIS fallback when enabled, and a recorded `Unknown` result when both
//! fail. A failed lookup never aborts the remaining candidates.

use crate::error::SweepError;
use crate::protocols::{RdapClient, WhoisClient};
use crate::types::{Availability, CheckResult, DomainCandidate, LookupMethod, SweepConfig};
use tracing::debug;

/// Sequential domain availability sweeper.
///
/// # Example
///
/// ```rust,no_run
/// use domain_sweep_lib::{combine, DomainSweeper, SweepConfig};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = SweepConfig::default().with_tlds(vec!["com".into(), "org".into()]);
///     let sweeper = DomainSweeper::with_config(config)?;
///
///     let bases = vec!["pumpupthejam".to_string()];
///     let candidates = combine(&bases, &sweeper.config().tlds);
///     for result in sweeper.sweep(&candidates).await {
///         println!("{}: {}", result.domain, result.status);
///     }
///     Ok(())
/// }
/// ```
pub struct DomainSweeper {
    /// Configuration settings for this sweeper instance
    config: SweepConfig,
    /// RDAP client, tried first for every candidate
    rdap_client: RdapClient,
    /// WHOIS client, consulted when RDAP cannot answer
    whois_client: WhoisClient,
}

impl DomainSweeper {
    /// Create a sweeper with default configuration.
    pub fn new() -> Result<Self, SweepError> {
        Self::with_config(SweepConfig::default())
    }

    /// Create a sweeper with custom configuration.
    pub fn with_config(config: SweepConfig) -> Result<Self, SweepError> {
        let rdap_client = RdapClient::with_timeout(config.timeout)?;
        let whois_client = WhoisClient::with_timeout(config.timeout);

        Ok(Self {
            config,
            rdap_client,
            whois_client,
        })
    }

    /// Get the current configuration for this sweeper.
    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    /// Check a single candidate.
    ///
    /// The lookup order is RDAP, then WHOIS when fallback is enabled. This
    /// method is infallible by design: when every protocol fails, the
    /// failure is folded into the result as `Availability::Unknown`.
    pub async fn check_candidate(&self, candidate: &DomainCandidate) -> CheckResult {
        match self.rdap_client.check(candidate).await {
            Ok(result) => result,
            Err(rdap_error) => {
                debug!(domain = %candidate, error = %rdap_error, "rdap lookup failed");

                if self.config.enable_whois_fallback {
                    match self.whois_client.check(candidate).await {
                        Ok(result) => result,
                        Err(whois_error) if whois_error.indicates_available() => {
                            answered(candidate, Availability::Available, LookupMethod::Whois)
                        }
                        Err(whois_error) => {
                            debug!(domain = %candidate, error = %whois_error, "whois fallback failed");
                            // The RDAP error is usually the more informative one
                            CheckResult::failed(candidate, rdap_error.to_string())
                        }
                    }
                } else if rdap_error.indicates_available() {
                    answered(candidate, Availability::Available, LookupMethod::Rdap)
                } else {
                    CheckResult::failed(candidate, rdap_error.to_string())
                }
            }
        }
    }

    /// Check all candidates sequentially, in input order.
    ///
    /// Returns one result per candidate; the output length always equals the
    /// input length.
    pub async fn sweep(&self, candidates: &[DomainCandidate]) -> Vec<CheckResult> {
        self.sweep_with(candidates, |_| {}).await
    }

    /// Check all candidates sequentially, invoking `observer` after each one.
    ///
    /// The observer lets callers report progress without owning the loop.
    pub async fn sweep_with<F>(
        &self,
        candidates: &[DomainCandidate],
        mut observer: F,
    ) -> Vec<CheckResult>
    where
        F: FnMut(&CheckResult),
    {
        let mut results = Vec::with_capacity(candidates.len());

        for candidate in candidates {
            let result = self.check_candidate(candidate).await;
            observer(&result);
            results.push(result);
        }

        results
    }
}

fn answered(
    candidate: &DomainCandidate,
    status: Availability,
    method: LookupMethod,
) -> CheckResult {
    CheckResult {
        domain: candidate.fqdn(),
        base: candidate.base.clone(),
        tld: candidate.tld.clone(),
        status,
        method,
        elapsed: None,
        error_message: None,
    }
}

/// Extract the available domain names from a result set, preserving order.
pub fn available_domains(results: &[CheckResult]) -> Vec<String> {
    results
        .iter()
        .filter(|r| r.is_available())
        .map(|r| r.domain.clone())
        .collect()
}
