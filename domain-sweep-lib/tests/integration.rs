//! Integration tests for domain-sweep-lib exports and core behavior.

use domain_sweep_lib::{
    available_domains, combine, load_base_names, Availability, DomainSweeper, FileConfig,
    SweepConfig,
};
use std::io::Write;
use tempfile::NamedTempFile;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// A sweeper that fails every lookup before touching the network:
/// unknown TLDs have no RDAP endpoint, and WHOIS fallback is off.
fn offline_sweeper() -> DomainSweeper {
    let config = SweepConfig::default()
        .with_tlds(vec!["zz-not-a-tld".to_string()])
        .with_whois_fallback(false);
    DomainSweeper::with_config(config).unwrap()
}

#[test]
fn test_result_count_equals_product_of_sizes() {
    let bases = strings(&["alpha", "beta", "gamma"]);
    let tlds = strings(&["com", "net", "org", "io"]);

    let candidates = combine(&bases, &tlds);
    assert_eq!(candidates.len(), bases.len() * tlds.len());
}

#[test]
fn test_combine_is_base_major_ordered() {
    let bases = strings(&["google", "pumpupthejam"]);
    let tlds = strings(&["com", "org"]);

    let fqdns: Vec<String> = combine(&bases, &tlds).iter().map(|c| c.fqdn()).collect();
    assert_eq!(
        fqdns,
        vec![
            "google.com",
            "google.org",
            "pumpupthejam.com",
            "pumpupthejam.org"
        ]
    );
}

#[tokio::test]
async fn test_failed_lookups_do_not_abort_the_batch() {
    let sweeper = offline_sweeper();
    let bases = strings(&["google", "pumpupthejam"]);
    let candidates = combine(&bases, &sweeper.config().tlds);

    let results = sweeper.sweep(&candidates).await;

    // Every candidate produced a result despite every lookup failing
    assert_eq!(results.len(), candidates.len());
    for result in &results {
        assert_eq!(result.status, Availability::Unknown);
        assert!(result.error_message.is_some());
    }
    assert!(available_domains(&results).is_empty());
}

#[tokio::test]
async fn test_sweep_preserves_candidate_order() {
    let sweeper = offline_sweeper();
    let bases = strings(&["one", "two", "three"]);
    let candidates = combine(&bases, &sweeper.config().tlds);

    let results = sweeper.sweep(&candidates).await;
    let result_domains: Vec<String> = results.iter().map(|r| r.domain.clone()).collect();
    let candidate_domains: Vec<String> = candidates.iter().map(|c| c.fqdn()).collect();
    assert_eq!(result_domains, candidate_domains);
}

#[test]
fn test_file_config_drives_sweep_config() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"top_level_domains = [\"com\", \"org\", \"io\"]\n")
        .unwrap();
    file.flush().unwrap();

    let file_config = FileConfig::load(file.path()).unwrap();
    let config = file_config.apply_to(SweepConfig::default());
    assert_eq!(config.tlds, vec!["com", "org", "io"]);
}

#[test]
fn test_input_file_to_candidates() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"# candidates\ngoogle\npumpupthejam\n")
        .unwrap();
    file.flush().unwrap();

    let bases = load_base_names(file.path().to_str().unwrap()).unwrap();
    let candidates = combine(&bases, &strings(&["com", "org"]));
    assert_eq!(candidates.len(), 4);
    assert_eq!(candidates[0].fqdn(), "google.com");
    assert_eq!(candidates[3].fqdn(), "pumpupthejam.org");
}

/// Smoke test: google.com must always be reported as registered.
/// Hits the network, so it's marked #[ignore] for CI unless explicitly run.
#[tokio::test]
#[ignore]
async fn test_known_registered_domain_google_com() {
    let sweeper = DomainSweeper::new().unwrap();
    let candidates = combine(&strings(&["google"]), &strings(&["com"]));

    let results = sweeper.sweep(&candidates).await;
    assert_eq!(results.len(), 1);
    assert_eq!(
        results[0].status,
        Availability::Registered,
        "google.com must be reported as registered"
    );
}
