//! Terminal output for the domain-sweep CLI.
//!
//! Colored per-result lines, the end-of-sweep summary, and the final
//! "Available domains" report. Uses only the `console` crate.

use console::{pad_str, style, Alignment};
use domain_sweep_lib::{Availability, CheckResult, DomainCandidate, SweepConfig};
use std::time::Duration;

const DOMAIN_WIDTH: usize = 30;

/// Print a styled header at the start of a pretty run.
pub fn print_header(candidates: &[DomainCandidate], config: &SweepConfig) {
    println!(
        "{} {} {}",
        style("domain-sweep").bold(),
        style(format!("v{}", env!("CARGO_PKG_VERSION"))).dim(),
        style(format!(
            "— Checking {} domain{}",
            candidates.len(),
            if candidates.len() == 1 { "" } else { "s" }
        ))
        .dim(),
    );
    println!(
        "{}",
        style(format!(
            "TLDs: {} | Timeout: {}s | WHOIS fallback: {}",
            config.tlds.join(", "),
            config.timeout.as_secs(),
            if config.enable_whois_fallback { "on" } else { "off" },
        ))
        .dim(),
    );
    println!();
}

/// Format and print a single sweep result with colors and alignment.
///
/// If `counter` is Some((current, total)), a progress prefix like `[3/8]`
/// is shown.
pub fn print_result(result: &CheckResult, counter: Option<(usize, usize)>) {
    let padded = pad_str(&result.domain, DOMAIN_WIDTH, Alignment::Left, Some(".."));

    let prefix = match counter {
        Some((cur, total)) => format!("{} ", style(format!("[{}/{}]", cur, total)).dim()),
        None => String::new(),
    };

    match result.status {
        Availability::Available => {
            println!(
                "  {}{}  {}",
                prefix,
                style(&padded).white(),
                style("AVAILABLE").green().bold(),
            );
        }
        Availability::Registered => {
            println!(
                "  {}{}  {}",
                prefix,
                style(&padded).white(),
                style("REGISTERED").red().bold(),
            );
        }
        Availability::Unknown => {
            println!(
                "  {}{}  {}  {}",
                prefix,
                style(&padded).white(),
                style("UNKNOWN").yellow(),
                style(brief_error(result)).dim(),
            );
        }
    }
}

/// Print the final summary bar with colored counts.
pub fn print_summary(results: &[CheckResult], duration: Duration) {
    let available = results
        .iter()
        .filter(|r| r.status == Availability::Available)
        .count();
    let registered = results
        .iter()
        .filter(|r| r.status == Availability::Registered)
        .count();
    let unknown = results
        .iter()
        .filter(|r| r.status == Availability::Unknown)
        .count();

    println!(
        "  {}",
        style("────────────────────────────────────────────────────").dim()
    );
    println!(
        "  {} domain{} in {:.1}s  {}  {}  {}  {}  {}  {}",
        style(results.len()).bold(),
        if results.len() == 1 { "" } else { "s" },
        duration.as_secs_f64(),
        style("|").dim(),
        style(format!("{} available", available)).green(),
        style("|").dim(),
        style(format!("{} registered", registered)).red(),
        style("|").dim(),
        style(format!("{} unknown", unknown)).yellow(),
    );
}

/// Print the availability report that closes every text-mode run.
pub fn print_report(available: &[String]) {
    if available.is_empty() {
        println!("No available domains found.");
    } else {
        println!("{}", style("Available domains:").green().bold());
        for domain in available {
            println!("{}", domain);
        }
    }
}

/// Extract a brief failure reason from a result with unknown status.
fn brief_error(result: &CheckResult) -> &'static str {
    match &result.error_message {
        Some(msg) => {
            let m = msg.to_lowercase();
            if m.contains("timeout") || m.contains("timed out") {
                "(timeout)"
            } else if m.contains("network") || m.contains("dns") || m.contains("connect") {
                "(network error)"
            } else if m.contains("tld") {
                "(unknown TLD)"
            } else if m.contains("whois") {
                "(whois error)"
            } else {
                "(error)"
            }
        }
        None => "(unknown status)",
    }
}
