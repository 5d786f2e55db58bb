//! Domain Sweep CLI Application
//!
//! Sweeps base names across a configured TLD list and reports which
//! combinations are still available for registration.

mod ui;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::Parser;
use domain_sweep_lib::{
    available_domains, check_base_name, combine, load_base_names, parse_timeout_string,
    DomainCandidate, DomainSweeper, FileConfig, SweepConfig,
};
use std::path::Path;
use std::process;
use std::time::Duration;

/// Config file consulted when no --config path is given.
const DEFAULT_CONFIG_PATH: &str = "./domain-sweep.toml";

const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Yellow.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

/// CLI arguments for domain-sweep
#[derive(Parser, Debug)]
#[command(name = "domain-sweep")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Sweep base names across a TLD list and report available domains")]
#[command(
    long_about = "Combine base names with a configured set of top-level domains and check\neach combination for availability via RDAP, with WHOIS as fallback.\n\nLookups run sequentially; a failed lookup is reported as unknown and never\naborts the rest of the sweep."
)]
#[command(styles = STYLES)]
pub struct Args {
    /// Base names to check (no TLD, e.g. "pumpupthejam")
    #[arg(value_name = "NAMES", help_heading = "Input")]
    pub names: Vec<String>,

    /// Input file with base names (one per line)
    #[arg(short = 'f', long = "file", value_name = "FILE", help_heading = "Input")]
    pub file: Option<String>,

    /// Config file listing top_level_domains (default: ./domain-sweep.toml)
    #[arg(
        long = "config",
        value_name = "FILE",
        help_heading = "Configuration"
    )]
    pub config: Option<String>,

    /// TLDs to check, overriding the config file (comma-separated or repeated)
    #[arg(short = 't', long = "tld", value_name = "TLD", value_delimiter = ',', action = clap::ArgAction::Append, help_heading = "Configuration")]
    pub tlds: Option<Vec<String>>,

    /// Per-lookup timeout (e.g. "5s", "30s", "2m")
    #[arg(long = "timeout", value_name = "DURATION", help_heading = "Configuration")]
    pub timeout: Option<String>,

    /// Disable the WHOIS fallback
    #[arg(long = "no-whois", help_heading = "Configuration")]
    pub no_whois: bool,

    /// Output results in JSON format
    #[arg(short = 'j', long = "json", help_heading = "Output Format")]
    pub json: bool,

    /// Output results in CSV format
    #[arg(long = "csv", help_heading = "Output Format")]
    pub csv: bool,

    /// Grouped, colored output with a header
    #[arg(short = 'p', long = "pretty", help_heading = "Output Format")]
    pub pretty: bool,

    /// Print the candidate list without checking availability
    #[arg(long = "dry-run", help_heading = "Output Format")]
    pub dry_run: bool,

    /// Verbose logging
    #[arg(short = 'v', long = "verbose", help_heading = "Configuration")]
    pub verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse();

    if args.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "domain_sweep_lib=debug".into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    if let Err(e) = validate_args(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    if let Err(e) = run_sweep(args).await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Validate command line arguments.
fn validate_args(args: &Args) -> Result<(), String> {
    if args.names.is_empty() && args.file.is_none() {
        return Err("You must specify base names or an input file with --file".to_string());
    }

    let output_formats = [args.json, args.csv].iter().filter(|&&x| x).count();
    if output_formats > 1 {
        return Err("Cannot specify multiple output formats (--json, --csv)".to_string());
    }

    if let Some(timeout_str) = &args.timeout {
        if parse_timeout_string(timeout_str).is_none() {
            return Err(format!(
                "Invalid timeout '{}'. Use format like '5s', '30s', '2m'",
                timeout_str
            ));
        }
    }

    Ok(())
}

/// Main sweep logic.
async fn run_sweep(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let (config, pretty) = build_config(&args)?;
    let bases = gather_base_names(&args)?;
    let candidates = combine(&bases, &config.tlds);

    if candidates.is_empty() {
        return Err("No candidates to check".into());
    }

    if args.dry_run {
        print_dry_run(&candidates, &args)?;
        return Ok(());
    }

    let sweeper = DomainSweeper::with_config(config)?;
    let is_structured = args.json || args.csv;

    if pretty && !is_structured {
        ui::print_header(&candidates, sweeper.config());
    }

    let start = std::time::Instant::now();

    // Sequential sweep; text modes report each result as it lands
    let results = if is_structured {
        sweeper.sweep(&candidates).await
    } else {
        let total = candidates.len();
        let mut completed = 0usize;
        sweeper
            .sweep_with(&candidates, |result| {
                completed += 1;
                let counter = if total > 1 {
                    Some((completed, total))
                } else {
                    None
                };
                ui::print_result(result, counter);
            })
            .await
    };

    let duration = start.elapsed();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else if args.csv {
        print_csv_results(&results);
    } else {
        println!();
        ui::print_summary(&results, duration);
        println!();
        ui::print_report(&available_domains(&results));
    }

    Ok(())
}

/// Resolve the sweep configuration and the effective pretty-output flag.
///
/// An explicit --config path must load cleanly or the run aborts. Without
/// one, ./domain-sweep.toml is used when present; otherwise the built-in
/// defaults apply. CLI flags override whatever the file provided; --pretty
/// can only turn pretty output on, never off a `[defaults] pretty = true`.
fn build_config(args: &Args) -> Result<(SweepConfig, bool), Box<dyn std::error::Error>> {
    let mut config = SweepConfig::default();
    let mut pretty = args.pretty;

    let file_config = if let Some(path) = &args.config {
        Some(FileConfig::load(path)?)
    } else if Path::new(DEFAULT_CONFIG_PATH).exists() {
        Some(FileConfig::load(DEFAULT_CONFIG_PATH)?)
    } else {
        None
    };

    if let Some(file_config) = file_config {
        if let Some(defaults) = &file_config.defaults {
            pretty |= defaults.pretty.unwrap_or(false);
        }
        config = file_config.apply_to(config);
    }

    if let Some(tlds) = &args.tlds {
        let cleaned: Vec<String> = tlds
            .iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
        if cleaned.is_empty() {
            return Err("--tld was given but contained no TLDs".into());
        }
        config.tlds = cleaned;
    }

    if let Some(timeout_str) = &args.timeout {
        if let Some(secs) = parse_timeout_string(timeout_str) {
            config.timeout = Duration::from_secs(secs);
        }
    }

    if args.no_whois {
        config.enable_whois_fallback = false;
    }

    Ok((config, pretty))
}

/// Collect base names from positional arguments and the input file.
fn gather_base_names(args: &Args) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let mut bases = Vec::new();

    for name in &args.names {
        let trimmed = name.trim();
        check_base_name(trimmed).map_err(|reason| format!("Invalid name '{}': {}", trimmed, reason))?;
        bases.push(trimmed.to_string());
    }

    if let Some(file_path) = &args.file {
        bases.extend(load_base_names(file_path)?);
    }

    if bases.is_empty() {
        return Err("No valid base names to check".into());
    }

    Ok(bases)
}

/// Print the candidate list without performing any lookups.
fn print_dry_run(
    candidates: &[DomainCandidate],
    args: &Args,
) -> Result<(), Box<dyn std::error::Error>> {
    if args.json {
        let fqdns: Vec<String> = candidates.iter().map(|c| c.fqdn()).collect();
        println!("{}", serde_json::to_string_pretty(&fqdns)?);
    } else {
        for candidate in candidates {
            println!("{}", candidate.fqdn());
        }
    }
    eprintln!("{} domains would be checked", candidates.len());
    Ok(())
}

/// Print results in CSV format, one row per candidate.
fn print_csv_results(results: &[domain_sweep_lib::CheckResult]) {
    println!("domain,base,tld,status,method");
    for result in results {
        println!(
            "{},{},{},{},{}",
            result.domain, result.base, result.tld, result.status, result.method
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_args() -> Args {
        Args {
            names: vec![],
            file: None,
            config: None,
            tlds: None,
            timeout: None,
            no_whois: false,
            json: false,
            csv: false,
            pretty: false,
            dry_run: false,
            verbose: false,
        }
    }

    #[test]
    fn test_validate_args_requires_input() {
        let args = create_test_args();
        let result = validate_args(&args);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("base names"));
    }

    #[test]
    fn test_validate_args_accepts_names() {
        let mut args = create_test_args();
        args.names = vec!["example".to_string()];
        assert!(validate_args(&args).is_ok());
    }

    #[test]
    fn test_validate_args_accepts_file_only() {
        let mut args = create_test_args();
        args.file = Some("names.txt".to_string());
        assert!(validate_args(&args).is_ok());
    }

    #[test]
    fn test_validate_args_rejects_json_and_csv() {
        let mut args = create_test_args();
        args.names = vec!["example".to_string()];
        args.json = true;
        args.csv = true;

        let result = validate_args(&args);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("output formats"));
    }

    #[test]
    fn test_validate_args_rejects_bad_timeout() {
        let mut args = create_test_args();
        args.names = vec!["example".to_string()];
        args.timeout = Some("soon".to_string());

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_build_config_defaults_without_config_file() {
        let mut args = create_test_args();
        args.names = vec!["example".to_string()];

        let (config, pretty) = build_config(&args).unwrap();
        assert_eq!(config.tlds, vec!["com"]);
        assert!(config.enable_whois_fallback);
        assert!(!pretty);
    }

    #[test]
    fn test_build_config_loads_explicit_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"top_level_domains = [\"net\", \"io\"]\n")
            .unwrap();
        file.flush().unwrap();

        let mut args = create_test_args();
        args.config = Some(file.path().to_string_lossy().to_string());

        let (config, _) = build_config(&args).unwrap();
        assert_eq!(config.tlds, vec!["net", "io"]);
    }

    #[test]
    fn test_build_config_missing_explicit_file_is_fatal() {
        let mut args = create_test_args();
        args.config = Some("/nonexistent/sweep.toml".to_string());

        assert!(build_config(&args).is_err());
    }

    #[test]
    fn test_cli_tlds_override_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"top_level_domains = [\"net\"]\n").unwrap();
        file.flush().unwrap();

        let mut args = create_test_args();
        args.config = Some(file.path().to_string_lossy().to_string());
        args.tlds = Some(vec!["org".to_string(), "dev".to_string()]);

        let (config, _) = build_config(&args).unwrap();
        assert_eq!(config.tlds, vec!["org", "dev"]);
    }

    #[test]
    fn test_timeout_and_no_whois_flags_apply() {
        let mut args = create_test_args();
        args.timeout = Some("30s".to_string());
        args.no_whois = true;

        let (config, _) = build_config(&args).unwrap();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(!config.enable_whois_fallback);
    }

    #[test]
    fn test_pretty_default_comes_from_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"top_level_domains = [\"com\"]\n\n[defaults]\npretty = true\n")
            .unwrap();
        file.flush().unwrap();

        let mut args = create_test_args();
        args.config = Some(file.path().to_string_lossy().to_string());

        let (_, pretty) = build_config(&args).unwrap();
        assert!(pretty);
    }

    #[test]
    fn test_pretty_flag_wins_over_config_false() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"top_level_domains = [\"com\"]\n\n[defaults]\npretty = false\n")
            .unwrap();
        file.flush().unwrap();

        let mut args = create_test_args();
        args.config = Some(file.path().to_string_lossy().to_string());
        args.pretty = true;

        let (_, pretty) = build_config(&args).unwrap();
        assert!(pretty);
    }

    #[test]
    fn test_gather_base_names_rejects_invalid_positional() {
        let mut args = create_test_args();
        args.names = vec!["-bad".to_string()];

        let result = gather_base_names(&args);
        assert!(result.is_err());
    }

    #[test]
    fn test_gather_base_names_merges_file_and_positional() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"from-file\n").unwrap();
        file.flush().unwrap();

        let mut args = create_test_args();
        args.names = vec!["positional".to_string()];
        args.file = Some(file.path().to_string_lossy().to_string());

        let bases = gather_base_names(&args).unwrap();
        assert_eq!(bases, vec!["positional", "from-file"]);
    }
}
