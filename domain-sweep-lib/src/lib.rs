//! # Domain Sweep Library
//!
//! Expand a list of base names against a configured set of top-level domains
//! and check every combination for availability, using RDAP with a WHOIS
//! fallback.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use domain_sweep_lib::{combine, DomainSweeper, SweepConfig};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = SweepConfig::default().with_tlds(vec!["com".into(), "org".into()]);
//!     let sweeper = DomainSweeper::with_config(config)?;
//!
//!     let bases = vec!["google".to_string(), "pumpupthejam".to_string()];
//!     let candidates = combine(&bases, &sweeper.config().tlds);
//!
//!     for result in sweeper.sweep(&candidates).await {
//!         println!("{}: {}", result.domain, result.status);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Behavior
//!
//! - Candidates are checked sequentially, in input order; one result is
//!   produced per candidate.
//! - A failed lookup is recorded as `Availability::Unknown` and never aborts
//!   the remaining checks.
//! - Malformed configuration and unreadable input files are fatal at startup.

// Re-export the main public API
pub use checker::{available_domains, DomainSweeper};
pub use config::{parse_timeout_string, DefaultsConfig, FileConfig};
pub use error::SweepError;
pub use inputs::{check_base_name, combine, load_base_names};
pub use types::{Availability, CheckResult, DomainCandidate, LookupMethod, SweepConfig};

// Internal modules
mod checker;
mod config;
mod error;
mod inputs;
mod protocols;
mod types;

// Type alias for convenience
pub type Result<T> = std::result::Result<T, SweepError>;

// Library version metadata
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
