//! Lookup protocol implementations.
//!
//! This module contains the clients used to answer "is this domain
//! registered?": RDAP over HTTP, with the system WHOIS command as fallback,
//! plus the TLD-to-endpoint registry the RDAP client consults.

/// RDAP (Registration Data Access Protocol) client
pub mod rdap;

/// TLD to RDAP endpoint mappings
pub mod registry;

/// WHOIS fallback via the system whois command
pub mod whois;

pub use rdap::RdapClient;
pub use whois::WhoisClient;
