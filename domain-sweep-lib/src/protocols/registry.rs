//! TLD to RDAP endpoint mappings.
//!
//! A built-in table of registry RDAP base URLs for the TLDs people most
//! commonly sweep. TLDs outside this table produce an `UnknownTld` error,
//! which the sweep loop turns into a WHOIS fallback attempt.

use crate::error::SweepError;

/// Built-in RDAP endpoint for a TLD, if one is known.
///
/// The returned URL is a base that the domain name is appended to directly.
pub fn rdap_endpoint(tld: &str) -> Option<&'static str> {
    match tld.to_lowercase().as_str() {
        // Popular gTLDs
        "com" => Some("https://rdap.verisign.com/com/v1/domain/"),
        "net" => Some("https://rdap.verisign.com/net/v1/domain/"),
        "org" => Some("https://rdap.publicinterestregistry.org/rdap/domain/"),
        "info" => Some("https://rdap.identitydigital.services/rdap/domain/"),
        "biz" => Some("https://rdap.nic.biz/domain/"),
        // Google registry TLDs
        "app" => Some("https://pubapi.registry.google/rdap/domain/"),
        "dev" => Some("https://pubapi.registry.google/rdap/domain/"),
        "page" => Some("https://pubapi.registry.google/rdap/domain/"),
        // CentralNic managed gTLDs
        "xyz" => Some("https://rdap.centralnic.com/xyz/domain/"),
        "tech" => Some("https://rdap.centralnic.com/tech/domain/"),
        "online" => Some("https://rdap.centralnic.com/online/domain/"),
        "site" => Some("https://rdap.centralnic.com/site/domain/"),
        "store" => Some("https://rdap.centralnic.com/store/domain/"),
        // Identity Digital TLDs
        "io" => Some("https://rdap.identitydigital.services/rdap/domain/"),
        "me" => Some("https://rdap.identitydigital.services/rdap/domain/"),
        // ccTLDs with public RDAP
        "ai" => Some("https://rdap.identitydigital.services/rdap/domain/"),
        "us" => Some("https://rdap.about.us/rdap/domain/"),
        "co" => Some("https://rdap.nic.co/domain/"),
        _ => None,
    }
}

/// Build the full RDAP query URL for a domain, or fail for an unknown TLD.
pub fn rdap_url(domain: &str, tld: &str) -> Result<String, SweepError> {
    match rdap_endpoint(tld) {
        Some(endpoint) => Ok(format!("{}{}", endpoint, domain)),
        None => Err(SweepError::unknown_tld(tld)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tlds_have_endpoints() {
        assert!(rdap_endpoint("com").is_some());
        assert!(rdap_endpoint("org").is_some());
        assert!(rdap_endpoint("io").is_some());
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(rdap_endpoint("COM"), rdap_endpoint("com"));
    }

    #[test]
    fn test_unknown_tld_has_no_endpoint() {
        assert!(rdap_endpoint("zz-not-a-tld").is_none());
    }

    #[test]
    fn test_rdap_url_builds_full_query() {
        let url = rdap_url("example.com", "com").unwrap();
        assert_eq!(url, "https://rdap.verisign.com/com/v1/domain/example.com");
    }

    #[test]
    fn test_rdap_url_unknown_tld_errors() {
        let result = rdap_url("example.zz-not-a-tld", "zz-not-a-tld");
        assert!(matches!(result, Err(SweepError::UnknownTld { .. })));
    }
}
