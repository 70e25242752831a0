//! Loopback callback URL vetting.
//!
//! Desktop clients register local redirect targets for the OAuth flow;
//! only loopback hosts may be accepted, never arbitrary external hosts.

use url::{Host, Url};

/// Whether a callback URL points at the local machine.
///
/// True only for `http`/`https` URLs whose host is `localhost`, a
/// `*.localhost` subdomain, `127.0.0.1`, or `::1`. Unparseable input,
/// other schemes, and every other host (including other `127.0.0.0/8`
/// addresses) are rejected.
///
/// # Examples
/// ```
/// use paymap_sanitize::is_safe_loopback_callback;
/// assert!(is_safe_loopback_callback("http://127.0.0.1:8080/cb"));
/// assert!(!is_safe_loopback_callback("http://evil.example/cb"));
/// assert!(!is_safe_loopback_callback("javascript:alert(1)"));
/// ```
pub fn is_safe_loopback_callback(value: &str) -> bool {
    let Ok(url) = Url::parse(value) else {
        return false;
    };

    if url.scheme() != "http" && url.scheme() != "https" {
        return false;
    }

    match url.host() {
        Some(Host::Domain(domain)) => domain == "localhost" || domain.ends_with(".localhost"),
        Some(Host::Ipv4(addr)) => addr == std::net::Ipv4Addr::new(127, 0, 0, 1),
        Some(Host::Ipv6(addr)) => addr == std::net::Ipv6Addr::LOCALHOST,
        None => false,
    }
}
