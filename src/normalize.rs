/*!
Address normalization for botranges.

This module centralizes the one piece of real logic in the tool: turning a
raw address-or-prefix string from an upstream list into its canonical form.

Rules:
- Strings with a `/` are parsed as networks; host bits beyond the prefix are
  permitted and zeroed, and the canonical form is returned.
- Bare IPv6 addresses are widened to their containing /64 network.
- Bare IPv4 addresses pass through unchanged. This is asymmetric with the
  IPv6 handling (no widening to /32); upstream lists publish IPv4 entries
  either bare or already prefixed, and we preserve whichever they sent.
- Anything unparseable passes through unchanged. Normalization is
  best-effort and never fails.
*/

use std::net::Ipv6Addr;

use ipnet::{IpNet, Ipv6Net};

/// Canonicalize a raw address/prefix string.
///
/// Pure and infallible: malformed input is returned as-is so a single bad
/// upstream entry never poisons a whole fetch.
pub fn normalize(raw: &str) -> String {
    if raw.contains('/') {
        match raw.parse::<IpNet>() {
            Ok(net) => net.trunc().to_string(),
            Err(_) => raw.to_string(),
        }
    } else if raw.contains(':') {
        match raw.parse::<Ipv6Addr>() {
            // Prefix length 64 is always valid for IPv6.
            Ok(addr) => match Ipv6Net::new(addr, 64) {
                Ok(net) => net.trunc().to_string(),
                Err(_) => raw.to_string(),
            },
            Err(_) => raw.to_string(),
        }
    } else {
        raw.to_string()
    }
}
