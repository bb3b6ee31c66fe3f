//! botranges library
//!
//! Fetches the published IP-range allow-lists for a handful of well-known
//! web crawlers and monitors (Bingbot, the Google crawler, UptimeRobot),
//! normalizes every entry, and writes one CSV table per source:
//!
//! - Bare IPv6 addresses are canonicalized to their containing /64 network
//! - CIDR entries are canonicalized (host bits zeroed); IPv4 passes through
//! - Duplicate normalized entries are removed, first occurrence winning
//! - Each row carries an address-family column in the default format
//!
//! # Example
//!
//! ```rust
//! use botranges::normalize;
//! use botranges::sources::{dedup, AddressEntry};
//!
//! assert_eq!(normalize("2001:db8::1"), "2001:db8::/64");
//!
//! let entries = vec![
//!     AddressEntry::new(normalize("2001:db8::1"), "uptimerobot"),
//!     AddressEntry::new(normalize("2001:db8::2"), "uptimerobot"),
//! ];
//! // Both addresses collapse into the same /64.
//! assert_eq!(dedup(entries).len(), 1);
//! ```

// Re-export all modules for library use
pub mod app;
pub mod cli;
pub mod config;
pub mod errors;
pub mod normalize;
pub mod output;
pub mod sources;

// Re-export commonly used types and functions for convenience
pub use app::App;
pub use config::{default_sources, Config, ParseStrategy, SourceSpec};
pub use errors::{BotRangesError, ErrorCategory, Result};
pub use normalize::normalize;
pub use output::{address_family, write_entries, RowFormat};
pub use sources::{dedup, AddressEntry, HttpSource, RangeSource};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
