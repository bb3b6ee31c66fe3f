//! Pluggable IP-range data sources.
//!
//! Each upstream list implements a uniform async trait so the app loop can
//! run them sequentially, isolate failures per source, and swap in fakes for
//! testing. The real implementation (`HttpSource`) is config-driven: a
//! `SourceSpec` names the label, URL, parse strategy, and output file, so
//! tests substitute fake endpoints without touching global state.
//!
//! Parsing is factored into pure functions over the response body, keeping
//! the network I/O confined to `HttpSource::fetch`.

use std::collections::HashSet;

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::{ParseStrategy, SourceSpec};
use crate::errors::{BotRangesError, Result};
use crate::normalize::normalize;

/// One address-or-prefix and the service it belongs to.
///
/// `address` is either a bare IP, a CIDR network, or an opaque string when
/// the upstream entry was malformed (normalization is best-effort).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressEntry {
    pub address: String,
    pub label: String,
}

impl AddressEntry {
    pub fn new(address: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            label: label.into(),
        }
    }
}

/// Trait every range source must implement.
#[async_trait]
pub trait RangeSource: Send + Sync {
    fn label(&self) -> &str;
    async fn fetch(&self) -> Result<Vec<AddressEntry>>;
}

/// HTTP-backed source driven by a `SourceSpec`.
pub struct HttpSource {
    spec: SourceSpec,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(spec: SourceSpec, client: reqwest::Client) -> Self {
        Self { spec, client }
    }
}

#[async_trait]
impl RangeSource for HttpSource {
    fn label(&self) -> &str {
        &self.spec.label
    }

    /// Single GET, bounded by the client-level timeout. No retries.
    async fn fetch(&self) -> Result<Vec<AddressEntry>> {
        let response = self
            .client
            .get(&self.spec.url)
            .send()
            .await
            .map_err(|e| BotRangesError::network(&self.spec.label, &self.spec.url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BotRangesError::http_status(
                &self.spec.label,
                &self.spec.url,
                status.as_u16(),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| BotRangesError::network(&self.spec.label, &self.spec.url, e))?;

        match self.spec.strategy {
            ParseStrategy::JsonPrefixes => parse_prefix_json(&self.spec.label, &body),
            ParseStrategy::TokenList => parse_token_list(&self.spec.label, &body),
        }
    }
}

/// Shape published by Bing and Google: a `prefixes` array whose elements
/// carry either an `ipv4Prefix` or an `ipv6Prefix` key.
#[derive(Debug, Deserialize)]
struct PrefixDocument {
    #[serde(default)]
    prefixes: Vec<PrefixRecord>,
}

#[derive(Debug, Deserialize)]
struct PrefixRecord {
    #[serde(rename = "ipv4Prefix")]
    ipv4_prefix: Option<String>,
    #[serde(rename = "ipv6Prefix")]
    ipv6_prefix: Option<String>,
}

/// Parse a JSON prefix document into entries.
///
/// Elements with neither prefix key are skipped silently so minor upstream
/// shape drift never aborts a whole fetch. IPv6 prefixes are normalized;
/// IPv4 prefixes are taken as published.
pub fn parse_prefix_json(label: &str, body: &str) -> Result<Vec<AddressEntry>> {
    let doc: PrefixDocument = serde_json::from_str(body)
        .map_err(|e| BotRangesError::parse(label, format!("invalid JSON: {e}")))?;

    let mut entries = Vec::with_capacity(doc.prefixes.len());
    for record in doc.prefixes {
        if let Some(v4) = record.ipv4_prefix {
            entries.push(AddressEntry::new(v4, label));
        } else if let Some(v6) = record.ipv6_prefix {
            entries.push(AddressEntry::new(normalize(&v6), label));
        }
    }
    Ok(entries)
}

/// Parse a whitespace-separated token list into entries.
///
/// Every token is normalized and the result deduplicated; the upstream list
/// mixes bare IPv6 addresses that collapse into the same /64 after
/// normalization. A body with no tokens at all is a parse failure.
pub fn parse_token_list(label: &str, body: &str) -> Result<Vec<AddressEntry>> {
    let entries: Vec<AddressEntry> = body
        .split_whitespace()
        .map(|token| AddressEntry::new(normalize(token), label))
        .collect();

    if entries.is_empty() {
        return Err(BotRangesError::parse(
            label,
            "response body contains no address tokens",
        ));
    }
    Ok(dedup(entries))
}

/// Remove repeated normalized addresses, first occurrence wins, original
/// relative order preserved. Keyed on the address only; all entries on this
/// path share one label.
pub fn dedup(entries: Vec<AddressEntry>) -> Vec<AddressEntry> {
    let mut seen: HashSet<String> = HashSet::with_capacity(entries.len());
    entries
        .into_iter()
        .filter(|entry| seen.insert(entry.address.clone()))
        .collect()
}
