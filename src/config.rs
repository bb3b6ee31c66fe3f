//! Configuration management for botranges.
//!
//! Defaults → environment → command line, in that order of precedence. The
//! source list is an explicit ordered structure handed to the app at
//! construction, so tests can point individual sources at fake endpoints and
//! scratch output paths without touching global state.

use std::path::PathBuf;
use std::time::Duration;

use crate::errors::{BotRangesError, Result};
use crate::output::RowFormat;

/// How a source's response body is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStrategy {
    /// JSON document with a `prefixes` array of `ipv4Prefix`/`ipv6Prefix` records.
    JsonPrefixes,
    /// Whitespace-separated address tokens.
    TokenList,
}

/// One upstream list: where to fetch it, how to parse it, where to write it.
#[derive(Debug, Clone)]
pub struct SourceSpec {
    pub label: String,
    pub url: String,
    pub strategy: ParseStrategy,
    pub output_file: String,
}

impl SourceSpec {
    pub fn new(
        label: impl Into<String>,
        url: impl Into<String>,
        strategy: ParseStrategy,
        output_file: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
            strategy,
            output_file: output_file.into(),
        }
    }
}

/// Network-related configuration options.
#[derive(Debug, Clone)]
pub struct NetworkConfig {
    /// Per-request timeout. Every GET is bounded; an unbounded request that
    /// hangs would stall the whole sequential run.
    pub http_timeout: Duration,

    /// User-Agent header sent with every request.
    pub user_agent: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            http_timeout: Duration::from_secs(30),
            user_agent: format!("{}/{}", crate::NAME, crate::VERSION),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone)]
pub struct Config {
    pub network: NetworkConfig,
    pub sources: Vec<SourceSpec>,
    pub output_dir: PathBuf,
    pub format: RowFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            network: NetworkConfig::default(),
            sources: default_sources(),
            output_dir: PathBuf::from("."),
            format: RowFormat::Typed,
        }
    }
}

/// The fixed ordered mapping of upstream lists to output files.
pub fn default_sources() -> Vec<SourceSpec> {
    vec![
        SourceSpec::new(
            "Bingbot",
            "https://www.bing.com/toolbox/bingbot.json",
            ParseStrategy::JsonPrefixes,
            "bingbots.csv",
        ),
        SourceSpec::new(
            "googlecrawler",
            "https://developers.google.com/static/search/apis/ipranges/googlebot.json",
            ParseStrategy::JsonPrefixes,
            "googlecrawlers.csv",
        ),
        SourceSpec::new(
            "uptimerobot",
            "https://uptimerobot.com/inc/files/ips/IPv4andIPv6.txt",
            ParseStrategy::TokenList,
            "uptimerobots.csv",
        ),
    ]
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(timeout) = std::env::var("BOTRANGES_HTTP_TIMEOUT_SECS") {
            if let Ok(secs) = timeout.parse::<u64>() {
                config.network.http_timeout = Duration::from_secs(secs);
            }
        }

        if let Ok(agent) = std::env::var("BOTRANGES_USER_AGENT") {
            config.network.user_agent = agent;
        }

        if let Ok(dir) = std::env::var("BOTRANGES_OUTPUT_DIR") {
            config.output_dir = PathBuf::from(dir);
        }

        config
    }

    /// Merge with CLI arguments, giving CLI precedence.
    pub fn merge_with_cli(&mut self, cli: &crate::cli::Cli) {
        if let Some(secs) = cli.timeout_secs {
            self.network.http_timeout = Duration::from_secs(secs);
        }

        if let Some(ref dir) = cli.output_dir {
            self.output_dir = PathBuf::from(dir);
        }

        if cli.plain {
            self.format = RowFormat::Plain;
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.network.http_timeout.as_secs() == 0 {
            return Err(BotRangesError::configuration(
                "network.http_timeout must be greater than 0",
            ));
        }

        if self.sources.is_empty() {
            return Err(BotRangesError::configuration(
                "at least one source must be configured",
            ));
        }

        for (i, a) in self.sources.iter().enumerate() {
            if a.label.is_empty() {
                return Err(BotRangesError::configuration(format!(
                    "source {} has an empty label",
                    i
                )));
            }
            if self.sources[i + 1..].iter().any(|b| b.output_file == a.output_file) {
                return Err(BotRangesError::configuration(format!(
                    "output file '{}' is used by more than one source",
                    a.output_file
                )));
            }
        }

        Ok(())
    }

    /// Absolute-or-relative output path for a source.
    pub fn output_path(&self, spec: &SourceSpec) -> PathBuf {
        self.output_dir.join(&spec.output_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.network.http_timeout, Duration::from_secs(30));
        assert_eq!(config.sources.len(), 3);
        assert_eq!(config.sources[0].label, "Bingbot");
        assert_eq!(config.sources[2].strategy, ParseStrategy::TokenList);
        assert_eq!(config.format, RowFormat::Typed);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_source_ordering_and_files() {
        let sources = default_sources();
        let files: Vec<&str> = sources.iter().map(|s| s.output_file.as_str()).collect();
        assert_eq!(
            files,
            vec!["bingbots.csv", "googlecrawlers.csv", "uptimerobots.csv"]
        );
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        config.network.http_timeout = Duration::from_secs(0);
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.sources.clear();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.sources[1].output_file = config.sources[0].output_file.clone();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_env_loading() {
        env::set_var("BOTRANGES_HTTP_TIMEOUT_SECS", "15");
        env::set_var("BOTRANGES_OUTPUT_DIR", "/tmp/ranges");

        let config = Config::from_env();
        assert_eq!(config.network.http_timeout, Duration::from_secs(15));
        assert_eq!(config.output_dir, PathBuf::from("/tmp/ranges"));

        // Clean up
        env::remove_var("BOTRANGES_HTTP_TIMEOUT_SECS");
        env::remove_var("BOTRANGES_OUTPUT_DIR");
    }

    #[test]
    fn test_output_path_join() {
        let mut config = Config::default();
        config.output_dir = PathBuf::from("/var/data");
        let path = config.output_path(&config.sources[0]);
        assert_eq!(path, PathBuf::from("/var/data/bingbots.csv"));
    }
}
