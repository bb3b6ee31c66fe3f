//! High-level application orchestration layer.
//!
//! `App` holds the resolved configuration and runs the fixed ordered list of
//! sources sequentially: fetch, write, report. A failure in one source is
//! logged with the originating file name and never blocks the others; the
//! caller turns the failure count into a process exit code.
//!
//! `execute` is the seam used by integration tests: it takes prebuilt
//! `(output path, source)` pairs, so fakes can stand in for the HTTP-backed
//! sources.

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::config::Config;
use crate::errors::{BotRangesError, ErrorCategory, Result};
use crate::output::write_entries;
use crate::sources::{HttpSource, RangeSource};

pub struct App {
    cli: Cli,
    config: Config,
}

impl App {
    pub fn new(cli: Cli, config: Config) -> Self {
        Self { cli, config }
    }

    /// Fetch and write every configured source. Returns the number of
    /// sources that failed.
    pub async fn run(&self) -> Result<usize> {
        self.config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(self.config.network.http_timeout)
            .user_agent(self.config.network.user_agent.clone())
            .build()
            .map_err(|e| {
                BotRangesError::configuration(format!("failed to build HTTP client: {e}"))
            })?;

        let jobs: Vec<(PathBuf, Box<dyn RangeSource>)> = self
            .config
            .sources
            .iter()
            .map(|spec| {
                let path = self.config.output_path(spec);
                let source: Box<dyn RangeSource> =
                    Box::new(HttpSource::new(spec.clone(), client.clone()));
                (path, source)
            })
            .collect();

        Ok(self.execute(jobs).await)
    }

    /// Sequentially process `(output path, source)` pairs. Each pair either
    /// succeeds or is reported and skipped; the batch always runs to the end.
    pub async fn execute(&self, jobs: Vec<(PathBuf, Box<dyn RangeSource>)>) -> usize {
        let mut failures = 0;

        for (path, source) in jobs {
            if self.cli.status_enabled() {
                println!("Fetching data for {}...", path.display());
            }

            match self.fetch_and_write(&path, source.as_ref()).await {
                Ok(count) => {
                    if self.cli.is_trace() {
                        eprintln!("{}: wrote {count} entries", path.display());
                    }
                    if self.cli.status_enabled() {
                        println!("Successfully created {}", path.display());
                    }
                }
                Err(e) => {
                    failures += 1;
                    if self.cli.error_enabled() {
                        report_failure(&path, &e);
                    }
                }
            }
        }

        failures
    }

    async fn fetch_and_write(&self, path: &Path, source: &dyn RangeSource) -> Result<usize> {
        let entries = source.fetch().await?;
        if self.cli.is_trace() {
            eprintln!("{}: fetched {} entries", source.label(), entries.len());
        }
        write_entries(&entries, path, self.config.format)?;
        Ok(entries.len())
    }
}

/// Kind-specific failure line so operators can tell a transport problem from
/// a format change or a bad output path at a glance.
fn report_failure(path: &Path, e: &BotRangesError) {
    let display = path.display();
    match e.category() {
        ErrorCategory::Network => eprintln!("Network error processing {display}: {e}"),
        ErrorCategory::Parse => eprintln!("Parse error processing {display}: {e}"),
        ErrorCategory::Io => eprintln!("Error writing {display}: {e}"),
        ErrorCategory::Input => eprintln!("Error processing {display}: {e}"),
    }
}
