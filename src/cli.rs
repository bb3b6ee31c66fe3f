use clap::Parser;

/// Command-line interface definition.
///
/// There are no required arguments: a bare invocation fetches every
/// configured source. Flags are deployment knobs only.
///
/// Verbosity levels:
/// 0 - silent (no per-source status lines)
/// 1 - status + errors (default)
/// 2 - warnings + errors
/// 5 - trace/debug
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Fetch published crawler/monitor IP-range allow-lists and convert them to CSV"
)]
pub struct Cli {
    /// Directory where the output CSV files are written
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<String>,

    /// Write headerless prefix,name rows instead of the typed format
    #[arg(long, default_value_t = false)]
    pub plain: bool,

    /// Per-request HTTP timeout in seconds
    #[arg(long = "timeout-secs", value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    /// Verbosity level (0,1,2,5)
    #[arg(long, default_value_t = 1)]
    pub verbose: u8,
}

impl Cli {
    /// Parse CLI arguments from process args.
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Convenience: are we in very verbose/debug mode?
    pub fn is_trace(&self) -> bool {
        self.verbose >= 5
    }

    /// Are per-source status lines enabled?
    pub fn status_enabled(&self) -> bool {
        self.verbose >= 1
    }

    /// Are warning-level messages enabled?
    pub fn warn_enabled(&self) -> bool {
        self.verbose >= 2
    }

    /// Are error-level messages enabled?
    pub fn error_enabled(&self) -> bool {
        self.verbose >= 1
    }
}
