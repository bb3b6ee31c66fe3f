//! Unified error handling.
//!
//! A `thiserror`-based model with:
//!   * Typed variants for the failure domains this tool actually hits
//!     (transport, HTTP status, response parsing, output I/O)
//!   * A categorization layer (`ErrorCategory`) for reporting
//!   * Helper constructors
//!   * `From` conversions for common lower-level errors
//!
//! Every error is caught at the per-source boundary inside the app loop and
//! converted to a category-specific console line; none aborts the batch.

use std::io;

use thiserror::Error;

/// High-level classification for console reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Network,
    Parse,
    Io,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ErrorCategory::Input => "input",
            ErrorCategory::Network => "network",
            ErrorCategory::Parse => "parse",
            ErrorCategory::Io => "io",
        };
        f.write_str(s)
    }
}

/// Primary application error type.
#[derive(Error, Debug)]
pub enum BotRangesError {
    // ------------------------ Input / Validation ----------------------------
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    // ----------------------------- Network ----------------------------------
    #[error("Request to {url} failed for source '{label}': {source}")]
    Network {
        label: String,
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Source '{label}' returned HTTP {status} from {url}")]
    HttpStatus {
        label: String,
        url: String,
        status: u16,
    },

    // ---------------------------- Parsing -----------------------------------
    #[error("Could not parse response for source '{label}': {reason}")]
    Parse { label: String, reason: String },

    // ----------------------------- I/O / FS ---------------------------------
    #[error("I/O error during {operation} on {path}: {source}")]
    Io {
        path: String,
        operation: String,
        #[source]
        source: io::Error,
    },
}

impl BotRangesError {
    /// Categorize the error for console reporting.
    pub fn category(&self) -> ErrorCategory {
        use BotRangesError::*;
        match self {
            Configuration { .. } => ErrorCategory::Input,
            Network { .. } | HttpStatus { .. } => ErrorCategory::Network,
            Parse { .. } => ErrorCategory::Parse,
            Io { .. } => ErrorCategory::Io,
        }
    }

    // ---------------------------- Constructors -----------------------------

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn network(
        label: impl Into<String>,
        url: impl Into<String>,
        source: reqwest::Error,
    ) -> Self {
        Self::Network {
            label: label.into(),
            url: url.into(),
            source,
        }
    }

    pub fn http_status(label: impl Into<String>, url: impl Into<String>, status: u16) -> Self {
        Self::HttpStatus {
            label: label.into(),
            url: url.into(),
            status,
        }
    }

    pub fn parse(label: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Parse {
            label: label.into(),
            reason: reason.into(),
        }
    }

    pub fn io(path: impl Into<String>, operation: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            operation: operation.into(),
            source,
        }
    }
}

/// Public result alias.
pub type Result<T> = std::result::Result<T, BotRangesError>;

/// Map standard IO errors into `Io` variant (generic context).
impl From<io::Error> for BotRangesError {
    fn from(e: io::Error) -> Self {
        BotRangesError::Io {
            path: "<unknown>".into(),
            operation: "unspecified".into(),
            source: e,
        }
    }
}

/// Extension trait for enriching IO results with path + operation context.
pub trait IoResultExt<T> {
    fn with_path(self, path: impl Into<String>, operation: impl Into<String>) -> Result<T>;
}

impl<T> IoResultExt<T> for std::result::Result<T, io::Error> {
    fn with_path(self, path: impl Into<String>, operation: impl Into<String>) -> Result<T> {
        self.map_err(|e| BotRangesError::io(path.into(), operation.into(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_mapping() {
        assert_eq!(
            BotRangesError::configuration("bad").category(),
            ErrorCategory::Input
        );
        assert_eq!(
            BotRangesError::http_status("Bingbot", "https://example.com", 503).category(),
            ErrorCategory::Network
        );
        assert_eq!(
            BotRangesError::parse("Bingbot", "invalid JSON").category(),
            ErrorCategory::Parse
        );
        assert_eq!(
            BotRangesError::io("out.csv", "create", io::Error::new(io::ErrorKind::Other, "x"))
                .category(),
            ErrorCategory::Io
        );
    }

    #[test]
    fn display_snippets() {
        let e = BotRangesError::http_status("Bingbot", "https://www.bing.com/x.json", 404);
        let s = e.to_string();
        assert!(s.contains("Bingbot"));
        assert!(s.contains("404"));
        let p = BotRangesError::parse("uptimerobot", "empty body");
        assert!(p.to_string().contains("empty body"));
    }

    #[test]
    fn io_context() {
        let res: std::result::Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        let mapped = res.with_path("/var/out.csv", "create");
        match mapped.err().unwrap() {
            BotRangesError::Io {
                path, operation, ..
            } => {
                assert_eq!(path, "/var/out.csv");
                assert_eq!(operation, "create");
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }
}
