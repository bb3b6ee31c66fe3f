//! CSV output for fetched range entries.
//!
//! One flat file per source, fully overwritten on every run. Two row formats
//! exist in the field; a deployment picks one and sticks with it:
//!   * `Typed` — header `type,prefix,name`, family column derived from the
//!     address (colon present means IPv6)
//!   * `Plain` — headerless `prefix,name` rows

use std::fs::File;
use std::io;
use std::path::Path;

use csv::Writer;

use crate::errors::{BotRangesError, IoResultExt, Result};
use crate::sources::AddressEntry;

/// Row layout variant for output files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowFormat {
    #[default]
    Typed,
    Plain,
}

/// Classify an address string by family. Anything without a colon is
/// reported as IPv4, matching how the entries were produced.
pub fn address_family(address: &str) -> &'static str {
    if address.contains(':') {
        "IPv6"
    } else {
        "IPv4"
    }
}

/// Write entries to `path`, truncating any prior content. Partial output is
/// not rolled back on failure.
pub fn write_entries(entries: &[AddressEntry], path: &Path, format: RowFormat) -> Result<()> {
    let file = File::create(path).with_path(path.display().to_string(), "create")?;
    let mut writer = Writer::from_writer(file);

    if format == RowFormat::Typed {
        writer
            .write_record(["type", "prefix", "name"])
            .map_err(|e| csv_error(path, e))?;
    }

    for entry in entries {
        match format {
            RowFormat::Typed => writer
                .write_record([
                    address_family(&entry.address),
                    entry.address.as_str(),
                    entry.label.as_str(),
                ])
                .map_err(|e| csv_error(path, e))?,
            RowFormat::Plain => writer
                .write_record([entry.address.as_str(), entry.label.as_str()])
                .map_err(|e| csv_error(path, e))?,
        }
    }

    writer
        .flush()
        .with_path(path.display().to_string(), "flush")
}

/// Attach path context to a csv-layer error.
fn csv_error(path: &Path, e: csv::Error) -> BotRangesError {
    let source = match e.into_kind() {
        csv::ErrorKind::Io(io_err) => io_err,
        other => io::Error::new(io::ErrorKind::Other, format!("{other:?}")),
    };
    BotRangesError::io(path.display().to_string(), "write csv", source)
}
