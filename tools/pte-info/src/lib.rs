//! # `pte-info`
//!
//! Command-line front end for [`kernel_pte`]: parses a raw entry in a chosen
//! base, decodes it at the requested paging level and prints the field report.

mod cli;
mod error;
mod logger;

pub use crate::cli::{Args, parse_entry};
pub use crate::error::CliError;
pub use crate::logger::StderrLogger;

use kernel_pte::{EntryReport, decode};
use log::LevelFilter;

/// Decodes the entry described by `args`.
///
/// # Errors
/// Fails if the entry or level cannot be parsed.
pub fn run(args: &Args) -> Result<EntryReport, CliError> {
    let raw = parse_entry(&args.entry, args.base)?;
    let level = args.level()?;
    log::info!("decoding {raw:#018x} as {} ({level})", level.entry_name());

    let report = decode(raw, level);
    for field in report.violations() {
        log::warn!(
            "reserved field [{}:{}] of {} should be 0 (it is {:#x})",
            field.spec.last_bit(),
            field.spec.offset,
            level.entry_name(),
            field.value
        );
    }
    Ok(report)
}

/// Maps the number of `-v` flags to a log level.
#[must_use]
pub const fn verbosity(count: u8) -> LevelFilter {
    match count {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
