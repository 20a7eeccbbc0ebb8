use crate::CliError;
use clap::Parser;
use kernel_pte::PageTableLevel;

/// Shows the fields of an x86-64 page table entry.
#[derive(Debug, Parser)]
#[command(name = "pte-info", version, about)]
pub struct Args {
    /// Table entry as an integer.
    #[arg(value_name = "PAGE_TABLE_ENTRY")]
    pub entry: String,

    /// Base of the entry, e.g. 10 = decimal, 16 = hex.
    #[arg(short, long, default_value_t = 16)]
    pub base: u32,

    /// Type of table the entry is from (pml4, pdpt, pd, pt).
    #[arg(short = 't', long = "type", value_name = "TYPE", default_value = "pt")]
    pub level: String,

    /// Exit with status 2 if a reserved field is non-zero.
    #[arg(long)]
    pub strict: bool,

    /// Increase log output (repeat for more).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// The requested paging level.
    ///
    /// # Errors
    /// Fails for names other than `pml4`, `pdpt`, `pd` and `pt`.
    pub fn level(&self) -> Result<PageTableLevel, CliError> {
        Ok(self.level.parse()?)
    }
}

/// Parses `input` as an unsigned 64-bit integer in `base`.
///
/// A radix prefix matching the base (`0x`, `0o`, `0b`) is accepted, as are
/// `_` digit separators. A leading `+` or `-` is rejected.
///
/// # Errors
/// Fails for bases outside `2..=36` and for input that is not a number in
/// that base or does not fit 64 bits.
pub fn parse_entry(input: &str, base: u32) -> Result<u64, CliError> {
    if !(2..=36).contains(&base) {
        return Err(CliError::InvalidBase(base));
    }

    let trimmed = input.trim();
    let digits = match (base, trimmed.get(..2)) {
        (16, Some("0x" | "0X")) | (8, Some("0o" | "0O")) | (2, Some("0b" | "0B")) => &trimmed[2..],
        _ => trimmed,
    };
    let digits: String = digits.chars().filter(|&c| c != '_').collect();
    if digits.starts_with(['+', '-']) {
        return Err(CliError::SignedEntry(input.to_owned()));
    }

    u64::from_str_radix(&digits, base).map_err(|source| CliError::InvalidEntry {
        input: input.to_owned(),
        base,
        source,
    })
}
