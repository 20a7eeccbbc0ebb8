use std::num::ParseIntError;
use kernel_pte::InvalidLevel;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("base must be between 2 and 36 (got {0})")]
    InvalidBase(u32),
    #[error("{input:?} is not a valid base-{base} page table entry: {source}")]
    InvalidEntry {
        input: String,
        base: u32,
        #[source]
        source: ParseIntError,
    },
    #[error("{0:?} is not a valid page table entry: entries are unsigned, drop the sign")]
    SignedEntry(String),
    #[error(transparent)]
    InvalidLevel(#[from] InvalidLevel),
}
