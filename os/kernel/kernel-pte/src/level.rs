//! # Paging Levels
//!
//! The four x86-64 paging structures an entry can belong to. The level is
//! mandatory input to the decoder: bits 6–8 mean different things in a leaf
//! PTE than in any of the directory levels.

use core::fmt;
use core::str::FromStr;

/// One of the four x86-64 paging structure levels.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum PageTableLevel {
    /// L4, Page Map Level 4. Entries are `PML4E`s pointing to a PDPT.
    #[doc(alias = "PML4")]
    Pml4,
    /// L3, Page Directory Pointer Table. Entries are `PDPTE`s pointing to a PD.
    #[doc(alias = "PDPT")]
    Pdpt,
    /// L2, Page Directory. Entries are `PDE`s pointing to a PT.
    #[doc(alias = "PD")]
    Pd,
    /// L1, Page Table. Entries are `PTE`s mapping a 4 KiB page (always a leaf).
    #[doc(alias = "PT")]
    #[default]
    Pt,
}

/// The supplied level name is not one of `pml4`, `pdpt`, `pd` or `pt`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown page table level {name:?} (expected one of pml4, pdpt, pd, pt)")]
pub struct InvalidLevel {
    name: alloc::string::String,
}

impl InvalidLevel {
    /// The rejected input.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PageTableLevel {
    /// All levels, top-down.
    pub const ALL: [Self; 4] = [Self::Pml4, Self::Pdpt, Self::Pd, Self::Pt];

    /// `true` only for [`PageTableLevel::Pt`].
    #[inline]
    #[must_use]
    pub const fn is_leaf(self) -> bool {
        matches!(self, Self::Pt)
    }

    /// Lower-case table mnemonic as accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pml4 => "pml4",
            Self::Pdpt => "pdpt",
            Self::Pd => "pd",
            Self::Pt => "pt",
        }
    }

    /// Name of a single entry at this level.
    #[must_use]
    pub const fn entry_name(self) -> &'static str {
        match self {
            Self::Pml4 => "PML4E",
            Self::Pdpt => "PDPTE",
            Self::Pd => "PDE",
            Self::Pt => "PTE",
        }
    }
}

impl fmt::Display for PageTableLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageTableLevel {
    type Err = InvalidLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let level = if name.eq_ignore_ascii_case("pml4") || name.eq_ignore_ascii_case("pml4e") {
            Self::Pml4
        } else if name.eq_ignore_ascii_case("pdpt")
            || name.eq_ignore_ascii_case("pdpr")
            || name.eq_ignore_ascii_case("pdpte")
        {
            Self::Pdpt
        } else if name.eq_ignore_ascii_case("pd") || name.eq_ignore_ascii_case("pde") {
            Self::Pd
        } else if name.eq_ignore_ascii_case("pt") || name.eq_ignore_ascii_case("pte") {
            Self::Pt
        } else {
            return Err(InvalidLevel {
                name: alloc::string::String::from(s),
            });
        };
        Ok(level)
    }
}
