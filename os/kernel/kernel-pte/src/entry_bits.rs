//! # Typed Entry Views
//!
//! [`bitfield_struct`] views over a raw 64-bit entry, laid out exactly like
//! the [field tables](crate::field_table_for). They give named access to the
//! same bits the decoder extracts by shift-and-mask.

use crate::PageTableLevel;
use bitfield_struct::bitfield;

/// Leaf `PTE` (L1), mapping one 4 KiB page.
///
/// | Bits  | Field |
/// |-------|-------|
/// | 0–5   | P, RW, US, PWT, PCD, A |
/// | 6     | D (dirty) |
/// | 7     | PS / PAT |
/// | 8     | G (global) |
/// | 9–11  | OS-available |
/// | 12–39 | page frame |
/// | 40–51 | reserved, must be 0 |
/// | 52–58 | OS-available |
/// | 59–62 | protection key |
/// | 63    | XD |
#[doc(alias = "PTE")]
#[bitfield(u64)]
#[derive(PartialEq, Eq)]
pub struct LeafEntryBits {
    /// Present (P, bit 0).
    pub present: bool,
    /// Read/Write (RW, bit 1).
    pub writable: bool,
    /// User/Supervisor (US, bit 2).
    pub user: bool,
    /// Page Write-Through (PWT, bit 3).
    pub write_through: bool,
    /// Page Cache Disable (PCD, bit 4).
    pub cache_disable: bool,
    /// Accessed (A, bit 5).
    pub accessed: bool,
    /// Dirty (D, bit 6): set by the CPU on the first write to the page.
    pub dirty: bool,
    /// Page Size (bit 7). Selects the PAT entry together with PWT and PCD.
    pub page_size: bool,
    /// Global (G, bit 8).
    pub global: bool,
    /// OS-available (bits 9..=11).
    #[bits(3)]
    pub os_available_low: u8,
    /// Page frame number (bits 12..=39).
    #[bits(28)]
    pub frame: u64,
    /// Reserved (bits 40..=51): must be 0.
    #[bits(12)]
    reserved_40_51: u16,
    /// OS-available (bits 52..=58).
    #[bits(7)]
    pub os_available_high: u8,
    /// Protection key (bits 59..=62).
    #[bits(4)]
    pub protection_key: u8,
    /// Execute Disable (XD, bit 63).
    pub no_execute: bool,
}

/// Non-leaf entry (`PML4E`, `PDPTE`, `PDE`), pointing to the next table.
///
/// Bits 6–8 are treated as one reserved field; large-page `PDPTE`/`PDE`
/// forms are not modelled.
#[doc(alias = "PML4E")]
#[doc(alias = "PDPTE")]
#[doc(alias = "PDE")]
#[bitfield(u64)]
#[derive(PartialEq, Eq)]
pub struct TableEntryBits {
    /// Present (P, bit 0).
    pub present: bool,
    /// Read/Write (RW, bit 1).
    pub writable: bool,
    /// User/Supervisor (US, bit 2).
    pub user: bool,
    /// Page Write-Through (PWT, bit 3).
    pub write_through: bool,
    /// Page Cache Disable (PCD, bit 4).
    pub cache_disable: bool,
    /// Accessed (A, bit 5).
    pub accessed: bool,
    /// Reserved (bits 6..=8): must be 0.
    #[bits(3)]
    reserved_6_8: u8,
    /// OS-available (bits 9..=11).
    #[bits(3)]
    pub os_available_low: u8,
    /// Next-level table frame number (bits 12..=39).
    #[bits(28)]
    pub frame: u64,
    /// Reserved (bits 40..=51): must be 0.
    #[bits(12)]
    reserved_40_51: u16,
    /// OS-available (bits 52..=58).
    #[bits(7)]
    pub os_available_high: u8,
    /// Protection key (bits 59..=62).
    #[bits(4)]
    pub protection_key: u8,
    /// Execute Disable (XD, bit 63).
    pub no_execute: bool,
}

impl LeafEntryBits {
    /// Physical base address of the mapped 4 KiB page.
    #[inline]
    #[must_use]
    pub const fn physical_address(self) -> u64 {
        self.frame() << 12
    }

    /// `true` if any must-be-zero bit is set.
    #[inline]
    #[must_use]
    pub const fn has_reserved_bits(self) -> bool {
        self.reserved_40_51() != 0
    }
}

impl TableEntryBits {
    /// Physical base address of the next-level table.
    #[inline]
    #[must_use]
    pub const fn physical_address(self) -> u64 {
        self.frame() << 12
    }

    /// `true` if any must-be-zero bit is set.
    #[inline]
    #[must_use]
    pub const fn has_reserved_bits(self) -> bool {
        self.reserved_6_8() != 0 || self.reserved_40_51() != 0
    }
}

/// A raw entry viewed through the layout of its level.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EntryBits {
    /// A leaf `PTE`.
    Leaf(LeafEntryBits),
    /// A `PML4E`, `PDPTE` or `PDE`.
    Table(TableEntryBits),
}

impl EntryBits {
    /// View `raw` as an entry of `level`.
    #[must_use]
    pub const fn new(raw: u64, level: PageTableLevel) -> Self {
        if level.is_leaf() {
            Self::Leaf(LeafEntryBits::from_bits(raw))
        } else {
            Self::Table(TableEntryBits::from_bits(raw))
        }
    }

    /// Bit 0, the entry is in use.
    #[inline]
    #[must_use]
    pub const fn present(self) -> bool {
        match self {
            Self::Leaf(e) => e.present(),
            Self::Table(e) => e.present(),
        }
    }

    /// Bit 63, instruction fetches are disallowed.
    #[inline]
    #[must_use]
    pub const fn no_execute(self) -> bool {
        match self {
            Self::Leaf(e) => e.no_execute(),
            Self::Table(e) => e.no_execute(),
        }
    }

    /// Physical base address (frame bits shifted back into place).
    #[inline]
    #[must_use]
    pub const fn physical_address(self) -> u64 {
        match self {
            Self::Leaf(e) => e.physical_address(),
            Self::Table(e) => e.physical_address(),
        }
    }

    /// `true` if any must-be-zero bit of the level's layout is set.
    #[inline]
    #[must_use]
    pub const fn has_reserved_bits(self) -> bool {
        match self {
            Self::Leaf(e) => e.has_reserved_bits(),
            Self::Table(e) => e.has_reserved_bits(),
        }
    }

    /// The raw 64-bit value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u64 {
        match self {
            Self::Leaf(e) => e.into_bits(),
            Self::Table(e) => e.into_bits(),
        }
    }
}
