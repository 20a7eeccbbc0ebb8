//! # Field Tables
//!
//! Static bit layouts for the four paging levels. Every table lists its
//! fields in ascending bit order and covers bits 0–63 exactly once.
//!
//! ```text
//!  63  62‒59   58‒52    51‒40     39‒12     11‒9  8  7  6  5  4   3   2  1  0
//! | XD | PKEY | AVL  | RESERVED | BASE ADDR | AVL | G|PS| D| A|PCD|PWT|US|RW| P|   PTE
//! | XD | PKEY | AVL  | RESERVED | BASE ADDR | AVL | RESVD  | A|PCD|PWT|US|RW| P|   PML4E, PDPTE, PDE
//! ```
//!
//! The base address field holds frame bits for a 40-bit physical address
//! space; bits 40–51 above it must read as zero.
//!
//! At the PDPT and PD levels the hardware uses bit 7 as the page size bit for
//! 1 GiB / 2 MiB leaves. These tables do not model large pages: bits 6–8 of
//! every non-leaf entry form a single reserved field, so a large-page PDE or
//! PDPTE is reported as a reserved-bit violation.

use crate::PageTableLevel;

/// Whether a field is validated.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum FieldKind {
    /// Architecturally defined to read as zero. A non-zero value is a violation.
    Reserved,
    /// Descriptive only; any value is acceptable.
    Informational,
}

/// How a field's value is rendered.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ValueFormat {
    /// Single bit, printed as `0` or `1`.
    Flag,
    /// Unsigned decimal.
    Decimal,
    /// `0x`-prefixed hex, zero-padded to the field's nibble count.
    Hex,
}

/// Short descriptions for the two states of a one-bit field.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Meaning {
    /// Description when the bit is clear.
    pub clear: &'static str,
    /// Description when the bit is set.
    pub set: &'static str,
}

/// Layout of a single bit range inside a 64-bit entry.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct FieldSpec {
    /// Human-readable field name.
    pub name: &'static str,
    /// Position of the lowest bit, `0..=63`.
    pub offset: u8,
    /// Number of bits, `1..=64`.
    pub width: u8,
    /// Validation rule.
    pub kind: FieldKind,
    /// Rendering rule.
    pub format: ValueFormat,
    /// Interpretation of a one-bit field, if it has one.
    pub meaning: Option<Meaning>,
}

impl FieldSpec {
    /// A one-bit informational flag with an interpretation for both states.
    const fn flag(name: &'static str, offset: u8, clear: &'static str, set: &'static str) -> Self {
        Self {
            name,
            offset,
            width: 1,
            kind: FieldKind::Informational,
            format: ValueFormat::Flag,
            meaning: Some(Meaning { clear, set }),
        }
    }

    /// A one-bit informational flag without an interpretation.
    const fn bit(name: &'static str, offset: u8) -> Self {
        Self {
            name,
            offset,
            width: 1,
            kind: FieldKind::Informational,
            format: ValueFormat::Flag,
            meaning: None,
        }
    }

    /// A multi-bit informational number.
    const fn number(name: &'static str, offset: u8, width: u8) -> Self {
        Self {
            name,
            offset,
            width,
            kind: FieldKind::Informational,
            format: ValueFormat::Decimal,
            meaning: None,
        }
    }

    /// A physical address field, rendered in hex.
    const fn address(name: &'static str, offset: u8, width: u8) -> Self {
        Self {
            name,
            offset,
            width,
            kind: FieldKind::Informational,
            format: ValueFormat::Hex,
            meaning: None,
        }
    }

    /// A must-be-zero range.
    const fn reserved(offset: u8, width: u8) -> Self {
        Self {
            name: "Reserved",
            offset,
            width,
            kind: FieldKind::Reserved,
            format: ValueFormat::Decimal,
            meaning: None,
        }
    }

    /// Right-aligned value mask, `width` ones.
    #[inline]
    #[must_use]
    pub const fn value_mask(&self) -> u64 {
        if self.width >= 64 {
            u64::MAX
        } else {
            (1 << self.width) - 1
        }
    }

    /// Mask of the field's bits in place within the entry.
    #[inline]
    #[must_use]
    pub const fn mask(&self) -> u64 {
        self.value_mask() << self.offset
    }

    /// Extract this field from a raw entry.
    #[inline]
    #[must_use]
    pub const fn extract(&self, raw: u64) -> u64 {
        (raw >> self.offset) & self.value_mask()
    }

    /// Highest bit covered by the field (inclusive).
    #[inline]
    #[must_use]
    pub const fn last_bit(&self) -> u8 {
        self.offset + self.width - 1
    }

    /// `true` for must-be-zero fields.
    #[inline]
    #[must_use]
    pub const fn is_reserved(&self) -> bool {
        matches!(self.kind, FieldKind::Reserved)
    }
}

/// Bits 0–5, shared by every level.
const COMMON: [FieldSpec; 6] = [
    FieldSpec::flag("Present", 0, "not present", "present"),
    FieldSpec::flag("Read/Write", 1, "read only", "read/write"),
    FieldSpec::flag("User/Supervisor", 2, "supervisor access only", "user access allowed"),
    FieldSpec::flag("Write-Through", 3, "write-back enabled", "write-through caching enabled"),
    FieldSpec::flag("Cache Disable", 4, "cache enabled", "cache disabled"),
    FieldSpec::flag("Accessed", 5, "not accessed", "accessed"),
];

/// Layout of a leaf `PTE`.
static LEAF_FIELDS: [FieldSpec; 15] = [
    COMMON[0],
    COMMON[1],
    COMMON[2],
    COMMON[3],
    COMMON[4],
    COMMON[5],
    FieldSpec::flag("Dirty", 6, "page was not written to", "page was written to"),
    FieldSpec::bit("Page Size", 7),
    FieldSpec::flag("Global", 8, "not global", "global"),
    FieldSpec::number("Available", 9, 3),
    FieldSpec::address("Page Base Address", 12, 28),
    FieldSpec::reserved(40, 12),
    FieldSpec::number("Available", 52, 7),
    FieldSpec::number("Protection Key", 59, 4),
    FieldSpec::flag("Execute Disable", 63, "code execution enabled", "code execution disabled"),
];

/// Layout shared by `PML4E`, `PDPTE` and `PDE`.
static TABLE_FIELDS: [FieldSpec; 13] = [
    COMMON[0],
    COMMON[1],
    COMMON[2],
    COMMON[3],
    COMMON[4],
    COMMON[5],
    FieldSpec::reserved(6, 3),
    FieldSpec::number("Available", 9, 3),
    FieldSpec::address("Table Base Address", 12, 28),
    FieldSpec::reserved(40, 12),
    FieldSpec::number("Available", 52, 7),
    FieldSpec::number("Protection Key", 59, 4),
    FieldSpec::flag("Execute Disable", 63, "code execution enabled", "code execution disabled"),
];

/// The field layout of an entry at `level`, ordered by ascending bit offset.
#[must_use]
pub fn field_table_for(level: PageTableLevel) -> &'static [FieldSpec] {
    match level {
        PageTableLevel::Pt => &LEAF_FIELDS,
        PageTableLevel::Pml4 | PageTableLevel::Pdpt | PageTableLevel::Pd => &TABLE_FIELDS,
    }
}

/// Union of all reserved field masks at `level`.
#[must_use]
pub fn reserved_mask(level: PageTableLevel) -> u64 {
    field_table_for(level)
        .iter()
        .filter(|spec| spec.is_reserved())
        .fold(0, |acc, spec| acc | spec.mask())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_cover_every_bit_exactly_once() {
        for level in PageTableLevel::ALL {
            let mut covered = 0u64;
            let mut next_bit = 0u8;
            for spec in field_table_for(level) {
                assert_eq!(spec.offset, next_bit, "{level}: gap or overlap at {}", spec.name);
                assert_eq!(covered & spec.mask(), 0, "{level}: {} overlaps", spec.name);
                covered |= spec.mask();
                next_bit = spec.last_bit() + 1;
            }
            assert_eq!(covered, u64::MAX, "{level}: not all bits covered");
            assert_eq!(next_bit, 64);
        }
    }

    #[test]
    fn reserved_masks() {
        assert_eq!(reserved_mask(PageTableLevel::Pt), 0x000F_FF00_0000_0000);
        for level in [PageTableLevel::Pml4, PageTableLevel::Pdpt, PageTableLevel::Pd] {
            assert_eq!(reserved_mask(level), 0x000F_FF00_0000_01C0);
        }
    }

    #[test]
    fn only_one_bit_fields_carry_a_meaning() {
        for level in PageTableLevel::ALL {
            for spec in field_table_for(level) {
                if spec.meaning.is_some() {
                    assert_eq!(spec.width, 1, "{}", spec.name);
                    assert_eq!(spec.format, ValueFormat::Flag);
                }
            }
        }
    }

    #[test]
    fn extract_masks_and_shifts() {
        let base = FieldSpec::address("Base", 12, 28);
        assert_eq!(base.extract(0x0000_0080_0000_1027), 0x800_0001);
        assert_eq!(base.mask(), 0x0000_00FF_FFFF_F000);

        let whole = FieldSpec::number("Whole", 0, 64);
        assert_eq!(whole.value_mask(), u64::MAX);
        assert_eq!(whole.extract(0xDEAD_BEEF_0000_0001), 0xDEAD_BEEF_0000_0001);
    }
}
