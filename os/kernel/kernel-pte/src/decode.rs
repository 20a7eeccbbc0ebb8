//! # Entry Decoder
//!
//! Splits a raw entry into the fields of its level and checks that every
//! reserved field reads as zero. Decoding never fails; reserved-bit
//! violations are reported per field and summarized in
//! [`EntryReport::is_valid`].

use crate::entry_bits::EntryBits;
use crate::field::{FieldKind, FieldSpec, field_table_for};
use crate::PageTableLevel;
use alloc::vec::Vec;

/// One field extracted from a raw entry.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct FieldResult {
    /// The layout this value was extracted with.
    pub spec: &'static FieldSpec,
    /// Field value, shifted down to bit 0.
    pub value: u64,
    /// Set for a reserved field holding a non-zero value.
    pub violation: bool,
}

impl FieldResult {
    /// Field name, e.g. `"Present"`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.spec.name
    }

    /// `true` if any bit of the field is set.
    #[must_use]
    pub const fn is_set(&self) -> bool {
        self.value != 0
    }

    /// Description of the value, if the field has one.
    ///
    /// One-bit flags describe their state (e.g. `"present"` / `"not present"`),
    /// reserved fields read `"ok"` or `"not ok"`.
    #[must_use]
    pub const fn interpretation(&self) -> Option<&'static str> {
        if let FieldKind::Reserved = self.spec.kind {
            return Some(if self.violation { "not ok" } else { "ok" });
        }

        match self.spec.meaning {
            Some(meaning) if self.value != 0 => Some(meaning.set),
            Some(meaning) => Some(meaning.clear),
            None => None,
        }
    }
}

/// Decoded view of one entry: every field of its level, in bit order.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct EntryReport {
    raw: u64,
    level: PageTableLevel,
    fields: Vec<FieldResult>,
    valid: bool,
}

impl EntryReport {
    /// The decoded raw value.
    #[inline]
    #[must_use]
    pub const fn raw(&self) -> u64 {
        self.raw
    }

    /// The paging level the entry was decoded as.
    #[inline]
    #[must_use]
    pub const fn level(&self) -> PageTableLevel {
        self.level
    }

    /// All fields, ordered like [`field_table_for`].
    #[inline]
    #[must_use]
    pub fn fields(&self) -> &[FieldResult] {
        &self.fields
    }

    /// `true` unless some reserved field is non-zero.
    #[inline]
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// Reserved fields that hold a non-zero value.
    pub fn violations(&self) -> impl Iterator<Item = &FieldResult> {
        self.fields.iter().filter(|f| f.violation)
    }

    /// First field named `name`.
    ///
    /// Names are not unique (`Available` and `Reserved` appear more than once);
    /// use [`EntryReport::field_at`] to address those by bit offset.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldResult> {
        self.fields.iter().find(|f| f.spec.name == name)
    }

    /// The field starting at bit `offset`.
    #[must_use]
    pub fn field_at(&self, offset: u8) -> Option<&FieldResult> {
        self.fields.iter().find(|f| f.spec.offset == offset)
    }

    /// Typed bitfield view of the raw value.
    #[inline]
    #[must_use]
    pub const fn bits(&self) -> EntryBits {
        EntryBits::new(self.raw, self.level)
    }

    /// Physical address of the mapped page (leaf) or next-level table.
    #[inline]
    #[must_use]
    pub const fn base_address(&self) -> u64 {
        self.bits().physical_address()
    }
}

impl FieldSpec {
    /// Extract and validate this field.
    #[must_use]
    pub fn decode(&'static self, raw: u64) -> FieldResult {
        let value = self.extract(raw);
        FieldResult {
            spec: self,
            value,
            violation: self.is_reserved() && value != 0,
        }
    }
}

/// Decode `raw` as an entry of the given paging `level`.
///
/// Extracts every field of the level's layout and flags non-zero reserved
/// fields. The report is always complete; a violation in one field does not
/// stop decoding of the others.
#[must_use]
pub fn decode(raw: u64, level: PageTableLevel) -> EntryReport {
    let fields: Vec<FieldResult> = field_table_for(level)
        .iter()
        .map(|spec| spec.decode(raw))
        .collect();

    let mut valid = true;
    for field in fields.iter().filter(|f| f.violation) {
        log::debug!(
            "{} {raw:#018x}: reserved bits {}..={} read {:#x}",
            level.entry_name(),
            field.spec.offset,
            field.spec.last_bit(),
            field.value
        );
        valid = false;
    }

    log::trace!(
        "decoded {} {raw:#018x} into {} fields (valid: {valid})",
        level.entry_name(),
        fields.len()
    );

    EntryReport {
        raw,
        level,
        fields,
        valid,
    }
}
