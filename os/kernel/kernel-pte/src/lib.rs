//! # Page Table Entry Inspection
//!
//! Decodes a single raw x86-64 paging entry into its bit fields and checks
//! its reserved bits.
//!
//! ## What you get
//! - A closed [`PageTableLevel`] selecting one of the four entry kinds.
//! - Static [field tables](field_table_for) describing each level's bit layout.
//! - [`decode`], producing an [`EntryReport`] of [`FieldResult`]s plus an
//!   overall validity flag.
//! - Typed [`bitfield_struct`] views ([`LeafEntryBits`], [`TableEntryBits`]).
//! - A line-oriented [`Display`](core::fmt::Display) rendering of the report.
//!
//! ## Levels
//!
//! | Level | Table name | Entry name | Bits 6–8 |
//! |:------|:-----------|:-----------|:---------|
//! | 4 | **PML4** (Page Map Level 4) | **PML4E** | reserved |
//! | 3 | **PDPT** (Page Directory Pointer Table) | **PDPTE** | reserved |
//! | 2 | **PD** (Page Directory) | **PDE** | reserved |
//! | 1 | **PT** (Page Table) | **PTE** | dirty, page size, global |
//!
//! The same 64-bit pattern decodes differently depending on the level, so the
//! level is always supplied by the caller and never inferred.
//!
//! ## Validation
//!
//! Reserved fields must read as zero. A non-zero reserved field sets
//! [`FieldResult::violation`] and clears [`EntryReport::is_valid`]; it never
//! aborts decoding, so the report always covers every field.
//!
//! ## Example
//! ```rust
//! # use kernel_pte::{decode, PageTableLevel};
//! let report = decode(0x0000_0000_0000_01C0, PageTableLevel::Pml4);
//! assert!(!report.is_valid());
//!
//! let reserved = report.field_at(6).unwrap();
//! assert_eq!(reserved.value, 7);
//! assert!(reserved.violation);
//! ```

#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod decode;
mod entry_bits;
mod field;
mod level;
mod report;

pub use crate::decode::{EntryReport, FieldResult, decode};
pub use crate::entry_bits::{EntryBits, LeafEntryBits, TableEntryBits};
pub use crate::field::{FieldKind, FieldSpec, Meaning, ValueFormat, field_table_for, reserved_mask};
pub use crate::level::{InvalidLevel, PageTableLevel};
