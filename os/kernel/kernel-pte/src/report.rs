//! # Report Rendering
//!
//! Line-oriented text form of an [`EntryReport`]:
//!
//! ```text
//! Raw entry:            0x8000000000000001
//! Present:              1                   present
//! ...
//! Table Base Address:   0x0000000
//! Reserved:             0                   ok
//! ```

use crate::field::ValueFormat;
use crate::{EntryReport, FieldResult};
use alloc::string::ToString;
use core::fmt;

/// Column width of the `name:` label.
const NAME_COLUMN: usize = 22;

/// Column width of the value.
const VALUE_COLUMN: usize = 20;

/// Renders a field value according to its [`ValueFormat`].
struct Value<'a>(&'a FieldResult);

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = self.0;
        match field.spec.format {
            ValueFormat::Flag | ValueFormat::Decimal => write!(f, "{}", field.value),
            ValueFormat::Hex => {
                let nibbles = usize::from(field.spec.width).div_ceil(4);
                write!(f, "{:#0width$x}", field.value, width = nibbles + 2)
            }
        }
    }
}

/// Pads a `Display` value to a column width.
///
/// Width only applies to `Display` impls that call `Formatter::pad`, which
/// [`Value`] and `format_args!` do not. The value is rendered to a `String`
/// and padded as a whole; output wider than the column is never truncated.
fn write_padded(f: &mut fmt::Formatter<'_>, value: &dyn fmt::Display, width: usize) -> fmt::Result {
    write!(f, "{:<width$}", value.to_string())
}

impl fmt::Display for FieldResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_padded(f, &format_args!("{}:", self.spec.name), NAME_COLUMN)?;
        match self.interpretation() {
            Some(text) => {
                write_padded(f, &Value(self), VALUE_COLUMN)?;
                f.write_str(text)
            }
            None => write!(f, "{}", Value(self)),
        }
    }
}

impl fmt::Display for EntryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_padded(f, &"Raw entry:", NAME_COLUMN)?;
        writeln!(f, "{:#018x}", self.raw())?;
        write_padded(f, &"Level:", NAME_COLUMN)?;
        writeln!(f, "{} ({})", self.level(), self.level().entry_name())?;

        for field in self.fields() {
            writeln!(f, "{field}")?;
        }

        if !self.is_valid() {
            f.write_str("Reserved bits set:")?;
            for field in self.violations() {
                write!(f, " [{}:{}]", field.spec.last_bit(), field.spec.offset)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::write_padded;
    use crate::{PageTableLevel, decode};
    use alloc::string::{String, ToString};
    use alloc::vec::Vec;
    use core::fmt;

    /// Pads `text` to `width` and marks the column end with `|`.
    struct Column<'a>(&'a str, usize);

    impl fmt::Display for Column<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write_padded(f, &format_args!("{}", self.0), self.1)?;
            f.write_str("|")
        }
    }

    #[test]
    fn flag_line_has_value_and_meaning() {
        let report = decode(0x1, PageTableLevel::Pt);
        let line = report.field("Present").unwrap().to_string();
        assert_eq!(line, "Present:              1                   present");
    }

    #[test]
    fn base_address_is_padded_hex() {
        let report = decode(0x0000_0080_0000_1027, PageTableLevel::Pt);
        let line = report.field("Page Base Address").unwrap().to_string();
        assert_eq!(line, "Page Base Address:    0x8000001");

        let report = decode(0x1000, PageTableLevel::Pdpt);
        let line = report.field("Table Base Address").unwrap().to_string();
        assert_eq!(line, "Table Base Address:   0x0000001");
    }

    #[test]
    fn reserved_lines_say_ok_or_not_ok() {
        let report = decode(0x1C0, PageTableLevel::Pd);
        let text = report.to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Raw entry:            0x00000000000001c0");
        assert_eq!(lines[1], "Level:                pd (PDE)");
        assert!(lines.contains(&"Reserved:             7                   not ok"));
        assert!(lines.contains(&"Reserved:             0                   ok"));
        assert_eq!(lines.last(), Some(&"Reserved bits set: [8:6]"));
    }

    #[test]
    fn valid_report_has_one_line_per_field() {
        let report = decode(0x8000_0000_0000_0000, PageTableLevel::Pt);
        let text = report.to_string();
        assert_eq!(text.lines().count(), 2 + report.fields().len());
        assert!(text.contains("Execute Disable:      1                   code execution disabled"));
    }

    #[test]
    fn long_values_are_padded_whole() {
        let long = "0123456789abcdef0123456789abcdef0123";
        assert_eq!(Column(long, 40).to_string(), alloc::format!("{long}    |"));
        assert_eq!(Column(long, 8).to_string(), alloc::format!("{long}|"));
    }

    #[test]
    fn multibyte_values_are_padded_by_char() {
        let text: String = core::iter::once('x').chain(core::iter::repeat_n('ü', 20)).collect();
        assert_eq!(text.len(), 41);
        assert_eq!(Column(&text, 25).to_string(), alloc::format!("{text}    |"));
    }
}
