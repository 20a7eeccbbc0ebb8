use kernel_pte::{PageTableLevel, decode};
use rstest::rstest;

#[test]
fn execute_disable_only_pte() {
    let report = decode(0x8000_0000_0000_0000, PageTableLevel::Pt);

    assert!(report.is_valid());
    assert_eq!(report.field("Present").unwrap().value, 0);
    assert_eq!(report.field("Execute Disable").unwrap().value, 1);
    assert_eq!(
        report.fields().iter().map(|f| f.value).sum::<u64>(),
        1,
        "only the execute-disable bit is set"
    );
    assert!(report.bits().no_execute());
    assert!(!report.bits().present());
}

#[test]
fn reserved_bits_in_pml4e() {
    let report = decode(0x0000_0000_0000_01C0, PageTableLevel::Pml4);

    assert!(!report.is_valid());
    let field = report.field_at(6).unwrap();
    assert_eq!(field.spec.width, 3);
    assert_eq!(field.value, 7);
    assert!(field.violation);
}

#[test]
fn present_writable_pte() {
    let report = decode(0x0000_0080_0000_1027, PageTableLevel::Pt);

    assert!(report.is_valid());
    let present = report.field("Present").unwrap();
    assert_eq!((present.value, present.interpretation()), (1, Some("present")));
    let rw = report.field("Read/Write").unwrap();
    assert_eq!((rw.value, rw.interpretation()), (1, Some("read/write")));
    assert_eq!(report.field("Accessed").unwrap().value, 1);
    assert_eq!(report.base_address(), 0x80_0000_1000);
}

#[rstest]
#[case::pml4(PageTableLevel::Pml4, false)]
#[case::pdpt(PageTableLevel::Pdpt, false)]
#[case::pd(PageTableLevel::Pd, false)]
#[case::pt(PageTableLevel::Pt, true)]
fn large_page_bit_depends_on_level(#[case] level: PageTableLevel, #[case] valid: bool) {
    let report = decode(0x0000_0000_0020_0083, level);
    assert_eq!(report.is_valid(), valid);
}

#[rstest]
#[case(PageTableLevel::Pml4, 13, "Table Base Address")]
#[case(PageTableLevel::Pdpt, 13, "Table Base Address")]
#[case(PageTableLevel::Pd, 13, "Table Base Address")]
#[case(PageTableLevel::Pt, 15, "Page Base Address")]
fn layout_per_level(#[case] level: PageTableLevel, #[case] fields: usize, #[case] base: &str) {
    let report = decode(0, level);
    assert_eq!(report.fields().len(), fields);
    assert_eq!(report.field_at(12).unwrap().name(), base);
    assert!(report.is_valid());
}

#[test]
fn report_text_marks_violations() {
    let text = decode(0x000F_0000_0000_0001, PageTableLevel::Pdpt).to_string();
    assert!(text.contains("not ok"));
    assert!(text.ends_with("Reserved bits set: [51:40]\n"));
}
