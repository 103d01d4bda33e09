use crate::build_display_name;

#[test]
fn test_display_name_from_both_parts() {
    assert_eq!(
        build_display_name(Some("Jane"), Some("Smith")),
        Some("Jane Smith".to_string())
    );
}

#[test]
fn test_display_name_trims_whitespace() {
    assert_eq!(
        build_display_name(Some("  Jane "), Some(" Smith  ")),
        Some("Jane Smith".to_string())
    );
}

#[test]
fn test_display_name_single_part() {
    assert_eq!(
        build_display_name(Some("Jane"), None),
        Some("Jane".to_string())
    );
    assert_eq!(
        build_display_name(None, Some("Smith")),
        Some("Smith".to_string())
    );
}

#[test]
fn test_display_name_absent_parts() {
    assert_eq!(build_display_name(None, None), None);
    assert_eq!(build_display_name(Some(""), Some("   ")), None);
}
