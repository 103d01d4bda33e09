//! Display name construction from first/last name parts.

/// Build a display name from optional first/last name parts.
///
/// Returns `None` when both parts are absent or blank, so callers can tell
/// "nothing to update" apart from an explicit new name.
pub fn build_display_name(first_name: Option<&str>, last_name: Option<&str>) -> Option<String> {
    let first = first_name.unwrap_or("").trim();
    let last = last_name.unwrap_or("").trim();

    let name = match (first.is_empty(), last.is_empty()) {
        (true, true) => return None,
        (false, true) => first.to_string(),
        (true, false) => last.to_string(),
        (false, false) => format!("{} {}", first, last),
    };

    Some(name)
}
