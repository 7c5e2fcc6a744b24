/// Canonical key for comparing category names: invisible characters stripped,
/// whitespace collapsed, lowercase.
pub(crate) fn category_key(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.to_lowercase()
}

/// Display form: trimmed with inner whitespace collapsed, case preserved.
pub(crate) fn display_name(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}
