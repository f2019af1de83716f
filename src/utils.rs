use crate::types::{ImportReport, WrittenFileTableRow};

/// Turns a display name into a filesystem-safe slug.
///
/// Alphanumerics are kept and lowercased, spaces become hyphens, existing
/// hyphens stay, everything else is dropped. Non-ASCII letters are dropped
/// as well, so the result is always within `[a-z0-9-]`.
///
/// ```
/// use spotgrab::utils::sanitize_name;
///
/// assert_eq!(sanitize_name("Sigur Rós"), "sigur-rs");
/// ```
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .filter_map(|c| match c {
            ' ' | '-' => Some('-'),
            c if c.is_ascii_alphanumeric() => Some(c.to_ascii_lowercase()),
            _ => None,
        })
        .collect()
}

/// Slug of `name`, or of `fallback` when `name` sanitizes to nothing.
pub fn slug_or(name: &str, fallback: &str) -> String {
    let slug = sanitize_name(name);
    if slug.is_empty() {
        sanitize_name(fallback)
    } else {
        slug
    }
}

pub fn report_table_rows(report: &ImportReport) -> Vec<WrittenFileTableRow> {
    report
        .files
        .iter()
        .map(|f| WrittenFileTableRow {
            kind: f.kind.to_string(),
            title: f.title.clone(),
            path: f.path.display().to_string(),
        })
        .collect()
}
