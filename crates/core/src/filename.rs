// Filename sanitization and extension allow-list
//
// Uploaded names come straight from the browser, so nothing here trusts them.
// `sanitize_filename` reduces a name to a flat, ASCII-only form that can be
// joined onto the upload directory without escaping it.

use std::fmt;
use unicode_normalization::UnicodeNormalization;

/// Extensions accepted for upload (compared case-insensitively).
pub const ALLOWED_EXTENSIONS: &[&str] = &["pdf", "pptx"];

/// Names Windows treats as devices regardless of extension.
const WINDOWS_DEVICE_NAMES: &[&str] = &[
    "CON", "AUX", "COM1", "COM2", "COM3", "COM4", "LPT1", "LPT2", "LPT3", "PRN", "NUL",
];

/// Why a filename could not be made safe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Nothing was submitted
    Empty,
    /// The name contains a NUL byte
    ContainsNul,
    /// Nothing usable is left once unsafe characters are removed
    NoSafeCharacters,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            RejectReason::Empty => "name is empty",
            RejectReason::ContainsNul => "name contains a NUL byte",
            RejectReason::NoSafeCharacters => "name has no safe characters",
        };
        f.write_str(reason)
    }
}

/// Result of sanitizing a filename
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SanitizedName {
    Valid(String),
    Rejected(RejectReason),
}

/// Reduce a user-supplied filename to a safe, flat form.
///
/// The name is NFKD-normalized first so accented letters keep their ASCII
/// base. Path separators become word breaks, whitespace runs are joined with
/// `_`, anything outside `[A-Za-z0-9_.-]` is dropped and leading/trailing `.` or
/// `_` are trimmed. The result never contains a separator and is never `.`
/// or `..`.
pub fn sanitize_filename(raw: &str) -> SanitizedName {
    if raw.is_empty() {
        return SanitizedName::Rejected(RejectReason::Empty);
    }
    if raw.contains('\0') {
        return SanitizedName::Rejected(RejectReason::ContainsNul);
    }

    let flattened: String = raw
        .nfkd()
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();
    let joined = flattened.split_whitespace().collect::<Vec<_>>().join("_");

    let filtered: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        .collect();
    let trimmed = filtered.trim_matches(|c| c == '.' || c == '_');

    if trimmed.is_empty() {
        return SanitizedName::Rejected(RejectReason::NoSafeCharacters);
    }

    let stem = trimmed.split('.').next().unwrap_or(trimmed);
    if WINDOWS_DEVICE_NAMES
        .iter()
        .any(|device| device.eq_ignore_ascii_case(stem))
    {
        return SanitizedName::Valid(format!("_{}", trimmed));
    }

    SanitizedName::Valid(trimmed.to_string())
}

/// Lowercased extension after the last dot, if there is one
pub fn extension_of(name: &str) -> Option<String> {
    let (_, ext) = name.rsplit_once('.')?;
    Some(ext.to_ascii_lowercase())
}

/// Whether the name ends in one of the allowed extensions
pub fn has_allowed_extension(name: &str) -> bool {
    extension_of(name)
        .map(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// Whether `name` is already in sanitized form (and so safe to join onto the
/// upload directory as-is)
pub fn is_safe_name(name: &str) -> bool {
    matches!(sanitize_filename(name), SanitizedName::Valid(ref clean) if clean == name)
}

/// MIME type served for a stored file
pub fn content_type_for(name: &str) -> &'static str {
    match extension_of(name).as_deref() {
        Some("pdf") => "application/pdf",
        Some("pptx") => {
            "application/vnd.openxmlformats-officedocument.presentationml.presentation"
        }
        _ => "application/octet-stream",
    }
}
