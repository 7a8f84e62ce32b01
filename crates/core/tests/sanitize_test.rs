// Traversal and injection attempts against the public filename API
// Every accepted name must be a single flat component that stays inside the
// upload directory when joined onto it.

use slidebox_core::{
    is_safe_name, sanitize_filename, validate_upload_name, RejectReason, SanitizedName,
    UploadError,
};
use std::path::{Component, Path};

const ATTEMPTS: &[&str] = &[
    "../slides.pdf",
    "../../../../etc/passwd",
    "..\\..\\boot.ini",
    "/etc/shadow",
    "/absolute/deck.pptx",
    "C:\\Windows\\System32\\deck.pdf",
    "\\\\server\\share\\deck.pdf",
    "a/b/c/../../../../d.pdf",
    "..%2f..%2fdeck.pdf",
    ".hidden.pdf",
    "...pdf",
    "deck.pdf/..",
    "deck.pdf\\..",
    "./deck.pdf",
    "~/deck.pdf",
    "deck\u{202e}fdp.exe",
    "\u{FF0E}\u{FF0E}\u{FF0F}deck.pdf",
    "deck\t\n.pdf",
    "$(rm -rf).pdf",
    "`id`.pptx",
    "deck.pdf;rm -rf /",
];

fn assert_flat(raw: &str, name: &str) {
    let components: Vec<_> = Path::new(name).components().collect();
    assert_eq!(components.len(), 1, "{raw:?} -> {name:?}");
    assert!(
        matches!(components[0], Component::Normal(_)),
        "{raw:?} -> {name:?}"
    );
    assert!(!name.starts_with('.'), "{raw:?} -> {name:?}");
    assert!(!name.contains(['/', '\\', '\0']), "{raw:?} -> {name:?}");
    assert!(name.is_ascii(), "{raw:?} -> {name:?}");
}

#[test]
fn test_every_attempt_sanitizes_to_a_flat_name() {
    for raw in ATTEMPTS {
        match sanitize_filename(raw) {
            SanitizedName::Valid(name) => {
                assert_flat(raw, &name);
                assert!(is_safe_name(&name), "{raw:?} -> {name:?} not a fixed point");
            }
            SanitizedName::Rejected(reason) => {
                assert_eq!(reason, RejectReason::NoSafeCharacters, "{raw:?}");
            }
        }
    }
}

#[test]
fn test_attempts_are_not_safe_as_given() {
    for raw in ATTEMPTS {
        assert!(!is_safe_name(raw), "{raw:?}");
    }
}

#[test]
fn test_upload_names_keep_an_allowed_extension() {
    for raw in ATTEMPTS {
        match validate_upload_name(raw) {
            Ok(name) => {
                assert_flat(raw, &name);
                let lower = name.to_ascii_lowercase();
                assert!(
                    lower.ends_with(".pdf") || lower.ends_with(".pptx"),
                    "{raw:?} -> {name:?}"
                );
            }
            Err(UploadError::InvalidType(_)) | Err(UploadError::InvalidName(_)) => {}
            Err(e) => panic!("{raw:?}: unexpected error {e}"),
        }
    }
}

#[test]
fn test_nul_bytes_never_pass() {
    for raw in ["deck.pdf\0", "\0deck.pdf", "de\0ck.pdf", "../\0/deck.pdf"] {
        assert_eq!(
            sanitize_filename(raw),
            SanitizedName::Rejected(RejectReason::ContainsNul),
            "{raw:?}"
        );
        assert!(validate_upload_name(raw).is_err(), "{raw:?}");
    }
}
