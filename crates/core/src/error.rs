// Error types for credential and file operations
//
// Each variant that a user can trigger renders as a human-readable message;
// `Internal` wraps storage failures that are not recoverable by the caller.

use thiserror::Error;

use crate::filename::RejectReason;

/// Errors from the credential store
#[derive(Debug, Error)]
pub enum CredentialError {
    /// The identity is already registered
    #[error("Username already exists")]
    AlreadyExists(String),

    /// Storage failure
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl CredentialError {
    pub fn already_exists(identity: impl Into<String>) -> Self {
        CredentialError::AlreadyExists(identity.into())
    }
}

/// Errors from an upload attempt
#[derive(Debug, Error)]
pub enum UploadError {
    /// The form had no `file` field at all
    #[error("No file uploaded")]
    NoFileProvided,

    /// The `file` field was present but no file was chosen
    #[error("No file selected")]
    NoFileSelected,

    /// The extension is not on the allow-list
    #[error("Invalid file type (only PDF/PPTX allowed)")]
    InvalidType(String),

    /// The name could not be sanitized into anything usable
    #[error("Invalid file name: {0}")]
    InvalidName(RejectReason),

    /// Storage failure
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl UploadError {
    /// Whether the caller can fix this by submitting a different file
    pub fn is_user_error(&self) -> bool {
        !matches!(self, UploadError::Internal(_))
    }
}

/// Errors from reading a stored file
#[derive(Debug, Error)]
pub enum FileError {
    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_messages_are_distinct() {
        let messages = [
            UploadError::NoFileProvided.to_string(),
            UploadError::NoFileSelected.to_string(),
            UploadError::InvalidType("x.exe".into()).to_string(),
            UploadError::InvalidName(RejectReason::NoSafeCharacters).to_string(),
        ];
        for (i, a) in messages.iter().enumerate() {
            for b in &messages[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(messages[0], "No file uploaded");
        assert_eq!(messages[1], "No file selected");
        assert_eq!(messages[2], "Invalid file type (only PDF/PPTX allowed)");
    }

    #[test]
    fn test_user_error_classification() {
        assert!(UploadError::NoFileSelected.is_user_error());
        assert!(!UploadError::Internal(anyhow::anyhow!("disk full")).is_user_error());
    }

    #[test]
    fn test_credential_error_message() {
        let err = CredentialError::already_exists("alice");
        assert_eq!(err.to_string(), "Username already exists");
        assert!(matches!(err, CredentialError::AlreadyExists(ref name) if name == "alice"));
    }
}
