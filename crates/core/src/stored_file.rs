// Stored file domain type and upload name validation

use serde::{Deserialize, Serialize};

use crate::error::UploadError;
use crate::filename::{has_allowed_extension, sanitize_filename, SanitizedName};

/// An uploaded artifact as kept by a file repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredFile {
    /// Sanitized name, unique within the repository
    pub name: String,
    /// Raw content, stored verbatim
    #[serde(skip)]
    pub bytes: Vec<u8>,
}

impl StoredFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// Turn a submitted filename into the name it will be stored under.
///
/// The extension is checked on the submitted name first, then again on the
/// sanitized one, so a stored file always carries an allowed extension.
pub fn validate_upload_name(raw: &str) -> Result<String, UploadError> {
    if raw.is_empty() {
        return Err(UploadError::NoFileSelected);
    }
    if !has_allowed_extension(raw) {
        return Err(UploadError::InvalidType(raw.to_string()));
    }

    match sanitize_filename(raw) {
        SanitizedName::Valid(name) if has_allowed_extension(&name) => Ok(name),
        SanitizedName::Valid(_) => Err(UploadError::InvalidType(raw.to_string())),
        SanitizedName::Rejected(reason) => Err(UploadError::InvalidName(reason)),
    }
}
