// Slidebox Core
//
// Storage-agnostic pieces shared by the web server:
// - Domain types (User, StoredFile)
// - Filename sanitization and the extension allow-list
// - Error taxonomy for credential and file operations
// - FileRepository trait with an in-memory implementation
// - Logging initialization

pub mod error;
pub mod filename;
pub mod stored_file;
pub mod telemetry;
pub mod traits;
pub mod user;

// In-memory implementations for tests and dev mode
pub mod memory;

// Re-exports for convenience
pub use error::{CredentialError, FileError, UploadError};
pub use filename::{
    content_type_for, has_allowed_extension, is_safe_name, sanitize_filename, RejectReason,
    SanitizedName, ALLOWED_EXTENSIONS,
};
pub use memory::InMemoryFileRepository;
pub use stored_file::{validate_upload_name, StoredFile};
pub use traits::FileRepository;
pub use user::User;
