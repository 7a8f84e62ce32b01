// Core traits for pluggable backends
//
// The HTTP handlers only talk to these traits, so the storage behind them can
// change without touching request handling:
// - Local directory for production
// - In-memory map for tests and dev mode

use async_trait::async_trait;

use crate::error::{FileError, UploadError};
use crate::stored_file::StoredFile;

// ============================================================================
// FileRepository - Uploaded artifact storage
// ============================================================================

/// Trait for storing uploaded presentation files
///
/// Names passed to `fetch` and `delete` must already be in sanitized form;
/// anything else is treated as absent.
#[async_trait]
pub trait FileRepository: Send + Sync {
    /// Names of all stored files
    async fn list(&self) -> anyhow::Result<Vec<String>>;

    /// Validate and store a file, overwriting any file of the same sanitized
    /// name. Returns the name it was stored under.
    async fn save(&self, filename: &str, content: &[u8]) -> Result<String, UploadError>;

    /// Remove a file. Removing a missing file is not an error.
    async fn delete(&self, filename: &str) -> anyhow::Result<()>;

    /// Read a stored file
    async fn fetch(&self, filename: &str) -> Result<StoredFile, FileError>;
}
