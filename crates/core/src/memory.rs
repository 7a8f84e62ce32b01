// In-memory implementations for tests and dev mode
// Decision: Use parking_lot for thread-safe access
// Decision: BTreeMap keeps listings sorted by name, matching the disk backend

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;

use crate::error::{FileError, UploadError};
use crate::filename::is_safe_name;
use crate::stored_file::{validate_upload_name, StoredFile};
use crate::traits::FileRepository;

/// File repository backed by a map; contents are lost on drop
#[derive(Default)]
pub struct InMemoryFileRepository {
    files: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl InMemoryFileRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FileRepository for InMemoryFileRepository {
    async fn list(&self) -> anyhow::Result<Vec<String>> {
        Ok(self.files.read().keys().cloned().collect())
    }

    async fn save(&self, filename: &str, content: &[u8]) -> Result<String, UploadError> {
        let name = validate_upload_name(filename)?;
        self.files.write().insert(name.clone(), content.to_vec());
        Ok(name)
    }

    async fn delete(&self, filename: &str) -> anyhow::Result<()> {
        self.files.write().remove(filename);
        Ok(())
    }

    async fn fetch(&self, filename: &str) -> Result<StoredFile, FileError> {
        if !is_safe_name(filename) {
            return Err(FileError::NotFound(filename.to_string()));
        }
        self.files
            .read()
            .get(filename)
            .map(|bytes| StoredFile::new(filename, bytes.clone()))
            .ok_or_else(|| FileError::NotFound(filename.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_then_fetch_round_trip() {
        let repo = InMemoryFileRepository::new();
        let bytes = b"%PDF-1.7 fake".to_vec();

        let name = repo.save("doc.pdf", &bytes).await.unwrap();
        assert_eq!(name, "doc.pdf");

        let file = repo.fetch("doc.pdf").await.unwrap();
        assert_eq!(file.bytes, bytes);
        assert_eq!(file.size(), bytes.len());
    }

    #[tokio::test]
    async fn test_invalid_type_writes_nothing() {
        let repo = InMemoryFileRepository::new();
        let result = repo.save("x.exe", b"MZ").await;
        assert!(matches!(result, Err(UploadError::InvalidType(_))));
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_overwrite_same_name() {
        let repo = InMemoryFileRepository::new();
        repo.save("deck.pptx", b"one").await.unwrap();
        repo.save("deck.pptx", b"two").await.unwrap();

        assert_eq!(repo.list().await.unwrap(), vec!["deck.pptx".to_string()]);
        assert_eq!(repo.fetch("deck.pptx").await.unwrap().bytes, b"two");
    }

    #[tokio::test]
    async fn test_delete_missing_is_noop() {
        let repo = InMemoryFileRepository::new();
        repo.save("keep.pdf", b"x").await.unwrap();

        repo.delete("missing.pdf").await.unwrap();
        assert_eq!(repo.list().await.unwrap(), vec!["keep.pdf".to_string()]);
    }

    #[tokio::test]
    async fn test_fetch_unsanitized_name_not_found() {
        let repo = InMemoryFileRepository::new();
        repo.save("a.pdf", b"x").await.unwrap();
        assert!(matches!(
            repo.fetch("../a.pdf").await,
            Err(FileError::NotFound(_))
        ));
    }
}
