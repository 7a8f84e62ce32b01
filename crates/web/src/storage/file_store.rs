// Directory-backed file repository
// Decision: Write to a hidden temp file and rename, so readers never see a
// half-written upload; concurrent uploads of one name are last-writer-wins
// Decision: Temp names have a fixed length so any name the filesystem
// accepts can be stored
// Decision: Only names already in sanitized form are looked up on disk

use anyhow::{Context, Result};
use async_trait::async_trait;
use slidebox_core::{
    is_safe_name, validate_upload_name, FileError, FileRepository, StoredFile, UploadError,
};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

/// Stores uploads as plain files in one directory
pub struct LocalFileRepository {
    root: PathBuf,
    temp_counter: AtomicU64,
}

impl LocalFileRepository {
    /// Use `root` as the upload directory, creating it if needed
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        tokio::fs::create_dir_all(&root)
            .await
            .with_context(|| format!("Failed to create upload directory {}", root.display()))?;

        Ok(Self {
            root,
            temp_counter: AtomicU64::new(0),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn temp_path(&self) -> PathBuf {
        let n = self.temp_counter.fetch_add(1, Ordering::Relaxed);
        self.root
            .join(format!(".upload-{}-{}.part", std::process::id(), n))
    }

    async fn write_atomically(&self, name: &str, content: &[u8]) -> Result<()> {
        let temp = self.temp_path();
        let target = self.root.join(name);

        if let Err(e) = tokio::fs::write(&temp, content).await {
            let _ = tokio::fs::remove_file(&temp).await;
            return Err(e).with_context(|| format!("Failed to write {}", temp.display()));
        }
        if let Err(e) = tokio::fs::rename(&temp, &target).await {
            let _ = tokio::fs::remove_file(&temp).await;
            return Err(e).with_context(|| format!("Failed to move upload to {}", target.display()));
        }
        Ok(())
    }
}

#[async_trait]
impl FileRepository for LocalFileRepository {
    async fn list(&self) -> Result<Vec<String>> {
        let mut entries = tokio::fs::read_dir(&self.root)
            .await
            .with_context(|| format!("Failed to read {}", self.root.display()))?;

        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            if !entry.file_type().await?.is_file() {
                continue;
            }
            // Skips in-flight temp files and anything placed there by hand
            // that could not be served back
            match entry.file_name().to_str() {
                Some(name) if is_safe_name(name) => names.push(name.to_string()),
                _ => {}
            }
        }

        names.sort();
        Ok(names)
    }

    async fn save(&self, filename: &str, content: &[u8]) -> Result<String, UploadError> {
        let name = validate_upload_name(filename)?;
        self.write_atomically(&name, content).await?;
        Ok(name)
    }

    async fn delete(&self, filename: &str) -> Result<()> {
        if !is_safe_name(filename) {
            tracing::warn!(file = %filename, "Refusing to delete unsanitized name");
            return Ok(());
        }

        match tokio::fs::remove_file(self.root.join(filename)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("Failed to delete {}", filename)),
        }
    }

    async fn fetch(&self, filename: &str) -> Result<StoredFile, FileError> {
        if !is_safe_name(filename) {
            return Err(FileError::NotFound(filename.to_string()));
        }

        let path = self.root.join(filename);
        match tokio::fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => {}
            Ok(_) => return Err(FileError::NotFound(filename.to_string())),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(FileError::NotFound(filename.to_string()))
            }
            Err(e) => return Err(anyhow::Error::from(e).into()),
        }

        let bytes = tokio::fs::read(&path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(StoredFile::new(filename, bytes))
    }
}
