// Storage layer for Slidebox
// Decision: Support both SQLite (production) and in-memory (dev mode) credentials
//
// - StorageBackend: enum over the credential stores
// - LocalFileRepository: FileRepository over a directory on disk

pub mod backend;
pub mod file_store;
pub mod memory;
pub mod models;
pub mod password;
pub mod repositories;

pub use backend::StorageBackend;
pub use file_store::LocalFileRepository;
pub use memory::InMemoryDatabase;
pub use models::*;
pub use repositories::Database;
