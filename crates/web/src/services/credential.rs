// Credential service: registration and password checks
// Decision: Secrets are stored as Argon2 hashes, never as plaintext
// Decision: The storage layer's unique constraint is authoritative; the
// pre-check only avoids hashing for an obviously taken name

use crate::storage::{
    models::CreateUserRow,
    password::{hash_password, verify_password},
    StorageBackend,
};
use slidebox_core::{CredentialError, User};
use std::sync::Arc;

pub struct CredentialService {
    db: Arc<StorageBackend>,
}

impl CredentialService {
    pub fn new(db: Arc<StorageBackend>) -> Self {
        Self { db }
    }

    /// Register a new identity.
    ///
    /// Fails with `AlreadyExists` if the username is taken, including when a
    /// concurrent registration wins the race.
    pub async fn register(&self, username: &str, password: &str) -> Result<User, CredentialError> {
        if self.db.get_user_by_username(username).await?.is_some() {
            return Err(CredentialError::already_exists(username));
        }

        let password_hash = hash_password(password)?;
        let row = self
            .db
            .create_user(CreateUserRow {
                username: username.to_string(),
                password_hash,
            })
            .await?
            .ok_or_else(|| CredentialError::already_exists(username))?;

        tracing::info!(username = %row.username, "Registered user");
        Ok(row.into())
    }

    /// Check a username/password pair. Returns None when either is wrong.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, CredentialError> {
        let Some(row) = self.db.get_user_by_username(username).await? else {
            return Ok(None);
        };

        match verify_password(password, &row.password) {
            Ok(true) => Ok(Some(row.into())),
            Ok(false) => Ok(None),
            Err(e) => {
                // A stored value that does not parse as a hash can never match
                tracing::warn!(username = %username, "Stored password hash is unreadable: {:#}", e);
                Ok(None)
            }
        }
    }

    pub async fn count(&self) -> Result<i64, CredentialError> {
        Ok(self.db.count_users().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> CredentialService {
        CredentialService::new(Arc::new(StorageBackend::in_memory()))
    }

    #[tokio::test]
    async fn test_register_then_authenticate() {
        let svc = service();
        let user = svc.register("alice", "pw1").await.unwrap();
        assert_eq!(user.username, "alice");

        let found = svc.authenticate("alice", "pw1").await.unwrap();
        assert_eq!(found.map(|u| u.username), Some("alice".to_string()));
    }

    #[tokio::test]
    async fn test_duplicate_register_fails() {
        let svc = service();
        svc.register("alice", "pw1").await.unwrap();

        let err = svc.register("alice", "other").await.unwrap_err();
        assert!(matches!(err, CredentialError::AlreadyExists(ref name) if name == "alice"));
        assert_eq!(err.to_string(), "Username already exists");
        assert_eq!(svc.count().await.unwrap(), 1);

        // The original secret is untouched
        assert!(svc.authenticate("alice", "pw1").await.unwrap().is_some());
        assert!(svc.authenticate("alice", "other").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_wrong_secret_and_unknown_identity() {
        let svc = service();
        svc.register("alice", "pw1").await.unwrap();

        assert!(svc.authenticate("alice", "pw2").await.unwrap().is_none());
        assert!(svc.authenticate("alice", "").await.unwrap().is_none());
        assert!(svc.authenticate("bob", "pw1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_usernames_are_case_sensitive() {
        let svc = service();
        svc.register("alice", "pw1").await.unwrap();
        svc.register("Alice", "pw2").await.unwrap();

        assert!(svc.authenticate("Alice", "pw1").await.unwrap().is_none());
        assert!(svc.authenticate("Alice", "pw2").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_concurrent_registration_has_one_winner() {
        let svc = Arc::new(service());
        let mut handles = Vec::new();
        for i in 0..8 {
            let svc = svc.clone();
            handles.push(tokio::spawn(async move {
                svc.register("race", &format!("pw{}", i)).await
            }));
        }

        let mut ok = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => ok += 1,
                Err(CredentialError::AlreadyExists(_)) => {}
                Err(e) => panic!("unexpected error: {e}"),
            }
        }
        assert_eq!(ok, 1);
        assert_eq!(svc.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_sqlite_backend() {
        let backend = StorageBackend::sqlite("sqlite::memory:").await.unwrap();
        let svc = CredentialService::new(Arc::new(backend));

        svc.register("carol", "secret").await.unwrap();
        assert!(matches!(
            svc.register("carol", "x").await,
            Err(CredentialError::AlreadyExists(_))
        ));
        assert!(svc.authenticate("carol", "secret").await.unwrap().is_some());
    }
}
