// In-memory credential storage for dev mode
// Decision: Use parking_lot for thread-safe access
// Decision: Insert and uniqueness check happen under one write lock
//
// Mirrors the SQLite repository API so the server can run without a
// database file. All data is lost on restart.

use anyhow::Result;
use parking_lot::RwLock;
use std::collections::HashMap;

use super::models::*;

/// In-memory database for dev mode
#[derive(Default)]
pub struct InMemoryDatabase {
    users: RwLock<HashMap<String, UserRow>>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    // ============================================
    // Users
    // ============================================

    /// Insert a user. Returns None if the username is taken.
    pub async fn create_user(&self, input: CreateUserRow) -> Result<Option<UserRow>> {
        let mut users = self.users.write();
        if users.contains_key(&input.username) {
            return Ok(None);
        }

        // Users are never deleted, so the count doubles as the next id
        let row = UserRow {
            id: users.len() as i64 + 1,
            username: input.username.clone(),
            password: input.password_hash,
        };
        users.insert(input.username, row.clone());
        Ok(Some(row))
    }

    pub async fn get_user_by_username(&self, username: &str) -> Result<Option<UserRow>> {
        Ok(self.users.read().get(username).cloned())
    }

    pub async fn count_users(&self) -> Result<i64> {
        Ok(self.users.read().len() as i64)
    }
}
