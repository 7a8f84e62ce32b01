// User domain type
//
// A registered account. The secret never leaves the credential store, so it
// is not part of this type.

use serde::{Deserialize, Serialize};

/// A registered account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Row id assigned by the store
    pub id: i64,
    /// Unique identity (the username)
    pub username: String,
}
