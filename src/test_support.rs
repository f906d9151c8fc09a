//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::state::User;
use crate::core::store::SessionStore;

/// The identity used throughout unit tests.
pub fn test_user() -> User {
    User {
        id: "1".to_string(),
        name: "Test User".to_string(),
        email: "test@example.com".to_string(),
    }
}

/// Creates a fresh store for a single test.
#[allow(dead_code)]
pub fn test_store() -> SessionStore {
    SessionStore::new()
}
