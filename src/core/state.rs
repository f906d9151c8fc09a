//! # Session State
//!
//! Core value types for the session store. This module contains domain
//! data only - no TUI-specific types. Presentation state lives in the
//! `tui` module.
//!
//! ```text
//! SessionState
//! ├── user: Option<User>        // signed-in identity
//! ├── is_loading: bool          // a sign-in attempt is in flight
//! └── error: Option<String>     // last failure message, if any
//! ```
//!
//! Mutations only happen through the operations on
//! [`SessionStore`](crate::core::store::SessionStore). This keeps things
//! predictable, so no surprise mutations.

/// An authenticated principal.
///
/// Replaced wholesale on sign-in, never partially mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// The full store value: identity, loading flag, error message.
///
/// `is_loading` and `error` are deliberately independent of `user`;
/// the store enforces no mutual exclusion between them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    pub user: Option<User>,
    pub is_loading: bool,
    pub error: Option<String>,
}
