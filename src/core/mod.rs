//! # Core Session Logic
//!
//! This module contains Atrium's business logic. It knows nothing about
//! any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • SessionState (data)  │
//!                    │  • SessionStore (owner) │
//!                    │  • config (settings)    │
//!                    │                         │
//!                    │  No terminal. No UI.    │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `User` and `SessionState` value types
//! - [`store`]: The `SessionStore` — observable holder with the four
//!   mutators and `subscribe`
//! - [`config`]: Settings with a defaults → file → env → CLI hierarchy

pub mod config;
pub mod state;
pub mod store;
