//! # TUI Components
//!
//! Screen-level components for the terminal interface.
//!
//! All three are props-based: they receive their data as struct fields
//! and render what they are given, never reaching into shared state.
//! `HomeScreen` and `DetailsScreen` also implement `EventHandler` and
//! emit screen events ([`HomeEvent`], [`DetailsEvent`]) that the main
//! loop translates into store mutations and navigation.
//!
//! Each component file is self-contained: props, event type, rendering,
//! event handling, and tests all live together.

pub mod details;
pub mod home;
pub mod title_bar;

pub use details::{DetailsEvent, DetailsScreen};
pub use home::{HomeEvent, HomeScreen};
pub use title_bar::TitleBar;
