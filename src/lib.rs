//! Atrium library exports for testing

use clap::ValueEnum;

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// Which screen the app opens on (deep-link style start).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum StartScreen {
    #[default]
    Home,
    Details,
}
