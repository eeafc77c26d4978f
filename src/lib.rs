//! pomoclock - A Pomodoro session clock for the terminal
//!
//! The core is [`clock::SessionClock`], a deterministic countdown that moves
//! between work sessions, short breaks, and long breaks. Everything else in
//! this crate presents it: an interactive TUI, a headless watch mode, and a
//! fast-forward simulation.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod cli;
pub mod clock;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use clock::{SessionClock, SessionConfig, SessionType};
pub use error::ClockError;
