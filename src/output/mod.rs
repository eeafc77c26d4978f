//! Output formatting for pomoclock.
//!
//! This module renders clock snapshots and events as pretty text or JSON.

mod json;
mod pretty;

pub use json::*;
pub use pretty::*;
