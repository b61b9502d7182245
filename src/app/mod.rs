//! Binary-local application orchestration helpers.
//!
//! `main.rs` keeps the wiring; this module hosts the command handlers, the
//! watch loop, and logging setup.

pub(crate) mod commands;
pub(crate) mod logging;
pub(crate) mod watch;
