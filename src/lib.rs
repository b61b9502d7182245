//! Folio: accent color and display-mode preferences for the portfolio site.
//!
//! The crate owns the one piece of shared state the site has: the user's
//! display mode (`light`, `dark`, or `system`) and accent color. It persists
//! both to durable storage, resolves `system` against the host scheme, and
//! derives the CSS custom properties the stylesheet consumes.
//!
//! # Quick start
//!
//! ```no_run
//! use folio::config::load_config;
//! use folio::storage::FileStorage;
//! use folio::store::PreferenceStore;
//! use folio::theme::{DisplayMode, HostScheme};
//!
//! let config = load_config(None).unwrap();
//! let storage = FileStorage::at_default_path().unwrap();
//! let mut store = PreferenceStore::open(&config, storage, HostScheme);
//! store.set_display_mode(DisplayMode::Dark);
//! store.set_accent_color("#22c55e").unwrap();
//! print!("{}", store.vars().to_css());
//! ```

pub mod build_info;
pub mod config;
pub mod error;
pub mod render;
pub mod storage;
pub mod store;
#[cfg(test)]
pub mod testsupport;
pub mod theme;
