//! core/mod.rs
//!
//! Everything that is not GUI:
//! - Wire/domain data (session, notes, withdrawal result)
//! - HTTP client for the kiosk backend + QR image service
//! - Configuration + error types
//! - Money helpers (BRL -> sats estimate)
//!
//! The GUI only calls into `core` and renders the plain structs it gets back.
//! No iced types live here: the QR image comes back as raw bytes and the GUI
//! turns it into an image handle.

pub mod api;
pub mod config;
pub mod error;
pub mod money;
pub mod types;
