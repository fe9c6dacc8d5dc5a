//! Application module structure for TypesetApp
//!
//! - `core`: TypesetApp struct, initialization and backend wiring
//! - `events`: Event processing from backend
//! - `actions`: Page action handling (uploads, downloads, deletes)
//! - `update`: Main update loop

pub mod actions;
pub mod core;
pub mod events;
pub mod update;

// Re-export TypesetApp for public API
pub use core::TypesetApp;
