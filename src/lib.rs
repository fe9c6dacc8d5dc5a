//! TypeSet font manager library.
//!
//! This module re-exports the core components for testing and extension.

pub mod app;
pub mod archive;
pub mod backend;
pub mod config;
pub mod error;
pub mod events;
pub mod export;
pub mod font;
pub mod fonts;
pub mod library;
pub mod logging;
pub mod notify;
pub mod protocol;
pub mod state;
pub mod stylesheet;
pub mod ui;
pub mod validation;

#[cfg(test)]
mod integration_tests;
