//! CLI layer for classreg
//!
//! This module contains the command-line interface:
//!
//! - [`app`] - CLI definitions and entry point

pub mod app;

// Re-export main entry point
pub use app::run;
