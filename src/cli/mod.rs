//! CLI interface and argument parsing
//!
//! This module handles option scanning, help and version output, and the
//! process entry point.

pub mod app;
pub mod options;
pub mod usage;

// Re-export main types
pub use app::*;
pub use options::*;
pub use usage::*;
