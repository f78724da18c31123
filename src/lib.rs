//! mk - command-line companion for Marked
//!
//! mk translates command-line options, file paths and piped text into a single
//! `x-marked-3://` request and hands it to the operating system, which delivers
//! it to the running Marked application.

// Public modules
pub mod cli;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod request;
pub mod system;
pub mod version;

// Re-export commonly used types
pub use error::{MkError, Result};

/// Version of the mk crate, used as the last fallback of version resolution
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
