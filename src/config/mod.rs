//! Configuration loading
//!
//! mk works without any configuration. An optional YAML file can change the
//! URL scheme and the name of the streaming pasteboard.

pub mod parse;
pub mod types;

// Re-export main types
pub use parse::*;
pub use types::*;
