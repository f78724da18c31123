//! Operating system capabilities
//!
//! Each side effect mk needs is behind a small trait so the dispatcher can be
//! driven by capturing stubs in tests.

pub mod clipboard;
pub mod input;
pub mod url_handler;

// Re-export main types
pub use clipboard::*;
pub use input::*;
pub use url_handler::*;
