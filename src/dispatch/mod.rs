//! Request dispatch
//!
//! This module resolves file arguments and turns a parsed intent into the
//! single request mk sends.

pub mod dispatcher;
pub mod paths;

// Re-export main types
pub use dispatcher::*;
pub use paths::*;
