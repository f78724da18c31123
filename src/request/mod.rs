//! Outbound requests
//!
//! This module defines the commands understood by Marked and turns a request
//! into the locator string handed to the operating system.

pub mod command;
pub mod locator;

// Re-export main types
pub use command::*;
pub use locator::*;
