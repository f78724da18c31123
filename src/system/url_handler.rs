//! Locator dispatch

use crate::error::{SystemError, SystemResult};

/// Hands a locator to whatever application registered its scheme
pub trait LocatorOpener {
    /// Request that the locator be opened; no reply is awaited
    fn open(&self, locator: &str) -> SystemResult<()>;
}

/// Opener backed by the platform's URL handler (`open`, `xdg-open`, `start`)
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl LocatorOpener for SystemOpener {
    fn open(&self, locator: &str) -> SystemResult<()> {
        log::info!("Opening {}", locator);
        opener::open(locator).map_err(|e| SystemError::Open {
            locator: locator.to_string(),
            error: e.to_string(),
        })
    }
}
