//! Configuration types

use crate::request::DEFAULT_SCHEME;
use serde::{Deserialize, Serialize};

/// Name of the pasteboard Marked reads streamed text from
pub const DEFAULT_PASTEBOARD: &str = "mkStreamingPreview";

/// Top-level configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Scheme of the dispatched locators
    pub url_scheme: String,

    /// Named pasteboard used as the streaming side channel
    pub pasteboard: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            url_scheme: DEFAULT_SCHEME.to_string(),
            pasteboard: DEFAULT_PASTEBOARD.to_string(),
        }
    }
}
