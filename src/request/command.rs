//! Request types

use std::collections::BTreeMap;
use std::fmt;

/// Commands accepted by the receiving application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Open,
    Refresh,
    Pref,
    Dingus,
    Paste,
    Preview,
    Extract,
    StyleStealer,
    ImportUrl,
    AddStyle,
    Defaults,
    Do,
    Stream,
}

impl Command {
    /// Name of the command as it appears in the locator host position
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Open => "open",
            Command::Refresh => "refresh",
            Command::Pref => "pref",
            Command::Dingus => "dingus",
            Command::Paste => "paste",
            Command::Preview => "preview",
            Command::Extract => "extract",
            Command::StyleStealer => "stylestealer",
            Command::ImportUrl => "importurl",
            Command::AddStyle => "addstyle",
            Command::Defaults => "defaults",
            Command::Do => "do",
            Command::Stream => "stream",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A command plus its parameters
///
/// Keys are unique; inserting an existing key replaces its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub command: Command,
    pub params: BTreeMap<String, String>,
}

impl Request {
    /// Create a request with no parameters
    pub fn new(command: Command) -> Self {
        Request {
            command,
            params: BTreeMap::new(),
        }
    }

    /// Add a parameter
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Add a parameter only when the value is present and non-empty
    pub fn with_non_empty(self, key: &str, value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.is_empty() => self.with_param(key, v),
            _ => self,
        }
    }

    /// Replace all parameters
    pub fn with_params(mut self, params: BTreeMap<String, String>) -> Self {
        self.params = params;
        self
    }

    /// Get a parameter value
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_names() {
        assert_eq!(Command::StyleStealer.as_str(), "stylestealer");
        assert_eq!(Command::ImportUrl.to_string(), "importurl");
        assert_eq!(Command::AddStyle.as_str(), "addstyle");
        assert_eq!(Command::Do.as_str(), "do");
    }

    #[test]
    fn test_with_non_empty_skips_empty_values() {
        let request = Request::new(Command::Refresh).with_non_empty("file", Some(""));
        assert!(request.params.is_empty());

        let request = Request::new(Command::Refresh).with_non_empty("file", None);
        assert!(request.params.is_empty());

        let request = Request::new(Command::Refresh).with_non_empty("file", Some("all"));
        assert_eq!(request.param("file"), Some("all"));
    }

    #[test]
    fn test_duplicate_key_overwrites() {
        let request = Request::new(Command::Defaults)
            .with_param("a", "1")
            .with_param("a", "2");
        assert_eq!(request.params.len(), 1);
        assert_eq!(request.param("a"), Some("2"));
    }
}
