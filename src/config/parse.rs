//! Configuration file discovery and parsing

use crate::config::types::Config;
use crate::error::{ConfigError, ConfigResult};
use directories::BaseDirs;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "MK_CONFIG";

/// Environment variable overriding the URL scheme
pub const SCHEME_ENV: &str = "MK_URL_SCHEME";

/// Environment variable overriding the pasteboard name
pub const PASTEBOARD_ENV: &str = "MK_PASTEBOARD";

/// Configuration file names searched for in the config directory
const CONFIG_FILE_NAMES: &[&str] = &["config.yml", "config.yaml"];

/// Per-user configuration directory (`~/.config/mk` on Linux,
/// `~/Library/Application Support/mk` on macOS)
pub fn default_config_dir() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.config_dir().join("mk"))
}

/// Find a configuration file in a directory
pub fn find_config_file_in(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

/// Parse configuration from a string
pub fn parse_config(yaml: &str, config_path: &Path) -> ConfigResult<Config> {
    if yaml.trim().is_empty() {
        return Ok(Config::default());
    }

    serde_yaml::from_str(yaml).map_err(|e| ConfigError::Invalid {
        path: config_path.to_path_buf(),
        error: e.to_string(),
    })
}

/// Parse a configuration file from a path
pub fn parse_config_file(path: &Path) -> ConfigResult<Config> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let contents = fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.to_path_buf(),
        error: e.to_string(),
    })?;

    parse_config(&contents, path)
}

/// Apply environment overrides using the given lookup function
pub fn apply_env_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(scheme) = lookup(SCHEME_ENV).filter(|s| !s.is_empty()) {
        config.url_scheme = scheme;
    }
    if let Some(pasteboard) = lookup(PASTEBOARD_ENV).filter(|s| !s.is_empty()) {
        config.pasteboard = pasteboard;
    }
    config
}

/// Load configuration from `$MK_CONFIG`, the user config directory, or defaults
pub fn load_config() -> ConfigResult<Config> {
    let config_path = match env::var_os(CONFIG_ENV) {
        Some(path) if !path.is_empty() => Some(PathBuf::from(path)),
        _ => default_config_dir().and_then(|dir| find_config_file_in(&dir)),
    };

    let config = match config_path {
        Some(path) => {
            log::debug!("Loading config from {}", path.display());
            parse_config_file(&path)?
        }
        None => {
            log::debug!("No config file found, using defaults");
            Config::default()
        }
    };

    Ok(apply_env_overrides(config, |key| env::var(key).ok()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_PASTEBOARD;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
url_scheme: x-marked
pasteboard: customBoard
"#;
        let config = parse_config(yaml, Path::new("config.yml")).unwrap();
        assert_eq!(config.url_scheme, "x-marked");
        assert_eq!(config.pasteboard, "customBoard");
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = parse_config("url_scheme: x-marked\n", Path::new("config.yml")).unwrap();
        assert_eq!(config.url_scheme, "x-marked");
        assert_eq!(config.pasteboard, DEFAULT_PASTEBOARD);
    }

    #[test]
    fn test_empty_config_is_default() {
        let config = parse_config("  \n", Path::new("config.yml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_unknown_field_is_invalid() {
        let result = parse_config("scheme: x-marked\n", Path::new("config.yml"));
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_find_config_file() {
        let temp_dir = TempDir::new().unwrap();
        assert!(find_config_file_in(temp_dir.path()).is_none());

        let config_path = temp_dir.path().join("config.yaml");
        fs::write(&config_path, "pasteboard: other\n").unwrap();

        let found = find_config_file_in(temp_dir.path()).unwrap();
        assert_eq!(found, config_path);
        assert_eq!(parse_config_file(&found).unwrap().pasteboard, "other");
    }

    #[test]
    fn test_missing_explicit_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nope.yml");
        assert!(matches!(
            parse_config_file(&path),
            Err(ConfigError::NotFound(_))
        ));
    }

    #[test]
    fn test_env_overrides() {
        let mut env = HashMap::new();
        env.insert(SCHEME_ENV, "x-marked-dev".to_string());
        env.insert(PASTEBOARD_ENV, String::new());

        let config = apply_env_overrides(Config::default(), |key| env.get(key).cloned());
        assert_eq!(config.url_scheme, "x-marked-dev");
        assert_eq!(config.pasteboard, DEFAULT_PASTEBOARD);
    }
}
