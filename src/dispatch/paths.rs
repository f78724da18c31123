//! Path resolution for file arguments

use directories::BaseDirs;
use std::env;
use std::path::{Component, Path, PathBuf};

/// Directories needed to turn a user-supplied path into an absolute one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathContext {
    /// Base for relative paths
    pub cwd: PathBuf,
    /// Target of a leading `~`
    pub home: Option<PathBuf>,
}

impl PathContext {
    /// Context of the running process
    pub fn from_env() -> Self {
        PathContext {
            cwd: env::current_dir().unwrap_or_else(|_| PathBuf::from("/")),
            home: BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf()),
        }
    }

    /// Set the working directory
    pub fn with_cwd(mut self, cwd: PathBuf) -> Self {
        self.cwd = cwd;
        self
    }

    /// Set the home directory
    pub fn with_home(mut self, home: PathBuf) -> Self {
        self.home = Some(home);
        self
    }

    /// Expand `~`, anchor relative paths at the working directory, then
    /// normalize lexically
    pub fn resolve(&self, raw: &str) -> PathBuf {
        let expanded = match (self.expand_tilde(raw), Path::new(raw).is_absolute()) {
            (Some(path), _) => path,
            (None, true) => PathBuf::from(raw),
            (None, false) => self.cwd.join(raw),
        };
        normalize(&expanded)
    }

    fn expand_tilde(&self, raw: &str) -> Option<PathBuf> {
        let home = self.home.as_ref()?;
        if raw == "~" {
            return Some(home.clone());
        }
        raw.strip_prefix("~/").map(|rest| home.join(rest))
    }
}

/// Remove `.` and `..` components without touching the filesystem
///
/// `..` never climbs above the root of an absolute path.
pub fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// Style name shown in Marked: the file name without directory or extension
pub fn style_display_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
