//! Version resolution
//!
//! The version is looked up once, trying each source in order and keeping
//! the first non-empty answer.

use regex::Regex;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// A single way of finding the version
pub type VersionLookup = fn() -> Option<String>;

/// Lookup order: build-time metadata, enclosing app bundle, crate version
pub const VERSION_LOOKUPS: &[VersionLookup] = &[embedded_version, bundle_version, crate_version];

/// Resolve the version using the default lookup order
pub fn resolve_version() -> String {
    resolve_version_with(VERSION_LOOKUPS)
}

/// Resolve the version from the given lookups
pub fn resolve_version_with(lookups: &[VersionLookup]) -> String {
    lookups
        .iter()
        .filter_map(|lookup| lookup())
        .map(|v| v.trim().to_string())
        .find(|v| !v.is_empty())
        .unwrap_or_else(|| crate::VERSION.to_string())
}

/// Version stamped in at build time through `MK_BUNDLE_VERSION`
pub fn embedded_version() -> Option<String> {
    option_env!("MK_BUNDLE_VERSION").map(str::to_string)
}

/// Version of the app bundle mk is installed in (`Marked.app/Contents/Resources/mk`)
pub fn bundle_version() -> Option<String> {
    let exe = env::current_exe().ok()?;
    let root = bundle_root(&exe)?;
    let plist = fs::read_to_string(root.join("Contents").join("Info.plist")).ok()?;
    let version = parse_bundle_version(&plist);
    log::debug!("Bundle {} reports version {:?}", root.display(), version);
    version
}

/// Version of this crate
pub fn crate_version() -> Option<String> {
    Some(crate::VERSION.to_string())
}

/// Root of the bundle enclosing an executable under `Contents/Resources/`
pub fn bundle_root(exe: &Path) -> Option<PathBuf> {
    let path = exe.to_str()?;
    let (root, _) = path.split_once("/Contents/Resources/")?;
    Some(PathBuf::from(root))
}

/// Extract `CFBundleShortVersionString` from an XML property list
pub fn parse_bundle_version(plist: &str) -> Option<String> {
    let re = Regex::new(r"<key>CFBundleShortVersionString</key>\s*<string>([^<]*)</string>").ok()?;
    re.captures(plist)
        .map(|caps| caps[1].trim().to_string())
        .filter(|v| !v.is_empty())
}
