use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Directory names that never hold project sources.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[".git", "node_modules", "__pycache__", ".venv", "venv"];

/// Controls which files the walk yields.
#[derive(Debug, Clone)]
pub struct DiscoveryOptions {
    /// Extensions to scan, without the leading dot (e.g. `py`).
    pub extensions: Vec<String>,
    /// Directory names pruned from the walk, matched against the last path component.
    pub excluded_dirs: Vec<String>,
}

impl Default for DiscoveryOptions {
    fn default() -> Self {
        Self {
            extensions: vec!["py".to_string()],
            excluded_dirs: DEFAULT_EXCLUDED_DIRS.iter().map(|d| d.to_string()).collect(),
        }
    }
}

impl DiscoveryOptions {
    /// Adds more directory names to prune on top of the current ones.
    pub fn with_extra_excludes<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in extra {
            let name = name.into();
            if !self.excluded_dirs.contains(&name) {
                self.excluded_dirs.push(name);
            }
        }
        self
    }

    /// Suffix match on the file name, so a file named just `.py` counts too.
    fn matches_extension(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(OsStr::to_str)
            .map_or(false, |name| {
                self.extensions.iter().any(|ext| {
                    name.len() > ext.len()
                        && name.ends_with(ext.as_str())
                        && name[..name.len() - ext.len()].ends_with('.')
                })
            })
    }
}

/// Returns true when a directory with this name is pruned.
pub fn is_excluded_dir(name: &str, options: &DiscoveryOptions) -> bool {
    options.excluded_dirs.iter().any(|d| d == name)
}

fn is_pruned(entry: &DirEntry, options: &DiscoveryOptions) -> bool {
    // The root is always walked, whatever its name.
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .map_or(false, |name| is_excluded_dir(name, options))
}

/// Recursively collects the source files under `root`, sorted by path.
///
/// Unreadable directories are logged and skipped. When `root` is itself a
/// file it is returned if its extension matches.
pub fn discover_files(root: &Path, options: &DiscoveryOptions) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| !is_pruned(e, options))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::warn!("Skipping unreadable entry: {}", err);
                None
            }
        })
        .filter(|e| e.file_type().is_file())
        .filter(|e| options.matches_extension(e.path()))
        .map(DirEntry::into_path)
        .collect();

    files.sort();
    tracing::debug!("Discovered {} file(s) under {}", files.len(), root.display());
    files
}
