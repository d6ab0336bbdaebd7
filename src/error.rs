use std::path::PathBuf;

/// Errors raised while feeding files to the scanner.
///
/// The scanner itself never fails; only the file system around it can.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// The path given to the analyzer does not exist.
    #[error("Path does not exist: {}", .0.display())]
    RootNotFound(PathBuf),

    /// A single file could not be read as UTF-8 text.
    #[error("Error reading file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
