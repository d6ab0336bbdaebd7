use crate::discovery::{discover_files, DiscoveryOptions};
use crate::duplicates::{find_duplicates, DuplicateGroup};
use crate::error::ScanError;
use crate::locator::locate_functions;
use anyhow::Result;
use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Duplicate functions found in one file.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    /// Path of the scanned file.
    pub file: PathBuf,
    /// Number of function definitions located in the file.
    pub functions: usize,
    /// Names defined more than once, in first-seen order.
    pub duplicates: Vec<DuplicateGroup>,
}

impl FileReport {
    pub fn has_duplicates(&self) -> bool {
        !self.duplicates.is_empty()
    }
}

/// A file that could not be scanned.
#[derive(Debug, Clone, Serialize)]
pub struct FileError {
    pub file: PathBuf,
    pub message: String,
}

/// Holds the results of the analysis.
/// This struct is serialized to JSON if requested.
#[derive(Debug, Serialize)]
pub struct AnalysisResult {
    /// The path the scan started from.
    pub root: PathBuf,
    /// Files with at least one duplicate group, sorted by path.
    pub files_with_duplicates: Vec<FileReport>,
    /// Files that could not be read.
    pub errors: Vec<FileError>,
    /// Summary statistics of the analysis.
    pub analysis_summary: AnalysisSummary,
}

/// Summary statistics for the analysis result.
#[derive(Debug, Serialize)]
pub struct AnalysisSummary {
    /// Total number of files discovered.
    pub total_files: usize,
    /// Number of files containing at least one duplicate.
    pub files_with_duplicates: usize,
    /// Total number of duplicate groups across all files.
    pub duplicate_names: usize,
    /// Number of files that could not be read.
    pub errors: usize,
}

impl AnalysisResult {
    pub fn has_duplicates(&self) -> bool {
        !self.files_with_duplicates.is_empty()
    }

    /// True when the run should end with a failing exit status.
    pub fn exit_failure(&self, fail_on_duplicates: bool) -> bool {
        fail_on_duplicates && self.has_duplicates()
    }
}

/// Scans a file tree for functions defined more than once per file.
pub struct DuplicateChecker {
    /// Which files to scan.
    pub discovery: DiscoveryOptions,
}

impl Default for DuplicateChecker {
    fn default() -> Self {
        Self::new(DiscoveryOptions::default())
    }
}

impl DuplicateChecker {
    pub fn new(discovery: DiscoveryOptions) -> Self {
        Self { discovery }
    }

    /// Runs the scan on `text` as if it were the contents of `path`.
    pub fn analyze_source(&self, path: &Path, text: &str) -> FileReport {
        let functions = locate_functions(text);
        let duplicates = find_duplicates(&functions);
        tracing::debug!(
            "{}: {} function(s), {} duplicate name(s)",
            path.display(),
            functions.len(),
            duplicates.len()
        );

        FileReport {
            file: path.to_path_buf(),
            functions: functions.len(),
            duplicates,
        }
    }

    fn analyze_file(&self, path: &Path) -> Result<FileReport, ScanError> {
        let text = fs::read_to_string(path).map_err(|source| ScanError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.analyze_source(path, &text))
    }

    /// Runs the analysis on the specified path.
    ///
    /// Files are discovered, then read and scanned in parallel with `rayon`.
    /// A file that cannot be read is recorded in `errors` and the rest of
    /// the scan carries on. The only hard failure is a missing `root`.
    pub fn analyze(&self, root: &Path) -> Result<AnalysisResult> {
        if !root.exists() {
            return Err(ScanError::RootNotFound(root.to_path_buf()).into());
        }

        let files = discover_files(root, &self.discovery);
        let total_files = files.len();

        let outcomes: Vec<Result<FileReport, ScanError>> =
            files.par_iter().map(|path| self.analyze_file(path)).collect();

        let mut files_with_duplicates = Vec::new();
        let mut errors = Vec::new();

        for outcome in outcomes {
            match outcome {
                Ok(report) if report.has_duplicates() => files_with_duplicates.push(report),
                Ok(_) => {}
                Err(err) => {
                    tracing::warn!("{}", err);
                    if let ScanError::Read { path, source } = err {
                        errors.push(FileError {
                            file: path,
                            message: source.to_string(),
                        });
                    }
                }
            }
        }

        // par_iter().collect() keeps input order, but sort anyway so the
        // report never depends on it.
        files_with_duplicates.sort_by(|a, b| a.file.cmp(&b.file));
        errors.sort_by(|a, b| a.file.cmp(&b.file));

        let duplicate_names = files_with_duplicates
            .iter()
            .map(|r| r.duplicates.len())
            .sum();

        Ok(AnalysisResult {
            root: root.to_path_buf(),
            analysis_summary: AnalysisSummary {
                total_files,
                files_with_duplicates: files_with_duplicates.len(),
                duplicate_names,
                errors: errors.len(),
            },
            files_with_duplicates,
            errors,
        })
    }
}
