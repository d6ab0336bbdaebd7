// Library root: the locator and grouper, plus the walk, analyzer and
// report the binary is built from.

/// Module containing the line-oriented function locator.
/// This finds `def` headers and works out where each body ends.
pub mod locator;

/// Module grouping located functions by name.
/// This includes the `DuplicateGroup` type and `find_duplicates`.
pub mod duplicates;

/// Module containing the directory walk that feeds files to the scanner.
pub mod discovery;

/// Module containing the `DuplicateChecker` that scans a whole tree.
pub mod analyzer;

/// Module rendering analysis results for humans.
pub mod report;

/// Module defining the library error type.
pub mod error;

/// Module containing line helpers shared by the locator.
pub mod utils;

pub use duplicates::{check_source, find_duplicates, DuplicateGroup};
pub use locator::{locate_functions, FunctionRecord};
