use crate::analyzer::{AnalysisResult, FileReport};
use colored::*;
use std::io::{self, Write};
use std::path::Path;

const RULE_WIDTH: usize = 80;

/// Options for the human-readable report.
#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    /// Print the definition snippet under each occurrence.
    pub show_snippets: bool,
}

/// Turns ANSI styling off for the whole process when `enabled` is false.
/// When true, `colored` keeps its own terminal and environment detection.
pub fn set_color(enabled: bool) {
    if !enabled {
        colored::control::set_override(false);
    }
}

/// Path shown for a file: relative to the scan root when possible.
fn display_path(file: &Path, root: &Path) -> String {
    match file.strip_prefix(root) {
        Ok(rel) if !rel.as_os_str().is_empty() => rel.display().to_string(),
        _ => file.display().to_string(),
    }
}

fn write_file_section<W: Write>(
    out: &mut W,
    report: &FileReport,
    root: &Path,
    options: &ReportOptions,
) -> io::Result<()> {
    writeln!(out, "{}", display_path(&report.file, root).bold())?;

    for group in &report.duplicates {
        writeln!(
            out,
            "   {}",
            format!(
                "Function '{}' appears {} times:",
                group.name,
                group.occurrences.len()
            )
            .yellow()
        )?;

        for (i, occurrence) in group.occurrences.iter().enumerate() {
            // Records are zero-based; people read one-based line numbers.
            writeln!(
                out,
                "      {}. Line {}-{}",
                i + 1,
                occurrence.start_line + 1,
                occurrence.end_line + 1
            )?;

            if options.show_snippets {
                for line in occurrence.definition.lines() {
                    writeln!(out, "         {}", line.dimmed())?;
                }
            }
        }
    }

    writeln!(out)
}

/// Renders `result` as text to `out`.
///
/// The caller owns the sink and decides whether colours are enabled.
pub fn write_report<W: Write>(
    out: &mut W,
    result: &AnalysisResult,
    options: &ReportOptions,
) -> io::Result<()> {
    let summary = &result.analysis_summary;
    let rule = "=".repeat(RULE_WIDTH);

    writeln!(out, "Scanned folder: {}", result.root.display())?;

    if summary.total_files == 0 {
        writeln!(out, "{}", "No source files found in the selected folder.".yellow())?;
        return Ok(());
    }

    writeln!(out, "Found {} source file(s)", summary.total_files)?;
    writeln!(out)?;
    writeln!(out, "{}", rule)?;
    writeln!(out, "{}", "SUMMARY".bold())?;
    writeln!(out, "{}", rule)?;
    writeln!(out, "Total source files scanned: {}", summary.total_files)?;
    writeln!(out, "Files with duplicates: {}", summary.files_with_duplicates)?;
    writeln!(out)?;

    if result.has_duplicates() {
        writeln!(out, "{}", "FILES WITH DUPLICATE FUNCTIONS:".bold())?;
        writeln!(out)?;
        for report in &result.files_with_duplicates {
            write_file_section(out, report, &result.root, options)?;
        }
    }

    if !result.errors.is_empty() {
        writeln!(out, "{}", "FILES THAT COULD NOT BE READ:".red().bold())?;
        for err in &result.errors {
            writeln!(
                out,
                "   {}: {}",
                display_path(&err.file, &result.root),
                err.message
            )?;
        }
        writeln!(out)?;
    }

    if result.has_duplicates() {
        writeln!(
            out,
            "{}",
            format!(
                "Found duplicates in {} file(s) out of {}.",
                summary.files_with_duplicates, summary.total_files
            )
            .red()
        )?;
    } else {
        writeln!(out, "{}", "No duplicate functions found in any files!".green())?;
    }
    writeln!(out, "{}", rule)
}
