use crate::utils::{split_lines, SourceLine};
use regex::Regex;
use serde::Serialize;

/// Maximum number of lines kept in [`FunctionRecord::definition`].
pub const SNIPPET_LINES: usize = 5;

lazy_static::lazy_static! {
    /// Matches a function header on an already trimmed line.
    /// Capture group 1 is the function name.
    static ref DEF_HEADER: Regex = Regex::new(r"^def\s+([a-zA-Z_][a-zA-Z0-9_]*)\s*\(").unwrap();
}

/// One function definition found in a block of source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionRecord {
    /// The function name.
    pub name: String,
    /// Zero-based line holding the `def` keyword.
    pub start_line: usize,
    /// Zero-based last line of the body, inclusive.
    pub end_line: usize,
    /// The first few lines of the function, trimmed. Display only.
    pub definition: String,
}

/// Returns the function name if `trimmed` is a function header.
pub fn header_name(trimmed: &str) -> Option<&str> {
    DEF_HEADER
        .captures(trimmed)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// A line at or left of the header's indentation that opens another
/// function or class ends the current body.
fn is_boundary(line: &SourceLine<'_>, header_indent: usize) -> bool {
    line.indent <= header_indent
        && (line.trimmed.starts_with("def ") || line.trimmed.starts_with("class "))
}

/// Finds the inclusive last line of the body whose header sits on `start`.
///
/// Every visited line advances the end, blank and comment lines included.
/// Only a boundary line stops the scan, and it is excluded.
fn find_end_line(lines: &[SourceLine<'_>], start: usize) -> usize {
    let header_indent = lines[start].indent;
    let mut end_line = start;

    for (idx, line) in lines.iter().enumerate().skip(start + 1) {
        if !line.is_blank_or_comment() && is_boundary(line, header_indent) {
            return idx - 1;
        }
        end_line = idx;
    }

    end_line
}

fn snippet(lines: &[SourceLine<'_>], start: usize, end_line: usize) -> String {
    let stop = (start + SNIPPET_LINES).min(end_line + 1);
    lines[start..stop]
        .iter()
        .map(|line| line.raw)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Scans `source` line by line and returns every function definition in
/// source order.
///
/// This is a heuristic: indentation stands in for scope, and lines that do
/// not look like a header are skipped without error. Every header is
/// examined on its own, so nested definitions and a header that closes the
/// previous function are both reported.
pub fn locate_functions(source: &str) -> Vec<FunctionRecord> {
    let lines = split_lines(source);
    let mut functions = Vec::new();

    for (start, line) in lines.iter().enumerate() {
        let Some(name) = header_name(line.trimmed) else {
            continue;
        };

        let end_line = find_end_line(&lines, start);
        functions.push(FunctionRecord {
            name: name.to_string(),
            start_line: start,
            end_line,
            definition: snippet(&lines, start, end_line),
        });
    }

    functions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_matching() {
        assert_eq!(header_name("def foo():"), Some("foo"));
        assert_eq!(header_name("def  _bar2 (x):"), Some("_bar2"));
        assert_eq!(header_name("def\tbaz(self):"), Some("baz"));
        assert_eq!(header_name("def 1abc():"), None);
        assert_eq!(header_name("def foo"), None);
        assert_eq!(header_name("define(x)"), None);
        assert_eq!(header_name("# def fake("), None);
        assert_eq!(header_name("async def foo():"), None);
    }

    #[test]
    fn test_boundary_needs_keyword_and_space() {
        let line = SourceLine::new("    def other():");
        assert!(is_boundary(&line, 4));
        assert!(!is_boundary(&line, 3));
        assert!(!is_boundary(&SourceLine::new("    return x"), 4));
        assert!(!is_boundary(&SourceLine::new("default = 1"), 0));
    }

    #[test]
    fn test_snippet_is_bounded() {
        let source = "def long():\n    a = 1\n    b = 2\n    c = 3\n    d = 4\n    e = 5\n    f = 6";
        let functions = locate_functions(source);

        assert_eq!(functions.len(), 1);
        assert_eq!(functions[0].end_line, 6);
        assert_eq!(functions[0].definition.lines().count(), SNIPPET_LINES);
        assert!(functions[0].definition.starts_with("def long():"));
        assert!(functions[0].definition.ends_with("d = 4"));
    }
}
