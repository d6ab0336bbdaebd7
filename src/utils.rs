/// A single line of source text, pre-split into the pieces the locator needs.
///
/// Indentation is the raw count of leading whitespace characters. Tabs count
/// as one character each; there is no tab-width normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLine<'a> {
    /// The line exactly as it appeared in the input, without the `\n`.
    pub raw: &'a str,
    /// The line with surrounding whitespace removed.
    pub trimmed: &'a str,
    /// Number of leading whitespace characters.
    pub indent: usize,
}

impl<'a> SourceLine<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self {
            raw,
            trimmed: raw.trim(),
            indent: indent_width(raw),
        }
    }

    /// Blank lines and full-line `#` comments never decide where a block ends.
    pub fn is_blank_or_comment(&self) -> bool {
        self.trimmed.is_empty() || self.trimmed.starts_with('#')
    }
}

/// Splits `source` on `\n` only, keeping zero-based numbering.
///
/// An empty input still yields one (empty) line, and a trailing newline
/// yields a trailing empty line. A `\r` before the newline stays on the raw
/// line and disappears once trimmed. A leading byte order mark is dropped
/// so it cannot hide a header on the first line.
pub fn split_lines(source: &str) -> Vec<SourceLine<'_>> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    source.split('\n').map(SourceLine::new).collect()
}

/// Counts leading whitespace characters (not bytes).
pub fn indent_width(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}
