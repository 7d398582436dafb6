//! Formatting of rendered source text.
//!
//! The renderer emits flat, unindented text. A [`Formatter`] turns it into
//! the final output. Formatters may change whitespace but must leave brace
//! structure and line content intact.

use tracing::trace;

use crate::builder::{CodeBuilder, Indent};

/// Pretty-printer run over fully rendered text.
pub trait Formatter: Send + Sync {
    /// Format `raw` and return the result.
    fn format(&self, raw: &str) -> String;
}

/// Returns the text unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl Formatter for Passthrough {
    fn format(&self, raw: &str) -> String {
        raw.to_string()
    }
}

/// Re-indents every line by its brace depth.
///
/// Each line is trimmed and indented one level per unclosed `{` above it. A
/// line starting with `}` is outdented before it is written. Braces inside
/// string literals and comments are ignored. Blank lines are kept and
/// trailing whitespace at the end of the text is dropped.
///
/// # Example
///
/// ```
/// use solgen_codegen::{BraceFormatter, Formatter};
///
/// let out = BraceFormatter::default().format("contract A {\n\nuint x;\n}");
/// assert_eq!(out, "contract A {\n\n    uint x;\n}");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BraceFormatter {
    indent: Indent,
}

impl BraceFormatter {
    pub fn new(indent: Indent) -> Self {
        Self { indent }
    }

    pub fn indent(&self) -> Indent {
        self.indent
    }
}

impl Formatter for BraceFormatter {
    fn format(&self, raw: &str) -> String {
        let mut builder = CodeBuilder::new(self.indent);
        let mut scanner = BraceScanner::default();
        let mut depth = 0usize;

        for line in raw.lines() {
            let line = line.trim();
            if line.is_empty() {
                builder.push_blank();
                continue;
            }

            let counts = scanner.scan(line);
            builder
                .set_indent_level(depth.saturating_sub(counts.leading_closes))
                .push_line(line);
            depth = (depth + counts.opens).saturating_sub(counts.closes);
        }

        if depth > 0 {
            trace!(depth, "unbalanced braces left open after formatting");
        }

        builder.build().trim_end().to_string()
    }
}

/// Brace counts for one line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct BraceCounts {
    opens: usize,
    closes: usize,
    /// `}` seen before anything else on the line.
    leading_closes: usize,
}

/// Line-by-line brace counter that skips strings and comments.
///
/// Block comments may span lines, so the scanner keeps that state between
/// calls. String literals cannot span lines and are closed at end of line.
#[derive(Debug, Default)]
struct BraceScanner {
    in_block_comment: bool,
}

impl BraceScanner {
    fn scan(&mut self, line: &str) -> BraceCounts {
        let mut counts = BraceCounts::default();
        let mut leading = true;
        let mut quote: Option<char> = None;
        let mut chars = line.chars().peekable();

        while let Some(c) = chars.next() {
            if self.in_block_comment {
                if c == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    self.in_block_comment = false;
                }
                continue;
            }

            if let Some(q) = quote {
                if c == '\\' {
                    chars.next();
                } else if c == q {
                    quote = None;
                }
                continue;
            }

            match c {
                '/' if chars.peek() == Some(&'/') => break,
                '/' if chars.peek() == Some(&'*') => {
                    chars.next();
                    self.in_block_comment = true;
                    leading = false;
                }
                '"' | '\'' => {
                    quote = Some(c);
                    leading = false;
                }
                '{' => {
                    counts.opens += 1;
                    leading = false;
                }
                '}' => {
                    counts.closes += 1;
                    if leading {
                        counts.leading_closes += 1;
                    }
                }
                c if c.is_whitespace() => {}
                _ => leading = false,
            }
        }

        counts
    }
}
