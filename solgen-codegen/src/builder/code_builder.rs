//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Indent, Renderable};

/// Mutable API for building code with proper indentation.
///
/// # Example
///
/// ```
/// use solgen_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::solidity();
/// builder
///     .push_line("contract Token {")
///     .set_indent_level(1)
///     .push_line("uint256 total;")
///     .set_indent_level(0)
///     .push_line("}");
///
/// assert_eq!(builder.build(), "contract Token {\n    uint256 total;\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 4-space indentation.
    pub fn solidity() -> Self {
        Self::new(Indent::SOLIDITY)
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (no indentation).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Add raw text without indentation or newline.
    pub fn push_raw(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self
    }

    /// Jump straight to an indentation level.
    pub fn set_indent_level(&mut self, level: usize) -> &mut Self {
        self.indent_level = level;
        self
    }

    /// Add a `//` line comment.
    pub fn push_comment(&mut self, text: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str("// ");
        self.buffer.push_str(text);
        self.buffer.push('\n');
        self
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Comment(text) => {
                self.push_comment(&text);
            }
        }
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let mut builder = CodeBuilder::solidity();
        builder.push_line("uint256 x;");
        assert_eq!(builder.build(), "uint256 x;\n");
    }

    #[test]
    fn test_blank_is_not_indented() {
        let mut builder = CodeBuilder::solidity();
        builder
            .set_indent_level(1)
            .push_line("a;")
            .push_blank()
            .push_line("b;");
        assert_eq!(builder.build(), "    a;\n\n    b;\n");
    }

    #[test]
    fn test_raw_has_no_newline() {
        let mut builder = CodeBuilder::solidity();
        builder.set_indent_level(1).push_line("x;").push_raw("}");
        assert_eq!(builder.build(), "    x;\n}");
    }

    #[test]
    fn test_set_indent_level() {
        let mut builder = CodeBuilder::new(Indent::Spaces(2));
        builder.set_indent_level(2).push_line("x;");
        assert_eq!(builder.build(), "    x;\n");
    }

    #[test]
    fn test_tab_indent() {
        let mut builder = CodeBuilder::new(Indent::Tab);
        builder.set_indent_level(1).push_comment("note");
        assert_eq!(builder.build(), "\t// note\n");
    }

    #[test]
    fn test_emit_with_fragments() {
        struct SimpleNode;
        impl Renderable for SimpleNode {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![
                    CodeFragment::comment("comment"),
                    CodeFragment::line("address owner;"),
                    CodeFragment::blank(),
                ]
            }
        }

        let mut builder = CodeBuilder::solidity();
        builder.emit(&SimpleNode);
        assert_eq!(builder.build(), "// comment\naddress owner;\n\n");
    }
}
