//! Rendering of a declaration sequence to unformatted text.

mod nodes;

use solgen_codegen::CodeBuilder;
use solgen_ir::Declaration;
use tracing::debug;

use crate::{DocumentError, Result};
use nodes::Node;

/// Render declarations in order into one flat text blob.
///
/// Each container opens a segment; the next container closes it first. The
/// final segment is closed with a bare `}` and no trailing newline.
pub(crate) fn render<'a>(declarations: impl IntoIterator<Item = &'a Declaration>) -> Result<String> {
    let mut declarations = declarations.into_iter().peekable();

    match declarations.peek() {
        Some(first) if first.is_container() => {}
        first => {
            return Err(DocumentError::Structural {
                first: first.map(|d| d.key()),
            });
        }
    }

    let mut builder = CodeBuilder::solidity();
    let mut segments = 0usize;
    for declaration in declarations {
        if declaration.is_container() {
            if segments > 0 {
                builder.push_line("}").push_blank();
            }
            segments += 1;
        }
        builder.emit(&Node(declaration));
    }
    builder.push_raw("}");

    debug!(segments, "rendered declarations");
    Ok(builder.build())
}
