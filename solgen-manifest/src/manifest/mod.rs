//! Manifest types and parsing for sol.toml files.

mod decode;
mod format;
mod parse;

pub use format::{FormatConfig, IndentSetting};
use serde::Deserialize;
use solgen_document::{BraceFormatter, Declaration, Document};
use tracing::debug;

use crate::Result;

/// Root manifest for sol.toml
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    /// Output formatting options
    pub format: FormatConfig,

    /// Declarations in file order
    pub declarations: Vec<Declaration>,

    /// Literal replacement rules in file order
    pub replacements: Vec<Replacement>,
}

/// A `[[replacements]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Replacement {
    pub from: String,
    pub to: String,
}

impl Manifest {
    /// Build a document from the manifest.
    ///
    /// Declarations are added in file order, followed by the replacement
    /// rules. The document formats with the configured indentation.
    pub fn to_document(&self) -> Result<Document> {
        let mut document = Document::new().with_formatter(BraceFormatter::new(self.format.indent()));
        for declaration in &self.declarations {
            document.add(declaration.clone())?;
        }
        for replacement in &self.replacements {
            document.add_replacement(&replacement.from, &replacement.to);
        }
        debug!(
            declarations = document.len(),
            replacements = self.replacements.len(),
            "built document from manifest"
        );
        Ok(document)
    }
}
