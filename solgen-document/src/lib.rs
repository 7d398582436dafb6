//! Declaration store and renderer for solgen.
//!
//! A [`Document`] holds an ordered set of declarations (containers,
//! attributes, structs, mappings, functions) and renders them to Solidity
//! source. Declarations are identified by kind and name; insertion order is
//! render order.
//!
//! ```
//! use solgen_document::{Attribute, Container, Document};
//!
//! let mut doc = Document::new();
//! doc.add_container(Container::new("MyContract").is("ParentContract"))?;
//! doc.add_attribute(Attribute::new("attr1", "address"))?;
//!
//! assert_eq!(
//!     doc.render()?,
//!     "contract MyContract is ParentContract {\n\n    address attr1;\n}"
//! );
//! # Ok::<(), solgen_document::DocumentError>(())
//! ```

mod comment;
mod document;
mod error;
mod render;
mod replace;
mod shared;

pub use comment::WORDS_PER_LINE;
pub use document::Document;
pub use error::{DocumentError, Result};
pub use replace::Replacements;
pub use shared::SharedDocument;
// Re-exported so callers only need this crate to build documents.
pub use solgen_codegen::{BraceFormatter, Formatter, Indent, Passthrough};
pub use solgen_ir::{
    Attribute, AttributePatch, Container, ContainerKind, ContainerPatch, Declaration,
    DeclarationKey, DeclarationKind, Function, FunctionPatch, Mapping, MappingPatch, Param,
    Struct, StructPatch, Value,
};
