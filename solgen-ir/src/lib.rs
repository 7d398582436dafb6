//! Declaration model for the solgen Solidity source builder.
//!
//! This crate holds the typed records a document is made of. They carry no
//! rendering logic and perform no validation; a record missing a required
//! piece (an empty type, say) is stored as-is and rendered as-is.
//!
//! # Architecture
//!
//! ```text
//! sol.toml / API calls → solgen-ir (records, patches) → solgen-document (store, render)
//! ```

mod decl;
mod patch;
mod types;

pub use decl::{Attribute, Container, Declaration, Function, Mapping, Param, Struct};
pub use patch::{AttributePatch, ContainerPatch, FunctionPatch, MappingPatch, StructPatch};
pub use types::{ContainerKind, DeclarationKey, DeclarationKind, Value};
