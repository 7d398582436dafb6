//! sol.toml parsing for solgen.
//!
//! A manifest lists declarations, replacement rules and formatting options.
//! Errors are [`miette`] diagnostics pointing into the source file.
//!
//! ```
//! use solgen_manifest::Manifest;
//!
//! let manifest: Manifest = r#"
//! [[declarations]]
//! kind = "contract"
//! name = "MyContract"
//! is = "ParentContract"
//!
//! [[declarations]]
//! kind = "attribute"
//! name = "attr1"
//! type = "address"
//! "#
//! .parse()?;
//!
//! let rendered = manifest.to_document()?.render()?;
//! assert_eq!(rendered, "contract MyContract is ParentContract {\n\n    address attr1;\n}");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;
mod span;

pub use error::{Error, Result, SourceContext};
pub use manifest::{FormatConfig, IndentSetting, Manifest, Replacement};
