//! Text building and formatting utilities for solgen.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`format`] - The formatter collaborator run over rendered text

pub mod builder;
pub mod format;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use format::{BraceFormatter, Formatter, Passthrough};
