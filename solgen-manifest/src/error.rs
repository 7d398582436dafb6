use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use solgen_document::{DeclarationKind, DocumentError};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Holds the manifest text and filename so error constructors don't need
/// both passed at every call site.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    pub fn unknown_kind_error(&self, kind: impl Into<String>, span: Option<SourceSpan>) -> Box<Error> {
        Box::new(Error::UnknownKind {
            src: self.named_source(),
            span,
            kind: kind.into(),
        })
    }

    pub fn missing_kind_error(&self, index: usize, span: Option<SourceSpan>) -> Box<Error> {
        Box::new(Error::MissingKind {
            src: self.named_source(),
            span,
            index,
        })
    }

    pub fn duplicate_error(
        &self,
        kind: DeclarationKind,
        name: impl Into<String>,
        first_span: Option<SourceSpan>,
        second_span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Duplicate {
            src: self.named_source(),
            first_span,
            second_span,
            kind,
            name: name.into(),
        })
    }

    /// Create a validation error with an optional span.
    pub fn validation_error(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("pass the manifest location with '--config <path>'"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse sol.toml")]
    #[diagnostic(code(solgen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("unknown declaration kind '{kind}'")]
    #[diagnostic(
        code(solgen::unknown_kind),
        help(
            "valid kinds are: contract, interface, library, attribute, struct, mapping, function"
        )
    )]
    UnknownKind {
        #[source_code]
        src: NamedSource<String>,
        #[label("unknown kind")]
        span: Option<SourceSpan>,
        kind: String,
    },

    #[error("declaration #{index} has no kind")]
    #[diagnostic(
        code(solgen::missing_kind),
        help("add a `kind = \"...\"` entry, e.g. kind = \"attribute\"")
    )]
    MissingKind {
        #[source_code]
        src: NamedSource<String>,
        #[label("declared here")]
        span: Option<SourceSpan>,
        index: usize,
    },

    #[error("{kind} '{name}' is declared more than once")]
    #[diagnostic(
        code(solgen::duplicate),
        help("rename one of them, or use `[[replacements]]` to patch the output")
    )]
    Duplicate {
        #[source_code]
        src: NamedSource<String>,
        #[label("first declared here")]
        first_span: Option<SourceSpan>,
        #[label("declared again here")]
        second_span: Option<SourceSpan>,
        kind: DeclarationKind,
        name: String,
    },

    #[error("{message}")]
    #[diagnostic(code(solgen::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error(transparent)]
    #[diagnostic(code(solgen::document))]
    Document(#[from] DocumentError),
}

impl From<DocumentError> for Box<Error> {
    fn from(err: DocumentError) -> Self {
        Box::new(Error::Document(err))
    }
}
