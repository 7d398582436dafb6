//! Core type definitions.

use std::fmt::{self, Write as _};

use serde::{Deserialize, Serialize};

/// Tag identifying the kind of a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DeclarationKind {
    Container,
    Attribute,
    Struct,
    Mapping,
    Function,
}

impl DeclarationKind {
    /// Get the lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclarationKind::Container => "container",
            DeclarationKind::Attribute => "attribute",
            DeclarationKind::Struct => "struct",
            DeclarationKind::Mapping => "mapping",
            DeclarationKind::Function => "function",
        }
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of a declaration inside a document.
///
/// Names are unique within a kind, so an attribute and a function may share
/// a name without clashing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeclarationKey {
    pub kind: DeclarationKind,
    pub name: String,
}

impl DeclarationKey {
    pub fn new(kind: DeclarationKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }
}

impl fmt::Display for DeclarationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.kind, self.name)
    }
}

/// Keyword a container opens its block with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerKind {
    #[default]
    Contract,
    Interface,
    Library,
}

impl ContainerKind {
    /// All container kinds, in keyword order.
    pub const ALL: [ContainerKind; 3] = [
        ContainerKind::Contract,
        ContainerKind::Interface,
        ContainerKind::Library,
    ];

    /// The keyword emitted before the container name.
    pub fn keyword(&self) -> &'static str {
        match self {
            ContainerKind::Contract => "contract",
            ContainerKind::Interface => "interface",
            ContainerKind::Library => "library",
        }
    }

    /// Look up a container kind by its keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.keyword() == keyword)
    }
}

/// Initial value of an attribute.
///
/// `Text` is quoted and escaped when rendered; every other variant is
/// emitted bare, so a pre-quoted string or an expression like `msg.sender`
/// goes in `Literal`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Integer(i64),
    Text(String),
    Literal { literal: String },
}

impl Value {
    /// A string value, rendered in double quotes.
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// A bare value, rendered verbatim.
    pub fn literal(s: impl Into<String>) -> Self {
        Self::Literal { literal: s.into() }
    }

    /// Whether rendering this value produces nothing.
    ///
    /// Empty strings count as absent, numbers and booleans never do.
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Text(s) | Value::Literal { literal: s } => s.is_empty(),
            Value::Bool(_) | Value::Integer(_) => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Integer(n) => write!(f, "{}", n),
            Value::Text(s) => {
                f.write_char('"')?;
                for c in s.chars() {
                    match c {
                        '"' => f.write_str("\\\"")?,
                        '\\' => f.write_str("\\\\")?,
                        '\n' => f.write_str("\\n")?,
                        '\r' => f.write_str("\\r")?,
                        '\t' => f.write_str("\\t")?,
                        c => f.write_char(c)?,
                    }
                }
                f.write_char('"')
            }
            Value::Literal { literal } => f.write_str(literal),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}
