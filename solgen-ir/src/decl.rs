//! Declaration records.
//!
//! Every record shares `name`, `comment` and `line_break`. Builder methods
//! follow the consuming style (`Attribute::new(..).modifier(..)`).

use serde::{Deserialize, Serialize};

use crate::types::{ContainerKind, DeclarationKey, DeclarationKind, Value};

/// A top-level block (`contract`, `interface` or `library`).
///
/// Containers carry no `line_break`: their header always ends with a blank line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    pub name: String,
    #[serde(default)]
    pub kind: ContainerKind,
    /// Single inheritance parent, emitted as `is <parent>`.
    #[serde(default, alias = "is")]
    pub parent: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
}

impl Container {
    /// Create a new `contract` container.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ContainerKind::Contract,
            parent: None,
            comment: None,
        }
    }

    /// Create a new `interface` container.
    pub fn interface(name: impl Into<String>) -> Self {
        Self::new(name).kind(ContainerKind::Interface)
    }

    /// Create a new `library` container.
    pub fn library(name: impl Into<String>) -> Self {
        Self::new(name).kind(ContainerKind::Library)
    }

    pub fn kind(mut self, kind: ContainerKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the inheritance parent.
    pub fn is(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// A state variable: `<type> [<modifier> ]<name>[ = <value>];`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    #[serde(rename = "type", default)]
    pub ty: String,
    #[serde(default)]
    pub modifier: Option<String>,
    #[serde(default)]
    pub value: Option<Value>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub line_break: bool,
}

impl Attribute {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            modifier: None,
            value: None,
            comment: None,
            line_break: false,
        }
    }

    pub fn modifier(mut self, modifier: impl Into<String>) -> Self {
        self.modifier = Some(modifier.into());
        self
    }

    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Emit a blank line after this declaration.
    pub fn line_break(mut self) -> Self {
        self.line_break = true;
        self
    }
}

/// A struct type made of attribute-shaped members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Struct {
    pub name: String,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub line_break: bool,
}

impl Struct {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            comment: None,
            line_break: false,
        }
    }

    /// Add a member.
    pub fn attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Add multiple members.
    pub fn attributes(mut self, attributes: impl IntoIterator<Item = Attribute>) -> Self {
        self.attributes.extend(attributes);
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn line_break(mut self) -> Self {
        self.line_break = true;
        self
    }
}

/// A mapping: `mapping (<key> => <value>) [<modifier> ]<name>;`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mapping {
    pub name: String,
    #[serde(default)]
    pub key_type: String,
    #[serde(default)]
    pub value_type: String,
    #[serde(default)]
    pub modifier: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub line_break: bool,
}

impl Mapping {
    pub fn new(
        name: impl Into<String>,
        key_type: impl Into<String>,
        value_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            key_type: key_type.into(),
            value_type: value_type.into(),
            modifier: None,
            comment: None,
            line_break: false,
        }
    }

    pub fn modifier(mut self, modifier: impl Into<String>) -> Self {
        self.modifier = Some(modifier.into());
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn line_break(mut self) -> Self {
        self.line_break = true;
        self
    }
}

/// A function parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    pub name: String,
    #[serde(rename = "type", default)]
    pub ty: String,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// A function with an opaque body.
///
/// The body is copied verbatim between the braces; it is never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Function {
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<Param>,
    #[serde(default)]
    pub return_type: Option<String>,
    #[serde(default)]
    pub modifier: Option<String>,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub line_break: bool,
}

impl Function {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            return_type: None,
            modifier: None,
            body: String::new(),
            comment: None,
            line_break: false,
        }
    }

    pub fn param(mut self, param: Param) -> Self {
        self.parameters.push(param);
        self
    }

    pub fn params(mut self, params: impl IntoIterator<Item = Param>) -> Self {
        self.parameters.extend(params);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    pub fn modifier(mut self, modifier: impl Into<String>) -> Self {
        self.modifier = Some(modifier.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn line_break(mut self) -> Self {
        self.line_break = true;
        self
    }
}

/// Any declaration a document can hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    Container(Container),
    Attribute(Attribute),
    Struct(Struct),
    Mapping(Mapping),
    Function(Function),
}

impl Declaration {
    pub fn kind(&self) -> DeclarationKind {
        match self {
            Declaration::Container(_) => DeclarationKind::Container,
            Declaration::Attribute(_) => DeclarationKind::Attribute,
            Declaration::Struct(_) => DeclarationKind::Struct,
            Declaration::Mapping(_) => DeclarationKind::Mapping,
            Declaration::Function(_) => DeclarationKind::Function,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Declaration::Container(c) => &c.name,
            Declaration::Attribute(a) => &a.name,
            Declaration::Struct(s) => &s.name,
            Declaration::Mapping(m) => &m.name,
            Declaration::Function(f) => &f.name,
        }
    }

    /// The kind+name pair identifying this declaration.
    pub fn key(&self) -> DeclarationKey {
        DeclarationKey::new(self.kind(), self.name())
    }

    pub fn comment(&self) -> Option<&str> {
        match self {
            Declaration::Container(c) => c.comment.as_deref(),
            Declaration::Attribute(a) => a.comment.as_deref(),
            Declaration::Struct(s) => s.comment.as_deref(),
            Declaration::Mapping(m) => m.comment.as_deref(),
            Declaration::Function(f) => f.comment.as_deref(),
        }
    }

    pub fn line_break(&self) -> bool {
        match self {
            // The container header is always followed by a blank line.
            Declaration::Container(_) => false,
            Declaration::Attribute(a) => a.line_break,
            Declaration::Struct(s) => s.line_break,
            Declaration::Mapping(m) => m.line_break,
            Declaration::Function(f) => f.line_break,
        }
    }

    pub fn is_container(&self) -> bool {
        matches!(self, Declaration::Container(_))
    }
}

impl From<Container> for Declaration {
    fn from(c: Container) -> Self {
        Self::Container(c)
    }
}

impl From<Attribute> for Declaration {
    fn from(a: Attribute) -> Self {
        Self::Attribute(a)
    }
}

impl From<Struct> for Declaration {
    fn from(s: Struct) -> Self {
        Self::Struct(s)
    }
}

impl From<Mapping> for Declaration {
    fn from(m: Mapping) -> Self {
        Self::Mapping(m)
    }
}

impl From<Function> for Declaration {
    fn from(f: Function) -> Self {
        Self::Function(f)
    }
}
