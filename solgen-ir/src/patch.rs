//! Partial updates to declarations.
//!
//! A patch names its target and carries only the fields to overwrite.
//! Fields left as `None` keep their current value. Optional record fields
//! use `Option<Option<T>>` so a patch can clear them (`Some(None)`), which is
//! different from not mentioning them at all.

use crate::{
    decl::{Attribute, Container, Function, Mapping, Param, Struct},
    types::{ContainerKind, Value},
};

/// Overwrite `target` with `value` if the patch mentions it.
fn set<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}

/// Patch for a [`Container`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerPatch {
    pub name: String,
    pub kind: Option<ContainerKind>,
    pub parent: Option<Option<String>>,
    pub comment: Option<Option<String>>,
}

impl ContainerPatch {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn kind(mut self, kind: ContainerKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn is(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(Some(parent.into()));
        self
    }

    /// Drop the inheritance parent.
    pub fn clear_parent(mut self) -> Self {
        self.parent = Some(None);
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(Some(comment.into()));
        self
    }

    pub fn clear_comment(mut self) -> Self {
        self.comment = Some(None);
        self
    }

    pub fn apply(self, target: &mut Container) {
        set(&mut target.kind, self.kind);
        set(&mut target.parent, self.parent);
        set(&mut target.comment, self.comment);
    }
}

/// Patch for an [`Attribute`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributePatch {
    pub name: String,
    pub ty: Option<String>,
    pub modifier: Option<Option<String>>,
    pub value: Option<Option<Value>>,
    pub comment: Option<Option<String>>,
    pub line_break: Option<bool>,
}

impl AttributePatch {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn ty(mut self, ty: impl Into<String>) -> Self {
        self.ty = Some(ty.into());
        self
    }

    pub fn modifier(mut self, modifier: impl Into<String>) -> Self {
        self.modifier = Some(Some(modifier.into()));
        self
    }

    pub fn clear_modifier(mut self) -> Self {
        self.modifier = Some(None);
        self
    }

    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(Some(value.into()));
        self
    }

    pub fn clear_value(mut self) -> Self {
        self.value = Some(None);
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(Some(comment.into()));
        self
    }

    pub fn clear_comment(mut self) -> Self {
        self.comment = Some(None);
        self
    }

    pub fn line_break(mut self, line_break: bool) -> Self {
        self.line_break = Some(line_break);
        self
    }

    pub fn apply(self, target: &mut Attribute) {
        set(&mut target.ty, self.ty);
        set(&mut target.modifier, self.modifier);
        set(&mut target.value, self.value);
        set(&mut target.comment, self.comment);
        set(&mut target.line_break, self.line_break);
    }
}

/// Patch for a [`Struct`]. Members are replaced as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructPatch {
    pub name: String,
    pub attributes: Option<Vec<Attribute>>,
    pub comment: Option<Option<String>>,
    pub line_break: Option<bool>,
}

impl StructPatch {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn attributes(mut self, attributes: impl IntoIterator<Item = Attribute>) -> Self {
        self.attributes = Some(attributes.into_iter().collect());
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(Some(comment.into()));
        self
    }

    pub fn clear_comment(mut self) -> Self {
        self.comment = Some(None);
        self
    }

    pub fn line_break(mut self, line_break: bool) -> Self {
        self.line_break = Some(line_break);
        self
    }

    pub fn apply(self, target: &mut Struct) {
        set(&mut target.attributes, self.attributes);
        set(&mut target.comment, self.comment);
        set(&mut target.line_break, self.line_break);
    }
}

/// Patch for a [`Mapping`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingPatch {
    pub name: String,
    pub key_type: Option<String>,
    pub value_type: Option<String>,
    pub modifier: Option<Option<String>>,
    pub comment: Option<Option<String>>,
    pub line_break: Option<bool>,
}

impl MappingPatch {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn key_type(mut self, ty: impl Into<String>) -> Self {
        self.key_type = Some(ty.into());
        self
    }

    pub fn value_type(mut self, ty: impl Into<String>) -> Self {
        self.value_type = Some(ty.into());
        self
    }

    pub fn modifier(mut self, modifier: impl Into<String>) -> Self {
        self.modifier = Some(Some(modifier.into()));
        self
    }

    pub fn clear_modifier(mut self) -> Self {
        self.modifier = Some(None);
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(Some(comment.into()));
        self
    }

    pub fn clear_comment(mut self) -> Self {
        self.comment = Some(None);
        self
    }

    pub fn line_break(mut self, line_break: bool) -> Self {
        self.line_break = Some(line_break);
        self
    }

    pub fn apply(self, target: &mut Mapping) {
        set(&mut target.key_type, self.key_type);
        set(&mut target.value_type, self.value_type);
        set(&mut target.modifier, self.modifier);
        set(&mut target.comment, self.comment);
        set(&mut target.line_break, self.line_break);
    }
}

/// Patch for a [`Function`]. Parameters are replaced as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionPatch {
    pub name: String,
    pub parameters: Option<Vec<Param>>,
    pub return_type: Option<Option<String>>,
    pub modifier: Option<Option<String>>,
    pub body: Option<String>,
    pub comment: Option<Option<String>>,
    pub line_break: Option<bool>,
}

impl FunctionPatch {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn params(mut self, params: impl IntoIterator<Item = Param>) -> Self {
        self.parameters = Some(params.into_iter().collect());
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(Some(ty.into()));
        self
    }

    pub fn clear_returns(mut self) -> Self {
        self.return_type = Some(None);
        self
    }

    pub fn modifier(mut self, modifier: impl Into<String>) -> Self {
        self.modifier = Some(Some(modifier.into()));
        self
    }

    pub fn clear_modifier(mut self) -> Self {
        self.modifier = Some(None);
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(Some(comment.into()));
        self
    }

    pub fn clear_comment(mut self) -> Self {
        self.comment = Some(None);
        self
    }

    pub fn line_break(mut self, line_break: bool) -> Self {
        self.line_break = Some(line_break);
        self
    }

    pub fn apply(self, target: &mut Function) {
        set(&mut target.parameters, self.parameters);
        set(&mut target.return_type, self.return_type);
        set(&mut target.modifier, self.modifier);
        set(&mut target.body, self.body);
        set(&mut target.comment, self.comment);
        set(&mut target.line_break, self.line_break);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_patch_keeps_unmentioned_fields() {
        let mut attr = Attribute::new("attr1", "address")
            .modifier("public")
            .comment("Owner")
            .line_break();

        AttributePatch::new("attr1").ty("bytes32").apply(&mut attr);

        assert_eq!(attr.ty, "bytes32");
        assert_eq!(attr.modifier.as_deref(), Some("public"));
        assert_eq!(attr.comment.as_deref(), Some("Owner"));
        assert!(attr.line_break);
    }

    #[test]
    fn test_attribute_patch_clears_explicitly() {
        let mut attr = Attribute::new("attr1", "address")
            .value(Value::Integer(1))
            .comment("Owner")
            .line_break();

        AttributePatch::new("attr1")
            .clear_value()
            .clear_comment()
            .line_break(false)
            .apply(&mut attr);

        assert_eq!(attr, Attribute::new("attr1", "address"));
    }

    #[test]
    fn test_container_patch() {
        let mut c = Container::new("Token").is("ERC20");

        ContainerPatch::new("Token")
            .kind(ContainerKind::Library)
            .clear_parent()
            .apply(&mut c);

        assert_eq!(c, Container::library("Token"));
    }

    #[test]
    fn test_struct_patch_replaces_members() {
        let mut s = Struct::new("Point").attribute(Attribute::new("x", "int"));

        StructPatch::new("Point")
            .attributes([Attribute::new("y", "int"), Attribute::new("z", "int")])
            .apply(&mut s);

        assert_eq!(s.attributes.len(), 2);
        assert_eq!(s.attributes[0].name, "y");
    }

    #[test]
    fn test_mapping_patch() {
        let mut m = Mapping::new("balances", "address", "uint").modifier("public");

        MappingPatch::new("balances")
            .value_type("uint256")
            .clear_modifier()
            .apply(&mut m);

        assert_eq!(m, Mapping::new("balances", "address", "uint256"));
    }

    #[test]
    fn test_function_patch() {
        let mut f = Function::new("get").returns("uint").body("return 1;");

        FunctionPatch::new("get")
            .params([Param::new("id", "uint")])
            .modifier("view")
            .apply(&mut f);

        assert_eq!(f.parameters, vec![Param::new("id", "uint")]);
        assert_eq!(f.modifier.as_deref(), Some("view"));
        assert_eq!(f.return_type.as_deref(), Some("uint"));
        assert_eq!(f.body, "return 1;");
    }
}
