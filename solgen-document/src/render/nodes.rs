//! Per-kind emission rules.
//!
//! Each declaration becomes an optional wrapped comment, its own line(s),
//! and one extra blank line when `line_break` is set. Output is flat: the
//! formatter indents it later.

use solgen_codegen::{CodeFragment, Renderable};
use solgen_ir::{Attribute, Container, Declaration, Function, Mapping, Struct};

use crate::comment;

/// Renderable view over a borrowed declaration record.
pub(crate) struct Node<'a, T>(pub &'a T);

/// Treat empty strings like absent ones.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Comment, body lines, then the trailing break.
fn declaration(
    comment: Option<&str>,
    body: impl IntoIterator<Item = CodeFragment>,
    line_break: bool,
) -> Vec<CodeFragment> {
    let mut fragments = comment::wrap(comment);
    fragments.extend(body);
    if line_break {
        fragments.push(CodeFragment::blank());
    }
    fragments
}

impl Renderable for Node<'_, Declaration> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        match self.0 {
            Declaration::Container(c) => Node(c).to_fragments(),
            Declaration::Attribute(a) => Node(a).to_fragments(),
            Declaration::Struct(s) => Node(s).to_fragments(),
            Declaration::Mapping(m) => Node(m).to_fragments(),
            Declaration::Function(f) => Node(f).to_fragments(),
        }
    }
}

impl Renderable for Node<'_, Container> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let c = self.0;
        let header = match present(&c.parent) {
            Some(parent) => format!("{} {} is {} {{", c.kind.keyword(), c.name, parent),
            None => format!("{} {} {{", c.kind.keyword(), c.name),
        };
        declaration(
            c.comment.as_deref(),
            [CodeFragment::line(header), CodeFragment::blank()],
            false,
        )
    }
}

impl Renderable for Node<'_, Attribute> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let a = self.0;
        let mut line = format!("{} ", a.ty);
        if let Some(modifier) = present(&a.modifier) {
            line.push_str(modifier);
            line.push(' ');
        }
        line.push_str(&a.name);
        if let Some(value) = a.value.as_ref().filter(|v| !v.is_empty()) {
            line.push_str(" = ");
            line.push_str(&value.to_string());
        }
        line.push(';');

        declaration(a.comment.as_deref(), [CodeFragment::line(line)], a.line_break)
    }
}

impl Renderable for Node<'_, Struct> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let s = self.0;
        let mut body = vec![CodeFragment::line(format!("struct {} {{", s.name))];
        body.extend(s.attributes.iter().flat_map(|a| Node(a).to_fragments()));
        body.push(CodeFragment::line("}"));

        declaration(s.comment.as_deref(), body, s.line_break)
    }
}

impl Renderable for Node<'_, Mapping> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let m = self.0;
        let line = match present(&m.modifier) {
            Some(modifier) => format!(
                "mapping ({} => {}) {} {};",
                m.key_type, m.value_type, modifier, m.name
            ),
            None => format!("mapping ({} => {}) {};", m.key_type, m.value_type, m.name),
        };

        declaration(m.comment.as_deref(), [CodeFragment::line(line)], m.line_break)
    }
}

impl Renderable for Node<'_, Function> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let f = self.0;
        let params = f
            .parameters
            .iter()
            .map(|p| format!("{} {}", p.ty, p.name))
            .collect::<Vec<_>>()
            .join(", ");

        let mut line = format!("function {}({})", f.name, params);
        if let Some(modifier) = present(&f.modifier) {
            line.push(' ');
            line.push_str(modifier);
        }
        if let Some(ty) = present(&f.return_type) {
            line.push_str(&format!(" returns ({})", ty));
        }
        line.push_str(&format!(" {{{}}}", f.body));

        declaration(f.comment.as_deref(), [CodeFragment::line(line)], f.line_break)
    }
}

#[cfg(test)]
mod tests {
    use solgen_codegen::CodeBuilder;
    use solgen_ir::{Param, Value};

    use super::*;

    fn emit<'a, T>(node: &'a T) -> String
    where
        Node<'a, T>: Renderable,
    {
        let mut builder = CodeBuilder::solidity();
        builder.emit(&Node(node));
        builder.build()
    }

    #[test]
    fn test_attribute_simple() {
        assert_eq!(emit(&Attribute::new("attr1", "address")), "address attr1;\n");
    }

    #[test]
    fn test_attribute_all_fields() {
        let attr = Attribute::new("attr1", "address")
            .modifier("public")
            .value(Value::literal("\"0x0\""))
            .comment("Test comment")
            .line_break();
        assert_eq!(
            emit(&attr),
            "// Test comment\naddress public attr1 = \"0x0\";\n\n"
        );
    }

    #[test]
    fn test_attribute_value_kinds() {
        let text = Attribute::new("s", "string").value("hi");
        assert_eq!(emit(&text), "string s = \"hi\";\n");

        let number = Attribute::new("n", "uint256").value(Value::Integer(10));
        assert_eq!(emit(&number), "uint256 n = 10;\n");

        let flag = Attribute::new("b", "bool").value(true);
        assert_eq!(emit(&flag), "bool b = true;\n");
    }

    #[test]
    fn test_attribute_text_value_is_escaped() {
        let attr = Attribute::new("s", "string").value(Value::text("a\"{\\"));
        assert_eq!(emit(&attr), "string s = \"a\\\"{\\\\\";\n");
    }

    #[test]
    fn test_attribute_empty_optionals_suppressed() {
        let attr = Attribute::new("attr1", "address")
            .modifier("")
            .value("")
            .comment("");
        assert_eq!(emit(&attr), "address attr1;\n");
    }

    #[test]
    fn test_container_header() {
        assert_eq!(emit(&Container::new("A")), "contract A {\n\n");
        assert_eq!(
            emit(&Container::library("L").is("Base")),
            "library L is Base {\n\n"
        );
        assert_eq!(
            emit(&Container::interface("I").comment("Public API")),
            "// Public API\ninterface I {\n\n"
        );
    }

    #[test]
    fn test_struct_members_keep_their_own_breaks() {
        let s = Struct::new("Point")
            .comment("A point")
            .attribute(Attribute::new("x", "int").line_break())
            .attribute(Attribute::new("y", "int").comment("Second"))
            .line_break();
        assert_eq!(
            emit(&s),
            "// A point\nstruct Point {\nint x;\n\n// Second\nint y;\n}\n\n"
        );
    }

    #[test]
    fn test_empty_struct() {
        assert_eq!(emit(&Struct::new("Empty")), "struct Empty {\n}\n");
    }

    #[test]
    fn test_mapping() {
        let m = Mapping::new("balances", "address", "uint256");
        assert_eq!(emit(&m), "mapping (address => uint256) balances;\n");

        let m = m.modifier("public");
        assert_eq!(emit(&m), "mapping (address => uint256) public balances;\n");
    }

    #[test]
    fn test_function_full_signature() {
        let f = Function::new("transfer")
            .param(Param::new("to", "address"))
            .param(Param::new("amount", "uint256"))
            .modifier("public")
            .returns("bool")
            .body("return true;");
        assert_eq!(
            emit(&f),
            "function transfer(address to, uint256 amount) public returns (bool) {return true;}\n"
        );
    }

    #[test]
    fn test_function_minimal() {
        assert_eq!(emit(&Function::new("noop")), "function noop() {}\n");
    }

    #[test]
    fn test_declaration_dispatch() {
        let decl = Declaration::from(Mapping::new("m", "uint", "bool").line_break());
        assert_eq!(emit(&decl), "mapping (uint => bool) m;\n\n");
    }
}
