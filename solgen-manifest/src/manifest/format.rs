//! `[format]` section.

use serde::Deserialize;
use solgen_document::Indent;

/// Output formatting options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormatConfig {
    /// Indentation per brace level: a width in spaces or `"tab"`
    #[serde(default)]
    pub indent: IndentSetting,
}

impl FormatConfig {
    pub fn indent(&self) -> Indent {
        self.indent.0
    }
}

/// A validated `indent` value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawIndent")]
pub struct IndentSetting(Indent);

impl From<Indent> for IndentSetting {
    fn from(indent: Indent) -> Self {
        Self(indent)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawIndent {
    Width(i64),
    Name(String),
}

impl TryFrom<RawIndent> for IndentSetting {
    type Error = String;

    fn try_from(raw: RawIndent) -> Result<Self, Self::Error> {
        match raw {
            RawIndent::Width(n) => u8::try_from(n)
                .ok()
                .filter(|n| *n <= Indent::MAX_SPACES)
                .map(|n| Self(Indent::Spaces(n)))
                .ok_or_else(|| {
                    format!(
                        "indent width must be between 0 and {}, got {}",
                        Indent::MAX_SPACES,
                        n
                    )
                }),
            RawIndent::Name(name) if name == "tab" => Ok(Self(Indent::Tab)),
            RawIndent::Name(name) => Err(format!(
                "indent must be a width or \"tab\", got \"{}\"",
                name
            )),
        }
    }
}
