//! Manifest parsing from files and strings.

use std::{collections::HashMap, path::Path, str::FromStr};

use serde::Deserialize;
use solgen_document::DeclarationKey;
use tracing::debug;

use super::{FormatConfig, Manifest, Replacement, decode};
use crate::{Error, Result, error::SourceContext, span};

/// Default filename used in diagnostics when parsing from a string.
pub const DEFAULT_FILENAME: &str = "sol.toml";

/// sol.toml as written, before declarations are decoded.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawManifest {
    #[serde(default)]
    format: FormatConfig,
    #[serde(default)]
    declarations: Vec<toml::Table>,
    #[serde(default)]
    replacements: Vec<Replacement>,
}

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, DEFAULT_FILENAME)
    }
}

impl Manifest {
    /// Parse a sol.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a sol.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let ctx = SourceContext::new(content, filename);
    let raw: RawManifest = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;

    let declarations = raw
        .declarations
        .into_iter()
        .enumerate()
        .map(|(index, table)| decode::declaration(&ctx, index, table))
        .collect::<Result<Vec<_>>>()?;

    let manifest = Manifest {
        format: raw.format,
        declarations,
        replacements: raw.replacements,
    };
    validate_manifest(&manifest, &ctx)?;

    debug!(
        filename,
        declarations = manifest.declarations.len(),
        replacements = manifest.replacements.len(),
        "parsed manifest"
    );
    Ok(manifest)
}

/// Validate the manifest after decoding.
fn validate_manifest(manifest: &Manifest, ctx: &SourceContext) -> Result<()> {
    let mut seen: HashMap<DeclarationKey, usize> = HashMap::new();
    for (index, declaration) in manifest.declarations.iter().enumerate() {
        let key = declaration.key();
        if let Some(&first) = seen.get(&key) {
            let label = |i| span::declaration_assignment(ctx.src(), i, "name", &key.name);
            return Err(ctx.duplicate_error(
                key.kind,
                key.name.clone(),
                label(first),
                label(index),
            ));
        }
        seen.insert(key, index);
    }

    for replacement in &manifest.replacements {
        if replacement.from.is_empty() {
            let span = span::string_assignment(ctx.src(), "from", "");
            return Err(ctx.validation_error("replacement `from` must not be empty", span));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use solgen_document::{Attribute, Container, DeclarationKind, Indent};

    use super::*;

    #[test]
    fn test_parse_full_manifest() {
        let manifest: Manifest = r#"
[format]
indent = 2

[[declarations]]
kind = "contract"
name = "MyContract"
parent = "ParentContract"

[[declarations]]
kind = "attribute"
name = "attr1"
type = "address"

[[replacements]]
from = "address attr1"
to = "address public attr1"
"#
        .parse()
        .unwrap();

        assert_eq!(manifest.format.indent(), Indent::Spaces(2));
        assert_eq!(
            manifest.declarations,
            vec![
                Container::new("MyContract").is("ParentContract").into(),
                Attribute::new("attr1", "address").into(),
            ]
        );
        assert_eq!(manifest.replacements.len(), 1);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "[[declarations]]\nkind = \"interface\"\nname = \"IERC20\"\n"
        )
        .unwrap();

        let manifest = Manifest::from_file(file.path()).unwrap();
        assert_eq!(manifest.declarations, vec![Container::interface("IERC20").into()]);
    }

    #[test]
    fn test_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sol.toml");

        let err = Manifest::from_file(&path).unwrap_err();
        match *err {
            Error::Io { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("expected io error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_manifest() {
        let manifest: Manifest = "".parse().unwrap();
        assert!(manifest.declarations.is_empty());
        assert_eq!(manifest.format.indent(), Indent::SOLIDITY);
    }

    #[test]
    fn test_parse_error_has_span() {
        let err = "[[declarations]\nkind = \"contract\"".parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::Parse { span: Some(_), .. }));
    }

    #[test]
    fn test_unknown_top_level_key() {
        let err = "[cli]\nname = \"x\"".parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_duplicate_labels_both_declarations() {
        let src = r#"
[[declarations]]
kind = "contract"
name = "A"

[[declarations]]
kind = "attribute"
name = "owner"
type = "address"

[[declarations]]
kind = "attribute"
name = "owner"
type = "uint"
"#;
        let err = src.parse::<Manifest>().unwrap_err();
        match *err {
            Error::Duplicate {
                kind,
                name,
                first_span,
                second_span,
                ..
            } => {
                assert_eq!(kind, DeclarationKind::Attribute);
                assert_eq!(name, "owner");
                assert!(first_span.unwrap().offset() < second_span.unwrap().offset());
            }
            other => panic!("expected duplicate, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_labels_skip_other_kinds() {
        let src = r#"
[[declarations]]
kind = "contract"
name = "owner"

[[declarations]]
kind = "function"
name = "owner"

[[declarations]]
kind = "function"
name = "owner"
"#;
        let err = src.parse::<Manifest>().unwrap_err();
        let Error::Duplicate {
            kind,
            first_span,
            second_span,
            ..
        } = *err
        else {
            panic!("expected duplicate, got {:?}", err);
        };
        assert_eq!(kind, DeclarationKind::Function);

        let headers: Vec<usize> = src.match_indices("[[declarations]]").map(|(i, _)| i).collect();
        let (first, second) = (first_span.unwrap(), second_span.unwrap());
        assert!(first.offset() > headers[1] && first.offset() < headers[2]);
        assert!(second.offset() > headers[2]);
    }

    #[test]
    fn test_same_name_different_kind_is_allowed() {
        let manifest: Manifest = r#"
[[declarations]]
kind = "contract"
name = "balance"

[[declarations]]
kind = "function"
name = "balance"
"#
        .parse()
        .unwrap();
        assert_eq!(manifest.declarations.len(), 2);
    }

    #[test]
    fn test_empty_replacement_source() {
        let err = "[[replacements]]\nfrom = \"\"\nto = \"x\"".parse::<Manifest>().unwrap_err();
        assert_eq!(err.to_string(), "replacement `from` must not be empty");
    }

    #[test]
    fn test_unknown_kind_reports_position() {
        let err = "[[declarations]]\nkind = \"modifier\"\nname = \"onlyOwner\""
            .parse::<Manifest>()
            .unwrap_err();
        assert!(matches!(*err, Error::UnknownKind { span: Some(_), .. }));
    }
}
