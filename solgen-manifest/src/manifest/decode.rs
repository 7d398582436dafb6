//! Decoding of `[[declarations]]` tables.
//!
//! Each table is dispatched on its `kind` tag and then deserialized into the
//! matching declaration record.

use serde::de::DeserializeOwned;
use solgen_document::{Attribute, Container, ContainerKind, Declaration, Function, Mapping, Struct};

use crate::{Result, error::SourceContext, span};

const KIND: &str = "kind";

/// Decode the `index`th declaration table.
pub(crate) fn declaration(
    ctx: &SourceContext,
    index: usize,
    mut table: toml::Table,
) -> Result<Declaration> {
    let header = || span::declaration_header(ctx.src(), index);

    let kind = match table.remove(KIND) {
        Some(toml::Value::String(kind)) => kind,
        Some(other) => {
            return Err(ctx.validation_error(
                format!("declaration kind must be a string, found {}", other.type_str()),
                header(),
            ));
        }
        None => return Err(ctx.missing_kind_error(index, header())),
    };

    if let Some(container_kind) = ContainerKind::from_keyword(&kind) {
        let container: Container = record(ctx, &kind, index, table)?;
        return Ok(container.kind(container_kind).into());
    }

    let declaration = match kind.as_str() {
        "attribute" => record::<Attribute>(ctx, &kind, index, table)?.into(),
        "struct" => record::<Struct>(ctx, &kind, index, table)?.into(),
        "mapping" => record::<Mapping>(ctx, &kind, index, table)?.into(),
        "function" => record::<Function>(ctx, &kind, index, table)?.into(),
        _ => {
            let span = span::string_assignment(ctx.src(), KIND, &kind).or_else(header);
            return Err(ctx.unknown_kind_error(kind, span));
        }
    };
    Ok(declaration)
}

fn record<T: DeserializeOwned>(
    ctx: &SourceContext,
    kind: &str,
    index: usize,
    table: toml::Table,
) -> Result<T> {
    toml::Value::Table(table).try_into().map_err(|e: toml::de::Error| {
        ctx.validation_error(
            format!("invalid {} declaration: {}", kind, e.message()),
            span::declaration_header(ctx.src(), index),
        )
    })
}
