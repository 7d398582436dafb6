//! Best-effort source spans for diagnostics.
//!
//! Declarations are decoded from untyped TOML tables, which carry no
//! position information, so spans are recovered by searching the source.

use miette::SourceSpan;

const DECLARATION_HEADER: &str = "[[declarations]]";

/// Span of the `index`th `[[declarations]]` header.
pub(crate) fn declaration_header(src: &str, index: usize) -> Option<SourceSpan> {
    src.match_indices(DECLARATION_HEADER)
        .nth(index)
        .map(|(pos, header)| SourceSpan::from((pos, header.len())))
}

/// Span of `key = "value"` inside the `index`th declaration, falling back
/// to that declaration's header.
pub(crate) fn declaration_assignment(
    src: &str,
    index: usize,
    key: &str,
    value: &str,
) -> Option<SourceSpan> {
    let mut headers = src.match_indices(DECLARATION_HEADER).skip(index);
    let (start, _) = headers.next()?;
    let end = headers.next().map_or(src.len(), |(pos, _)| pos);

    string_assignment(&src[start..end], key, value)
        .map(|span| SourceSpan::from((start + span.offset(), span.len())))
        .or_else(|| declaration_header(src, index))
}

/// Spans of every quoted `value` assigned to `key`, in source order.
///
/// The span covers the value without its quotes.
pub(crate) fn string_assignments(src: &str, key: &str, value: &str) -> Vec<SourceSpan> {
    let patterns = [
        format!("{} = \"{}\"", key, value),
        format!("{}=\"{}\"", key, value),
        format!("{} = '{}'", key, value),
        format!("{}='{}'", key, value),
    ];

    let mut spans: Vec<SourceSpan> = patterns
        .iter()
        .flat_map(|pattern| {
            src.match_indices(pattern.as_str()).filter_map(|(pos, matched)| {
                if !at_key_boundary(src, pos) {
                    return None;
                }
                let start = pos + matched.len() - value.len() - 1;
                Some(SourceSpan::from((start, value.len())))
            })
        })
        .collect();
    spans.sort_by_key(|span| span.offset());
    spans
}

/// Span of the first quoted `value` assigned to `key`.
pub(crate) fn string_assignment(src: &str, key: &str, value: &str) -> Option<SourceSpan> {
    string_assignments(src, key, value).into_iter().next()
}

// `name = "x"` must not match inside `type_name = "x"`.
fn at_key_boundary(src: &str, pos: usize) -> bool {
    src[..pos]
        .chars()
        .next_back()
        .is_none_or(|c| !(c.is_alphanumeric() || c == '_' || c == '-'))
}
