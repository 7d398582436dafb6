//! Comment wrapping.

use solgen_codegen::CodeFragment;

/// Words per emitted `//` comment line.
pub const WORDS_PER_LINE: usize = 7;

/// Split a comment into `//` lines of at most [`WORDS_PER_LINE`] words.
///
/// Whitespace inside the comment (including newlines) only separates words;
/// a blank comment produces no lines.
pub(crate) fn wrap(comment: Option<&str>) -> Vec<CodeFragment> {
    let Some(comment) = comment else {
        return Vec::new();
    };

    let words: Vec<&str> = comment.split_whitespace().collect();
    words
        .chunks(WORDS_PER_LINE)
        .map(|chunk| CodeFragment::comment(chunk.join(" ")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_or_blank_comment() {
        assert!(wrap(None).is_empty());
        assert!(wrap(Some("")).is_empty());
        assert!(wrap(Some("   \n ")).is_empty());
    }

    #[test]
    fn test_short_comment_single_line() {
        assert_eq!(
            wrap(Some("Test comment ")),
            vec![CodeFragment::comment("Test comment")]
        );
    }

    #[test]
    fn test_fourteen_words_two_lines() {
        let comment = "one two three four five six seven eight nine ten eleven twelve thirteen fourteen";
        assert_eq!(
            wrap(Some(comment)),
            vec![
                CodeFragment::comment("one two three four five six seven"),
                CodeFragment::comment("eight nine ten eleven twelve thirteen fourteen"),
            ]
        );
    }

    #[test]
    fn test_eight_words_wrap_one_over() {
        let lines = wrap(Some("a b c d e f g h"));
        assert_eq!(
            lines,
            vec![
                CodeFragment::comment("a b c d e f g"),
                CodeFragment::comment("h"),
            ]
        );
    }

    #[test]
    fn test_collapses_inner_whitespace() {
        assert_eq!(
            wrap(Some("  spaced\tout \n words ")),
            vec![CodeFragment::comment("spaced out words")]
        );
    }
}
