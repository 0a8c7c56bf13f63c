//! Bracket-aware whitespace tokenizer.
//!
//! Splits a display name on whitespace, except that a bracketed run (`()`,
//! `[]`, `{}`, mixed and nested) is never split and stays glued to whatever
//! it touches:
//!
//! ```text
//! "foo(enclosed bar)baz {moar stuff}"  ->  ["foo(enclosed bar)baz", "{moar stuff}"]
//! ```
//!
//! An opener that is never closed swallows the remainder of the input into
//! the final token.

/// A contiguous slice of the input produced by [`split_tokens`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    /// Byte offset of the token in the input.
    pub start: usize,
    /// True when the token contains a bracketed run.
    pub atomic: bool,
}

fn closer_for(ch: char) -> Option<char> {
    match ch {
        '(' => Some(')'),
        '[' => Some(']'),
        '{' => Some('}'),
        _ => None,
    }
}

/// Split `text` into tokens, keeping bracketed runs intact.
pub fn split_tokens(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut expected: Vec<char> = Vec::new();
    let mut start: Option<usize> = None;
    let mut atomic = false;

    for (idx, ch) in text.char_indices() {
        if let Some(closer) = closer_for(ch) {
            start.get_or_insert(idx);
            expected.push(closer);
            atomic = true;
        } else if expected.last() == Some(&ch) {
            expected.pop();
        } else if expected.is_empty() && ch.is_whitespace() {
            if let Some(begin) = start.take() {
                tokens.push(Token {
                    text: &text[begin..idx],
                    start: begin,
                    atomic,
                });
                atomic = false;
            }
        } else {
            start.get_or_insert(idx);
        }
    }

    if let Some(begin) = start {
        tokens.push(Token {
            text: &text[begin..],
            start: begin,
            atomic,
        });
    }

    tokens
}

/// Convenience wrapper returning only the token text.
pub fn tokenize(text: &str) -> Vec<&str> {
    split_tokens(text).into_iter().map(|t| t.text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_words() {
        assert_eq!(tokenize("foo bar baz"), vec!["foo", "bar", "baz"]);
    }

    #[test]
    fn test_trailing_group_is_one_token() {
        assert_eq!(tokenize("foo bar (enclosed baz)"), vec!["foo", "bar", "(enclosed baz)"]);
    }

    #[test]
    fn test_middle_group_is_one_token() {
        assert_eq!(tokenize("foo (enclosed bar) baz"), vec!["foo", "(enclosed bar)", "baz"]);
    }

    #[test]
    fn test_group_glues_to_adjacent_text() {
        assert_eq!(
            tokenize("foo(enclosed bar)baz {moar stuff}"),
            vec!["foo(enclosed bar)baz", "{moar stuff}"]
        );
    }

    #[test]
    fn test_mixed_nesting() {
        assert_eq!(tokenize("foo bar [baz (blah)]"), vec!["foo", "bar", "[baz (blah)]"]);
    }

    #[test]
    fn test_atomic_flag_and_offsets() {
        let tokens = split_tokens("static  run(a b)");

        assert_eq!(tokens.len(), 2);
        assert!(!tokens[0].atomic);
        assert!(tokens[1].atomic);
        assert_eq!(tokens[1].start, 8);
    }

    #[test]
    fn test_unbalanced_opener_consumes_rest() {
        assert_eq!(tokenize("a b(c d e"), vec!["a", "b(c d e"]);
    }

    #[test]
    fn test_stray_closer_is_plain() {
        assert_eq!(tokenize("a) b"), vec!["a)", "b"]);
    }

    #[test]
    fn test_whitespace_only_yields_nothing() {
        assert!(tokenize("   \t ").is_empty());
        assert!(tokenize("").is_empty());
    }
}
