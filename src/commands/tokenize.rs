//! `frametrim tokenize`: show the bracket-aware split of a name.

use crate::trim::split_tokens;

/// Diagnostic listing, one line per token: a `*` for atomic tokens (those
/// holding a bracketed run), the byte offset and the token text.
pub fn render_tokens(text: &str) -> String {
    split_tokens(text)
        .iter()
        .map(|token| {
            let marker = if token.atomic { '*' } else { ' ' };
            format!("{}{:>4}  {}\n", marker, token.start, token.text)
        })
        .collect()
}

pub fn handle_tokenize(text: &str) {
    print!("{}", render_tokens(text));
}
