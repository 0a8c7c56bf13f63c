//! Balanced delimiter spans.
//!
//! Pure functions for locating and rewriting top-level regions enclosed by a
//! single pair of delimiter characters, e.g. the argument list in
//! `foo::bar(unsigned int, int)` or the generic list in `Vec<Vec<u8>>`.
//!
//! Only one delimiter kind is tracked per call. Callers that need to handle
//! both `()` and `<>` run one pass per kind.
//!
//! # Degradation
//!
//! - A closing delimiter seen at depth zero is ordinary text.
//! - An opening delimiter that is never closed leaves the rest of the string
//!   untouched; no span is reported for it.

/// A top-level balanced region `[start, end)` in byte offsets.
///
/// `start` points at the opening delimiter and `end` just past the matching
/// closing delimiter. `depth` is the deepest nesting reached inside the span
/// (1 for a flat span such as `(int)`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub depth: usize,
}

impl Span {
    /// The text between the delimiters.
    pub fn inner<'t>(&self, text: &'t str, open: char, close: char) -> &'t str {
        &text[self.start + open.len_utf8()..self.end - close.len_utf8()]
    }

    /// The whole span including its delimiters.
    pub fn outer<'t>(&self, text: &'t str) -> &'t str {
        &text[self.start..self.end]
    }
}

/// What a span is replaced with.
pub enum Replacement<'a> {
    /// Replace the whole span, delimiters included, with fixed text.
    Literal(&'a str),
    /// Compute the replacement from the span's inner content and the byte
    /// offset of its opening delimiter. The result replaces the whole span,
    /// so the callback must re-add delimiters if it wants to keep them.
    Computed(&'a dyn Fn(&str, usize) -> String),
}

impl Replacement<'_> {
    fn apply(&self, inner: &str, start: usize) -> String {
        match self {
            Replacement::Literal(text) => (*text).to_string(),
            Replacement::Computed(f) => f(inner, start),
        }
    }
}

/// Find every top-level span delimited by `open`/`close`, left to right.
///
/// Nested spans are part of their parent and are not reported separately.
/// `open` and `close` must be different characters.
pub fn find_spans(text: &str, open: char, close: char) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut depth = 0usize;
    let mut deepest = 0usize;
    let mut start = 0usize;

    for (idx, ch) in text.char_indices() {
        if ch == open {
            if depth == 0 {
                start = idx;
                deepest = 0;
            }
            depth += 1;
            deepest = deepest.max(depth);
        } else if ch == close && depth > 0 {
            depth -= 1;
            if depth == 0 {
                spans.push(Span {
                    start,
                    end: idx + close.len_utf8(),
                    depth: deepest,
                });
            }
        }
    }

    spans
}

/// Replace every top-level `open`..`close` span in `text`.
///
/// Text outside the spans is copied verbatim.
///
/// # Example
///
/// ```
/// use frametrim::trim::enclosed::{replace_enclosed, Replacement};
///
/// let trimmed = replace_enclosed("foo::bar(unsigned int, int)", '(', ')', Replacement::Literal(""));
/// assert_eq!(trimmed, "foo::bar");
///
/// let generic = replace_enclosed("foo::bar<Blah, Blah<Blah, Blah>>", '<', '>', Replacement::Literal("<T>"));
/// assert_eq!(generic, "foo::bar<T>");
/// ```
pub fn replace_enclosed(text: &str, open: char, close: char, replacement: Replacement<'_>) -> String {
    let spans = find_spans(text, open, close);
    if spans.is_empty() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for span in &spans {
        out.push_str(&text[cursor..span.start]);
        out.push_str(&replacement.apply(span.inner(text, open, close), span.start));
        cursor = span.end;
    }
    out.push_str(&text[cursor..]);
    out
}
