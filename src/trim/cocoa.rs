//! Trimming rules for Swift and Objective-C frames.
//!
//! Swift display names carry a lot of compiler plumbing that varies between
//! builds of the same code:
//!
//! ```text
//! partial apply for thunk for @escaping @callee_guaranteed () -> ()   ->  thunk for closure
//! closure #1 () in closure #2 (T1) in f1(_: T2, arg: T3)               ->  f1
//! @objc ViewController.causeCrash(Any) -> ()                           ->  ViewController.causeCrash
//! ```
//!
//! After the Swift-specific passes the name goes through the native rules,
//! which take care of generics, Objective-C selectors and the rest.

use super::enclosed::find_spans;
use super::native::{is_objc_method, trim_native};
use super::tokens::split_tokens;
use super::types::TrimOptions;

pub const THUNK_NAME: &str = "thunk for closure";

const OBJC_ATTRIBUTE: &str = "@objc ";
const CLOSURE_CHAIN_PREFIXES: &[&str] = &["specialized ", "partial apply for "];

/// Trim a Swift or Objective-C display name.
pub fn trim_cocoa(function: &str, options: &TrimOptions) -> String {
    let trimmed = function.trim();
    if trimmed.is_empty() || is_objc_method(trimmed) {
        return trim_native(function, options);
    }
    if is_thunk(trimmed) {
        log::trace!("thunk: {:?}", trimmed);
        return THUNK_NAME.to_string();
    }

    let name = strip_objc_attribute(trimmed);
    let name = reduce_closure_chain(name);
    let name = strip_swift_signature(name);
    trim_native(name, options)
}

/// Compiler-synthesized thunks collapse to a single name; their payload is
/// the closure's type signature, which says nothing about the call site.
pub fn is_thunk(function: &str) -> bool {
    function.starts_with("thunk for ")
        || function.contains("specialized thunk for")
        || function.contains("partial apply for thunk for")
}

pub fn strip_objc_attribute(function: &str) -> &str {
    function.strip_prefix(OBJC_ATTRIBUTE).unwrap_or(function).trim_start()
}

/// Reduce `closure #1 (...) in closure #2 (...) in outer(...)` to
/// `outer(...)`, dropping a leading `partial apply for` first.
pub fn reduce_closure_chain(function: &str) -> &str {
    let mut current = function;
    while let Some(rest) = CLOSURE_CHAIN_PREFIXES
        .iter()
        .find_map(|prefix| current.strip_prefix(prefix))
    {
        current = rest;
    }
    while let Some(outer) = strip_closure_prefix(current) {
        current = outer;
    }
    current
}

/// Strip one `closure #<n> [(<params>)] in ` prefix.
fn strip_closure_prefix(function: &str) -> Option<&str> {
    let rest = function.strip_prefix("implicit ").unwrap_or(function);
    let rest = rest.strip_prefix("closure #")?;
    let digits = rest.find(|c: char| !c.is_ascii_digit())?;
    if digits == 0 {
        return None;
    }
    let rest = rest[digits..].trim_start();
    let rest = if rest.starts_with('(') {
        let params = find_spans(rest, '(', ')').into_iter().next()?;
        &rest[params.end..]
    } else {
        rest
    };
    rest.trim_start().strip_prefix("in ")
}

/// Strip a trailing `(<params>) -> <ReturnType>` signature.
///
/// The arrow is located with the bracket-aware tokenizer, so arrows nested in
/// parameter types (`(Any, Foo -> Bar) -> Baz`) are not mistaken for the
/// return marker.
pub fn strip_swift_signature(function: &str) -> &str {
    let head = match split_tokens(function).into_iter().find(|t| t.text == "->") {
        Some(arrow) => function[..arrow.start].trim_end(),
        None => function,
    };
    match find_spans(head, '(', ')').last() {
        Some(params) if params.end == head.len() => head[..params.start].trim_end(),
        _ => head,
    }
}
