//! Trimming rules for native display names (C, C++, Rust, Objective-C).
//!
//! A native name is reduced to its qualified function name with at most a
//! `<T>` placeholder where template or generic arguments used to be:
//!
//! ```text
//! static unsigned int Foo::Bar::run(char const *) const   ->  Foo::Bar::run
//! <actix::ContextFut<A, C> as futures::Future>::poll        ->  actix::ContextFut<T>::poll
//! std::operator<< <std::char_traits<char> >(...)            ->  std::operator<< <T>
//! main::{lambda(int)#1}                                     ->  main::lambda
//! ```
//!
//! Every pass is a total `&str -> String` function and is exposed on its own
//! so it can be tested in isolation. [`trim_native`] composes them.

use super::enclosed::{find_spans, replace_enclosed, Replacement};
use super::tokens::tokenize;
use super::types::TrimOptions;
use once_cell::sync::Lazy;
use regex::Regex;

static GNU_SYMBOL_VERSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@@?[A-Z][A-Z0-9_]*_[0-9][0-9.]*$").unwrap());
static STDCALL_DECORATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"^@?(.*?)@[0-9]+$").unwrap());
static CLONE_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\[clone \.[^\]]*\]$").unwrap());
static RUST_HASH: Lazy<Regex> = Lazy::new(|| Regex::new(r"::h[a-z0-9]{16}$").unwrap());
static CPP_TRAILER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\b(?:const|volatile|noexcept)\b|&)$").unwrap());
static RUST_BLANKET_RECEIVER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z] as ").unwrap());
static MSVC_ANON_NAMESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\?A0x[a-f0-9]{8}::").unwrap());
// `operator bool`, `operator new[]`, `operator unsigned int`; never past a Swift arrow
static NAMED_OPERATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\boperator [A-Za-z_][^\x{E003}]*$").unwrap());
// gcc `{lambda(int)#1}`, msvc `lambda_<hash>`, clang `$_0`
static LAMBDA: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{lambda\(.*?\)#\d+\}|\blambda_[a-f0-9]+\b|\$_\d+\b").unwrap()
});

// Private-use characters standing in for text that would otherwise confuse
// the delimiter passes. They are mapped back by `restore_shielded`.
const SHIELD_LT: char = '\u{E000}';
const SHIELD_GT: char = '\u{E001}';
const SHIELD_CALL: char = '\u{E002}';
const SHIELD_ARROW: char = '\u{E003}';
const SHIELD_ANON_NAMESPACE: char = '\u{E004}';
const SHIELD_SPACE: char = '\u{E005}';

const MSVC_ANON_NAMESPACE_TEXT: &str = "`anonymous namespace'";

/// Ordered; longer operators must be shielded before their prefixes.
const SHIELDS: &[(&str, &str)] = &[
    ("operator<<", "operator\u{E000}\u{E000}"),
    ("operator<", "operator\u{E000}"),
    ("operator>>", "operator\u{E001}\u{E001}"),
    ("operator>", "operator\u{E001}"),
    ("operator()", "operator\u{E002}"),
    ("operator->", "operator\u{E003}"),
    (" -> ", " \u{E003} "),
    (MSVC_ANON_NAMESPACE_TEXT, "\u{E004}"),
];

const PASSTHROUGH_NAMES: &[&str] = &["<redacted>", "<unknown>"];

/// Trim a native display name down to its canonical function name.
pub fn trim_native(function: &str, options: &TrimOptions) -> String {
    if PASSTHROUGH_NAMES.contains(&function) {
        return function.to_string();
    }

    let trimmed = function.trim();
    if trimmed.is_empty() {
        return function.to_string();
    }
    if is_objc_method(trimmed) {
        return trimmed.to_string();
    }

    let mut current = trimmed.to_string();
    current = run_pass("symbol-version", current, strip_symbol_version);
    current = run_pass("stdcall", current, strip_stdcall_decoration);
    current = run_pass("clone-suffix", current, strip_clone_suffix);
    current = run_pass("rust-hash", current, strip_rust_hash);
    current = run_pass("cpp-trailers", current, strip_cpp_trailers);
    current = shield_operators(&current);
    if options.normalize_lambdas {
        current = run_pass("lambdas", current, normalize_lambdas);
        current = run_pass("msvc-anon-namespace", current, normalize_msvc_anon_namespace);
    }
    current = run_pass("arguments", current, strip_arguments);
    current = shield_named_operator(&current);
    current = run_pass("generics", current, collapse_generics);

    match select_function_token(&current) {
        Some(token) if opens_unterminated(&token) => {
            log::debug!("unterminated bracket in {:?}, keeping input", function);
            trimmed.to_string()
        }
        Some(token) => restore_shielded(&token),
        None => {
            log::debug!("no function token left in {:?}, keeping input", function);
            function.to_string()
        }
    }
}

fn run_pass(name: &str, input: String, pass: fn(&str) -> String) -> String {
    let output = pass(&input);
    if output != input {
        log::trace!("{}: {:?} -> {:?}", name, input, output);
    }
    output
}

/// `+[Class selector:]`, `-[Class selector:]` and bare `[Class selector]`.
pub fn is_objc_method(function: &str) -> bool {
    (function.starts_with('[') || function.starts_with("+[") || function.starts_with("-["))
        && function.ends_with(']')
}

/// Drop GNU symbol versioning, e.g. `pthread_cond_timedwait@@GLIBC_2.3.2`.
pub fn strip_symbol_version(function: &str) -> String {
    GNU_SYMBOL_VERSION.replace(function, "").into_owned()
}

/// Drop stdcall/fastcall decoration, e.g. `@ThreadStart@16`.
///
/// The leading `@` is only removed together with a trailing byte count so
/// Swift attributes such as `@objc` survive.
pub fn strip_stdcall_decoration(function: &str) -> String {
    STDCALL_DECORATION.replace(function, "$1").into_owned()
}

/// Drop gcc clone annotations such as `[clone .constprop.0]`, including
/// stacked ones.
pub fn strip_clone_suffix(function: &str) -> String {
    let mut current = function;
    while let Some(m) = CLONE_SUFFIX.find(current) {
        current = &current[..m.start()];
    }
    current.to_string()
}

/// Drop the legacy Rust symbol hash (`::h9de5fbebc1652d47`).
pub fn strip_rust_hash(function: &str) -> String {
    RUST_HASH.replace(function, "").into_owned()
}

/// Drop trailing `const`, `volatile`, `noexcept` and reference qualifiers.
pub fn strip_cpp_trailers(function: &str) -> String {
    let mut current = function.trim_end();
    loop {
        if current.ends_with("operator&") || current.ends_with("operator&&") {
            break;
        }
        match CPP_TRAILER.find(current) {
            Some(m) => current = current[..m.start()].trim_end(),
            None => break,
        }
    }
    current.to_string()
}

/// Replace operator tokens, the Swift return arrow and MSVC's
/// `` `anonymous namespace' `` with placeholder characters that the delimiter
/// passes and the tokenizer treat as ordinary text.
pub fn shield_operators(function: &str) -> String {
    SHIELDS
        .iter()
        .fold(function.to_string(), |acc, (from, to)| acc.replace(from, to))
}

/// Inverse of [`shield_operators`].
pub fn restore_shielded(function: &str) -> String {
    let mut out = String::with_capacity(function.len());
    for ch in function.chars() {
        match ch {
            SHIELD_LT => out.push('<'),
            SHIELD_GT => out.push('>'),
            SHIELD_CALL => out.push_str("()"),
            SHIELD_ARROW => out.push_str("->"),
            SHIELD_ANON_NAMESPACE => out.push_str(MSVC_ANON_NAMESPACE_TEXT),
            SHIELD_SPACE => out.push(' '),
            _ => out.push(ch),
        }
    }
    out
}

/// Glue a named operator (`operator bool`, `operator delete[]`) to its
/// keyword so the tokenizer keeps it with the qualified name. Runs after
/// argument lists are gone, when the operator ends the name.
pub fn shield_named_operator(function: &str) -> String {
    match NAMED_OPERATOR.find(function) {
        Some(m) => format!(
            "{}{}",
            &function[..m.start()],
            m.as_str().trim_end().replace(' ', &SHIELD_SPACE.to_string())
        ),
        None => function.to_string(),
    }
}

/// Collapse compiler-generated lambda names to `lambda`.
pub fn normalize_lambdas(function: &str) -> String {
    LAMBDA.replace_all(function, "lambda").into_owned()
}

/// MSVC renders anonymous namespaces of inline functions with a hash
/// (`?A0x1f2e3d4c::`); use the regular spelling instead.
pub fn normalize_msvc_anon_namespace(function: &str) -> String {
    let replacement = format!("{}::", SHIELD_ANON_NAMESPACE);
    MSVC_ANON_NAMESPACE
        .replace_all(function, replacement.as_str())
        .into_owned()
}

/// Remove parenthesized groups: argument lists, function pointer
/// signatures in return types and the like. `(anonymous namespace)` is kept.
pub fn strip_arguments(function: &str) -> String {
    replace_enclosed(
        function,
        '(',
        ')',
        Replacement::Computed(&|inner, _start| {
            let inner = inner.trim();
            if inner == "anonymous namespace" || inner == "operator" {
                format!("({})", inner)
            } else {
                String::new()
            }
        }),
    )
}

/// Collapse each top-level generic list to `<T>`.
///
/// A list that opens the name is a Rust qualified path (`<Type as Trait>` or
/// `<Type>`) and is unwrapped to the receiver type instead. Lists holding a
/// lambda marker are left alone.
pub fn collapse_generics(function: &str) -> String {
    replace_enclosed(
        function,
        '<',
        '>',
        Replacement::Computed(&|inner, start| {
            if is_lambda_marker(inner) {
                return format!("<{}>", inner);
            }
            if start > 0 {
                return "<T>".to_string();
            }
            unwrap_qualified_receiver(inner)
        }),
    )
}

fn is_lambda_marker(inner: &str) -> bool {
    inner == "lambda" || LAMBDA.find(inner).is_some_and(|m| m.start() == 0)
}

/// `Type<A> as Trait` -> `Type<T>`; a blanket `T as Trait<U>` -> `Trait<T>`.
fn unwrap_qualified_receiver(inner: &str) -> String {
    let receiver = RUST_BLANKET_RECEIVER.replace(inner, "");
    let receiver = replace_enclosed(&receiver, '<', '>', Replacement::Literal("<T>"));
    if let Some((ty, _trait)) = receiver.split_once(" as ") {
        return ty.to_string();
    }
    receiver
}

/// Pick the token that names the function.
///
/// That is the token left of a Swift `->` marker if there is one, otherwise
/// the last token. Return types and storage classes in front of the name are
/// discarded. A trailing standalone `<T>` (MSVC spells generic operators as
/// `std::operator<< <T>`) is merged into the preceding token first.
pub fn select_function_token(function: &str) -> Option<String> {
    let mut tokens: Vec<String> = tokenize(function).into_iter().map(str::to_string).collect();

    if tokens.len() > 1 && tokens.last().is_some_and(|t| t == "<T>") {
        tokens.pop();
        if let Some(previous) = tokens.last_mut() {
            previous.push_str(" <T>");
        }
    }

    let arrow = SHIELD_ARROW.to_string();
    match tokens.iter().position(|t| *t == arrow) {
        Some(idx) if idx > 0 => tokens.into_iter().nth(idx - 1),
        _ => tokens.pop(),
    }
}

/// A token that starts with a bracket which never closes swallowed the rest
/// of the input; it names nothing.
fn opens_unterminated(token: &str) -> bool {
    let (open, close) = match token.chars().next() {
        Some('(') => ('(', ')'),
        Some('[') => ('[', ']'),
        Some('{') => ('{', '}'),
        _ => return false,
    };
    !find_spans(token, open, close)
        .first()
        .is_some_and(|span| span.start == 0)
}
