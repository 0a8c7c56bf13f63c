//! Function name trimming for stack frames.
//!
//! Symbolicated frames carry display names full of noise that differs between
//! builds of the same code: return types, argument lists, template
//! arguments, calling convention decoration, symbol versions, lambda and
//! closure plumbing. This module reduces such a name to a stable canonical
//! form that can be used as a grouping key and shown to users.
//!
//! # Module Structure
//!
//! - [`types`] - Platforms, options, raw frame names
//! - [`enclosed`] - Balanced delimiter spans
//! - [`tokens`] - Bracket-aware whitespace tokenizer
//! - [`native`] - C, C++, Rust and Objective-C rules
//! - [`csharp`] - .NET / Unity rules
//! - [`cocoa`] - Swift rules (thunks, closures, `@objc`)
//! - [`batch`] - Trimming many frames at once
//!
//! ```text
//!                 types.rs
//!                    ↑
//!        enclosed.rs   tokens.rs
//!              ↑    ↑    ↑
//!     csharp.rs   native.rs
//!                    ↑
//!                cocoa.rs
//!                    ↑
//!            mod.rs (dispatch) ← batch.rs
//! ```
//!
//! Everything here is pure: no I/O, no shared state, deterministic output.
//! Malformed input never fails; unrecognized parts are passed through.
//!
//! # Example
//!
//! ```
//! use frametrim::trim::{normalize_function_name, Platform};
//!
//! assert_eq!(
//!     normalize_function_name("ns::C::operator()(int,int) const", Platform::Native),
//!     "ns::C::operator()"
//! );
//! assert_eq!(
//!     normalize_function_name("Ex.Execute[T] (Foo a, Bar b)", Platform::CSharp),
//!     "Ex.Execute[T]"
//! );
//! ```

pub mod batch;
pub mod cocoa;
pub mod csharp;
pub mod enclosed;
pub mod native;
pub mod tokens;
pub mod types;

pub use batch::{trim_batch, TrimmedName};
pub use enclosed::{find_spans, replace_enclosed, Replacement, Span};
pub use tokens::{split_tokens, tokenize, Token};
pub use types::{Platform, RawName, TrimOptions};

/// Trim `function` with the rules for `platform` and default options.
pub fn normalize_function_name(function: &str, platform: Platform) -> String {
    trim_function_name(function, platform, &TrimOptions::default())
}

/// Trim `function` with the rules for `platform`.
pub fn trim_function_name(function: &str, platform: Platform, options: &TrimOptions) -> String {
    match platform {
        Platform::Native => native::trim_native(function, options),
        Platform::CSharp => csharp::trim_csharp(function),
        Platform::Cocoa | Platform::Objc => cocoa::trim_cocoa(function, options),
    }
}

/// Trim `function` using a raw platform tag.
///
/// Tags without trimming rules return the input unchanged.
pub fn trim_tagged(function: &str, tag: &str, options: &TrimOptions) -> String {
    match Platform::from_tag(tag) {
        Some(platform) => trim_function_name(function, platform, options),
        None => {
            log::trace!("no trimming rules for platform {:?}", tag);
            function.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_by_platform() {
        let name = "Foo::bar(int) const";

        assert_eq!(normalize_function_name(name, Platform::Native), "Foo::bar");
        assert_eq!(normalize_function_name(name, Platform::CSharp), "Foo::bar(int) const");
    }

    #[test]
    fn test_objc_shares_cocoa_rules() {
        let thunk = "thunk for @escaping @callee_guaranteed () -> ()";

        assert_eq!(normalize_function_name(thunk, Platform::Objc), "thunk for closure");
        assert_eq!(normalize_function_name(thunk, Platform::Cocoa), "thunk for closure");
    }

    #[test]
    fn test_unknown_tag_is_identity() {
        let options = TrimOptions::default();

        assert_eq!(trim_tagged("foo(bar)", "python", &options), "foo(bar)");
        assert_eq!(trim_tagged("foo(bar)", "native", &options), "foo");
    }
}
