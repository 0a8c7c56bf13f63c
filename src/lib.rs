//! Stack frame function name normalization.
//!
//! Crash reporting pipelines group frames by function name, but the names a
//! symbolicator produces differ between compilers, platforms and builds of
//! the same code. `frametrim` reduces them to a stable canonical form:
//!
//! ```
//! use frametrim::{normalize_function_name, Platform};
//!
//! assert_eq!(
//!     normalize_function_name("foo::bar<X, Y<Z>>(int, char const*)", Platform::Native),
//!     "foo::bar<T>"
//! );
//! assert_eq!(
//!     normalize_function_name("closure #1 (T1) in foo(bar: T2)", Platform::Cocoa),
//!     "foo"
//! );
//! ```

// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod io;
pub mod trim;

// Re-export commonly used types
pub use crate::errors::{Error, Result};
pub use crate::trim::{
    normalize_function_name, trim_batch, trim_function_name, trim_tagged, Platform, RawName,
    TrimOptions, TrimmedName,
};
