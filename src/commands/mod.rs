//! CLI command implementations.
//!
//! Available commands:
//! - **normalize**: Trim function names to their canonical form
//! - **tokenize**: Show the bracket-aware token split of a name
//! - **init**: Initialize a new frametrim configuration file

pub mod init;
pub mod normalize;
pub mod tokenize;

pub use init::init_config;
pub use normalize::{handle_normalize, NormalizeConfig};
pub use tokenize::handle_tokenize;
