//! Configuration loading.
//!
//! Settings come from `.frametrim.toml`, found by walking up from the
//! current directory or given explicitly. Command-line flags override them.
//!
//! ```toml
//! default_platform = "native"
//! normalize_lambdas = true
//!
//! [output]
//! format = "plain"
//!
//! [parallel]
//! enabled = true
//! ```

mod core;
mod loader;

pub use self::core::{FrametrimConfig, OutputConfig, OutputFormat, ParallelConfig};
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
