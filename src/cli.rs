use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "frametrim")]
#[command(about = "Normalize stack frame function names for crash grouping", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Trim function names to their canonical form
    Normalize {
        /// Function names to trim (reads one per line from --input or stdin when empty)
        names: Vec<String>,

        /// Platform tag selecting the rules (native, c, csharp, cocoa, swift, objc)
        #[arg(short, long, env = "FRAMETRIM_PLATFORM")]
        platform: Option<String>,

        /// Read names from this file, one per line
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Keep compiler-generated lambda names as they are
        #[arg(long = "no-lambdas")]
        no_lambdas: bool,

        /// Trim sequentially
        #[arg(long = "no-parallel")]
        no_parallel: bool,

        /// Configuration file (defaults to .frametrim.toml discovery)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Show how a name splits into bracket-aware tokens
    ///
    /// Diagnostic listing, one token per line: `*` marks tokens that absorbed
    /// a bracketed run, followed by the token's byte offset and its text.
    Tokenize {
        /// Text to split
        text: String,
    },

    /// Initialize a new frametrim configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
