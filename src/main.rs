use anyhow::Result;
use clap::Parser;
use frametrim::cli::{Cli, Commands};
use frametrim::commands::NormalizeConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    match cli.command {
        Commands::Normalize {
            names,
            platform,
            input,
            format,
            output,
            no_lambdas,
            no_parallel,
            config,
        } => frametrim::commands::handle_normalize(NormalizeConfig {
            names,
            platform,
            input,
            format,
            output,
            no_lambdas,
            no_parallel,
            config,
        }),
        Commands::Tokenize { text } => {
            frametrim::commands::handle_tokenize(&text);
            Ok(())
        }
        Commands::Init { force } => frametrim::commands::init_config(force),
    }
}

// RUST_LOG wins over -v
fn init_logging(verbosity: u8) {
    let default_filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}
