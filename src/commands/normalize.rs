//! `frametrim normalize`: trim names from arguments, a file or stdin.

use anyhow::Result;
use std::path::PathBuf;

use crate::config::{load_config, load_config_from, FrametrimConfig, OutputFormat};
use crate::io;
use crate::trim::{trim_batch, Platform, RawName, TrimOptions, TrimmedName};

/// Arguments of the normalize command as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct NormalizeConfig {
    pub names: Vec<String>,
    pub platform: Option<String>,
    pub input: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub no_lambdas: bool,
    pub no_parallel: bool,
    pub config: Option<PathBuf>,
}

/// Effective settings after merging flags over the config file.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizeSettings {
    pub platform: String,
    pub options: TrimOptions,
    pub format: OutputFormat,
    pub parallel: bool,
}

pub fn handle_normalize(config: NormalizeConfig) -> Result<()> {
    let file_config = match &config.config {
        Some(path) => load_config_from(path)?,
        None => load_config(),
    };
    let settings = resolve_settings(&config, &file_config)?;
    log::debug!("normalize settings: {:?}", settings);

    let names = collect_names(&config)?;
    let frames: Vec<RawName> = names
        .into_iter()
        .map(|name| RawName::new(name, settings.platform.as_str()))
        .collect();

    let trimmed = trim_batch(&frames, &settings.options, settings.parallel);
    let rendered = render(&trimmed, settings.format)?;
    io::write_output(config.output.as_deref(), &rendered)
}

/// Flags win over file values. An unknown platform tag is an error here,
/// unlike in the library where it means "leave the name alone".
pub fn resolve_settings(
    config: &NormalizeConfig,
    file_config: &FrametrimConfig,
) -> Result<NormalizeSettings> {
    let platform = config
        .platform
        .clone()
        .unwrap_or_else(|| file_config.default_platform.clone());
    platform.parse::<Platform>()?;

    let mut options = file_config.trim_options();
    if config.no_lambdas {
        options.normalize_lambdas = false;
    }

    Ok(NormalizeSettings {
        platform,
        options,
        format: config.format.unwrap_or(file_config.output.format),
        parallel: file_config.parallel.enabled && !config.no_parallel,
    })
}

fn collect_names(config: &NormalizeConfig) -> Result<Vec<String>> {
    if !config.names.is_empty() {
        return Ok(config.names.clone());
    }
    match &config.input {
        Some(path) => {
            let contents = io::read_file(path)?;
            Ok(contents.lines().map(str::to_string).collect())
        }
        None => io::read_stdin_lines(),
    }
}

/// Render trimmed names, one record per line.
pub fn render(trimmed: &[TrimmedName], format: OutputFormat) -> crate::Result<String> {
    let mut out = String::new();
    for name in trimmed {
        match format {
            OutputFormat::Plain => out.push_str(&name.trimmed),
            OutputFormat::Json => out.push_str(&serde_json::to_string(name)?),
        }
        out.push('\n');
    }
    Ok(out)
}
