//! seometa - SEO metadata for auditrol.com.

mod cli;
mod config;
mod head;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands, Format};
use config::{SEO_CONFIG, SiteMetadata, init_metadata, metadata};
use head::render_head;
use std::io::{Write, stdout};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_metadata(load_metadata(&cli)?);

    let mut out = stdout().lock();
    run(&cli.command, metadata(), &mut out)?;
    out.flush()?;
    Ok(())
}

/// Execute a subcommand against `meta`, writing its output to `out`.
fn run(command: &Commands, meta: &SiteMetadata, out: &mut impl Write) -> Result<()> {
    match command {
        Commands::Show { format } => {
            let text = match format {
                Format::Toml => toml::to_string(meta)?,
                Format::Json => serde_json::to_string_pretty(meta)? + "\n",
            };
            write!(out, "{text}")?;
        }
        Commands::Get { field } => {
            let value = meta
                .get(field)
                .with_context(|| format!("valid fields: {}", SiteMetadata::FIELDS.join(", ")))?;
            if let Some(value) = value {
                writeln!(out, "{value}")?;
            }
        }
        Commands::Head => write!(out, "{}", render_head(meta)?)?,
        Commands::Fields => {
            for name in SiteMetadata::FIELDS {
                writeln!(out, "{name}")?;
            }
        }
    }
    Ok(())
}

/// Built-in record, or the override file from `-C` if given.
fn load_metadata(cli: &Cli) -> Result<SiteMetadata> {
    let Some(path) = &cli.config else {
        return Ok(SEO_CONFIG);
    };

    let meta = SiteMetadata::from_path(path)
        .with_context(|| format!("failed to load metadata from `{}`", path.display()))?;
    log!("config"; "loaded {}", path.display());
    Ok(meta)
}
