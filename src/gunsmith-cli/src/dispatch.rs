//! Command dispatch functions
//!
//! Resolves the catalog and output format, then hands each subcommand to
//! its handler.

use std::borrow::Cow;
use std::path::Path;

use anyhow::{Context, Result};
use gunsmith::Catalog;

use crate::cli::*;
use crate::commands;
use crate::config::Config;

/// Pick the catalog: command line, then config, then the built-in data
pub fn load_catalog(
    override_dir: Option<&Path>,
    config: &Config,
) -> Result<Cow<'static, Catalog>> {
    let Some(dir) = override_dir.or(config.catalog_dir.as_deref()) else {
        tracing::debug!("Using built-in catalog");
        return Ok(Cow::Borrowed(Catalog::builtin()));
    };

    let catalog = gunsmith::load_catalog_dir(dir)
        .with_context(|| format!("Failed to load catalog from {}", dir.display()))?;
    tracing::info!(
        firearms = catalog.len(),
        "Loaded catalog from {}",
        dir.display()
    );
    Ok(Cow::Owned(catalog))
}

/// Dispatch a parsed command line
pub fn dispatch(cli: Cli, config: &Config) -> Result<()> {
    let format = cli.format.or(config.format).unwrap_or_default();

    if let Commands::Configure {
        catalog_dir,
        reset,
        show,
    } = cli.command
    {
        return commands::configure::handle(catalog_dir, cli.format, reset, show);
    }

    let catalog = load_catalog(cli.catalog.as_deref(), config)?;

    match cli.command {
        Commands::Decode { weapon, code } => {
            commands::attachments::decode(&catalog, weapon, code, format)
        }
        Commands::Encode {
            weapon,
            attachments,
        } => commands::attachments::encode(&catalog, weapon, &attachments, format),
        Commands::List { weapon } => commands::attachments::list(&catalog, weapon, format),
        Commands::Item { item } => commands::items::show(&catalog, item, format),
        Commands::Configure { .. } => unreachable!("configure is handled before the catalog loads"),
    }
}
