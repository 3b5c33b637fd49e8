//! Configuration command handlers
//!
//! Handles the `configure` subcommand for setting up gunsmith CLI defaults.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::config::Config;

/// Handle the configure command
///
/// # Arguments
/// * `catalog_dir` - Optional catalog directory to set as default
/// * `format` - Optional output format to set as default
/// * `reset` - If true, clear all defaults
/// * `show` - If true, show current configuration
pub fn handle(
    catalog_dir: Option<PathBuf>,
    format: Option<OutputFormat>,
    reset: bool,
    show: bool,
) -> Result<()> {
    let mut config = Config::load()?;

    if show {
        print!("{}", render_config(&config));
        if let Ok(path) = Config::config_path() {
            println!("Config file: {}", path.display());
        }
        return Ok(());
    }

    if !apply(&mut config, catalog_dir, format, reset)? {
        show_usage();
        return Ok(());
    }

    let path = config.save()?;
    print!("{}", render_config(&config));
    println!("Config saved to: {}", path.display());

    Ok(())
}

/// Apply requested changes, returning whether anything changed
fn apply(
    config: &mut Config,
    catalog_dir: Option<PathBuf>,
    format: Option<OutputFormat>,
    reset: bool,
) -> Result<bool> {
    let mut changed = false;

    if reset {
        *config = Config::default();
        changed = true;
    }

    if let Some(dir) = catalog_dir {
        let dir = dir
            .canonicalize()
            .with_context(|| format!("Catalog directory {} does not exist", dir.display()))?;
        gunsmith::load_catalog_dir(&dir)
            .with_context(|| format!("{} is not a valid catalog", dir.display()))?;
        config.catalog_dir = Some(dir);
        changed = true;
    }

    if let Some(format) = format {
        config.format = Some(format);
        changed = true;
    }

    Ok(changed)
}

fn render_config(config: &Config) -> String {
    let mut out = String::new();
    match &config.catalog_dir {
        Some(dir) => out.push_str(&format!("Catalog: {}\n", dir.display())),
        None => out.push_str("Catalog: built-in\n"),
    }
    out.push_str(&format!("Format: {}\n", config.format.unwrap_or_default()));
    out
}

/// Show usage help for the configure command
fn show_usage() {
    println!("Usage: gunsmith configure --catalog-dir DIR");
    println!("   or: gunsmith configure --format table|json");
    println!("   or: gunsmith configure --reset");
    println!("   or: gunsmith configure --show");
    println!();
    println!("Note: a catalog directory holds firearms.tsv and attachments.tsv");
    println!("      in the same layout as share/manifest/.");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_show_usage_does_not_panic() {
        show_usage();
    }

    #[test]
    fn test_apply_nothing() {
        let mut config = Config::default();
        assert!(!apply(&mut config, None, None, false).unwrap());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_apply_format_and_reset() {
        let mut config = Config::default();
        assert!(apply(&mut config, None, Some(OutputFormat::Json), false).unwrap());
        assert_eq!(config.format, Some(OutputFormat::Json));

        assert!(apply(&mut config, None, None, true).unwrap());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_apply_validates_catalog_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        assert!(apply(&mut config, Some(dir.path().to_path_buf()), None, false).is_err());
        assert_eq!(config.catalog_dir, None);

        fs::write(
            dir.path().join("firearms.tsv"),
            "weapon\tbase_code\tmax_ammo\nGunAK\t139\t35\n",
        )
        .unwrap();
        fs::write(dir.path().join("attachments.tsv"), "weapon\tslot\tname\tcode\n").unwrap();
        assert!(apply(&mut config, Some(dir.path().to_path_buf()), None, false).unwrap());
        assert!(config.catalog_dir.is_some());
    }

    #[test]
    fn test_render_config() {
        let config = Config {
            catalog_dir: None,
            format: Some(OutputFormat::Json),
        };
        assert_eq!(render_config(&config), "Catalog: built-in\nFormat: json\n");
    }
}
