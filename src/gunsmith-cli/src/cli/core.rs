//! Core CLI definitions

use clap::{Parser, Subcommand};
use gunsmith::{AttachmentName, ItemType};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gunsmith")]
#[command(about = "Firearm attachment code tool", long_about = None)]
pub struct Cli {
    /// Directory holding firearms.tsv and attachments.tsv (overrides the configured catalog)
    #[arg(long, global = true, env = "GUNSMITH_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Output format (overrides the configured format)
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decode an attachments code into the installed attachments
    #[command(visible_alias = "d")]
    Decode {
        /// Firearm (e.g. GunAK)
        weapon: ItemType,

        /// Attachments code, including the firearm's base code
        code: u32,
    },

    /// Encode a set of attachments into an attachments code
    #[command(visible_alias = "e")]
    Encode {
        /// Firearm (e.g. GunAK)
        weapon: ItemType,

        /// Attachments to install (e.g. DotSight Laser)
        attachments: Vec<AttachmentName>,
    },

    /// List the attachments a firearm can carry
    #[command(visible_alias = "l")]
    List {
        /// Firearm (e.g. GunAK)
        weapon: ItemType,
    },

    /// Show categories and conversions for an item
    #[command(visible_alias = "i")]
    Item {
        /// Item (e.g. Ammo556x45)
        item: ItemType,
    },

    /// Configure default settings (`--format` sets the default output format)
    #[command(visible_alias = "c")]
    Configure {
        /// Set default catalog directory
        #[arg(long)]
        catalog_dir: Option<PathBuf>,

        /// Clear all configured defaults
        #[arg(long)]
        reset: bool,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}

/// Output format for command results
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Table => f.write_str("table"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_decode() {
        let cli = Cli::try_parse_from(["gunsmith", "decode", "gunak", "150"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Decode {
                weapon: ItemType::GunAK,
                code: 150
            }
        ));
        assert_eq!(cli.format, None);
    }

    #[test]
    fn test_parse_encode_with_global_flags() {
        let cli = Cli::try_parse_from([
            "gunsmith",
            "encode",
            "GunCOM15",
            "DotSight",
            "laser",
            "--format",
            "json",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Encode {
                weapon,
                attachments,
            } => {
                assert_eq!(weapon, ItemType::GunCOM15);
                assert_eq!(
                    attachments,
                    vec![AttachmentName::DotSight, AttachmentName::Laser]
                );
            }
            _ => panic!("expected encode"),
        }
    }

    #[test]
    fn test_parse_configure_uses_global_format() {
        let cli = Cli::try_parse_from(["gunsmith", "configure", "--format", "json"]).unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(matches!(
            cli.command,
            Commands::Configure {
                catalog_dir: None,
                reset: false,
                show: false,
            }
        ));
    }

    #[test]
    fn test_parse_rejects_unknown_item() {
        assert!(Cli::try_parse_from(["gunsmith", "list", "Railgun"]).is_err());
    }
}
