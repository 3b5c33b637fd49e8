//! CLI argument definitions for gunsmith
//!
//! This module contains all clap-derived structs and enums for CLI parsing.

mod core;

pub use self::core::{Cli, Commands, OutputFormat};
