//! Command handlers for gunsmith CLI
//!
//! Each subcommand has its own module with handler functions.

pub mod attachments;
pub mod configure;
pub mod items;
