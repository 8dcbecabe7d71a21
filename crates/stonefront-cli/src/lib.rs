//! # stonefront-cli
//!
//! Command-line tools for the Stonefront site engine:
//! - Fragment rendering (featured list, grid, detail overlay)
//! - Project data listing and validation
//! - Quote-request mailto construction
//! - Configuration management

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

pub use error::{Error, Result};

use cli::{Args, Command};

/// Dispatch a parsed invocation.
pub async fn run(args: Args) -> Result<()> {
    let config = config::SiteConfig::load(args.config.as_deref())?;

    match args.command {
        Command::Render { view } => commands::cmd_render(&config, view).await,
        Command::List {
            data,
            filter,
            featured,
        } => commands::cmd_list(&config, data, filter, featured).await,
        Command::Validate { data } => commands::cmd_validate(&config, data).await,
        Command::Quote(quote) => commands::cmd_quote(&config, quote),
        Command::Config { action } => {
            commands::handle_config_command(args.config.as_deref(), action)
        }
    }
}
