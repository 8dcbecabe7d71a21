//! Argument definitions for the `stonefront` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Stonefront site engine administration tool
#[derive(Parser, Debug)]
#[command(name = "stonefront")]
#[command(about = "Stonefront site engine administration tool", long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, env = "STONEFRONT_CONFIG")]
    pub config: Option<String>,

    /// What to do
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a portfolio fragment
    Render {
        /// Which view to render
        #[command(subcommand)]
        view: RenderView,
    },
    /// List projects from the data document
    List {
        /// Data document path or URL (defaults to the configured path)
        #[arg(long)]
        data: Option<String>,
        /// Restrict to one category filter label
        #[arg(long)]
        filter: Option<String>,
        /// Restrict to featured projects
        #[arg(long)]
        featured: bool,
    },
    /// Validate the project data document
    Validate {
        /// Data document path or URL (defaults to the configured path)
        #[arg(long)]
        data: Option<String>,
    },
    /// Build a quote-request mailto link
    Quote(QuoteArgs),
    /// Configuration management
    Config {
        /// Config operation
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Shared options for the render subcommands.
#[derive(clap::Args, Debug)]
pub struct RenderOpts {
    /// Data document path or URL (defaults to the configured path)
    #[arg(long)]
    pub data: Option<String>,
    /// Deployment base prefix (defaults to the configured base)
    #[arg(long)]
    pub base: Option<String>,
    /// Write the fragment to a file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,
}

/// Portfolio views the CLI can render.
#[derive(Subcommand, Debug)]
pub enum RenderView {
    /// The capped landing-page featured list
    Featured {
        /// Render options
        #[command(flatten)]
        opts: RenderOpts,
    },
    /// The filterable grid
    Grid {
        /// Render options
        #[command(flatten)]
        opts: RenderOpts,
        /// Category filter label
        #[arg(long, default_value = "All")]
        filter: String,
    },
    /// The detail overlay for one project
    Modal {
        /// Render options
        #[command(flatten)]
        opts: RenderOpts,
        /// Project id
        #[arg(long)]
        id: String,
    },
}

/// Fields of a quote request.
#[derive(clap::Args, Debug)]
pub struct QuoteArgs {
    /// Visitor name
    #[arg(long)]
    pub name: String,
    /// Callback phone number
    #[arg(long)]
    pub phone: String,
    /// Reply email address
    #[arg(long)]
    pub email: String,
    /// Project address
    #[arg(long, default_value = "")]
    pub address: String,
    /// Kind of work requested
    #[arg(long, default_value = "")]
    pub project_type: String,
    /// Budget range
    #[arg(long, default_value = "")]
    pub budget: String,
    /// Free-form message
    #[arg(long, default_value = "")]
    pub message: String,
    /// Recipient address (defaults to the configured contact address)
    #[arg(long)]
    pub to: Option<String>,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Get a configuration value by dotted key
    Get {
        /// Key, e.g. `contact_email`
        key: String,
    },
}
