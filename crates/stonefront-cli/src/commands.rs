//! Handler functions for CLI commands.

use std::collections::HashSet;
use std::path::PathBuf;

use stonefront_core::util::paths::SiteBase;
use stonefront_content::{Filter, source_for, try_load};
use stonefront_portfolio::PortfolioState;
use stonefront_portfolio::modal::render_modal;
use stonefront_portfolio::render::{render_featured, render_grid};
use stonefront_site::QuoteRequest;

use crate::cli::{ConfigAction, QuoteArgs, RenderView};
use crate::config::SiteConfig;
use crate::error::Result;

// ============================================================================
// Rendering
// ============================================================================

/// Render one portfolio fragment to stdout or a file.
pub async fn cmd_render(config: &SiteConfig, view: RenderView) -> Result<()> {
    match view {
        RenderView::Featured { opts } => {
            let state = load_state(config, opts.data.as_deref()).await?;
            let html = render_featured(&state, &site_base(config, opts.base.as_deref()));
            emit(opts.out, &html)
        }
        RenderView::Grid { opts, filter } => {
            let filter: Filter = filter.parse()?;
            let state = load_state(config, opts.data.as_deref()).await?;
            let html = render_grid(&state, filter, &site_base(config, opts.base.as_deref()));
            emit(opts.out, &html)
        }
        RenderView::Modal { opts, id } => {
            let state = load_state(config, opts.data.as_deref()).await?;
            let project = state
                .find(&id)
                .cloned()
                .ok_or(stonefront_core::Error::ProjectNotFound { id })?;
            let html = render_modal(&project, &site_base(config, opts.base.as_deref()));
            emit(opts.out, &html)
        }
    }
}

/// List projects, optionally restricted by filter label or featured flag.
pub async fn cmd_list(
    config: &SiteConfig,
    data: Option<String>,
    filter: Option<String>,
    featured: bool,
) -> Result<()> {
    let filter: Filter = match filter {
        Some(label) => label.parse()?,
        None => Filter::All,
    };
    let state = load_state(config, data.as_deref()).await?;

    let selected: Vec<_> = state
        .filtered(filter)
        .into_iter()
        .filter(|p| !featured || p.featured)
        .collect();

    for project in &selected {
        println!("{}\t{}\t{}", project.id, project.category, project.title);
    }
    println!("{} project(s)", selected.len());
    Ok(())
}

/// Validate the data document: structure via deserialization, plus the
/// id-uniqueness invariant card activation depends on.
pub async fn cmd_validate(config: &SiteConfig, data: Option<String>) -> Result<()> {
    let location = data.unwrap_or_else(|| config.data_path.clone());
    let source = source_for(&location);
    let projects = try_load(source.as_ref()).await?;

    let mut seen = HashSet::new();
    for project in &projects {
        if !seen.insert(project.id.as_str()) {
            return Err(stonefront_core::Error::validation_field(
                "id",
                format!("duplicate project id: {}", project.id),
            )
            .into());
        }
    }

    println!("ok: {} project(s) in {location}", projects.len());
    Ok(())
}

/// Build and print the quote-request mailto URL.
pub fn cmd_quote(config: &SiteConfig, args: QuoteArgs) -> Result<()> {
    let request = QuoteRequest {
        name: args.name,
        phone: args.phone,
        email: args.email,
        address: args.address,
        project_type: args.project_type,
        budget: args.budget,
        message: args.message,
    };
    let recipient = args.to.unwrap_or_else(|| config.contact_email.clone());
    let url = request.mailto_url(&recipient)?;
    println!("{url}");
    Ok(())
}

async fn load_state(config: &SiteConfig, data: Option<&str>) -> Result<PortfolioState> {
    let location = data.unwrap_or(&config.data_path);
    let source = source_for(location);
    let projects = try_load(source.as_ref()).await?;

    let mut state = PortfolioState::new();
    state.replace_projects(projects);
    Ok(state)
}

fn site_base(config: &SiteConfig, base: Option<&str>) -> SiteBase {
    SiteBase::new(base.unwrap_or(&config.base_path))
}

fn emit(out: Option<PathBuf>, fragment: &str) -> Result<()> {
    match out {
        Some(path) => {
            std::fs::write(&path, fragment)?;
            log::info!("wrote {}", path.display());
            Ok(())
        }
        None => {
            print!("{fragment}");
            Ok(())
        }
    }
}

// ============================================================================
// Config commands
// ============================================================================

/// Handle a config subcommand.
pub fn handle_config_command(config_path: Option<&str>, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Path => cmd_config_path(config_path),
        ConfigAction::Init { force } => cmd_config_init(config_path, force),
        ConfigAction::Get { key } => cmd_config_get(config_path, &key),
    }
}

/// Show the resolved config file path.
fn cmd_config_path(config_path: Option<&str>) -> Result<()> {
    match SiteConfig::resolve_config_path(config_path) {
        Some(path) => {
            println!("{}", path.display());
            if !path.exists() {
                eprintln!("(file does not exist; run `stonefront config init` to create it)");
            }
            Ok(())
        }
        None => Err(stonefront_core::Error::config(
            "could not determine config directory for this platform",
        )
        .into()),
    }
}

/// Write a default config file.
fn cmd_config_init(config_path: Option<&str>, force: bool) -> Result<()> {
    let Some(path) = SiteConfig::resolve_config_path(config_path) else {
        return Err(stonefront_core::Error::config(
            "could not determine config directory for this platform",
        )
        .into());
    };

    if path.exists() && !force {
        return Err(stonefront_core::Error::config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        ))
        .into());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, SiteConfig::default().to_toml()?)?;
    println!("wrote {}", path.display());
    Ok(())
}

/// Get a configuration value by dotted key.
fn cmd_config_get(config_path: Option<&str>, key: &str) -> Result<()> {
    let config = SiteConfig::load(config_path)?;
    let value = toml::Value::try_from(&config)?;
    match get_nested_value(&value, key) {
        Some(found) => {
            println!("{}", format_toml_value(found));
            Ok(())
        }
        None => Err(stonefront_core::Error::config(format!(
            "key '{key}' not found in configuration"
        ))
        .into()),
    }
}

fn get_nested_value<'a>(value: &'a toml::Value, dotted_key: &str) -> Option<&'a toml::Value> {
    dotted_key
        .split('.')
        .try_fold(value, |current, part| current.get(part))
}

fn format_toml_value(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// ============================================================================
// Tests
// ============================================================================
