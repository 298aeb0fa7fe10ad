//! Configuration management commands.

use std::path::PathBuf;

use anyhow::{bail, Result};
use dialoguer::Confirm;

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Get { key } => get_config(&key, ctx).await,
        ConfigCommand::Set { key, value } => set_config(&key, &value, ctx).await,
        ConfigCommand::Init { catalog, force } => init_config(&catalog, force, ctx).await,
        ConfigCommand::Validate => validate_config(ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(none, using defaults)"),
    }

    ctx.output.info("[catalog]");
    ctx.output.kv("path", &ctx.config.get("catalog.path")?);

    ctx.output.info("[search]");
    ctx.output.kv("per_page", &ctx.config.search.per_page.to_string());
    ctx.output.kv("related_limit", &ctx.config.search.related_limit.to_string());

    ctx.output.info("[logging]");
    ctx.output.kv("level", &ctx.config.get("logging.level")?);
    ctx.output.kv("format", &ctx.config.get("logging.format")?);

    Ok(())
}

async fn get_config(key: &str, ctx: &Context) -> Result<()> {
    let value = ctx.config.get(key)?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "key": key, "value": value }));
    } else {
        println!("{}", value);
    }

    Ok(())
}

async fn set_config(key: &str, value: &str, ctx: &Context) -> Result<()> {
    let Some(path) = &ctx.config_path else {
        bail!("No config file found. Run `market config init` first.");
    };

    let mut config = ctx.config.clone();
    config.set(key, value)?;
    config.save(path)?;

    ctx.output.success(&format!("Set {} = {}", key, value));
    Ok(())
}

async fn init_config(catalog: &str, force: bool, ctx: &Context) -> Result<()> {
    let config_path: PathBuf = ctx.cwd.join("market.toml");

    if config_path.exists() && !force {
        if ctx.output.is_json() {
            bail!(
                "Config file already exists: {}. Use --force to overwrite.",
                config_path.display()
            );
        }
        let overwrite = Confirm::new()
            .with_prompt(format!("{} exists. Overwrite?", config_path.display()))
            .default(false)
            .interact()?;
        if !overwrite {
            ctx.output.warn("Keeping existing config");
            return Ok(());
        }
    }

    std::fs::write(&config_path, generate_default_config(catalog))?;
    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

async fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let (mut errors, warnings) = ctx.config.check();

    if ctx.config.catalog.path.is_some() {
        if let Err(e) = ctx.load_catalog(None) {
            errors.push(format!("catalog.path: {:#}", e));
        }
    }

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}
