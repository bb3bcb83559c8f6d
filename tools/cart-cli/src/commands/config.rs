//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::{Context, CONFIG_NAMES};

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Init { force } => init_config(force, ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");

    ctx.output.info("[storage]");
    ctx.output
        .kv("dir", &ctx.storage_dir().display().to_string());
    ctx.output.kv("namespace", &ctx.config.storage.namespace);
    ctx.output
        .kv("key", &ctx.config.cart_config().storage_key());

    ctx.output.info("[catalog]");
    match &ctx.config.catalog.fixture {
        Some(fixture) => ctx.output.kv("fixture", fixture),
        None => {
            ctx.output.kv("base_url", &ctx.config.catalog.base_url);
            ctx.output
                .kv("timeout_ms", &ctx.config.catalog.timeout_ms.to_string());
            ctx.output
                .kv("max_retries", &ctx.config.catalog.max_retries.to_string());
            ctx.output.kv(
                "product_max_retries",
                &ctx.config.catalog.product_max_retries.to_string(),
            );
        }
    }

    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let path = ctx.cwd.join(CONFIG_NAMES[0]);

    if path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            path.display()
        );
    }

    fs::write(&path, generate_default_config())?;
    ctx.output
        .success(&format!("Created {}", path.display()));
    Ok(())
}
