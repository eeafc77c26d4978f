//! Config command implementation.

use colored::Colorize;
use serde_json::json;

use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::cli::commands::Context;
use crate::config::Config;
use crate::error::ClockError;
use crate::output::{format_config_pretty, to_json};

/// Execute config subcommands.
///
/// # Errors
///
/// Returns an error if the config file cannot be written or output fails.
pub fn config(ctx: &Context, cmd: &ConfigCommands) -> Result<String, ClockError> {
    match cmd {
        ConfigCommands::Show => show(ctx),
        ConfigCommands::Path => Ok(ctx.config_path.display().to_string()),
        ConfigCommands::Init { force } => init(ctx, *force),
    }
}

fn show(ctx: &Context) -> Result<String, ClockError> {
    match ctx.format {
        OutputFormat::Json => to_json(&json!({
            "path": ctx.config_path,
            "exists": ctx.config_path.exists(),
            "file": ctx.config,
            "effective": ctx.session,
        })),
        OutputFormat::Pretty => {
            let source = if ctx.config_path.exists() {
                ctx.config_path.display().to_string()
            } else {
                format!("{} (not found, using defaults)", ctx.config_path.display())
            };
            Ok(format!(
                "{}\n{}\n{}\n\n{}",
                "Effective settings".bold(),
                format!("Config: {source}").dimmed(),
                "─".repeat(40),
                format_config_pretty(&ctx.session)
            ))
        }
    }
}

fn init(ctx: &Context, force: bool) -> Result<String, ClockError> {
    if ctx.config_path.exists() && !force {
        return Err(ClockError::Config(format!(
            "Config file already exists at {}.\nUse --force to overwrite.",
            ctx.config_path.display()
        )));
    }

    Config::default().save_to_path(&ctx.config_path)?;
    tracing::info!(path = %ctx.config_path.display(), "wrote default config");
    Ok(format!(
        "{} {}",
        "Wrote default config to".green(),
        ctx.config_path.display()
    ))
}
