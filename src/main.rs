use anyhow::{Context as _, Result};
use clap::Parser;
use colored::Colorize;

use pomoclock::cli::args::{Cli, Commands};
use pomoclock::cli::commands::{self, Context};
use pomoclock::clock::TerminalBell;
use pomoclock::logging::{self, LogTarget};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let ctx = Context::resolve(&cli).context("failed to load settings")?;
    ctx.config.general.color.apply();

    let interactive = matches!(cli.command, None | Some(Commands::Tui));
    let target = if interactive {
        ctx.paths.ensure_dirs()?;
        LogTarget::File(ctx.paths.log_file())
    } else {
        LogTarget::Stderr
    };
    logging::init(cli.verbose, &ctx.config.general.log_level, &target)?;
    tracing::debug!(config = %ctx.config_path.display(), session = ?ctx.session, "settings resolved");

    let output = match &cli.command {
        None | Some(Commands::Tui) => {
            pomoclock::tui::run(ctx.build_clock(Box::new(TerminalBell::new()))?)?;
            String::new()
        }
        Some(Commands::Run { sessions }) => commands::run(&ctx, *sessions)?,
        Some(Commands::Simulate(args)) => commands::simulate(&ctx, args)?,
        Some(Commands::Config { command }) => commands::config(&ctx, command)?,
        Some(Commands::Completions { shell, install }) => commands::completions(shell, *install)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
