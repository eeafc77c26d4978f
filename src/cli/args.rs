use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "pomoclock")]
#[command(about = "A Pomodoro session clock for the terminal")]
#[command(long_about = "pomoclock - A Pomodoro session clock for the terminal

Alternates focused work sessions with short breaks, and takes a long break
after every full cycle of work sessions.

QUICK START:
  pomoclock                     Open the interactive timer
  pomoclock run                 Headless countdown, one status line per second
  pomoclock run --sessions 4    Stop after four sessions complete
  pomoclock simulate --completions 8 -o json
                                Fast-forward the clock and print the events

SETTINGS:
  Durations come from ~/.pomoclock/config.yaml and can be overridden per run:
  pomoclock --work 50m --short-break 10 --cycle 3

For more information on a specific command, run:
  pomoclock <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file to read instead of ~/.pomoclock/config.yaml
    #[arg(long, env = "POMOCLOCK_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub clock: ClockArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Per-run overrides for the configured clock settings.
#[derive(Args, Debug, Clone, Default)]
pub struct ClockArgs {
    /// Work session length (e.g. 25, 25m, 1h, 90s)
    #[arg(long, global = true)]
    pub work: Option<String>,

    /// Short break length
    #[arg(long, global = true)]
    pub short_break: Option<String>,

    /// Long break length
    #[arg(long, global = true)]
    pub long_break: Option<String>,

    /// Work sessions per cycle before a long break
    #[arg(long, global = true)]
    pub cycle: Option<u32>,

    /// Do not ring the bell on completion
    #[arg(long, global = true)]
    pub mute: bool,

    /// Label the sessions with the task being worked on
    #[arg(long, global = true)]
    pub task: Option<String>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive timer (default)
    ///
    /// # Keybindings
    ///
    ///   space        Start / pause
    ///   r            Reset the current session
    ///   s            Skip to the next session
    ///   w / b / l    Cycle work, short break, long break presets
    ///   c            Cycle the number of sessions per cycle
    ///   m            Toggle sound
    ///   ?            Help
    ///   q / Esc      Quit
    Tui,

    /// Run the clock headless, printing a status line every second
    ///
    /// Sessions start automatically one after another.
    ///
    /// # Examples
    ///
    ///   pomoclock run
    ///   pomoclock run --sessions 2 --work 50m
    Run {
        /// Stop after this many sessions complete (work and breaks both count)
        #[arg(long, short = 'n')]
        sessions: Option<u32>,
    },

    /// Fast-forward the clock without waiting on real time
    ///
    /// Each session starts automatically when the previous one ends.
    /// Prints every completion and the final state.
    ///
    /// # Examples
    ///
    ///   pomoclock simulate --completions 8
    ///   pomoclock simulate --ticks 90 --work 1m -o json
    Simulate(SimulateArgs),

    /// Show or initialize the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    ///
    /// Example: pomoclock completions zsh > ~/.zsh/completions/_pomoclock
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        shell: String,

        /// Show installation instructions
        #[arg(long, short = 'i')]
        install: bool,
    },
}

#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    /// Maximum number of ticks to deliver
    #[arg(long, short = 't')]
    pub ticks: Option<u64>,

    /// Stop after this many natural completions
    #[arg(long, short = 'c')]
    pub completions: Option<u32>,

    /// Skip this many sessions before ticking
    #[arg(long, default_value = "0")]
    pub skip: u32,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,
    /// Print the config file path
    Path,
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long, short = 'f')]
        force: bool,
    },
}
