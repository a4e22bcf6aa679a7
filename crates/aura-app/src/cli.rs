use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// AuraOS Nexus: terminal console for the Aria persona.
#[derive(Parser, Debug)]
#[command(name = "aura", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter directive override (e.g. `aura=debug`).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Skip the boot animation.
    #[arg(long, global = true)]
    pub no_boot: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Interactive chat with the persona (default).
    Chat,
    /// Nexus command console.
    Console,
    /// Print simulated system metrics.
    Dashboard {
        /// Number of ticks to print before exiting; runs until Ctrl-C if omitted.
        #[arg(long)]
        ticks: Option<u32>,
    },
    /// Print the rolling thought log.
    Thoughts {
        /// Number of updates to print before exiting; runs until Ctrl-C if omitted.
        #[arg(long)]
        count: Option<u32>,
    },
    /// Inspect or edit the persisted configuration.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    /// Print the effective config as JSON.
    Show,
    /// Print the config file path.
    Path,
    /// Overwrite the config file with defaults.
    Reset,
    /// Set one value by dotted key, e.g. `ai.temperature 0.4`.
    Set { key: String, value: String },
}

impl Args {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Chat)
    }
}

pub fn parse() -> Args {
    Args::parse()
}
