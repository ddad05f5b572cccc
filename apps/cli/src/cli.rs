//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use netpanel_console::ConsoleMode;

/// Validate console form values and inspect the console routing table.
#[derive(Debug, Parser)]
#[command(name = "netpanel", version, about)]
pub struct Cli {
    /// Settings file (TOML). Defaults to `netpanel.toml` when present.
    #[arg(long, short, global = true, env = "NETPANEL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log more (`-v` debug, `-vv` trace). `RUST_LOG` applies otherwise.
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run one rule on one value. Exits with status 1 when invalid.
    Check {
        /// Rule name, see `netpanel rules`.
        rule: String,
        /// Value to validate.
        value: String,
        /// Reference value for the `equal` rule.
        #[arg(long)]
        other: Option<String>,
        /// Print the verdict as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Validate a whole form from a JSON file of
    /// `{ "field": { "rule": "...", "value": "..." } }` entries.
    /// Prints the collected errors as JSON; exits with status 1 when any
    /// field is invalid.
    Form {
        /// The form file.
        file: PathBuf,
    },

    /// List rule names.
    Rules,

    /// Resolve a console path to its page.
    Route {
        /// Path such as `/standalone/network/dns-dhcp`.
        path: String,
        /// Console mode deciding where `/` leads.
        #[arg(long, value_enum, default_value_t = Mode::Standalone)]
        mode: Mode,
        /// Print the match as JSON.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    Standalone,
    Controller,
}

impl From<Mode> for ConsoleMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Standalone => Self::Standalone,
            Mode::Controller => Self::Controller,
        }
    }
}
