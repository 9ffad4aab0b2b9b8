use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::core::nav::{NavigationItem, Variant};
use crate::core::timestamp::Timestamp;

#[derive(Parser, Debug)]
#[command(
    name = "signpost",
    about = "Relative time labels and navigation link state"
)]
pub struct Args {
    /// Config file to use instead of ~/.signpost/config.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Append logs to this file instead of writing them to stderr
    #[arg(long, global = true, env = "SIGNPOST_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Raise terminal log verbosity (-v info, -vv debug); a log file always gets debug
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print how long ago a timestamp was
    Ago {
        /// RFC 3339 (2024-03-05T14:30:00Z) or Unix seconds
        #[arg(allow_negative_numbers = true)]
        timestamp: Timestamp,

        /// Reference time; defaults to the system clock
        #[arg(long, allow_negative_numbers = true)]
        now: Option<Timestamp>,
    },

    /// Resolve navigation links against the current location
    Nav {
        /// Path the user is currently viewing
        #[arg(long)]
        current: String,

        /// Navigation surface to style for
        #[arg(long, value_enum)]
        variant: Option<Variant>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,

        /// PATH=LABEL items; falls back to [[nav]] in the config
        items: Vec<NavigationItem>,
    },

    /// Resolve a breadcrumb trail against the current location
    Crumbs {
        /// Path the user is currently viewing
        #[arg(long)]
        current: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,

        /// PATH=LABEL items, root first
        #[arg(required = true)]
        items: Vec<NavigationItem>,
    },
}
