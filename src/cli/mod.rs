//! # Command-Line Adapter
//!
//! Drives the core from a shell. This is where "now" gets read from a
//! [`Clock`] and where resolved links are turned into text or JSON.
//!
//! ```text
//! Args ──► config::resolve* ──► core (format / resolve) ──► output ──► stdout
//! ```
//!
//! [`run`] writes to any `Write`, so tests capture output in a `Vec<u8>`.

pub mod args;
pub mod output;

use std::fmt;
use std::io::{self, Write};

use log::{debug, info};

pub use args::{Args, Command};

use crate::core::breadcrumb::Breadcrumbs;
use crate::core::clock::Clock;
use crate::core::config::{self, ConfigError, SignpostConfig};
use crate::core::nav::NavMenu;

#[derive(Debug)]
pub enum CliError {
    Config(ConfigError),
    Io(io::Error),
    NoNavItems,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(e) => write!(f, "{e}"),
            CliError::Io(e) => write!(f, "output error: {e}"),
            CliError::NoNavItems => write!(
                f,
                "no navigation items: pass PATH=LABEL arguments or add [[nav]] entries to the config"
            ),
        }
    }
}

impl std::error::Error for CliError {}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        CliError::Config(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}

pub fn run(
    command: &Command,
    config: &SignpostConfig,
    clock: &dyn Clock,
    out: &mut impl Write,
) -> Result<(), CliError> {
    match command {
        Command::Ago { timestamp, now } => {
            let formatter = config::resolve_formatter(config)?;
            let now = (*now).unwrap_or_else(|| clock.now());
            let label = formatter.format(*timestamp, now);
            debug!("{} relative to {} is {:?}", timestamp, now, label);
            writeln!(out, "{label}")?;
        }
        Command::Nav {
            current,
            variant,
            json,
            items,
        } => {
            let resolved = config::resolve(config, *variant)?;
            let menu = if items.is_empty() {
                resolved.nav
            } else {
                NavMenu::new(items.clone())
            };
            if menu.is_empty() {
                return Err(CliError::NoNavItems);
            }
            if menu.active_item(current).is_none() {
                info!("No navigation item matches {current}");
            }

            let links = menu.resolve(current, resolved.variant);
            if *json {
                output::write_json(out, &links)?;
            } else {
                output::write_links(out, &links)?;
            }
        }
        Command::Crumbs {
            current,
            json,
            items,
        } => {
            let crumbs = Breadcrumbs::new(items.clone()).resolve(current);
            if *json {
                output::write_json(out, &crumbs)?;
            } else {
                writeln!(out, "{}", output::breadcrumb_line(&crumbs))?;
            }
        }
    }
    Ok(())
}
