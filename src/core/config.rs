//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.signpost/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{FixedOffset, Offset, Utc};

use crate::core::nav::{NavMenu, NavigationItem, Variant};
use crate::core::relative_time::{DEFAULT_DATE_FORMAT, RelativeTimeFormatter};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SignpostConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub time: TimeConfig,
    #[serde(default)]
    pub nav: Vec<NavEntry>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub variant: Option<Variant>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TimeConfig {
    pub date_format: Option<String>,
    pub utc_offset: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NavEntry {
    pub path: String,
    pub label: String,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub variant: Variant,
    pub formatter: RelativeTimeFormatter,
    pub nav: NavMenu,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.signpost/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".signpost").join("config.toml"))
}

/// Load config from `~/.signpost/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `SignpostConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<SignpostConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(SignpostConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(SignpostConfig::default());
    }

    load_config_from(&path)
}

/// Load config from an explicit path. A missing file is an error here.
pub fn load_config_from(path: &Path) -> Result<SignpostConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<SignpostConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Signpost Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# variant = "desktop"                # "desktop" or "mobile"

# [time]
# date_format = "%-m/%-d/%Y"         # strftime pattern for labels a week or older
# utc_offset = "+00:00"              # offset used to pick the calendar date

# [[nav]]
# path = "/"
# label = "Home"

# [[nav]]
# path = "/projects"
# label = "Projects"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_variant` is from the CLI flag (None = not specified).
pub fn resolve(
    config: &SignpostConfig,
    cli_variant: Option<Variant>,
) -> Result<ResolvedConfig, ConfigError> {
    resolve_with_env(config, cli_variant, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], reading environment variables through `env`.
pub fn resolve_with_env(
    config: &SignpostConfig,
    cli_variant: Option<Variant>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<ResolvedConfig, ConfigError> {
    // Variant: CLI → env → config → default
    let env_variant = env("SIGNPOST_VARIANT")
        .map(|v| v.parse::<Variant>())
        .transpose()
        .map_err(|e| ConfigError::Invalid(format!("SIGNPOST_VARIANT: {e}")))?;
    let variant = cli_variant
        .or(env_variant)
        .or(config.general.variant)
        .unwrap_or_default();

    let formatter = resolve_formatter_with_env(config, &env)?;

    let items = config
        .nav
        .iter()
        .map(|entry| {
            NavigationItem::new(entry.path.clone(), entry.label.clone())
                .map_err(|e| ConfigError::Invalid(format!("[[nav]] {e}")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ResolvedConfig {
        variant,
        formatter,
        nav: NavMenu::new(items),
    })
}

/// Resolve only the `[time]` settings. Nav and variant settings are not
/// read, so a bad `[[nav]]` entry or `SIGNPOST_VARIANT` cannot fail this.
pub fn resolve_formatter(config: &SignpostConfig) -> Result<RelativeTimeFormatter, ConfigError> {
    resolve_formatter_with_env(config, |key| std::env::var(key).ok())
}

/// Same as [`resolve_formatter`], reading environment variables through `env`.
pub fn resolve_formatter_with_env(
    config: &SignpostConfig,
    env: impl Fn(&str) -> Option<String>,
) -> Result<RelativeTimeFormatter, ConfigError> {
    // Date format: env → config → default
    let date_format = env("SIGNPOST_DATE_FORMAT")
        .or_else(|| config.time.date_format.clone())
        .unwrap_or_else(|| DEFAULT_DATE_FORMAT.to_string());

    // UTC offset: env → config → UTC
    let offset = match env("SIGNPOST_UTC_OFFSET").or_else(|| config.time.utc_offset.clone()) {
        Some(raw) => parse_utc_offset(&raw)?,
        None => Utc.fix(),
    };

    RelativeTimeFormatter::new(&date_format, offset)
        .map_err(|e| ConfigError::Invalid(e.to_string()))
}

/// Parses `Z`, `UTC`, or `±HH:MM`.
pub fn parse_utc_offset(raw: &str) -> Result<FixedOffset, ConfigError> {
    let s = raw.trim();
    if s.eq_ignore_ascii_case("z") || s.eq_ignore_ascii_case("utc") {
        return Ok(Utc.fix());
    }
    s.parse::<FixedOffset>()
        .map_err(|_| ConfigError::Invalid(format!("utc_offset '{raw}' (expected ±HH:MM)")))
}
