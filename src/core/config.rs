//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.menukit/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::bounded::{DEFAULT_CAPACITY, OverflowPolicy};
use crate::core::locale::Locale;
use crate::tui::surface::Color;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MenukitConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub menu: MenuConfig,
    #[serde(default)]
    pub legend: LegendConfig,
    #[serde(default)]
    pub colors: ColorConfig,
    #[serde(default)]
    pub items: Vec<ItemEntry>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub locale: Option<String>,
    pub log_file: Option<String>,
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MenuConfig {
    pub width: Option<u16>,
    pub capacity: Option<usize>,
    pub overflow: Option<OverflowPolicy>,
    pub x: Option<u16>,
    pub y: Option<u16>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LegendConfig {
    pub per_row: Option<usize>,
    pub capacity: Option<usize>,
    pub overflow: Option<OverflowPolicy>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ColorConfig {
    pub frame: Option<Color>,
    pub text: Option<Color>,
    pub highlight_fg: Option<Color>,
    pub highlight_bg: Option<Color>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ItemEntry {
    pub label: String,
    pub message: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_MENU_WIDTH: u16 = 47;
pub const DEFAULT_PER_ROW: usize = 4;
pub const DEFAULT_LOG_FILE: &str = "menukit.log";
pub const DEFAULT_LOG_LEVEL: &str = "debug";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub locale: Locale,
    pub log_file: String,
    pub log_level: String,
    pub menu_width: u16,
    pub menu_capacity: usize,
    pub menu_overflow: OverflowPolicy,
    pub origin: (u16, u16),
    pub legend_per_row: usize,
    pub legend_capacity: usize,
    pub legend_overflow: OverflowPolicy,
    pub frame_color: Color,
    pub text_color: Color,
    pub highlight: (Color, Color),
    pub items: Vec<ItemEntry>,
}

/// CLI flags that take part in resolution (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub locale: Option<Locale>,
    pub width: Option<u16>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.menukit/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".menukit").join("config.toml"))
}

/// Load config from `~/.menukit/config.toml`, or from `explicit` when given.
///
/// If the default file doesn't exist, generates a commented-out default and
/// returns `MenukitConfig::default()`. An explicit path that doesn't exist is
/// an I/O error. A malformed file returns `ConfigError::Parse`.
pub fn load_config(explicit: Option<&Path>) -> Result<MenukitConfig, ConfigError> {
    if let Some(path) = explicit {
        return read_config(path);
    }

    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(MenukitConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(MenukitConfig::default());
    }

    read_config(&path)
}

fn read_config(path: &Path) -> Result<MenukitConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: MenukitConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# menukit configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# locale = "en"                 # "en" or "vi" (or MENUKIT_LOCALE)
# log_file = "menukit.log"      # Or MENUKIT_LOG_FILE
# log_level = "debug"           # "error", "warn", "info", "debug", "trace", "off"

# [menu]
# width = 47
# capacity = 100
# overflow = "reject"           # "reject" drops extra items, "grow" keeps them
# x = 0
# y = 0

# [legend]
# per_row = 4
# capacity = 100
# overflow = "reject"

# [colors]                      # Console palette names, e.g. "light_aqua"
# frame = "red"
# text = "yellow"
# highlight_fg = "black"
# highlight_bg = "white"

# [[items]]
# label = "Start"
# message = "Starting..."

# [[items]]
# label = "About"
# message = "menukit demo"
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
pub fn resolve(config: &MenukitConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Locale: CLI → env → config → default
    let locale = cli
        .locale
        .or_else(|| {
            std::env::var("MENUKIT_LOCALE")
                .ok()
                .and_then(|s| parse_locale(&s, "MENUKIT_LOCALE"))
        })
        .or_else(|| {
            config
                .general
                .locale
                .as_deref()
                .and_then(|s| parse_locale(s, "general.locale"))
        })
        .unwrap_or_default();

    // Log file: env → config → default
    let log_file = std::env::var("MENUKIT_LOG_FILE")
        .ok()
        .or_else(|| config.general.log_file.clone())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    ResolvedConfig {
        locale,
        log_file,
        log_level: config
            .general
            .log_level
            .clone()
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        menu_width: cli
            .width
            .or(config.menu.width)
            .unwrap_or(DEFAULT_MENU_WIDTH),
        menu_capacity: config.menu.capacity.unwrap_or(DEFAULT_CAPACITY),
        menu_overflow: config.menu.overflow.unwrap_or_default(),
        origin: (config.menu.x.unwrap_or(0), config.menu.y.unwrap_or(0)),
        legend_per_row: config.legend.per_row.unwrap_or(DEFAULT_PER_ROW),
        legend_capacity: config.legend.capacity.unwrap_or(DEFAULT_CAPACITY),
        legend_overflow: config.legend.overflow.unwrap_or_default(),
        frame_color: config.colors.frame.unwrap_or(Color::Red),
        text_color: config.colors.text.unwrap_or(Color::Yellow),
        highlight: (
            config.colors.highlight_fg.unwrap_or(Color::Black),
            config.colors.highlight_bg.unwrap_or(Color::White),
        ),
        items: config.items.clone(),
    }
}

fn parse_locale(value: &str, source: &str) -> Option<Locale> {
    let locale = Locale::parse(value);
    if locale.is_none() {
        warn!("Unknown locale {:?} in {}, ignoring", value, source);
    }
    locale
}
