//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.seatpick/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::OutputFormat;
use crate::core::form::DEFAULT_FIELD_NAME;
use crate::core::grid::{GridError, SeatGrid, VenueLayout, parse_booked_list};
use crate::core::price::{Price, PriceError};
use crate::core::selector::{SeatSelector, SelectorOptions};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SeatpickConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub venue: VenueConfig,
    #[serde(default)]
    pub form: FormConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub title: Option<String>,
    pub use_labels: Option<bool>,
    pub book_button: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct VenueConfig {
    pub rows: Option<u16>,
    pub cols: Option<u16>,
    /// Comma-separated pre-booked ids, e.g. `"A2,B5"`.
    pub booked: Option<String>,
    pub price: Option<Price>,
    /// Venue layout file; relative paths resolve against `~/.seatpick/`.
    pub layout: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FormConfig {
    pub field_name: Option<String>,
    pub format: Option<OutputFormat>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_ROWS: u16 = 10;
pub const DEFAULT_COLS: u16 = 10;
pub const DEFAULT_TITLE: &str = "Seat selection";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

/// Where the seats come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridSource {
    Generated { rows: u16, cols: u16 },
    Layout(PathBuf),
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub title: String,
    pub grid: GridSource,
    pub booked: Vec<String>,
    pub unit_price: Price,
    pub options: SelectorOptions,
    pub field_name: String,
    pub format: OutputFormat,
}

/// Values given on the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub title: Option<String>,
    pub rows: Option<u16>,
    pub cols: Option<u16>,
    pub booked: Option<String>,
    pub price: Option<Price>,
    pub layout: Option<PathBuf>,
    pub format: Option<OutputFormat>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(PathBuf, std::io::Error),
    Parse(toml::de::Error),
    Price(PriceError),
    Grid(GridError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(path, e) => write!(f, "config I/O error ({}): {e}", path.display()),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::Price(e) => write!(f, "config price error: {e}"),
            ConfigError::Grid(e) => write!(f, "seat grid error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        ConfigError::Grid(e)
    }
}

impl From<PriceError> for ConfigError {
    fn from(e: PriceError) -> Self {
        ConfigError::Price(e)
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.seatpick/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".seatpick"))
}

/// Returns the path to `~/.seatpick/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.seatpick/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `SeatpickConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<SeatpickConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(SeatpickConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(SeatpickConfig::default());
    }

    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<SeatpickConfig, ConfigError> {
    let contents =
        fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
    let config: SeatpickConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Read a venue layout file.
pub fn load_layout(path: &Path) -> Result<VenueLayout, ConfigError> {
    let contents =
        fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
    let layout: VenueLayout = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded venue layout from {} ({} rows)", path.display(), layout.rows.len());
    Ok(layout)
}

const DEFAULT_CONFIG_TEXT: &str = r#"# Seatpick Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# title = "Seat selection"           # Or set SEATPICK_TITLE env var
# use_labels = true                  # false shows seat ids instead of labels
# book_button = true

# [venue]
# rows = 10                          # at most 26 (A-Z)
# cols = 10
# booked = "A2,B5"                   # Or set SEATPICK_BOOKED env var
# price = 12.50                      # Or set SEATPICK_PRICE env var
# layout = "venue.toml"              # Path relative to ~/.seatpick/; replaces rows/cols

# [form]
# field_name = "selected_seats"
# format = "urlencoded"              # "urlencoded" or "json"
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_TEXT) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &SeatpickConfig, cli: &CliOverrides) -> Result<ResolvedConfig, ConfigError> {
    // Title: CLI → env → config → default
    let title = cli
        .title
        .clone()
        .or_else(|| std::env::var("SEATPICK_TITLE").ok())
        .or_else(|| config.general.title.clone())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());

    // Price: CLI → env → config → free
    let unit_price = match (&cli.price, std::env::var("SEATPICK_PRICE").ok()) {
        (Some(price), _) => *price,
        (None, Some(raw)) => raw.parse()?,
        (None, None) => config.venue.price.unwrap_or(Price::ZERO),
    };

    // Booked list: CLI → env → config
    let booked = cli
        .booked
        .clone()
        .or_else(|| std::env::var("SEATPICK_BOOKED").ok())
        .or_else(|| config.venue.booked.clone())
        .map(|raw| parse_booked_list(&raw))
        .unwrap_or_default();

    // A layout wins over row/column counts; CLI counts win over a config layout.
    let cli_counts = cli.rows.is_some() || cli.cols.is_some();
    let layout = cli.layout.clone().or_else(|| {
        if cli_counts {
            None
        } else {
            config.venue.layout.as_ref().map(|p| resolve_relative(p))
        }
    });
    let grid = match layout {
        Some(path) => GridSource::Layout(path),
        None => GridSource::Generated {
            rows: cli.rows.or(config.venue.rows).unwrap_or(DEFAULT_ROWS),
            cols: cli.cols.or(config.venue.cols).unwrap_or(DEFAULT_COLS),
        },
    };

    let defaults = SelectorOptions::default();
    Ok(ResolvedConfig {
        title,
        grid,
        booked,
        unit_price,
        options: SelectorOptions {
            use_labels: config.general.use_labels.unwrap_or(defaults.use_labels),
            book_control: config.general.book_button.unwrap_or(defaults.book_control),
        },
        field_name: config
            .form
            .field_name
            .clone()
            .unwrap_or_else(|| DEFAULT_FIELD_NAME.to_string()),
        format: cli.format.or(config.form.format).unwrap_or_default(),
    })
}

/// Relative config paths are relative to `~/.seatpick/`.
fn resolve_relative(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match config_dir() {
        Some(dir) => dir.join(path),
        None => path.to_path_buf(),
    }
}

/// Build the seat grid the config points at and initialize a selector on it.
pub fn build_selector(config: &ResolvedConfig) -> Result<SeatSelector, ConfigError> {
    let grid = match &config.grid {
        GridSource::Generated { rows, cols } => SeatGrid::generate(*rows, *cols, &config.booked)?,
        GridSource::Layout(path) => SeatGrid::from_layout(load_layout(path)?)?,
    };
    Ok(SeatSelector::initialize(
        grid,
        &config.booked,
        config.unit_price,
        config.options,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    const ENV_VARS: [&str; 3] = ["SEATPICK_TITLE", "SEATPICK_PRICE", "SEATPICK_BOOKED"];

    /// Serializes tests that touch the process environment.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Run `resolve` with exactly `vars` set among the SEATPICK_* variables,
    /// then put the previous environment back.
    fn resolve_with_env(
        config: &SeatpickConfig,
        cli: &CliOverrides,
        vars: &[(&str, &str)],
    ) -> Result<ResolvedConfig, ConfigError> {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let saved: Vec<(&str, Option<String>)> = ENV_VARS
            .iter()
            .map(|&name| (name, std::env::var(name).ok()))
            .collect();

        // SAFETY: every test that reads or writes these variables holds ENV_LOCK.
        unsafe {
            for name in ENV_VARS {
                std::env::remove_var(name);
            }
            for (name, value) in vars {
                std::env::set_var(name, value);
            }
        }
        let result = resolve(config, cli);
        unsafe {
            for (name, value) in saved {
                match value {
                    Some(v) => std::env::set_var(name, v),
                    None => std::env::remove_var(name),
                }
            }
        }
        result
    }

    #[test]
    fn test_env_overrides_config_file() {
        let config: SeatpickConfig = toml::from_str(
            r#"
[general]
title = "From file"

[venue]
price = 50
booked = "A1"
"#,
        )
        .unwrap();
        let env = [
            ("SEATPICK_TITLE", "From env"),
            ("SEATPICK_PRICE", "7.25"),
            ("SEATPICK_BOOKED", "C3, D4"),
        ];
        let resolved = resolve_with_env(&config, &CliOverrides::default(), &env).unwrap();
        assert_eq!(resolved.title, "From env");
        assert_eq!(resolved.unit_price.cents(), 725);
        assert_eq!(resolved.booked, vec!["C3", "D4"]);
    }

    #[test]
    fn test_cli_overrides_env() {
        let cli = CliOverrides {
            title: Some("From CLI".to_string()),
            price: Some(Price::from_cents(1250)),
            booked: Some("B1".to_string()),
            ..Default::default()
        };
        let env = [
            ("SEATPICK_TITLE", "From env"),
            ("SEATPICK_PRICE", "7.25"),
            ("SEATPICK_BOOKED", "C3"),
        ];
        let resolved = resolve_with_env(&SeatpickConfig::default(), &cli, &env).unwrap();
        assert_eq!(resolved.title, "From CLI");
        assert_eq!(resolved.unit_price.cents(), 1250);
        assert_eq!(resolved.booked, vec!["B1"]);
    }

    #[test]
    fn test_invalid_env_price_is_an_error() {
        let result = resolve_with_env(
            &SeatpickConfig::default(),
            &CliOverrides::default(),
            &[("SEATPICK_PRICE", "twelve")],
        );
        assert!(matches!(
            result,
            Err(ConfigError::Price(PriceError::Invalid(_)))
        ));

        let result = resolve_with_env(
            &SeatpickConfig::default(),
            &CliOverrides::default(),
            &[("SEATPICK_PRICE", "-3")],
        );
        assert!(matches!(result, Err(ConfigError::Price(PriceError::Negative(_)))));
    }

    #[test]
    fn test_generated_default_documents_env_vars() {
        let config: SeatpickConfig = toml::from_str(DEFAULT_CONFIG_TEXT).unwrap();
        assert!(config.general.title.is_none());
        assert!(config.venue.price.is_none());
        for name in ENV_VARS {
            assert!(DEFAULT_CONFIG_TEXT.contains(name), "{name} not documented");
        }
    }

    #[test]
    fn test_default_config_parses() {
        let config = SeatpickConfig::default();
        assert!(config.general.title.is_none());
        assert!(config.venue.layout.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = SeatpickConfig::default();
        let resolved = resolve_with_env(&config, &CliOverrides::default(), &[]).unwrap();
        assert_eq!(resolved.title, DEFAULT_TITLE);
        assert_eq!(
            resolved.grid,
            GridSource::Generated {
                rows: DEFAULT_ROWS,
                cols: DEFAULT_COLS
            }
        );
        assert_eq!(resolved.unit_price, Price::ZERO);
        assert!(resolved.booked.is_empty());
        assert_eq!(resolved.field_name, "selected_seats");
        assert_eq!(resolved.format, OutputFormat::Urlencoded);
        assert_eq!(resolved.options, SelectorOptions::default());
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config: SeatpickConfig = toml::from_str(
            r#"
[general]
title = "Rock Concert"
use_labels = false
book_button = false

[venue]
rows = 5
cols = 8
booked = "A1, B2"
price = 50.0

[form]
field_name = "seats"
format = "json"
"#,
        )
        .unwrap();
        let resolved = resolve_with_env(&config, &CliOverrides::default(), &[]).unwrap();
        assert_eq!(resolved.title, "Rock Concert");
        assert_eq!(resolved.grid, GridSource::Generated { rows: 5, cols: 8 });
        assert_eq!(resolved.booked, vec!["A1", "B2"]);
        assert_eq!(resolved.unit_price.to_string(), "$50.00");
        assert!(!resolved.options.use_labels);
        assert!(!resolved.options.book_control);
        assert_eq!(resolved.field_name, "seats");
        assert_eq!(resolved.format, OutputFormat::Json);
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config: SeatpickConfig = toml::from_str(
            r#"
[venue]
rows = 5
cols = 8
price = 50
booked = "A1"
"#,
        )
        .unwrap();
        let cli = CliOverrides {
            rows: Some(2),
            price: Some(Price::from_cents(1250)),
            booked: Some("B1,B2".to_string()),
            format: Some(OutputFormat::Json),
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, &cli, &[]).unwrap();
        assert_eq!(resolved.grid, GridSource::Generated { rows: 2, cols: 8 });
        assert_eq!(resolved.unit_price.cents(), 1250);
        assert_eq!(resolved.booked, vec!["B1", "B2"]);
        assert_eq!(resolved.format, OutputFormat::Json);
    }

    #[test]
    fn test_layout_vs_counts() {
        let config: SeatpickConfig = toml::from_str(
            r#"
[venue]
layout = "/srv/venues/hall.toml"
"#,
        )
        .unwrap();

        let resolved = resolve_with_env(&config, &CliOverrides::default(), &[]).unwrap();
        assert_eq!(
            resolved.grid,
            GridSource::Layout(PathBuf::from("/srv/venues/hall.toml"))
        );

        // Explicit counts on the command line beat a layout from the file
        let cli = CliOverrides {
            cols: Some(4),
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, &cli, &[]).unwrap();
        assert_eq!(
            resolved.grid,
            GridSource::Generated {
                rows: DEFAULT_ROWS,
                cols: 4
            }
        );
    }

    #[test]
    fn test_sparse_toml_parses() {
        let config: SeatpickConfig = toml::from_str(
            r#"
[venue]
price = "9.99"
"#,
        )
        .unwrap();
        assert_eq!(config.venue.price, Some(Price::from_cents(999)));
        assert!(config.venue.rows.is_none());
        assert!(config.form.format.is_none());
    }

    #[test]
    fn test_bad_price_is_a_parse_error() {
        let result = toml::from_str::<SeatpickConfig>("[venue]\nprice = \"twelve\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_build_selector_generated() {
        let config = SeatpickConfig::default();
        let cli = CliOverrides {
            rows: Some(2),
            cols: Some(2),
            booked: Some("A2".to_string()),
            price: Some(Price::from_cents(1250)),
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, &cli, &[]).unwrap();
        let selector = build_selector(&resolved).unwrap();
        assert_eq!(selector.grid().len(), 4);
        assert!(selector.grid().seat("A2").unwrap().is_booked());
        assert_eq!(selector.unit_price().cents(), 1250);
    }

    #[test]
    fn test_build_selector_too_many_rows() {
        let cli = CliOverrides {
            rows: Some(30),
            ..Default::default()
        };
        let resolved = resolve_with_env(&SeatpickConfig::default(), &cli, &[]).unwrap();
        assert!(matches!(
            build_selector(&resolved),
            Err(ConfigError::Grid(GridError::TooManyRows(30)))
        ));
    }

    #[test]
    fn test_build_selector_missing_layout() {
        let cli = CliOverrides {
            layout: Some(PathBuf::from("/nonexistent/seatpick/venue.toml")),
            ..Default::default()
        };
        let resolved = resolve_with_env(&SeatpickConfig::default(), &cli, &[]).unwrap();
        assert!(matches!(
            build_selector(&resolved),
            Err(ConfigError::Io(..))
        ));
    }
}
