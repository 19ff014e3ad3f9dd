//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.valcar/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//! The built-in phone numbers are the dealership's; a deployment for another
//! shop overrides them here rather than in code.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::filter::{PRICE_MAX, clamp_price};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ValcarConfig {
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub inventory: InventoryConfig,
    #[serde(default)]
    pub filters: FiltersConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ContactConfig {
    pub phone: Option<String>,
    pub whatsapp: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct InventoryConfig {
    pub url: Option<String>,
    pub file: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FiltersConfig {
    pub max_price: Option<u32>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const PHONE_NUMBER: &str = "666 27 07 07";
pub const WHATSAPP_NUMBER: &str = "666 27 07 07";
pub const DEFAULT_FEED_URL: &str = "http://localhost:5173/cars.json";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

/// Where the inventory comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedLocation {
    Url(String),
    File(PathBuf),
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub phone: String,
    pub whatsapp: String,
    pub feed: FeedLocation,
    pub max_price: u32,
}

/// Values given on the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub feed_url: Option<String>,
    pub inventory_file: Option<PathBuf>,
    pub phone: Option<String>,
    pub whatsapp: Option<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.valcar/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".valcar").join("config.toml"))
}

/// Load config from `~/.valcar/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ValcarConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<ValcarConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(ValcarConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(ValcarConfig::default());
    }

    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<ValcarConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: ValcarConfig = toml::from_str(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# valcar configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [contact]
# phone = "666 27 07 07"                      # Or set VALCAR_PHONE
# whatsapp = "666 27 07 07"                   # Or set VALCAR_WHATSAPP

# [inventory]
# url = "http://localhost:5173/cars.json"     # Or set VALCAR_FEED_URL
# file = "/srv/valcar/cars.json"              # Or set VALCAR_INVENTORY_FILE (wins over url)

# [filters]
# max_price = 60000                           # Initial price ceiling (5000..=60000)
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &ValcarConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Phone: CLI → env → config → default
    let phone = cli
        .phone
        .clone()
        .or_else(|| std::env::var("VALCAR_PHONE").ok())
        .or_else(|| config.contact.phone.clone())
        .unwrap_or_else(|| PHONE_NUMBER.to_string());

    let whatsapp = cli
        .whatsapp
        .clone()
        .or_else(|| std::env::var("VALCAR_WHATSAPP").ok())
        .or_else(|| config.contact.whatsapp.clone())
        .unwrap_or_else(|| WHATSAPP_NUMBER.to_string());

    let feed = resolve_feed(config, cli);

    let max_price = config
        .filters
        .max_price
        .map(clamp_price)
        .unwrap_or(PRICE_MAX);

    ResolvedConfig {
        phone,
        whatsapp,
        feed,
        max_price,
    }
}

/// Within each layer a file beats a URL; any higher layer beats both.
fn resolve_feed(config: &ValcarConfig, cli: &CliOverrides) -> FeedLocation {
    if let Some(file) = &cli.inventory_file {
        return FeedLocation::File(file.clone());
    }
    if let Some(url) = &cli.feed_url {
        return FeedLocation::Url(url.clone());
    }
    if let Ok(file) = std::env::var("VALCAR_INVENTORY_FILE") {
        return FeedLocation::File(PathBuf::from(file));
    }
    if let Ok(url) = std::env::var("VALCAR_FEED_URL") {
        return FeedLocation::Url(url);
    }
    if let Some(file) = &config.inventory.file {
        return FeedLocation::File(file.clone());
    }
    FeedLocation::Url(
        config
            .inventory
            .url
            .clone()
            .unwrap_or_else(|| DEFAULT_FEED_URL.to_string()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filter::PRICE_MIN;

    #[test]
    fn test_default_config_parses() {
        let config = ValcarConfig::default();
        assert!(config.contact.phone.is_none());
        assert!(config.inventory.url.is_none());
        assert!(config.filters.max_price.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve(&ValcarConfig::default(), &CliOverrides::default());
        assert_eq!(resolved.phone, PHONE_NUMBER);
        assert_eq!(resolved.whatsapp, WHATSAPP_NUMBER);
        assert_eq!(resolved.feed, FeedLocation::Url(DEFAULT_FEED_URL.to_string()));
        assert_eq!(resolved.max_price, PRICE_MAX);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = ValcarConfig {
            contact: ContactConfig {
                phone: Some("926 00 00 00".to_string()),
                whatsapp: Some("+34 600 00 00 00".to_string()),
            },
            inventory: InventoryConfig {
                url: Some("https://example.com/cars.json".to_string()),
                file: None,
            },
            filters: FiltersConfig {
                max_price: Some(20_000),
            },
        };
        let resolved = resolve(&config, &CliOverrides::default());
        assert_eq!(resolved.phone, "926 00 00 00");
        assert_eq!(resolved.whatsapp, "+34 600 00 00 00");
        assert_eq!(
            resolved.feed,
            FeedLocation::Url("https://example.com/cars.json".to_string())
        );
        assert_eq!(resolved.max_price, 20_000);
    }

    #[test]
    fn test_resolve_clamps_max_price() {
        let config = ValcarConfig {
            filters: FiltersConfig {
                max_price: Some(100),
            },
            ..Default::default()
        };
        assert_eq!(resolve(&config, &CliOverrides::default()).max_price, PRICE_MIN);
    }

    #[test]
    fn test_config_file_beats_config_url() {
        let config = ValcarConfig {
            inventory: InventoryConfig {
                url: Some("https://example.com/cars.json".to_string()),
                file: Some(PathBuf::from("cars.json")),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, &CliOverrides::default());
        assert_eq!(resolved.feed, FeedLocation::File(PathBuf::from("cars.json")));
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = ValcarConfig {
            contact: ContactConfig {
                phone: Some("926 00 00 00".to_string()),
                whatsapp: None,
            },
            inventory: InventoryConfig {
                url: None,
                file: Some(PathBuf::from("cars.json")),
            },
            ..Default::default()
        };
        let cli = CliOverrides {
            feed_url: Some("http://127.0.0.1:9000/cars.json".to_string()),
            phone: Some("600 11 22 33".to_string()),
            ..Default::default()
        };
        let resolved = resolve(&config, &cli);
        assert_eq!(resolved.phone, "600 11 22 33");
        assert_eq!(
            resolved.feed,
            FeedLocation::Url("http://127.0.0.1:9000/cars.json".to_string())
        );
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[contact]
phone = "926 11 22 33"
whatsapp = "+34 600 11 22 33"

[inventory]
url = "https://rrrvehiculos.es/cars.json"

[filters]
max_price = 25000
"#;
        let config: ValcarConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.contact.phone.as_deref(), Some("926 11 22 33"));
        assert_eq!(
            config.inventory.url.as_deref(),
            Some("https://rrrvehiculos.es/cars.json")
        );
        assert_eq!(config.filters.max_price, Some(25000));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only one override; everything else stays default
        let toml_str = r#"
[contact]
whatsapp = "600 00 00 00"
"#;
        let config: ValcarConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.contact.whatsapp.as_deref(), Some("600 00 00 00"));
        assert!(config.contact.phone.is_none());
        assert!(config.inventory.file.is_none());
    }

    #[test]
    fn test_load_config_from_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[contact\nphone = 1").unwrap();
        assert!(matches!(load_config_from(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_config_from_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(matches!(load_config_from(&path), Err(ConfigError::Io(_))));
    }
}
