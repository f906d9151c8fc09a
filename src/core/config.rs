//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.atrium/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::state::User;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AtriumConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub login: LoginConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_item_id: Option<String>,
}

/// The identity handed to the store on a successful sign-in.
///
/// The sign-in itself is simulated, so the identity comes from here
/// rather than from any authentication backend.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoginConfig {
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_ITEM_ID: &str = "123";
pub const DEFAULT_LOGIN_ID: &str = "1";
pub const DEFAULT_LOGIN_NAME: &str = "John Doe";
pub const DEFAULT_LOGIN_EMAIL: &str = "john@example.com";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Item id passed to the details screen when navigating from home.
    pub item_id: String,
    /// Identity stored on a successful simulated sign-in.
    pub login_user: User,
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

/// Returns the path to `~/.atrium/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".atrium").join("config.toml"))
}

/// Load config from `~/.atrium/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `AtriumConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<AtriumConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(AtriumConfig::default());
        }
    };

    if !path.exists() {
        info!(
            "No config file found, generating default at {}",
            path.display()
        );
        generate_default_config(&path);
        return Ok(AtriumConfig::default());
    }

    load_config_from(&path)
}

/// Parse the config file at `path`.
fn load_config_from(path: &Path) -> Result<AtriumConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: AtriumConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Atrium Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_item_id = "123"      # Item shown when opening the details screen

# [login]
# id = "1"
# name = "John Doe"
# email = "john@example.com"
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

/// Resolve the final config by collapsing: defaults → config file → env
/// vars → CLI.
///
/// `cli_item_id` comes from the `--item-id` flag (None = not specified).
pub fn resolve(config: &AtriumConfig, cli_item_id: Option<&str>) -> ResolvedConfig {
    // Item id: CLI → env → config → default
    let item_id = cli_item_id
        .map(|s| s.to_string())
        .or_else(|| std::env::var("ATRIUM_ITEM_ID").ok())
        .or_else(|| config.general.default_item_id.clone())
        .unwrap_or_else(|| DEFAULT_ITEM_ID.to_string());

    let login_user = User {
        id: config
            .login
            .id
            .clone()
            .unwrap_or_else(|| DEFAULT_LOGIN_ID.to_string()),
        name: config
            .login
            .name
            .clone()
            .unwrap_or_else(|| DEFAULT_LOGIN_NAME.to_string()),
        email: config
            .login
            .email
            .clone()
            .unwrap_or_else(|| DEFAULT_LOGIN_EMAIL.to_string()),
    };

    ResolvedConfig {
        item_id,
        login_user,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = AtriumConfig::default();
        assert!(config.general.default_item_id.is_none());
        assert!(config.login.name.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = AtriumConfig::default();
        let resolved = resolve(&config, None);
        assert_eq!(resolved.item_id, DEFAULT_ITEM_ID);
        assert_eq!(resolved.login_user.id, DEFAULT_LOGIN_ID);
        assert_eq!(resolved.login_user.name, DEFAULT_LOGIN_NAME);
        assert_eq!(resolved.login_user.email, DEFAULT_LOGIN_EMAIL);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = AtriumConfig {
            general: GeneralConfig {
                default_item_id: Some("777".to_string()),
            },
            login: LoginConfig {
                id: Some("42".to_string()),
                name: Some("Jane Roe".to_string()),
                email: Some("jane@example.com".to_string()),
            },
        };
        let resolved = resolve(&config, None);
        assert_eq!(resolved.item_id, "777");
        assert_eq!(resolved.login_user.id, "42");
        assert_eq!(resolved.login_user.name, "Jane Roe");
        assert_eq!(resolved.login_user.email, "jane@example.com");
    }

    #[test]
    fn test_resolve_cli_item_id_wins() {
        let config = AtriumConfig {
            general: GeneralConfig {
                default_item_id: Some("777".to_string()),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, Some("456"));
        assert_eq!(resolved.item_id, "456");
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[login]
name = "Jane Roe"
"#;
        let config: AtriumConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.login.name.as_deref(), Some("Jane Roe"));
        assert!(config.login.email.is_none());
        assert!(config.general.default_item_id.is_none());
    }

    #[test]
    fn test_full_toml_parses() {
        let toml_str = r#"
[general]
default_item_id = "999"

[login]
id = "7"
name = "Jane Roe"
email = "jane@example.com"
"#;
        let config: AtriumConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.default_item_id.as_deref(), Some("999"));
        assert_eq!(config.login.id.as_deref(), Some("7"));
        assert_eq!(config.login.email.as_deref(), Some("jane@example.com"));
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[general]\ndefault_item_id = \"55\"\n").unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.general.default_item_id.as_deref(), Some("55"));
    }

    #[test]
    fn test_load_config_from_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "not valid toml [").unwrap();

        match load_config_from(&path) {
            Err(ConfigError::Parse(_)) => {}
            other => panic!("expected parse error, got {:?}", other.map(|c| c.general)),
        }
    }

    #[test]
    fn test_generated_default_config_parses_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        generate_default_config(&path);

        // Everything in the generated file is commented out, so it
        // parses to the same thing as no file at all.
        let config = load_config_from(&path).unwrap();
        assert!(config.general.default_item_id.is_none());
        assert!(config.login.id.is_none());
    }
}
