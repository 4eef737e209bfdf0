//! Configuration loading.
//!
//! Resolves the config path (XDG directory or a `--config` override),
//! creates a default file when none exists, and parses/validates the TOML.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use super::validation::validate_config;
use super::{Config, DEFAULT_CITY, DEFAULT_OUTPUT};

/// Global configuration directory, set once at startup
static CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Set the configuration directory for the current process.
/// This can only be called once, typically at startup.
pub fn set_config_dir(dir: Option<String>) -> Result<()> {
    CONFIG_DIR
        .set(dir.map(PathBuf::from))
        .map_err(|_| anyhow::anyhow!("Configuration directory already set"))
}

/// Path to `suncurve.toml`, honoring a custom directory when set.
pub fn get_config_path() -> Result<PathBuf> {
    if let Some(custom_dir) = CONFIG_DIR.get().and_then(|d| d.clone()) {
        return Ok(custom_dir.join("suncurve.toml"));
    }

    let config_dir = dirs::config_dir().context("Could not determine config directory")?;
    Ok(config_dir.join("suncurve").join("suncurve.toml"))
}

/// Load configuration, creating a default file if none exists.
pub fn load() -> Result<Config> {
    let config_path = get_config_path()?;

    if !config_path.exists() {
        create_default_config(&config_path)
            .context("Failed to create default config during load")?;
    }

    load_from_path(&config_path)
        .with_context(|| format!("Failed to load configuration from {}", config_path.display()))
}

/// Load configuration from a specific path. Does not create a default file.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config from {}", path.display()))?;

    validate_config(&config)?;

    Ok(config)
}

/// Write a commented default configuration file.
pub fn create_default_config(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
    }

    let content = format!(
        "\
#[Defaults]
city = \"{DEFAULT_CITY}\"        # default city when --city is not given
output = \"{DEFAULT_OUTPUT}\" # default chart output path
png = false                # rasterize to PNG instead of SVG

#[Chart colors]
sunrise_color = \"green\"
sunset_color = \"darkorange\"
today_color = \"violet\"
plot_background = \"cornsilk\"
"
    );

    fs::write(path, content)
        .with_context(|| format!("Failed to write default config to {}", path.display()))?;

    log_block_start!("Created default configuration at {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("suncurve.toml");

        create_default_config(&path).unwrap();
        let config = load_from_path(&path).unwrap();

        assert_eq!(config.default_city(), DEFAULT_CITY);
        assert_eq!(config.default_output(), DEFAULT_OUTPUT);
        assert_eq!(config.png, Some(false));
    }

    #[test]
    fn test_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(load_from_path(&path).is_err());
    }

    #[test]
    fn test_malformed_toml_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("suncurve.toml");
        fs::write(&path, "city = [not toml").unwrap();
        assert!(load_from_path(&path).is_err());
    }

    #[test]
    fn test_partial_config_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("suncurve.toml");
        fs::write(&path, "city = \"Paris\"\n").unwrap();

        let config = load_from_path(&path).unwrap();
        assert_eq!(config.default_city(), "Paris");
        assert_eq!(config.default_output(), DEFAULT_OUTPUT);
    }
}
