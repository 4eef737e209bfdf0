//! Configuration for suncurve.
//!
//! Settings are loaded from `suncurve.toml` under the XDG config directory
//! (or a `--config` override). Every field is optional; missing fields fall
//! back to compiled-in defaults. A default file is written on first run.
//!
//! ```toml
//! city = "Lentilly"            # default city when --city is not given
//! output = "suncurve.svg"      # default chart output path
//! png = false                  # rasterize to PNG instead of SVG
//!
//! #[Chart colors]
//! sunrise_color = "green"
//! sunset_color = "darkorange"
//! today_color = "violet"
//! plot_background = "cornsilk"
//! ```

pub mod loading;
pub mod validation;

use serde::Deserialize;

use crate::chart::ChartStyle;

pub use loading::{get_config_path, load, load_from_path, set_config_dir};

pub const DEFAULT_CITY: &str = "Lentilly";
pub const DEFAULT_OUTPUT: &str = "suncurve.svg";

/// User configuration, all fields optional in the file.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct Config {
    /// Default city when no `--city` flag is given.
    pub city: Option<String>,
    /// Default chart output path.
    pub output: Option<String>,
    /// Rasterize to PNG instead of writing SVG.
    pub png: Option<bool>,

    pub sunrise_color: Option<String>,
    pub sunset_color: Option<String>,
    pub today_color: Option<String>,
    pub plot_background: Option<String>,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        load()
    }

    pub fn default_city(&self) -> &str {
        self.city.as_deref().unwrap_or(DEFAULT_CITY)
    }

    pub fn default_output(&self) -> &str {
        self.output.as_deref().unwrap_or(DEFAULT_OUTPUT)
    }

    /// Chart colors with config overrides applied.
    pub fn chart_style(&self) -> ChartStyle {
        let mut style = ChartStyle::default();
        if let Some(color) = &self.sunrise_color {
            style.sunrise_color = color.clone();
        }
        if let Some(color) = &self.sunset_color {
            style.sunset_color = color.clone();
        }
        if let Some(color) = &self.today_color {
            style.today_color = color.clone();
        }
        if let Some(background) = &self.plot_background {
            style.plot_background = background.clone();
        }
        style
    }

    pub fn log_config(&self) {
        log_block_start!("Loaded configuration");
        log_indented!("Default city: {}", self.default_city());
        log_indented!("Default output: {}", self.default_output());
        if self.png.unwrap_or(false) {
            log_indented!("Output format: PNG");
        }
    }
}
