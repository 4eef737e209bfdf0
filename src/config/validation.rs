//! Configuration validation.

use anyhow::{Result, bail};

use super::Config;

/// Validate a parsed configuration before use.
pub fn validate_config(config: &Config) -> Result<()> {
    if let Some(city) = &config.city
        && city.trim().is_empty()
    {
        bail!("Config field 'city' must not be empty");
    }

    if let Some(output) = &config.output {
        if output.trim().is_empty() {
            bail!("Config field 'output' must not be empty");
        }
    }

    for (field, value) in [
        ("sunrise_color", &config.sunrise_color),
        ("sunset_color", &config.sunset_color),
        ("today_color", &config.today_color),
        ("plot_background", &config.plot_background),
    ] {
        if let Some(color) = value
            && color.trim().is_empty()
        {
            bail!("Config field '{field}' must not be empty");
        }
    }

    Ok(())
}
