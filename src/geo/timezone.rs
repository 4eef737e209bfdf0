//! Coordinate-to-timezone resolution.
//!
//! Maps geographic coordinates to an IANA timezone using the embedded
//! timezone polygon data from `tzf-rs`, then parses the zone name into a
//! `chrono_tz::Tz` for local-time conversion.

use anyhow::{Result, anyhow};
use chrono_tz::Tz;
use once_cell::sync::Lazy;
use tzf_rs::DefaultFinder;

// The finder parses its embedded polygon data on first use; keep one
// instance for the process.
static FINDER: Lazy<DefaultFinder> = Lazy::new(DefaultFinder::new);

/// Resolve the IANA timezone for the given coordinates.
///
/// Note the argument order expected by tzf-rs: longitude first.
pub fn timezone_at(latitude: f64, longitude: f64) -> Result<Tz> {
    let name = FINDER.get_tz_name(longitude, latitude);
    if name.is_empty() {
        return Err(anyhow!(
            "No timezone found for coordinates ({latitude:.4}, {longitude:.4})"
        ));
    }

    parse_timezone(name)
}

/// Parse an IANA timezone identifier (e.g. "Europe/Paris") into a `Tz`.
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.parse::<Tz>()
        .map_err(|_| anyhow!("Unknown timezone identifier '{name}'"))
}
