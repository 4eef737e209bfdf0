//! Geographic location resolution.
//!
//! Turns user input into a structured [`Location`]: either a free-text city
//! query matched against the embedded gazetteer, or explicit
//! city/country/timezone/coordinate fields. Timezone resolution delegates to
//! [`timezone`] (tzf-rs polygon lookup) when no explicit zone is given.
//!
//! Lookup is behind the [`LocationSource`] trait so tests can substitute a
//! deterministic source.

pub mod gazetteer;
pub mod timezone;

use anyhow::{Context, Result, anyhow, bail};
use chrono_tz::Tz;

pub use timezone::{parse_timezone, timezone_at};

/// A fully resolved geographic location.
///
/// Immutable once produced; carries everything downstream stages need:
/// a display name, the country, the IANA timezone, and signed coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub name: String,
    pub country: String,
    pub timezone: Tz,
    /// Geographic latitude in degrees (-90 to +90)
    pub latitude: f64,
    /// Geographic longitude in degrees (-180 to +180)
    pub longitude: f64,
}

impl Location {
    /// Short coordinate display, e.g. "(48.8566, 2.3522)".
    pub fn coords_display(&self) -> String {
        format!("({:.6}, {:.6})", self.latitude, self.longitude)
    }
}

/// User input describing the location to resolve.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationQuery {
    /// Free-text city name, resolved against the gazetteer.
    City(String),
    /// Explicit fields: display name, country, optional IANA zone, and a
    /// "LAT LON" coordinate string.
    Explicit {
        city: String,
        country: String,
        timezone: Option<String>,
        coords: String,
    },
}

/// A substitutable location lookup capability.
pub trait LocationSource {
    fn resolve(&self, query: &LocationQuery) -> Result<Location>;
}

/// The default source: embedded gazetteer plus tzf-rs timezone lookup.
#[derive(Debug, Default)]
pub struct Gazetteer;

impl LocationSource for Gazetteer {
    fn resolve(&self, query: &LocationQuery) -> Result<Location> {
        match query {
            LocationQuery::City(name) => {
                let city = gazetteer::find(name)
                    .ok_or_else(|| anyhow!("Location not found: '{name}'"))?;
                let tz = timezone_at(city.latitude, city.longitude).with_context(|| {
                    format!("Failed to resolve timezone for {}", city.name)
                })?;

                Ok(Location {
                    name: city.name.to_string(),
                    country: city.country.to_string(),
                    timezone: tz,
                    latitude: city.latitude,
                    longitude: city.longitude,
                })
            }
            LocationQuery::Explicit {
                city,
                country,
                timezone,
                coords,
            } => {
                let (latitude, longitude) = parse_coordinate_pair(coords)?;

                let tz = match timezone {
                    Some(name) => parse_timezone(name)?,
                    None => timezone_at(latitude, longitude).with_context(|| {
                        format!("Failed to resolve timezone for '{city}'")
                    })?,
                };

                Ok(Location {
                    name: city.clone(),
                    country: country.clone(),
                    timezone: tz,
                    latitude,
                    longitude,
                })
            }
        }
    }
}

/// Parse a "LAT LON" coordinate string into (latitude, longitude).
///
/// Accepts exactly two whitespace-separated decimal fields and validates
/// the usual coordinate ranges.
pub fn parse_coordinate_pair(coords: &str) -> Result<(f64, f64)> {
    let fields: Vec<&str> = coords.split_whitespace().collect();
    if fields.len() != 2 {
        bail!("Invalid coordinates '{coords}': expected \"LAT LON\"");
    }

    let latitude: f64 = fields[0]
        .parse()
        .with_context(|| format!("Invalid latitude '{}'", fields[0]))?;
    let longitude: f64 = fields[1]
        .parse()
        .with_context(|| format!("Invalid longitude '{}'", fields[1]))?;

    if !(-90.0..=90.0).contains(&latitude) {
        bail!("latitude must be between -90 and 90 degrees (got {latitude})");
    }
    if !(-180.0..=180.0).contains(&longitude) {
        bail!("longitude must be between -180 and 180 degrees (got {longitude})");
    }

    Ok((latitude, longitude))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coordinate_pair() {
        let (lat, lon) = parse_coordinate_pair("45.816669 4.66667").unwrap();
        assert!((lat - 45.816669).abs() < 1e-9);
        assert!((lon - 4.66667).abs() < 1e-9);

        // Negative values and extra whitespace
        let (lat, lon) = parse_coordinate_pair(" -33.8688   151.2093 ").unwrap();
        assert!(lat < 0.0);
        assert!(lon > 0.0);
    }

    #[test]
    fn test_parse_coordinate_pair_rejects_malformed() {
        assert!(parse_coordinate_pair("45.8").is_err());
        assert!(parse_coordinate_pair("45.8 4.6 7.0").is_err());
        assert!(parse_coordinate_pair("north east").is_err());
        assert!(parse_coordinate_pair("").is_err());
        assert!(parse_coordinate_pair("95.0 0.0").is_err());
        assert!(parse_coordinate_pair("0.0 181.0").is_err());
    }

    #[test]
    fn test_resolve_city_query() {
        let location = Gazetteer
            .resolve(&LocationQuery::City("Paris".to_string()))
            .unwrap();
        assert_eq!(location.name, "Paris");
        assert_eq!(location.country, "France");
        assert_eq!(location.timezone, chrono_tz::Europe::Paris);
    }

    #[test]
    fn test_resolve_unknown_city_fails() {
        let err = Gazetteer
            .resolve(&LocationQuery::City("Atlantis".to_string()))
            .unwrap_err();
        assert!(err.to_string().contains("Location not found"));
    }

    #[test]
    fn test_resolve_explicit_with_timezone() {
        let location = Gazetteer
            .resolve(&LocationQuery::Explicit {
                city: "Lentilly".to_string(),
                country: "France".to_string(),
                timezone: Some("Europe/Paris".to_string()),
                coords: "45.816669 4.66667".to_string(),
            })
            .unwrap();
        assert_eq!(location.timezone, chrono_tz::Europe::Paris);
        assert!((location.latitude - 45.816669).abs() < 1e-9);
    }

    #[test]
    fn test_resolve_explicit_timezone_from_coords() {
        let location = Gazetteer
            .resolve(&LocationQuery::Explicit {
                city: "Somewhere".to_string(),
                country: "Japan".to_string(),
                timezone: None,
                coords: "35.6762 139.6503".to_string(),
            })
            .unwrap();
        assert_eq!(location.timezone, chrono_tz::Asia::Tokyo);
    }

    #[test]
    fn test_resolve_explicit_bad_timezone_fails() {
        let result = Gazetteer.resolve(&LocationQuery::Explicit {
            city: "X".to_string(),
            country: "Y".to_string(),
            timezone: Some("Not/AZone".to_string()),
            coords: "0.0 0.0".to_string(),
        });
        assert!(result.is_err());
    }
}
