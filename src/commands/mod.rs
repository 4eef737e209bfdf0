//! Command handlers for the suncurve CLI.
//!
//! Each command lives in its own submodule; shared option-to-query plumbing
//! lives here.

pub mod cities;
pub mod render;
pub mod table;

use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate};

use crate::args::RunOptions;
use crate::config::Config;
use crate::geo::{Location, LocationQuery};
use crate::pipeline::{current_year, parse_highlight};

/// Build the location query from CLI options and config defaults.
///
/// A `--coords` flag selects the explicit variant; otherwise the city name
/// (flag or config default) goes through the gazetteer.
pub(crate) fn location_query(options: &RunOptions, config: &Config) -> LocationQuery {
    let city = options
        .city
        .clone()
        .unwrap_or_else(|| config.default_city().to_string());

    match &options.coords {
        Some(coords) => LocationQuery::Explicit {
            city,
            country: options.country.clone().unwrap_or_default(),
            timezone: options.timezone.clone(),
            coords: coords.clone(),
        },
        None => LocationQuery::City(city),
    }
}

/// Chart year from options, defaulting to the current year.
pub(crate) fn chart_year(options: &RunOptions) -> i32 {
    options.year.unwrap_or_else(current_year)
}

/// Highlight date from options, defaulting to today's calendar day carried
/// into the chart year (Jan 1 when that day does not exist there).
pub(crate) fn highlight_date(options: &RunOptions, year: i32) -> Result<NaiveDate> {
    match &options.date {
        Some(input) => parse_highlight(input),
        None => {
            let today = Local::now().date_naive();
            Ok(NaiveDate::from_ymd_opt(year, today.month(), today.day())
                .or_else(|| NaiveDate::from_ymd_opt(year, 1, 1))
                .unwrap_or(today))
        }
    }
}

/// Print the resolved location the way the chart header describes it.
pub(crate) fn echo_location(location: &Location) {
    log_block_start!("Resolved location: {}", location.name);
    if !location.country.is_empty() {
        log_indented!("Country: {}", location.country);
    }
    log_indented!("Timezone: {}", location.timezone);
    log_indented!("Coordinates: {}", location.coords_display());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_defaults_to_config_city() {
        let options = RunOptions::default();
        let config = Config::default();
        assert_eq!(
            location_query(&options, &config),
            LocationQuery::City("Lentilly".to_string())
        );
    }

    #[test]
    fn test_coords_flag_selects_explicit_variant() {
        let options = RunOptions {
            city: Some("Lentilly".to_string()),
            country: Some("France".to_string()),
            coords: Some("45.816669 4.66667".to_string()),
            ..Default::default()
        };
        match location_query(&options, &Config::default()) {
            LocationQuery::Explicit { city, coords, .. } => {
                assert_eq!(city, "Lentilly");
                assert_eq!(coords, "45.816669 4.66667");
            }
            other => panic!("expected explicit query, got {other:?}"),
        }
    }

    #[test]
    fn test_highlight_date_explicit() {
        let options = RunOptions {
            date: Some("2024-06-21".to_string()),
            ..Default::default()
        };
        assert_eq!(
            highlight_date(&options, 2024).unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 21).unwrap()
        );
    }

    #[test]
    fn test_highlight_date_default_lands_in_year() {
        let options = RunOptions::default();
        let date = highlight_date(&options, 2024).unwrap();
        assert_eq!(date.year(), 2024);
    }
}
