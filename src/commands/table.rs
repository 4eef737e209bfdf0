//! Table printing command.
//!
//! Prints the full-year table, one row per day with clock and decimal
//! columns, either as aligned text or as JSON.

use anyhow::{Context, Result};
use serde_json::json;

use crate::args::RunOptions;
use crate::config::Config;
use crate::geo::Gazetteer;
use crate::pipeline::Pipeline;
use crate::solar::SolarEphemeris;
use crate::table::SunTable;

pub fn handle_table_command(options: &RunOptions, config: &Config, json: bool) -> Result<()> {
    let source = Gazetteer;
    let calc = SolarEphemeris;
    let mut pipeline = Pipeline::new(&source, &calc);

    let query = super::location_query(options, config);
    let location = pipeline.resolve(&query)?;
    super::echo_location(&location);

    let year = super::chart_year(options);
    let table = pipeline.table(&location, year)?;

    log_block_start!("Sun table for {} {year} ({} days)", location.name, table.len());
    if table.missing_days() > 0 {
        log_indented!("{} polar day/night dates without sun events", table.missing_days());
    }
    log_end!();

    if json {
        println!("{}", render_json(table)?);
    } else {
        print_text(table);
    }
    Ok(())
}

fn print_text(table: &SunTable) {
    println!("{:<12} {:>8} {:>8} {:>10} {:>10}", "date", "sunrise", "sunset", "sunrise_f", "sunset_f");
    for record in table.records() {
        match &record.sun {
            Some(sun) => println!(
                "{:<12} {:>8} {:>8} {:>10.3} {:>10.3}",
                record.date,
                sun.sunrise_clock(),
                sun.sunset_clock(),
                sun.sunrise_decimal(),
                sun.sunset_decimal()
            ),
            None => println!("{:<12} {:>8} {:>8} {:>10} {:>10}", record.date, "-", "-", "-", "-"),
        }
    }
}

fn render_json(table: &SunTable) -> Result<String> {
    let rows: Vec<serde_json::Value> = table
        .records()
        .iter()
        .map(|record| match &record.sun {
            Some(sun) => json!({
                "date": record.date.to_string(),
                "sunrise": sun.sunrise_clock(),
                "sunset": sun.sunset_clock(),
                "sunrise_f": sun.sunrise_decimal(),
                "sunset_f": sun.sunset_decimal(),
            }),
            None => json!({
                "date": record.date.to_string(),
                "sunrise": null,
                "sunset": null,
                "sunrise_f": null,
                "sunset_f": null,
            }),
        })
        .collect();

    serde_json::to_string_pretty(&rows).context("Failed to serialize table to JSON")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Location;
    use crate::table::SunTable;

    fn paris_table() -> SunTable {
        let location = Location {
            name: "Paris".to_string(),
            country: "France".to_string(),
            timezone: chrono_tz::Europe::Paris,
            latitude: 48.856614,
            longitude: 2.352222,
        };
        SunTable::build(&SolarEphemeris, &location, 2024).unwrap()
    }

    #[test]
    fn test_json_has_one_row_per_day() {
        let table = paris_table();
        let rendered = render_json(&table).unwrap();
        let rows: Vec<serde_json::Value> = serde_json::from_str(&rendered).unwrap();
        assert_eq!(rows.len(), 366);

        let first = &rows[0];
        assert_eq!(first["date"], "2024-01-01");
        assert!(first["sunrise"].as_str().unwrap().contains(':'));
        assert!(first["sunrise_f"].as_f64().unwrap() > 0.0);
    }

    #[test]
    fn test_json_polar_rows_are_null() {
        let svalbard = Location {
            name: "Longyearbyen".to_string(),
            country: "Norway".to_string(),
            timezone: chrono_tz::Arctic::Longyearbyen,
            latitude: 78.2232,
            longitude: 15.64689,
        };
        let table = SunTable::build(&SolarEphemeris, &svalbard, 2024).unwrap();
        let rendered = render_json(&table).unwrap();
        let rows: Vec<serde_json::Value> = serde_json::from_str(&rendered).unwrap();

        let jan10 = rows
            .iter()
            .find(|row| row["date"] == "2024-01-10")
            .unwrap();
        assert!(jan10["sunrise"].is_null());
        assert!(jan10["sunrise_f"].is_null());
    }
}
