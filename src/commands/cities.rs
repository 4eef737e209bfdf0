//! Gazetteer listing command.

use anyhow::Result;

use crate::geo::gazetteer::CITIES;

/// Print every city in the embedded gazetteer.
pub fn handle_cities_command() -> Result<()> {
    log_block_start!("Embedded gazetteer ({} cities)", CITIES.len());
    for city in CITIES {
        log_indented!(
            "{}, {} ({:.5}, {:.5})",
            city.name,
            city.country,
            city.latitude,
            city.longitude
        );
    }
    log_end!();
    Ok(())
}
