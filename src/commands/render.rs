//! Chart rendering command (the default).

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::args::RunOptions;
use crate::chart::raster::svg_to_png;
use crate::chart::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::config::Config;
use crate::geo::Gazetteer;
use crate::pipeline::Pipeline;
use crate::solar::SolarEphemeris;

/// Resolve the location, build the year table, render the chart, and write
/// it to the output file.
pub fn handle_render_command(options: &RunOptions, config: &Config) -> Result<()> {
    let source = Gazetteer;
    let calc = SolarEphemeris;
    let mut pipeline = Pipeline::new(&source, &calc);

    let query = super::location_query(options, config);
    let location = pipeline.resolve(&query)?;
    super::echo_location(&location);

    let year = super::chart_year(options);
    let highlight = super::highlight_date(options, year)?;

    log_block_start!("Rendering chart for {} {year}", location.name);
    log_indented!("Highlight date: {highlight}");

    let svg = pipeline.chart(&location, year, highlight, &config.chart_style())?;

    let as_png = options.png || config.png.unwrap_or(false);
    let path = output_path(options, config, as_png);

    if as_png {
        let bytes = svg_to_png(&svg, CANVAS_WIDTH as u32, CANVAS_HEIGHT as u32)
            .context("Failed to rasterize chart to PNG")?;
        fs::write(&path, bytes)
            .with_context(|| format!("Failed to write chart to {}", path.display()))?;
    } else {
        fs::write(&path, svg)
            .with_context(|| format!("Failed to write chart to {}", path.display()))?;
    }

    log_block_start!("Chart written to {}", path.display());
    log_end!();
    Ok(())
}

/// Output path from flag or config; the default `.svg` name switches to
/// `.png` when rasterizing.
fn output_path(options: &RunOptions, config: &Config, as_png: bool) -> PathBuf {
    let mut path = PathBuf::from(
        options
            .output
            .clone()
            .unwrap_or_else(|| config.default_output().to_string()),
    );
    if as_png && options.output.is_none() && config.output.is_none() {
        path.set_extension("png");
    }
    path
}
