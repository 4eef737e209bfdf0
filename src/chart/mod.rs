//! Chart rendering for the full-year sunrise/sunset table.
//!
//! The chart is built as an SVG document on a fixed 700x450 canvas and can
//! be rasterized to PNG. Layout and scaling live here; `svg` assembles the
//! document and `raster` handles the PNG conversion.

pub mod raster;
pub mod svg;

use chrono::{Datelike, NaiveDate};

pub use svg::{ChartStyle, render_chart};

pub const CANVAS_WIDTH: f64 = 700.0;
pub const CANVAS_HEIGHT: f64 = 450.0;
pub const MARGIN: f64 = 50.0;

/// Fixed y-axis tick hours, top to bottom.
pub const Y_TICK_HOURS: [u32; 5] = [6, 8, 12, 17, 21];

/// Maps dates and decimal hours into plot-area pixel coordinates.
///
/// The y axis is inverted: 0h sits at the top edge and 24h at the bottom,
/// so sunrise plots above sunset.
#[derive(Debug, Clone, Copy)]
pub struct ChartScale {
    year: i32,
    day_count: u32,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ChartScale {
    pub fn for_year(year: i32) -> Self {
        let day_count = if is_leap_year(year) { 366 } else { 365 };
        Self {
            year,
            day_count,
            left: MARGIN,
            top: MARGIN,
            width: CANVAS_WIDTH - 2.0 * MARGIN,
            height: CANVAS_HEIGHT - 2.0 * MARGIN,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// x position of a date; Jan 1 at the left edge, Dec 31 at the right.
    pub fn x(&self, date: NaiveDate) -> f64 {
        debug_assert_eq!(date.year(), self.year);
        let span = (self.day_count - 1) as f64;
        self.left + date.ordinal0() as f64 / span * self.width
    }

    /// y position of a decimal hour, 0h at the top.
    pub fn y(&self, hour: f64) -> f64 {
        self.top + hour / 24.0 * self.height
    }
}

/// First day of each month, labeled with the abbreviated month name.
pub fn month_ticks(year: i32) -> Vec<(NaiveDate, String)> {
    (1..=12)
        .filter_map(|month| NaiveDate::from_ymd_opt(year, month, 1))
        .map(|date| (date, date.format("%b").to_string()))
        .collect()
}

fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}
