//! Explicit recompute pipeline.
//!
//! One entry point per run: resolve the location, validate the year, build
//! (or reuse) the full-year table, then render. Recomputation happens only
//! when the (location, year) key changes; a new highlight date reuses the
//! memoized table.

use anyhow::{Context, Result};
use chrono::{Datelike, Local, NaiveDate};

use crate::chart::{ChartStyle, render_chart};
use crate::geo::{Location, LocationQuery, LocationSource};
use crate::solar::SunCalculator;
use crate::table::{SunTable, TableCache, validate_year};

pub struct Pipeline<'a> {
    source: &'a dyn LocationSource,
    calc: &'a dyn SunCalculator,
    cache: TableCache,
}

impl<'a> Pipeline<'a> {
    pub fn new(source: &'a dyn LocationSource, calc: &'a dyn SunCalculator) -> Self {
        Self {
            source,
            calc,
            cache: TableCache::new(),
        }
    }

    pub fn resolve(&self, query: &LocationQuery) -> Result<Location> {
        self.source.resolve(query)
    }

    /// The memoized full-year table for (location, year).
    pub fn table(&mut self, location: &Location, year: i32) -> Result<&SunTable> {
        validate_year(year, current_year())?;
        self.cache.table(self.calc, location, year)
    }

    /// Render the chart SVG for (location, year, highlight).
    pub fn chart(
        &mut self,
        location: &Location,
        year: i32,
        highlight: NaiveDate,
        style: &ChartStyle,
    ) -> Result<String> {
        validate_year(year, current_year())?;
        let today = Some(Local::now().date_naive());
        let table = self.cache.table(self.calc, location, year)?;
        render_chart(table, location, highlight, today, style)
    }
}

pub fn current_year() -> i32 {
    Local::now().year()
}

/// Parse a highlight date from ISO `YYYY-MM-DD` input.
pub fn parse_highlight(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{input}', expected YYYY-MM-DD"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_highlight_valid() {
        assert_eq!(
            parse_highlight("2024-06-21").unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 21).unwrap()
        );
        assert_eq!(
            parse_highlight(" 2024-01-01 ").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_parse_highlight_rejects_impossible_date() {
        assert!(parse_highlight("2024-02-30").is_err());
        assert!(parse_highlight("2024-13-01").is_err());
        assert!(parse_highlight("June 21").is_err());
    }
}
