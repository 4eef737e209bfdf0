//! Date range and sun-time table assembly.
//!
//! Builds the full-year table the chart is drawn from: one record per
//! calendar day, each computed independently through a [`SunCalculator`].
//! Rows are keyed by typed `NaiveDate` values, not strings, so a highlight
//! lookup can never fail on a formatting mismatch.
//!
//! A single-entry memo cache keyed on (location, year) avoids recomputing
//! the 365-row table when only the highlighted date changes.

use anyhow::{Context, Result, bail};
use chrono::{Datelike, NaiveDate};

use crate::geo::Location;
use crate::solar::{DaySun, SunCalculator};

/// Selectable years form a 5-year window centered on the current year.
pub const YEAR_WINDOW: i32 = 2;

/// One row of the table: a date and its sun times, `None` inside polar
/// day/night.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailySunRecord {
    pub date: NaiveDate,
    pub sun: Option<DaySun>,
}

/// The full-year sunrise/sunset table, ordered by date.
#[derive(Debug, Clone)]
pub struct SunTable {
    year: i32,
    records: Vec<DailySunRecord>,
}

impl SunTable {
    /// Build the table for every day of `year` at `location`.
    ///
    /// Rows are independent; a polar day/night date yields a `None` row
    /// rather than failing the build.
    pub fn build(calc: &dyn SunCalculator, location: &Location, year: i32) -> Result<Self> {
        let mut records = Vec::with_capacity(366);
        for date in year_dates(year)? {
            let sun = calc
                .day_sun(location, date)
                .with_context(|| format!("Sun calculation failed for {date}"))?;
            records.push(DailySunRecord { date, sun });
        }

        Ok(Self { year, records })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[DailySunRecord] {
        &self.records
    }

    /// Typed date lookup. Rows are contiguous from Jan 1, so the ordinal
    /// doubles as the index.
    pub fn get(&self, date: NaiveDate) -> Option<&DailySunRecord> {
        if date.year() != self.year {
            return None;
        }
        self.records.get(date.ordinal0() as usize)
    }

    /// Count of polar rows (no sunrise or sunset).
    pub fn missing_days(&self) -> usize {
        self.records.iter().filter(|r| r.sun.is_none()).count()
    }
}

/// Every calendar date of `year`, Jan 1 through Dec 31, ascending.
pub fn year_dates(year: i32) -> Result<Vec<NaiveDate>> {
    let start = NaiveDate::from_ymd_opt(year, 1, 1)
        .with_context(|| format!("Invalid year {year}"))?;
    let end = NaiveDate::from_ymd_opt(year, 12, 31)
        .with_context(|| format!("Invalid year {year}"))?;

    Ok(start.iter_days().take_while(|d| *d <= end).collect())
}

/// Enforce the selectable-year window (current_year ± [`YEAR_WINDOW`]).
pub fn validate_year(year: i32, current_year: i32) -> Result<()> {
    let min = current_year - YEAR_WINDOW;
    let max = current_year + YEAR_WINDOW;
    if !(min..=max).contains(&year) {
        bail!("Year {year} is outside the selectable window {min}..={max}");
    }
    Ok(())
}

/// Single-entry memo for the most recently built table.
///
/// Keyed on the location's coordinates, timezone, and the year; a repeat
/// request with the same key returns the cached table without recomputing.
#[derive(Debug, Default)]
pub struct TableCache {
    entry: Option<(CacheKey, SunTable)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CacheKey {
    lat_bits: u64,
    lon_bits: u64,
    timezone: chrono_tz::Tz,
    year: i32,
}

impl CacheKey {
    fn new(location: &Location, year: i32) -> Self {
        Self {
            lat_bits: location.latitude.to_bits(),
            lon_bits: location.longitude.to_bits(),
            timezone: location.timezone,
            year,
        }
    }
}

impl TableCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the table for (location, year), building it only on a key
    /// change.
    pub fn table(
        &mut self,
        calc: &dyn SunCalculator,
        location: &Location,
        year: i32,
    ) -> Result<&SunTable> {
        let key = CacheKey::new(location, year);

        let hit = matches!(&self.entry, Some((cached, _)) if *cached == key);
        if hit {
            log_debug!("Reusing cached sun table for {} {year}", location.name);
        } else {
            let table = SunTable::build(calc, location, year)?;
            self.entry = Some((key, table));
        }

        match &self.entry {
            Some((_, table)) => Ok(table),
            None => bail!("Table cache entry missing after build"),
        }
    }
}
