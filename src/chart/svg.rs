//! SVG document assembly for the sunrise/sunset chart.

use std::fmt::Write as _;

use anyhow::{Result, bail};
use chrono::{Datelike, NaiveDate};

use crate::chart::{CANVAS_HEIGHT, CANVAS_WIDTH, ChartScale, Y_TICK_HOURS, month_ticks};
use crate::geo::Location;
use crate::solar::DaySun;
use crate::table::SunTable;

const FONT_FAMILY: &str = "DejaVu Sans, Helvetica, Arial, sans-serif";
const AXIS_COLOR: &str = "#444444";
const GRID_COLOR: &str = "#d8d0b8";

/// Inset locator map geometry: a fixed-window graticule panel in the
/// top-right corner of the plot area.
const MAP_WIDTH: f64 = 120.0;
const MAP_HEIGHT: f64 = 90.0;
const MAP_WINDOW_DEG: f64 = 15.0;
const MAP_GRID_STEP_DEG: f64 = 5.0;

/// Colors for the chart; overridable through the config file.
#[derive(Debug, Clone)]
pub struct ChartStyle {
    pub plot_background: String,
    pub sunrise_color: String,
    pub sunset_color: String,
    pub today_color: String,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            plot_background: "cornsilk".to_string(),
            sunrise_color: "green".to_string(),
            sunset_color: "darkorange".to_string(),
            today_color: "violet".to_string(),
        }
    }
}

/// Render the full chart as an SVG document.
///
/// `highlight` must fall inside the table's year. `today` draws the dashed
/// current-date rule when it falls inside the plotted year.
pub fn render_chart(
    table: &SunTable,
    location: &Location,
    highlight: NaiveDate,
    today: Option<NaiveDate>,
    style: &ChartStyle,
) -> Result<String> {
    let Some(highlight_row) = table.get(highlight) else {
        bail!("Date {highlight} is not in range for year {}", table.year());
    };

    let scale = ChartScale::for_year(table.year());
    let mut svg = String::new();

    let _ = writeln!(
        svg,
        "<svg xmlns='http://www.w3.org/2000/svg' width='{CANVAS_WIDTH:.0}' height='{CANVAS_HEIGHT:.0}' viewBox='0 0 {CANVAS_WIDTH:.0} {CANVAS_HEIGHT:.0}' role='img'>"
    );
    let _ = writeln!(
        svg,
        "  <rect width='{CANVAS_WIDTH:.0}' height='{CANVAS_HEIGHT:.0}' fill='white'/>"
    );
    let _ = writeln!(
        svg,
        "  <rect x='{:.1}' y='{:.1}' width='{:.1}' height='{:.1}' fill='{}'/>",
        scale.left,
        scale.top,
        scale.width,
        scale.height,
        escape_text(&style.plot_background)
    );

    write_title(&mut svg, location, table.year());
    write_axes(&mut svg, &scale, table.year());
    write_series(&mut svg, &scale, table, style);
    write_today_rule(&mut svg, &scale, table.year(), today, style);
    write_highlight(&mut svg, &scale, highlight, highlight_row.sun.as_ref());
    write_locator_map(&mut svg, &scale, location);

    let _ = writeln!(svg, "</svg>");
    Ok(svg)
}

fn write_title(svg: &mut String, location: &Location, year: i32) {
    let title = format!(
        "Sunrise and sunset times in {} in {}",
        location.name, year
    );
    let _ = writeln!(
        svg,
        "  <text x='{:.1}' y='30' text-anchor='middle' fill='#222222' font-family='{FONT_FAMILY}' font-size='17'>{}</text>",
        CANVAS_WIDTH / 2.0,
        escape_text(&title)
    );
}

fn write_axes(svg: &mut String, scale: &ChartScale, year: i32) {
    let _ = writeln!(
        svg,
        "  <line x1='{:.1}' y1='{:.1}' x2='{:.1}' y2='{:.1}' stroke='{AXIS_COLOR}' stroke-width='1'/>",
        scale.left,
        scale.bottom(),
        scale.right(),
        scale.bottom()
    );
    let _ = writeln!(
        svg,
        "  <line x1='{:.1}' y1='{:.1}' x2='{:.1}' y2='{:.1}' stroke='{AXIS_COLOR}' stroke-width='1'/>",
        scale.left,
        scale.top,
        scale.left,
        scale.bottom()
    );

    for (date, label) in month_ticks(year) {
        let x = scale.x(date);
        let _ = writeln!(
            svg,
            "  <line x1='{x:.1}' y1='{:.1}' x2='{x:.1}' y2='{:.1}' stroke='{AXIS_COLOR}' stroke-width='1'/>",
            scale.bottom(),
            scale.bottom() + 5.0
        );
        let _ = writeln!(
            svg,
            "  <text x='{x:.1}' y='{:.1}' text-anchor='middle' fill='{AXIS_COLOR}' font-family='{FONT_FAMILY}' font-size='11'>{}</text>",
            scale.bottom() + 18.0,
            escape_text(&label)
        );
    }

    for hour in Y_TICK_HOURS {
        let y = scale.y(hour as f64);
        let _ = writeln!(
            svg,
            "  <line x1='{:.1}' y1='{y:.1}' x2='{:.1}' y2='{y:.1}' stroke='{GRID_COLOR}' stroke-width='1'/>",
            scale.left,
            scale.right()
        );
        let _ = writeln!(
            svg,
            "  <text x='{:.1}' y='{:.1}' text-anchor='end' fill='{AXIS_COLOR}' font-family='{FONT_FAMILY}' font-size='11'>{hour}:00</text>",
            scale.left - 8.0,
            y + 4.0
        );
    }
}

/// Draw both series as polylines, breaking segments at polar rows.
fn write_series(svg: &mut String, scale: &ChartScale, table: &SunTable, style: &ChartStyle) {
    let series: [(&str, fn(&DaySun) -> f64); 2] = [
        (style.sunrise_color.as_str(), DaySun::sunrise_decimal),
        (style.sunset_color.as_str(), DaySun::sunset_decimal),
    ];

    for (color, pick) in series {
        let mut points = String::new();
        let mut segment_open = false;

        for record in table.records() {
            match &record.sun {
                Some(sun) => {
                    let _ = write!(
                        points,
                        "{}{:.2},{:.2}",
                        if segment_open { " " } else { "" },
                        scale.x(record.date),
                        scale.y(pick(sun))
                    );
                    segment_open = true;
                }
                None => {
                    flush_segment(svg, &mut points, color);
                    segment_open = false;
                }
            }
        }
        flush_segment(svg, &mut points, color);
    }
}

fn flush_segment(svg: &mut String, points: &mut String, color: &str) {
    if !points.is_empty() {
        let _ = writeln!(
            svg,
            "  <polyline points='{points}' fill='none' stroke='{}' stroke-width='2'/>",
            escape_text(color)
        );
        points.clear();
    }
}

fn write_today_rule(
    svg: &mut String,
    scale: &ChartScale,
    year: i32,
    today: Option<NaiveDate>,
    style: &ChartStyle,
) {
    let Some(today) = today.filter(|d| d.year() == year) else {
        return;
    };
    let x = scale.x(today);
    let _ = writeln!(
        svg,
        "  <line x1='{x:.1}' y1='{:.1}' x2='{x:.1}' y2='{:.1}' stroke='{}' stroke-width='1.5' stroke-dasharray='6 4'/>",
        scale.top,
        scale.bottom(),
        escape_text(&style.today_color)
    );
}

/// Three annotations at the highlighted date. The sunrise/sunset labels are
/// omitted for polar rows; the date label is always drawn.
fn write_highlight(
    svg: &mut String,
    scale: &ChartScale,
    highlight: NaiveDate,
    sun: Option<&DaySun>,
) {
    let x = scale.x(highlight);

    let _ = writeln!(
        svg,
        "  <text x='{x:.1}' y='{:.1}' text-anchor='middle' fill='#222222' font-family='{FONT_FAMILY}' font-size='12'>{}</text>",
        scale.y(2.0),
        highlight.format("%Y-%m-%d")
    );

    let Some(sun) = sun else {
        return;
    };

    // Sunrise label above its point, sunset below, each with a leader line.
    for (hour, label, offset) in [
        (sun.sunrise_decimal(), sun.sunrise_clock(), -28.0),
        (sun.sunset_decimal(), sun.sunset_clock(), 28.0),
    ] {
        let y = scale.y(hour);
        let label_y = y + offset;
        let _ = writeln!(
            svg,
            "  <circle cx='{x:.1}' cy='{y:.1}' r='3' fill='#222222'/>"
        );
        let _ = writeln!(
            svg,
            "  <line x1='{x:.1}' y1='{y:.1}' x2='{x:.1}' y2='{:.1}' stroke='#222222' stroke-width='1'/>",
            label_y + if offset < 0.0 { 4.0 } else { -12.0 }
        );
        let _ = writeln!(
            svg,
            "  <text x='{x:.1}' y='{label_y:.1}' text-anchor='middle' fill='#222222' font-family='{FONT_FAMILY}' font-size='12'>{}</text>",
            escape_text(&label)
        );
    }
}

/// Inset locator map: a graticule over a fixed window around the location
/// with a point marker at its center.
fn write_locator_map(svg: &mut String, scale: &ChartScale, location: &Location) {
    let panel_x = scale.right() - MAP_WIDTH - 10.0;
    let panel_y = scale.top + 10.0;

    let _ = writeln!(svg, "  <g transform='translate({panel_x:.1} {panel_y:.1})'>");
    let _ = writeln!(
        svg,
        "    <rect width='{MAP_WIDTH:.0}' height='{MAP_HEIGHT:.0}' fill='#eef4fb' stroke='{AXIS_COLOR}' stroke-width='1'/>"
    );

    let lat_min = location.latitude - MAP_WINDOW_DEG;
    let lat_max = location.latitude + MAP_WINDOW_DEG;
    let lon_min = location.longitude - MAP_WINDOW_DEG;
    let lon_max = location.longitude + MAP_WINDOW_DEG;

    // Graticule lines at whole multiples of the grid step, north up.
    let mut lat = (lat_min / MAP_GRID_STEP_DEG).ceil() * MAP_GRID_STEP_DEG;
    while lat <= lat_max {
        let y = (lat_max - lat) / (2.0 * MAP_WINDOW_DEG) * MAP_HEIGHT;
        let _ = writeln!(
            svg,
            "    <line x1='0' y1='{y:.1}' x2='{MAP_WIDTH:.0}' y2='{y:.1}' stroke='#b8c8dc' stroke-width='0.5'/>"
        );
        lat += MAP_GRID_STEP_DEG;
    }
    let mut lon = (lon_min / MAP_GRID_STEP_DEG).ceil() * MAP_GRID_STEP_DEG;
    while lon <= lon_max {
        let x = (lon - lon_min) / (2.0 * MAP_WINDOW_DEG) * MAP_WIDTH;
        let _ = writeln!(
            svg,
            "    <line x1='{x:.1}' y1='0' x2='{x:.1}' y2='{MAP_HEIGHT:.0}' stroke='#b8c8dc' stroke-width='0.5'/>"
        );
        lon += MAP_GRID_STEP_DEG;
    }

    // The window is centered on the location by construction
    let _ = writeln!(
        svg,
        "    <circle cx='{:.1}' cy='{:.1}' r='3.5' fill='#d03030'/>",
        MAP_WIDTH / 2.0,
        MAP_HEIGHT / 2.0
    );
    let _ = writeln!(
        svg,
        "    <text x='{:.1}' y='{:.1}' text-anchor='middle' fill='{AXIS_COLOR}' font-family='{FONT_FAMILY}' font-size='9'>{}</text>",
        MAP_WIDTH / 2.0,
        MAP_HEIGHT - 4.0,
        escape_text(&location.name)
    );
    let _ = writeln!(svg, "  </g>");
}

fn escape_text(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solar::SolarEphemeris;

    fn paris() -> Location {
        Location {
            name: "Paris".to_string(),
            country: "France".to_string(),
            timezone: chrono_tz::Europe::Paris,
            latitude: 48.856614,
            longitude: 2.352222,
        }
    }

    fn paris_table() -> SunTable {
        SunTable::build(&SolarEphemeris, &paris(), 2024).unwrap()
    }

    #[test]
    fn test_chart_contains_title_and_series() {
        let table = paris_table();
        let highlight = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
        let svg = render_chart(&table, &paris(), highlight, None, &ChartStyle::default()).unwrap();

        assert!(svg.contains("Sunrise and sunset times in Paris in 2024"));
        assert!(svg.contains("stroke='green'"));
        assert!(svg.contains("stroke='darkorange'"));
        assert!(svg.contains("fill='cornsilk'"));
        // No today rule requested
        assert!(!svg.contains("stroke-dasharray"));
    }

    #[test]
    fn test_chart_has_twelve_month_ticks() {
        let table = paris_table();
        let highlight = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
        let svg = render_chart(&table, &paris(), highlight, None, &ChartStyle::default()).unwrap();

        for month in ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"] {
            assert!(svg.contains(&format!(">{month}</text>")), "missing tick {month}");
        }
    }

    #[test]
    fn test_today_rule_only_inside_year() {
        let table = paris_table();
        let highlight = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();

        let inside = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let svg = render_chart(&table, &paris(), highlight, Some(inside), &ChartStyle::default())
            .unwrap();
        assert!(svg.contains("stroke-dasharray"));

        let outside = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
        let svg = render_chart(&table, &paris(), highlight, Some(outside), &ChartStyle::default())
            .unwrap();
        assert!(!svg.contains("stroke-dasharray"));
    }

    #[test]
    fn test_highlight_annotations() {
        let table = paris_table();
        let highlight = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
        let svg = render_chart(&table, &paris(), highlight, None, &ChartStyle::default()).unwrap();

        assert!(svg.contains("2024-06-21"));
        let row = table.get(highlight).unwrap();
        let sun = row.sun.unwrap();
        assert!(svg.contains(&sun.sunrise_clock()));
        assert!(svg.contains(&sun.sunset_clock()));
    }

    #[test]
    fn test_highlight_outside_year_fails() {
        let table = paris_table();
        let highlight = NaiveDate::from_ymd_opt(2023, 6, 21).unwrap();
        let result = render_chart(&table, &paris(), highlight, None, &ChartStyle::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_polar_rows_break_series_but_render() {
        let svalbard = Location {
            name: "Longyearbyen".to_string(),
            country: "Norway".to_string(),
            timezone: chrono_tz::Arctic::Longyearbyen,
            latitude: 78.2232,
            longitude: 15.64689,
        };
        let table = SunTable::build(&SolarEphemeris, &svalbard, 2024).unwrap();

        // Highlight inside the polar night: date label only
        let highlight = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let svg = render_chart(&table, &svalbard, highlight, None, &ChartStyle::default()).unwrap();
        assert!(svg.contains("2024-01-10"));

        // Both series still produce at least one segment each
        assert!(svg.matches("<polyline").count() >= 2);
    }
}
