//! Multi-series line chart rendering.
//!
//! One chart per metric slice: one line per group (UPF), points sorted by
//! x, groups sorted by name so repeated runs over the same inputs produce
//! byte-identical images.

use plotters::prelude::*;
use std::collections::BTreeMap;
use std::path::Path;

/// Bitmap size, matching the 8x5in @ 200dpi figures the charts replace.
const CHART_SIZE: (u32, u32) = (1600, 1000);

/// Errors produced while rendering a chart.
#[derive(Debug)]
pub enum ChartError {
    Io(std::io::Error),
    Draw(String),
}

impl std::fmt::Display for ChartError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartError::Io(e) => write!(f, "I/O error: {e}"),
            ChartError::Draw(msg) => write!(f, "draw error: {msg}"),
        }
    }
}

impl std::error::Error for ChartError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ChartError::Io(e) => Some(e),
            ChartError::Draw(_) => None,
        }
    }
}

impl From<std::io::Error> for ChartError {
    fn from(e: std::io::Error) -> Self {
        ChartError::Io(e)
    }
}

/// One chart point, tagged with the series it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub group: String,
    pub x: f64,
    pub y: f64,
}

/// Titles and axis labels for one chart.
#[derive(Debug, Clone, Copy)]
pub struct ChartSpec<'a> {
    pub title: &'a str,
    pub x_label: &'a str,
    pub y_label: &'a str,
}

/// Render one line per group into a PNG at `out`.
///
/// Returns `Ok(false)` without touching the filesystem when `rows` is
/// empty; an empty slice is normal for a partially-collected results
/// tree. A single-point group renders as a marker without a connecting
/// line. The saved path is reported on stdout.
pub fn plot_lines(rows: &[SeriesPoint], spec: &ChartSpec, out: &Path) -> Result<bool, ChartError> {
    let groups = group_points(rows);
    if groups.is_empty() {
        tracing::debug!(path = %out.display(), "no data for chart, skipping");
        return Ok(false);
    }

    let (x_min, x_max) = axis_range(rows.iter().map(|p| p.x));
    let (y_min, y_max) = axis_range(rows.iter().map(|p| p.y));

    let root = BitMapBackend::new(out, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(draw_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(spec.title, ("sans-serif", 36))
        .margin(20)
        .x_label_area_size(70)
        .y_label_area_size(90)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(draw_err)?;

    chart
        .configure_mesh()
        .x_desc(spec.x_label)
        .y_desc(spec.y_label)
        .axis_desc_style(("sans-serif", 24))
        .label_style(("sans-serif", 18))
        .draw()
        .map_err(draw_err)?;

    for (idx, (name, points)) in groups.iter().enumerate() {
        let color = Palette99::pick(idx).to_rgba();
        chart
            .draw_series(LineSeries::new(
                points.iter().copied(),
                color.stroke_width(2),
            ))
            .map_err(draw_err)?
            .label(name.clone())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 24, y)], color.stroke_width(2))
            });
        chart
            .draw_series(
                points
                    .iter()
                    .map(|&(x, y)| Circle::new((x, y), 5, color.filled())),
            )
            .map_err(draw_err)?;
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.85))
        .border_style(BLACK)
        .label_font(("sans-serif", 20))
        .draw()
        .map_err(draw_err)?;

    root.present().map_err(draw_err)?;
    println!("Saved: {}", out.display());
    Ok(true)
}

fn draw_err<E: std::fmt::Display>(e: E) -> ChartError {
    ChartError::Draw(e.to_string())
}

/// Bucket points by group (sorted by name) and sort each bucket by x.
fn group_points(rows: &[SeriesPoint]) -> BTreeMap<String, Vec<(f64, f64)>> {
    let mut groups: BTreeMap<String, Vec<(f64, f64)>> = BTreeMap::new();
    for p in rows {
        groups.entry(p.group.clone()).or_default().push((p.x, p.y));
    }
    for points in groups.values_mut() {
        points.sort_by(|a, b| a.0.total_cmp(&b.0));
    }
    groups
}

/// Axis bounds with 5% padding. A degenerate range (all values equal)
/// is widened by 1 so plotters always gets a non-empty interval.
fn axis_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    let mut pad = (max - min) * 0.05;
    if pad == 0.0 {
        pad = 1.0;
    }
    (min - pad, max + pad)
}
