//! Multi-panel comparison figure
//!
//! Drawing is a swappable collaborator: [`ChartRenderer`] takes an explicit
//! [`ChartContext`] and the precomputed [`ChartData`]; no global figure state
//! exists. [`PlottersRenderer`] writes PNG (or SVG, by extension) with the
//! `plotters` crate.
//!
//! Panel layout (2 × 3):
//! 1. execution time vs size
//! 2. comparisons vs size (log10)
//! 3. time heatmap at a fixed size
//! 4. adaptive/baseline ratio with the 1.0 reference line
//! 5. time spread at a fixed size
//! 6. relative time by distribution

mod data;

pub use data::{ChartData, Series, TimeSpread};

use crate::aggregate::Pivot;
use crate::{Error, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::{Path, PathBuf};
use tracing::info;

/// Default figure file
pub const DEFAULT_CHART_FILE: &str = "sorting_analysis.png";

const TITLE_FONT_SIZE: u32 = 32;
const CAPTION_FONT_SIZE: u32 = 20;
const LABEL_FONT_SIZE: u32 = 14;
const CELL_FONT_SIZE: u32 = 12;

type DrawResult<DB> = std::result::Result<(), DrawingAreaErrorKind<<DB as DrawingBackend>::ErrorType>>;

/// Rendering context passed explicitly to the renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartContext {
    output: PathBuf,
    dimensions: (u32, u32),
    title: String,
}

impl Default for ChartContext {
    fn default() -> Self {
        Self::new(DEFAULT_CHART_FILE)
    }
}

impl ChartContext {
    /// Context writing to `output` with the default size and title
    #[must_use]
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
            dimensions: (1800, 1200),
            title: "String sorting algorithm performance".to_string(),
        }
    }

    /// Override the pixel dimensions
    #[must_use]
    pub const fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.dimensions = (width, height);
        self
    }

    /// Override the figure title
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Output file
    #[must_use]
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Width and height in pixels
    #[must_use]
    pub const fn dimensions(&self) -> (u32, u32) {
        self.dimensions
    }

    /// Figure title
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    fn is_svg(&self) -> bool {
        self.output
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
    }
}

/// Draws [`ChartData`] somewhere
pub trait ChartRenderer {
    /// Render the figure described by `data` into `ctx`
    ///
    /// # Errors
    /// Returns [`Error::Render`] on any drawing or output failure.
    fn render(&self, ctx: &ChartContext, data: &ChartData) -> Result<()>;
}

/// [`ChartRenderer`] backed by `plotters`
#[derive(Debug, Clone, Copy, Default)]
pub struct PlottersRenderer;

impl ChartRenderer for PlottersRenderer {
    fn render(&self, ctx: &ChartContext, data: &ChartData) -> Result<()> {
        if ctx.is_svg() {
            let root = SVGBackend::new(ctx.output(), ctx.dimensions()).into_drawing_area();
            draw_figure(&root, ctx.title(), data).map_err(render_error)?;
            root.present().map_err(render_error)?;
        } else {
            let root = BitMapBackend::new(ctx.output(), ctx.dimensions()).into_drawing_area();
            draw_figure(&root, ctx.title(), data).map_err(render_error)?;
            root.present().map_err(render_error)?;
        }

        info!(path = %ctx.output().display(), "chart written");
        Ok(())
    }
}

fn render_error(err: impl std::fmt::Display) -> Error {
    Error::Render(err.to_string())
}

fn draw_figure<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    title: &str,
    data: &ChartData,
) -> DrawResult<DB> {
    root.fill(&WHITE)?;
    let body = root.titled(title, ("sans-serif", TITLE_FONT_SIZE))?;
    let panels = body.split_evenly((2, 3));

    draw_line_panel(
        &panels[0],
        &format!("Execution time ({})", data.distribution),
        "Execution time (ms)",
        &data.time_series,
        Some,
        None,
    )?;
    draw_line_panel(
        &panels[1],
        &format!("Character comparisons ({})", data.distribution),
        "Comparisons (log10)",
        &data.comparison_series,
        |v| (v > 0.0).then(|| v.log10()),
        None,
    )?;
    draw_heatmap_panel(
        &panels[2],
        &format!("Execution time by distribution (size {})", data.heatmap_size),
        &data.time_at_size,
    )?;
    draw_line_panel(
        &panels[3],
        "Adaptive / baseline time ratio",
        "Time ratio",
        &data.ratio_series,
        Some,
        Some(1.0),
    )?;
    draw_spread_panel(
        &panels[4],
        &format!("Time spread (size {}, {})", data.spread_size, data.distribution),
        &data.spread,
    )?;
    draw_heatmap_panel(
        &panels[5],
        "Relative time by distribution",
        &data.relative_by_type,
    )?;

    Ok(())
}

#[allow(clippy::cast_precision_loss)]
fn draw_line_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    caption: &str,
    y_desc: &str,
    series: &[Series],
    transform: impl Fn(f64) -> Option<f64>,
    reference: Option<f64>,
) -> DrawResult<DB> {
    let lines: Vec<(&str, Vec<(f64, f64)>)> = series
        .iter()
        .map(|s| {
            let points: Vec<(f64, f64)> = s
                .points
                .iter()
                .filter_map(|&(size, value)| Some((size as f64, transform(value)?)))
                .collect();
            (s.label.as_str(), points)
        })
        .filter(|(_, points)| !points.is_empty())
        .collect();

    let xs = lines.iter().flat_map(|(_, p)| p.iter().map(|(x, _)| *x));
    let ys = lines
        .iter()
        .flat_map(|(_, p)| p.iter().map(|(_, y)| *y))
        .chain(reference);
    let (Some(x_range), Some(y_range)) = (padded_range(xs), padded_range(ys)) else {
        return empty_panel(area, caption);
    };

    let mut chart = ChartBuilder::on(area)
        .caption(caption, ("sans-serif", CAPTION_FONT_SIZE))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range.clone(), y_range)?;

    chart
        .configure_mesh()
        .x_desc("Array size")
        .y_desc(y_desc)
        .label_style(("sans-serif", LABEL_FONT_SIZE))
        .draw()?;

    if let Some(y) = reference {
        chart
            .draw_series(LineSeries::new(
                vec![(x_range.start, y), (x_range.end, y)],
                RED.mix(0.7).stroke_width(2),
            ))?
            .label("Equal performance")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.mix(0.7).stroke_width(2)));
    }

    for (idx, (label, points)) in lines.into_iter().enumerate() {
        let color = Palette99::pick(idx).mix(0.9);
        chart
            .draw_series(LineSeries::new(points.clone(), color.stroke_width(2)))?
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
        chart.draw_series(points.into_iter().map(|p| Circle::new(p, 3, color.filled())))?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(("sans-serif", LABEL_FONT_SIZE))
        .draw()?;

    Ok(())
}

fn draw_heatmap_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    caption: &str,
    pivot: &Pivot,
) -> DrawResult<DB> {
    let Some((lo, hi)) = pivot.value_range() else {
        return empty_panel(area, caption);
    };
    let (Ok(cols), Ok(rows)) = (
        i32::try_from(pivot.columns().len()),
        i32::try_from(pivot.rows().len()),
    ) else {
        return empty_panel(area, caption);
    };

    let mut chart = ChartBuilder::on(area)
        .caption(caption, ("sans-serif", CAPTION_FONT_SIZE))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(170)
        .build_cartesian_2d((0..cols).into_segmented(), (0..rows).into_segmented())?;

    let column_labels = pivot.columns();
    let row_labels = pivot.rows();
    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(pivot.columns().len())
        .y_labels(pivot.rows().len())
        .x_label_formatter(&|v| segment_label(v, column_labels))
        .y_label_formatter(&|v| segment_label(v, row_labels))
        .label_style(("sans-serif", LABEL_FONT_SIZE))
        .draw()?;

    let cells: Vec<(i32, i32, f64)> = (0..rows)
        .flat_map(|r| (0..cols).map(move |c| (r, c)))
        .filter_map(|(r, c)| Some((r, c, pivot.cell(usize::try_from(r).ok()?, usize::try_from(c).ok()?)?)))
        .collect();

    chart.draw_series(cells.iter().map(|&(r, c, v)| {
        Rectangle::new(
            [
                (SegmentValue::Exact(c), SegmentValue::Exact(r)),
                (SegmentValue::Exact(c + 1), SegmentValue::Exact(r + 1)),
            ],
            heat_color(v, lo, hi).filled(),
        )
    }))?;
    chart.draw_series(cells.iter().map(|&(r, c, v)| {
        Text::new(
            format!("{v:.2}"),
            (SegmentValue::CenterOf(c), SegmentValue::CenterOf(r)),
            ("sans-serif", CELL_FONT_SIZE),
        )
    }))?;

    Ok(())
}

fn draw_spread_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    caption: &str,
    spread: &[TimeSpread],
) -> DrawResult<DB> {
    let y_range = padded_range(spread.iter().flat_map(|s| [s.min_ms, s.max_ms]));
    let (Some(y_range), Ok(count)) = (y_range, i32::try_from(spread.len())) else {
        return empty_panel(area, caption);
    };

    let labels: Vec<String> = spread.iter().map(|s| s.algorithm.clone()).collect();
    let mut chart = ChartBuilder::on(area)
        .caption(caption, ("sans-serif", CAPTION_FONT_SIZE))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d((0..count).into_segmented(), y_range)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(spread.len())
        .x_label_formatter(&|v| segment_label(v, &labels))
        .y_desc("Execution time (ms)")
        .label_style(("sans-serif", LABEL_FONT_SIZE))
        .draw()?;

    for (idx, s) in (0..count).zip(spread) {
        let color = Palette99::pick(usize::try_from(idx).unwrap_or_default()).mix(0.9);
        let center: SegmentValue<i32> = SegmentValue::CenterOf(idx);
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(center.clone(), s.min_ms), (center.clone(), s.max_ms)],
            color.stroke_width(3),
        )))?;
        chart.draw_series(std::iter::once(Circle::new((center, s.mean_ms), 6, color.filled())))?;
    }

    Ok(())
}

fn empty_panel<DB: DrawingBackend>(area: &DrawingArea<DB, Shift>, caption: &str) -> DrawResult<DB> {
    area.draw(&Text::new(
        format!("{caption}: no data"),
        (20, 20),
        ("sans-serif", CAPTION_FONT_SIZE),
    ))
}

fn segment_label(value: &SegmentValue<i32>, labels: &[String]) -> String {
    match value {
        SegmentValue::CenterOf(i) => usize::try_from(*i)
            .ok()
            .and_then(|i| labels.get(i))
            .cloned()
            .unwrap_or_default(),
        _ => String::new(),
    }
}

/// Axis range covering every value with 5% headroom
fn padded_range(values: impl Iterator<Item = f64>) -> Option<std::ops::Range<f64>> {
    let (lo, hi) = values.fold(None, |range: Option<(f64, f64)>, v| match range {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })?;
    let pad = if hi > lo { (hi - lo) * 0.05 } else { lo.abs().max(1.0) * 0.5 };
    Some((lo - pad)..(hi + pad))
}

/// Light yellow → dark red by position within `[lo, hi]`
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn heat_color(value: f64, lo: f64, hi: f64) -> RGBColor {
    const COLD: (f64, f64, f64) = (255.0, 255.0, 204.0);
    const HOT: (f64, f64, f64) = (189.0, 0.0, 38.0);

    let t = if hi > lo { ((value - lo) / (hi - lo)).clamp(0.0, 1.0) } else { 0.5 };
    let mix = |a: f64, b: f64| (a + (b - a) * t).round() as u8;
    RGBColor(mix(COLD.0, HOT.0), mix(COLD.1, HOT.1), mix(COLD.2, HOT.2))
}
