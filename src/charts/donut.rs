//! Donut chart: proportional ring slices with percentage labels.

use std::f32::consts::{FRAC_PI_2, TAU};

use crate::layout::LayoutPolicy;
use crate::path::Path;
use crate::surface::{DrawingSurface, Paint, TextAlign};

use super::{color_at, DONUT_PALETTE, TEXT_COLOR};

/// Default inner hole radius as a fraction of the outer radius.
const HOLE_RATIO: f32 = 0.6;

/// Percentage labels sit at this fraction of the outer radius.
const LABEL_RADIUS_RATIO: f32 = 0.8;

/// Donut chart configuration.
#[derive(Debug, Clone)]
pub struct DonutChart {
    pub(crate) values: Vec<f32>,
    pub(crate) labels: Vec<String>,
    pub(crate) colors: Vec<String>,
    pub(crate) hole_ratio: f32,
    pub(crate) hide_labels: bool,
}

impl Default for DonutChart {
    fn default() -> Self {
        Self {
            values: Vec::new(),
            labels: Vec::new(),
            colors: Vec::new(),
            hole_ratio: HOLE_RATIO,
            hide_labels: false,
        }
    }
}

impl DonutChart {
    /// Create an empty donut chart with the default palette.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the slice values. Negative values are treated as zero.
    #[must_use]
    pub fn values(mut self, values: &[f32]) -> Self {
        self.values = values.to_vec();
        self
    }

    /// Set the slice names. The engine does not draw them; they align with
    /// [`slice_angles`] so hosts can build legends and hover hit-tests.
    #[must_use]
    pub fn labels<I, T>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Slice names set via [`labels`](DonutChart::labels).
    #[must_use]
    pub fn slice_labels(&self) -> &[String] {
        &self.labels
    }

    /// Set per-slice colors, cycled when shorter than `values`.
    #[must_use]
    pub fn colors<I, T>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.colors = colors.into_iter().map(Into::into).collect();
        self
    }

    /// Set the inner hole radius as a fraction of the outer radius
    /// (default 0.6, clamped to `0.0..=0.9`).
    #[must_use]
    pub fn hole_ratio(mut self, ratio: f32) -> Self {
        self.hole_ratio = ratio.clamp(0.0, 0.9);
        self
    }

    /// Toggle percentage labels on slices (default on).
    #[must_use]
    pub fn show_labels(mut self, show: bool) -> Self {
        self.hide_labels = !show;
        self
    }

    /// Sum of the slice values, clamping negatives to zero.
    #[must_use]
    pub fn total(&self) -> f32 {
        self.values.iter().map(|v| v.max(0.0)).sum()
    }
}

/// Start/end angle for each slice, in radians.
///
/// Slices begin at twelve o'clock and sweep clockwise. Zero and negative
/// values produce zero-width slices so indices stay aligned with the
/// input. A non-positive total yields an empty vector.
#[must_use]
pub fn slice_angles(values: &[f32]) -> Vec<(f32, f32)> {
    let total: f32 = values.iter().map(|v| v.max(0.0)).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut angle = -FRAC_PI_2;
    values
        .iter()
        .map(|v| {
            let sweep = (v.max(0.0) / total) * TAU;
            let span = (angle, angle + sweep);
            angle += sweep;
            span
        })
        .collect()
}

/// Render a donut chart onto the surface.
pub(crate) fn render<S: DrawingSurface>(surface: &mut S, policy: &LayoutPolicy, chart: &DonutChart) {
    surface.clear();

    let state = surface.state();
    let cx = state.width / 2.0;
    let cy = state.height / 2.0;
    let total = chart.total();

    if total <= 0.0 {
        surface.fill_text("No data", cx, cy, TextAlign::Center, TEXT_COLOR);
        return;
    }

    let outer = (state.width.min(state.height) / 2.0 - policy.padding).max(0.0);
    if outer <= 0.0 {
        return;
    }
    let inner = outer * chart.hole_ratio;
    let angles = slice_angles(&chart.values);

    // Full pie wedges first; the hole is punched afterwards in one fill.
    for (i, &(start, end)) in angles.iter().enumerate() {
        if end - start <= f32::EPSILON {
            continue;
        }
        let mut wedge = Path::new();
        wedge
            .move_to(cx, cy)
            .arc(cx, cy, outer, start, end, false)
            .close();
        surface.fill_path(&wedge, &Paint::solid(color_at(&chart.colors, &DONUT_PALETTE, i)));
    }

    if inner > 0.0 {
        let background = surface.background().to_string();
        surface.fill_path(&Path::circle(cx, cy, inner), &Paint::solid(&background));
    }

    if chart.hide_labels {
        return;
    }
    let label_radius = outer * LABEL_RADIUS_RATIO;
    for (i, &(start, end)) in angles.iter().enumerate() {
        let fraction = chart.values[i].max(0.0) / total;
        if fraction <= 0.0 {
            continue;
        }
        let mid = (start + end) / 2.0;
        let x = cx + label_radius * mid.cos();
        let y = cy + label_radius * mid.sin();
        let pct = (fraction * 100.0).round() as i64;
        surface.fill_text(&format!("{pct}%"), x, y + 4.0, TextAlign::Center, "#ffffff");
    }
}
