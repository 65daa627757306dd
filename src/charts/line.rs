//! Multi-series line chart with smoothed strokes and area fills.

use crate::color;
use crate::layout::LayoutPolicy;
use crate::path::Path;
use crate::scale::Scale;
use crate::surface::{DrawingSurface, Paint, TextAlign};

use super::{
    color_at, draw_grid, value_scale, BAR_PALETTE, LABEL_STAGGER, TEXT_COLOR, X_LABEL_OFFSET,
};

/// Scale floor: keeps flat or empty series from collapsing the axis.
const MAX_VALUE_FLOOR: f32 = 10.0;

/// Stroke width for series lines.
const STROKE_WIDTH: f32 = 3.0;

/// Marker radius.
const MARKER_RADIUS: f32 = 4.0;

/// Marker outline width.
const MARKER_OUTLINE: f32 = 2.0;

/// Alpha at the top of the area fill under each series.
const FADE_ALPHA: f32 = 0.2;

/// One plotted series.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub(crate) values: Vec<f32>,
    pub(crate) color: Option<String>,
}

impl Dataset {
    /// Create a series from its values, colored from the default palette.
    #[must_use]
    pub fn new(values: &[f32]) -> Self {
        Self {
            values: values.to_vec(),
            color: None,
        }
    }

    /// Override the series color.
    #[must_use]
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Line chart configuration.
#[derive(Debug, Clone, Default)]
pub struct LineChart {
    pub(crate) labels: Vec<String>,
    pub(crate) datasets: Vec<Dataset>,
    pub(crate) hide_grid: bool,
    pub(crate) hide_points: bool,
}

impl LineChart {
    /// Create an empty line chart with the grid enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the shared X-axis labels.
    #[must_use]
    pub fn labels<I, T>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Append a series.
    #[must_use]
    pub fn dataset(mut self, dataset: Dataset) -> Self {
        self.datasets.push(dataset);
        self
    }

    /// Toggle the background grid (default on).
    #[must_use]
    pub fn show_grid(mut self, show: bool) -> Self {
        self.hide_grid = !show;
        self
    }

    /// Toggle point markers (default on).
    #[must_use]
    pub fn show_points(mut self, show: bool) -> Self {
        self.hide_points = !show;
        self
    }

    /// The shared scale maximum over every series.
    #[must_use]
    pub fn max_value(&self) -> f32 {
        self.datasets
            .iter()
            .flat_map(|d| d.values.iter())
            .fold(MAX_VALUE_FLOOR, |m, v| m.max(*v))
    }

    /// Length of the longest series.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.datasets.iter().map(|d| d.values.len()).max().unwrap_or(0)
    }
}

/// Render a line chart onto the surface.
pub(crate) fn render<S: DrawingSurface>(surface: &mut S, policy: &LayoutPolicy, chart: &LineChart) {
    surface.clear();

    let state = surface.state();
    let padding = policy.padding;
    let chart_width = state.width - padding * 2.0;
    let baseline = state.height - padding;
    let max_value = chart.max_value();

    if !chart.hide_grid {
        draw_grid(surface, policy, max_value);
    }

    let point_count = chart.point_count();
    if point_count == 0 {
        return;
    }
    let Some(y_scale) = value_scale(state, policy, max_value) else {
        return;
    };

    // A single point still gets a positive spacing so x stays finite.
    let spacing = chart_width / (point_count.saturating_sub(1)).max(1) as f32;
    let marker_step = policy.point_step(point_count);
    let background = surface.background().to_string();

    for (series_idx, dataset) in chart.datasets.iter().enumerate() {
        if dataset.values.is_empty() {
            continue;
        }
        let series_color = dataset
            .color
            .as_deref()
            .unwrap_or_else(|| color_at(&[], &BAR_PALETTE, series_idx))
            .to_string();

        let points: Vec<(f32, f32)> = dataset
            .values
            .iter()
            .enumerate()
            .map(|(i, &v)| (padding + i as f32 * spacing, y_scale.scale(v.max(0.0))))
            .collect();

        if points.len() > 1 {
            let line = smoothed(&points);
            surface.stroke_path(&line, &series_color, STROKE_WIDTH);

            let mut area = smoothed(&points);
            let last_x = points[points.len() - 1].0;
            area.line_to(last_x, baseline)
                .line_to(points[0].0, baseline)
                .close();
            surface.fill_path(
                &area,
                &Paint::Gradient(color::vertical_fade(&series_color, FADE_ALPHA)),
            );
        }

        if !chart.hide_points {
            for (i, &(x, y)) in points.iter().enumerate() {
                if i % marker_step != 0 {
                    continue;
                }
                let marker = Path::circle(x, y, MARKER_RADIUS);
                surface.fill_path(&marker, &Paint::solid(&background));
                surface.stroke_path(&marker, &series_color, MARKER_OUTLINE);
            }
        }
    }

    draw_x_labels(surface, policy, chart, padding, spacing, baseline);
}

/// Shared X labels, thinned to the policy budget and staggered on mobile.
fn draw_x_labels<S: DrawingSurface>(
    surface: &mut S,
    policy: &LayoutPolicy,
    chart: &LineChart,
    padding: f32,
    spacing: f32,
    baseline: f32,
) {
    if chart.labels.is_empty() {
        return;
    }
    let step = policy.label_step(chart.labels.len());
    let mobile = surface.state().is_mobile();

    for (i, label) in chart.labels.iter().enumerate() {
        if i % step != 0 {
            continue;
        }
        let mut y = baseline + X_LABEL_OFFSET;
        if mobile && (i / step) % 2 == 1 {
            y += LABEL_STAGGER;
        }
        surface.fill_text(
            label,
            padding + i as f32 * spacing,
            y,
            TextAlign::Center,
            TEXT_COLOR,
        );
    }
}

/// Smooth a polyline with midpoint-anchored cubic segments.
fn smoothed(points: &[(f32, f32)]) -> Path {
    let mut path = Path::new();
    let (x0, y0) = points[0];
    path.move_to(x0, y0);
    for window in points.windows(2) {
        let (px, py) = window[0];
        let (cx, cy) = window[1];
        let mx = (px + cx) / 2.0;
        path.cubic_to(mx, py, mx, cy, cx, cy);
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let chart = LineChart::new();
        assert!(!chart.hide_grid);
        assert!(!chart.hide_points);
        assert!(chart.datasets.is_empty());
        assert_eq!(chart.point_count(), 0);
    }

    #[test]
    fn test_builder_toggles() {
        let chart = LineChart::new().show_grid(false).show_points(false);
        assert!(chart.hide_grid);
        assert!(chart.hide_points);
    }

    #[test]
    fn test_max_value_over_all_series() {
        let chart = LineChart::new()
            .dataset(Dataset::new(&[2.0, 4.0]))
            .dataset(Dataset::new(&[17.0, 1.0]));
        assert!((chart.max_value() - 17.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_max_value_floor() {
        let chart = LineChart::new().dataset(Dataset::new(&[1.0, 2.0]));
        assert!((chart.max_value() - 10.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_point_count_takes_longest() {
        let chart = LineChart::new()
            .dataset(Dataset::new(&[1.0]))
            .dataset(Dataset::new(&[1.0, 2.0, 3.0]));
        assert_eq!(chart.point_count(), 3);
    }

    #[test]
    fn test_smoothed_segment_count() {
        let path = smoothed(&[(0.0, 0.0), (10.0, 5.0), (20.0, 0.0)]);
        // MoveTo plus one cubic per consecutive pair.
        assert_eq!(path.ops().len(), 3);
    }

    #[test]
    fn test_dataset_color_override() {
        let ds = Dataset::new(&[1.0]).color("#123456");
        assert_eq!(ds.color.as_deref(), Some("#123456"));
    }
}
