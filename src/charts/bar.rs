//! Bar chart configuration and renderer.

use crate::color;
use crate::geometry::{CornerRadii, Rect};
use crate::layout::LayoutPolicy;
use crate::scale::Scale;
use crate::surface::{DrawingSurface, Paint, TextAlign};

use super::{
    color_at, draw_grid, format_value, value_scale, BAR_PALETTE, LABEL_STAGGER, TEXT_COLOR,
    X_LABEL_OFFSET,
};

/// Slot widths below which value labels are omitted (crowding takes
/// priority over completeness).
const VALUE_LABEL_MIN_SLOT: f32 = 25.0;

/// Slot width above which every X label is drawn.
const X_LABEL_MIN_SLOT: f32 = 30.0;

/// Slot width above which every other X label is drawn.
const X_LABEL_MIN_SLOT_ALTERNATING: f32 = 15.0;

/// Scale floor: prevents a degenerate near-zero axis when all values are
/// tiny or zero.
const MAX_VALUE_FLOOR: f32 = 5.0;

/// Bar chart configuration.
///
/// `labels[i]` corresponds to `values[i]`; missing labels render as empty
/// strings, never an error.
#[derive(Debug, Clone, Default)]
pub struct BarChart {
    pub(crate) labels: Vec<String>,
    pub(crate) values: Vec<f32>,
    pub(crate) colors: Vec<String>,
    pub(crate) hide_grid: bool,
    pub(crate) hide_values: bool,
}

impl BarChart {
    /// Create an empty bar chart with the default palette, grid and value
    /// labels enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the X-axis labels.
    #[must_use]
    pub fn labels<I, T>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Set the bar values.
    #[must_use]
    pub fn values(mut self, values: &[f32]) -> Self {
        self.values = values.to_vec();
        self
    }

    /// Set per-bar colors, cycled when shorter than `values`.
    #[must_use]
    pub fn colors<I, T>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.colors = colors.into_iter().map(Into::into).collect();
        self
    }

    /// Toggle the background grid (default on).
    #[must_use]
    pub fn show_grid(mut self, show: bool) -> Self {
        self.hide_grid = !show;
        self
    }

    /// Toggle value labels above bars (default on).
    #[must_use]
    pub fn show_values(mut self, show: bool) -> Self {
        self.hide_values = !show;
        self
    }

    /// The shared scale maximum for this chart.
    #[must_use]
    pub fn max_value(&self) -> f32 {
        self.values.iter().fold(MAX_VALUE_FLOOR, |m, v| m.max(*v))
    }
}

/// Render a bar chart onto the surface.
pub(crate) fn render<S: DrawingSurface>(surface: &mut S, policy: &LayoutPolicy, chart: &BarChart) {
    surface.clear();

    let state = surface.state();
    let padding = policy.padding;
    let chart_width = state.width - padding * 2.0;
    let baseline = state.height - padding;
    let max_value = chart.max_value();

    if !chart.hide_grid {
        draw_grid(surface, policy, max_value);
    }

    if chart.values.is_empty() {
        return;
    }
    let Some(y_scale) = value_scale(state, policy, max_value) else {
        return;
    };

    let slot = chart_width / chart.values.len() as f32;
    let (min_width, max_width) = policy.bar_width_range;
    let bar_width = (slot * 0.6).clamp(min_width, max_width);
    let corner = 6.0_f32.min(bar_width / 2.0);

    for (i, &value) in chart.values.iter().enumerate() {
        let x = padding + i as f32 * slot + (slot - bar_width) / 2.0;
        let top = y_scale.scale(value.max(0.0));
        let bar_height = baseline - top;
        let base_color = color_at(&chart.colors, &BAR_PALETTE, i);

        if bar_height > 0.0 {
            let fill = Paint::Gradient(color::vertical_gradient(
                base_color,
                &color::to_rgba(base_color, 0.6),
            ));
            surface.fill_rounded_rect(
                Rect::new(x, top, bar_width, bar_height),
                CornerRadii::top(corner),
                &fill,
            );
        }

        if !chart.hide_values && value > 0.0 && slot > VALUE_LABEL_MIN_SLOT {
            surface.fill_text(
                &format_value(value),
                x + bar_width / 2.0,
                top - 6.0,
                TextAlign::Center,
                TEXT_COLOR,
            );
        }

        let show_label =
            slot > X_LABEL_MIN_SLOT || (slot > X_LABEL_MIN_SLOT_ALTERNATING && i % 2 == 0);
        if show_label {
            let label = chart.labels.get(i).map_or("", String::as_str);
            let mut label_y = baseline + X_LABEL_OFFSET;
            if state.is_mobile() && i % 2 == 1 {
                label_y += LABEL_STAGGER;
            }
            surface.fill_text(
                label,
                x + bar_width / 2.0,
                label_y,
                TextAlign::Center,
                TEXT_COLOR,
            );
        }
    }
}
