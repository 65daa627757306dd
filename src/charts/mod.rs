//! Chart types and their renderers.
//!
//! Each chart is a plain configuration builder consumed by a draw entry
//! point on [`ChartRenderer`](crate::renderer::ChartRenderer). Renderers
//! derive all geometry from the current surface state and layout policy, so
//! replaying a cached configuration after a resize reflows automatically.

mod bar;
mod donut;
mod line;

pub use bar::BarChart;
pub use donut::{slice_angles, DonutChart};
pub use line::{Dataset, LineChart};

pub(crate) use bar::render as bar_render;
pub(crate) use donut::render as donut_render;
pub(crate) use line::render as line_render;

use crate::layout::LayoutPolicy;
use crate::path::Path;
use crate::scale::LinearScale;
use crate::surface::{DrawingSurface, SurfaceState, TextAlign};

/// Grid line ink.
pub(crate) const GRID_COLOR: &str = "#e2e8f0";

/// Axis annotation and label ink.
pub(crate) const TEXT_COLOR: &str = "#64748b";

/// Default bar palette, cycled per bar.
pub(crate) const BAR_PALETTE: [&str; 7] = [
    "#6366f1", "#8b5cf6", "#14b8a6", "#10b981", "#f59e0b", "#ef4444", "#ec4899",
];

/// Default donut palette, cycled per slice.
pub(crate) const DONUT_PALETTE: [&str; 6] = [
    "#10b981", "#6366f1", "#f59e0b", "#ef4444", "#8b5cf6", "#334155",
];

/// Number of horizontal grid divisions.
pub(crate) const GRID_DIVISIONS: u32 = 5;

/// Gap between the baseline and X-axis labels.
pub(crate) const X_LABEL_OFFSET: f32 = 16.0;

/// Extra Y offset for staggered mobile labels on odd indices.
pub(crate) const LABEL_STAGGER: f32 = 10.0;

/// Format a value label: integral values without a fraction, everything
/// else with one decimal.
pub(crate) fn format_value(value: f32) -> String {
    if (value - value.round()).abs() < 1e-3 {
        format!("{}", value.round() as i64)
    } else {
        format!("{value:.1}")
    }
}

/// Draw the five-division horizontal grid with Y-axis annotations.
pub(crate) fn draw_grid<S: DrawingSurface>(surface: &mut S, policy: &LayoutPolicy, max_value: f32) {
    let SurfaceState { width, height, .. } = surface.state();
    let padding = policy.padding;
    let chart_height = height - padding * 2.0;
    let baseline = height - padding;

    for i in 0..=GRID_DIVISIONS {
        let y = baseline - (chart_height / GRID_DIVISIONS as f32) * i as f32;

        let mut line = Path::new();
        line.move_to(padding, y).line_to(width - padding, y);
        surface.stroke_path(&line, GRID_COLOR, 1.0);

        let tick = (max_value / GRID_DIVISIONS as f32) * i as f32;
        surface.fill_text(
            &format!("{}", tick.round() as i64),
            padding - 6.0,
            y + 4.0,
            TextAlign::Right,
            TEXT_COLOR,
        );
    }
}

/// Y scale for the plot area: value domain, flipped pixel range.
pub(crate) fn value_scale(
    state: SurfaceState,
    policy: &LayoutPolicy,
    max_value: f32,
) -> Option<LinearScale> {
    let baseline = state.height - policy.padding;
    LinearScale::new((0.0, max_value), (baseline, policy.padding)).ok()
}

/// Pick a color for index `i`, cycling `colors` and falling back to the
/// given palette when the config carries none.
pub(crate) fn color_at<'a>(colors: &'a [String], palette: &'a [&'a str], i: usize) -> &'a str {
    if colors.is_empty() {
        palette[i % palette.len()]
    } else {
        &colors[i % colors.len()]
    }
}
