//! Responsive layout policy.
//!
//! A pure function of [`SurfaceState`]: padding, bar-width clamp, and the
//! label/point decimation thresholds that keep small surfaces legible. The
//! policy is reconsulted on every resize and never touches chart data.

use crate::surface::SurfaceState;

/// Plot padding on desktop-width surfaces.
const PADDING_DESKTOP: f32 = 40.0;
/// Plot padding below the mobile breakpoint.
const PADDING_MOBILE: f32 = 20.0;
/// Plot padding below the ultra-narrow breakpoint.
const PADDING_ULTRA_NARROW: f32 = 10.0;

/// Layout parameters derived from the current surface geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutPolicy {
    /// Padding between the surface edge and the plot area.
    pub padding: f32,
    /// Clamp range for rendered bar widths.
    pub bar_width_range: (f32, f32),
    /// Maximum number of X-axis labels before thinning kicks in.
    pub max_x_labels: usize,
    /// Multiplier applied to point decimation: 1 shows every point up to
    /// the label budget, 3 skips more points before drawing a marker.
    pub point_decimation_rate: usize,
}

impl LayoutPolicy {
    /// Derive the policy for a surface state.
    #[must_use]
    pub fn for_state(state: SurfaceState) -> Self {
        if state.is_mobile() {
            Self {
                padding: if state.is_ultra_narrow() {
                    PADDING_ULTRA_NARROW
                } else {
                    PADDING_MOBILE
                },
                bar_width_range: (10.0, 60.0),
                max_x_labels: 5,
                point_decimation_rate: 3,
            }
        } else {
            Self {
                padding: PADDING_DESKTOP,
                bar_width_range: (10.0, 60.0),
                max_x_labels: 10,
                point_decimation_rate: 1,
            }
        }
    }

    /// Index step for drawing markers over `len` points: every `k`-th point
    /// survives, where `k = ceil(len * rate / 10)`.
    #[must_use]
    pub fn point_step(&self, len: usize) -> usize {
        (len * self.point_decimation_rate).div_ceil(10).max(1)
    }

    /// Index step for drawing at most `max_x_labels` labels over `len`.
    #[must_use]
    pub fn label_step(&self, len: usize) -> usize {
        len.div_ceil(self.max_x_labels).max(1)
    }
}
