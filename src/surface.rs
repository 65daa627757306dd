//! The drawing surface capability interface.
//!
//! Renderers never talk to a concrete backend; they emit draw commands
//! through [`DrawingSurface`]. Any pixel-addressable 2D backend (the built-in
//! software rasterizer, a GPU 2D API, a test recorder) can implement it.

use crate::color::GradientDescriptor;
use crate::geometry::{CornerRadii, Rect};
use crate::path::Path;

/// Breakpoint below which a surface is considered mobile-sized.
pub const MOBILE_BREAKPOINT: f32 = 500.0;

/// Breakpoint below which a surface is considered ultra-narrow.
pub const ULTRA_NARROW_BREAKPOINT: f32 = 350.0;

/// Measured geometry of a drawing surface, in logical (CSS) pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceState {
    /// Logical width.
    pub width: f32,
    /// Logical height.
    pub height: f32,
    /// Device pixel ratio: physical pixels per logical pixel.
    pub dpr: f32,
}

impl SurfaceState {
    /// Create a surface state.
    #[must_use]
    pub const fn new(width: f32, height: f32, dpr: f32) -> Self {
        Self { width, height, dpr }
    }

    /// Width below the mobile breakpoint.
    #[must_use]
    pub fn is_mobile(&self) -> bool {
        self.width < MOBILE_BREAKPOINT
    }

    /// Width below the ultra-narrow breakpoint.
    #[must_use]
    pub fn is_ultra_narrow(&self) -> bool {
        self.width < ULTRA_NARROW_BREAKPOINT
    }
}

/// Horizontal anchoring for [`DrawingSurface::fill_text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    /// Anchor text at its left edge.
    #[default]
    Left,
    /// Center text on the given x.
    Center,
    /// Anchor text at its right edge.
    Right,
}

/// Fill style for paths and rectangles.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    /// A flat CSS-style color string.
    Solid(String),
    /// A two-stop vertical gradient across the filled region.
    Gradient(GradientDescriptor),
}

impl Paint {
    /// Convenience constructor for a solid paint.
    #[must_use]
    pub fn solid(color: &str) -> Self {
        Self::Solid(color.to_string())
    }
}

/// A pixel-addressable 2D drawing target, addressed in logical pixels.
///
/// Implementations own the logical-to-physical conversion (device pixel
/// ratio); everything a renderer passes in is logical. Color strings the
/// backend cannot parse degrade to its ink fallback rather than erroring.
pub trait DrawingSurface {
    /// Current measured geometry. Idempotent between calls to [`resize`].
    ///
    /// [`resize`]: DrawingSurface::resize
    fn state(&self) -> SurfaceState;

    /// Re-measure against a new logical size, resizing the backing store.
    fn resize(&mut self, width: f32, height: f32);

    /// The surface background color, as a CSS-style string.
    fn background(&self) -> &str;

    /// Clear the whole surface to the background color.
    fn clear(&mut self);

    /// Fill a path with the given paint (even-odd rule).
    fn fill_path(&mut self, path: &Path, paint: &Paint);

    /// Stroke a path with the given color and line width.
    fn stroke_path(&mut self, path: &Path, color: &str, width: f32);

    /// Fill a rectangle with per-corner radii.
    fn fill_rounded_rect(&mut self, rect: Rect, radii: CornerRadii, paint: &Paint) {
        self.fill_path(&Path::rounded_rect(rect, radii), paint);
    }

    /// Draw a run of text anchored at `(x, y)`, where `y` is the baseline.
    fn fill_text(&mut self, text: &str, x: f32, y: f32, align: TextAlign, color: &str);

    /// Width of a run of text in logical pixels.
    fn measure_text(&self, text: &str) -> f32;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoints() {
        let desktop = SurfaceState::new(800.0, 400.0, 1.0);
        assert!(!desktop.is_mobile());
        assert!(!desktop.is_ultra_narrow());

        let mobile = SurfaceState::new(400.0, 400.0, 1.0);
        assert!(mobile.is_mobile());
        assert!(!mobile.is_ultra_narrow());

        let narrow = SurfaceState::new(300.0, 400.0, 1.0);
        assert!(narrow.is_mobile());
        assert!(narrow.is_ultra_narrow());
    }

    #[test]
    fn test_breakpoint_edges() {
        assert!(!SurfaceState::new(500.0, 400.0, 1.0).is_mobile());
        assert!(SurfaceState::new(499.9, 400.0, 1.0).is_mobile());
        assert!(!SurfaceState::new(350.0, 400.0, 1.0).is_ultra_narrow());
        assert!(SurfaceState::new(349.9, 400.0, 1.0).is_ultra_narrow());
    }

    #[test]
    fn test_paint_solid() {
        assert_eq!(Paint::solid("#fff"), Paint::Solid("#fff".to_string()));
    }
}
