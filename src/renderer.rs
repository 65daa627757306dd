//! Chart renderer: dispatch, configuration cache, and resize replay.

use crate::charts::{bar_render, donut_render, line_render, BarChart, DonutChart, LineChart};
use crate::error::{Error, Result};
use crate::layout::LayoutPolicy;
use crate::surface::DrawingSurface;

/// The most recent chart configuration, kept for resize replay.
#[derive(Debug, Clone, Default)]
enum LastDraw {
    #[default]
    None,
    Bar(BarChart),
    Line(LineChart),
    Donut(DonutChart),
}

/// Renders chart configurations onto a bound [`DrawingSurface`].
///
/// The renderer owns its surface for the duration of the binding and
/// remembers the last drawn configuration, so [`notify_resize`] can replay
/// it against the new geometry without the caller holding onto chart data.
///
/// [`notify_resize`]: ChartRenderer::notify_resize
#[derive(Debug)]
pub struct ChartRenderer<S: DrawingSurface> {
    surface: Option<S>,
    last_draw: LastDraw,
}

impl<S: DrawingSurface> Default for ChartRenderer<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: DrawingSurface> ChartRenderer<S> {
    /// Create a renderer with no surface bound.
    #[must_use]
    pub fn new() -> Self {
        Self {
            surface: None,
            last_draw: LastDraw::None,
        }
    }

    /// Create a renderer bound to a surface.
    #[must_use]
    pub fn with_surface(surface: S) -> Self {
        Self {
            surface: Some(surface),
            last_draw: LastDraw::None,
        }
    }

    /// Bind a surface, replacing and returning any previous one.
    pub fn bind(&mut self, surface: S) -> Option<S> {
        self.surface.replace(surface)
    }

    /// Release the bound surface. The cached configuration is kept, so a
    /// later bind plus resize resumes where the renderer left off.
    pub fn release(&mut self) -> Option<S> {
        self.surface.take()
    }

    /// The bound surface, if any.
    #[must_use]
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    /// Mutable access to the bound surface.
    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    /// Draw a bar chart and cache its configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SurfaceUnavailable`] when no surface is bound.
    pub fn draw_bar_chart(&mut self, chart: BarChart) -> Result<()> {
        let surface = self.surface.as_mut().ok_or(Error::SurfaceUnavailable)?;
        let policy = LayoutPolicy::for_state(surface.state());
        bar_render(surface, &policy, &chart);
        self.last_draw = LastDraw::Bar(chart);
        Ok(())
    }

    /// Draw a line chart and cache its configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SurfaceUnavailable`] when no surface is bound.
    pub fn draw_line_chart(&mut self, chart: LineChart) -> Result<()> {
        let surface = self.surface.as_mut().ok_or(Error::SurfaceUnavailable)?;
        let policy = LayoutPolicy::for_state(surface.state());
        line_render(surface, &policy, &chart);
        self.last_draw = LastDraw::Line(chart);
        Ok(())
    }

    /// Draw a donut chart and cache its configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SurfaceUnavailable`] when no surface is bound.
    pub fn draw_donut_chart(&mut self, chart: DonutChart) -> Result<()> {
        let surface = self.surface.as_mut().ok_or(Error::SurfaceUnavailable)?;
        let policy = LayoutPolicy::for_state(surface.state());
        donut_render(surface, &policy, &chart);
        self.last_draw = LastDraw::Donut(chart);
        Ok(())
    }

    /// Resize the surface and replay the cached configuration, if any.
    ///
    /// Layout-dependent choices (padding, label thinning, decimation) are
    /// re-derived from the new geometry during the replay.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SurfaceUnavailable`] when no surface is bound.
    pub fn notify_resize(&mut self, width: f32, height: f32) -> Result<()> {
        let surface = self.surface.as_mut().ok_or(Error::SurfaceUnavailable)?;
        surface.resize(width, height);

        match std::mem::replace(&mut self.last_draw, LastDraw::None) {
            LastDraw::None => Ok(()),
            LastDraw::Bar(chart) => self.draw_bar_chart(chart),
            LastDraw::Line(chart) => self.draw_line_chart(chart),
            LastDraw::Donut(chart) => self.draw_donut_chart(chart),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::RasterSurface;

    fn renderer() -> ChartRenderer<RasterSurface> {
        ChartRenderer::with_surface(RasterSurface::new(640.0, 360.0, 1.0).unwrap())
    }

    #[test]
    fn test_unbound_renderer_errors() {
        let mut r: ChartRenderer<RasterSurface> = ChartRenderer::new();
        assert!(matches!(
            r.draw_bar_chart(BarChart::new()),
            Err(Error::SurfaceUnavailable)
        ));
        assert!(matches!(
            r.notify_resize(100.0, 100.0),
            Err(Error::SurfaceUnavailable)
        ));
    }

    #[test]
    fn test_bind_replaces_surface() {
        let mut r = renderer();
        let old = r.bind(RasterSurface::new(100.0, 100.0, 1.0).unwrap());
        assert!(old.is_some());
        let state = r.surface().unwrap().state();
        assert!((state.width - 100.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_release_keeps_cache() {
        let mut r = renderer();
        r.draw_bar_chart(BarChart::new().values(&[1.0, 2.0])).unwrap();
        let surface = r.release().unwrap();

        r.bind(surface);
        // The cached bar chart replays against the new geometry.
        r.notify_resize(320.0, 240.0).unwrap();
        let state = r.surface().unwrap().state();
        assert!((state.width - 320.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_resize_without_draw_is_ok() {
        let mut r = renderer();
        r.notify_resize(800.0, 400.0).unwrap();
    }
}
