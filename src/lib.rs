//! # Pulse-Viz
//!
//! Software-rendered 2D charts for dashboards: bar, line, and donut charts
//! drawn onto a pixel-addressable surface with no browser or GPU
//! dependencies.
//!
//! Chart configurations are plain builders; a [`ChartRenderer`] draws them
//! onto any [`DrawingSurface`] implementation and remembers the last
//! configuration, so a host-driven resize replays the chart against the new
//! geometry. The built-in [`RasterSurface`] backend handles device pixel
//! ratio scaling and can snapshot itself to PNG.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pulse_viz::prelude::*;
//!
//! let surface = RasterSurface::new(800.0, 400.0, 2.0)?;
//! let mut renderer = ChartRenderer::with_surface(surface);
//!
//! renderer.draw_bar_chart(
//!     BarChart::new()
//!         .labels(["Mon", "Tue", "Wed"])
//!         .values(&[4.0, 7.0, 2.0]),
//! )?;
//!
//! // The host reports a layout change; the bar chart reflows.
//! renderer.notify_resize(360.0, 400.0)?;
//!
//! renderer.surface().unwrap().write_png("week.png")?;
//! ```
//!
//! [`ChartRenderer`]: renderer::ChartRenderer
//! [`DrawingSurface`]: surface::DrawingSurface
//! [`RasterSurface`]: raster::RasterSurface

#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

/// Color types, parsing, and gradient descriptors.
pub mod color;

/// Error types.
pub mod error;

/// Core framebuffer for pixel rendering.
pub mod framebuffer;

/// Geometric primitives (points, rectangles, corner radii).
pub mod geometry;

/// Scale functions for data-to-pixel mappings.
pub mod scale;

/// Retained path model consumed by surface backends.
pub mod path;

/// The drawing surface capability interface.
pub mod surface;

/// Software raster backend.
pub mod raster;

/// Responsive layout policy.
pub mod layout;

/// Chart configurations and their renderers.
pub mod charts;

/// The chart renderer with resize replay.
pub mod renderer;

/// Low-level rasterization primitives.
pub mod render;

pub use error::{Error, Result};

/// Commonly used types, for glob import.
pub mod prelude {
    pub use crate::charts::{BarChart, Dataset, DonutChart, LineChart};
    pub use crate::color::Rgba;
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{CornerRadii, Point, Rect};
    pub use crate::layout::LayoutPolicy;
    pub use crate::raster::RasterSurface;
    pub use crate::renderer::ChartRenderer;
    pub use crate::surface::{DrawingSurface, Paint, SurfaceState, TextAlign};
}
