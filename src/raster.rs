//! Software raster implementation of [`DrawingSurface`].
//!
//! Owns a [`Framebuffer`] sized in backing-store pixels and converts logical
//! (CSS) pixel coordinates through the device pixel ratio, so renderers can
//! ignore DPR entirely. Text is drawn from the embedded Spleen 6x12 PSF2
//! bitmap font, scaled to an integer factor of the DPR.

use std::fs::File;
use std::io::{BufWriter, Write};

use spleen_font::{PSF2Font, FONT_6X12};

use crate::color::{self, Rgba};
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::geometry::Point;
use crate::path::Path;
use crate::render::{draw_line_aa, draw_thick_segment, fill_segments};
use crate::surface::{DrawingSurface, Paint, SurfaceState, TextAlign};

/// Charts stay legible in collapsed host layouts: logical height never
/// drops below this floor, whatever the container reports.
pub const MIN_LOGICAL_HEIGHT: f32 = 300.0;

/// Glyph cell width of the embedded font, in logical pixels.
const FONT_W: f32 = 6.0;

/// Glyph cell height of the embedded font, in logical pixels.
const FONT_H: f32 = 12.0;

/// Ink used when a color string cannot be parsed.
const INK_FALLBACK: Rgba = Rgba::rgb(100, 116, 139);

/// A pixel-addressable drawing surface backed by a software framebuffer.
#[derive(Debug, Clone)]
pub struct RasterSurface {
    /// Logical width in CSS pixels.
    width: f32,
    /// Logical height in CSS pixels, floored at [`MIN_LOGICAL_HEIGHT`].
    height: f32,
    /// Device pixel ratio.
    dpr: f32,
    /// Background color string, resolved into `background_rgba`.
    background: String,
    background_rgba: Rgba,
    fb: Framebuffer,
}

impl RasterSurface {
    /// Create a surface with the given logical size and device pixel ratio.
    ///
    /// A non-finite or non-positive `dpr` falls back to 1. The logical
    /// height is floored at [`MIN_LOGICAL_HEIGHT`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`](crate::Error::InvalidDimensions)
    /// when the backing store would be empty.
    pub fn new(width: f32, height: f32, dpr: f32) -> Result<Self> {
        let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
        let height = height.max(MIN_LOGICAL_HEIGHT);

        let fb = Framebuffer::new(
            (width * dpr).round().max(0.0) as u32,
            (height * dpr).round().max(0.0) as u32,
        )?;

        let mut surface = Self {
            width,
            height,
            dpr,
            background: "#ffffff".to_string(),
            background_rgba: Rgba::WHITE,
            fb,
        };
        surface.clear();
        Ok(surface)
    }

    /// Set the background color (builder style).
    #[must_use]
    pub fn with_background(mut self, color: &str) -> Self {
        self.background = color.to_string();
        self.background_rgba = color::parse_css(color).unwrap_or(Rgba::WHITE);
        self.clear();
        self
    }

    /// Access the backing framebuffer (physical pixels).
    #[must_use]
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.fb
    }

    /// Encode the current surface contents as PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.encode_png(&mut buffer)?;
        Ok(buffer)
    }

    /// Write the current surface contents to a PNG file.
    ///
    /// # Errors
    ///
    /// Returns an error if file creation or PNG encoding fails.
    pub fn write_png<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        self.encode_png(BufWriter::new(File::create(path)?))
    }

    /// Encode the backing store (physical pixels) as RGBA8 PNG.
    fn encode_png<W: Write>(&self, writer: W) -> Result<()> {
        let mut encoder = png::Encoder::new(writer, self.fb.width(), self.fb.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        // Compact pixels strip the row stride padding.
        encoder
            .write_header()?
            .write_image_data(&self.fb.to_compact_pixels())?;
        Ok(())
    }

    /// Resolve a color string, falling back to the standard ink.
    fn resolve(&self, color: &str) -> Rgba {
        color::parse_css(color).unwrap_or(INK_FALLBACK)
    }

    /// Flatten a logical-pixel path into physical-pixel segments.
    fn physical_segments(&self, path: &Path) -> Vec<(Point, Point)> {
        path.flatten()
            .into_iter()
            .map(|(a, b)| {
                (
                    Point::new(a.x * self.dpr, a.y * self.dpr),
                    Point::new(b.x * self.dpr, b.y * self.dpr),
                )
            })
            .collect()
    }
}

impl DrawingSurface for RasterSurface {
    fn state(&self) -> SurfaceState {
        SurfaceState::new(self.width, self.height, self.dpr)
    }

    fn resize(&mut self, width: f32, height: f32) {
        let height = height.max(MIN_LOGICAL_HEIGHT);
        let Ok(fb) = Framebuffer::new(
            (width * self.dpr).round().max(0.0) as u32,
            (height * self.dpr).round().max(0.0) as u32,
        ) else {
            // Collapsed to nothing; keep the previous backing store.
            return;
        };

        self.width = width;
        self.height = height;
        self.fb = fb;
        self.clear();
    }

    fn background(&self) -> &str {
        &self.background
    }

    fn clear(&mut self) {
        self.fb.clear(self.background_rgba);
    }

    fn fill_path(&mut self, path: &Path, paint: &Paint) {
        let segs = self.physical_segments(path);
        if segs.is_empty() {
            return;
        }

        match paint {
            Paint::Solid(color) => {
                let rgba = self.resolve(color);
                fill_segments(&mut self.fb, &segs, |_| rgba);
            }
            Paint::Gradient(gradient) => {
                let top = self.resolve(&gradient.top);
                let bottom = self.resolve(&gradient.bottom);

                let mut min_y = f32::MAX;
                let mut max_y = f32::MIN;
                for (a, b) in &segs {
                    min_y = min_y.min(a.y).min(b.y);
                    max_y = max_y.max(a.y).max(b.y);
                }
                let span = (max_y - min_y).max(1.0);

                fill_segments(&mut self.fb, &segs, |row| {
                    let t = (row as f32 - min_y) / span;
                    top.lerp(bottom, t)
                });
            }
        }
    }

    fn stroke_path(&mut self, path: &Path, color: &str, width: f32) {
        let rgba = self.resolve(color);
        let physical_width = width * self.dpr;
        let segs = self.physical_segments(path);

        for (a, b) in segs {
            if physical_width <= 1.5 {
                draw_line_aa(&mut self.fb, a.x, a.y, b.x, b.y, rgba);
            } else {
                draw_thick_segment(&mut self.fb, a, b, physical_width, rgba);
            }
        }
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, align: TextAlign, color: &str) {
        if text.is_empty() {
            return;
        }
        let Ok(mut font) = PSF2Font::new(FONT_6X12) else {
            return;
        };

        let ink = self.resolve(color);
        let scale = self.dpr.round().max(1.0) as i64;
        let cell_w = FONT_W as i64 * scale;
        let cell_h = FONT_H as i64 * scale;

        let anchor = match align {
            TextAlign::Left => x,
            TextAlign::Center => x - self.measure_text(text) / 2.0,
            TextAlign::Right => x - self.measure_text(text),
        };

        let mut cursor_x = (anchor * self.dpr).round() as i64;
        let top = (y * self.dpr).round() as i64 - cell_h;

        for ch in text.chars() {
            let utf8 = ch.to_string();
            if let Some(glyph) = font.glyph_for_utf8(utf8.as_bytes()) {
                for (row_y, row) in glyph.enumerate() {
                    for (col_x, on) in row.enumerate() {
                        if !on {
                            continue;
                        }
                        let px = cursor_x + col_x as i64 * scale;
                        let py = top + row_y as i64 * scale;
                        if px >= 0 && py >= 0 {
                            self.fb
                                .fill_rect(px as u32, py as u32, scale as u32, scale as u32, ink);
                        }
                    }
                }
            }
            cursor_x += cell_w;
        }
    }

    fn measure_text(&self, text: &str) -> f32 {
        text.chars().count() as f32 * FONT_W
    }
}
