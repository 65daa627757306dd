//! Primitive rasterization routines.
//!
//! All routines address the framebuffer in physical pixels; the surface
//! layer applies device-pixel-ratio scaling before calling in.

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use crate::geometry::Point;

// ============================================================================
// Line Drawing
// ============================================================================

/// Draw an anti-aliased line using Wu's algorithm.
///
/// Wu's algorithm draws two pixels at each step along the major axis,
/// adjusting their intensities based on the fractional distance from the
/// ideal line position.
///
/// # References
///
/// Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.
pub fn draw_line_aa(fb: &mut Framebuffer, x0: f32, y0: f32, x1: f32, y1: f32, color: Rgba) {
    let steep = (y1 - y0).abs() > (x1 - x0).abs();

    let (x0, y0, x1, y1) = if steep { (y0, x0, y1, x1) } else { (x0, y0, x1, y1) };

    let (x0, y0, x1, y1) = if x0 > x1 { (x1, y1, x0, y0) } else { (x0, y0, x1, y1) };

    let dx = x1 - x0;
    let dy = y1 - y0;
    let gradient = if dx.abs() < f32::EPSILON { 1.0 } else { dy / dx };

    // First endpoint
    let xend = x0.round();
    let yend = y0 + gradient * (xend - x0);
    let xgap = rfpart(x0 + 0.5);
    let xpxl1 = xend as i32;
    let ypxl1 = yend.floor() as i32;

    if steep {
        plot(fb, ypxl1, xpxl1, color, rfpart(yend) * xgap);
        plot(fb, ypxl1 + 1, xpxl1, color, fpart(yend) * xgap);
    } else {
        plot(fb, xpxl1, ypxl1, color, rfpart(yend) * xgap);
        plot(fb, xpxl1, ypxl1 + 1, color, fpart(yend) * xgap);
    }

    let mut intery = yend + gradient;

    // Second endpoint
    let xend = x1.round();
    let yend = y1 + gradient * (xend - x1);
    let xgap = fpart(x1 + 0.5);
    let xpxl2 = xend as i32;
    let ypxl2 = yend.floor() as i32;

    if steep {
        plot(fb, ypxl2, xpxl2, color, rfpart(yend) * xgap);
        plot(fb, ypxl2 + 1, xpxl2, color, fpart(yend) * xgap);
    } else {
        plot(fb, xpxl2, ypxl2, color, rfpart(yend) * xgap);
        plot(fb, xpxl2, ypxl2 + 1, color, fpart(yend) * xgap);
    }

    // Main loop
    if steep {
        for x in (xpxl1 + 1)..xpxl2 {
            let ipart = intery.floor() as i32;
            plot(fb, ipart, x, color, rfpart(intery));
            plot(fb, ipart + 1, x, color, fpart(intery));
            intery += gradient;
        }
    } else {
        for x in (xpxl1 + 1)..xpxl2 {
            let ipart = intery.floor() as i32;
            plot(fb, x, ipart, color, rfpart(intery));
            plot(fb, x, ipart + 1, color, fpart(intery));
            intery += gradient;
        }
    }
}

/// Stamp a thick line segment by walking it and filling a square brush.
pub fn draw_thick_segment(fb: &mut Framebuffer, a: Point, b: Point, width: f32, color: Rgba) {
    let half = ((width / 2.0).ceil() as i32).max(0);
    let dx = (b.x - a.x).abs();
    let dy = (b.y - a.y).abs();
    let steps = dx.max(dy).ceil() as i32;
    if steps == 0 {
        fill_brush(fb, a.x.round() as i32, a.y.round() as i32, half, color);
        return;
    }

    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        let cx = (a.x + t * (b.x - a.x)).round() as i32;
        let cy = (a.y + t * (b.y - a.y)).round() as i32;
        fill_brush(fb, cx, cy, half, color);
    }
}

fn fill_brush(fb: &mut Framebuffer, cx: i32, cy: i32, half: i32, color: Rgba) {
    for oy in -half..=half {
        for ox in -half..=half {
            let px = cx + ox;
            let py = cy + oy;
            if px >= 0 && py >= 0 {
                fb.set_pixel(px as u32, py as u32, color);
            }
        }
    }
}

/// Plot a pixel with intensity (for anti-aliased drawing).
#[inline]
fn plot(fb: &mut Framebuffer, x: i32, y: i32, color: Rgba, intensity: f32) {
    if x >= 0 && y >= 0 && x < fb.width() as i32 && y < fb.height() as i32 {
        let alpha = (f32::from(color.a) * intensity) as u8;
        fb.blend_pixel(x as u32, y as u32, color.with_alpha(alpha));
    }
}

/// Fractional part of a float.
#[inline]
fn fpart(x: f32) -> f32 {
    x - x.floor()
}

/// Reverse fractional part.
#[inline]
fn rfpart(x: f32) -> f32 {
    1.0 - fpart(x)
}

// ============================================================================
// Polygon Filling
// ============================================================================

/// Fill the region enclosed by flattened path segments using an even-odd
/// scanline rule. `color_at` supplies the color per scanline row, which lets
/// the caller implement vertical gradients without a second pass.
pub fn fill_segments<F>(fb: &mut Framebuffer, segments: &[(Point, Point)], color_at: F)
where
    F: Fn(u32) -> Rgba,
{
    if segments.is_empty() {
        return;
    }

    let mut min_y = f32::MAX;
    let mut max_y = f32::MIN;
    for (a, b) in segments {
        min_y = min_y.min(a.y).min(b.y);
        max_y = max_y.max(a.y).max(b.y);
    }

    let scan_min = (min_y.floor() as i32).max(0);
    let scan_max = (max_y.ceil() as i32).min(fb.height() as i32);

    let mut intersections: Vec<f32> = Vec::new();
    for row in scan_min..scan_max {
        let y = row as f32 + 0.5;
        intersections.clear();

        for &(a, b) in segments {
            let (lo, hi) = if a.y < b.y { (a.y, b.y) } else { (b.y, a.y) };
            if y < lo || y >= hi {
                continue;
            }
            let t = (y - a.y) / (b.y - a.y);
            intersections.push(a.x + t * (b.x - a.x));
        }

        intersections.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let color = color_at(row as u32);
        let mut i = 0;
        while i + 1 < intersections.len() {
            let left = (intersections[i].round() as i32).max(0);
            let right = (intersections[i + 1].round() as i32).min(fb.width() as i32);
            for col in left..right {
                fb.blend_pixel(col as u32, row as u32, color);
            }
            i += 2;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;

    const INK: Rgba = Rgba::BLACK;

    fn white_fb(w: u32, h: u32) -> Framebuffer {
        let mut fb = Framebuffer::new(w, h).unwrap();
        fb.clear(Rgba::WHITE);
        fb
    }

    #[test]
    fn test_draw_line_aa_touches_line() {
        let mut fb = white_fb(100, 100);
        draw_line_aa(&mut fb, 10.0, 10.0, 90.0, 50.0, INK);

        // Midpoint neighborhood should be darkened.
        let mid = fb.get_pixel(50, 30).unwrap();
        let above = fb.get_pixel(50, 29).unwrap();
        let below = fb.get_pixel(50, 31).unwrap();
        assert!(mid.r < 255 || above.r < 255 || below.r < 255);
    }

    #[test]
    fn test_thick_segment_covers_width() {
        let mut fb = white_fb(100, 100);
        draw_thick_segment(
            &mut fb,
            Point::new(10.0, 50.0),
            Point::new(90.0, 50.0),
            4.0,
            INK,
        );

        assert_eq!(fb.get_pixel(50, 48), Some(INK));
        assert_eq!(fb.get_pixel(50, 50), Some(INK));
        assert_eq!(fb.get_pixel(50, 52), Some(INK));
        assert_eq!(fb.get_pixel(50, 40), Some(Rgba::WHITE));
    }

    #[test]
    fn test_fill_segments_triangle() {
        let mut fb = white_fb(100, 100);
        let segs = vec![
            (Point::new(10.0, 80.0), Point::new(90.0, 80.0)),
            (Point::new(90.0, 80.0), Point::new(50.0, 10.0)),
            (Point::new(50.0, 10.0), Point::new(10.0, 80.0)),
        ];
        fill_segments(&mut fb, &segs, |_| INK);

        // Centroid inside, corners of the framebuffer outside.
        assert_eq!(fb.get_pixel(50, 60), Some(INK));
        assert_eq!(fb.get_pixel(5, 5), Some(Rgba::WHITE));
        assert_eq!(fb.get_pixel(95, 95), Some(Rgba::WHITE));
    }

    #[test]
    fn test_fill_segments_row_color() {
        let mut fb = white_fb(10, 10);
        let segs = vec![
            (Point::new(0.0, 0.0), Point::new(10.0, 0.0)),
            (Point::new(10.0, 0.0), Point::new(10.0, 10.0)),
            (Point::new(10.0, 10.0), Point::new(0.0, 10.0)),
            (Point::new(0.0, 10.0), Point::new(0.0, 0.0)),
        ];
        fill_segments(&mut fb, &segs, |row| {
            if row < 5 {
                Rgba::BLACK
            } else {
                Rgba::rgb(200, 0, 0)
            }
        });

        assert_eq!(fb.get_pixel(5, 2), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(5, 8), Some(Rgba::rgb(200, 0, 0)));
    }

    #[test]
    fn test_fill_segments_empty() {
        let mut fb = white_fb(10, 10);
        fill_segments(&mut fb, &[], |_| INK);
        assert_eq!(fb.get_pixel(5, 5), Some(Rgba::WHITE));
    }
}
