//! Retained path model.
//!
//! Renderers describe geometry as a sequence of path operations; backends
//! flatten curves and arcs into line segments before rasterizing. Arc
//! semantics follow the usual 2D canvas model: an arc op first connects the
//! current point to the arc's start point.

use crate::geometry::{CornerRadii, Point, Rect};

/// Subdivision steps for quadratic and cubic segments.
const CURVE_STEPS: u32 = 16;

/// Maximum angular step when flattening arcs, in radians (~4.5 degrees).
const ARC_STEP: f32 = 0.08;

/// One operation in a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathOp {
    /// Start a new subpath at the given point.
    MoveTo(Point),
    /// Straight segment from the current point.
    LineTo(Point),
    /// Quadratic curve from the current point.
    QuadTo {
        /// Control point.
        ctrl: Point,
        /// End point.
        to: Point,
    },
    /// Cubic curve from the current point.
    CubicTo {
        /// First control point.
        ctrl1: Point,
        /// Second control point.
        ctrl2: Point,
        /// End point.
        to: Point,
    },
    /// Circular arc around a center point.
    Arc {
        /// Arc center.
        center: Point,
        /// Arc radius.
        radius: f32,
        /// Start angle in radians.
        start_angle: f32,
        /// End angle in radians.
        end_angle: f32,
        /// Sweep counterclockwise instead of clockwise.
        ccw: bool,
    },
    /// Close the current subpath back to its starting point.
    Close,
}

/// A sequence of path operations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    ops: Vec<PathOp>,
}

impl Path {
    /// Create an empty path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded operations.
    #[must_use]
    pub fn ops(&self) -> &[PathOp] {
        &self.ops
    }

    /// True when no operations have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Start a new subpath.
    pub fn move_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.ops.push(PathOp::MoveTo(Point::new(x, y)));
        self
    }

    /// Straight segment to the given point.
    pub fn line_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.ops.push(PathOp::LineTo(Point::new(x, y)));
        self
    }

    /// Quadratic curve to `(x, y)` with control point `(cx, cy)`.
    pub fn quad_to(&mut self, cx: f32, cy: f32, x: f32, y: f32) -> &mut Self {
        self.ops.push(PathOp::QuadTo {
            ctrl: Point::new(cx, cy),
            to: Point::new(x, y),
        });
        self
    }

    /// Cubic curve to `(x, y)` with control points `(c1x, c1y)`, `(c2x, c2y)`.
    pub fn cubic_to(&mut self, c1x: f32, c1y: f32, c2x: f32, c2y: f32, x: f32, y: f32) -> &mut Self {
        self.ops.push(PathOp::CubicTo {
            ctrl1: Point::new(c1x, c1y),
            ctrl2: Point::new(c2x, c2y),
            to: Point::new(x, y),
        });
        self
    }

    /// Circular arc around `(cx, cy)`.
    pub fn arc(&mut self, cx: f32, cy: f32, radius: f32, start_angle: f32, end_angle: f32, ccw: bool) -> &mut Self {
        self.ops.push(PathOp::Arc {
            center: Point::new(cx, cy),
            radius,
            start_angle,
            end_angle,
            ccw,
        });
        self
    }

    /// Close the current subpath.
    pub fn close(&mut self) -> &mut Self {
        self.ops.push(PathOp::Close);
        self
    }

    /// A full circle as a standalone path.
    #[must_use]
    pub fn circle(cx: f32, cy: f32, radius: f32) -> Self {
        let mut path = Self::new();
        path.move_to(cx + radius, cy)
            .arc(cx, cy, radius, 0.0, std::f32::consts::TAU, false)
            .close();
        path
    }

    /// A rectangle with per-corner radii.
    #[must_use]
    pub fn rounded_rect(rect: Rect, radii: CornerRadii) -> Self {
        use std::f32::consts::{FRAC_PI_2, PI};

        let Rect {
            x,
            y,
            width: w,
            height: h,
        } = rect;
        let max_r = (w / 2.0).min(h / 2.0);
        let tl = radii.top_left.clamp(0.0, max_r);
        let tr = radii.top_right.clamp(0.0, max_r);
        let br = radii.bottom_right.clamp(0.0, max_r);
        let bl = radii.bottom_left.clamp(0.0, max_r);

        let mut path = Self::new();
        path.move_to(x + tl, y);
        path.line_to(x + w - tr, y);
        if tr > 0.0 {
            path.arc(x + w - tr, y + tr, tr, -FRAC_PI_2, 0.0, false);
        }
        path.line_to(x + w, y + h - br);
        if br > 0.0 {
            path.arc(x + w - br, y + h - br, br, 0.0, FRAC_PI_2, false);
        }
        path.line_to(x + bl, y + h);
        if bl > 0.0 {
            path.arc(x + bl, y + h - bl, bl, FRAC_PI_2, PI, false);
        }
        path.line_to(x, y + tl);
        if tl > 0.0 {
            path.arc(x + tl, y + tl, tl, PI, PI + FRAC_PI_2, false);
        }
        path.close();
        path
    }

    /// Flatten the path into straight line segments.
    #[must_use]
    pub fn flatten(&self) -> Vec<(Point, Point)> {
        let mut segs = Vec::new();
        let mut current = Point::ORIGIN;
        let mut subpath_start = Point::ORIGIN;
        let mut has_current = false;

        for op in &self.ops {
            match *op {
                PathOp::MoveTo(p) => {
                    current = p;
                    subpath_start = p;
                    has_current = true;
                }
                PathOp::LineTo(p) => {
                    if has_current {
                        segs.push((current, p));
                    } else {
                        subpath_start = p;
                        has_current = true;
                    }
                    current = p;
                }
                PathOp::QuadTo { ctrl, to } => {
                    let from = current;
                    let mut prev = from;
                    for i in 1..=CURVE_STEPS {
                        let t = i as f32 / CURVE_STEPS as f32;
                        let p = quad_point(from, ctrl, to, t);
                        segs.push((prev, p));
                        prev = p;
                    }
                    current = to;
                    has_current = true;
                }
                PathOp::CubicTo { ctrl1, ctrl2, to } => {
                    let from = current;
                    let mut prev = from;
                    for i in 1..=CURVE_STEPS {
                        let t = i as f32 / CURVE_STEPS as f32;
                        let p = cubic_point(from, ctrl1, ctrl2, to, t);
                        segs.push((prev, p));
                        prev = p;
                    }
                    current = to;
                    has_current = true;
                }
                PathOp::Arc {
                    center,
                    radius,
                    start_angle,
                    end_angle,
                    ccw,
                } => {
                    let sweep = arc_sweep(start_angle, end_angle, ccw);
                    let steps = ((sweep.abs() / ARC_STEP).ceil() as u32).max(1);
                    let start = arc_point(center, radius, start_angle);

                    if has_current {
                        if current.distance(start) > 1e-3 {
                            segs.push((current, start));
                        }
                    } else {
                        subpath_start = start;
                        has_current = true;
                    }

                    let mut prev = start;
                    for i in 1..=steps {
                        let angle = start_angle + sweep * (i as f32 / steps as f32);
                        let p = arc_point(center, radius, angle);
                        segs.push((prev, p));
                        prev = p;
                    }
                    current = prev;
                }
                PathOp::Close => {
                    if has_current && current.distance(subpath_start) > 1e-3 {
                        segs.push((current, subpath_start));
                    }
                    current = subpath_start;
                }
            }
        }

        segs
    }

    /// Axis-aligned bounding box of the flattened path.
    #[must_use]
    pub fn bounds(&self) -> Option<Rect> {
        let segs = self.flatten();
        if segs.is_empty() {
            return None;
        }

        let mut min_x = f32::INFINITY;
        let mut min_y = f32::INFINITY;
        let mut max_x = f32::NEG_INFINITY;
        let mut max_y = f32::NEG_INFINITY;
        for (a, b) in segs {
            min_x = min_x.min(a.x).min(b.x);
            min_y = min_y.min(a.y).min(b.y);
            max_x = max_x.max(a.x).max(b.x);
            max_y = max_y.max(a.y).max(b.y);
        }

        Some(Rect::new(min_x, min_y, max_x - min_x, max_y - min_y))
    }
}

fn quad_point(from: Point, ctrl: Point, to: Point, t: f32) -> Point {
    let u = 1.0 - t;
    Point::new(
        u * u * from.x + 2.0 * u * t * ctrl.x + t * t * to.x,
        u * u * from.y + 2.0 * u * t * ctrl.y + t * t * to.y,
    )
}

fn cubic_point(from: Point, c1: Point, c2: Point, to: Point, t: f32) -> Point {
    let u = 1.0 - t;
    let uu = u * u;
    let tt = t * t;
    Point::new(
        uu * u * from.x + 3.0 * uu * t * c1.x + 3.0 * u * tt * c2.x + tt * t * to.x,
        uu * u * from.y + 3.0 * uu * t * c1.y + 3.0 * u * tt * c2.y + tt * t * to.y,
    )
}

fn arc_point(center: Point, radius: f32, angle: f32) -> Point {
    Point::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

/// Signed sweep from start to end, honoring direction.
fn arc_sweep(start: f32, end: f32, ccw: bool) -> f32 {
    use std::f32::consts::TAU;
    let mut sweep = end - start;
    if ccw {
        if sweep > 0.0 {
            sweep -= TAU;
        }
    } else if sweep < 0.0 {
        sweep += TAU;
    }
    sweep
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI, TAU};

    #[test]
    fn test_line_flatten() {
        let mut path = Path::new();
        path.move_to(0.0, 0.0).line_to(10.0, 0.0).line_to(10.0, 5.0);

        let segs = path.flatten();
        assert_eq!(segs.len(), 2);
        assert_eq!(segs[0].0, Point::new(0.0, 0.0));
        assert_eq!(segs[1].1, Point::new(10.0, 5.0));
    }

    #[test]
    fn test_close_connects_to_subpath_start() {
        let mut path = Path::new();
        path.move_to(0.0, 0.0)
            .line_to(10.0, 0.0)
            .line_to(10.0, 10.0)
            .close();

        let segs = path.flatten();
        assert_eq!(segs.len(), 3);
        assert_eq!(segs[2].1, Point::new(0.0, 0.0));
    }

    #[test]
    fn test_quad_endpoints() {
        let mut path = Path::new();
        path.move_to(0.0, 0.0).quad_to(5.0, 10.0, 10.0, 0.0);

        let segs = path.flatten();
        assert_eq!(segs.first().unwrap().0, Point::new(0.0, 0.0));
        assert!(segs.last().unwrap().1.distance(Point::new(10.0, 0.0)) < 0.001);
    }

    #[test]
    fn test_cubic_endpoints() {
        let mut path = Path::new();
        path.move_to(0.0, 0.0).cubic_to(3.0, 6.0, 7.0, 6.0, 10.0, 0.0);

        let segs = path.flatten();
        assert!(segs.last().unwrap().1.distance(Point::new(10.0, 0.0)) < 0.001);
    }

    #[test]
    fn test_circle_is_closed() {
        let path = Path::circle(50.0, 50.0, 10.0);
        let segs = path.flatten();
        assert!(!segs.is_empty());

        // Every flattened point sits on the circle.
        for (a, b) in &segs {
            let center = Point::new(50.0, 50.0);
            assert!((a.distance(center) - 10.0).abs() < 0.1);
            assert!((b.distance(center) - 10.0).abs() < 0.1);
        }

        // The chain is continuous end to end.
        let first = segs.first().unwrap().0;
        let last = segs.last().unwrap().1;
        assert!(first.distance(last) < 0.01);
    }

    #[test]
    fn test_arc_sweep_directions() {
        assert!((arc_sweep(0.0, FRAC_PI_2, false) - FRAC_PI_2).abs() < 1e-6);
        assert!((arc_sweep(FRAC_PI_2, 0.0, true) + FRAC_PI_2).abs() < 1e-6);
        // Clockwise wrap-around
        assert!((arc_sweep(PI, 0.0, false) - PI).abs() < 1e-6);
        assert!((arc_sweep(0.0, TAU, false) - TAU).abs() < 1e-6);
    }

    #[test]
    fn test_rounded_rect_stays_in_bounds() {
        let rect = Rect::new(10.0, 10.0, 40.0, 30.0);
        let path = Path::rounded_rect(rect, CornerRadii::top(6.0));
        let bounds = path.bounds().unwrap();

        assert!(bounds.x >= rect.x - 0.1);
        assert!(bounds.y >= rect.y - 0.1);
        assert!(bounds.x + bounds.width <= rect.x + rect.width + 0.1);
        assert!(bounds.y + bounds.height <= rect.y + rect.height + 0.1);
    }

    #[test]
    fn test_rounded_rect_radius_clamped() {
        // Radius larger than half the short side must not fold the path.
        let rect = Rect::new(0.0, 0.0, 8.0, 4.0);
        let path = Path::rounded_rect(rect, CornerRadii::uniform(10.0));
        assert!(path.bounds().is_some());
    }

    #[test]
    fn test_bounds() {
        let mut path = Path::new();
        path.move_to(2.0, 3.0).line_to(12.0, 23.0);
        let b = path.bounds().unwrap();
        assert!((b.x - 2.0).abs() < 0.001);
        assert!((b.y - 3.0).abs() < 0.001);
        assert!((b.width - 10.0).abs() < 0.001);
        assert!((b.height - 20.0).abs() < 0.001);
    }

    #[test]
    fn test_empty_path_bounds() {
        assert!(Path::new().bounds().is_none());
    }
}
