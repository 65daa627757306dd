//! Color types and CSS-style color utilities.
//!
//! Chart configurations carry colors as CSS-style strings (`#rrggbb`,
//! `rgba(r, g, b, a)`, or arbitrary literals). This module provides the
//! [`Rgba`] pixel type plus the string-level utilities the renderers use:
//! hex-to-rgba conversion with an alpha, and vertical gradient descriptors.
//!
//! Non-hex input strings pass through unchanged rather than erroring, so a
//! host can hand the engine any color its backend understands.

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(C)]
pub struct Rgba {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0-255, 255 = fully opaque).
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    /// Create a new RGBA color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color (alpha = 255).
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Create a color with modified alpha.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Convert to array representation.
    #[must_use]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Create from array representation.
    #[must_use]
    pub const fn from_array(arr: [u8; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }

    /// Linear interpolation between two colors.
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let inv_t = 1.0 - t;

        Self::new(
            (f32::from(self.r) * inv_t + f32::from(other.r) * t) as u8,
            (f32::from(self.g) * inv_t + f32::from(other.g) * t) as u8,
            (f32::from(self.b) * inv_t + f32::from(other.b) * t) as u8,
            (f32::from(self.a) * inv_t + f32::from(other.a) * t) as u8,
        )
    }
}

/// A two-stop vertical gradient: `top` at 0%, `bottom` at 100%.
///
/// Both stops are CSS-style color strings, resolved by the drawing surface
/// at fill time. When either stop fails to parse, backends degrade to a
/// flat fill of whatever they can resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradientDescriptor {
    /// Color at the top edge of the filled region.
    pub top: String,
    /// Color at the bottom edge of the filled region.
    pub bottom: String,
}

/// Build a vertical gradient from an explicit top and bottom color.
#[must_use]
pub fn vertical_gradient(top: &str, bottom: &str) -> GradientDescriptor {
    GradientDescriptor {
        top: top.to_string(),
        bottom: bottom.to_string(),
    }
}

/// Build a vertical fade: `color` at the given alpha on top, fully
/// transparent at the bottom. Used for area-under-curve fills.
#[must_use]
pub fn vertical_fade(color: &str, alpha: f32) -> GradientDescriptor {
    GradientDescriptor {
        top: to_rgba(color, alpha),
        bottom: to_rgba(color, 0.0),
    }
}

/// Convert a 6-digit hex color to an `rgba(r, g, b, a)` string at the given
/// alpha. Anything that is not hex passes through unchanged, opaque.
#[must_use]
pub fn to_rgba(color: &str, alpha: f32) -> String {
    match parse_hex(color) {
        Some(rgba) => format!("rgba({}, {}, {}, {})", rgba.r, rgba.g, rgba.b, alpha),
        None => color.to_string(),
    }
}

/// Parse a CSS-style color string into an [`Rgba`].
///
/// Accepts `#rrggbb` and `rgba(r, g, b, a)` / `rgb(r, g, b)`
/// forms. Returns `None` for anything else; callers pick their own fallback.
#[must_use]
pub fn parse_css(color: &str) -> Option<Rgba> {
    let color = color.trim();
    if let Some(rgba) = parse_hex(color) {
        return Some(rgba);
    }
    parse_rgb_func(color)
}

/// Parse a `#rrggbb` hex color. The prefix is mandatory and appears exactly
/// once; a bare label like "tomato" must pass through.
fn parse_hex(color: &str) -> Option<Rgba> {
    let hex = color.trim().strip_prefix('#')?;
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
    let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
    let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
    Some(Rgba::rgb(r, g, b))
}

/// Parse `rgb(...)` / `rgba(...)` function notation.
fn parse_rgb_func(color: &str) -> Option<Rgba> {
    let inner = color
        .strip_prefix("rgba(")
        .or_else(|| color.strip_prefix("rgb("))?
        .strip_suffix(')')?;

    let mut parts = inner.split(',').map(str::trim);
    let r: u8 = parts.next()?.parse().ok()?;
    let g: u8 = parts.next()?.parse().ok()?;
    let b: u8 = parts.next()?.parse().ok()?;
    let a = match parts.next() {
        Some(s) => {
            let a: f32 = s.parse().ok()?;
            (a.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        None => 255,
    };
    if parts.next().is_some() {
        return None;
    }
    Some(Rgba::new(r, g, b, a))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_constants() {
        assert_eq!(Rgba::BLACK, Rgba::rgb(0, 0, 0));
        assert_eq!(Rgba::WHITE, Rgba::rgb(255, 255, 255));
        assert_eq!(Rgba::TRANSPARENT.a, 0);
    }

    #[test]
    fn test_rgba_lerp() {
        let mid = Rgba::BLACK.lerp(Rgba::WHITE, 0.5);
        assert_eq!(mid.r, 127);
        assert_eq!(mid.g, 127);
        assert_eq!(mid.b, 127);
    }

    #[test]
    fn test_lerp_boundaries() {
        assert_eq!(Rgba::BLACK.lerp(Rgba::WHITE, 0.0), Rgba::BLACK);
        assert_eq!(Rgba::BLACK.lerp(Rgba::WHITE, 1.0), Rgba::WHITE);
        assert_eq!(Rgba::BLACK.lerp(Rgba::WHITE, -0.5), Rgba::BLACK);
        assert_eq!(Rgba::BLACK.lerp(Rgba::WHITE, 1.5), Rgba::WHITE);
    }

    #[test]
    fn test_to_rgba_hex() {
        assert_eq!(to_rgba("#ec4899", 0.6), "rgba(236, 72, 153, 0.6)");
        assert_eq!(to_rgba("#000000", 1.0), "rgba(0, 0, 0, 1)");
    }

    #[test]
    fn test_to_rgba_passthrough() {
        // Non-hex colors pass through unchanged, never error.
        assert_eq!(to_rgba("tomato", 0.5), "tomato");
        assert_eq!(to_rgba("rgba(1, 2, 3, 0.4)", 0.5), "rgba(1, 2, 3, 0.4)");
        assert_eq!(to_rgba("##6366f1", 0.5), "##6366f1");
        assert_eq!(to_rgba("", 0.5), "");
    }

    #[test]
    fn test_parse_css_hex() {
        let c = parse_css("#6366f1").unwrap();
        assert_eq!((c.r, c.g, c.b, c.a), (99, 102, 241, 255));
    }

    #[test]
    fn test_parse_css_rgba() {
        let c = parse_css("rgba(236, 72, 153, 0.6)").unwrap();
        assert_eq!((c.r, c.g, c.b), (236, 72, 153));
        assert_eq!(c.a, 153); // 0.6 * 255, rounded
    }

    #[test]
    fn test_parse_css_rgb() {
        let c = parse_css("rgb(10, 20, 30)").unwrap();
        assert_eq!(c, Rgba::rgb(10, 20, 30));
    }

    #[test]
    fn test_parse_css_rejects_unknown() {
        assert!(parse_css("tomato").is_none());
        assert!(parse_css("#12345").is_none());
        assert!(parse_css("#12345g").is_none());
        assert!(parse_css("##6366f1").is_none());
        assert!(parse_css("6366f1").is_none());
        assert!(parse_css("rgba(1, 2)").is_none());
        assert!(parse_css("rgba(1, 2, 3, 0.5, 9)").is_none());
    }

    #[test]
    fn test_vertical_gradient() {
        let g = vertical_gradient("#ec4899", "rgba(236, 72, 153, 0.6)");
        assert_eq!(g.top, "#ec4899");
        assert_eq!(g.bottom, "rgba(236, 72, 153, 0.6)");
    }

    #[test]
    fn test_vertical_fade() {
        let g = vertical_fade("#6366f1", 0.2);
        assert_eq!(g.top, "rgba(99, 102, 241, 0.2)");
        assert_eq!(g.bottom, "rgba(99, 102, 241, 0)");
    }

    #[test]
    fn test_vertical_fade_passthrough_color() {
        // Gradient degrades to the literal string twice: a flat fill.
        let g = vertical_fade("teal", 0.2);
        assert_eq!(g.top, "teal");
        assert_eq!(g.bottom, "teal");
    }
}
