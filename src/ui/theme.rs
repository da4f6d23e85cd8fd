//! UI Theme - Shared colors and styling constants
//!
//! Centralized space-night palette so every screen and panel reads the same.
//! The accent set mirrors the cosmic look: cyan primary, violet secondary,
//! gold accent plus three "neon" highlights for zone tinting.

use macroquad::prelude::Color;

/// Convert HSL (hue in degrees, saturation/lightness 0-1) to an opaque Color.
///
/// The star and particle palettes are tuned in HSL; keeping the conversion
/// here lets those call sites stay readable.
pub fn hsl(h: f32, s: f32, l: f32) -> Color {
    hsla(h, s, l, 1.0)
}

/// Convert HSL plus alpha to a Color
pub fn hsla(h: f32, s: f32, l: f32, a: f32) -> Color {
    let h = h.rem_euclid(360.0);
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0).rem_euclid(2.0) - 1.0).abs());
    let m = l - c * 0.5;
    let (r, g, b) = match h {
        h if h < 60.0 => (c, x, 0.0),
        h if h < 120.0 => (x, c, 0.0),
        h if h < 180.0 => (0.0, c, x),
        h if h < 240.0 => (0.0, x, c),
        h if h < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    Color::new(r + m, g + m, b + m, a)
}

/// Multiply a color's alpha
pub fn with_alpha(color: Color, alpha: f32) -> Color {
    Color::new(color.r, color.g, color.b, alpha)
}

// =============================================================================
// Base UI Colors
// =============================================================================

/// Deep-space page background
pub const BG_COLOR: Color = Color::new(0.043, 0.055, 0.102, 1.0);

/// Card/panel background
pub const CARD_BG: Color = Color::new(0.08, 0.09, 0.14, 0.92);

/// Slightly raised row background inside cards
pub const ROW_BG: Color = Color::new(0.12, 0.13, 0.19, 1.0);

/// Card border
pub const BORDER_COLOR: Color = Color::new(0.25, 0.28, 0.42, 1.0);

/// Primary text color
pub const TEXT_COLOR: Color = Color::new(0.88, 0.89, 0.94, 1.0);

/// Dimmed/secondary text
pub const TEXT_DIM: Color = Color::new(0.55, 0.57, 0.67, 1.0);

// =============================================================================
// Accent Colors
// =============================================================================

/// Cyan - primary accent
pub const PRIMARY: Color = Color::new(0.0, 0.78, 0.9, 1.0);

/// Violet - secondary accent
pub const SECONDARY: Color = Color::new(0.62, 0.42, 0.95, 1.0);

/// Gold - reward/achievement accent
pub const ACCENT: Color = Color::new(0.98, 0.78, 0.25, 1.0);

/// Neon pink highlight
pub const NEON_PINK: Color = Color::new(0.95, 0.35, 0.72, 1.0);

/// Neon blue highlight
pub const NEON_BLUE: Color = Color::new(0.3, 0.55, 1.0, 1.0);

/// Neon orange highlight
pub const NEON_ORANGE: Color = Color::new(1.0, 0.55, 0.2, 1.0);

/// Success green
pub const SUCCESS: Color = Color::new(0.3, 0.85, 0.5, 1.0);

/// Danger red (form validation messages)
pub const DANGER: Color = Color::new(0.95, 0.4, 0.4, 1.0);

// =============================================================================
// Font Sizes
// =============================================================================

/// Hero title size
pub const FONT_SIZE_TITLE: f32 = 42.0;

/// Panel/section heading size
pub const FONT_SIZE_HEADING: f32 = 24.0;

/// Standard content text size
pub const FONT_SIZE_CONTENT: f32 = 16.0;

/// Small/detail text size
pub const FONT_SIZE_SMALL: f32 = 12.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsl_grayscale() {
        // Zero saturation collapses to lightness on all channels
        let c = hsl(123.0, 0.0, 0.5);
        assert!((c.r - 0.5).abs() < 0.001);
        assert!((c.g - 0.5).abs() < 0.001);
        assert!((c.b - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_hsl_primaries() {
        let red = hsl(0.0, 1.0, 0.5);
        assert!((red.r - 1.0).abs() < 0.001 && red.g < 0.001 && red.b < 0.001);
        let green = hsl(120.0, 1.0, 0.5);
        assert!(green.r < 0.001 && (green.g - 1.0).abs() < 0.001);
        let blue = hsl(240.0, 1.0, 0.5);
        assert!(blue.g < 0.001 && (blue.b - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_hsl_hue_wraps() {
        let a = hsl(30.0, 0.8, 0.6);
        let b = hsl(390.0, 0.8, 0.6);
        assert!((a.r - b.r).abs() < 0.001);
        assert!((a.g - b.g).abs() < 0.001);
        assert!((a.b - b.b).abs() < 0.001);
    }
}
