//! Space backdrop: twinkling starfield plus nebula glows
//!
//! Runs underneath every screen. Stars are cheap, stateless entities and are
//! regenerated wholesale whenever the window is resized.

use macroquad::prelude::*;

use crate::rng::Rng32;
use crate::ui::{draw_radial_glow, theme};

/// Stars regenerated per surface (resize always recreates exactly this many)
pub const STAR_COUNT: usize = 200;

/// Per-frame twinkle phase advance
const TWINKLE_STEP: f32 = 0.02;

/// A long-lived background star
#[derive(Debug, Clone, Copy)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub color: Color,
    pub twinkle: f32,
}

/// A soft nebula cloud, positioned as a fraction of the surface
struct NebulaLayer {
    cx: f32,
    cy: f32,
    radius_factor: f32,
    color: Color,
}

/// The animated space backdrop
pub struct Starfield {
    stars: Vec<Star>,
    width: f32,
    height: f32,
    rng: Rng32,
}

impl Starfield {
    pub fn new(width: f32, height: f32, rng: Rng32) -> Self {
        let mut field = Self {
            stars: Vec::new(),
            width,
            height,
            rng,
        };
        field.resize(width, height);
        field
    }

    /// Discard all stars and repopulate for the new surface size
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.stars.clear();
        for _ in 0..STAR_COUNT {
            let x = self.rng.range(0.0, width);
            let y = self.rng.range(0.0, height);
            let size = self.rng.range(0.5, 2.0);
            // Blue-violet band, bright
            let hue = self.rng.range(200.0, 260.0);
            let lightness = self.rng.range(0.7, 1.0);
            let twinkle = self.rng.range(0.0, std::f32::consts::TAU);
            self.stars.push(Star {
                x,
                y,
                size,
                color: theme::hsl(hue, 0.7, lightness),
                twinkle,
            });
        }
    }

    /// Advance every star's twinkle phase; call once per frame
    pub fn update(&mut self) {
        for star in &mut self.stars {
            star.twinkle += TWINKLE_STEP;
        }
    }

    /// Paint backdrop, nebulae and stars for the current frame
    pub fn draw(&self) {
        clear_background(theme::BG_COLOR);

        self.draw_nebulae();

        for star in &self.stars {
            let t = (star.twinkle.sin() + 1.0) * 0.5;
            // Outer glow then solid core, both alpha-blended
            draw_circle(
                star.x,
                star.y,
                star.size * 2.0,
                theme::with_alpha(star.color, 0.1 + t * 0.2),
            );
            draw_circle(
                star.x,
                star.y,
                star.size,
                theme::with_alpha(star.color, 0.3 + t * 0.7),
            );
        }
    }

    fn draw_nebulae(&self) {
        for layer in nebula_layers() {
            draw_radial_glow(
                layer.cx * self.width,
                layer.cy * self.height,
                layer.radius_factor * self.width,
                layer.color,
                8,
            );
        }
    }

    pub fn star_count(&self) -> usize {
        self.stars.len()
    }

    #[cfg(test)]
    fn stars(&self) -> &[Star] {
        &self.stars
    }
}

/// The two fixed nebula clouds
fn nebula_layers() -> [NebulaLayer; 2] {
    [
        NebulaLayer {
            cx: 0.3,
            cy: 0.2,
            radius_factor: 0.6,
            color: theme::hsla(240.0, 0.6, 0.8, 0.08),
        },
        NebulaLayer {
            cx: 0.7,
            cy: 0.8,
            radius_factor: 0.5,
            color: theme::hsla(270.0, 0.5, 0.75, 0.06),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_regenerates_exact_count() {
        let mut field = Starfield::new(800.0, 600.0, Rng32::new(1));
        assert_eq!(field.star_count(), STAR_COUNT);

        let before: Vec<(f32, f32)> = field.stars().iter().map(|s| (s.x, s.y)).collect();
        field.resize(1024.0, 768.0);
        assert_eq!(field.star_count(), STAR_COUNT);

        // Prior entities were discarded, not carried over
        let after: Vec<(f32, f32)> = field.stars().iter().map(|s| (s.x, s.y)).collect();
        assert_ne!(before, after);
    }

    #[test]
    fn test_stars_spawn_inside_surface() {
        let field = Starfield::new(320.0, 240.0, Rng32::new(9));
        for star in field.stars() {
            assert!((0.0..320.0).contains(&star.x));
            assert!((0.0..240.0).contains(&star.y));
        }
    }

    #[test]
    fn test_update_advances_phase() {
        let mut field = Starfield::new(100.0, 100.0, Rng32::new(3));
        let phase = field.stars()[0].twinkle;
        field.update();
        assert!((field.stars()[0].twinkle - phase - TWINKLE_STEP).abs() < 1e-6);
    }
}
