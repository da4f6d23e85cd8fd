//! Pointer-reactive particle overlay
//!
//! Short-lived sparks trail the pointer across every screen. Lifetimes are
//! counted in frames and expired entries are pruned by filtering the live
//! vector each tick. The live set is hard-capped so hammering the pointer
//! can never grow per-frame cost without bound.

use macroquad::prelude::*;

use crate::rng::Rng32;
use crate::ui::{draw_radial_glow, theme};

/// Hard cap on concurrently live particles; emission over the cap is dropped
pub const MAX_PARTICLES: usize = 512;

/// Minimum wall-clock gap between pointer-move emission bursts
const EMIT_THROTTLE: f64 = 0.05;

/// Pointer glow lingers this long after the last movement
const GLOW_LINGER: f64 = 1.1;

/// Click burst size (always the most energetic kind)
const CLICK_BURST: usize = 15;

/// Downward gravity bias applied to vy each frame
const GRAVITY: f32 = 0.05;

/// Velocity decay factor per frame
const FRICTION: f32 = 0.99;

/// Visual particle family; each maps to its own palette and ranges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleKind {
    Spark,
    Energy,
    Magic,
    Cosmic,
}

impl ParticleKind {
    pub const ALL: [ParticleKind; 4] = [
        ParticleKind::Spark,
        ParticleKind::Energy,
        ParticleKind::Magic,
        ParticleKind::Cosmic,
    ];

    /// Kind-keyed color table (warm sparks, cyan energy, violet magic, green cosmic)
    fn palette(&self) -> [Color; 3] {
        match self {
            ParticleKind::Spark => [
                theme::hsl(45.0, 1.0, 0.7),
                theme::hsl(30.0, 1.0, 0.65),
                theme::hsl(60.0, 1.0, 0.75),
            ],
            ParticleKind::Energy => [
                theme::hsl(180.0, 1.0, 0.6),
                theme::hsl(200.0, 1.0, 0.7),
                theme::hsl(160.0, 1.0, 0.65),
            ],
            ParticleKind::Magic => [
                theme::hsl(280.0, 1.0, 0.7),
                theme::hsl(320.0, 1.0, 0.75),
                theme::hsl(260.0, 1.0, 0.65),
            ],
            ParticleKind::Cosmic => [
                theme::hsl(120.0, 1.0, 0.6),
                theme::hsl(90.0, 1.0, 0.65),
                theme::hsl(150.0, 1.0, 0.7),
            ],
        }
    }

    fn size_range(&self) -> (f32, f32) {
        match self {
            ParticleKind::Spark => (1.0, 4.0),
            ParticleKind::Energy => (2.0, 6.0),
            ParticleKind::Magic => (2.0, 7.0),
            ParticleKind::Cosmic => (3.0, 9.0),
        }
    }

    /// Lifetime range in frames
    fn life_range(&self) -> (f32, f32) {
        match self {
            ParticleKind::Spark => (20.0, 50.0),
            ParticleKind::Energy => (30.0, 70.0),
            ParticleKind::Magic => (40.0, 90.0),
            ParticleKind::Cosmic => (50.0, 110.0),
        }
    }
}

/// A single short-lived particle
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub size: f32,
    pub color: Color,
    pub life: f32,
    pub max_life: f32,
    pub kind: ParticleKind,
}

/// The pointer-reactive particle field
pub struct ParticleField {
    particles: Vec<Particle>,
    rng: Rng32,
    last_emit: f64,
    last_active: f64,
    pointer: (f32, f32),
}

impl ParticleField {
    pub fn new(rng: Rng32) -> Self {
        Self {
            particles: Vec::new(),
            rng,
            last_emit: f64::NEG_INFINITY,
            last_active: f64::NEG_INFINITY,
            pointer: (0.0, 0.0),
        }
    }

    /// Append one particle at (x, y); dropped silently once the cap is hit
    pub fn emit(&mut self, x: f32, y: f32, kind: ParticleKind) {
        if self.particles.len() >= MAX_PARTICLES {
            return;
        }
        let angle = self.rng.range(0.0, std::f32::consts::TAU);
        let speed = self.rng.range(1.0, 4.0);
        let (size_min, size_max) = kind.size_range();
        let (life_min, life_max) = kind.life_range();
        let palette = kind.palette();
        let life = self.rng.range(life_min, life_max);
        self.particles.push(Particle {
            x,
            y,
            vx: angle.cos() * speed,
            vy: angle.sin() * speed,
            size: self.rng.range(size_min, size_max),
            color: palette[self.rng.index(palette.len())],
            life,
            max_life: life,
            kind,
        });
    }

    /// Burst of `count` particles jittered around (x, y)
    pub fn emit_burst(&mut self, x: f32, y: f32, kind: ParticleKind, count: usize, jitter: f32) {
        for _ in 0..count {
            let jx = x + self.rng.range(-jitter, jitter);
            let jy = y + self.rng.range(-jitter, jitter);
            self.emit(jx, jy, kind);
        }
    }

    /// Pointer moved to (x, y) at wall-clock `now`. Emits a small burst of
    /// random kinds at most once per throttle window.
    pub fn pointer_moved(&mut self, x: f32, y: f32, now: f64) {
        self.pointer = (x, y);
        self.last_active = now;

        if now - self.last_emit < EMIT_THROTTLE {
            return;
        }
        self.last_emit = now;

        let count = 2 + self.rng.index(4); // 2-5
        for _ in 0..count {
            let kind = ParticleKind::ALL[self.rng.index(ParticleKind::ALL.len())];
            let jx = x + self.rng.range(-10.0, 10.0);
            let jy = y + self.rng.range(-10.0, 10.0);
            self.emit(jx, jy, kind);
        }
    }

    /// Pointer clicked: one-shot burst of the most energetic kind
    pub fn pointer_clicked(&mut self, x: f32, y: f32) {
        self.emit_burst(x, y, ParticleKind::Cosmic, CLICK_BURST, 20.0);
    }

    /// Integrate, age and evict; call once per frame
    pub fn update(&mut self) {
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;
            p.vy += GRAVITY;
            p.vx *= FRICTION;
            p.vy *= FRICTION;
            p.life -= 1.0;
        }
        self.particles.retain(|p| p.life > 0.0);
    }

    /// Paint the pointer glow and every live particle
    pub fn draw(&self, now: f64) {
        if now - self.last_active < GLOW_LINGER {
            let (px, py) = self.pointer;
            draw_radial_glow(px, py, 100.0, theme::hsla(180.0, 1.0, 0.6, 0.16), 8);
        }

        for p in &self.particles {
            let alpha = (p.life / p.max_life).clamp(0.0, 1.0);
            let size = p.size * alpha;

            // Outer glow, then solid core
            draw_circle(p.x, p.y, size * 3.0, theme::with_alpha(p.color, alpha * 0.15));
            draw_circle(p.x, p.y, size, theme::with_alpha(p.color, alpha));

            // Magic particles drag a short motion trail
            if p.kind == ParticleKind::Magic {
                draw_line(
                    p.x - p.vx * 5.0,
                    p.y - p.vy * 5.0,
                    p.x,
                    p.y,
                    (size * 0.5).max(1.0),
                    theme::with_alpha(p.color, alpha * 0.3),
                );
            }
        }
    }

    #[allow(dead_code)]
    pub fn live_count(&self) -> usize {
        self.particles.len()
    }

    #[cfg(test)]
    fn particles(&self) -> &[Particle] {
        &self.particles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> ParticleField {
        ParticleField::new(Rng32::new(1234))
    }

    #[test]
    fn test_every_particle_is_evicted() {
        let mut f = field();
        f.emit_burst(50.0, 50.0, ParticleKind::Cosmic, 30, 5.0);
        assert_eq!(f.live_count(), 30);

        // Cosmic lifetimes cap at 110 frames
        for _ in 0..120 {
            f.update();
        }
        assert_eq!(f.live_count(), 0);
    }

    #[test]
    fn test_cap_is_never_exceeded() {
        let mut f = field();
        for _ in 0..MAX_PARTICLES * 2 {
            f.emit(10.0, 10.0, ParticleKind::Spark);
        }
        assert_eq!(f.live_count(), MAX_PARTICLES);

        // Sustained movement bursts cannot push past the cap either
        let mut now = 0.0;
        for _ in 0..100 {
            f.pointer_moved(20.0, 20.0, now);
            now += 0.1;
        }
        assert!(f.live_count() <= MAX_PARTICLES);
    }

    #[test]
    fn test_move_throttle() {
        let mut f = field();
        f.pointer_moved(0.0, 0.0, 1.0);
        let after_first = f.live_count();
        assert!((2..=5).contains(&after_first));

        // Within the 50ms window: no new burst
        f.pointer_moved(5.0, 5.0, 1.02);
        assert_eq!(f.live_count(), after_first);

        // Past the window: a burst lands
        f.pointer_moved(9.0, 9.0, 1.06);
        assert!(f.live_count() > after_first);
    }

    #[test]
    fn test_click_burst_is_cosmic() {
        let mut f = field();
        f.pointer_clicked(100.0, 100.0);
        assert_eq!(f.live_count(), 15);
        assert!(f.particles().iter().all(|p| p.kind == ParticleKind::Cosmic));
    }

    #[test]
    fn test_gravity_and_friction_applied() {
        let mut f = field();
        f.emit(0.0, 0.0, ParticleKind::Energy);
        let p0 = f.particles()[0];
        f.update();
        let p1 = f.particles()[0];
        assert!((p1.vy - (p0.vy + GRAVITY) * FRICTION).abs() < 1e-4);
        assert!((p1.vx - p0.vx * FRICTION).abs() < 1e-4);
        assert!((p1.life - (p0.life - 1.0)).abs() < 1e-6);
    }
}
