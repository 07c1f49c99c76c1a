// One-shot confetti burst.
//
// Pieces are spawned once along the top edge and never recycled: the burst is
// finished as soon as the last piece has fallen past the bottom of the viewport.

use super::constants::{
    CONFETTI_COLORS, CONFETTI_GRAVITY_PX_S2, CONFETTI_MAX_FALL_PX_S, CONFETTI_WIND_PX_S,
};
use glam::Vec2;
use rand::prelude::*;

// Pieces are considered gone once this far below the bottom edge
const OFFSCREEN_MARGIN_PX: f32 = 24.0;
// Horizontal air drag (fraction of velocity lost per second)
const DRAG_PER_SEC: f32 = 0.8;

#[derive(Clone, Debug)]
pub struct ConfettiPiece {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: Vec2,
    pub angle: f32,
    pub spin: f32,
    pub color: &'static str,
}

impl ConfettiPiece {
    /// Advance the piece. Returns false once it has left the viewport.
    pub fn tick(&mut self, dt: f32, viewport_height: f32) -> bool {
        self.velocity.y =
            (self.velocity.y + CONFETTI_GRAVITY_PX_S2 * dt).min(CONFETTI_MAX_FALL_PX_S);
        self.velocity.x += CONFETTI_WIND_PX_S * dt;
        self.velocity.x *= (1.0 - DRAG_PER_SEC * dt).max(0.0);
        self.position += self.velocity * dt;
        self.angle += self.spin * dt;
        self.position.y < viewport_height + OFFSCREEN_MARGIN_PX
    }
}

pub struct ConfettiBurst {
    pieces: Vec<ConfettiPiece>,
    viewport: Vec2,
    elapsed: f32,
}

impl ConfettiBurst {
    pub fn new(width: f32, height: f32, count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let width = width.max(1.0);
        let pieces = (0..count)
            .map(|_| ConfettiPiece {
                position: Vec2::new(rng.gen_range(0.0..width), rng.gen_range(-80.0..0.0)),
                velocity: Vec2::new(rng.gen_range(-120.0..120.0), rng.gen_range(-60.0..240.0)),
                size: Vec2::new(rng.gen_range(5.0..10.0), rng.gen_range(8.0..16.0)),
                angle: rng.gen_range(0.0..std::f32::consts::TAU),
                spin: rng.gen_range(-6.0..6.0),
                color: CONFETTI_COLORS.choose(&mut rng).copied().unwrap_or(CONFETTI_COLORS[0]),
            })
            .collect();
        Self {
            pieces,
            viewport: Vec2::new(width, height),
            elapsed: 0.0,
        }
    }

    /// Advance every live piece by `dt` seconds. Returns true while any piece remains.
    pub fn step(&mut self, dt: f32) -> bool {
        self.elapsed += dt;
        let h = self.viewport.y;
        self.pieces.retain_mut(|p| p.tick(dt, h));
        !self.pieces.is_empty()
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width.max(1.0), height);
    }

    #[inline]
    pub fn pieces(&self) -> &[ConfettiPiece] {
        &self.pieces
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.pieces.is_empty()
    }

    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}
