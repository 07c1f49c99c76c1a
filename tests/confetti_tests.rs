// Host-side tests for the confetti burst simulation.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod confetti {
        include!("../src/core/confetti.rs");
    }
}

use crate::core::confetti::*;
use crate::core::constants::{CONFETTI_COLORS, CONFETTI_PIECES};
use glam::Vec2;

const DT: f32 = 1.0 / 60.0;

#[test]
fn burst_spawns_requested_pieces_along_top_edge() {
    let burst = ConfettiBurst::new(800.0, 600.0, CONFETTI_PIECES, 7);
    assert_eq!(burst.pieces().len(), CONFETTI_PIECES);
    for p in burst.pieces() {
        assert!(p.position.x >= 0.0 && p.position.x < 800.0);
        assert!(p.position.y <= 0.0);
        assert!(CONFETTI_COLORS.contains(&p.color));
    }
}

#[test]
fn same_seed_same_burst() {
    let a = ConfettiBurst::new(1024.0, 768.0, 50, 42);
    let b = ConfettiBurst::new(1024.0, 768.0, 50, 42);
    for (pa, pb) in a.pieces().iter().zip(b.pieces()) {
        assert_eq!(pa.position, pb.position);
        assert_eq!(pa.velocity, pb.velocity);
        assert_eq!(pa.color, pb.color);
    }
}

#[test]
fn burst_finishes_and_does_not_recycle() {
    let mut burst = ConfettiBurst::new(1280.0, 900.0, CONFETTI_PIECES, 3);
    let mut frames = 0;
    while burst.step(DT) {
        frames += 1;
        assert!(frames < 60 * 10, "burst still running after 10s");
    }
    assert!(burst.is_finished());
    assert!(burst.elapsed() > 0.0);
    // once empty it stays empty
    assert!(!burst.step(DT));
    assert!(burst.pieces().is_empty());
}

#[test]
fn resize_does_not_revive_a_finished_burst() {
    let mut burst = ConfettiBurst::new(320.0, 240.0, 40, 5);
    while burst.step(DT) {}
    burst.resize(1920.0, 1080.0);
    assert!(burst.is_finished());
    assert!(!burst.step(DT));
}

#[test]
fn piece_count_only_shrinks() {
    let mut burst = ConfettiBurst::new(640.0, 480.0, 100, 11);
    let mut last = burst.pieces().len();
    for _ in 0..240 {
        burst.step(DT);
        assert!(burst.pieces().len() <= last);
        last = burst.pieces().len();
    }
}

#[test]
fn empty_burst_is_immediately_finished() {
    let mut burst = ConfettiBurst::new(800.0, 600.0, 0, 1);
    assert!(burst.is_finished());
    assert!(!burst.step(DT));
}

#[test]
fn gravity_pulls_pieces_down() {
    let mut p = ConfettiPiece {
        position: Vec2::new(100.0, 0.0),
        velocity: Vec2::new(0.0, -50.0),
        size: Vec2::new(6.0, 10.0),
        angle: 0.0,
        spin: 1.0,
        color: CONFETTI_COLORS[0],
    };
    assert!(p.tick(0.1, 600.0));
    assert!(p.velocity.y > -50.0);
    assert!((p.angle - 0.1).abs() < 1e-5);

    p.position.y = 700.0;
    assert!(!p.tick(0.1, 600.0), "piece below the viewport is gone");
}
