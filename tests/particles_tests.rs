// Host-side tests for the deterministic particle layouts.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod particles {
    include!("../src/core/particles.rs");
}

use particles::*;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn generate_returns_exactly_count_entries() {
    for count in [0usize, 1, 5, 24, 32, 100, 1000] {
        assert_eq!(rising_hearts(count).len(), count);
        assert_eq!(falling_tears(count).len(), count);
    }
}

#[test]
fn zero_count_is_empty() {
    assert!(generate(0, &RISING).is_empty());
    assert!(generate(0, &FALLING).is_empty());
}

#[test]
fn horizontal_position_stays_within_viewport() {
    for p in rising_hearts(1000).iter().chain(falling_tears(1000).iter()) {
        assert!(
            p.left >= 0.0 && p.left < 100.0,
            "particle {} left={} out of range",
            p.id,
            p.left
        );
    }
}

#[test]
fn generation_is_deterministic() {
    assert_eq!(rising_hearts(32), rising_hearts(32));
    assert_eq!(falling_tears(24), falling_tears(24));
    // a longer run extends the shorter one
    assert_eq!(&rising_hearts(64)[..32], &rising_hearts(32)[..]);
}

#[test]
fn rising_hearts_follow_their_formulas() {
    let hearts = rising_hearts(3);
    assert_eq!(hearts[0].id, 0);
    assert!(approx(hearts[0].left, 0.0));
    assert_eq!(hearts[0].size, Some(14.0));
    assert!(approx(hearts[0].duration, 6.0));
    assert!(approx(hearts[0].delay, 0.0));
    assert_eq!(hearts[0].glyph, "💖");

    assert!(approx(hearts[1].left, 37.5));
    assert_eq!(hearts[1].size, Some(19.0));
    assert!(approx(hearts[1].delay, 1.37));
    assert_eq!(hearts[1].glyph, "💗");

    assert!(approx(hearts[2].left, 75.0));
    assert_eq!(hearts[2].size, Some(24.0));
    assert!(approx(hearts[2].delay, 2.74));
}

#[test]
fn falling_tears_follow_their_formulas() {
    let tears = falling_tears(4);
    assert!(approx(tears[0].left, 7.0));
    assert!(approx(tears[0].duration, 2.4));
    assert!(approx(tears[0].delay, 0.0));
    assert_eq!(tears[0].glyph, "🥺");

    assert!(approx(tears[1].left, 48.0));
    assert!(approx(tears[1].duration, 3.1));
    assert!(approx(tears[1].delay, 0.48));

    assert!(approx(tears[3].left, 30.0));
    assert!(approx(tears[3].duration, 2.9));
}

#[test]
fn value_ranges_match_flavor() {
    for h in rising_hearts(200) {
        let size = h.size.expect("rising particles carry a size");
        assert!((14.0..40.0).contains(&size));
        assert!((6.0..13.0).contains(&h.duration));
        assert!((0.0..6.0).contains(&h.delay));
    }
    for t in falling_tears(200) {
        assert_eq!(t.size, None);
        assert!(t.duration >= 2.4 && t.duration < 4.0 + 1e-4);
        assert!((0.0..2.2).contains(&t.delay));
    }
}

#[test]
fn glyphs_cycle_by_index() {
    let hearts = rising_hearts(HEART_GLYPHS.len() * 2);
    for (i, h) in hearts.iter().enumerate() {
        assert_eq!(h.glyph, HEART_GLYPHS[i % HEART_GLYPHS.len()]);
    }
    let tears = falling_tears(SAD_GLYPHS.len() + 1);
    assert_eq!(tears[SAD_GLYPHS.len()].glyph, tears[0].glyph);
    assert!(tears.iter().all(|t| SAD_GLYPHS.contains(&t.glyph)));
}

#[test]
fn cycle_applies_offset_before_wrapping() {
    let c = Cycle::new(10.0, 30.0, 5.0, 50.0);
    assert!(approx(c.at(0), 15.0));
    assert!(approx(c.at(1), 45.0));
    assert!(approx(c.at(2), 25.0)); // 65 mod 50 = 15, plus base
}

#[test]
#[should_panic]
fn empty_glyph_set_is_a_precondition_violation() {
    let recipe = ParticleRecipe {
        glyphs: &[],
        ..FALLING
    };
    generate(3, &recipe);
}

#[test]
fn empty_glyph_set_is_fine_for_zero_count() {
    let recipe = ParticleRecipe {
        glyphs: &[],
        ..RISING
    };
    assert!(generate(0, &recipe).is_empty());
}

#[test]
#[cfg(target_pointer_width = "64")]
#[should_panic(expected = "does not fit a u32 id")]
fn count_beyond_id_range_is_rejected_not_truncated() {
    generate(u32::MAX as usize + 1, &RISING);
}

#[test]
fn large_counts_keep_left_in_range() {
    let far = generate(200_000, &FALLING);
    assert_eq!(far.len(), 200_000);
    assert_eq!(far.last().map(|p| p.id), Some(199_999));
    assert!(far.iter().all(|p| (0.0..100.0).contains(&p.left)));
}
