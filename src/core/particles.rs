// Deterministic particle layouts for the decorative overlays.
//
// Every field is derived from the particle index with fixed arithmetic, so the
// same count always yields the same layout. No random source is involved.

pub const HEART_GLYPHS: &[&str] = &["💖", "💗", "💓", "💕", "✨", "💝", "💘"];
pub const SAD_GLYPHS: &[&str] = &["🥺", "😔", "💔", "😭", "😞"];

/// `base + (index * step + offset) mod span`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cycle {
    pub base: f32,
    pub step: f32,
    pub offset: f32,
    pub span: f32,
}

impl Cycle {
    pub const fn new(base: f32, step: f32, offset: f32, span: f32) -> Self {
        Self {
            base,
            step,
            offset,
            span,
        }
    }

    #[inline]
    pub fn at(&self, index: u32) -> f32 {
        self.base + (index as f32 * self.step + self.offset).rem_euclid(self.span)
    }
}

/// Constants for one particle flavor.
#[derive(Clone, Copy, Debug)]
pub struct ParticleRecipe {
    pub left: Cycle,
    pub size: Option<Cycle>,
    pub duration: Cycle,
    pub delay: Cycle,
    pub glyphs: &'static [&'static str],
}

/// Long-lived ambient hearts drifting up the page.
pub const RISING: ParticleRecipe = ParticleRecipe {
    left: Cycle::new(0.0, 137.5, 0.0, 100.0),
    size: Some(Cycle::new(14.0, 31.0, 0.0, 26.0)),
    duration: Cycle::new(6.0, 7.0, 0.0, 7.0),
    delay: Cycle::new(0.0, 1.37, 0.0, 6.0),
    glyphs: HEART_GLYPHS,
};

/// Short-lived sad faces raining down after a decline.
pub const FALLING: ParticleRecipe = ParticleRecipe {
    left: Cycle::new(0.0, 41.0, 7.0, 100.0),
    size: None,
    duration: Cycle::new(2.4, 0.7, 0.0, 1.6),
    delay: Cycle::new(0.0, 0.48, 0.0, 2.2),
    glyphs: SAD_GLYPHS,
};

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub id: u32,
    /// Horizontal position in percent of the viewport width, in `[0, 100)`.
    pub left: f32,
    /// Font size in CSS pixels; only the rising flavor carries one.
    pub size: Option<f32>,
    pub duration: f32,
    pub delay: f32,
    pub glyph: &'static str,
}

pub fn generate(count: usize, recipe: &ParticleRecipe) -> Vec<Particle> {
    assert!(
        count == 0 || !recipe.glyphs.is_empty(),
        "particle recipe needs at least one glyph"
    );
    let Ok(count) = u32::try_from(count) else {
        panic!("particle count {} does not fit a u32 id", count);
    };
    (0..count)
        .map(|i| Particle {
            id: i,
            left: recipe.left.at(i),
            size: recipe.size.map(|s| s.at(i)),
            duration: recipe.duration.at(i),
            delay: recipe.delay.at(i),
            glyph: recipe.glyphs[i as usize % recipe.glyphs.len()],
        })
        .collect()
}

#[inline]
pub fn rising_hearts(count: usize) -> Vec<Particle> {
    generate(count, &RISING)
}

#[inline]
pub fn falling_tears(count: usize) -> Vec<Particle> {
    generate(count, &FALLING)
}
