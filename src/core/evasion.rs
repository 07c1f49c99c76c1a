use glam::Vec2;

/// Axis-aligned box in client (CSS pixel) coordinates, as reported by
/// `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoundingBox {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl BoundingBox {
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Displacement of length `magnitude` pointing from `pointer` through `target_center`.
///
/// A zero-length direction keeps a denominator of 1, so a pointer sitting exactly
/// on the center yields `(0, 0)` instead of NaN. That is a known approximation:
/// the target simply stays put for that one event.
#[inline]
pub fn compute_escape(pointer: Vec2, target_center: Vec2, magnitude: f32) -> Vec2 {
    debug_assert!(pointer.is_finite() && target_center.is_finite());
    debug_assert!(magnitude.is_finite());
    let d = target_center - pointer;
    let len = d.length();
    let len = if len > 0.0 { len } else { 1.0 };
    d / len * magnitude
}

/// Current offset of the evasive button relative to its natural position.
#[derive(Clone, Copy, Debug)]
pub struct Evasion {
    magnitude: f32,
    offset: Vec2,
}

impl Evasion {
    pub fn new(magnitude: f32) -> Self {
        Self {
            magnitude,
            offset: Vec2::ZERO,
        }
    }

    pub fn on_enter(&mut self, pointer: Vec2, target: BoundingBox) -> Vec2 {
        self.offset = compute_escape(pointer, target.center(), self.magnitude);
        self.offset
    }

    pub fn on_leave(&mut self) -> Vec2 {
        self.offset = Vec2::ZERO;
        self.offset
    }

    #[inline]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    #[inline]
    pub fn magnitude(&self) -> f32 {
        self.magnitude
    }
}
