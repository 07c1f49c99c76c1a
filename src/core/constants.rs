// Shared tuning for the widget's logic core.

// Particle counts, generated once per session
pub const RISING_HEART_COUNT: usize = 32;
pub const FALLING_TEAR_COUNT: usize = 24;

// How far (px) the No button jumps away from the pointer
pub const ESCAPE_MAGNITUDE_PX: f32 = 120.0;

// Sad rain stays up this long after a decline unless superseded
pub const SAD_RAIN_CLEAR_MS: u32 = 4_500;

// Confetti burst
pub const CONFETTI_PIECES: usize = 350;
pub const CONFETTI_GRAVITY_PX_S2: f32 = 420.0;
pub const CONFETTI_WIND_PX_S: f32 = 0.0;
pub const CONFETTI_MAX_FALL_PX_S: f32 = 600.0;
pub const CONFETTI_COLORS: [&str; 9] = [
    "#f06292", "#ec407a", "#f48fb1", "#c084fc", "#a855f7", "#fda4af", "#fb7185", "#ffd1e3",
    "#7c3aed",
];
