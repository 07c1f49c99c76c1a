// Front-end constants for the DOM layer.
//
// Logic tuning (counts, magnitudes, timer lengths) lives in `core::constants`;
// this module only holds what the DOM layer needs to build and animate the page.

// Mount point and element ids
pub const ROOT_ID: &str = "valentine-root";
pub const MESSAGE_ID: &str = "valentine-message";
pub const YES_BUTTON_ID: &str = "valentine-yes";
pub const NO_BUTTON_ID: &str = "valentine-no";
pub const ASK_PANEL_ID: &str = "valentine-ask";
pub const CELEBRATION_PANEL_ID: &str = "valentine-celebration";
pub const SAD_RAIN_ID: &str = "valentine-sad-rain";
pub const CONFETTI_CANVAS_ID: &str = "valentine-confetti";

// Stacking order of the overlays
pub const Z_STAGE: i32 = 0;
pub const Z_HEARTS: i32 = 5;
pub const Z_SAD_RAIN: i32 = 10;
pub const Z_CARD: i32 = 20;
pub const Z_CONFETTI: i32 = 30;

// Rising hearts
pub const HEART_OPACITY: f32 = 0.45;
pub const HEART_START_BOTTOM_PX: f32 = -60.0;
pub const HEART_TRAVEL_EXTRA_PX: f32 = 140.0;

// Sad rain
pub const SAD_START_TOP_PX: f32 = -50.0;
pub const SAD_TRAVEL_EXTRA_PX: f32 = 60.0;
pub const SAD_PEAK_OPACITY: f32 = 0.85;

// No button movement easing (overshooting back-out)
pub const NO_BUTTON_TRANSITION: &str = "transform 0.3s cubic-bezier(0.68,-0.55,0.27,1.55)";

// Confetti frame step clamp so a backgrounded tab does not teleport pieces
pub const CONFETTI_MAX_DT_SEC: f32 = 0.05;

// Page defaults, overridable through data attributes on the mount element
pub const DEFAULT_BASE_PATH: &str = "/v2026";
pub const DEFAULT_AUDIO_FILE: &str = "love.mp3";
pub const CELEBRATION_GIF_URL: &str = "https://media.giphy.com/media/v1.Y2lkPTc5MGI3NjExeGRvOGxmN3ZjbWM2NXYzaWs5ZHhudjltbXNxcGhqam5qZ3VpbTFwayZlcD12MV9naWZzX3NlYXJjaCZjdD1n/qfQgXxBz1nvWEbOxyb/giphy.gif";
pub const SIGNOFF_LINK_URL: &str = "https://www.instagram.com/_ggauravvv/";
