//! Animation and interaction tuning constants.
//!
//! Durations are in seconds, distances in CSS pixels, colours `0xRRGGBB`.
//! These express the intended feel of the page and keep magic numbers out of
//! the controller.

// Cursor follower
pub const CURSOR_FOLLOW_FACTOR: f32 = 0.15; // fraction of remaining distance per frame
pub const CURSOR_SCALE_DURATION: f32 = 0.3;
pub const CURSOR_HOVER_SCALE: f32 = 4.0;
pub const CURSOR_LABEL_DURATION: f32 = 0.25;
pub const CURSOR_HOVER_COLOR: u32 = 0x26d137;
pub const CURSOR_IDLE_COLOR: u32 = 0x39ff14;
pub const CURSOR_LABEL_COLOR: u32 = 0xffffff;

// Smooth in-page navigation
pub const NAV_SCROLL_DURATION: f32 = 1.2;
pub const NAV_SCROLL_OFFSET: f32 = 80.0;

// Entrance (fade-up) animation
pub const FADE_UP_OFFSET_Y: f32 = 30.0;
pub const FADE_UP_DURATION: f32 = 0.8;
pub const FADE_UP_STAGGER: f32 = 0.1;
pub const FADE_UP_TRIGGER_START: &str = "top 80%";
pub const FADE_UP_TRIGGER_END: &str = "bottom top";
pub const FADE_UP_TOGGLE_ACTIONS: &str = "restart none restart none";

// Glitch
pub const GLITCH_DELAY: f32 = 1.0;
pub const GLITCH_WINDOW: f32 = 0.4;
pub const GLITCH_SYMBOLS: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*{}[]<>/\\|";

// Section titles (scrubbed)
pub const TITLE_OFFSET_Y: f32 = 30.0;
pub const TITLE_DRIFT_Y: f32 = -80.0;
pub const TITLE_REVEAL_SPAN: f32 = 0.1; // timeline units
pub const TITLE_DRIFT_SPAN: f32 = 0.5; // timeline units
pub const TITLE_SCRUB_LAG: f32 = 1.2;
pub const TITLE_TRIGGER_START: &str = "top bottom";
pub const TITLE_TRIGGER_END: &str = "bottom top";

// Header
pub const HEADER_TRIGGER_START: &str = "bottom top";
pub const HEADER_FADE_DURATION: f32 = 0.3;
pub const HEADER_FADE_IN_DELAY: f32 = 0.1;
pub const HEADER_BG_DURATION: f32 = 0.4;
pub const HEADER_SCROLLED_BG: u32 = 0x1c1c1c;
pub const HEADER_THEME_ATTR: &str = "data-theme";
pub const HEADER_THEME_DARK: &str = "dark";
pub const NO_POINTER_CLASS: &str = "pointer-events-none";

// Footer reveal
pub const FOOTER_STAGGER: f32 = 0.05;
pub const FOOTER_CHAR_SPAN: f32 = 0.5; // timeline units per character
pub const FOOTER_SCRUB_LAG: f32 = 1.5;
pub const FOOTER_TRIGGER_START: &str = "center 80%";
pub const FOOTER_TRIGGER_END: &str = "bottom bottom";

// Scrub smoothing: fraction of the gap left after `lag` seconds
pub const SCRUB_SETTLE_REMAINDER: f32 = 0.05;
