use crate::color::Rgba;
use crate::constants::*;
use crate::error::Result;
use crate::trigger::{Position, ToggleActions};

/// Trigger range for one effect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerRange {
    pub start: Position,
    pub end: Position,
}

impl TriggerRange {
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Ok(Self {
            start: start.parse()?,
            end: end.parse()?,
        })
    }
}

/// Runtime tuning for the controller. [`MotionConfig::from_constants`]
/// reproduces [`crate::constants`]; callers override individual fields as
/// needed.
#[derive(Clone, Debug, PartialEq)]
pub struct MotionConfig {
    pub cursor_follow_factor: f32,
    pub cursor_scale_duration: f32,
    pub cursor_hover_scale: f32,
    pub cursor_label_duration: f32,
    pub cursor_hover_color: Rgba,
    pub cursor_idle_color: Rgba,
    pub cursor_label_color: Rgba,

    pub nav_duration: f32,
    pub nav_offset: f32,

    pub fade_up_offset: f32,
    pub fade_up_duration: f32,
    pub fade_up_stagger: f32,
    pub fade_up_trigger: TriggerRange,
    pub fade_up_actions: ToggleActions,

    pub glitch_delay: f32,
    pub glitch_window: f32,
    pub glitch_symbols: String,

    pub title_offset: f32,
    pub title_drift: f32,
    pub title_reveal_span: f32,
    pub title_drift_span: f32,
    pub title_scrub_lag: f32,
    pub title_trigger: TriggerRange,

    pub header_trigger: Position,
    pub header_fade_duration: f32,
    pub header_fade_in_delay: f32,
    pub header_bg_duration: f32,
    pub header_scrolled_bg: Rgba,
    pub header_initial_bg: Rgba,

    pub footer_stagger: f32,
    pub footer_char_span: f32,
    pub footer_scrub_lag: f32,
    pub footer_trigger: TriggerRange,
}

impl MotionConfig {
    /// Build from the tuning constants, validating the trigger strings.
    pub fn from_constants() -> Result<Self> {
        Ok(Self {
            cursor_follow_factor: CURSOR_FOLLOW_FACTOR,
            cursor_scale_duration: CURSOR_SCALE_DURATION,
            cursor_hover_scale: CURSOR_HOVER_SCALE,
            cursor_label_duration: CURSOR_LABEL_DURATION,
            cursor_hover_color: Rgba::from_hex(CURSOR_HOVER_COLOR),
            cursor_idle_color: Rgba::from_hex(CURSOR_IDLE_COLOR),
            cursor_label_color: Rgba::from_hex(CURSOR_LABEL_COLOR),

            nav_duration: NAV_SCROLL_DURATION,
            nav_offset: NAV_SCROLL_OFFSET,

            fade_up_offset: FADE_UP_OFFSET_Y,
            fade_up_duration: FADE_UP_DURATION,
            fade_up_stagger: FADE_UP_STAGGER,
            fade_up_trigger: TriggerRange::parse(FADE_UP_TRIGGER_START, FADE_UP_TRIGGER_END)?,
            fade_up_actions: FADE_UP_TOGGLE_ACTIONS.parse()?,

            glitch_delay: GLITCH_DELAY,
            glitch_window: GLITCH_WINDOW,
            glitch_symbols: GLITCH_SYMBOLS.to_string(),

            title_offset: TITLE_OFFSET_Y,
            title_drift: TITLE_DRIFT_Y,
            title_reveal_span: TITLE_REVEAL_SPAN,
            title_drift_span: TITLE_DRIFT_SPAN,
            title_scrub_lag: TITLE_SCRUB_LAG,
            title_trigger: TriggerRange::parse(TITLE_TRIGGER_START, TITLE_TRIGGER_END)?,

            header_trigger: HEADER_TRIGGER_START.parse()?,
            header_fade_duration: HEADER_FADE_DURATION,
            header_fade_in_delay: HEADER_FADE_IN_DELAY,
            header_bg_duration: HEADER_BG_DURATION,
            header_scrolled_bg: Rgba::from_hex(HEADER_SCROLLED_BG),
            header_initial_bg: Rgba::TRANSPARENT,

            footer_stagger: FOOTER_STAGGER,
            footer_char_span: FOOTER_CHAR_SPAN,
            footer_scrub_lag: FOOTER_SCRUB_LAG,
            footer_trigger: TriggerRange::parse(FOOTER_TRIGGER_START, FOOTER_TRIGGER_END)?,
        })
    }
}
