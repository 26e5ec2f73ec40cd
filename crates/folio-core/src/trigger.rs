//! Scroll triggers: a document range derived from an element's box and the
//! viewport, plus the enter/leave callbacks fired as the scroll offset
//! crosses its ends.

use crate::error::{MotionError, Result};
use smallvec::{smallvec, SmallVec};
use std::str::FromStr;

/// Vertical document-space extent of an element.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Span {
    pub top: f32,
    pub height: f32,
}

/// `"<element edge> <viewport edge>"`, e.g. `"top 80%"` or `"bottom top"`.
/// Both halves are stored as fractions of their box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position {
    pub element: f32,
    pub viewport: f32,
}

fn parse_fraction(word: &str) -> Option<f32> {
    match word {
        "top" => Some(0.0),
        "center" => Some(0.5),
        "bottom" => Some(1.0),
        w => w
            .strip_suffix('%')
            .and_then(|n| n.parse::<f32>().ok())
            .map(|p| p / 100.0),
    }
}

impl FromStr for Position {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self> {
        let mut words = s.split_whitespace();
        let parsed = match (words.next(), words.next(), words.next()) {
            (Some(e), Some(v), None) => parse_fraction(e).zip(parse_fraction(v)),
            _ => None,
        };
        parsed
            .map(|(element, viewport)| Position { element, viewport })
            .ok_or_else(|| MotionError::InvalidPosition(s.to_string()))
    }
}

impl Position {
    /// Scroll offset at which the element edge meets the viewport edge.
    pub fn resolve(&self, span: Span, viewport_height: f32) -> f32 {
        span.top + self.element * span.height - self.viewport * viewport_height
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TriggerEvent {
    Enter,
    Leave,
    EnterBack,
    LeaveBack,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleAction {
    Play,
    Pause,
    Resume,
    Reset,
    Restart,
    Complete,
    Reverse,
    None,
}

impl FromStr for ToggleAction {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, ()> {
        Ok(match s {
            "play" => ToggleAction::Play,
            "pause" => ToggleAction::Pause,
            "resume" => ToggleAction::Resume,
            "reset" => ToggleAction::Reset,
            "restart" => ToggleAction::Restart,
            "complete" => ToggleAction::Complete,
            "reverse" => ToggleAction::Reverse,
            "none" => ToggleAction::None,
            _ => return Err(()),
        })
    }
}

/// Actions for enter, leave, enterBack and leaveBack, in that order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleActions(pub [ToggleAction; 4]);

impl FromStr for ToggleActions {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self> {
        let err = || MotionError::InvalidToggleActions(s.to_string());
        let words: Vec<&str> = s.split_whitespace().collect();
        if words.len() != 4 {
            return Err(err());
        }
        let mut actions = [ToggleAction::None; 4];
        for (slot, word) in actions.iter_mut().zip(words) {
            *slot = word.parse().map_err(|_| err())?;
        }
        Ok(ToggleActions(actions))
    }
}

impl ToggleActions {
    pub fn action_for(&self, event: TriggerEvent) -> ToggleAction {
        match event {
            TriggerEvent::Enter => self.0[0],
            TriggerEvent::Leave => self.0[1],
            TriggerEvent::EnterBack => self.0[2],
            TriggerEvent::LeaveBack => self.0[3],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Before,
    Active,
    After,
}

pub type TriggerEvents = SmallVec<[TriggerEvent; 2]>;

#[derive(Clone, Debug)]
pub struct ScrollTrigger {
    start: Position,
    end: Position,
    start_px: f32,
    end_px: f32,
    phase: Phase,
}

impl ScrollTrigger {
    pub fn new(start: Position, end: Position) -> Self {
        Self {
            start,
            end,
            start_px: 0.0,
            end_px: 0.0,
            phase: Phase::Before,
        }
    }

    /// A trigger with only a start; end coincides with it.
    pub fn at(start: Position) -> Self {
        Self::new(start, start)
    }

    /// Recompute the scroll range from fresh measurements.
    pub fn refresh(&mut self, span: Span, viewport_height: f32) {
        self.start_px = self.start.resolve(span, viewport_height);
        self.end_px = self.end.resolve(span, viewport_height).max(self.start_px);
    }

    pub fn range(&self) -> (f32, f32) {
        (self.start_px, self.end_px)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }

    pub fn progress(&self, scroll: f32) -> f32 {
        let len = self.end_px - self.start_px;
        if len <= 0.0 {
            return if scroll >= self.start_px { 1.0 } else { 0.0 };
        }
        ((scroll - self.start_px) / len).clamp(0.0, 1.0)
    }

    /// Move to `scroll` and report the callbacks crossed, in firing order.
    pub fn update(&mut self, scroll: f32) -> TriggerEvents {
        let next = if scroll < self.start_px {
            Phase::Before
        } else if scroll > self.end_px {
            Phase::After
        } else {
            Phase::Active
        };
        let events: TriggerEvents = match (self.phase, next) {
            (Phase::Before, Phase::Active) => smallvec![TriggerEvent::Enter],
            (Phase::Before, Phase::After) => {
                smallvec![TriggerEvent::Enter, TriggerEvent::Leave]
            }
            (Phase::Active, Phase::After) => smallvec![TriggerEvent::Leave],
            (Phase::After, Phase::Active) => smallvec![TriggerEvent::EnterBack],
            (Phase::After, Phase::Before) => {
                smallvec![TriggerEvent::EnterBack, TriggerEvent::LeaveBack]
            }
            (Phase::Active, Phase::Before) => smallvec![TriggerEvent::LeaveBack],
            _ => SmallVec::new(),
        };
        self.phase = next;
        events
    }
}
