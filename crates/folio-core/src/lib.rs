pub mod animator;
pub mod color;
pub mod config;
pub mod constants;
pub mod controller;
pub mod cursor;
pub mod ease;
pub mod error;
pub mod glitch;
pub mod header;
pub mod layout;
pub mod navigation;
pub mod registry;
pub mod scrub;
pub mod style;
pub mod trigger;
pub mod write;

pub use animator::{Animator, TweenSpec};
pub use color::Rgba;
pub use config::{MotionConfig, TriggerRange};
pub use controller::{InteractionController, MountReport};
pub use cursor::CursorFollower;
pub use ease::Ease;
pub use error::MotionError;
pub use glitch::{GlitchEffect, GlitchFrame};
pub use header::{HeaderMode, HeaderSwitch, HeaderTargets};
pub use layout::{
    CursorTargets, Geometry, HeroTarget, MountPoints, PageLayout, Section, SectionTargets, Selector,
};
pub use registry::{ObserverId, ObserverRegistry};
pub use scrub::{ScrubFollower, ScrubTimeline};
pub use style::{Prop, Style, TargetId, Value};
pub use trigger::{Position, ScrollTrigger, Span, ToggleAction, ToggleActions, TriggerEvent};
pub use write::DomWrite;
