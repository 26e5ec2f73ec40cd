//! Two-state header driven by the hero section's bottom edge.

use crate::animator::{Animator, TweenSpec};
use crate::config::MotionConfig;
use crate::constants::{HEADER_THEME_ATTR, HEADER_THEME_DARK, NO_POINTER_CLASS};
use crate::ease::Ease;
use crate::style::{Prop, TargetId, Value};
use crate::trigger::TriggerEvent;
use crate::write::DomWrite;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HeaderMode {
    #[default]
    Initial,
    Scrolled,
}

/// Header element and its two interchangeable content sets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeaderTargets {
    pub header: TargetId,
    pub initial: [TargetId; 2],
    pub scrolled: [TargetId; 2],
}

#[derive(Clone, Debug)]
pub struct HeaderSwitch {
    targets: HeaderTargets,
    mode: HeaderMode,
}

impl HeaderSwitch {
    pub fn new(targets: HeaderTargets) -> Self {
        Self {
            targets,
            mode: HeaderMode::Initial,
        }
    }

    pub fn mode(&self) -> HeaderMode {
        self.mode
    }

    /// Mode a trigger event moves the header into, if any.
    pub fn mode_for(event: TriggerEvent) -> Option<HeaderMode> {
        match event {
            TriggerEvent::Enter => Some(HeaderMode::Scrolled),
            TriggerEvent::LeaveBack => Some(HeaderMode::Initial),
            TriggerEvent::Leave | TriggerEvent::EnterBack => None,
        }
    }

    /// React to a trigger event; returns whether the mode changed.
    pub fn handle(
        &mut self,
        event: TriggerEvent,
        config: &MotionConfig,
        animator: &mut Animator,
        writes: &mut Vec<DomWrite>,
    ) -> bool {
        match Self::mode_for(event) {
            Some(mode) if mode != self.mode => {
                self.mode = mode;
                self.apply(config, animator, writes);
                log::info!("[header] mode={:?}", mode);
                true
            }
            _ => false,
        }
    }

    fn apply(&self, config: &MotionConfig, animator: &mut Animator, writes: &mut Vec<DomWrite>) {
        let t = &self.targets;
        let (shown, hidden, bg, theme) = match self.mode {
            HeaderMode::Scrolled => (
                t.scrolled,
                t.initial,
                config.header_scrolled_bg,
                Some(HEADER_THEME_DARK),
            ),
            HeaderMode::Initial => (t.initial, t.scrolled, config.header_initial_bg, None),
        };
        for &target in &shown {
            writes.push(DomWrite::Class {
                target,
                class: NO_POINTER_CLASS,
                on: false,
            });
        }
        for &target in &hidden {
            writes.push(DomWrite::Class {
                target,
                class: NO_POINTER_CLASS,
                on: true,
            });
        }
        let fade = TweenSpec::new(config.header_fade_duration, Ease::Power1Out);
        for &target in &hidden {
            animator.to(target, Prop::Opacity, Value::Num(0.0), fade);
        }
        for &target in &shown {
            animator.to(
                target,
                Prop::Opacity,
                Value::Num(1.0),
                fade.delayed(config.header_fade_in_delay),
            );
        }
        animator.to(
            t.header,
            Prop::Background,
            Value::Color(bg),
            TweenSpec::new(config.header_bg_duration, Ease::Power1Out),
        );
        writes.push(DomWrite::Attr {
            target: t.header,
            name: HEADER_THEME_ATTR,
            value: theme,
        });
    }
}
