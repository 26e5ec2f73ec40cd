//! The interaction controller for one mounted page.
//!
//! Platform code feeds it pointer, hover, navigation and scroll events plus a
//! per-frame tick, and applies the [`DomWrite`]s it returns. Every scroll
//! trigger it creates lives in an [`ObserverRegistry`] so [`unmount`] can
//! dispose of all of them at once.
//!
//! [`unmount`]: InteractionController::unmount

use crate::animator::{Animator, TweenSpec};
use crate::config::{MotionConfig, TriggerRange};
use crate::cursor::CursorFollower;
use crate::ease::Ease;
use crate::glitch::{GlitchEffect, GlitchFrame};
use crate::header::{HeaderMode, HeaderSwitch};
use crate::layout::{CursorTargets, Geometry, PageLayout, Section};
use crate::navigation::{scroll_destination, ScrollTween};
use crate::registry::{ObserverId, ObserverRegistry};
use crate::scrub::{ScrubFollower, ScrubTimeline};
use crate::style::{Prop, TargetId, Value};
use crate::trigger::{ScrollTrigger, Span, ToggleAction, TriggerEvent};
use crate::write::DomWrite;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Observer kinds, used for registry labels and counts.
pub const OBSERVER_ENTRANCE: &str = "entrance";
pub const OBSERVER_TITLE: &str = "title";
pub const OBSERVER_HEADER: &str = "header";
pub const OBSERVER_FOOTER: &str = "footer";

/// Which features a mount wired up.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MountReport {
    pub cursor: bool,
    pub header: bool,
    pub glitch: bool,
    pub intro_targets: usize,
    pub entrance_sections: usize,
    pub titles: usize,
    pub footer_chars: usize,
    pub skipped: Vec<&'static str>,
}

struct CursorRig {
    targets: CursorTargets,
    follower: CursorFollower,
    hovered: bool,
}

/// Where an entrance stands, as its toggle actions see it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Entrance {
    /// Hidden at its start values.
    Start,
    /// Playing toward, or resting at, its end values.
    Forward,
    /// Running back toward its start values.
    Backward,
}

struct EntranceRig {
    observer: ObserverId,
    targets: Vec<TargetId>,
    state: Entrance,
}

struct GlitchRig {
    target: TargetId,
    class: &'static str,
    effect: GlitchEffect,
}

struct ScrubRig {
    observer: ObserverId,
    timeline: ScrubTimeline,
    follower: ScrubFollower,
    rendered: Option<f32>,
}

struct TriggerSlot {
    section: Section,
    trigger: ScrollTrigger,
}

pub struct InteractionController {
    config: MotionConfig,
    rng: StdRng,
    animator: Animator,
    triggers: ObserverRegistry<TriggerSlot>,
    cursor: Option<CursorRig>,
    header: Option<(ObserverId, HeaderSwitch)>,
    entrances: Vec<EntranceRig>,
    scrubs: Vec<ScrubRig>,
    glitch: Option<GlitchRig>,
    nav: Option<ScrollTween>,
    geometry: Geometry,
    writes: Vec<DomWrite>,
    mounted: bool,
}

impl InteractionController {
    pub fn new(config: MotionConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
            animator: Animator::new(),
            triggers: ObserverRegistry::new(),
            cursor: None,
            header: None,
            entrances: Vec::new(),
            scrubs: Vec::new(),
            glitch: None,
            nav: None,
            geometry: Geometry::default(),
            writes: Vec::new(),
            mounted: false,
        }
    }

    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn header_mode(&self) -> Option<HeaderMode> {
        self.header.as_ref().map(|(_, h)| h.mode())
    }

    pub fn active_observers(&self) -> usize {
        self.triggers.len()
    }

    pub fn observers_of(&self, kind: &str) -> usize {
        self.triggers.count(kind)
    }

    pub fn cursor_position(&self) -> Option<Vec2> {
        self.cursor.as_ref().map(|c| c.follower.position())
    }

    pub fn scroll_y(&self) -> f32 {
        self.geometry.scroll_y
    }

    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    pub fn is_navigating(&self) -> bool {
        self.nav.is_some()
    }

    /// Wire every feature whose attachment points are present.
    pub fn mount(&mut self, layout: &PageLayout, geometry: Geometry) -> MountReport {
        if self.mounted {
            log::warn!("[mount] already mounted; tearing down the previous mount first");
            self.unmount();
        }
        self.geometry = geometry;
        let mut report = MountReport::default();

        self.mount_cursor(layout, &mut report);
        self.mount_header(layout, &mut report);
        self.mount_entrances(layout, &mut report);
        self.mount_titles(layout, &mut report);
        self.mount_footer(layout, &mut report);

        match &layout.hero {
            Some(hero) if !hero.text.trim().is_empty() => {
                let c = &self.config;
                let effect =
                    GlitchEffect::new(&hero.text, &c.glitch_symbols, c.glitch_delay, c.glitch_window);
                self.glitch = Some(GlitchRig {
                    target: hero.target,
                    class: hero.glitch_class,
                    effect,
                });
                report.glitch = true;
            }
            _ => report.skipped.push("glitch"),
        }

        self.mounted = true;
        // Sync triggers with the scroll offset the page loaded at
        self.scroll(self.geometry.scroll_y);
        for rig in &mut self.scrubs {
            if let Some(slot) = self.triggers.get(rig.observer) {
                rig.follower.snap(slot.trigger.progress(self.geometry.scroll_y));
            }
        }
        log::info!(
            "[mount] observers={} cursor={} header={} glitch={} skipped={:?}",
            self.triggers.len(),
            report.cursor,
            report.header,
            report.glitch,
            report.skipped
        );
        report
    }

    /// Dispose every observer and forget all animation state.
    pub fn unmount(&mut self) -> usize {
        let disposed = self.triggers.dispose_all();
        self.cursor = None;
        self.header = None;
        self.entrances.clear();
        self.scrubs.clear();
        self.glitch = None;
        self.nav = None;
        self.writes.clear();
        self.animator.clear();
        self.mounted = false;
        log::info!("[mount] unmounted; disposed {} observers", disposed);
        disposed
    }

    fn mount_cursor(&mut self, layout: &PageLayout, report: &mut MountReport) {
        let Some(targets) = layout.cursor else {
            report.skipped.push("cursor");
            return;
        };
        self.animator.set_centered(targets.dot);
        self.animator.set(
            targets.dot,
            Prop::Background,
            Value::Color(self.config.cursor_idle_color),
        );
        self.animator.set(targets.label, Prop::Opacity, Value::Num(0.0));
        self.cursor = Some(CursorRig {
            targets,
            follower: CursorFollower::new(self.config.cursor_follow_factor),
            hovered: false,
        });
        report.cursor = true;
    }

    fn mount_header(&mut self, layout: &PageLayout, report: &mut MountReport) {
        let (Some(targets), Some(home)) = (layout.header, self.geometry.span(Section::Home)) else {
            report.skipped.push("header");
            return;
        };
        for target in targets.initial {
            self.animator.set(target, Prop::Opacity, Value::Num(1.0));
        }
        for target in targets.scrolled {
            self.animator.set(target, Prop::Opacity, Value::Num(0.0));
        }
        self.animator
            .set(targets.header, Prop::Background, Value::Color(self.config.header_initial_bg));
        let mut trigger = ScrollTrigger::at(self.config.header_trigger);
        trigger.refresh(home, self.geometry.viewport_height);
        let observer = self.triggers.register(
            OBSERVER_HEADER,
            TriggerSlot {
                section: Section::Home,
                trigger,
            },
        );
        self.header = Some((observer, HeaderSwitch::new(targets)));
        report.header = true;
    }

    fn mount_entrances(&mut self, layout: &PageLayout, report: &mut MountReport) {
        let mut first = true;
        for section in &layout.sections {
            if section.fade_up.is_empty() {
                first = false;
                continue;
            }
            if first {
                // The first section is on screen at load: play immediately
                self.play_fade_up(&section.fade_up);
                report.intro_targets = section.fade_up.len();
                first = false;
                continue;
            }
            let Some(span) = self.geometry.span(section.section) else {
                report.skipped.push("entrance");
                continue;
            };
            for &target in &section.fade_up {
                self.animator
                    .set(target, Prop::Y, Value::Num(self.config.fade_up_offset));
                self.animator.set(target, Prop::Opacity, Value::Num(0.0));
            }
            let observer = self.register_trigger(
                OBSERVER_ENTRANCE,
                section.section,
                self.config.fade_up_trigger,
                span,
            );
            self.entrances.push(EntranceRig {
                observer,
                targets: section.fade_up.clone(),
                state: Entrance::Start,
            });
            report.entrance_sections += 1;
        }
    }

    fn mount_titles(&mut self, layout: &PageLayout, report: &mut MountReport) {
        for section in &layout.sections {
            if section.titles.is_empty() {
                continue;
            }
            let Some(span) = self.geometry.span(section.section) else {
                report.skipped.push("title");
                continue;
            };
            for &title in &section.titles {
                let c = &self.config;
                let mut timeline = ScrubTimeline::new();
                timeline
                    .add(
                        title,
                        Prop::Opacity,
                        Value::Num(0.0),
                        Value::Num(1.0),
                        0.0,
                        c.title_reveal_span,
                        Ease::Power2Out,
                    )
                    .add(
                        title,
                        Prop::Y,
                        Value::Num(c.title_offset),
                        Value::Num(0.0),
                        0.0,
                        c.title_reveal_span,
                        Ease::Power2Out,
                    )
                    .add(
                        title,
                        Prop::Y,
                        Value::Num(0.0),
                        Value::Num(c.title_drift),
                        c.title_reveal_span,
                        c.title_drift_span,
                        Ease::None,
                    );
                let lag = c.title_scrub_lag;
                let range = c.title_trigger;
                let observer = self.register_trigger(OBSERVER_TITLE, section.section, range, span);
                self.push_scrub(observer, timeline, lag);
                report.titles += 1;
            }
        }
    }

    fn mount_footer(&mut self, layout: &PageLayout, report: &mut MountReport) {
        let span = match self.geometry.span(Section::Contact) {
            Some(span) if !layout.footer_chars.is_empty() => span,
            _ => {
                report.skipped.push("footer");
                return;
            }
        };
        let c = &self.config;
        let mut timeline = ScrubTimeline::new();
        for (i, &target) in layout.footer_chars.iter().enumerate() {
            timeline.add(
                target,
                Prop::ClipTop,
                Value::Num(100.0),
                Value::Num(0.0),
                c.footer_stagger * i as f32,
                c.footer_char_span,
                Ease::None,
            );
        }
        let lag = c.footer_scrub_lag;
        let range = c.footer_trigger;
        let observer = self.register_trigger(OBSERVER_FOOTER, Section::Contact, range, span);
        self.push_scrub(observer, timeline, lag);
        report.footer_chars = layout.footer_chars.len();
    }

    fn register_trigger(
        &mut self,
        kind: &'static str,
        section: Section,
        range: TriggerRange,
        span: Span,
    ) -> ObserverId {
        let mut trigger = ScrollTrigger::new(range.start, range.end);
        trigger.refresh(span, self.geometry.viewport_height);
        self.triggers.register(kind, TriggerSlot { section, trigger })
    }

    fn push_scrub(&mut self, observer: ObserverId, timeline: ScrubTimeline, lag: f32) {
        for (target, prop, value) in timeline.values_at(0.0) {
            self.animator.set(target, prop, value);
        }
        self.scrubs.push(ScrubRig {
            observer,
            timeline,
            follower: ScrubFollower::new(lag, 0.0),
            rendered: None,
        });
    }

    fn play_fade_up(&mut self, targets: &[TargetId]) {
        let c = &self.config;
        let props = [
            (Prop::Y, Value::Num(c.fade_up_offset), Value::Num(0.0)),
            (Prop::Opacity, Value::Num(0.0), Value::Num(1.0)),
        ];
        let spec = TweenSpec::new(c.fade_up_duration, Ease::Power3Out);
        let stagger = c.fade_up_stagger;
        self.animator.stagger_from_to(targets, &props, spec, stagger);
    }

    // ---------------- Pointer ----------------

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        if let Some(rig) = &mut self.cursor {
            rig.follower.set_target(Vec2::new(x, y));
        }
    }

    pub fn pointer_enter_document(&mut self) {
        self.scale_cursor(1.0);
    }

    pub fn pointer_leave_document(&mut self) {
        self.scale_cursor(0.0);
    }

    fn scale_cursor(&mut self, scale: f32) {
        if let Some(rig) = &self.cursor {
            let spec = TweenSpec::new(self.config.cursor_scale_duration, Ease::Power3Out);
            self.animator
                .to(rig.targets.dot, Prop::Scale, Value::Num(scale), spec);
        }
    }

    pub fn hover_enter(&mut self) {
        self.set_hover(true);
    }

    pub fn hover_leave(&mut self) {
        self.set_hover(false);
    }

    fn set_hover(&mut self, hovered: bool) {
        let Some(rig) = &mut self.cursor else {
            return;
        };
        rig.hovered = hovered;
        let CursorTargets { dot, label } = rig.targets;
        let c = &self.config;
        let dot_spec = TweenSpec::new(c.cursor_scale_duration, Ease::Power3Out);
        let label_spec = TweenSpec::new(c.cursor_label_duration, Ease::Power3Out);
        let (scale, bg, opacity) = if hovered {
            (c.cursor_hover_scale, c.cursor_hover_color, 1.0)
        } else {
            (1.0, c.cursor_idle_color, 0.0)
        };
        let label_color = c.cursor_label_color;
        self.animator.to(dot, Prop::Scale, Value::Num(scale), dot_spec);
        self.animator.to(dot, Prop::Background, Value::Color(bg), dot_spec);
        self.animator
            .to(label, Prop::Opacity, Value::Num(opacity), label_spec);
        if hovered {
            self.animator
                .to(label, Prop::Color, Value::Color(label_color), label_spec);
        }
    }

    pub fn is_hovered(&self) -> bool {
        self.cursor.as_ref().is_some_and(|c| c.hovered)
    }

    // ---------------- Navigation ----------------

    /// Start a smooth scroll from `current_scroll` so `target_top` ends up
    /// just below the header.
    pub fn navigate(&mut self, target_top: f32, current_scroll: f32) -> bool {
        if !self.mounted {
            return false;
        }
        let dest = scroll_destination(target_top, self.config.nav_offset, self.geometry.max_scroll);
        log::info!("[nav] scroll {:.0} -> {:.0}", current_scroll, dest);
        self.nav = Some(ScrollTween::new(
            current_scroll,
            dest,
            self.config.nav_duration,
            Ease::Power2InOut,
        ));
        true
    }

    // ---------------- Scroll ----------------

    /// Re-measure after a resize or late layout shift and resync trigger
    /// state.
    pub fn refresh(&mut self, geometry: Geometry) {
        self.geometry = geometry;
        let viewport = self.geometry.viewport_height;
        for (_, _, slot) in self.triggers.iter_mut() {
            if let Some(span) = self.geometry.span(slot.section) {
                slot.trigger.refresh(span, viewport);
            }
        }
        self.scroll(self.geometry.scroll_y);
    }

    /// The document scrolled to `scroll_y`.
    pub fn scroll(&mut self, scroll_y: f32) {
        self.geometry.scroll_y = scroll_y;
        let mut fired: Vec<(ObserverId, TriggerEvent)> = Vec::new();
        for (id, _, slot) in self.triggers.iter_mut() {
            fired.extend(slot.trigger.update(scroll_y).into_iter().map(|e| (id, e)));
        }
        for (id, event) in fired {
            self.dispatch(id, event);
        }
    }

    fn dispatch(&mut self, id: ObserverId, event: TriggerEvent) {
        if let Some((observer, header)) = &mut self.header {
            if *observer == id {
                header.handle(event, &self.config, &mut self.animator, &mut self.writes);
                return;
            }
        }
        let Some(idx) = self.entrances.iter().position(|e| e.observer == id) else {
            return;
        };
        let action = self.config.fade_up_actions.action_for(event);
        let targets = self.entrances[idx].targets.clone();
        let state = self.entrances[idx].state;
        let offset = self.config.fade_up_offset;
        let next = match action {
            ToggleAction::None => state,
            ToggleAction::Restart => {
                self.play_fade_up(&targets);
                Entrance::Forward
            }
            ToggleAction::Play => {
                targets.iter().for_each(|&t| self.animator.resume(t));
                match state {
                    Entrance::Start => self.play_fade_up(&targets),
                    Entrance::Backward => self.tween_fade_up(&targets, 0.0, 1.0),
                    Entrance::Forward => {}
                }
                Entrance::Forward
            }
            ToggleAction::Reverse => {
                targets.iter().for_each(|&t| self.animator.resume(t));
                if state == Entrance::Forward {
                    self.tween_fade_up(&targets, offset, 0.0);
                    Entrance::Backward
                } else {
                    state
                }
            }
            ToggleAction::Pause => {
                targets.iter().for_each(|&t| self.animator.pause(t));
                state
            }
            ToggleAction::Resume => {
                targets.iter().for_each(|&t| self.animator.resume(t));
                state
            }
            ToggleAction::Reset => {
                self.set_fade_up(&targets, offset, 0.0);
                Entrance::Start
            }
            ToggleAction::Complete => {
                self.set_fade_up(&targets, 0.0, 1.0);
                Entrance::Forward
            }
        };
        self.entrances[idx].state = next;
    }

    /// Jump straight to `y`/`opacity`, cancelling any running tween.
    fn set_fade_up(&mut self, targets: &[TargetId], y: f32, opacity: f32) {
        for &t in targets {
            self.animator.set(t, Prop::Y, Value::Num(y));
            self.animator.set(t, Prop::Opacity, Value::Num(opacity));
        }
    }

    /// Tween from wherever the targets stand toward `y`/`opacity`.
    fn tween_fade_up(&mut self, targets: &[TargetId], y: f32, opacity: f32) {
        let spec = TweenSpec::new(self.config.fade_up_duration, Ease::Power3Out);
        for &t in targets {
            self.animator.to(t, Prop::Y, Value::Num(y), spec);
            self.animator.to(t, Prop::Opacity, Value::Num(opacity), spec);
        }
    }

    // ---------------- Frame ----------------

    /// Writes queued by event handlers since the last frame.
    pub fn drain_writes(&mut self) -> Vec<DomWrite> {
        std::mem::take(&mut self.writes)
    }

    /// Advance all time-based effects by `dt` seconds and collect the DOM
    /// writes produced since the previous frame.
    pub fn frame(&mut self, dt: f32) -> Vec<DomWrite> {
        let mut out = self.drain_writes();
        if !self.mounted {
            return out;
        }

        if let Some(nav) = &mut self.nav {
            let y = nav.step(dt);
            out.push(DomWrite::ScrollWindow { y });
            if nav.is_finished() {
                self.nav = None;
            }
        }

        if let Some(rig) = &mut self.cursor {
            let p = rig.follower.step();
            self.animator.set(rig.targets.dot, Prop::X, Value::Num(p.x));
            self.animator.set(rig.targets.dot, Prop::Y, Value::Num(p.y));
        }

        if let Some(rig) = &mut self.glitch {
            let (target, class) = (rig.target, rig.class);
            let was_running = rig.effect.is_running();
            match rig.effect.advance(dt, &mut self.rng) {
                GlitchFrame::Scrambled(text) => {
                    if !was_running {
                        log::info!("[glitch] start");
                        out.push(DomWrite::Class {
                            target,
                            class,
                            on: true,
                        });
                    }
                    out.push(DomWrite::Text { target, text });
                }
                GlitchFrame::Restored(text) => {
                    out.push(DomWrite::Text { target, text });
                    out.push(DomWrite::Class {
                        target,
                        class,
                        on: false,
                    });
                    log::info!("[glitch] restored");
                }
                GlitchFrame::Pending | GlitchFrame::Done => {}
            }
        }

        let scroll_y = self.geometry.scroll_y;
        for rig in &mut self.scrubs {
            let Some(slot) = self.triggers.get(rig.observer) else {
                continue;
            };
            rig.follower.step(slot.trigger.progress(scroll_y), dt);
            let p = rig.follower.current();
            if rig.rendered != Some(p) {
                for (target, prop, value) in rig.timeline.values_at(p) {
                    self.animator.set(target, prop, value);
                }
                rig.rendered = Some(p);
            }
        }

        self.animator.tick(dt);
        for target in self.animator.take_dirty() {
            if let Some(style) = self.animator.style(target) {
                out.push(DomWrite::Style {
                    target,
                    css: style.css_declarations(),
                });
            }
        }
        out
    }
}
