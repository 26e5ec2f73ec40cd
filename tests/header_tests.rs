// Host-side tests for the two-state header.

use folio_core::constants::{HEADER_THEME_ATTR, HEADER_THEME_DARK, NO_POINTER_CLASS};
use folio_core::{
    Animator, DomWrite, HeaderMode, HeaderSwitch, HeaderTargets, MotionConfig, Prop, TargetId,
    TriggerEvent, Value,
};

const TARGETS: HeaderTargets = HeaderTargets {
    header: TargetId(0),
    initial: [TargetId(1), TargetId(2)],
    scrolled: [TargetId(3), TargetId(4)],
};

fn settle(animator: &mut Animator) {
    for _ in 0..120 {
        animator.tick(1.0 / 60.0);
    }
}

fn pointer_blocked(writes: &[DomWrite], target: TargetId) -> Option<bool> {
    writes.iter().rev().find_map(|w| match w {
        DomWrite::Class { target: t, class, on } if *t == target && *class == NO_POINTER_CLASS => {
            Some(*on)
        }
        _ => None,
    })
}

fn theme(writes: &[DomWrite]) -> Option<Option<&'static str>> {
    writes.iter().rev().find_map(|w| match w {
        DomWrite::Attr { name, value, .. } if *name == HEADER_THEME_ATTR => Some(*value),
        _ => None,
    })
}

#[test]
fn only_enter_and_leave_back_change_mode() {
    assert_eq!(HeaderSwitch::mode_for(TriggerEvent::Enter), Some(HeaderMode::Scrolled));
    assert_eq!(HeaderSwitch::mode_for(TriggerEvent::LeaveBack), Some(HeaderMode::Initial));
    assert_eq!(HeaderSwitch::mode_for(TriggerEvent::Leave), None);
    assert_eq!(HeaderSwitch::mode_for(TriggerEvent::EnterBack), None);
}

#[test]
fn scrolling_past_hero_swaps_content_and_darkens() {
    let config = MotionConfig::from_constants().unwrap();
    let mut animator = Animator::new();
    let mut writes = Vec::new();
    let mut header = HeaderSwitch::new(TARGETS);

    assert!(header.handle(TriggerEvent::Enter, &config, &mut animator, &mut writes));
    assert_eq!(header.mode(), HeaderMode::Scrolled);
    settle(&mut animator);

    for t in TARGETS.initial {
        assert_eq!(animator.num(t, Prop::Opacity), 0.0);
        assert_eq!(pointer_blocked(&writes, t), Some(true));
    }
    for t in TARGETS.scrolled {
        assert_eq!(animator.num(t, Prop::Opacity), 1.0);
        assert_eq!(pointer_blocked(&writes, t), Some(false));
    }
    assert_eq!(
        animator.value(TARGETS.header, Prop::Background),
        Value::Color(config.header_scrolled_bg)
    );
    assert_eq!(theme(&writes), Some(Some(HEADER_THEME_DARK)));
}

#[test]
fn shown_set_fades_in_after_hidden_set_starts_fading() {
    let config = MotionConfig::from_constants().unwrap();
    let mut animator = Animator::new();
    let mut writes = Vec::new();
    let mut header = HeaderSwitch::new(TARGETS);
    for t in TARGETS.scrolled {
        animator.set(t, Prop::Opacity, Value::Num(0.0));
    }

    header.handle(TriggerEvent::Enter, &config, &mut animator, &mut writes);
    animator.tick(0.05);
    assert!(animator.num(TARGETS.initial[0], Prop::Opacity) < 1.0);
    assert_eq!(animator.num(TARGETS.scrolled[0], Prop::Opacity), 0.0);
}

#[test]
fn repeated_events_do_not_reapply() {
    let config = MotionConfig::from_constants().unwrap();
    let mut animator = Animator::new();
    let mut writes = Vec::new();
    let mut header = HeaderSwitch::new(TARGETS);

    assert!(!header.handle(TriggerEvent::LeaveBack, &config, &mut animator, &mut writes));
    assert!(writes.is_empty());
    assert!(header.handle(TriggerEvent::Enter, &config, &mut animator, &mut writes));
    let n = writes.len();
    assert!(!header.handle(TriggerEvent::Enter, &config, &mut animator, &mut writes));
    assert_eq!(writes.len(), n);
}

#[test]
fn quick_down_then_up_restores_initial_state() {
    let config = MotionConfig::from_constants().unwrap();
    let mut animator = Animator::new();
    let mut writes = Vec::new();
    let mut header = HeaderSwitch::new(TARGETS);
    for t in TARGETS.scrolled {
        animator.set(t, Prop::Opacity, Value::Num(0.0));
    }

    header.handle(TriggerEvent::Enter, &config, &mut animator, &mut writes);
    animator.tick(0.12);
    header.handle(TriggerEvent::LeaveBack, &config, &mut animator, &mut writes);
    settle(&mut animator);

    assert_eq!(header.mode(), HeaderMode::Initial);
    for t in TARGETS.initial {
        assert!((animator.num(t, Prop::Opacity) - 1.0).abs() < 1e-5);
        assert_eq!(pointer_blocked(&writes, t), Some(false));
    }
    for t in TARGETS.scrolled {
        assert!(animator.num(t, Prop::Opacity).abs() < 1e-5);
        assert_eq!(pointer_blocked(&writes, t), Some(true));
    }
    match animator.value(TARGETS.header, Prop::Background) {
        Value::Color(c) => assert_eq!(c.a, 0.0),
        other => panic!("unexpected background {other:?}"),
    }
    assert_eq!(theme(&writes), Some(None));
    assert_eq!(animator.active_tweens(), 0);
}
