// Host-side tests for scroll trigger ranges and their callbacks.

use folio_core::constants::*;
use folio_core::trigger::Phase;
use folio_core::{
    MotionError, Position, ScrollTrigger, Span, ToggleAction, ToggleActions, TriggerEvent,
};

const VIEWPORT: f32 = 800.0;
const ABOUT: Span = Span {
    top: 900.0,
    height: 1000.0,
};

fn fade_up_trigger() -> ScrollTrigger {
    let mut t = ScrollTrigger::new(
        FADE_UP_TRIGGER_START.parse().unwrap(),
        FADE_UP_TRIGGER_END.parse().unwrap(),
    );
    t.refresh(ABOUT, VIEWPORT);
    t
}

#[test]
fn positions_parse_keywords_and_percentages() {
    let p: Position = "top 80%".parse().unwrap();
    assert_eq!(p.element, 0.0);
    assert!((p.viewport - 0.8).abs() < 1e-6);

    let p: Position = "center 80%".parse().unwrap();
    assert_eq!(p.element, 0.5);

    let p: Position = "bottom bottom".parse().unwrap();
    assert_eq!((p.element, p.viewport), (1.0, 1.0));
}

#[test]
fn positions_reject_malformed_input() {
    for bad in ["", "top", "top 80% extra", "middle top", "top eighty%"] {
        assert_eq!(
            bad.parse::<Position>(),
            Err(MotionError::InvalidPosition(bad.to_string())),
            "{bad:?} should not parse"
        );
    }
}

#[test]
fn position_resolves_against_element_and_viewport() {
    let start: Position = "top 80%".parse().unwrap();
    let end: Position = "bottom top".parse().unwrap();
    assert!((start.resolve(ABOUT, VIEWPORT) - 260.0).abs() < 1e-3);
    assert!((end.resolve(ABOUT, VIEWPORT) - 1900.0).abs() < 1e-3);
}

#[test]
fn refresh_never_lets_end_precede_start() {
    let mut t = ScrollTrigger::new("bottom top".parse().unwrap(), "top top".parse().unwrap());
    t.refresh(ABOUT, VIEWPORT);
    let (start, end) = t.range();
    assert_eq!(start, 1900.0);
    assert_eq!(end, 1900.0);
}

#[test]
fn forward_and_backward_scroll_fire_all_four_callbacks() {
    let mut t = fade_up_trigger();
    assert!(t.update(0.0).is_empty());
    assert_eq!(t.phase(), Phase::Before);

    assert_eq!(t.update(300.0).as_slice(), &[TriggerEvent::Enter]);
    assert!(t.is_active());
    assert!(t.update(1200.0).is_empty());
    assert_eq!(t.update(2000.0).as_slice(), &[TriggerEvent::Leave]);
    assert_eq!(t.phase(), Phase::After);

    assert_eq!(t.update(1800.0).as_slice(), &[TriggerEvent::EnterBack]);
    assert_eq!(t.update(100.0).as_slice(), &[TriggerEvent::LeaveBack]);
    assert_eq!(t.phase(), Phase::Before);
}

#[test]
fn jumping_over_the_range_fires_both_edges_in_order() {
    let mut t = fade_up_trigger();
    assert_eq!(
        t.update(5000.0).as_slice(),
        &[TriggerEvent::Enter, TriggerEvent::Leave]
    );
    assert_eq!(
        t.update(0.0).as_slice(),
        &[TriggerEvent::EnterBack, TriggerEvent::LeaveBack]
    );
}

#[test]
fn repeated_crossings_re_arm() {
    let mut t = fade_up_trigger();
    let mut enters = 0;
    for _ in 0..5 {
        enters += t
            .update(500.0)
            .iter()
            .filter(|e| **e == TriggerEvent::Enter)
            .count();
        t.update(0.0);
    }
    assert_eq!(enters, 5);
}

#[test]
fn progress_is_clamped_and_linear() {
    let t = fade_up_trigger();
    assert_eq!(t.progress(0.0), 0.0);
    assert!((t.progress(1080.0) - 0.5).abs() < 1e-5);
    assert_eq!(t.progress(9999.0), 1.0);
}

#[test]
fn point_trigger_switches_at_its_start() {
    let mut t = ScrollTrigger::at(HEADER_TRIGGER_START.parse().unwrap());
    t.refresh(
        Span {
            top: 0.0,
            height: 900.0,
        },
        VIEWPORT,
    );
    assert_eq!(t.range(), (900.0, 900.0));
    assert_eq!(t.progress(899.0), 0.0);
    assert_eq!(t.progress(900.0), 1.0);

    assert!(t.update(899.0).is_empty());
    assert_eq!(t.update(900.0).as_slice(), &[TriggerEvent::Enter]);
    assert_eq!(t.update(899.0).as_slice(), &[TriggerEvent::LeaveBack]);
}

#[test]
fn toggle_actions_map_events_in_declared_order() {
    let actions: ToggleActions = FADE_UP_TOGGLE_ACTIONS.parse().unwrap();
    assert_eq!(actions.action_for(TriggerEvent::Enter), ToggleAction::Restart);
    assert_eq!(actions.action_for(TriggerEvent::Leave), ToggleAction::None);
    assert_eq!(actions.action_for(TriggerEvent::EnterBack), ToggleAction::Restart);
    assert_eq!(actions.action_for(TriggerEvent::LeaveBack), ToggleAction::None);

    let actions: ToggleActions = "play pause resume reverse".parse().unwrap();
    assert_eq!(actions.action_for(TriggerEvent::LeaveBack), ToggleAction::Reverse);
}

#[test]
fn toggle_actions_reject_bad_input() {
    for bad in ["play", "play none none", "play none none none none", "play none jump none"] {
        assert!(bad.parse::<ToggleActions>().is_err(), "{bad:?} should not parse");
    }
}
