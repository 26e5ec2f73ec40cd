// Host-side tests for easing, colours, inline style rendering and the tween
// engine.

use folio_core::{Animator, Ease, Prop, Rgba, Style, TargetId, TweenSpec, Value};

const A: TargetId = TargetId(0);
const B: TargetId = TargetId(1);

fn run(animator: &mut Animator, seconds: f32) {
    let steps = (seconds * 60.0).ceil() as usize;
    for _ in 0..steps {
        animator.tick(1.0 / 60.0);
    }
}

#[test]
fn eases_hit_their_endpoints() {
    for ease in [
        Ease::None,
        Ease::Power1Out,
        Ease::Power2Out,
        Ease::Power2InOut,
        Ease::Power3Out,
    ] {
        assert_eq!(ease.apply(0.0), 0.0, "{ease:?}");
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-6, "{ease:?}");
        assert_eq!(ease.apply(-1.0), 0.0);
        assert!((ease.apply(2.0) - 1.0).abs() < 1e-6);
    }
}

#[test]
fn out_eases_lead_linear_and_in_out_is_symmetric() {
    assert!((Ease::Power1Out.apply(0.5) - 0.75).abs() < 1e-6);
    assert!((Ease::Power2Out.apply(0.5) - 0.875).abs() < 1e-6);
    assert!((Ease::Power3Out.apply(0.5) - 0.9375).abs() < 1e-6);
    assert!((Ease::Power2InOut.apply(0.5) - 0.5).abs() < 1e-6);
    for i in 1..10 {
        let t = i as f32 / 10.0;
        let a = Ease::Power2InOut.apply(t);
        let b = Ease::Power2InOut.apply(1.0 - t);
        assert!((a + b - 1.0).abs() < 1e-5);
    }
}

#[test]
fn colors_parse_and_render() {
    let c: Rgba = "#1c1c1c".parse().unwrap();
    assert_eq!(c, Rgba::from_hex(0x1c1c1c));
    assert_eq!(c.to_css(), "rgb(28, 28, 28)");

    let short = Rgba::parse("#fff").unwrap();
    assert_eq!(short.to_css(), "rgb(255, 255, 255)");

    assert_eq!(Rgba::parse("transparent").unwrap(), Rgba::TRANSPARENT);
    assert_eq!(Rgba::TRANSPARENT.to_css(), "rgba(0, 0, 0, 0.000)");

    for bad in ["1c1c1c", "#12", "#gggggg", "red"] {
        assert!(Rgba::parse(bad).is_err(), "{bad:?} should not parse");
    }
}

#[test]
fn fading_from_transparent_keeps_the_hue() {
    let dark = Rgba::from_hex(0x1c1c1c);
    let mid = Rgba::TRANSPARENT.lerp(dark, 0.5);
    assert!((mid.r - dark.r).abs() < 1e-6);
    assert!((mid.a - 0.5).abs() < 1e-6);

    let back = dark.lerp(Rgba::TRANSPARENT, 1.0);
    assert_eq!(back.a, 0.0);
    assert!((back.r - dark.r).abs() < 1e-6);
}

#[test]
fn style_renders_only_written_properties() {
    assert!(Style::default().css_declarations().is_empty());

    let mut s = Style {
        centered: true,
        ..Style::default()
    };
    s.set(Prop::X, Value::Num(15.0));
    s.set(Prop::Y, Value::Num(7.5));
    s.set(Prop::Scale, Value::Num(4.0));
    s.set(Prop::Opacity, Value::Num(1.5));
    s.set(Prop::ClipTop, Value::Num(42.0));

    let css = s.css_declarations();
    let get = |name: &str| css.iter().find(|(n, _)| *n == name).map(|(_, v)| v.as_str());
    assert_eq!(
        get("transform"),
        Some("translate(-50%, -50%) translate3d(15.00px, 7.50px, 0) scale(4.0000)")
    );
    assert_eq!(get("opacity"), Some("1.0000"));
    assert_eq!(get("clip-path"), Some("inset(42.00% 0 0 0)"));
    assert_eq!(get("background-color"), None);
}

#[test]
fn style_ignores_mismatched_value_kinds() {
    let mut s = Style::default();
    s.set(Prop::Opacity, Value::Color(Rgba::TRANSPARENT));
    assert_eq!(s.opacity, None);
}

#[test]
fn unwritten_properties_read_as_rest_values() {
    let a = Animator::new();
    assert_eq!(a.num(A, Prop::Opacity), 1.0);
    assert_eq!(a.num(A, Prop::Scale), 1.0);
    assert_eq!(a.num(A, Prop::Y), 0.0);
    assert_eq!(a.value(A, Prop::Background), Value::Color(Rgba::TRANSPARENT));
}

#[test]
fn tween_reaches_target_and_retires() {
    let mut a = Animator::new();
    a.set(A, Prop::Opacity, Value::Num(0.0));
    a.to(A, Prop::Opacity, Value::Num(1.0), TweenSpec::new(0.3, Ease::Power1Out));
    assert!(a.is_tweening(A, Prop::Opacity));

    a.tick(0.15);
    let halfway = a.num(A, Prop::Opacity);
    assert!((halfway - 0.75).abs() < 1e-4);

    run(&mut a, 0.3);
    assert_eq!(a.num(A, Prop::Opacity), 1.0);
    assert_eq!(a.active_tweens(), 0);
}

#[test]
fn new_tween_overwrites_running_one_on_same_property() {
    let mut a = Animator::new();
    a.set(A, Prop::Opacity, Value::Num(0.0));
    a.to(A, Prop::Opacity, Value::Num(1.0), TweenSpec::new(1.0, Ease::None));
    a.to(A, Prop::Scale, Value::Num(2.0), TweenSpec::new(1.0, Ease::None));
    a.tick(0.5);
    a.to(A, Prop::Opacity, Value::Num(0.0), TweenSpec::new(0.2, Ease::None));
    assert_eq!(a.active_tweens(), 2);

    run(&mut a, 1.0);
    assert_eq!(a.num(A, Prop::Opacity), 0.0);
    assert_eq!(a.num(A, Prop::Scale), 2.0);
}

#[test]
fn delayed_tween_starts_from_value_at_start_time() {
    let mut a = Animator::new();
    a.set(A, Prop::Opacity, Value::Num(0.0));
    a.to(
        A,
        Prop::Opacity,
        Value::Num(1.0),
        TweenSpec::new(0.2, Ease::None).delayed(0.5),
    );
    a.tick(0.4);
    assert_eq!(a.num(A, Prop::Opacity), 0.0);
    a.tick(0.2);
    assert!((a.num(A, Prop::Opacity) - 0.5).abs() < 1e-3);
}

#[test]
fn set_cancels_a_running_tween() {
    let mut a = Animator::new();
    a.to(A, Prop::Y, Value::Num(100.0), TweenSpec::new(1.0, Ease::None));
    a.tick(0.1);
    a.set(A, Prop::Y, Value::Num(-5.0));
    run(&mut a, 2.0);
    assert_eq!(a.num(A, Prop::Y), -5.0);
}

#[test]
fn stagger_offsets_each_target() {
    let mut a = Animator::new();
    let props = [(Prop::Opacity, Value::Num(0.0), Value::Num(1.0))];
    a.stagger_from_to(&[A, B], &props, TweenSpec::new(0.8, Ease::None), 0.1);
    // Start values render immediately
    assert_eq!(a.num(A, Prop::Opacity), 0.0);
    assert_eq!(a.num(B, Prop::Opacity), 0.0);

    a.tick(0.1);
    assert!(a.num(A, Prop::Opacity) > 0.0);
    assert_eq!(a.num(B, Prop::Opacity), 0.0);

    run(&mut a, 1.0);
    assert_eq!(a.num(A, Prop::Opacity), 1.0);
    assert_eq!(a.num(B, Prop::Opacity), 1.0);
}

#[test]
fn paused_tweens_hold_until_resumed() {
    let mut a = Animator::new();
    a.from_to(A, Prop::Y, Value::Num(30.0), Value::Num(0.0), TweenSpec::new(1.0, Ease::None));
    a.tick(0.5);
    a.pause(A);
    let held = a.num(A, Prop::Y);
    run(&mut a, 2.0);
    assert_eq!(a.num(A, Prop::Y), held);

    a.resume(A);
    run(&mut a, 1.0);
    assert_eq!(a.num(A, Prop::Y), 0.0);
}

#[test]
fn dirty_targets_are_reported_once_in_id_order() {
    let mut a = Animator::new();
    a.set(B, Prop::Opacity, Value::Num(0.5));
    a.set(A, Prop::Opacity, Value::Num(0.5));
    a.set(B, Prop::Y, Value::Num(1.0));
    assert_eq!(a.take_dirty(), vec![A, B]);
    assert!(a.take_dirty().is_empty());
}
