// Host-side tests for the hero glitch effect.

use folio_core::constants::{GLITCH_DELAY, GLITCH_SYMBOLS, GLITCH_WINDOW};
use folio_core::glitch::scramble;
use folio_core::{GlitchEffect, GlitchFrame};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn run_to_end(effect: &mut GlitchEffect, rng: &mut StdRng, dt: f32) -> Vec<GlitchFrame> {
    let mut frames = Vec::new();
    for _ in 0..1000 {
        let frame = effect.advance(dt, rng);
        let done = frame == GlitchFrame::Done;
        frames.push(frame);
        if done {
            break;
        }
    }
    frames
}

#[test]
fn scramble_keeps_spaces_and_length() {
    let symbols: Vec<char> = GLITCH_SYMBOLS.chars().collect();
    let mut rng = StdRng::seed_from_u64(7);
    let text = "CA Khushi  Vijay";
    for _ in 0..50 {
        let out = scramble(text, &symbols, &mut rng);
        assert_eq!(out.chars().count(), text.chars().count());
        for (a, b) in text.chars().zip(out.chars()) {
            if a == ' ' {
                assert_eq!(b, ' ');
            } else {
                assert!(symbols.contains(&b), "unexpected symbol {b:?}");
            }
        }
    }
}

#[test]
fn scramble_with_no_symbols_is_identity() {
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(scramble("abc", &[], &mut rng), "abc");
}

#[test]
fn effect_waits_then_scrambles_then_restores_once() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut effect = GlitchEffect::new("  CA Khushi Vijay \n", GLITCH_SYMBOLS, GLITCH_DELAY, GLITCH_WINDOW);
    assert_eq!(effect.original(), "CA Khushi Vijay");

    assert_eq!(effect.advance(0.5, &mut rng), GlitchFrame::Pending);
    assert!(!effect.is_running());

    match effect.advance(0.6, &mut rng) {
        GlitchFrame::Scrambled(text) => assert_eq!(text.chars().count(), 15),
        other => panic!("expected scrambled frame, got {other:?}"),
    }
    assert!(effect.is_running());

    assert_eq!(
        effect.advance(0.5, &mut rng),
        GlitchFrame::Restored("CA Khushi Vijay".to_string())
    );
    assert!(effect.is_finished());
    assert_eq!(effect.advance(10.0, &mut rng), GlitchFrame::Done);
}

#[test]
fn effect_always_restores_original_text() {
    let samples = ["CA Khushi Vijay", "x", "a b c", "Café Ünïcode ✓", "   "];
    for (seed, text) in samples.iter().enumerate() {
        let mut rng = StdRng::seed_from_u64(seed as u64);
        let mut effect = GlitchEffect::new(text, GLITCH_SYMBOLS, GLITCH_DELAY, GLITCH_WINDOW);
        let frames = run_to_end(&mut effect, &mut rng, 1.0 / 60.0);

        let restored: Vec<&GlitchFrame> = frames
            .iter()
            .filter(|f| matches!(f, GlitchFrame::Restored(_)))
            .collect();
        assert_eq!(restored.len(), 1, "restore must be reported exactly once");
        assert_eq!(*restored[0], GlitchFrame::Restored(text.trim().to_string()));

        let scrambled = frames
            .iter()
            .filter(|f| matches!(f, GlitchFrame::Scrambled(_)))
            .count();
        // ~0.4s of 60Hz frames
        assert!((20..=26).contains(&scrambled), "scrambled frames: {scrambled}");
    }
}
