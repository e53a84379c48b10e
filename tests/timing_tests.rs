// Host-side tests for the animation timing table.
// The main crate is wasm-only, so we include the pure core module directly.

#![allow(dead_code)]
mod timing {
    include!("../src/core/timing.rs");
}

use timing::*;

#[test]
fn defaults_match_the_shipped_choreography() {
    let t = TimingConfig::default();
    assert_eq!(t.flip.duration_ms, 800);
    assert_eq!(t.reveal_open.delay_ms, 800);
    assert_eq!(t.reveal_open.duration_ms, 480);
    assert_eq!(t.reveal_close.duration_ms, 360);
    assert_eq!(t.button_fade_open.delay_ms, 1000);
    assert_eq!(t.button_fade_close.duration_ms, 150);
    assert_eq!(t.loading.delay_ms, 1200);
}

#[test]
fn flip_and_reveal_phases_carry_easing_curves() {
    let t = TimingConfig::default();
    assert_eq!(t.flip.ease, Some(CubicBezier([0.645, 0.045, 0.355, 1.0])));
    assert!(t.reveal_open.ease.is_some());
    assert!(t.reveal_close.ease.is_some());
    assert!(t.button_fade_open.ease.is_none());
}

#[test]
fn first_sweep_arrives_later_than_subsequent_ones() {
    let t = TimingConfig::default();
    assert!(t.sweep_initial.delay_ms > t.sweep_repeat.delay_ms);
    assert!(t.sweep.duration_ms > 0);
}

#[test]
fn lookup_by_name_is_deterministic() {
    let t = TimingConfig::default();
    assert_eq!(t.phase("flip"), Some(&t.flip));
    assert_eq!(t.phase("reveal-open"), Some(&t.reveal_open));
    assert_eq!(t.phase("sweep-repeat"), Some(&t.sweep_repeat));
    assert_eq!(t.phase("no-such-phase"), None);
}

#[test]
fn entries_cover_every_phase_with_unique_names() {
    let t = TimingConfig::default();
    let entries = t.entries();
    assert_eq!(entries.len(), 9);
    for (i, (name, _)) in entries.iter().enumerate() {
        for (other, _) in entries.iter().skip(i + 1) {
            assert_ne!(name, other);
        }
    }
}

#[test]
fn derivation_is_a_pure_function_of_the_config() {
    // applying the same table twice produces identical outputs
    let a = TimingConfig::default();
    let b = TimingConfig::default();
    assert_eq!(a, b);

    let first: Vec<String> = a
        .entries()
        .iter()
        .map(|(n, p)| {
            format!(
                "{n}:{}:{}:{}",
                p.delay_ms,
                p.duration_ms,
                p.ease.as_ref().map(|e| e.css()).unwrap_or_default()
            )
        })
        .collect();
    let second: Vec<String> = b
        .entries()
        .iter()
        .map(|(n, p)| {
            format!(
                "{n}:{}:{}:{}",
                p.delay_ms,
                p.duration_ms,
                p.ease.as_ref().map(|e| e.css()).unwrap_or_default()
            )
        })
        .collect();
    assert_eq!(first, second);
}

#[test]
fn bezier_css_serialization_is_stable() {
    let ease = CubicBezier([0.22, 1.0, 0.36, 1.0]);
    assert_eq!(ease.css(), "cubic-bezier(0.22,1,0.36,1)");
    assert_eq!(ease.css(), ease.css());
}
