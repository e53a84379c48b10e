// Host-side tests for the voucher verification state machine.
// The main crate is wasm-only, so we include the pure core module directly.

#![allow(dead_code)]
mod verify {
    include!("../src/core/verify.rs");
}

use verify::*;

#[test]
fn fresh_machine_is_idle_and_empty() {
    let v = Verification::new();
    assert_eq!(v.phase(), Phase::Idle);
    assert_eq!(v.trimmed_input(), "");
    assert_eq!(v.resolved_code(), "");
    assert_eq!(v.card_text(), PLACEHOLDER_TEXT);
    assert!(!v.input_disabled());
    assert!(!v.submit_disabled());
}

#[test]
fn input_is_upper_cased_and_trimmed_for_comparison() {
    let mut v = Verification::new();
    v.edit_input("  welcome7  ");
    assert_eq!(v.raw_input(), "  WELCOME7  ");
    assert_eq!(v.trimmed_input(), "WELCOME7");
    assert_eq!(v.card_text(), "WELCOME7");
}

#[test]
fn non_rejected_code_resolves_to_success() {
    let mut v = Verification::new();
    v.edit_input("welcome7");
    assert!(v.submit(), "submit must ask for the outcome timer");
    assert_eq!(v.phase(), Phase::Loading);
    assert_eq!(v.card_text(), VERIFYING_TEXT);
    assert!(v.input_disabled());
    assert!(v.submit_disabled());

    assert_eq!(v.resolve(), Some(SoundCue::Success));
    assert_eq!(v.phase(), Phase::Success);
    assert_eq!(v.resolved_code(), "WELCOME7");
    assert!(v.is_locked());
    // the successful submit control stays blocked while locked
    assert!(v.submit_disabled());
    assert!(!v.input_disabled());
}

#[test]
fn rejected_code_resolves_to_error_with_failure_cue() {
    let mut v = Verification::new();
    v.edit_input("aa123");
    assert!(v.submit());

    assert_eq!(v.resolve(), Some(SoundCue::Failure));
    assert_eq!(v.phase(), Phase::Error);
    assert_eq!(v.resolved_code(), REJECTED_CODE);
    assert_eq!(v.card_text(), EXPIRED_TEXT);
    assert!(!v.is_locked());
}

#[test]
fn outcome_fires_at_most_once() {
    let mut v = Verification::new();
    v.edit_input("GIFT1");
    assert!(v.submit());
    assert_eq!(v.resolve(), Some(SoundCue::Success));
    assert_eq!(v.resolve(), None);
}

#[test]
fn submit_while_loading_is_a_noop() {
    let mut v = Verification::new();
    v.edit_input("GIFT1");
    assert!(v.submit());
    assert!(!v.submit(), "no second timer while loading");
    assert_eq!(v.phase(), Phase::Loading);
}

#[test]
fn empty_or_whitespace_submission_returns_to_idle_without_timer() {
    let mut v = Verification::new();
    assert!(!v.submit());
    assert_eq!(v.phase(), Phase::Idle);

    v.edit_input("   ");
    assert!(!v.submit());
    assert_eq!(v.phase(), Phase::Idle);
    assert_eq!(v.resolve(), None);
}

#[test]
fn resubmitting_the_locked_code_is_a_noop() {
    let mut v = Verification::new();
    v.edit_input("WELCOME7");
    assert!(v.submit());
    v.resolve();
    assert!(v.is_locked());
    assert!(!v.submit());
    assert_eq!(v.phase(), Phase::Success);
}

#[test]
fn editing_away_from_the_resolved_code_resets_to_idle() {
    let mut v = Verification::new();
    v.edit_input("WELCOME7");
    assert!(v.submit());
    v.resolve();

    v.edit_input("WELCOME8");
    assert_eq!(v.phase(), Phase::Idle);
    assert!(!v.is_locked());
    assert!(!v.submit_disabled());

    // typing the resolved code back does not resurrect the success phase
    v.edit_input("WELCOME7");
    assert_eq!(v.phase(), Phase::Idle);
}

#[test]
fn error_phase_clears_on_edit() {
    let mut v = Verification::new();
    v.edit_input("AA123");
    assert!(v.submit());
    v.resolve();
    assert_eq!(v.phase(), Phase::Error);

    v.edit_input("AA124");
    assert_eq!(v.phase(), Phase::Idle);
    assert_eq!(v.card_text(), "AA124");
}

#[test]
fn outcome_resolves_against_the_captured_code_despite_edits() {
    let mut v = Verification::new();
    v.edit_input("GOODCODE");
    assert!(v.submit());

    // edits while loading do not change the phase or the pending code
    v.edit_input("AA123");
    assert_eq!(v.phase(), Phase::Loading);

    assert_eq!(v.resolve(), Some(SoundCue::Success));
    assert_eq!(v.phase(), Phase::Success);
    assert_eq!(v.resolved_code(), "GOODCODE");
    // typed code differs from the resolved one, so the lock does not hold
    assert!(!v.is_locked());
}
