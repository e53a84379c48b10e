#![cfg(target_arch = "wasm32")]
//! Gift voucher redemption page.
//!
//! The pure presentation logic (verification lifecycle, tilt tracking,
//! idle-sweep scheduling, timing table) lives in `core` and is tested
//! natively; everything else in this crate binds that logic to the DOM.

use crate::core::{
    is_suppressed, IdleSweep, Phase, SuppressionInputs, SweepAction, SweepActions, SweepTiming,
    TiltTracker, TimingConfig, Verification,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod audio;
mod core;
mod dom;
mod events;
mod timers;

/// Everything the page owns, shared across event closures behind one `Rc`.
/// Single-threaded by construction; interior mutability only.
pub(crate) struct Page {
    pub dom: dom::PageDom,
    pub timing: TimingConfig,
    pub verify: RefCell<Verification>,
    pub tilt: RefCell<TiltTracker>,
    pub sweep: RefCell<IdleSweep>,
    pub input_focused: Cell<bool>,
    pub orientation_requested: Cell<bool>,
    pub sounds: audio::OutcomeSounds,
    pub subs: RefCell<events::Subscriptions>,
    // Timer slots. Replacing or taking a slot cancels the old timeout;
    // slots holding an already-fired timeout are inert.
    pub start_timer: RefCell<Option<timers::Timeout>>,
    pub end_timer: RefCell<Option<timers::Timeout>>,
    pub outcome_timer: RefCell<Option<timers::Timeout>>,
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("gift-voucher page starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let page_dom = dom::PageDom::locate(&document)?;

    let timing = TimingConfig::default();
    page_dom.apply_timing(&timing);

    let sweep_timing = SweepTiming {
        initial_delay_ms: timing.sweep_initial.delay_ms,
        repeat_delay_ms: timing.sweep_repeat.delay_ms,
        duration_ms: timing.sweep.duration_ms,
    };

    let page = Rc::new(Page {
        dom: page_dom,
        timing,
        verify: RefCell::new(Verification::new()),
        tilt: RefCell::new(TiltTracker::new()),
        sweep: RefCell::new(IdleSweep::new(sweep_timing)),
        input_focused: Cell::new(false),
        orientation_requested: Cell::new(false),
        sounds: audio::OutcomeSounds::new(),
        subs: RefCell::new(events::Subscriptions::new()),
        start_timer: RefCell::new(None),
        end_timer: RefCell::new(None),
        outcome_timer: RefCell::new(None),
    });

    events::wire(&page);
    wire_teardown(&page);

    let actions = page
        .sweep
        .borrow_mut()
        .mount(events::media::prefers_reduced_motion());
    apply_sweep_actions(&page, actions);
    render(&page);
    Ok(())
}

/// Repaint from the current state snapshot.
pub(crate) fn render(page: &Page) {
    let verify = page.verify.borrow();
    let tilt = page.tilt.borrow();
    let sweep_active = page.sweep.borrow().is_active();
    page.dom.render(&verify, &tilt, sweep_active);
}

/// Recompute the sweep suppression gate from the single source-of-truth
/// snapshot and repaint. Runs after every event the page handles.
pub(crate) fn sync(page: &Rc<Page>) {
    let inputs = {
        let verify = page.verify.borrow();
        let tilt = page.tilt.borrow();
        SuppressionInputs {
            tilt_active: tilt.is_hovering(),
            input_focused: page.input_focused.get(),
            input_nonempty: !verify.trimmed_input().is_empty(),
            verify_idle: verify.phase() == Phase::Idle,
        }
    };
    let actions = page
        .sweep
        .borrow_mut()
        .set_suppressed(is_suppressed(&inputs));
    apply_sweep_actions(page, actions);
    render(page);
}

/// Execute the scheduler's timer commands. The fired callbacks leave their
/// own slot in place (a closure cannot drop itself mid-call); stale
/// handles are cleared by the next replacement.
pub(crate) fn apply_sweep_actions(page: &Rc<Page>, actions: SweepActions) {
    for action in actions {
        match action {
            SweepAction::ArmStart { delay_ms } => {
                let p = page.clone();
                *page.start_timer.borrow_mut() = timers::Timeout::new(delay_ms, move || {
                    let acts = p.sweep.borrow_mut().start_fired();
                    apply_sweep_actions(&p, acts);
                    render(&p);
                });
            }
            SweepAction::CancelStart => {
                page.start_timer.borrow_mut().take();
            }
            SweepAction::ArmEnd { duration_ms } => {
                let p = page.clone();
                *page.end_timer.borrow_mut() = timers::Timeout::new(duration_ms, move || {
                    let acts = p.sweep.borrow_mut().end_fired();
                    apply_sweep_actions(&p, acts);
                    render(&p);
                });
            }
            SweepAction::CancelEnd => {
                page.end_timer.borrow_mut().take();
            }
        }
    }
}

/// Submission path: run the machine, and when it asks, arm the single
/// delayed outcome callback. `Loading` blocks resubmission, so at most one
/// outcome timer is ever pending.
pub(crate) fn begin_verification(page: &Rc<Page>) {
    let arm = page.verify.borrow_mut().submit();
    if arm {
        let p = page.clone();
        *page.outcome_timer.borrow_mut() =
            timers::Timeout::new(page.timing.loading.delay_ms, move || {
                let cue = p.verify.borrow_mut().resolve();
                if let Some(cue) = cue {
                    p.sounds.play(cue);
                }
                sync(&p);
            });
    }
    sync(page);
}

/// Teardown on pagehide: drop every subscription and cancel the sweep
/// timers so nothing fires into a disposed view. The outcome timer is
/// abandoned with the rest; it has no effect once the page is gone. This
/// one listener stays registered for the page's whole life, so it is the
/// single deliberate `forget`.
fn wire_teardown(page: &Rc<Page>) {
    let Some(window) = web::window() else {
        return;
    };
    let p = page.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
        let actions = p.sweep.borrow_mut().unmount();
        apply_sweep_actions(&p, actions);
        p.outcome_timer.borrow_mut().take();
        p.subs.borrow_mut().clear();
        log::info!("page teardown complete");
    }) as Box<dyn FnMut(_)>);
    let _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    closure.forget();
}
