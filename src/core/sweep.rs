// Idle light-sweep scheduler.
//
// A two-phase repeating timer: armed (waiting to start a sweep) and
// playing (sweep visible, waiting to end), gated by a suppression
// predicate derived from the rest of the page state. The scheduler never
// owns platform timers; every operation returns the timer commands the
// binding must execute, and a single `PendingTimer` field makes "at most
// one pending timer, role unambiguous" true by construction.

use smallvec::SmallVec;

/// Timer commands for the binding. Arming a role implies replacing any
/// previous timer of that role.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SweepAction {
    ArmStart { delay_ms: u32 },
    CancelStart,
    ArmEnd { duration_ms: u32 },
    CancelEnd,
}

pub type SweepActions = SmallVec<[SweepAction; 2]>;

/// Which timer the binding currently holds on our behalf.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PendingTimer {
    None,
    Start,
    End,
}

/// Snapshot of everything that blocks the sweep.
#[derive(Clone, Copy, Debug, Default)]
pub struct SuppressionInputs {
    pub tilt_active: bool,
    pub input_focused: bool,
    pub input_nonempty: bool,
    pub verify_idle: bool,
}

/// The level-triggered gate: any interaction, typed text, or an in-flight
/// verification keeps the sweep away.
#[inline]
pub fn is_suppressed(inputs: &SuppressionInputs) -> bool {
    inputs.tilt_active || inputs.input_focused || inputs.input_nonempty || !inputs.verify_idle
}

#[derive(Clone, Copy, Debug)]
pub struct SweepTiming {
    /// Delay before the very first sweep; longer than the repeat delay.
    pub initial_delay_ms: u32,
    /// Steady-state delay between sweeps.
    pub repeat_delay_ms: u32,
    /// How long one sweep stays visible.
    pub duration_ms: u32,
}

#[derive(Clone, Debug)]
pub struct IdleSweep {
    timing: SweepTiming,
    active: bool,
    suppressed: bool,
    reduced_motion: bool,
    pending: PendingTimer,
}

impl IdleSweep {
    pub fn new(timing: SweepTiming) -> Self {
        Self {
            timing,
            active: false,
            suppressed: false,
            reduced_motion: false,
            pending: PendingTimer::None,
        }
    }

    /// Whether the sweep animation is visible right now.
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_suppressed(&self) -> bool {
        self.suppressed
    }

    pub fn pending(&self) -> PendingTimer {
        self.pending
    }

    /// Initial scheduling. Under reduced motion nothing is ever armed.
    pub fn mount(&mut self, reduced_motion: bool) -> SweepActions {
        let mut actions = SweepActions::new();
        self.reduced_motion = reduced_motion;
        if reduced_motion {
            return actions;
        }
        self.pending = PendingTimer::Start;
        actions.push(SweepAction::ArmStart {
            delay_ms: self.timing.initial_delay_ms,
        });
        actions
    }

    /// Level change of the suppression predicate. A rising edge cancels a
    /// pending start timer but lets a playing sweep finish; a falling edge
    /// re-arms only from the fully idle state.
    pub fn set_suppressed(&mut self, suppressed: bool) -> SweepActions {
        let mut actions = SweepActions::new();
        if suppressed == self.suppressed {
            return actions;
        }
        self.suppressed = suppressed;
        if suppressed {
            if self.pending == PendingTimer::Start {
                self.pending = PendingTimer::None;
                actions.push(SweepAction::CancelStart);
            }
        } else if !self.active && self.pending == PendingTimer::None && !self.reduced_motion {
            self.pending = PendingTimer::Start;
            actions.push(SweepAction::ArmStart {
                delay_ms: self.timing.repeat_delay_ms,
            });
        }
        actions
    }

    /// Live change of the reduced-motion preference. Turning it on
    /// hard-stops: whatever is pending gets cancelled and an active sweep
    /// is cleared immediately. Turning it off re-arms unless suppressed.
    pub fn set_reduced_motion(&mut self, reduced_motion: bool) -> SweepActions {
        let mut actions = SweepActions::new();
        if reduced_motion == self.reduced_motion {
            return actions;
        }
        self.reduced_motion = reduced_motion;
        if reduced_motion {
            match self.pending {
                PendingTimer::Start => actions.push(SweepAction::CancelStart),
                PendingTimer::End => actions.push(SweepAction::CancelEnd),
                PendingTimer::None => {}
            }
            self.pending = PendingTimer::None;
            self.active = false;
        } else if !self.suppressed && !self.active {
            self.pending = PendingTimer::Start;
            actions.push(SweepAction::ArmStart {
                delay_ms: self.timing.repeat_delay_ms,
            });
        }
        actions
    }

    /// Start timer fired. Suppression rising while armed cancels the timer,
    /// so a fire under suppression means the cancel raced the callback;
    /// stay idle and let the falling edge re-arm.
    pub fn start_fired(&mut self) -> SweepActions {
        let mut actions = SweepActions::new();
        self.pending = PendingTimer::None;
        if self.suppressed || self.reduced_motion {
            return actions;
        }
        self.active = true;
        self.pending = PendingTimer::End;
        actions.push(SweepAction::ArmEnd {
            duration_ms: self.timing.duration_ms,
        });
        actions
    }

    /// End timer fired: the sweep finished playing. Re-arm with the
    /// steady-state delay unless something now blocks it.
    pub fn end_fired(&mut self) -> SweepActions {
        let mut actions = SweepActions::new();
        self.pending = PendingTimer::None;
        self.active = false;
        if !self.suppressed && !self.reduced_motion {
            self.pending = PendingTimer::Start;
            actions.push(SweepAction::ArmStart {
                delay_ms: self.timing.repeat_delay_ms,
            });
        }
        actions
    }

    /// Teardown: cancel whatever is outstanding so nothing fires into a
    /// disposed view.
    pub fn unmount(&mut self) -> SweepActions {
        let mut actions = SweepActions::new();
        match self.pending {
            PendingTimer::Start => actions.push(SweepAction::CancelStart),
            PendingTimer::End => actions.push(SweepAction::CancelEnd),
            PendingTimer::None => {}
        }
        self.pending = PendingTimer::None;
        self.active = false;
        actions
    }
}
