// Voucher verification state machine.
//
// Pure state + transition rules; the only asynchronous piece is a single
// delayed outcome callback that the caller arms when `submit` asks for it.
// Nothing here touches the platform, so the whole machine runs natively
// under the host-side tests.

/// The one code that simulates an expired voucher. Every other non-empty
/// code verifies successfully.
pub const REJECTED_CODE: &str = "AA123";

// Card face copy, shared with the rendering layer.
pub const VERIFYING_TEXT: &str = "جاري التحقق";
pub const EXPIRED_TEXT: &str = "انتهت صلاحية هذا الرمز";
pub const PLACEHOLDER_TEXT: &str = "قسيمـــة هديـــة";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Error,
    Success,
}

/// Sound the binding should trigger when an outcome lands. Playback (and
/// playback failure) is entirely the binding's problem.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoundCue {
    Success,
    Failure,
}

#[derive(Clone, Debug)]
pub struct Verification {
    raw_input: String,
    phase: Phase,
    resolved_code: String,
    // Code captured at submit time; outcomes resolve against this even if
    // the input gets edited while loading.
    pending_code: Option<String>,
}

impl Default for Verification {
    fn default() -> Self {
        Self::new()
    }
}

impl Verification {
    pub fn new() -> Self {
        Self {
            raw_input: String::new(),
            phase: Phase::Idle,
            resolved_code: String::new(),
            pending_code: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Exactly what the field should display (already upper-cased).
    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }

    /// Canonical code value used for every comparison.
    pub fn trimmed_input(&self) -> &str {
        self.raw_input.trim()
    }

    pub fn resolved_code(&self) -> &str {
        &self.resolved_code
    }

    /// Terminal condition: the displayed success still matches the typed
    /// code, so resubmitting it would be meaningless.
    pub fn is_locked(&self) -> bool {
        self.phase == Phase::Success && self.trimmed_input() == self.resolved_code
    }

    /// Keystroke path. Normalizes to upper-case; any edit outside `Loading`
    /// that moves the trimmed value away from the resolved code drops the
    /// machine back to `Idle`.
    pub fn edit_input(&mut self, value: &str) {
        self.raw_input = value.to_uppercase();
        if self.phase != Phase::Loading && self.trimmed_input() != self.resolved_code {
            self.phase = Phase::Idle;
        }
    }

    /// Form submission. Returns `true` when the caller must arm the single
    /// delayed outcome timer (`TimingConfig::loading.delay_ms`).
    pub fn submit(&mut self) -> bool {
        if self.phase == Phase::Loading {
            return false;
        }
        let code = self.trimmed_input().to_owned();
        if code.is_empty() {
            self.phase = Phase::Idle;
            return false;
        }
        if self.is_locked() {
            return false;
        }
        self.pending_code = Some(code);
        self.phase = Phase::Loading;
        true
    }

    /// Delayed outcome callback. Fires at most once per submission because
    /// `Loading` blocks resubmission while the timer is pending.
    pub fn resolve(&mut self) -> Option<SoundCue> {
        let code = self.pending_code.take()?;
        let cue = if code == REJECTED_CODE {
            self.phase = Phase::Error;
            SoundCue::Failure
        } else {
            self.phase = Phase::Success;
            SoundCue::Success
        };
        self.resolved_code = code;
        Some(cue)
    }

    /// Copy for the card face: verifying literal while loading, the expired
    /// literal on error, otherwise the typed code (placeholder when empty).
    pub fn card_text(&self) -> &str {
        match self.phase {
            Phase::Loading => VERIFYING_TEXT,
            Phase::Error => EXPIRED_TEXT,
            _ => {
                let code = self.trimmed_input();
                if code.is_empty() {
                    PLACEHOLDER_TEXT
                } else {
                    code
                }
            }
        }
    }

    // Both controls are blocked during Loading; submit additionally while
    // locked.
    pub fn input_disabled(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn submit_disabled(&self) -> bool {
        self.phase == Phase::Loading || self.is_locked()
    }
}
