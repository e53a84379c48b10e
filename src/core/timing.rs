// Animation timing table.
//
// Write-once at construction; the rendering layer turns these into CSS
// custom properties and the schedulers read their delays from here. The
// values are the page's shipped defaults. A tuning UI, if one exists,
// must work on a clone, never on the table the page was built with.

/// 4-point cubic easing curve, the two inner control points of
/// `cubic-bezier(x1, y1, x2, y2)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier(pub [f32; 4]);

impl CubicBezier {
    /// The CSS serialization of this curve.
    pub fn css(&self) -> String {
        let [x1, y1, x2, y2] = self.0;
        format!("cubic-bezier({x1},{y1},{x2},{y2})")
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhaseTiming {
    pub delay_ms: u32,
    pub duration_ms: u32,
    pub ease: Option<CubicBezier>,
}

impl PhaseTiming {
    const fn new(delay_ms: u32, duration_ms: u32) -> Self {
        Self {
            delay_ms,
            duration_ms,
            ease: None,
        }
    }

    const fn with_ease(delay_ms: u32, duration_ms: u32, ease: CubicBezier) -> Self {
        Self {
            delay_ms,
            duration_ms,
            ease: Some(ease),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TimingConfig {
    /// Card flip once verification succeeds.
    pub flip: PhaseTiming,
    /// Activation control reveal, open and close directions.
    pub reveal_open: PhaseTiming,
    pub reveal_close: PhaseTiming,
    /// Activation button opacity fade, open and close directions.
    pub button_fade_open: PhaseTiming,
    pub button_fade_close: PhaseTiming,
    /// Fake verification delay (delay only, no visual duration).
    pub loading: PhaseTiming,
    /// Idle light sweep: first appearance, steady-state repeat, play time.
    pub sweep_initial: PhaseTiming,
    pub sweep_repeat: PhaseTiming,
    pub sweep: PhaseTiming,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            flip: PhaseTiming::with_ease(0, 800, CubicBezier([0.645, 0.045, 0.355, 1.0])),
            reveal_open: PhaseTiming::with_ease(800, 480, CubicBezier([0.22, 1.0, 0.36, 1.0])),
            reveal_close: PhaseTiming::with_ease(0, 360, CubicBezier([0.55, 0.0, 1.0, 0.45])),
            button_fade_open: PhaseTiming::new(1000, 320),
            button_fade_close: PhaseTiming::new(0, 150),
            loading: PhaseTiming::new(1200, 0),
            sweep_initial: PhaseTiming::new(9000, 0),
            sweep_repeat: PhaseTiming::new(5000, 0),
            sweep: PhaseTiming::new(0, 1800),
        }
    }
}

impl TimingConfig {
    /// Deterministic lookup by phase name.
    pub fn phase(&self, name: &str) -> Option<&PhaseTiming> {
        self.entries()
            .into_iter()
            .find_map(|(n, t)| (n == name).then_some(t))
    }

    /// Stable (name, timing) listing used by the rendering layer and by
    /// lookup. Order never changes at runtime.
    pub fn entries(&self) -> [(&'static str, &PhaseTiming); 9] {
        [
            ("flip", &self.flip),
            ("reveal-open", &self.reveal_open),
            ("reveal-close", &self.reveal_close),
            ("button-fade-open", &self.button_fade_open),
            ("button-fade-close", &self.button_fade_close),
            ("loading", &self.loading),
            ("sweep-initial", &self.sweep_initial),
            ("sweep-repeat", &self.sweep_repeat),
            ("sweep", &self.sweep),
        ]
    }
}
