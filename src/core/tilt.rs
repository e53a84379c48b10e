// Pointer/orientation tilt tracking for the card scene.
//
// Two input sources write the same normalized ratio: direct pointer
// position over the card, and (on touch devices, after a permission grant)
// ambient device orientation. The ratio is consumed downstream as a 0..1
// position pair, 0.5 meaning centered.

use glam::Vec2;

/// Orientation axes are clamped to this many degrees either side before
/// mapping onto [0, 1].
pub const ORIENTATION_CLAMP_DEG: f32 = 24.0;

/// The CSS property whose transition-end marks the card as settled.
pub const SETTLE_PROPERTY: &str = "transform";

#[derive(Clone, Debug)]
pub struct TiltTracker {
    ratio: Vec2,
    hovering: bool,
    settled: bool,
    orientation_active: bool,
}

impl Default for TiltTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl TiltTracker {
    pub fn new() -> Self {
        Self {
            ratio: Vec2::splat(0.5),
            hovering: false,
            settled: false,
            orientation_active: false,
        }
    }

    pub fn ratio(&self) -> Vec2 {
        self.ratio
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// Settled means the arrival transition finished while still hovering;
    /// the scene now also reacts to ambient motion (parallax mode).
    pub fn is_settled(&self) -> bool {
        self.settled
    }

    pub fn is_orientation_active(&self) -> bool {
        self.orientation_active
    }

    pub fn pointer_enter(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.hovering = true;
        self.settled = false;
        self.ratio = pointer_ratio(x, y, width, height);
    }

    pub fn pointer_move(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.ratio = pointer_ratio(x, y, width, height);
    }

    /// Leaving the card drops out of both tracking and parallax and
    /// recenters. Once orientation samples drive the ratio the pointer no
    /// longer owns this state, so leave becomes a no-op.
    pub fn pointer_leave(&mut self) {
        if self.orientation_active {
            return;
        }
        self.hovering = false;
        self.settled = false;
        self.ratio = Vec2::splat(0.5);
    }

    /// Transition-end from the card's own rotation transform. The binding
    /// already filters out bubbled events from children; property filtering
    /// happens here.
    pub fn transition_end(&mut self, property: &str) {
        if property != SETTLE_PROPERTY {
            return;
        }
        if self.hovering {
            self.settled = true;
        }
    }

    /// Accepted orientation sample, both axes in degrees. Sensor input has
    /// no arrival transient, so it enters parallax mode immediately and
    /// latches until unmount.
    pub fn orientation_sample(&mut self, gamma: Option<f64>, beta: Option<f64>) {
        let (Some(gamma), Some(beta)) = (gamma, beta) else {
            return;
        };
        self.ratio = Vec2::new(
            orientation_ratio(gamma as f32),
            orientation_ratio(beta as f32),
        );
        self.orientation_active = true;
        self.hovering = true;
        self.settled = true;
    }
}

/// Element-relative pointer position to a 0..1 ratio pair. The centering
/// and re-halving cancel algebraically; the clamp in the middle is what
/// matters, and the stylesheet consumes the result as a 0..1 position.
#[inline]
fn pointer_ratio(x: f32, y: f32, width: f32, height: f32) -> Vec2 {
    if width <= 0.0 || height <= 0.0 {
        return Vec2::splat(0.5);
    }
    let u = (x / width).clamp(0.0, 1.0);
    let v = (y / height).clamp(0.0, 1.0);
    let centered_x = (u - 0.5) * 2.0;
    let centered_y = (v - 0.5) * 2.0;
    Vec2::new(0.5 + centered_x * 0.5, 0.5 + centered_y * 0.5)
}

#[inline]
fn orientation_ratio(degrees: f32) -> f32 {
    let clamped = degrees.clamp(-ORIENTATION_CLAMP_DEG, ORIENTATION_CLAMP_DEG);
    0.5 + clamped / (ORIENTATION_CLAMP_DEG * 2.0)
}
