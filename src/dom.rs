use crate::core::{Phase, TiltTracker, TimingConfig, Verification};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

fn require<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{id}"))?
        .dyn_into::<T>()
        .map_err(|_| anyhow::anyhow!("#{id} has unexpected element type"))
}

/// All the elements the page ever touches, resolved once at init.
pub struct PageDom {
    /// Page root; timing custom properties live here.
    pub root: web::HtmlElement,
    /// Card perspective wrapper; carries the error styling hook.
    pub perspective: web::Element,
    /// Tilt-tracked scene; ratio custom properties and hover/parallax flags.
    pub scene: web::HtmlElement,
    /// Flip inner; flipped on success.
    pub flip: web::Element,
    /// Card face title text.
    pub title: web::Element,
    /// Card stack; the idle sweep flag lives here.
    pub stack: web::Element,
    /// Activation control reveal container.
    pub reveal: web::Element,
    pub form: web::HtmlFormElement,
    pub input: web::HtmlInputElement,
    pub button: web::HtmlButtonElement,
}

impl PageDom {
    pub fn locate(document: &web::Document) -> anyhow::Result<Self> {
        Ok(Self {
            root: require(document, "gift-card-page")?,
            perspective: require(document, "card-perspective")?,
            scene: require(document, "card-scene")?,
            flip: require(document, "card-flip")?,
            title: require(document, "card-title")?,
            stack: require(document, "card-stack")?,
            reveal: require(document, "activate-reveal")?,
            form: require(document, "redemption-form")?,
            input: require(document, "voucher-field")?,
            button: require(document, "verify-button")?,
        })
    }

    /// Write the timing table as CSS custom properties on the page root:
    /// `--<phase>-delay`, `--<phase>-duration` and, where present,
    /// `--<phase>-ease`. The stylesheet consumes these for the flip/reveal/
    /// fade/sweep choreography.
    pub fn apply_timing(&self, timing: &TimingConfig) {
        let style = self.root.style();
        for (name, phase) in timing.entries() {
            let _ = style.set_property(&format!("--{name}-delay"), &format!("{}ms", phase.delay_ms));
            let _ = style.set_property(
                &format!("--{name}-duration"),
                &format!("{}ms", phase.duration_ms),
            );
            if let Some(ease) = &phase.ease {
                let _ = style.set_property(&format!("--{name}-ease"), &ease.css());
            }
        }
    }

    /// Apply the current state snapshot to the markup. Idempotent; called
    /// after every event.
    pub fn render(&self, verify: &Verification, tilt: &TiltTracker, sweep_active: bool) {
        self.title.set_text_content(Some(verify.card_text()));

        let is_success = verify.phase() == Phase::Success;
        let is_error = verify.phase() == Phase::Error;
        let _ = self.flip.class_list().toggle_with_force("is-flipped", is_success);
        let _ = self.reveal.class_list().toggle_with_force("is-open", is_success);
        let _ = self
            .perspective
            .class_list()
            .toggle_with_force("is-error", is_error);
        let _ = self.title.class_list().toggle_with_force("is-error", is_error);

        // Avoid rewriting the field on every repaint; that would reset the
        // caret mid-typing.
        if self.input.value() != verify.raw_input() {
            self.input.set_value(verify.raw_input());
        }
        self.input.set_disabled(verify.input_disabled());
        self.button.set_disabled(verify.submit_disabled());

        let scene_style = self.scene.style();
        let ratio = tilt.ratio();
        let _ = scene_style.set_property("--ratio-x", &format!("{:.4}", ratio.x));
        let _ = scene_style.set_property("--ratio-y", &format!("{:.4}", ratio.y));
        let _ = self
            .scene
            .set_attribute("data-active", bool_attr(tilt.is_hovering()));
        let _ = self
            .scene
            .set_attribute("data-parallax", bool_attr(tilt.is_settled()));

        let _ = self.stack.set_attribute("data-sweep", bool_attr(sweep_active));
    }
}

#[inline]
fn bool_attr(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
