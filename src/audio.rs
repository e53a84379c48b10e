use crate::core::SoundCue;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;
use web_sys as web;

const SUCCESS_SRC: &str = "/assets/figma/sr-sequence.mp3";
const FAILURE_SRC: &str = "/assets/figma/sr-error.mp3";

/// The two outcome sounds, created once at init so playback on resolve is a
/// rewind-and-play.
pub struct OutcomeSounds {
    success: Option<web::HtmlAudioElement>,
    failure: Option<web::HtmlAudioElement>,
    // Rejection handler reused across plays; autoplay denials land here.
    swallow: Closure<dyn FnMut(JsValue)>,
}

fn create_audio(src: &str) -> Option<web::HtmlAudioElement> {
    match web::HtmlAudioElement::new_with_src(src) {
        Ok(el) => Some(el),
        Err(e) => {
            log::warn!("audio element for {} unavailable: {:?}", src, e);
            None
        }
    }
}

impl OutcomeSounds {
    pub fn new() -> Self {
        Self {
            success: create_audio(SUCCESS_SRC),
            failure: create_audio(FAILURE_SRC),
            swallow: Closure::wrap(Box::new(|e: JsValue| {
                log::debug!("audio play rejected: {:?}", e);
            }) as Box<dyn FnMut(JsValue)>),
        }
    }

    /// Fire-and-forget: playback failure (autoplay policy, missing asset)
    /// must never reach the verification state.
    pub fn play(&self, cue: SoundCue) {
        let el = match cue {
            SoundCue::Success => &self.success,
            SoundCue::Failure => &self.failure,
        };
        if let Some(el) = el {
            el.set_current_time(0.0);
            if let Ok(promise) = el.play() {
                let _ = promise.catch(&self.swallow);
            }
        }
    }
}
