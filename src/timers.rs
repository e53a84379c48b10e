use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// One-shot timeout that owns both the JS timer id and the closure backing
/// it. Dropping the handle clears the timeout, so storing it in an
/// `Option` slot gives "replace = cancel + arm" for free.
pub struct Timeout {
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Timeout {
    pub fn new(delay_ms: u32, mut callback: impl FnMut() + 'static) -> Option<Timeout> {
        let window = web::window()?;
        let closure = Closure::wrap(Box::new(move || callback()) as Box<dyn FnMut()>);
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            delay_ms as i32,
        ) {
            Ok(id) => Some(Timeout {
                id,
                _closure: closure,
            }),
            Err(e) => {
                log::error!("setTimeout error: {:?}", e);
                None
            }
        }
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        // Clearing an already-fired id is harmless.
        if let Some(window) = web::window() {
            window.clear_timeout_with_handle(self.id);
        }
    }
}
