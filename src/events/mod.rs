use crate::Page;
use std::any::Any;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub mod form;
pub mod media;
pub mod orientation;
pub mod pointer;

/// Listener registry: every subscription taken at mount is held here and
/// removed on teardown, so no handler outlives the page.
#[derive(Default)]
pub struct Subscriptions {
    subs: Vec<Sub>,
}

struct Sub {
    target: web::EventTarget,
    event: &'static str,
    func: js_sys::Function,
    // Keeps the closure backing `func` alive for the life of the listener.
    _keep: Box<dyn Any>,
}

impl Subscriptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<T>(
        &mut self,
        target: &web::EventTarget,
        event: &'static str,
        closure: Closure<dyn FnMut(T)>,
    ) where
        T: wasm_bindgen::convert::FromWasmAbi + 'static,
    {
        let func: js_sys::Function = closure.as_ref().unchecked_ref::<js_sys::Function>().clone();
        if let Err(e) = target.add_event_listener_with_callback(event, &func) {
            log::error!("addEventListener({}) failed: {:?}", event, e);
            return;
        }
        self.subs.push(Sub {
            target: target.clone(),
            event,
            func,
            _keep: Box::new(closure),
        });
    }

    pub fn clear(&mut self) {
        for sub in self.subs.drain(..) {
            let _ = sub
                .target
                .remove_event_listener_with_callback(sub.event, &sub.func);
        }
    }
}

/// Wire every mount-time listener. The orientation listener is not here:
/// it attaches lazily after the first press grants sensor permission.
pub fn wire(page: &Rc<Page>) {
    pointer::wire(page);
    form::wire(page);
    media::wire(page);
}

/// True when the event fired on `el` itself rather than bubbling up from a
/// descendant.
#[inline]
pub fn is_self_target(ev: &web::Event, el: &web::HtmlElement) -> bool {
    match ev.target() {
        Some(target) => {
            let target: wasm_bindgen::JsValue = target.into();
            let own: &wasm_bindgen::JsValue = el.as_ref();
            target == *own
        }
        None => false,
    }
}
