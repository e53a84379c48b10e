use crate::Page;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use web_sys as web;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
const COARSE_POINTER_QUERY: &str = "(pointer: coarse)";

fn query(q: &str) -> Option<web::MediaQueryList> {
    web::window()?.match_media(q).ok().flatten()
}

pub fn prefers_reduced_motion() -> bool {
    query(REDUCED_MOTION_QUERY).map(|m| m.matches()).unwrap_or(false)
}

/// Touch-first devices are the only ones where the orientation path makes
/// sense.
pub fn coarse_pointer() -> bool {
    query(COARSE_POINTER_QUERY).map(|m| m.matches()).unwrap_or(false)
}

/// Live reduced-motion changes drive the sweep scheduler directly; the
/// suppression gate is unrelated to this preference.
pub fn wire(page: &Rc<Page>) {
    let Some(mql) = query(REDUCED_MOTION_QUERY) else {
        return;
    };
    let p = page.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MediaQueryListEvent| {
        let actions = p.sweep.borrow_mut().set_reduced_motion(ev.matches());
        crate::apply_sweep_actions(&p, actions);
        crate::render(&p);
    }) as Box<dyn FnMut(_)>);
    page.subs.borrow_mut().add(mql.as_ref(), "change", closure);
}
