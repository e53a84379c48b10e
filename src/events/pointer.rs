use crate::events::{self, orientation};
use crate::Page;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use web_sys as web;

/// Pointer position relative to the scene's bounding box, in CSS px.
#[inline]
fn scene_relative(ev: &web::PointerEvent, scene: &web::HtmlElement) -> (f32, f32, f32, f32) {
    let rect = scene.get_bounding_client_rect();
    let x = ev.client_x() as f32 - rect.left() as f32;
    let y = ev.client_y() as f32 - rect.top() as f32;
    (x, y, rect.width() as f32, rect.height() as f32)
}

pub fn wire(page: &Rc<Page>) {
    let scene = page.dom.scene.clone();

    // pointerenter: start tracking from the entry position
    {
        let p = page.clone();
        let scene_t = scene.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let (x, y, w, h) = scene_relative(&ev, &scene_t);
            p.tilt.borrow_mut().pointer_enter(x, y, w, h);
            crate::sync(&p);
        }) as Box<dyn FnMut(_)>);
        page.subs.borrow_mut().add(scene.as_ref(), "pointerenter", closure);
    }

    // pointermove: follow
    {
        let p = page.clone();
        let scene_t = scene.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let (x, y, w, h) = scene_relative(&ev, &scene_t);
            p.tilt.borrow_mut().pointer_move(x, y, w, h);
            crate::sync(&p);
        }) as Box<dyn FnMut(_)>);
        page.subs.borrow_mut().add(scene.as_ref(), "pointermove", closure);
    }

    // pointerleave: back to rest
    {
        let p = page.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            p.tilt.borrow_mut().pointer_leave();
            crate::sync(&p);
        }) as Box<dyn FnMut(_)>);
        page.subs.borrow_mut().add(scene.as_ref(), "pointerleave", closure);
    }

    // transitionend: the scene's own transform transition completing while
    // hovered is what enters parallax mode. Bubbled events from card
    // children are dropped here; the property filter lives in the tracker.
    {
        let p = page.clone();
        let scene_t = scene.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::TransitionEvent| {
            if !events::is_self_target(ev.as_ref(), &scene_t) {
                return;
            }
            p.tilt.borrow_mut().transition_end(&ev.property_name());
            crate::sync(&p);
        }) as Box<dyn FnMut(_)>);
        page.subs.borrow_mut().add(scene.as_ref(), "transitionend", closure);
    }

    // pointerdown: the first press is the user gesture mobile sensor APIs
    // require before an orientation permission prompt may be shown.
    {
        let p = page.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            if p.orientation_requested.get() {
                return;
            }
            p.orientation_requested.set(true);
            orientation::request_and_subscribe(p.clone());
        }) as Box<dyn FnMut(_)>);
        page.subs.borrow_mut().add(scene.as_ref(), "pointerdown", closure);
    }
}
