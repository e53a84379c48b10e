use crate::Page;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use web_sys as web;

pub fn wire(page: &Rc<Page>) {
    // keystrokes: normalize through the machine, repaint with the
    // upper-cased value
    {
        let p = page.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
            let value = p.dom.input.value();
            p.verify.borrow_mut().edit_input(&value);
            crate::sync(&p);
        }) as Box<dyn FnMut(_)>);
        page.subs
            .borrow_mut()
            .add(page.dom.input.as_ref(), "input", closure);
    }

    // submit: the page never navigates
    {
        let p = page.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            ev.prevent_default();
            crate::begin_verification(&p);
        }) as Box<dyn FnMut(_)>);
        page.subs
            .borrow_mut()
            .add(page.dom.form.as_ref(), "submit", closure);
    }

    // focus state feeds the sweep suppression gate
    {
        let p = page.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::FocusEvent| {
            p.input_focused.set(true);
            crate::sync(&p);
        }) as Box<dyn FnMut(_)>);
        page.subs
            .borrow_mut()
            .add(page.dom.input.as_ref(), "focus", closure);
    }
    {
        let p = page.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::FocusEvent| {
            p.input_focused.set(false);
            crate::sync(&p);
        }) as Box<dyn FnMut(_)>);
        page.subs
            .borrow_mut()
            .add(page.dom.input.as_ref(), "blur", closure);
    }
}
