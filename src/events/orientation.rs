use crate::events::media;
use crate::Page;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Lazily attach the device-orientation path: coarse-pointer devices only,
/// and only once the (possibly implicit) permission resolves. Denial or a
/// missing sensor API leaves pointer tracking as the sole input; nothing
/// surfaces as an error.
pub fn request_and_subscribe(page: Rc<Page>) {
    if !media::coarse_pointer() {
        return;
    }
    spawn_local(async move {
        match request_permission().await {
            Ok(true) => subscribe(&page),
            Ok(false) => log::info!("device orientation permission denied"),
            Err(e) => log::debug!("device orientation unavailable: {:?}", e),
        }
    });
}

/// `DeviceOrientationEvent.requestPermission` only exists on iOS-family
/// browsers, so it is reached through `Reflect` rather than a binding.
/// Platforms without the gate expose the sensor outright.
async fn request_permission() -> Result<bool, JsValue> {
    let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let ctor = js_sys::Reflect::get(window.as_ref(), &"DeviceOrientationEvent".into())?;
    if ctor.is_undefined() {
        return Err(JsValue::from_str("no DeviceOrientationEvent"));
    }
    let request = js_sys::Reflect::get(&ctor, &"requestPermission".into())?;
    let Some(request) = request.dyn_ref::<js_sys::Function>() else {
        return Ok(true);
    };
    let promise: js_sys::Promise = request.call0(&ctor)?.dyn_into()?;
    let verdict = JsFuture::from(promise).await?;
    Ok(verdict.as_string().as_deref() == Some("granted"))
}

/// Once granted, the sample stream owns the tilt state until teardown;
/// pointer-leave no longer resets it.
fn subscribe(page: &Rc<Page>) {
    let Some(window) = web::window() else {
        return;
    };
    let p = page.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::DeviceOrientationEvent| {
        p.tilt.borrow_mut().orientation_sample(ev.gamma(), ev.beta());
        crate::sync(&p);
    }) as Box<dyn FnMut(_)>);
    page.subs
        .borrow_mut()
        .add(window.as_ref(), "deviceorientation", closure);
    log::info!("device orientation tracking active");
}
