use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn request_frame(tick: &Tick) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        if let Err(e) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            log::warn!("requestAnimationFrame failed: {:?}", e);
        }
    }
}

/// Drive `frame` from `requestAnimationFrame` until the page unloads.
/// The closure owns the loop state.
pub fn start_loop(mut frame: impl FnMut() + 'static) {
    let tick: Tick = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

/// Run `frame` once on the next animation frame.
pub fn next_frame(frame: impl FnOnce() + 'static) {
    let Some(w) = web::window() else {
        return;
    };
    let callback = Closure::once_into_js(frame);
    if let Err(e) = w.request_animation_frame(callback.unchecked_ref()) {
        log::warn!("requestAnimationFrame failed: {:?}", e);
    }
}
