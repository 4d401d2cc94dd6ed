use site_core::Viewport;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

#[inline]
pub fn query(root: &web::Document, selector: &str) -> Option<web::Element> {
    root.query_selector(selector).ok().flatten()
}

#[inline]
pub fn query_html(root: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    query(root, selector).and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn by_id_html(document: &web::Document, element_id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// All `selector` matches under `root` that are HTML elements, in document order.
pub fn query_all_html(root: &web::Element, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(nodes) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|n| n.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

/// Attach a listener that lives for the rest of the page.
pub fn add_listener(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(web::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(_)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::debug!("[dom] add {} listener failed: {:?}", event, e);
    }
    closure.forget();
}

#[inline]
pub fn add_window_listener(event: &str, handler: impl FnMut(web::Event) + 'static) {
    if let Some(window) = web::window() {
        add_listener(&window, event, handler);
    }
}

/// Run `f` once after `delay`.
pub fn set_timeout(delay: Duration, f: impl FnOnce() + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let callback = Closure::once_into_js(f);
    let ms = delay.as_millis().min(i32::MAX as u128) as i32;
    if let Err(e) = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), ms)
    {
        log::debug!("[dom] setTimeout failed: {:?}", e);
    }
}

pub fn prefers_reduced_motion() -> bool {
    web::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// Current layout viewport in CSS pixels.
pub fn viewport() -> Viewport {
    let Some(w) = web::window() else {
        return Viewport::default();
    };
    let px = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32;
    Viewport::new(px(w.inner_width()), px(w.inner_height()))
        .with_device_pixel_ratio(w.device_pixel_ratio())
}

pub fn scroll_to_top() {
    if let Some(w) = web::window() {
        w.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

#[inline]
pub fn add_class(el: &web::Element, class: &str) {
    _ = el.class_list().add_1(class);
}

#[inline]
pub fn remove_class(el: &web::Element, class: &str) {
    _ = el.class_list().remove_1(class);
}

#[inline]
pub fn root_element(document: &web::Document) -> Option<web::Element> {
    document.document_element()
}
