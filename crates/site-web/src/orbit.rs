use crate::constants::{ORBIT_ID, ORBIT_ITEM_CLASS, ORBIT_SCENE_ID};
use crate::dom;
use crate::frame;
use site_core::{default_videos, orbit_epoch, OrbitLayout, OrbitParams, OrbitVideo, SessionStore};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

struct OrbitView {
    orbit: web::HtmlElement,
    items: Vec<web::HtmlElement>,
    layout: OrbitLayout,
    epoch_ms: f64,
    reduced_motion: bool,
}

impl OrbitView {
    fn render(&self) {
        let params = OrbitParams::for_viewport(dom::viewport());
        let angle = params.angle(js_sys::Date::now() - self.epoch_ms, self.reduced_motion);

        dom::set_style(&self.orbit, "transform", &params.scene_transform_css());

        for (el, t) in self.items.iter().zip(self.layout.project(angle, &params)) {
            dom::set_style(el, "transform", &t.transform_css());
            dom::set_style(el, "opacity", &t.opacity.to_string());
            dom::set_style(el, "z-index", &t.z_index.to_string());
            dom::set_style(el, "filter", &t.filter_css());
        }
    }
}

fn build_item(
    document: &web::Document,
    orbit: &web::HtmlElement,
    video: OrbitVideo<'_>,
) -> anyhow::Result<web::HtmlElement> {
    let a = document.create_element("a").map_err(dom::js_err)?;
    a.set_class_name(ORBIT_ITEM_CLASS);
    let href = video.watch_url();
    for (name, value) in [
        ("href", href.as_str()),
        ("target", "_blank"),
        ("rel", "noopener noreferrer"),
        ("aria-label", "Open YouTube in new tab"),
    ] {
        a.set_attribute(name, value).map_err(dom::js_err)?;
    }

    let img = document.create_element("img").map_err(dom::js_err)?;
    img.set_attribute("src", &video.thumbnail_url())
        .map_err(dom::js_err)?;
    img.set_attribute("alt", "YouTube thumbnail")
        .map_err(dom::js_err)?;

    a.append_child(&img).map_err(dom::js_err)?;
    orbit.append_child(&a).map_err(dom::js_err)?;
    a.dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

/// Populate `#orbit` with the video links and start the rotation.
pub fn setup(document: &web::Document, session: &mut impl SessionStore) {
    let Some(orbit) = dom::by_id_html(document, ORBIT_ID) else {
        return;
    };
    if document.get_element_by_id(ORBIT_SCENE_ID).is_none() {
        return;
    }

    let epoch_ms = orbit_epoch(session, js_sys::Date::now());

    orbit.set_inner_html("");
    let items: Vec<web::HtmlElement> = default_videos()
        .filter_map(|video| match build_item(document, &orbit, video) {
            Ok(el) => Some(el),
            Err(e) => {
                log::warn!("[orbit] item {}: {:?}", video.id, e);
                None
            }
        })
        .collect();

    let view = Rc::new(OrbitView {
        layout: OrbitLayout::new(items.len()),
        orbit,
        items,
        epoch_ms,
        reduced_motion: dom::prefers_reduced_motion(),
    });
    log::info!(
        "[orbit] {} items, reduced_motion={}",
        view.items.len(),
        view.reduced_motion
    );

    if view.reduced_motion {
        let first = view.clone();
        frame::next_frame(move || first.render());
        dom::add_window_listener("resize", move |_| {
            let v = view.clone();
            frame::next_frame(move || v.render());
        });
    } else {
        frame::start_loop(move || view.render());
    }
}
