use crate::constants::*;
use crate::dom;
use site_core::{parse_page, PageButton, Paginator};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

struct PagerView {
    document: web::Document,
    bar: web::Element,
    items: Vec<web::HtmlElement>,
    pager: Paginator,
}

impl PagerView {
    fn button(&self, b: &PageButton) -> anyhow::Result<web::Element> {
        let el = self
            .document
            .create_element("button")
            .map_err(dom::js_err)?;
        el.set_attribute("type", "button").map_err(dom::js_err)?;
        el.set_text_content(Some(&b.label));
        el.set_attribute("data-page", &b.page.to_string())
            .map_err(dom::js_err)?;
        if b.is_current {
            el.set_attribute("aria-current", "page")
                .map_err(dom::js_err)?;
        }
        Ok(el)
    }

    fn render_buttons(&self, current: usize) -> anyhow::Result<()> {
        self.bar.set_inner_html("");
        for b in self.pager.buttons(current) {
            let el = self.button(&b)?;
            self.bar.append_child(&el).map_err(dom::js_err)?;
        }
        Ok(())
    }

    fn update_items(&self, current: usize) {
        let visible = self.pager.visible_range(current);
        for (i, item) in self.items.iter().enumerate() {
            let display = if visible.contains(&i) { "" } else { "none" };
            dom::set_style(item, "display", display);
            dom::remove_class(item, CLASS_FIRST_VISIBLE);
        }
        if let Some(first) = self.items.get(visible.start) {
            dom::add_class(first, CLASS_FIRST_VISIBLE);
        }
    }

    fn go_to(&self, page: usize) {
        let current = self.pager.clamp(page);
        if let Err(e) = self.render_buttons(current) {
            log::warn!("[pagination] {:?}", e);
        }
        self.update_items(current);
    }
}

fn clicked_page(ev: &web::Event) -> Option<usize> {
    let target = ev.target()?.dyn_into::<web::Element>().ok()?;
    let button = target.closest("button").ok().flatten()?;
    parse_page(&button.get_attribute("data-page")?)
}

/// Split `.info-list` into pages of five with a PREV / 1..n / NEXT bar.
pub fn wire(document: &web::Document) {
    let Some(list) = dom::query(document, INFO_LIST_SELECTOR) else {
        return;
    };
    let items = dom::query_all_html(&list, INFO_ITEM_SELECTOR);
    let Some(bar) = dom::query(document, INFO_PAGINATION_SELECTOR) else {
        return;
    };
    let pager = match Paginator::new(items.len()) {
        Ok(p) => p,
        Err(e) => {
            log::debug!("[pagination] {}", e);
            return;
        }
    };
    log::debug!(
        "[pagination] {} items over {} pages",
        pager.item_count(),
        pager.page_count()
    );

    let view = Rc::new(PagerView {
        document: document.clone(),
        bar: bar.clone(),
        items,
        pager,
    });

    let v = view.clone();
    dom::add_listener(&bar, "click", move |ev| {
        if let Some(page) = clicked_page(&ev) {
            v.go_to(page);
        }
    });

    view.go_to(1);
}
