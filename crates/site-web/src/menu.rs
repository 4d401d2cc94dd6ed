use crate::constants::{CLASS_MENU_OPEN, MENU_BUTTON_ID, NAV_BACKDROP_ID, NAV_ID};
use crate::dom;
use site_core::{menu_event_for_key, MenuEvent, MenuState, MENU_MOBILE_QUERY};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

struct MenuDom {
    body: web::HtmlElement,
    button: web::Element,
    backdrop: web::Element,
    state: RefCell<MenuState>,
}

impl MenuDom {
    fn dispatch(&self, event: MenuEvent) {
        self.state.borrow_mut().apply(event);
        self.sync();
    }

    fn sync(&self) {
        let state = *self.state.borrow();
        if state.open {
            dom::add_class(&self.body, CLASS_MENU_OPEN);
            _ = self.backdrop.remove_attribute("hidden");
        } else {
            dom::remove_class(&self.body, CLASS_MENU_OPEN);
            _ = self.backdrop.set_attribute("hidden", "");
        }
        _ = self
            .button
            .set_attribute("aria-expanded", state.aria_expanded());
        _ = self.button.set_attribute("aria-label", state.aria_label());
    }
}

fn is_nav_link_click(ev: &web::Event) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .and_then(|el| el.closest("a").ok().flatten())
        .is_some()
}

/// Wire the hamburger button, backdrop, nav links, Escape and the mobile
/// breakpoint to the menu state. Starts closed.
pub fn wire(document: &web::Document) {
    let (Some(button), Some(nav), Some(backdrop), Some(body)) = (
        document.get_element_by_id(MENU_BUTTON_ID),
        document.get_element_by_id(NAV_ID),
        document.get_element_by_id(NAV_BACKDROP_ID),
        document.body(),
    ) else {
        return;
    };

    let menu = Rc::new(MenuDom {
        body,
        button: button.clone(),
        backdrop: backdrop.clone(),
        state: RefCell::new(MenuState::default()),
    });

    let m = menu.clone();
    dom::add_listener(&button, "click", move |_| m.dispatch(MenuEvent::ButtonClick));

    let m = menu.clone();
    dom::add_listener(&backdrop, "click", move |_| {
        m.dispatch(MenuEvent::BackdropClick)
    });

    let m = menu.clone();
    dom::add_listener(&nav, "click", move |ev| {
        if is_nav_link_click(&ev) {
            m.dispatch(MenuEvent::NavLinkClick);
        }
    });

    let m = menu.clone();
    dom::add_window_listener("keydown", move |ev| {
        let key = ev
            .dyn_ref::<web::KeyboardEvent>()
            .map(|k| k.key())
            .unwrap_or_default();
        if let Some(event) = menu_event_for_key(&key) {
            m.dispatch(event);
        }
    });

    if let Some(mq) = web::window().and_then(|w| w.match_media(MENU_MOBILE_QUERY).ok().flatten()) {
        let m = menu.clone();
        dom::add_listener(&mq, "change", move |ev| {
            let matches = ev
                .dyn_ref::<web::MediaQueryListEvent>()
                .map(|e| e.matches())
                .unwrap_or(true);
            if !matches {
                m.dispatch(MenuEvent::LeftMobileLayout);
            }
        });
    }

    menu.sync();
}
