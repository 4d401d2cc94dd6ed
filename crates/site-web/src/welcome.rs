use crate::constants::*;
use crate::dom;
use crate::session::BrowserSession;
use crate::{background, orbit};
use site_core::{
    mark_home_reveal_seen, mark_welcome_seen, welcome_timeline, SessionFlags, WelcomePlan,
    WelcomeStep,
};
use web_sys as web;

#[derive(Clone)]
struct WelcomeScene {
    document: web::Document,
    hero: web::HtmlElement,
    home: web::HtmlElement,
}

impl WelcomeScene {
    fn set_locked(&self, locked: bool) {
        if let Some(body) = self.document.body() {
            if locked {
                dom::add_class(&body, CLASS_LOCKED);
            } else {
                dom::remove_class(&body, CLASS_LOCKED);
            }
        }
        if let Some(root) = dom::root_element(&self.document) {
            if locked {
                dom::add_class(&root, CLASS_WELCOME_ACTIVE);
            } else {
                dom::remove_class(&root, CLASS_WELCOME_ACTIVE);
            }
        }
    }

    fn apply(&self, step: WelcomeStep) {
        log::debug!("[welcome] {:?}", step);
        match step {
            WelcomeStep::ShowHero => {
                self.set_locked(true);
                dom::add_class(&self.hero, CLASS_VISIBLE);
            }
            WelcomeStep::HideHero => dom::add_class(&self.hero, CLASS_HIDDEN),
            WelcomeStep::RevealHome => {
                dom::set_style(&self.hero, "display", "none");
                dom::add_class(&self.home, CLASS_VISIBLE);
                self.set_locked(false);
                dom::scroll_to_top();

                let mut session = BrowserSession::open();
                background::start(&self.document);
                orbit::setup(&self.document, &mut session);
                if let Err(e) = mark_home_reveal_seen(&mut session) {
                    log::warn!("[welcome] {}", e);
                }
            }
        }
    }
}

fn run(document: web::Document) {
    if let Some(window) = web::window() {
        if let Ok(history) = window.history() {
            _ = history.set_scroll_restoration(web::ScrollRestoration::Manual);
        }
    }
    dom::scroll_to_top();

    let hero = dom::query_html(&document, HERO_SELECTOR);
    let home = dom::query_html(&document, HOME_SELECTOR);
    let mut session = BrowserSession::open();
    let plan = WelcomePlan::decide(
        home.is_some(),
        hero.is_some(),
        SessionFlags::load(&session),
    );
    log::info!("[welcome] {:?}", plan);

    match (plan, hero, home) {
        (WelcomePlan::Play, Some(hero), Some(home)) => {
            if let Err(e) = mark_welcome_seen(&mut session) {
                log::warn!("[welcome] {}", e);
            }
            let scene = WelcomeScene {
                document,
                hero,
                home,
            };
            for (delay, step) in welcome_timeline() {
                if delay.is_zero() {
                    scene.apply(step);
                } else {
                    let scene = scene.clone();
                    dom::set_timeout(delay, move || scene.apply(step));
                }
            }
        }
        (
            WelcomePlan::Skip {
                suppress_home_animation,
            },
            Some(hero),
            Some(home),
        ) => {
            if let Some(root) = dom::root_element(&document) {
                if suppress_home_animation {
                    dom::add_class(&root, CLASS_HOME_NO_ANIM);
                }
                dom::remove_class(&root, CLASS_WELCOME_ACTIVE);
            }
            if let Err(e) = mark_home_reveal_seen(&mut session) {
                log::warn!("[welcome] {}", e);
            }
            dom::set_style(&hero, "display", "none");
            dom::add_class(&home, CLASS_VISIBLE);
            background::start(&document);
            orbit::setup(&document, &mut session);
        }
        (WelcomePlan::RevealHome { delay }, _, Some(home)) => {
            dom::set_timeout(delay, move || dom::add_class(&home, CLASS_VISIBLE));
            background::start(&document);
        }
        _ => background::start(&document),
    }
}

/// Run the welcome sequence once the page has finished loading.
pub fn wire_load(document: &web::Document) {
    if document.ready_state() == "complete" {
        run(document.clone());
        return;
    }
    let mut pending = Some(document.clone());
    dom::add_window_listener("load", move |_| {
        if let Some(doc) = pending.take() {
            run(doc);
        }
    });
}
