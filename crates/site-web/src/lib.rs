#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

mod background;
mod constants;
mod dom;
mod frame;
mod info_sync;
mod menu;
mod orbit;
mod pagination;
mod session;
mod welcome;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-web starting");

    let Some(document) = dom::window_document() else {
        log::error!("no document");
        return Ok(());
    };

    // Menu and info list do not depend on `load`.
    menu::wire(&document);
    pagination::wire(&document);
    info_sync::wire(&document);
    welcome::wire_load(&document);
    Ok(())
}
