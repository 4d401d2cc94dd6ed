use crate::constants::{INFO_SOURCE_ATTR, INFO_SYNC_ITEM_SELECTOR, INFO_SYNC_LIST_SELECTOR};
use crate::dom;
use site_core::INFO_SYNC_LIMIT;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

async fn fetch_html(source: &str) -> anyhow::Result<String> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let response: web::Response = JsFuture::from(window.fetch_with_str(source))
        .await
        .map_err(dom::js_err)?
        .dyn_into()
        .map_err(dom::js_err)?;
    if !response.ok() {
        anyhow::bail!("{} returned HTTP {}", source, response.status());
    }
    JsFuture::from(response.text().map_err(dom::js_err)?)
        .await
        .map_err(dom::js_err)?
        .as_string()
        .ok_or_else(|| anyhow::anyhow!("response body is not text"))
}

/// Replace the children of `list` with the first few info items of the
/// page at `source`. Returns how many were copied; zero leaves `list` alone.
async fn sync(list: &web::Element, source: &str) -> anyhow::Result<usize> {
    let html = fetch_html(source).await?;
    let parsed = web::DomParser::new()
        .map_err(dom::js_err)?
        .parse_from_string(&html, web::SupportedType::TextHtml)
        .map_err(dom::js_err)?;
    let nodes = parsed
        .query_selector_all(INFO_SYNC_ITEM_SELECTOR)
        .map_err(dom::js_err)?;

    let take = (nodes.length() as usize).min(INFO_SYNC_LIMIT);
    let clones = (0..take as u32)
        .filter_map(|i| nodes.get(i))
        .map(|node| node.clone_node_with_deep(true))
        .collect::<Result<Vec<_>, _>>()
        .map_err(dom::js_err)?;
    if clones.is_empty() {
        return Ok(0);
    }

    list.set_inner_html("");
    for node in &clones {
        list.append_child(node).map_err(dom::js_err)?;
    }
    Ok(clones.len())
}

/// Best-effort refresh of `.info-list[data-info-source]` from its source page.
pub fn wire(document: &web::Document) {
    let Some(list) = dom::query(document, INFO_SYNC_LIST_SELECTOR) else {
        return;
    };
    let Some(source) = list
        .get_attribute(INFO_SOURCE_ATTR)
        .filter(|s| !s.trim().is_empty())
    else {
        return;
    };

    spawn_local(async move {
        match sync(&list, &source).await {
            Ok(0) => log::debug!("[info] {} had no items; keeping markup", source),
            Ok(n) => log::info!("[info] synced {} items from {}", n, source),
            // Blocked fetches (file://, offline) keep the static markup.
            Err(e) => log::debug!("[info] keeping markup: {:?}", e),
        }
    });
}
