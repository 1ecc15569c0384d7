use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

pub const NAV_AVATAR_SELECTOR: &str = ".nav_avatar";

pub fn background_image(url: &str) -> String {
    format!("url({})", url)
}

/// Points every navigation avatar on the page at `url`. Returns how many were updated.
pub fn update_nav_avatar(url: &str) -> usize {
    match web_sys::window().and_then(|w| w.document()) {
        Some(document) => update_nav_avatar_in(&document, url),
        None => {
            log::warn!("no document, nav avatar not updated");
            0
        }
    }
}

pub fn update_nav_avatar_in(document: &Document, url: &str) -> usize {
    let nodes = match document.query_selector_all(NAV_AVATAR_SELECTOR) {
        Ok(nodes) => nodes,
        Err(e) => {
            log::error!("nav avatar lookup failed: {:?}", e);
            return 0;
        }
    };

    let value = background_image(url);
    let mut updated = 0;
    for i in 0..nodes.length() {
        let element = match nodes.get(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
            Some(element) => element,
            None => continue,
        };
        if let Err(e) = element.style().set_property("background-image", &value) {
            log::warn!("could not set nav avatar background: {:?}", e);
            continue;
        }
        updated += 1;
    }
    log::debug!("nav avatar updated on {} element(s)", updated);
    updated
}
