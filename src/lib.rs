pub mod components;
pub mod config;
pub mod models;
pub mod services;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

use crate::components::avatar_page::{AvatarPage, AvatarPageProps};
use crate::config::{PageConfig, DEFAULT_MOUNT_SELECTOR};

// Use `wee_alloc` as the global allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Mounts the avatar picker into the element matching `selector`, configured from that
/// element's `data-*` attributes.
#[wasm_bindgen]
pub fn mount(selector: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document available"))?;
    let element = document
        .query_selector(selector)?
        .ok_or_else(|| JsValue::from_str(&format!("no element matches {}", selector)))?;
    let cookies = document
        .dyn_ref::<HtmlDocument>()
        .and_then(|d| d.cookie().ok());

    let config = PageConfig::from_element(&element, cookies.as_deref())
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    log::info!(
        "mounting avatar picker for profile {} on {}",
        config.profile_id,
        selector
    );
    yew::start_app_with_props_in_element::<AvatarPage>(element, AvatarPageProps { config });
    Ok(())
}

#[wasm_bindgen(start)]
pub fn run_app() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));

    let present = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(DEFAULT_MOUNT_SELECTOR).ok().flatten())
        .is_some();
    if !present {
        log::debug!("{} not on this page, avatar picker idle", DEFAULT_MOUNT_SELECTOR);
        return;
    }
    if let Err(e) = mount(DEFAULT_MOUNT_SELECTOR) {
        log::error!("failed to mount avatar picker: {:?}", e);
    }
}
