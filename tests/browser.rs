#![cfg(target_arch = "wasm32")]

use avatar_picker::components::avatar_grid::{AvatarGrid, AvatarGridProps};
use avatar_picker::components::avatar_tile::{AvatarTile, AvatarTileProps};
use avatar_picker::config::{PageConfig, CSRF_COOKIE};
use avatar_picker::models::{Avatar, AvatarCollection, AvatarKind};
use avatar_picker::services::nav::{update_nav_avatar_in, NAV_AVATAR_SELECTOR};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlElement};
use yew::Callback;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window()
        .and_then(|w| w.document())
        .expect("document available")
}

fn append_div(document: &Document, class: &str) -> Element {
    let div = document.create_element("div").expect("create div");
    div.set_class_name(class);
    document
        .body()
        .expect("body available")
        .append_child(&div)
        .expect("append div");
    div
}

#[wasm_bindgen_test]
fn nav_avatar_background_follows_selection() {
    let document = document();
    let first = append_div(&document, "nav_avatar");
    let second = append_div(&document, "nav_avatar small");
    let unrelated = append_div(&document, "navbar");

    let updated = update_nav_avatar_in(&document, "/dynamic/avatar/9.svg");
    let expected = document
        .query_selector_all(NAV_AVATAR_SELECTOR)
        .expect("query nav avatars")
        .length() as usize;
    assert_eq!(updated, expected);
    assert!(updated >= 2);

    for element in [&first, &second] {
        let style = element
            .dyn_ref::<HtmlElement>()
            .expect("html element")
            .style();
        let value = style.get_property_value("background-image").expect("style");
        assert!(value.contains("/dynamic/avatar/9.svg"), "got {}", value);
    }
    let untouched = unrelated
        .dyn_ref::<HtmlElement>()
        .expect("html element")
        .style()
        .get_property_value("background-image")
        .expect("style");
    assert!(untouched.is_empty());

    for element in [first, second, unrelated] {
        element.remove();
    }
}

#[wasm_bindgen_test]
fn config_reads_host_element_attributes() {
    let document = document();
    let host = append_div(&document, "avatar-host");
    host.set_attribute("data-profile-id", "314").expect("attr");
    host.set_attribute("data-initial-tab", "preset").expect("attr");
    host.set_attribute("data-activate-endpoint", "/v2/avatar/activate")
        .expect("attr");

    let cookies = format!("{}=cookie-token", CSRF_COOKIE);
    let config = PageConfig::from_element(&host, Some(&cookies)).expect("valid config");
    assert_eq!(config.profile_id, 314);
    assert_eq!(config.initial_tab, AvatarKind::Preset);
    assert_eq!(config.endpoints.activate, "/v2/avatar/activate");
    assert_eq!(config.csrf_token, "cookie-token");

    host.remove();
}

#[wasm_bindgen_test]
fn mount_reports_missing_host() {
    assert!(avatar_picker::mount("#no-such-avatar-page").is_err());
}

async fn next_tick() {
    JsFuture::from(js_sys::Promise::resolve(&JsValue::NULL))
        .await
        .expect("resolved promise");
}

fn avatar(pk: u64, active: bool) -> Avatar {
    Avatar {
        pk,
        avatar_url: format!("/dynamic/avatar/{}.svg", pk),
        active,
    }
}

async fn render_grid(collection: AvatarCollection) -> Element {
    let host = append_div(&document(), "grid-host");
    yew::start_app_with_props_in_element::<AvatarGrid>(
        host.clone(),
        AvatarGridProps {
            kind: AvatarKind::Mine,
            collection,
            visible: true,
            selecting: None,
            onselect: Callback::noop(),
        },
    );
    next_tick().await;
    host
}

#[wasm_bindgen_test(async)]
async fn empty_grid_shows_placeholder() {
    let host = render_grid(AvatarCollection {
        initialized: true,
        ..AvatarCollection::default()
    })
    .await;

    assert!(host.query_selector("#my-avatars.active").unwrap().is_some());
    assert!(host.query_selector(".empty-avatars").unwrap().is_some());
    assert!(host.query_selector(".avatar-tile").unwrap().is_none());
    host.remove();
}

#[wasm_bindgen_test(async)]
async fn loading_grid_shows_loading_line() {
    let host = render_grid(AvatarCollection {
        loading: true,
        ..AvatarCollection::default()
    })
    .await;

    assert!(host.query_selector(".loading-avatars").unwrap().is_some());
    assert!(host.query_selector(".empty-avatars").unwrap().is_none());
    host.remove();
}

#[wasm_bindgen_test(async)]
async fn grid_renders_tiles_with_active_flag() {
    let host = render_grid(AvatarCollection {
        avatars: vec![avatar(3, true), avatar(2, false)],
        initialized: true,
        ..AvatarCollection::default()
    })
    .await;

    let tiles = host
        .query_selector_all(".avatars-container .avatar-tile")
        .unwrap();
    assert_eq!(tiles.length(), 2);
    assert!(host.query_selector(".empty-avatars").unwrap().is_none());

    let active = host
        .query_selector(".avatar-tile.active")
        .unwrap()
        .expect("active tile");
    assert_eq!(active.get_attribute("data-avatar-pk").as_deref(), Some("3"));
    let img = active.query_selector("div > img").unwrap().expect("tile image");
    assert_eq!(
        img.get_attribute("src").as_deref(),
        Some("/dynamic/avatar/3.svg")
    );

    let inactive = host
        .query_selector("[data-avatar-pk='2']")
        .unwrap()
        .expect("second tile");
    assert_eq!(inactive.class_name(), "avatar-tile");
    host.remove();
}

#[wasm_bindgen_test(async)]
async fn tile_click_emits_its_pk() {
    let clicked = Rc::new(Cell::new(None));
    let host = append_div(&document(), "tile-host");
    let sink = clicked.clone();
    yew::start_app_with_props_in_element::<AvatarTile>(
        host.clone(),
        AvatarTileProps {
            avatar: avatar(17, false),
            pending: false,
            onselect: Callback::from(move |pk: u64| sink.set(Some(pk))),
        },
    );
    next_tick().await;

    let tile = host
        .query_selector(".avatar-tile")
        .unwrap()
        .expect("tile rendered")
        .dyn_into::<HtmlElement>()
        .expect("html element");
    tile.click();
    assert_eq!(clicked.get(), Some(17));
    host.remove();
}
