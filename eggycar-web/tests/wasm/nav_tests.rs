use crate::{ensure_root, scroll_y, settle, settle_for};
use eggycar_core::NavConfig;
use eggycar_web::components::site_nav::{SiteNav, SiteNavProps};
use eggycar_web::dom;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;
use yew::prelude::*;
use yew::Renderer;

#[function_component(DetailsHarness)]
fn details_harness() -> Html {
    html! {
        <>
            <SiteNav config={NavConfig::game_details()} />
            <section id="game-section" style="height: 100vh">{ "embed" }</section>
            <section id="how-to-play" style="height: 100vh">{ "guide" }</section>
            <section id="game-faq" style="height: 100vh">{ "faq" }</section>
            <div style="height: 200vh"></div>
        </>
    }
}

fn button(id: &str) -> HtmlElement {
    dom::document()
        .expect("document")
        .query_selector(&format!("button[data-nav-id='{id}']"))
        .expect("query")
        .expect("nav button exists")
        .dyn_into::<HtmlElement>()
        .expect("html element")
}

#[wasm_bindgen_test]
async fn nav_renders_every_registry_entry() {
    Renderer::<SiteNav>::with_root_and_props(
        ensure_root(),
        SiteNavProps {
            config: NavConfig::catalog(),
            initial_path: None,
            on_search: None,
            search_value: AttrValue::default(),
        },
    )
    .render();
    settle().await;
    for id in ["home", "game-features", "game-tips", "controls-guide", "faq", "about"] {
        let _ = button(id);
    }
}

#[wasm_bindgen_test]
async fn menu_toggle_opens_and_closes_mobile_menu() {
    Renderer::<DetailsHarness>::with_root(ensure_root()).render();
    settle().await;
    let doc = dom::document().expect("document");
    let toggle = doc
        .query_selector("button[aria-controls='site-nav-menu']")
        .expect("query")
        .expect("menu toggle")
        .dyn_into::<HtmlElement>()
        .expect("html element");
    assert!(doc.get_element_by_id("site-nav-menu").is_none());
    toggle.click();
    settle().await;
    assert!(doc.get_element_by_id("site-nav-menu").is_some());
    toggle.click();
    settle().await;
    assert!(doc.get_element_by_id("site-nav-menu").is_none());
}

#[wasm_bindgen_test]
async fn clicking_an_anchor_scrolls_without_reload() {
    Renderer::<DetailsHarness>::with_root(ensure_root()).render();
    settle().await;
    let path_before = dom::current_path();
    button("game-faq").click();
    settle().await;
    assert_eq!(dom::current_path(), path_before);
}

fn scroll_section_into_band(id: &str) {
    let section = dom::element_by_id(id)
        .expect("section exists")
        .dyn_into::<HtmlElement>()
        .expect("html element");
    let win = dom::window().expect("window");
    // Top edge 150px below the viewport top, inside the details root margin.
    win.scroll_to_with_x_and_y(0.0, f64::from(section.offset_top() - 150));
}

fn is_marked_active(id: &str) -> bool {
    button(id).class_name().contains("site-nav__item--active")
}

#[wasm_bindgen_test]
async fn scrolled_section_becomes_active_until_unmount() {
    let handle = Renderer::<DetailsHarness>::with_root(ensure_root()).render();
    settle().await;

    scroll_section_into_band("game-faq");
    settle_for(300).await;
    assert!(scroll_y() > 0.0);
    assert!(is_marked_active("game-faq"));
    assert!(!is_marked_active("how-to-play"));

    scroll_section_into_band("how-to-play");
    settle_for(300).await;
    assert!(is_marked_active("how-to-play"));
    assert!(!is_marked_active("game-faq"));

    handle.destroy();
    settle().await;
    // A released observer must not call back into the dropped closure.
    dom::window().expect("window").scroll_to_with_x_and_y(0.0, 400.0);
    settle_for(300).await;
    let doc = dom::document().expect("document");
    assert!(
        doc.query_selector("[data-testid='site-nav']")
            .expect("query")
            .is_none()
    );
}
