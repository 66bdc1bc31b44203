use crate::{ensure_root, settle};
use eggycar_web::components::game_embed::{GameEmbed, GameEmbedProps};
use eggycar_web::dom;
use wasm_bindgen_test::*;
use yew::prelude::*;
use yew::Renderer;

#[wasm_bindgen_test]
async fn embed_mounts_sandboxed_iframe_with_toggle() {
    Renderer::<GameEmbed>::with_root_and_props(
        ensure_root(),
        GameEmbedProps {
            title: AttrValue::from("Slope"),
            src: AttrValue::from("about:blank"),
        },
    )
    .render();
    settle().await;
    let doc = dom::document().expect("document");
    let frame = doc
        .query_selector("[data-testid='game-embed'] iframe")
        .expect("query")
        .expect("iframe");
    assert_eq!(
        frame.get_attribute("sandbox").unwrap_or_default(),
        "allow-scripts allow-same-origin"
    );
    let button = doc
        .query_selector("[data-testid='game-embed'] button")
        .expect("query")
        .expect("fullscreen button");
    assert_eq!(
        button.get_attribute("aria-label").unwrap_or_default(),
        "Enter fullscreen"
    );
    assert!(!dom::fullscreen_active());
}

#[wasm_bindgen_test]
async fn fullscreen_listeners_are_released_on_unmount() {
    let handle = Renderer::<GameEmbed>::with_root_and_props(
        ensure_root(),
        GameEmbedProps {
            title: AttrValue::from("Slope"),
            src: AttrValue::from("about:blank"),
        },
    )
    .render();
    settle().await;
    handle.destroy();
    settle().await;

    let doc = dom::document().expect("document");
    for name in ["fullscreenchange", "webkitfullscreenchange"] {
        let event = web_sys::Event::new(name).expect("event");
        doc.dispatch_event(&event).expect("dispatch");
    }
    settle().await;
    assert!(doc.query_selector("[data-testid='game-embed']").expect("query").is_none());
}
