#![cfg(target_arch = "wasm32")]

mod embed_tests;
mod launch_tests;
mod nav_tests;

use eggycar_web::dom;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

pub fn ensure_root() -> web_sys::Element {
    let doc = dom::document().expect("document");
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

/// Let Yew flush its scheduler and effects.
pub async fn settle() {
    settle_for(50).await;
}

/// Wait `ms` milliseconds, long enough for observer deliveries when needed.
pub async fn settle_for(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        if let Some(win) = dom::window() {
            let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
        }
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

pub fn scroll_y() -> f64 {
    dom::window()
        .and_then(|win| win.scroll_y().ok())
        .unwrap_or_default()
}
