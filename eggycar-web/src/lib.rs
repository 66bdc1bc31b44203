#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod dom;
pub mod i18n;
pub mod pages;
pub mod paths;
pub mod router;

pub use eggycar_core as core;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(err) = console_log::init_with_level(level) {
        dom::console_error(&format!("logger already initialised: {err}"));
    }
    i18n::apply_document_lang();
    yew::Renderer::<app::App>::new().render();
}
