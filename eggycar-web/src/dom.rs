//! Thin wrappers over the browser APIs the site uses: location, element
//! lookup, smooth scrolling and fullscreen.

use eggycar_core::NavAction;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Window};

#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error message to the browser console, bypassing the logger.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}

/// Path component of the current location, `/` when unavailable.
#[must_use]
pub fn current_path() -> String {
    window()
        .and_then(|win| win.location().pathname().ok())
        .filter(|path| !path.is_empty())
        .unwrap_or_else(|| String::from("/"))
}

#[must_use]
pub fn element_by_id(id: &str) -> Option<Element> {
    document().and_then(|doc| doc.get_element_by_id(id))
}

/// Full page load of a site-relative path.
pub fn load_page(path: &str) {
    let href = crate::paths::site_href(path);
    let Some(win) = window() else {
        return;
    };
    if let Err(err) = win.location().set_href(&href) {
        log::warn!("navigation to {href} failed: {}", js_error_message(&err));
    }
}

/// Smooth-scroll so the element with `id` sits `offset_px` below the top of
/// the viewport. Missing elements are ignored.
pub fn scroll_to_anchor(id: &str, offset_px: i32) {
    let (Some(win), Some(el)) = (window(), element_by_id(id)) else {
        log::debug!("scroll target #{id} not in document");
        return;
    };
    if offset_px == 0 {
        let opts = web_sys::ScrollIntoViewOptions::new();
        opts.set_behavior(web_sys::ScrollBehavior::Smooth);
        opts.set_block(web_sys::ScrollLogicalPosition::Start);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
        return;
    }
    let page_top = el.get_bounding_client_rect().top() + win.scroll_y().unwrap_or(0.0);
    let opts = web_sys::ScrollToOptions::new();
    opts.set_top(page_top - f64::from(offset_px));
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&opts);
}

/// Jump to the top of the page, as a fresh page load would.
pub fn scroll_to_top() {
    if let Some(win) = window() {
        win.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Carry out a navigation decision made by the tracker.
pub fn perform(action: &NavAction) {
    match action {
        NavAction::Load(path) => load_page(path),
        NavAction::ScrollTo { id, offset_px } => scroll_to_anchor(id, *offset_px),
    }
}

/// Why a fullscreen request could not be carried out.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FullscreenError {
    #[error("no document to take fullscreen")]
    NoDocument,
    #[error("fullscreen API unavailable")]
    Unsupported,
    #[error("browser rejected fullscreen: {0}")]
    Rejected(String),
}

impl From<JsValue> for FullscreenError {
    fn from(value: JsValue) -> Self {
        Self::Rejected(js_error_message(&value))
    }
}

fn call_vendor_method(target: &JsValue, names: &[&str]) -> Result<(), FullscreenError> {
    for name in names {
        let method = js_sys::Reflect::get(target, &JsValue::from_str(name))?;
        if let Some(func) = method.dyn_ref::<js_sys::Function>() {
            func.call0(target)?;
            return Ok(());
        }
    }
    Err(FullscreenError::Unsupported)
}

/// Ask the browser to show `el` fullscreen, trying vendor-prefixed APIs.
///
/// # Errors
///
/// Returns [`FullscreenError`] when no fullscreen API accepts the request.
pub fn request_fullscreen(el: &Element) -> Result<(), FullscreenError> {
    el.request_fullscreen().or_else(|_| {
        call_vendor_method(el.as_ref(), &["webkitRequestFullscreen", "msRequestFullscreen"])
    })
}

/// Leave fullscreen, trying vendor-prefixed APIs.
///
/// # Errors
///
/// Returns [`FullscreenError`] when no document is available or no exit API
/// exists.
pub fn exit_fullscreen() -> Result<(), FullscreenError> {
    let doc = document().ok_or(FullscreenError::NoDocument)?;
    let standard = js_sys::Reflect::get(doc.as_ref(), &JsValue::from_str("exitFullscreen"))?;
    if standard.is_function() {
        doc.exit_fullscreen();
        return Ok(());
    }
    call_vendor_method(doc.as_ref(), &["webkitExitFullscreen", "msExitFullscreen"])
}

/// Whether any element is currently fullscreen.
#[must_use]
pub fn fullscreen_active() -> bool {
    document().is_some_and(|doc| doc.fullscreen_element().is_some())
}
