//! Browser side of the anchor tracking: one `IntersectionObserver` per
//! mounted navigation bar, feeding the tracker.

use crate::dom;
use eggycar_core::NavTracker;
use js_sys::Array;
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

type EntriesCallback = Closure<dyn FnMut(Array)>;

fn entry_signal(value: JsValue) -> Option<(String, bool)> {
    let entry = value.dyn_into::<IntersectionObserverEntry>().ok()?;
    Some((entry.target().id(), entry.is_intersecting()))
}

fn build_observer(
    callback: &EntriesCallback,
    root_margin: &str,
    watched: &[String],
) -> Option<IntersectionObserver> {
    let init = IntersectionObserverInit::new();
    init.set_root_margin(root_margin);
    init.set_threshold(&JsValue::from_f64(0.0));
    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => observer,
            Err(err) => {
                log::warn!(
                    "intersection observer unavailable: {}",
                    dom::js_error_message(&err)
                );
                return None;
            }
        };
    for id in watched {
        if let Some(el) = dom::element_by_id(id) {
            observer.observe(&el);
        }
    }
    Some(observer)
}

#[hook]
pub fn use_anchor_observer(tracker: &Rc<RefCell<NavTracker>>, redraw: &UseForceUpdateHandle) {
    let tracker = tracker.clone();
    let redraw = redraw.clone();
    use_effect_with((), move |()| {
        let path = crate::paths::route_path(&dom::current_path());
        let present: BTreeSet<String> = tracker
            .borrow()
            .config()
            .anchors()
            .filter(|item| dom::element_by_id(&item.id).is_some())
            .map(|item| item.id.clone())
            .collect();
        let watched = tracker.borrow_mut().on_mount(&path, &present).to_vec();
        redraw.force_update();

        let callback: EntriesCallback = {
            let tracker = tracker.clone();
            let redraw = redraw.clone();
            Closure::new(move |entries: Array| {
                let signals: Vec<(String, bool)> =
                    entries.iter().filter_map(entry_signal).collect();
                let changed = tracker
                    .borrow_mut()
                    .on_intersection_batch(signals.iter().map(|(id, hit)| (id.as_str(), *hit)));
                if changed {
                    redraw.force_update();
                }
            })
        };
        let root_margin = tracker.borrow().config().root_margin.clone();
        let observer = build_observer(&callback, &root_margin, &watched);

        move || {
            if let Some(observer) = observer {
                observer.disconnect();
            }
            let released = tracker.borrow_mut().on_unmount();
            log::debug!("released {} anchor watch(es)", released.len());
            drop(callback);
        }
    });
}
