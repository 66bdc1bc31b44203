use eggycar_core::{NavConfig, NavItem, NavTracker};
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

/// Shared handle to the navigation tracker of one mounted navigation bar.
///
/// The tracker lives in a `RefCell` so observer callbacks and click handlers
/// can mutate it directly; every mutation is followed by a forced redraw.
#[derive(Clone)]
pub struct NavHandle {
    tracker: Rc<RefCell<NavTracker>>,
    redraw: UseForceUpdateHandle,
}

impl NavHandle {
    #[must_use]
    pub fn items(&self) -> Vec<NavItem> {
        self.tracker.borrow().config().items().to_vec()
    }

    #[must_use]
    pub fn is_active(&self, item: &NavItem) -> bool {
        self.tracker.borrow().is_active(item)
    }

    #[must_use]
    pub fn menu_open(&self) -> bool {
        self.tracker.borrow().menu_open()
    }

    pub fn toggle_menu(&self) {
        self.tracker.borrow_mut().toggle_menu();
        self.redraw.force_update();
    }

    /// Update the tracker for a click on `item`, then scroll or load.
    pub fn navigate(&self, item: &NavItem) {
        let action = self.tracker.borrow_mut().on_navigate(item);
        self.redraw.force_update();
        #[cfg(target_arch = "wasm32")]
        {
            crate::dom::perform(&action);
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            log::debug!("navigation outside the browser: {action:?}");
        }
    }

    #[cfg(test)]
    pub(crate) fn tracker(&self) -> Rc<RefCell<NavTracker>> {
        self.tracker.clone()
    }
}

/// Own a [`NavTracker`] for the lifetime of the calling component.
///
/// In the browser the anchor observer is attached on mount and released on
/// unmount. `initial_path` seeds the path used for the first render.
#[hook]
pub fn use_nav_tracker(config: &NavConfig, initial_path: Option<AttrValue>) -> NavHandle {
    let tracker = {
        let config = config.clone();
        use_mut_ref(move || {
            let tracker = NavTracker::new(config);
            match initial_path {
                Some(path) => tracker.at_path(&path),
                None => tracker,
            }
        })
    };
    let redraw = use_force_update();

    #[cfg(target_arch = "wasm32")]
    let () = super::observer::use_anchor_observer(&tracker, &redraw);

    NavHandle { tracker, redraw }
}
