//! Navigation activity tracking.
//!
//! [`NavTracker`] owns the [`ActivityState`] of one navigation bar and answers
//! "is this entry active" for every entry of its registry. It is driven by two
//! independent signals: the current document path and intersection deliveries
//! for anchor targets. The browser layer owns the actual observer; the tracker
//! only records which ids it agreed to watch.

use crate::nav::{INITIAL_ACTIVE_ANCHOR, NavConfig, NavItem, NavKind};
use std::collections::BTreeSet;

/// Resolves anchor ids to render targets at mount time.
pub trait TargetLookup {
    /// Whether an element with this id exists in the current document.
    fn contains(&self, id: &str) -> bool;
}

impl<F> TargetLookup for F
where
    F: Fn(&str) -> bool,
{
    fn contains(&self, id: &str) -> bool {
        self(id)
    }
}

impl TargetLookup for [&str] {
    fn contains(&self, id: &str) -> bool {
        self.iter().any(|candidate| *candidate == id)
    }
}

impl TargetLookup for BTreeSet<String> {
    fn contains(&self, id: &str) -> bool {
        BTreeSet::contains(self, id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityState {
    pub current_path: String,
    pub active_anchor_id: String,
}

impl Default for ActivityState {
    fn default() -> Self {
        Self {
            current_path: String::from("/"),
            active_anchor_id: String::from(INITIAL_ACTIVE_ANCHOR),
        }
    }
}

/// What the browser should do in response to a navigation click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavAction {
    /// Full page load of the target URL.
    Load(String),
    /// Smooth scroll to the element with `id`, leaving `offset_px` above it.
    ScrollTo { id: String, offset_px: i32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavTracker {
    config: NavConfig,
    state: ActivityState,
    watched: Vec<String>,
    mounted: bool,
    menu_open: bool,
}

impl NavTracker {
    #[must_use]
    pub fn new(config: NavConfig) -> Self {
        Self {
            config,
            state: ActivityState::default(),
            watched: Vec::new(),
            mounted: false,
            menu_open: false,
        }
    }

    /// Seed the path used before mount, e.g. for server-side rendering.
    #[must_use]
    pub fn at_path(mut self, path: &str) -> Self {
        self.state.current_path = path.to_string();
        self
    }

    #[must_use]
    pub const fn config(&self) -> &NavConfig {
        &self.config
    }

    #[must_use]
    pub const fn state(&self) -> &ActivityState {
        &self.state
    }

    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Ids currently registered for intersection delivery.
    #[must_use]
    pub fn watched(&self) -> &[String] {
        &self.watched
    }

    /// Capture `path` and register every anchor target that `targets` resolves.
    ///
    /// Returns the registered ids in registry order. Anchors without a target
    /// in the document are skipped. Mounting again resets the state.
    pub fn on_mount<L>(&mut self, path: &str, targets: &L) -> &[String]
    where
        L: TargetLookup + ?Sized,
    {
        self.state = ActivityState {
            current_path: path.to_string(),
            ..ActivityState::default()
        };
        self.menu_open = false;
        self.watched = self
            .config
            .anchors()
            .filter(|item| targets.contains(&item.id))
            .map(|item| item.id.clone())
            .collect();
        self.mounted = true;
        log::debug!(
            "nav tracker mounted at {path}, watching {} anchor(s)",
            self.watched.len()
        );
        &self.watched
    }

    /// Record an intersection delivery. Returns true when the state changed.
    ///
    /// Exits are ignored: the last anchor to enter stays active until another
    /// one enters. Ids that were not registered at mount are ignored, as is
    /// everything delivered after [`Self::on_unmount`].
    pub fn on_intersection(&mut self, target_id: &str, is_intersecting: bool) -> bool {
        if !is_intersecting || !self.mounted {
            return false;
        }
        if !self.watched.iter().any(|id| id == target_id) {
            return false;
        }
        if self.state.active_anchor_id == target_id {
            return false;
        }
        self.state.active_anchor_id = target_id.to_string();
        true
    }

    /// Apply one observer batch in delivery order; later entries win.
    pub fn on_intersection_batch<'a, I>(&mut self, entries: I) -> bool
    where
        I: IntoIterator<Item = (&'a str, bool)>,
    {
        entries
            .into_iter()
            .fold(false, |changed, (id, hit)| self.on_intersection(id, hit) || changed)
    }

    #[must_use]
    pub fn is_active(&self, item: &NavItem) -> bool {
        match item.kind {
            NavKind::Page => self.state.current_path == item.target,
            NavKind::Anchor => {
                let path_ok = self
                    .config
                    .anchor_requires_path
                    .as_deref()
                    .is_none_or(|required| required == self.state.current_path);
                path_ok && self.state.active_anchor_id == item.id
            }
        }
    }

    #[must_use]
    pub fn is_active_id(&self, id: &str) -> bool {
        self.config.item(id).is_some_and(|item| self.is_active(item))
    }

    pub fn active_items(&self) -> impl Iterator<Item = &NavItem> {
        self.config.items().iter().filter(|item| self.is_active(item))
    }

    /// Handle a click on `item`, closing the mobile menu first.
    ///
    /// Page entries discard the anchor state and adopt the target as the
    /// current path; anchor entries keep the state and wait for the next
    /// intersection to update it.
    pub fn on_navigate(&mut self, item: &NavItem) -> NavAction {
        self.menu_open = false;
        match item.kind {
            NavKind::Page => {
                self.state = ActivityState {
                    current_path: item.target.clone(),
                    ..ActivityState::default()
                };
                NavAction::Load(item.target.clone())
            }
            NavKind::Anchor => NavAction::ScrollTo {
                id: item.id.clone(),
                offset_px: self.config.anchor_offset_px,
            },
        }
    }

    /// Release every registered watch. Returns the ids that were released.
    pub fn on_unmount(&mut self) -> Vec<String> {
        self.mounted = false;
        self.menu_open = false;
        std::mem::take(&mut self.watched)
    }

    #[must_use]
    pub const fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub const fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub const fn close_menu(&mut self) {
        self.menu_open = false;
    }
}
