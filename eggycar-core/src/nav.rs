//! Navigation registries shared by the site navigation bars.
//!
//! A registry is a fixed, ordered list of [`NavItem`]s plus the options the
//! browser layer needs to observe and scroll to anchor targets. The catalog
//! landing page and the game detail page each use their own registry.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Anchor id the tracker starts from. It matches no registry entry, so no
/// anchor renders active until the first intersection arrives.
pub const INITIAL_ACTIVE_ANCHOR: &str = "game-section";

/// Height of the fixed game-detail navigation bar, used to offset anchor scrolls.
pub const DETAILS_NAV_HEIGHT_PX: i32 = 80;

/// Whether a navigation entry leaves the page or scrolls within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavKind {
    Page,
    Anchor,
}

/// One entry in a navigation bar.
///
/// `label` is a translation key resolved by the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub target: String,
    pub label: String,
    pub id: String,
    pub kind: NavKind,
}

impl NavItem {
    /// Entry that navigates to a distinct URL.
    #[must_use]
    pub fn page(id: &str, label: &str, target: &str) -> Self {
        Self {
            target: target.to_string(),
            label: label.to_string(),
            id: id.to_string(),
            kind: NavKind::Page,
        }
    }

    /// Entry that scrolls to the element whose id equals `id`.
    #[must_use]
    pub fn anchor(id: &str, label: &str) -> Self {
        Self {
            target: format!("#{id}"),
            label: label.to_string(),
            id: id.to_string(),
            kind: NavKind::Anchor,
        }
    }

    #[must_use]
    pub const fn is_anchor(&self) -> bool {
        matches!(self.kind, NavKind::Anchor)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavError {
    #[error("navigation registry is empty")]
    Empty,
    #[error("duplicate navigation id `{0}`")]
    DuplicateId(String),
}

/// Registry plus the observation and scroll options of one navigation bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavConfig {
    items: Vec<NavItem>,
    /// Pixels subtracted from an anchor's page offset when scrolling to it.
    /// Zero means the target is scrolled to the top edge of the viewport.
    pub anchor_offset_px: i32,
    /// `rootMargin` handed to the intersection observer.
    pub root_margin: String,
    /// When set, anchor entries only render active while the current path
    /// equals this value.
    pub anchor_requires_path: Option<String>,
}

impl NavConfig {
    /// Build a registry from `items`, rejecting empty lists and duplicate ids.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::Empty`] when no items are given and
    /// [`NavError::DuplicateId`] when two items share an id.
    pub fn new(items: Vec<NavItem>) -> Result<Self, NavError> {
        if items.is_empty() {
            return Err(NavError::Empty);
        }
        let mut seen = BTreeSet::new();
        for item in &items {
            if !seen.insert(item.id.as_str()) {
                return Err(NavError::DuplicateId(item.id.clone()));
            }
        }
        Ok(Self {
            items,
            anchor_offset_px: 0,
            root_margin: String::from("0px"),
            anchor_requires_path: None,
        })
    }

    #[must_use]
    pub const fn with_anchor_offset(mut self, offset_px: i32) -> Self {
        self.anchor_offset_px = offset_px;
        self
    }

    #[must_use]
    pub fn with_root_margin(mut self, margin: &str) -> Self {
        self.root_margin = margin.to_string();
        self
    }

    #[must_use]
    pub fn with_anchor_path(mut self, path: &str) -> Self {
        self.anchor_requires_path = Some(path.to_string());
        self
    }

    /// Navigation bar of the catalog landing page.
    #[must_use]
    pub fn catalog() -> Self {
        Self {
            items: vec![
                NavItem::page("home", "nav.home", "/"),
                NavItem::anchor("game-features", "nav.features"),
                NavItem::anchor("game-tips", "nav.tips"),
                NavItem::anchor("controls-guide", "nav.controls"),
                NavItem::anchor("faq", "nav.faq"),
                NavItem::page("about", "nav.about", "/about"),
            ],
            anchor_offset_px: 0,
            root_margin: String::from("-20% 0px -70% 0px"),
            anchor_requires_path: Some(String::from("/")),
        }
    }

    /// Navigation bar of a game detail page.
    #[must_use]
    pub fn game_details() -> Self {
        Self {
            items: vec![
                NavItem::page("home", "nav.home", "/"),
                NavItem::anchor("how-to-play", "nav.how_to_play"),
                NavItem::anchor("game-faq", "nav.faq"),
                NavItem::page("about", "nav.about", "/about"),
            ],
            anchor_offset_px: DETAILS_NAV_HEIGHT_PX,
            root_margin: String::from("-100px 0px -70% 0px"),
            anchor_requires_path: None,
        }
    }

    #[must_use]
    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    pub fn anchors(&self) -> impl Iterator<Item = &NavItem> {
        self.items.iter().filter(|item| item.is_anchor())
    }

    #[must_use]
    pub fn item(&self, id: &str) -> Option<&NavItem> {
        self.items.iter().find(|item| item.id == id)
    }
}
