//! Eggy Car Core
//!
//! Platform-agnostic logic for the Eggy Car Unblocked site: navigation
//! registries and activity tracking, the game catalog, per-game content and
//! the sitemap model. Nothing in this crate touches the browser.

pub mod catalog;
pub mod content;
pub mod fullscreen;
pub mod nav;
pub mod sitemap;
pub mod slug;
pub mod tracker;

pub use catalog::{Catalog, CatalogError, Game, RECOMMENDED_COUNT};
pub use content::{ContentTable, GameContent};
pub use fullscreen::{FullscreenRequest, FullscreenToggle};
pub use nav::{
    DETAILS_NAV_HEIGHT_PX, INITIAL_ACTIVE_ANCHOR, NavConfig, NavError, NavItem, NavKind,
};
pub use sitemap::{
    ChangeFrequency, DEFAULT_BASE_URL, SitemapEntry, SitemapError, build_sitemap,
    normalize_base_url, render_xml,
};
pub use slug::slugify;
pub use tracker::{ActivityState, NavAction, NavTracker, TargetLookup};

/// Source of the catalog and per-game content.
/// Platform-specific front ends can provide their own implementation.
pub trait SiteLoader {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the game catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded or validated.
    fn load_catalog(&self) -> Result<Catalog, Self::Error>;

    /// Load hand-written game content.
    ///
    /// # Errors
    ///
    /// Returns an error if the content cannot be loaded or parsed.
    fn load_content(&self) -> Result<ContentTable, Self::Error>;
}

/// Loader backed by the data compiled into this crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedLoader;

impl SiteLoader for EmbeddedLoader {
    type Error = CatalogError;

    fn load_catalog(&self) -> Result<Catalog, Self::Error> {
        Catalog::embedded().cloned()
    }

    fn load_content(&self) -> Result<ContentTable, Self::Error> {
        Ok(ContentTable::embedded().clone())
    }
}

/// Everything a page needs to render: the catalog and its content.
#[derive(Debug, Clone, PartialEq)]
pub struct Site {
    pub catalog: Catalog,
    pub content: ContentTable,
}

impl Site {
    /// Load catalog and content through `loader`.
    ///
    /// # Errors
    ///
    /// Returns the loader's error if either part fails to load.
    pub fn load<L: SiteLoader>(loader: &L) -> Result<Self, L::Error> {
        Ok(Self {
            catalog: loader.load_catalog()?,
            content: loader.load_content()?,
        })
    }

    /// Game and its resolved content for a detail-page slug.
    #[must_use]
    pub fn game_page(&self, slug: &str) -> Option<(&Game, GameContent)> {
        self.catalog
            .find_by_slug(slug)
            .map(|game| (game, self.content.for_game(game)))
    }
}
