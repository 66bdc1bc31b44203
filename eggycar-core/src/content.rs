use crate::catalog::Game;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

static EMBEDDED: Lazy<ContentTable> = Lazy::new(|| {
    ContentTable::from_json(include_str!("../data/content.json")).unwrap_or_else(|err| {
        log::warn!("bundled game content failed to parse, using defaults: {err}");
        ContentTable::default()
    })
});

/// Long-form copy and embed location for one game's detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameContent {
    pub introduction: String,
    pub guide: String,
    pub faq: String,
    pub embed_path: String,
}

impl GameContent {
    /// Copy used for games that ship without hand-written content.
    #[must_use]
    pub fn fallback_for(game: &Game) -> Self {
        let slug = game.slug();
        Self {
            introduction: game.description.clone(),
            guide: format!(
                "{title} runs right in your browser. Click the game window to focus it, then use the on-screen prompts to learn the controls.",
                title = game.title
            ),
            faq: format!(
                "Is {title} free to play?\nYes. No download or account is needed.",
                title = game.title
            ),
            embed_path: format!("/games/{slug}/index.html"),
        }
    }
}

/// Per-game content keyed by slug.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentTable {
    entries: BTreeMap<String, GameContent>,
}

impl ContentTable {
    /// Parse a JSON object mapping slugs to content.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is not a slug-to-content object.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn embedded() -> &'static Self {
        &EMBEDDED
    }

    #[must_use]
    pub fn get(&self, slug: &str) -> Option<&GameContent> {
        self.entries.get(slug)
    }

    /// Hand-written content for `game`, or generated copy when none exists.
    #[must_use]
    pub fn for_game(&self, game: &Game) -> GameContent {
        self.get(&game.slug())
            .cloned()
            .unwrap_or_else(|| GameContent::fallback_for(game))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
