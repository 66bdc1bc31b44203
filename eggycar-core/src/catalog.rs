//! The static game catalog.

use crate::slug::slugify;
use once_cell::sync::Lazy;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Number of recommendations shown under a game on its detail page.
pub const RECOMMENDED_COUNT: usize = 4;

static EMBEDDED: Lazy<Result<Catalog, CatalogError>> =
    Lazy::new(|| Catalog::from_json(include_str!("../data/games.json")));

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog JSON is malformed: {0}")]
    Json(String),
    #[error("catalog has no games")]
    Empty,
    #[error("two games share the slug `{0}`")]
    DuplicateSlug(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: u32,
    pub title: String,
    pub rating: f32,
    pub players: String,
    pub category: String,
    pub image: String,
    pub description: String,
    /// Tailwind gradient classes painted behind the cover image.
    #[serde(default)]
    pub gradient: String,
}

impl Game {
    #[must_use]
    pub fn slug(&self) -> String {
        slugify(&self.title)
    }

    /// Site-relative path of this game's detail page.
    #[must_use]
    pub fn details_path(&self) -> String {
        format!("/game-details/{}", self.slug())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    games: Vec<Game>,
}

impl Catalog {
    /// Parse a JSON array of games.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed, empty, or two titles
    /// produce the same slug.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let games: Vec<Game> = serde_json::from_str(json)?;
        Self::from_games(games)
    }

    /// Wrap pre-built games, enforcing slug uniqueness.
    ///
    /// # Errors
    ///
    /// Returns an error if `games` is empty or two titles share a slug.
    pub fn from_games(games: Vec<Game>) -> Result<Self, CatalogError> {
        if games.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut slugs = BTreeSet::new();
        for game in &games {
            let slug = game.slug();
            if !slugs.insert(slug.clone()) {
                return Err(CatalogError::DuplicateSlug(slug));
            }
        }
        Ok(Self { games })
    }

    /// Catalog compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns the parse error of the bundled data, if any.
    pub fn embedded() -> Result<&'static Self, CatalogError> {
        EMBEDDED.as_ref().map_err(Clone::clone)
    }

    #[must_use]
    pub fn games(&self) -> &[Game] {
        &self.games
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Game shown in the landing page player.
    #[must_use]
    pub fn featured(&self) -> Option<&Game> {
        self.games.first()
    }

    #[must_use]
    pub fn find_by_id(&self, id: u32) -> Option<&Game> {
        self.games.iter().find(|game| game.id == id)
    }

    #[must_use]
    pub fn find_by_slug(&self, slug: &str) -> Option<&Game> {
        self.games.iter().find(|game| game.slug() == slug)
    }

    /// Case-insensitive match on title, category or description.
    /// A blank query matches everything.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Game> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.games.iter().collect();
        }
        self.games
            .iter()
            .filter(|game| {
                [&game.title, &game.category, &game.description]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Up to `count` other games in random order.
    pub fn recommended<R>(&self, exclude_id: u32, count: usize, rng: &mut R) -> Vec<&Game>
    where
        R: Rng + ?Sized,
    {
        let mut others: Vec<&Game> = self
            .games
            .iter()
            .filter(|game| game.id != exclude_id)
            .collect();
        others.shuffle(rng);
        others.truncate(count);
        others
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn game(id: u32, title: &str, category: &str) -> Game {
        Game {
            id,
            title: title.to_string(),
            rating: 4.5,
            players: "1K".to_string(),
            category: category.to_string(),
            image: format!("/images/{id}.png"),
            description: format!("{title} description"),
            gradient: String::new(),
        }
    }

    #[test]
    fn embedded_catalog_parses_and_features_eggy_car() {
        let catalog = Catalog::embedded().unwrap();
        assert!(catalog.len() >= 5);
        let featured = catalog.featured().unwrap();
        assert_eq!(featured.slug(), "eggy-car");
        assert_eq!(featured.details_path(), "/game-details/eggy-car");
    }

    #[test]
    fn lookups_by_slug_and_id() {
        let catalog = Catalog::embedded().unwrap();
        let moto = catalog.find_by_slug("moto-x3m").unwrap();
        assert_eq!(catalog.find_by_id(moto.id), Some(moto));
        assert!(catalog.find_by_slug("missing-game").is_none());
    }

    #[test]
    fn duplicate_slugs_are_rejected() {
        let err = Catalog::from_games(vec![
            game(1, "Eggy Car", "Driving"),
            game(2, "eggy  car", "Driving"),
        ])
        .unwrap_err();
        assert_eq!(err, CatalogError::DuplicateSlug("eggy-car".into()));
        assert_eq!(Catalog::from_games(Vec::new()), Err(CatalogError::Empty));
    }

    #[test]
    fn malformed_json_reports_parse_error() {
        let err = Catalog::from_json("[{\"id\": 1}]").unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
    }

    #[test]
    fn search_matches_title_category_and_description() {
        let catalog = Catalog::from_games(vec![
            game(1, "Eggy Car", "Driving"),
            game(2, "Slope", "Arcade"),
            game(3, "Retro Bowl", "Sports"),
        ])
        .unwrap();
        let titles = |q: &str| -> Vec<String> {
            catalog.search(q).iter().map(|g| g.title.clone()).collect()
        };
        assert_eq!(titles("EGGY"), ["Eggy Car"]);
        assert_eq!(titles("arcade"), ["Slope"]);
        assert_eq!(titles("bowl description"), ["Retro Bowl"]);
        assert_eq!(titles("   ").len(), 3);
        assert!(titles("chess").is_empty());
    }

    #[test]
    fn recommendations_exclude_current_game() {
        let catalog = Catalog::embedded().unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let picks = catalog.recommended(1, RECOMMENDED_COUNT, &mut rng);
        assert_eq!(picks.len(), RECOMMENDED_COUNT);
        assert!(picks.iter().all(|g| g.id != 1));
        let unique: BTreeSet<u32> = picks.iter().map(|g| g.id).collect();
        assert_eq!(unique.len(), RECOMMENDED_COUNT);
    }

    #[test]
    fn recommendations_are_deterministic_per_seed() {
        let catalog = Catalog::embedded().unwrap();
        let a: Vec<u32> = catalog
            .recommended(2, 4, &mut ChaCha8Rng::seed_from_u64(99))
            .iter()
            .map(|g| g.id)
            .collect();
        let b: Vec<u32> = catalog
            .recommended(2, 4, &mut ChaCha8Rng::seed_from_u64(99))
            .iter()
            .map(|g| g.id)
            .collect();
        assert_eq!(a, b);
    }

    #[test]
    fn recommendations_cap_at_available_games() {
        let catalog = Catalog::from_games(vec![game(1, "A", "x"), game(2, "B", "y")]).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let picks = catalog.recommended(1, 4, &mut rng);
        assert_eq!(picks.len(), 1);
        assert_eq!(picks[0].id, 2);
    }
}
