use eggycar_core::Game;
use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/privacy")]
    Privacy,
    #[at("/terms")]
    Terms,
    #[at("/game-details/:slug")]
    GameDetails { slug: String },
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    #[must_use]
    pub fn for_game(game: &Game) -> Self {
        Self::GameDetails { slug: game.slug() }
    }

    /// Routes listed under "Quick Links" on the 404 and error pages, with
    /// their label keys.
    #[must_use]
    pub const fn quick_links() -> [(Self, &'static str); 4] {
        [
            (Self::Home, "links.play_games"),
            (Self::About, "links.about"),
            (Self::Privacy, "links.privacy"),
            (Self::Terms, "links.terms"),
        ]
    }
}
