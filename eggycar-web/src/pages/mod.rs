pub mod error;
pub mod game_details;
pub mod home;
pub mod not_found;
pub mod static_page;

pub use error::ErrorPage;
pub use game_details::GameDetailsPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use static_page::{AboutPage, PrivacyPage, StaticPage, TermsPage};

use crate::router::Route;
use eggycar_core::Game;
use yew::prelude::*;
use yew_router::prelude::*;

/// Callback that opens a game's detail page.
///
/// Inside a router the route is pushed and the window returns to the top.
/// Without one it falls back to a full page load of the detail path.
#[hook]
pub fn use_launch_game() -> Callback<Game> {
    let navigator = use_navigator();
    Callback::from(move |game: Game| {
        log::info!("launching {}", game.title);
        match &navigator {
            Some(navigator) => {
                navigator.push(&Route::for_game(&game));
                reset_scroll();
            }
            None => open_details(&game),
        }
    })
}

#[cfg(target_arch = "wasm32")]
fn reset_scroll() {
    crate::dom::scroll_to_top();
}

#[cfg(not(target_arch = "wasm32"))]
const fn reset_scroll() {}

#[cfg(target_arch = "wasm32")]
fn open_details(game: &Game) {
    crate::dom::load_page(&game.details_path());
}

#[cfg(not(target_arch = "wasm32"))]
fn open_details(game: &Game) {
    log::debug!("no browser to open {}", game.details_path());
}
