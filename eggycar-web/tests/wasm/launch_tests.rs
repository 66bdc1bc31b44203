use crate::{ensure_root, scroll_y, settle};
use eggycar_core::{EmbeddedLoader, Site};
use eggycar_web::dom;
use eggycar_web::pages::GameDetailsPage;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;
use yew::prelude::*;
use yew::Renderer;
use yew_router::prelude::*;

#[function_component(DetailsInRouter)]
fn details_in_router() -> Html {
    let site = Rc::new(Site::load(&EmbeddedLoader).expect("embedded site"));
    html! {
        <BrowserRouter>
            <GameDetailsPage {site} slug="slope" seed={Some(3)} />
            <div style="height: 300vh"></div>
        </BrowserRouter>
    }
}

#[wasm_bindgen_test]
async fn launching_a_recommended_game_returns_to_the_top() {
    Renderer::<DetailsInRouter>::with_root(ensure_root()).render();
    settle().await;

    let win = dom::window().expect("window");
    win.scroll_to_with_x_and_y(0.0, 100_000.0);
    settle().await;
    assert!(scroll_y() > 0.0);

    let card = dom::document()
        .expect("document")
        .query_selector("[data-testid='recommended-grid'] .game-card")
        .expect("query")
        .expect("recommended card")
        .dyn_into::<HtmlElement>()
        .expect("html element");
    card.click();
    settle().await;

    assert!(scroll_y().abs() < f64::EPSILON);
    assert!(dom::current_path().starts_with("/game-details/"));
}
