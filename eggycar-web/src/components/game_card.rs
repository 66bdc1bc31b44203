use crate::paths::asset_path;
use eggycar_core::Game;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GameCardProps {
    pub game: Game,
    pub on_launch: Callback<Game>,
}

/// Catalog tile. Clicking or pressing Enter launches the game's detail page;
/// a cover that fails to load is replaced by a placeholder glyph.
#[function_component(GameCard)]
pub fn game_card(props: &GameCardProps) -> Html {
    let image_failed = use_state(|| false);
    let game = &props.game;

    let onerror = {
        let image_failed = image_failed.clone();
        Callback::from(move |_: Event| image_failed.set(true))
    };
    let onclick = {
        let cb = props.on_launch.clone();
        let game = game.clone();
        Callback::from(move |_: MouseEvent| cb.emit(game.clone()))
    };
    let onkeydown = {
        let cb = props.on_launch.clone();
        let game = game.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                cb.emit(game.clone());
            }
        })
    };

    let cover = if *image_failed {
        html! { <div class="game-card__placeholder" aria-hidden="true">{ "🎮" }</div> }
    } else {
        html! {
            <img
                class="game-card__image"
                src={asset_path(&game.image)}
                alt={game.title.clone()}
                loading="lazy"
                {onerror}
            />
        }
    };

    html! {
        <article
            class="game-card"
            role="link"
            tabindex="0"
            data-slug={game.slug()}
            {onclick}
            {onkeydown}
        >
            <div class={format!("game-card__cover bg-gradient-to-br {}", game.gradient)}>
                { cover }
                <span class="game-card__play" aria-hidden="true">{ "▶" }</span>
            </div>
            <div class="game-card__body">
                <h3 class="game-card__title">{ game.title.clone() }</h3>
                <p class="game-card__description">{ game.description.clone() }</p>
                <div class="game-card__meta">
                    <span class="game-card__rating">{ format!("★ {:.1}", game.rating) }</span>
                    <span class="game-card__players">{ game.players.clone() }</span>
                </div>
            </div>
        </article>
    }
}
