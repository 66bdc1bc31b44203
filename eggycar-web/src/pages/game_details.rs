use crate::components::game_card::GameCard;
use crate::components::game_embed::GameEmbed;
use crate::components::layout::PageShell;
use crate::i18n::t;
use crate::pages::not_found::NotFoundPage;
use crate::pages::use_launch_game;
use eggycar_core::{Game, NavConfig, RECOMMENDED_COUNT, Site};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GameDetailsPageProps {
    pub site: Rc<Site>,
    pub slug: AttrValue,
    /// Fixes the recommendation shuffle; drawn from the clock when absent.
    #[prop_or_default]
    pub seed: Option<u64>,
}

#[function_component(GameDetailsPage)]
pub fn game_details_page(props: &GameDetailsPageProps) -> Html {
    let on_launch = use_launch_game();
    let seed = *use_state(|| props.seed.unwrap_or_else(entropy_seed));
    let recommended = {
        let site = props.site.clone();
        let slug = props.slug.clone();
        use_memo((slug, seed), move |(slug, seed)| {
            recommended_for(&site, slug, *seed)
        })
    };

    let Some((game, content)) = props.site.game_page(&props.slug) else {
        log::warn!("no game with slug {}", props.slug);
        return html! { <NotFoundPage /> };
    };

    let nav = NavConfig::game_details();
    let path = game.details_path();

    html! {
        <PageShell nav={nav} path={path}>
            <section id="game-section" class="details-hero">
                <h1>{ game.title.clone() }</h1>
                <div class="details-hero__meta">
                    <span class="details-hero__category">{ game.category.clone() }</span>
                    <span class="details-hero__rating">{ format!("★ {:.1}", game.rating) }</span>
                    <span class="details-hero__players">{ game.players.clone() }</span>
                </div>
                <GameEmbed title={game.title.clone()} src={content.embed_path.clone()} />
                <p class="details-hero__intro">{ content.introduction.clone() }</p>
            </section>
            <section id="how-to-play" class="guide-section">
                <h2>{ t("game.how_to_play") }</h2>
                <p>{ content.guide.clone() }</p>
            </section>
            <section id="game-faq" class="guide-section">
                <h2>{ t("game.faq") }</h2>
                <p>{ content.faq.clone() }</p>
            </section>
            <section class="details-recommended" aria-labelledby="recommended-games">
                <h2 id="recommended-games">{ t("game.recommended") }</h2>
                <div class="game-grid" data-testid="recommended-grid">
                    { for recommended.iter().map(|game| html! {
                        <GameCard
                            key={game.id}
                            game={game.clone()}
                            on_launch={on_launch.clone()}
                        />
                    }) }
                </div>
            </section>
        </PageShell>
    }
}

/// Up to [`RECOMMENDED_COUNT`] other games, shuffled by `seed`.
fn recommended_for(site: &Site, slug: &str, seed: u64) -> Vec<Game> {
    let Some(current) = site.catalog.find_by_slug(slug) else {
        return Vec::new();
    };
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    site.catalog
        .recommended(current.id, RECOMMENDED_COUNT, &mut rng)
        .into_iter()
        .cloned()
        .collect()
}

#[cfg(target_arch = "wasm32")]
fn entropy_seed() -> u64 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let seed = (js_sys::Math::random() * 9_007_199_254_740_991.0) as u64;
    seed
}

#[cfg(not(target_arch = "wasm32"))]
fn entropy_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_secs())
}
