use crate::components::game_card::GameCard;
use crate::components::game_embed::GameEmbed;
use crate::components::layout::PageShell;
use crate::i18n::{t, tr};
use crate::pages::use_launch_game;
use eggycar_core::{NavConfig, Site};
use std::collections::BTreeMap;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HomePageProps {
    pub site: Rc<Site>,
}

/// Landing page: the featured game, the guide sections the navigation bar
/// tracks, and the searchable catalog grid.
#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let query = use_state(String::new);
    let on_launch = use_launch_game();
    let on_search = {
        let query = query.clone();
        Callback::from(move |value: String| query.set(value))
    };

    let catalog = &props.site.catalog;
    let featured = catalog.featured().map(|game| {
        let content = props.site.content.for_game(game);
        html! {
            <GameEmbed title={game.title.clone()} src={content.embed_path} />
        }
    });

    let results = catalog.search(&query);
    let grid = if results.is_empty() {
        let mut args = BTreeMap::new();
        args.insert("query", query.as_str());
        html! {
            <p class="game-grid__empty" data-testid="no-results">
                { tr("home.no_results", Some(&args)) }
            </p>
        }
    } else {
        html! {
            <div class="game-grid" data-testid="game-grid">
                { for results.into_iter().map(|game| html! {
                    <GameCard
                        key={game.id}
                        game={game.clone()}
                        on_launch={on_launch.clone()}
                    />
                }) }
            </div>
        }
    };

    html! {
        <PageShell
            nav={NavConfig::catalog()}
            path="/"
            on_search={Some(on_search)}
            search_value={AttrValue::from((*query).clone())}
        >
            <section id="game-section" class="home-hero">
                <h1>{ t("home.title") }</h1>
                <p class="home-hero__tagline">{ t("home.tagline") }</p>
                { for featured }
            </section>
            <section class="home-catalog" aria-labelledby="more-games">
                <h2 id="more-games">{ t("home.more_games") }</h2>
                { grid }
            </section>
            { guide_section("game-features", "home.features") }
            { guide_section("game-tips", "home.tips") }
            { guide_section("controls-guide", "home.controls") }
            { guide_section("faq", "home.faq") }
        </PageShell>
    }
}

fn guide_section(id: &'static str, key: &str) -> Html {
    html! {
        <section id={id} class="guide-section">
            <h2>{ t(&format!("{key}.title")) }</h2>
            <p>{ t(&format!("{key}.body")) }</p>
        </section>
    }
}
