use crate::i18n::t;
use crate::paths::site_href;
use crate::router::Route;
use yew::prelude::*;
use yew_router::Routable;

/// "Quick Links" block shown at the bottom of the 404 and error pages.
#[function_component(QuickLinks)]
pub fn quick_links() -> Html {
    html! {
        <div class="quick-links">
            <p class="quick-links__title">{ t("links.title") }</p>
            <div class="quick-links__list">
                { for Route::quick_links().into_iter().map(|(route, key)| html! {
                    <a class="quick-links__link" href={site_href(&route.to_path())}>{ t(key) }</a>
                }) }
            </div>
        </div>
    }
}
