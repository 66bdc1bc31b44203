use crate::i18n::t;
use crate::paths::site_href;
use crate::router::Route;
use yew::prelude::*;
use yew_router::Routable;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer" role="contentinfo">
            <nav class="site-footer__links" aria-label={t("footer.links_label")}>
                { for Route::quick_links().into_iter().map(|(route, key)| html! {
                    <a href={site_href(&route.to_path())}>{ t(key) }</a>
                }) }
            </nav>
            <p class="site-footer__copyright">{ t("footer.copyright") }</p>
        </footer>
    }
}
