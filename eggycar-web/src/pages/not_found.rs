use crate::components::layout::PageShell;
use crate::components::quick_links::QuickLinks;
use crate::i18n::t;
use crate::paths::site_href;
use eggycar_core::NavConfig;
use yew::prelude::*;

/// Shown for unknown routes and unknown game slugs.
#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <PageShell nav={NavConfig::catalog()} path="/404">
            <section class="not-found" aria-live="assertive" data-testid="not-found">
                <div class="not-found__glyph" aria-hidden="true">{ "🥚" }</div>
                <h1 class="not-found__code">{ "404" }</h1>
                <h2>{ t("not_found.title") }</h2>
                <p>{ t("not_found.message") }</p>
                <a class="not-found__home" href={site_href("/")}>{ t("not_found.back") }</a>
                <QuickLinks />
            </section>
        </PageShell>
    }
}
