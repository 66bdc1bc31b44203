use crate::components::layout::PageShell;
use crate::i18n::t;
use eggycar_core::NavConfig;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StaticPageProps {
    /// Translation prefix holding `title`, `updated` and `body`.
    pub key_prefix: AttrValue,
    pub path: AttrValue,
}

/// Text page under the catalog navigation.
#[function_component(StaticPage)]
pub fn static_page(props: &StaticPageProps) -> Html {
    let key = |leaf: &str| t(&format!("{}.{leaf}", props.key_prefix));
    let body = key("body");
    html! {
        <PageShell nav={NavConfig::catalog()} path={props.path.clone()}>
            <article class="static-page" data-testid={format!("{}-page", props.key_prefix)}>
                <h1>{ key("title") }</h1>
                <p class="static-page__updated">{ key("updated") }</p>
                { for body.split("\n\n").map(|para| html! { <p>{ para.to_string() }</p> }) }
            </article>
        </PageShell>
    }
}

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    html! { <StaticPage key_prefix="about" path="/about" /> }
}

#[function_component(PrivacyPage)]
pub fn privacy_page() -> Html {
    html! { <StaticPage key_prefix="privacy" path="/privacy" /> }
}

#[function_component(TermsPage)]
pub fn terms_page() -> Html {
    html! { <StaticPage key_prefix="terms" path="/terms" /> }
}
