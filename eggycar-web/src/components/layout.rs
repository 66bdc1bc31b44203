use crate::components::footer::Footer;
use crate::components::site_nav::SiteNav;
use crate::i18n::t;
use eggycar_core::NavConfig;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PageShellProps {
    pub nav: NavConfig,
    pub path: AttrValue,
    #[prop_or_default]
    pub on_search: Option<Callback<String>>,
    #[prop_or_default]
    pub search_value: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

/// Navigation bar, main landmark and footer around a page body.
#[function_component(PageShell)]
pub fn page_shell(props: &PageShellProps) -> Html {
    html! {
        <div class="page-shell">
            <a href="#main" class="sr-only">{ t("ui.skip_to_content") }</a>
            <SiteNav
                key={props.path.to_string()}
                config={props.nav.clone()}
                initial_path={Some(props.path.clone())}
                on_search={props.on_search.clone()}
                search_value={props.search_value.clone()}
            />
            <main id="main" role="main" class="page-main">
                { props.children.clone() }
            </main>
            <Footer />
        </div>
    }
}
