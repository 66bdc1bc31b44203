use crate::pages::{
    AboutPage, ErrorPage, GameDetailsPage, HomePage, NotFoundPage, PrivacyPage, TermsPage,
};
use crate::router::Route;
use eggycar_core::{CatalogError, EmbeddedLoader, Site};
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

/// Load the compiled-in catalog and content.
///
/// # Errors
///
/// Returns the catalog error when the embedded data fails validation.
pub fn load_site() -> Result<Rc<Site>, CatalogError> {
    Site::load(&EmbeddedLoader).map(Rc::new)
}

#[must_use]
pub fn render_route(site: &Rc<Site>, route: Route) -> Html {
    log::debug!("rendering route {route:?}");
    match route {
        Route::Home => html! { <HomePage site={site.clone()} /> },
        Route::About => html! { <AboutPage /> },
        Route::Privacy => html! { <PrivacyPage /> },
        Route::Terms => html! { <TermsPage /> },
        Route::GameDetails { slug } => html! {
            <GameDetailsPage site={site.clone()} slug={slug} />
        },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <AppInner />
        </BrowserRouter>
    }
}

/// Route switch over the loaded site, with the error page as fallback.
#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let site = use_state(load_site);
    let navigator = use_navigator();

    match &*site {
        Ok(site) => {
            let site = site.clone();
            html! {
                <Switch<Route> render={move |route| render_route(&site, route)} />
            }
        }
        Err(err) => {
            let on_retry = {
                let site = site.clone();
                Callback::from(move |()| site.set(load_site()))
            };
            let on_home = Callback::from(move |()| go_home(navigator.as_ref()));
            html! {
                <ErrorPage
                    message={crate::i18n::t("error.load_failed")}
                    details={Some(AttrValue::from(err.to_string()))}
                    {on_retry}
                    {on_home}
                />
            }
        }
    }
}

fn go_home(navigator: Option<&Navigator>) {
    match navigator {
        Some(navigator) => navigator.push(&Route::Home),
        None => {
            #[cfg(target_arch = "wasm32")]
            {
                crate::dom::load_page("/");
            }
        }
    }
}
