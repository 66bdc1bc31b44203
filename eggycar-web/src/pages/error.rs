use crate::components::quick_links::QuickLinks;
use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ErrorPageProps {
    pub message: AttrValue,
    /// Technical detail, rendered in debug builds only.
    #[prop_or_default]
    pub details: Option<AttrValue>,
    pub on_retry: Callback<()>,
    pub on_home: Callback<()>,
}

/// Fallback screen for failures that prevent a page from rendering.
#[function_component(ErrorPage)]
pub fn error_page(props: &ErrorPageProps) -> Html {
    {
        let message = props.message.clone();
        let details = props.details.clone();
        use_effect_with(message, move |message| {
            log::error!(
                "page failed to render: {message} ({})",
                details.as_deref().unwrap_or("no details")
            );
            || {}
        });
    }

    let on_retry = {
        let cb = props.on_retry.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_home = {
        let cb = props.on_home.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let details = props
        .details
        .as_ref()
        .filter(|_| cfg!(debug_assertions))
        .map(|details| {
            html! {
                <details class="error-page__details">
                    <summary>{ t("error.details") }</summary>
                    <pre>{ details.clone() }</pre>
                </details>
            }
        });

    html! {
        <section class="error-page" role="alert" data-testid="error-page">
            <div class="error-page__glyph" aria-hidden="true">{ "💥" }</div>
            <h1>{ t("error.title") }</h1>
            <p class="error-page__message">{ props.message.clone() }</p>
            { for details }
            <div class="error-page__actions">
                <button type="button" class="btn btn-primary" onclick={on_retry}>
                    { t("error.retry") }
                </button>
                <button type="button" class="btn btn-ghost" onclick={on_home}>
                    { t("error.home") }
                </button>
            </div>
            <QuickLinks />
        </section>
    }
}
