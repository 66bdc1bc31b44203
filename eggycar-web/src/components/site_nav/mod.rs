//! Navigation bar shared by every page.
//!
//! One component, parameterized by a [`NavConfig`] registry. Page entries are
//! active while the current path matches; anchor entries follow the section
//! most recently scrolled into view.

mod hook;
mod item;
#[cfg(target_arch = "wasm32")]
mod observer;
mod search;

pub use hook::{NavHandle, use_nav_tracker};
pub use item::{NavButton, NavButtonProps};
pub use search::{SearchBox, SearchBoxProps};

use crate::i18n::t;
use crate::paths::site_href;
use eggycar_core::{NavConfig, NavItem};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SiteNavProps {
    pub config: NavConfig,
    /// Path assumed until the browser reports the real one.
    #[prop_or_default]
    pub initial_path: Option<AttrValue>,
    /// Enables the search box; called with the query on every keystroke.
    #[prop_or_default]
    pub on_search: Option<Callback<String>>,
    #[prop_or_default]
    pub search_value: AttrValue,
}

#[function_component(SiteNav)]
pub fn site_nav(props: &SiteNavProps) -> Html {
    let nav = use_nav_tracker(&props.config, props.initial_path.clone());
    let items = nav.items();
    let menu_open = nav.menu_open();

    let on_select = {
        let nav = nav.clone();
        Callback::from(move |item: NavItem| nav.navigate(&item))
    };
    let on_toggle = {
        let nav = nav.clone();
        Callback::from(move |_: MouseEvent| nav.toggle_menu())
    };

    let render_items = |mobile: bool| -> Html {
        items
            .iter()
            .map(|item| {
                html! {
                    <NavButton
                        key={item.id.clone()}
                        item={item.clone()}
                        active={nav.is_active(item)}
                        {mobile}
                        on_select={on_select.clone()}
                    />
                }
            })
            .collect()
    };
    let search = |class: &'static str| -> Html {
        props.on_search.as_ref().map_or_else(Html::default, |cb| {
            html! {
                <SearchBox
                    value={props.search_value.clone()}
                    on_search={cb.clone()}
                    class={classes!(class)}
                />
            }
        })
    };
    let toggle_label = if menu_open {
        t("nav.close_menu")
    } else {
        t("nav.open_menu")
    };

    html! {
        <nav class="site-nav" role="navigation" aria-label={t("nav.aria_label")} data-testid="site-nav">
            <div class="site-nav__bar">
                <div class="site-nav__brand">
                    <span class="site-nav__logo" aria-hidden="true">{ "▶" }</span>
                    <a href={site_href("/")}>{ t("site.name") }</a>
                </div>
                <div class="site-nav__links">
                    { render_items(false) }
                </div>
                <div class="site-nav__tools">
                    { search("site-nav__search--desktop") }
                    <button
                        type="button"
                        class="site-nav__menu-toggle"
                        aria-controls="site-nav-menu"
                        aria-expanded={menu_open.to_string()}
                        aria-label={toggle_label}
                        onclick={on_toggle}
                    >
                        { if menu_open { "✕" } else { "☰" } }
                    </button>
                </div>
            </div>
            if menu_open {
                <div id="site-nav-menu" class="site-nav__mobile">
                    { render_items(true) }
                    { search("site-nav__search--mobile") }
                </div>
            }
        </nav>
    }
}
