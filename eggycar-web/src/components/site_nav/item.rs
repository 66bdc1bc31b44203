use crate::i18n::t;
use eggycar_core::NavItem;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct NavButtonProps {
    pub item: NavItem,
    pub active: bool,
    #[prop_or_default]
    pub mobile: bool,
    pub on_select: Callback<NavItem>,
}

#[function_component(NavButton)]
pub fn nav_button(props: &NavButtonProps) -> Html {
    let onclick = {
        let item = props.item.clone();
        let cb = props.on_select.clone();
        Callback::from(move |_: MouseEvent| cb.emit(item.clone()))
    };
    let class = classes!(
        "site-nav__item",
        props.mobile.then_some("site-nav__item--mobile"),
        if props.active {
            "site-nav__item--active"
        } else {
            "site-nav__item--idle"
        }
    );
    let aria_current = props.active.then_some(if props.item.is_anchor() {
        "location"
    } else {
        "page"
    });

    html! {
        <button
            type="button"
            {class}
            {onclick}
            aria-current={aria_current}
            data-nav-id={props.item.id.clone()}
        >
            { t(&props.item.label) }
            if props.active && !props.mobile {
                <span class="site-nav__indicator" aria-hidden="true"></span>
            }
        </button>
    }
}
