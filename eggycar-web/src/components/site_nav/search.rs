use crate::i18n::t;
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SearchBoxProps {
    pub value: AttrValue,
    pub on_search: Callback<String>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(SearchBox)]
pub fn search_box(props: &SearchBoxProps) -> Html {
    let oninput = {
        let cb = props.on_search.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e
                .target()
                .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
            {
                cb.emit(input.value());
            }
        })
    };
    let placeholder = t("nav.search_placeholder");
    html! {
        <label class={classes!("site-nav__search", props.class.clone())}>
            <span class="sr-only">{ placeholder.clone() }</span>
            <span class="site-nav__search-icon" aria-hidden="true">{ "⌕" }</span>
            <input
                type="search"
                {placeholder}
                value={props.value.clone()}
                {oninput}
            />
        </label>
    }
}
