//! Sandboxed game iframe with a fullscreen toggle.

use crate::i18n::t;
use eggycar_core::FullscreenToggle;
#[cfg(target_arch = "wasm32")]
use eggycar_core::FullscreenRequest;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GameEmbedProps {
    pub title: AttrValue,
    pub src: AttrValue,
}

#[function_component(GameEmbed)]
pub fn game_embed(props: &GameEmbedProps) -> Html {
    let container = use_node_ref();
    let toggle = use_state(FullscreenToggle::default);

    #[cfg(target_arch = "wasm32")]
    let () = use_fullscreen_sync(toggle.clone());

    let onclick = {
        let container = container.clone();
        let state = *toggle;
        Callback::from(move |_: MouseEvent| apply_request(&container, state))
    };

    html! {
        <div
            ref={container}
            class={classes!("game-embed", toggle.is_active().then_some("fullscreen-container"))}
            data-testid="game-embed"
        >
            <iframe
                class="responsive-iframe"
                src={props.src.clone()}
                title={props.title.clone()}
                sandbox="allow-scripts allow-same-origin"
            />
            <button
                type="button"
                class="game-embed__fullscreen"
                aria-label={t(toggle.label_key())}
                {onclick}
            >
                { if toggle.is_active() { "⤡" } else { "⤢" } }
            </button>
        </div>
    }
}

#[cfg(target_arch = "wasm32")]
fn apply_request(container: &NodeRef, state: FullscreenToggle) {
    let result = match state.request() {
        FullscreenRequest::Enter => container
            .cast::<web_sys::Element>()
            .map_or(Ok(()), |el| crate::dom::request_fullscreen(&el)),
        FullscreenRequest::Exit => crate::dom::exit_fullscreen(),
    };
    if let Err(err) = result {
        log::warn!("fullscreen toggle failed: {err}");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn apply_request(container: &NodeRef, state: FullscreenToggle) {
    let _ = container;
    log::debug!("fullscreen request outside the browser: {:?}", state.request());
}

#[cfg(target_arch = "wasm32")]
const FULLSCREEN_EVENTS: [&str; 3] = [
    "fullscreenchange",
    "webkitfullscreenchange",
    "msfullscreenchange",
];

/// Mirror the document's fullscreen state into `toggle` while mounted.
#[cfg(target_arch = "wasm32")]
#[hook]
fn use_fullscreen_sync(toggle: UseStateHandle<FullscreenToggle>) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    use_effect_with((), move |()| {
        let listener = Closure::<dyn FnMut(web_sys::Event)>::new(move |_e: web_sys::Event| {
            let mut next = FullscreenToggle::default();
            next.sync(crate::dom::fullscreen_active());
            toggle.set(next);
        });
        let doc = crate::dom::document();
        if let Some(doc) = doc.as_ref() {
            for event in FULLSCREEN_EVENTS {
                if let Err(err) =
                    doc.add_event_listener_with_callback(event, listener.as_ref().unchecked_ref())
                {
                    log::warn!(
                        "cannot listen for {event}: {}",
                        crate::dom::js_error_message(&err)
                    );
                }
            }
        }
        move || {
            if let Some(doc) = doc {
                for event in FULLSCREEN_EVENTS {
                    if let Err(err) = doc.remove_event_listener_with_callback(
                        event,
                        listener.as_ref().unchecked_ref(),
                    ) {
                        log::warn!(
                            "cannot stop listening for {event}: {}",
                            crate::dom::js_error_message(&err)
                        );
                    }
                }
            }
            drop(listener);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn embed_renders_sandboxed_iframe_and_enter_button() {
        let props = GameEmbedProps {
            title: AttrValue::from("Eggy Car"),
            src: AttrValue::from("/games/eggy-car/index.html"),
        };
        let html = block_on(LocalServerRenderer::<GameEmbed>::with_props(props).render());
        assert!(html.contains("sandbox=\"allow-scripts allow-same-origin\""));
        assert!(html.contains("src=\"/games/eggy-car/index.html\""));
        assert!(html.contains("aria-label=\"Enter fullscreen\""));
        assert!(!html.contains("fullscreen-container"));
    }
}
