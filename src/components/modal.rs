use icons::X;
use leptos::ev;
use leptos::prelude::*;
use leptos_dom::helpers::window_event_listener;

use crate::components::hooks::use_random_id_for;

pub(crate) fn is_dismiss_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

fn set_body_scroll_locked(locked: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    let value = if locked { "hidden" } else { "" };
    let _ = body.style().set_property("overflow", value);
}

/// Overlay dialog mounted only while open.
///
/// Escape, the close button and a click on the backdrop itself all call
/// `on_close`. Clicks that start inside the content panel do not.
#[component]
pub fn Modal(
    #[prop(into)] on_close: Callback<()>,
    #[prop(into, optional)] title: String,
    children: Children,
) -> impl IntoView {
    let title_id = use_random_id_for("modal_title");
    let labelled_by = title_id.clone();

    let key_handle = window_event_listener(ev::keydown, move |ev: web_sys::KeyboardEvent| {
        if is_dismiss_key(&ev.key()) {
            ev.prevent_default();
            on_close.run(());
        }
    });

    set_body_scroll_locked(true);
    on_cleanup(move || {
        key_handle.remove();
        set_body_scroll_locked(false);
    });

    let on_backdrop_click = move |ev: web_sys::MouseEvent| {
        if ev.target() == ev.current_target() {
            on_close.run(());
        }
    };

    view! {
        <div
            data-name="ModalBackdrop"
            class="fixed inset-0 z-60 flex items-center justify-center bg-black/50 p-4"
            role="dialog"
            aria-modal="true"
            aria-labelledby=labelled_by
            on:click=on_backdrop_click
        >
            <div
                data-name="ModalContent"
                class="relative w-full max-w-lg max-h-[85vh] overflow-y-auto rounded-2xl border bg-background p-6 shadow-lg"
            >
                <button
                    type="button"
                    class="absolute top-4 right-4 rounded-sm p-1 focus:ring-2 focus:ring-ring focus:ring-offset-2 focus:outline-none [&_svg:not([class*='size-'])]:size-4"
                    aria-label="Close dialog"
                    on:click=move |_| on_close.run(())
                >
                    <X />
                </button>

                <h2 id=title_id class="mb-4 text-lg leading-none font-semibold">
                    {title}
                </h2>

                {children()}
            </div>
        </div>
    }
}
