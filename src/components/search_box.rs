use icons::Search;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Free-text filter for the notes list.
///
/// Reports every keystroke through `on_change`; debouncing is the caller's job.
#[component]
pub fn SearchBox(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(into, default = "Search notes".to_string())] placeholder: String,
) -> impl IntoView {
    let on_input = move |ev: web_sys::Event| {
        if let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        {
            on_change.run(input.value());
        }
    };

    view! {
        <div data-name="SearchBox" class="relative w-full max-w-xs">
            <Search class="pointer-events-none absolute top-1/2 left-3 size-4 -translate-y-1/2 text-muted-foreground" />
            <input
                type="search"
                class="border-input flex h-9 w-full rounded-md border bg-transparent py-1 pr-3 pl-9 text-sm shadow-xs outline-none placeholder:text-muted-foreground focus-visible:border-ring focus-visible:ring-2 focus-visible:ring-ring/50"
                placeholder=placeholder.clone()
                aria-label=placeholder
                prop:value=move || value.get()
                on:input=on_input
            />
        </div>
    }
}
