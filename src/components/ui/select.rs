use leptos::prelude::*;
use tw_merge::*;
use wasm_bindgen::JsCast;

/// Native `<select>` bound to a string signal.
///
/// `placeholder` renders as a leading option with an empty value, so an
/// untouched select reads as "".
#[component]
pub fn NativeSelect(
    #[prop(into, optional)] class: String,
    #[prop(into, optional)] name: String,
    #[prop(into, optional)] id: String,
    #[prop(into, optional)] placeholder: Option<String>,
    /// `(value, label)` pairs.
    options: Vec<(String, String)>,
    #[prop(into, optional)] invalid: Signal<bool>,
    #[prop(into)] bind_value: RwSignal<String>,
) -> impl IntoView {
    let merged_class = tw_merge!(
        "border-input flex h-9 w-full rounded-md border bg-transparent px-3 py-1 text-sm shadow-xs outline-none focus-visible:border-ring focus-visible:ring-ring/50 focus-visible:ring-2 aria-invalid:ring-destructive/20 aria-invalid:border-destructive",
        class
    );

    let on_change = move |ev: web_sys::Event| {
        if let Some(select) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
        {
            bind_value.set(select.value());
        }
    };

    view! {
        <select
            data-name="NativeSelect"
            class=merged_class
            name=name
            id=id
            aria-invalid=move || invalid.get().to_string()
            prop:value=move || bind_value.get()
            on:change=on_change
        >
            {placeholder.map(|p| {
                view! {
                    <option value="" selected=move || bind_value.get().is_empty()>
                        {p}
                    </option>
                }
            })}
            {options
                .into_iter()
                .map(|(value, label)| {
                    let v = value.clone();
                    view! {
                        <option value=value selected=move || bind_value.get() == v>
                            {label}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}
