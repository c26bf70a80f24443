use icons::Loader;
use leptos::prelude::*;
use tw_merge::tw_merge;

#[component]
pub fn Spinner(
    #[prop(into, optional)] class: String,
    #[prop(into, default = "Loading".to_string())] label: String,
) -> impl IntoView {
    let merged_class = tw_merge!("size-4 animate-spin", class);

    view! { <Loader class=merged_class attr:role="status" attr:aria-label=label /> }
}

/// Tag chip shown on note cards and the detail page.
#[component]
pub fn Badge(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    let merged_class = tw_merge!(
        "inline-flex items-center rounded-full border px-2.5 py-0.5 text-xs font-medium text-muted-foreground",
        class
    );

    view! { <span data-name="Badge" class=merged_class>{children()}</span> }
}
