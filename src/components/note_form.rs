use leptos::logging::{log, warn};
use leptos::prelude::*;
use leptos::task::spawn_local;
use strum::IntoEnumIterator;

use crate::cache::ResourceKind;
use crate::components::hooks::use_random_id_for;
use crate::components::ui::{
    Alert, AlertDescription, Button, ButtonVariant, FieldError, Input, Label, NativeSelect,
    Spinner, Textarea,
};
use crate::forms::{FieldErrors, NoteFormValues, CONTENT_MAX_CHARS, TITLE_MAX_CHARS};
use crate::models::NoteTag;
use crate::state::AppContext;

/// "Create note" form shown inside the modal.
///
/// Validation runs on submit; after the first attempt it re-runs on every
/// change so messages clear as the user fixes them. A successful create
/// invalidates every list query and then closes the form.
#[component]
pub fn NoteForm(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let app_state = expect_context::<AppContext>();

    let title: RwSignal<String> = RwSignal::new(String::new());
    let content: RwSignal<String> = RwSignal::new(String::new());
    let tag: RwSignal<String> = RwSignal::new(String::new());

    let errors: RwSignal<FieldErrors> = RwSignal::new(FieldErrors::default());
    let submit_error: RwSignal<Option<String>> = RwSignal::new(None);
    let submitting: RwSignal<bool> = RwSignal::new(false);
    let attempted: RwSignal<bool> = RwSignal::new(false);

    let title_id = use_random_id_for("note_title");
    let content_id = use_random_id_for("note_content");
    let tag_id = use_random_id_for("note_tag");

    let values = move || NoteFormValues {
        title: title.get(),
        content: content.get(),
        tag: tag.get(),
    };

    Effect::new(move |_| {
        let v = values();
        if attempted.get_untracked() {
            errors.set(v.to_new_note().err().unwrap_or_default());
        }
    });

    let reset = move || {
        title.set(String::new());
        content.set(String::new());
        tag.set(String::new());
        errors.set(FieldErrors::default());
        submit_error.set(None);
        attempted.set(false);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        attempted.set(true);

        let new_note = match values().to_new_note() {
            Ok(n) => n,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        errors.set(FieldErrors::default());
        submit_error.set(None);
        submitting.set(true);

        let api_client = app_state.0.api_client.get_value();
        let queries = app_state.0.queries;
        spawn_local(async move {
            match api_client.create_note(&new_note).await {
                Ok(note) => {
                    log!("[note-form] created note {}", note.id);
                    queries.invalidate(ResourceKind::Notes);
                    submitting.set(false);
                    reset();
                    on_close.run(());
                }
                Err(e) => {
                    warn!("[note-form] create failed: {e}");
                    submit_error.set(Some(format!("Could not create note: {e}")));
                    submitting.set(false);
                }
            }
        });
    };

    let tag_options: Vec<(String, String)> = NoteTag::iter()
        .map(|t| (t.to_string(), t.to_string()))
        .collect();

    view! {
        <form class="flex flex-col gap-4" novalidate=true on:submit=on_submit>
            <div class="flex flex-col gap-2">
                <Label html_for=title_id.clone() required=true>"Title"</Label>
                <Input
                    id=title_id
                    name="title"
                    bind_value=title
                    max_length=TITLE_MAX_CHARS
                    autofocus=true
                    invalid=Signal::derive(move || errors.with(|e| e.title.is_some()))
                />
                {move || errors.with(|e| e.title.clone()).map(|msg| view! { <FieldError>{msg}</FieldError> })}
            </div>

            <div class="flex flex-col gap-2">
                <Label html_for=content_id.clone()>"Content"</Label>
                <Textarea
                    id=content_id
                    name="content"
                    rows=8
                    bind_value=content
                    max_length=CONTENT_MAX_CHARS
                    invalid=Signal::derive(move || errors.with(|e| e.content.is_some()))
                />
                {move || errors.with(|e| e.content.clone()).map(|msg| view! { <FieldError>{msg}</FieldError> })}
            </div>

            <div class="flex flex-col gap-2">
                <Label html_for=tag_id.clone() required=true>"Tag"</Label>
                <NativeSelect
                    id=tag_id
                    name="tag"
                    placeholder="Select tag".to_string()
                    options=tag_options
                    bind_value=tag
                    invalid=Signal::derive(move || errors.with(|e| e.tag.is_some()))
                />
                {move || errors.with(|e| e.tag.clone()).map(|msg| view! { <FieldError>{msg}</FieldError> })}
            </div>

            <Show when=move || submit_error.get().is_some() fallback=|| ().into_view()>
                <Alert class="border-destructive/50 text-destructive">
                    <AlertDescription>{move || submit_error.get().unwrap_or_default()}</AlertDescription>
                </Alert>
            </Show>

            <div class="flex justify-end gap-2">
                <Button
                    variant=ButtonVariant::Outline
                    on:click=move |ev: web_sys::MouseEvent| {
                        // Buttons inside a form submit by default.
                        ev.prevent_default();
                        reset();
                        on_close.run(());
                    }
                >
                    "Cancel"
                </Button>
                <Button attr:disabled=move || submitting.get()>
                    <Show when=move || submitting.get() fallback=|| ().into_view()>
                        <Spinner />
                    </Show>
                    {move || if submitting.get() { "Creating..." } else { "Create note" }}
                </Button>
            </div>
        </form>
    }
}
