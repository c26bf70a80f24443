use leptos::logging::{log, warn};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::cache::{QueryKey, ResourceKind};
use crate::components::ui::{
    Badge, Button, ButtonSize, ButtonVariant, Card, CardContent, CardFooter, CardGrid,
    CardHeader, CardTitle, FieldError, Spinner,
};
use crate::models::Note;
use crate::state::AppContext;
use crate::util::preview;

const PREVIEW_CHARS: usize = 160;

pub(crate) fn note_href(id: &str) -> String {
    format!("/notes/{}", urlencoding::encode(id))
}

#[component]
pub(crate) fn NoteList(notes: Vec<Note>) -> impl IntoView {
    view! {
        <CardGrid>
            {notes
                .into_iter()
                .map(|note| view! { <NoteCard note=note /> })
                .collect_view()}
        </CardGrid>
    }
}

#[component]
fn NoteCard(note: Note) -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let deleting: RwSignal<bool> = RwSignal::new(false);
    let error: RwSignal<Option<String>> = RwSignal::new(None);

    let href = note_href(&note.id);
    let id = StoredValue::new(note.id.clone());

    let on_delete = move |_: web_sys::MouseEvent| {
        if deleting.get_untracked() {
            return;
        }
        deleting.set(true);
        error.set(None);

        let api_client = app_state.0.api_client.get_value();
        let queries = app_state.0.queries;
        let id = id.get_value();
        spawn_local(async move {
            match api_client.delete_note(&id).await {
                Ok(_) => {
                    log!("[note-list] deleted note {id}");
                    queries.invalidate(ResourceKind::Notes);
                    queries.remove(&QueryKey::note(id));
                }
                Err(e) => {
                    warn!("[note-list] delete failed: {e}");
                    error.set(Some("Could not delete note".to_string()));
                    deleting.set(false);
                }
            }
        });
    };

    view! {
        <li class="list-none">
            <Card class="h-full">
                <CardHeader>
                    <CardTitle>{note.title}</CardTitle>
                </CardHeader>
                <CardContent class="text-muted-foreground">
                    {preview(&note.content, PREVIEW_CHARS)}
                </CardContent>
                <CardFooter>
                    <Badge>{note.tag.to_string()}</Badge>
                    <div class="flex items-center gap-2">
                        <a href=href class="text-sm font-medium text-primary underline-offset-4 hover:underline">
                            "View details"
                        </a>
                        <Button
                            variant=ButtonVariant::Destructive
                            size=ButtonSize::Sm
                            attr:disabled=move || deleting.get()
                            on:click=on_delete
                        >
                            <Show when=move || deleting.get() fallback=|| ().into_view()>
                                <Spinner />
                            </Show>
                            "Delete"
                        </Button>
                    </div>
                </CardFooter>
                {move || error.get().map(|msg| view! { <FieldError class="px-5">{msg}</FieldError> })}
            </Card>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_href_escapes_id() {
        assert_eq!(note_href("abc123"), "/notes/abc123");
        assert_eq!(note_href("a b/c"), "/notes/a%20b%2Fc");
    }
}
