use crate::api::NOTES_PER_PAGE;
use crate::cache::{use_query, QueryKey, QueryOptions};
use crate::components::ui::{
    Alert, AlertDescription, Badge, Button, ButtonSize, ButtonVariant, Card, CardContent,
    CardDescription, CardHeader, CardTitle, Spinner,
};
use crate::components::{Modal, NoteForm, NoteList, PaginationControls, SearchBox};
use crate::models::NoteListResponse;
use crate::state::{
    use_debounced, AppContext, NoteDetailView, NotesView, Pagination, SEARCH_DEBOUNCE_MS,
};
use crate::util::format_created_at;
use leptos::prelude::*;
use leptos_router::hooks::use_params;
use leptos_router::params::Params;

/// Identity of one list request.
#[derive(Clone, Debug, PartialEq, Eq)]
struct NotesQuery {
    page: u32,
    search: String,
}

impl From<NotesQuery> for QueryKey {
    fn from(q: NotesQuery) -> Self {
        QueryKey::notes(q.page, q.search)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct NoteQuery(String);

impl From<NoteQuery> for QueryKey {
    fn from(q: NoteQuery) -> Self {
        QueryKey::note(q.0)
    }
}

#[derive(Params, PartialEq, Clone, Debug)]
pub struct NoteRouteParams {
    pub id: Option<String>,
}

#[component]
pub fn NotesPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let api_client = app_state.0.api_client;
    let queries = app_state.0.queries;

    let search: RwSignal<String> = RwSignal::new(String::new());
    let pagination: RwSignal<Pagination> = RwSignal::new(Pagination::new());
    let modal_open: RwSignal<bool> = RwSignal::new(false);

    let debounced_search = use_debounced(search.into(), SEARCH_DEBOUNCE_MS);

    let query = Memo::new(move |_| NotesQuery {
        page: pagination.with(Pagination::page),
        search: debounced_search.get(),
    });

    let list = use_query(
        queries.lists,
        query.into(),
        QueryOptions::keep_previous(),
        move |q: NotesQuery| {
            let api_client = api_client.get_value();
            async move {
                api_client
                    .list_notes(q.page, NOTES_PER_PAGE, &q.search)
                    .await
            }
        },
    );

    // Only our own page's response may move the page count; placeholders belong to another key.
    Effect::new(move |_| {
        let total = list.with(|s| s.own_data().map(NoteListResponse::total_pages));
        if let Some(total) = total {
            if pagination.with_untracked(Pagination::total_pages) != total {
                pagination.update(|p| p.apply_total_pages(total));
            }
        }
    });

    let view_state = Memo::new(move |_| list.with(|s| pagination.with(|p| NotesView::derive(s, p))));

    let on_search = Callback::new(move |text: String| {
        search.set(text);
        pagination.update(Pagination::on_search_change);
    });

    let retry = move |_: web_sys::MouseEvent| queries.refetch(&query.get_untracked().into());

    let open_modal = move |_: web_sys::MouseEvent| modal_open.set(true);
    let close_modal = Callback::new(move |_: ()| modal_open.set(false));

    view! {
        <div class="mx-auto w-full max-w-[1080px] px-4 py-8">
            <header class="mb-6 flex flex-wrap items-center justify-between gap-3">
                <SearchBox value=search on_change=on_search />

                {move || {
                    matches!(view_state.get(), NotesView::Ready { show_pagination: true, .. })
                        .then(|| view! { <PaginationControls pagination=pagination /> })
                }}

                <div class="flex items-center gap-3">
                    <Show
                        when=move || matches!(view_state.get(), NotesView::Ready { is_fetching: true, .. })
                        fallback=|| ().into_view()
                    >
                        <Spinner label="Updating notes" />
                    </Show>
                    <Button size=ButtonSize::Sm on:click=open_modal>
                        "Create note +"
                    </Button>
                </div>
            </header>

            {move || match view_state.get() {
                NotesView::Loading => view! {
                    <p class="text-sm text-muted-foreground">"Loading notes..."</p>
                }
                .into_any(),
                NotesView::Error => view! {
                    <Alert class="flex items-center justify-between gap-3 border-destructive/50 text-destructive">
                        <AlertDescription>"Error loading notes"</AlertDescription>
                        <Button variant=ButtonVariant::Outline size=ButtonSize::Sm on:click=retry>
                            "Retry"
                        </Button>
                    </Alert>
                }
                .into_any(),
                NotesView::Ready { notes, .. } if notes.is_empty() => view! {
                    <p class="text-sm text-muted-foreground">"No notes found"</p>
                }
                .into_any(),
                NotesView::Ready { notes, .. } => view! { <NoteList notes=notes /> }.into_any(),
            }}

            <Show when=move || modal_open.get() fallback=|| ().into_view()>
                <Modal title="Create note" on_close=close_modal>
                    <NoteForm on_close=close_modal />
                </Modal>
            </Show>
        </div>
    }
}

#[component]
pub fn NoteDetailsPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let api_client = app_state.0.api_client;
    let queries = app_state.0.queries;
    let params = use_params::<NoteRouteParams>();

    // Use a closure-backed memo so params access happens inside a reactive tracking context.
    let note_id = Memo::new(move |_| {
        NoteQuery(params.get().ok().and_then(|p| p.id).unwrap_or_default())
    });

    let note = use_query(
        queries.notes,
        note_id.into(),
        QueryOptions::default(),
        move |q: NoteQuery| {
            let api_client = api_client.get_value();
            async move { api_client.get_note(&q.0).await }
        },
    );

    let view_state = Memo::new(move |_| note.with(NoteDetailView::derive));

    view! {
        <div class="mx-auto w-full max-w-[720px] px-4 py-8">
            <a href="/notes" class="mb-6 inline-block text-sm text-muted-foreground hover:text-foreground">
                "← Back to notes"
            </a>

            {move || match view_state.get() {
                NoteDetailView::Loading => view! {
                    <p class="text-sm text-muted-foreground">"Loading, please wait..."</p>
                }
                .into_any(),
                NoteDetailView::Error => view! {
                    <p class="text-sm text-destructive">"Something went wrong."</p>
                }
                .into_any(),
                NoteDetailView::Ready(note) => view! {
                    <Card>
                        <CardHeader>
                            <CardTitle>{note.title}</CardTitle>
                            <Badge>{note.tag.to_string()}</Badge>
                        </CardHeader>
                        <CardContent>{note.content}</CardContent>
                        <CardDescription class="px-5">
                            {format_created_at(&note.created_at)}
                        </CardDescription>
                    </Card>
                }
                .into_any(),
            }}
        </div>
    }
}
