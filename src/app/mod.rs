use crate::pages::{NoteDetailsPage, NotesPage};
use crate::state::{AppContext, AppState};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
    let state = AppState::new();
    provide_context(AppContext(state));
    on_cleanup(move || state.queries.clear());

    view! {
        <Router>
            <main class="min-h-screen bg-background text-foreground">
                <Routes fallback=|| view! { <div class="px-4 py-8 text-xs text-muted-foreground">"Not found"</div> }>
                    <Route path=path!("") view=NotesPage />
                    <Route path=path!("notes") view=NotesPage />
                    <Route path=path!("notes/:id") view=NoteDetailsPage />
                </Routes>
            </main>
        </Router>
    }
}
