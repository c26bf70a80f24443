//! What the list and detail pages render, derived from a cache snapshot.
//!
//! Both derivations are pure, so re-running them on every reactive change is
//! harmless.

use super::pagination::Pagination;
use crate::cache::{QuerySnapshot, QueryStatus};
use crate::models::{Note, NoteListResponse};

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum NotesView {
    Loading,
    Error,
    Ready {
        notes: Vec<Note>,
        page: u32,
        total_pages: u32,
        show_pagination: bool,
        /// A newer page is loading behind the visible one.
        is_fetching: bool,
    },
}

impl NotesView {
    pub fn derive(snapshot: &QuerySnapshot<NoteListResponse>, pagination: &Pagination) -> Self {
        if snapshot.status == QueryStatus::Error {
            return Self::Error;
        }
        let Some(data) = snapshot.data.as_ref() else {
            return Self::Loading;
        };

        // Placeholder data belongs to another page; keep the controller's count until ours lands.
        let total_pages = snapshot
            .own_data()
            .map(NoteListResponse::total_pages)
            .unwrap_or_else(|| pagination.total_pages());

        let mut shown = pagination.clone();
        shown.apply_total_pages(total_pages);

        Self::Ready {
            notes: data.notes.clone(),
            page: shown.page(),
            total_pages,
            show_pagination: shown.is_visible(),
            is_fetching: snapshot.is_fetching,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum NoteDetailView {
    Loading,
    Error,
    Ready(Note),
}

impl NoteDetailView {
    pub fn derive(snapshot: &QuerySnapshot<Note>) -> Self {
        match (snapshot.status, snapshot.data.as_ref()) {
            (QueryStatus::Error, _) => Self::Error,
            (_, Some(note)) => Self::Ready(note.clone()),
            (_, None) => Self::Loading,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::cache::query::QueryCache;
    use crate::cache::{QueryKey, QueryOptions};
    use crate::models::NoteTag;

    fn note(i: usize) -> Note {
        Note {
            id: format!("n{i}"),
            title: format!("Note {i}"),
            content: String::new(),
            tag: NoteTag::Todo,
            created_at: "2025-01-01T00:00:00.000Z".to_string(),
            updated_at: None,
        }
    }

    fn page_of(count: usize, total_pages: u32) -> NoteListResponse {
        NoteListResponse {
            notes: (0..count).map(note).collect(),
            total_pages,
        }
    }

    #[test]
    fn test_loading_before_any_data() {
        let mut cache: QueryCache<NoteListResponse> = QueryCache::new();
        let lookup = cache.get(&QueryKey::notes(1, ""), QueryOptions::keep_previous());
        assert_eq!(
            NotesView::derive(&lookup.snapshot, &Pagination::new()),
            NotesView::Loading
        );
    }

    #[test]
    fn test_first_page_of_three() {
        let mut cache: QueryCache<NoteListResponse> = QueryCache::new();
        let key = QueryKey::notes(1, "");
        let t = cache.get(&key, QueryOptions::keep_previous()).ticket.expect("ticket");
        cache.resolve(t, Ok(page_of(12, 3)));

        let mut pagination = Pagination::new();
        pagination.apply_total_pages(3);

        let view = NotesView::derive(&cache.snapshot(&key, QueryOptions::keep_previous()), &pagination);
        match view {
            NotesView::Ready {
                notes,
                page,
                total_pages,
                show_pagination,
                is_fetching,
            } => {
                assert_eq!(notes.len(), 12);
                assert_eq!(page, 1);
                assert_eq!(total_pages, 3);
                assert!(show_pagination);
                assert!(!is_fetching);
            }
            other => panic!("expected ready view, got {other:?}"),
        }
    }

    #[test]
    fn test_single_page_hides_pagination() {
        let mut cache: QueryCache<NoteListResponse> = QueryCache::new();
        let key = QueryKey::notes(1, "");
        let t = cache.get(&key, QueryOptions::keep_previous()).ticket.expect("ticket");
        cache.resolve(t, Ok(page_of(3, 1)));

        let view = NotesView::derive(
            &cache.snapshot(&key, QueryOptions::keep_previous()),
            &Pagination::new(),
        );
        assert!(matches!(view, NotesView::Ready { show_pagination: false, .. }));
    }

    #[test]
    fn test_empty_result_is_ready_with_no_notes() {
        let mut cache: QueryCache<NoteListResponse> = QueryCache::new();
        let key = QueryKey::notes(1, "nothing matches");
        let t = cache.get(&key, QueryOptions::keep_previous()).ticket.expect("ticket");
        cache.resolve(t, Ok(page_of(0, 0)));

        let view = NotesView::derive(
            &cache.snapshot(&key, QueryOptions::keep_previous()),
            &Pagination::new(),
        );
        match view {
            NotesView::Ready {
                notes, total_pages, ..
            } => {
                assert!(notes.is_empty());
                assert_eq!(total_pages, 1);
            }
            other => panic!("expected ready view, got {other:?}"),
        }
    }

    #[test]
    fn test_placeholder_page_stays_visible_while_fetching() {
        let mut cache: QueryCache<NoteListResponse> = QueryCache::new();
        let t = cache
            .get(&QueryKey::notes(1, ""), QueryOptions::keep_previous())
            .ticket
            .expect("ticket");
        cache.resolve(t, Ok(page_of(12, 3)));

        let mut pagination = Pagination::new();
        pagination.apply_total_pages(3);
        pagination.set_page(2).expect("page 2 exists");

        let lookup = cache.get(&QueryKey::notes(2, ""), QueryOptions::keep_previous());
        match NotesView::derive(&lookup.snapshot, &pagination) {
            NotesView::Ready {
                notes,
                page,
                is_fetching,
                ..
            } => {
                assert_eq!(notes.len(), 12);
                assert_eq!(page, 2);
                assert!(is_fetching);
            }
            other => panic!("expected placeholder view, got {other:?}"),
        }
    }

    #[test]
    fn test_list_error_view() {
        let mut cache: QueryCache<NoteListResponse> = QueryCache::new();
        let key = QueryKey::notes(1, "");
        let t = cache.get(&key, QueryOptions::keep_previous()).ticket.expect("ticket");
        cache.resolve(t, Err(ApiError::Transport("offline".to_string())));

        let view = NotesView::derive(
            &cache.snapshot(&key, QueryOptions::keep_previous()),
            &Pagination::new(),
        );
        assert_eq!(view, NotesView::Error);
    }

    #[test]
    fn test_missing_note_renders_error() {
        let mut cache: QueryCache<Note> = QueryCache::new();
        let key = QueryKey::note("missing-id");
        let t = cache.get(&key, QueryOptions::default()).ticket.expect("ticket");
        cache.resolve(
            t,
            Err(ApiError::Remote {
                status: 404,
                body: "Note not found".to_string(),
            }),
        );

        let view = NoteDetailView::derive(&cache.snapshot(&key, QueryOptions::default()));
        assert_eq!(view, NoteDetailView::Error);
    }

    #[test]
    fn test_detail_loading_then_ready() {
        let mut cache: QueryCache<Note> = QueryCache::new();
        let key = QueryKey::note("n1");
        let lookup = cache.get(&key, QueryOptions::default());
        assert_eq!(NoteDetailView::derive(&lookup.snapshot), NoteDetailView::Loading);

        cache.resolve(lookup.ticket.expect("ticket"), Ok(note(1)));
        let view = NoteDetailView::derive(&cache.snapshot(&key, QueryOptions::default()));
        assert_eq!(view, NoteDetailView::Ready(note(1)));
    }
}
