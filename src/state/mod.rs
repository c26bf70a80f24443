pub(crate) mod pagination;
pub(crate) mod search;
pub(crate) mod view;

use crate::api::{ApiClient, EnvConfig};
use crate::cache::QueryClient;
use leptos::prelude::*;

pub(crate) use pagination::{PageItem, Pagination, PaginationError};
pub(crate) use search::{use_debounced, SEARCH_DEBOUNCE_MS};
pub(crate) use view::{NoteDetailView, NotesView};

#[derive(Clone, Copy)]
pub(crate) struct AppState {
    /// Configured once at start; the token never changes during a session.
    pub api_client: StoredValue<ApiClient>,

    /// Query caches for this session.
    pub queries: QueryClient,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_client(ApiClient::from_config(&EnvConfig::new()))
    }

    pub fn with_client(api_client: ApiClient) -> Self {
        Self {
            api_client: StoredValue::new(api_client),
            queries: QueryClient::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy)]
pub(crate) struct AppContext(pub AppState);
