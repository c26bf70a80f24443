use super::query::{QueryCache, QueryKey, QueryOptions, QuerySnapshot, ResourceKind};
use crate::api::ApiResult;
use crate::models::{Note, NoteListResponse};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

/// Session-scoped owner of every query cache.
///
/// Created once in `App`, handed out through context, dropped with the app.
/// Views never touch the caches directly; they go through [`use_query`] and the
/// mutation helpers below.
#[derive(Clone, Copy)]
pub(crate) struct QueryClient {
    pub lists: RwSignal<QueryCache<NoteListResponse>>,
    pub notes: RwSignal<QueryCache<Note>>,
}

impl QueryClient {
    pub fn new() -> Self {
        Self {
            lists: RwSignal::new(QueryCache::new()),
            notes: RwSignal::new(QueryCache::new()),
        }
    }

    pub fn invalidate(&self, kind: ResourceKind) {
        self.lists.update(|c| c.invalidate(kind));
        self.notes.update(|c| c.invalidate(kind));
    }

    pub fn refetch(&self, key: &QueryKey) {
        match key.kind() {
            ResourceKind::Notes => self.lists.update(|c| c.invalidate_key(key)),
            ResourceKind::Note => self.notes.update(|c| c.invalidate_key(key)),
        }
    }

    pub fn remove(&self, key: &QueryKey) {
        match key.kind() {
            ResourceKind::Notes => self.lists.update(|c| c.remove(key)),
            ResourceKind::Note => self.notes.update(|c| c.remove(key)),
        }
    }

    pub fn clear(&self) {
        self.lists.update(QueryCache::clear);
        self.notes.update(QueryCache::clear);
    }
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Keeps `cache` loaded for the current value of `query` and returns the
/// snapshot to render.
///
/// The effect tracks both the key and the cache, so an invalidation elsewhere
/// re-runs it and triggers the refetch. It only writes when `needs_get` says
/// the write changes something, which keeps it from re-triggering itself.
/// On cleanup the key stops being active for its kind.
pub(crate) fn use_query<Q, V, F, Fut>(
    cache: RwSignal<QueryCache<V>>,
    query: Signal<Q>,
    options: QueryOptions,
    loader: F,
) -> Signal<QuerySnapshot<V>>
where
    Q: Clone + Into<QueryKey> + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
    F: Fn(Q) -> Fut + 'static,
    Fut: Future<Output = ApiResult<V>> + 'static,
{
    let last_key: StoredValue<Option<QueryKey>> = StoredValue::new(None);

    Effect::new(move |_| {
        let q = query.get();
        let key: QueryKey = q.clone().into();
        last_key.set_value(Some(key.clone()));

        if !cache.with(|c| c.needs_get(&key)) {
            return;
        }

        let ticket = cache
            .try_update(|c| c.get(&key, options).ticket)
            .flatten();

        if let Some(ticket) = ticket {
            let fut = loader(q);
            spawn_local(async move {
                let result = fut.await;
                cache.update(|c| {
                    c.resolve(ticket, result);
                });
            });
        }
    });

    on_cleanup(move || {
        if let Some(key) = last_key.try_get_value().flatten() {
            cache.try_update(|c| c.deactivate(&key));
        }
    });

    Signal::derive(move || {
        let key: QueryKey = query.get().into();
        cache.with(|c| c.snapshot(&key, options))
    })
}
