//! Keyed cache of note queries.
//!
//! The cache never performs I/O itself. [`QueryCache::get`] hands out a
//! [`FetchTicket`] when a load has to start; the caller runs the request and
//! feeds the outcome back through [`QueryCache::resolve`]. Only the ticket
//! issued last for a key can write to that key's entry, so responses that were
//! superseded (by an invalidation or a newer request) are dropped.

use crate::api::{ApiError, ApiResult};
use leptos::logging::log;
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum ResourceKind {
    /// Paginated, searchable note listings.
    Notes,
    /// A single note by id.
    Note,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) enum QueryKey {
    Notes { page: u32, search: String },
    Note { id: String },
}

impl QueryKey {
    pub fn notes(page: u32, search: impl Into<String>) -> Self {
        Self::Notes {
            page,
            search: search.into(),
        }
    }

    pub fn note(id: impl Into<String>) -> Self {
        Self::Note { id: id.into() }
    }

    pub fn kind(&self) -> ResourceKind {
        match self {
            Self::Notes { .. } => ResourceKind::Notes,
            Self::Note { .. } => ResourceKind::Note,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum QueryStatus {
    /// Nothing to show yet and no error.
    Pending,
    Success,
    Error,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct QueryOptions {
    /// Show the last displayed value of the same kind while this key loads.
    pub keep_previous: bool,
}

impl QueryOptions {
    pub fn keep_previous() -> Self {
        Self {
            keep_previous: true,
        }
    }
}

/// Permission to write one load result into one entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct FetchTicket {
    pub key: QueryKey,
    request_id: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct QuerySnapshot<V> {
    pub status: QueryStatus,
    pub data: Option<V>,
    pub error: Option<ApiError>,
    pub is_fetching: bool,
    /// `data` belongs to a different key of the same kind.
    pub is_placeholder: bool,
    pub is_stale: bool,
}

impl<V> QuerySnapshot<V> {
    fn empty() -> Self {
        Self {
            status: QueryStatus::Pending,
            data: None,
            error: None,
            is_fetching: false,
            is_placeholder: false,
            is_stale: false,
        }
    }

    /// Data fetched for this exact key (not a placeholder).
    pub fn own_data(&self) -> Option<&V> {
        if self.is_placeholder {
            None
        } else {
            self.data.as_ref()
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct QueryLookup<V> {
    pub snapshot: QuerySnapshot<V>,
    /// Present when the caller must start exactly one load for the key.
    pub ticket: Option<FetchTicket>,
}

#[derive(Clone, Debug)]
struct CacheEntry<V> {
    data: Option<V>,
    error: Option<ApiError>,
    stale: bool,
    in_flight: Option<u64>,
}

impl<V> CacheEntry<V> {
    fn new() -> Self {
        Self {
            data: None,
            error: None,
            stale: false,
            in_flight: None,
        }
    }

    fn status(&self) -> QueryStatus {
        if self.error.is_some() {
            QueryStatus::Error
        } else if self.data.is_some() {
            QueryStatus::Success
        } else {
            QueryStatus::Pending
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct QueryCache<V> {
    entries: HashMap<QueryKey, CacheEntry<V>>,
    /// Key most recently requested per kind.
    active: HashMap<ResourceKind, QueryKey>,
    /// Key whose data was last on screen per kind; source of placeholders.
    shown: HashMap<ResourceKind, QueryKey>,
    next_request_id: u64,
}

impl<V> Default for QueryCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> QueryCache<V> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            active: HashMap::new(),
            shown: HashMap::new(),
            next_request_id: 0,
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub fn contains(&self, key: &QueryKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn is_active(&self, key: &QueryKey) -> bool {
        self.active.get(&key.kind()) == Some(key)
    }

    /// Releases `key` as the active key of its kind, if it still is.
    ///
    /// Called when the view showing `key` goes away, so a failed entry gets a
    /// fresh load the next time it is shown.
    pub fn deactivate(&mut self, key: &QueryKey) {
        let kind = key.kind();
        if self.active.get(&kind) == Some(key) {
            self.active.remove(&kind);
        }
    }

    /// True when a `get` for `key` would start a load right now.
    pub fn needs_fetch(&self, key: &QueryKey) -> bool {
        match self.entries.get(key) {
            None => true,
            Some(entry) if entry.in_flight.is_some() => false,
            Some(entry) => entry.stale || (entry.error.is_some() && !self.is_active(key)),
        }
    }

    /// True when a `get` for `key` would change anything.
    pub fn needs_get(&self, key: &QueryKey) -> bool {
        !self.is_active(key) || self.needs_fetch(key)
    }

    fn issue_ticket(&mut self, key: &QueryKey) -> FetchTicket {
        self.next_request_id = self.next_request_id.wrapping_add(1);
        let request_id = self.next_request_id;

        let entry = self.entries.entry(key.clone()).or_insert_with(CacheEntry::new);
        entry.in_flight = Some(request_id);

        log!("[cache] fetch {key:?} (request {request_id})");
        FetchTicket {
            key: key.clone(),
            request_id,
        }
    }

    /// Marks every entry of `kind` stale. In-flight loads for those entries lose
    /// their right to write; the next `get` starts a fresh one.
    pub fn invalidate(&mut self, kind: ResourceKind) {
        let mut count = 0;
        for (key, entry) in self.entries.iter_mut() {
            if key.kind() == kind {
                entry.stale = true;
                entry.in_flight = None;
                count += 1;
            }
        }
        log!("[cache] invalidated {count} {kind:?} entries");
    }

    pub fn invalidate_key(&mut self, key: &QueryKey) {
        if let Some(entry) = self.entries.get_mut(key) {
            entry.stale = true;
            entry.in_flight = None;
        }
    }

    pub fn remove(&mut self, key: &QueryKey) {
        self.entries.remove(key);
        let kind = key.kind();
        if self.shown.get(&kind) == Some(key) {
            self.shown.remove(&kind);
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.active.clear();
        self.shown.clear();
    }
}

impl<V: Clone> QueryCache<V> {
    /// Registers interest in `key` and returns what should be displayed for it.
    ///
    /// The returned ticket is `Some` only for the call that has to start the load;
    /// concurrent calls for the same key while it is in flight get `None`.
    pub fn get(&mut self, key: &QueryKey, options: QueryOptions) -> QueryLookup<V> {
        let kind = key.kind();

        // Checked before `key` becomes active: a failed key retries only on re-activation.
        let must_fetch = self.needs_fetch(key);

        self.active.insert(kind, key.clone());
        if self.entries.get(key).is_some_and(|e| e.data.is_some()) {
            self.shown.insert(kind, key.clone());
        }

        let ticket = must_fetch.then(|| self.issue_ticket(key));

        QueryLookup {
            snapshot: self.snapshot(key, options),
            ticket,
        }
    }

    /// Applies a load result. Returns `false` when the ticket was superseded and
    /// the result was dropped.
    pub fn resolve(&mut self, ticket: FetchTicket, result: ApiResult<V>) -> bool {
        let FetchTicket { key, request_id } = ticket;

        let Some(entry) = self.entries.get_mut(&key) else {
            log!("[cache] drop response for evicted {key:?}");
            return false;
        };
        if entry.in_flight != Some(request_id) {
            log!("[cache] drop superseded response for {key:?} (request {request_id})");
            return false;
        }

        entry.in_flight = None;
        match result {
            Ok(value) => {
                entry.data = Some(value);
                entry.error = None;
                entry.stale = false;
                if self.is_active(&key) {
                    self.shown.insert(key.kind(), key);
                }
            }
            Err(e) => {
                // Keep the last good value; the status still reports the failure.
                entry.error = Some(e);
                entry.stale = false;
            }
        }
        true
    }

    /// Read-only view of what should be displayed for `key`.
    pub fn snapshot(&self, key: &QueryKey, options: QueryOptions) -> QuerySnapshot<V> {
        let Some(entry) = self.entries.get(key) else {
            return QuerySnapshot::empty();
        };

        let mut snap = QuerySnapshot {
            status: entry.status(),
            data: entry.data.clone(),
            error: entry.error.clone(),
            is_fetching: entry.in_flight.is_some(),
            is_placeholder: false,
            is_stale: entry.stale,
        };

        if snap.data.is_none() && snap.status == QueryStatus::Pending && options.keep_previous {
            let previous = self
                .shown
                .get(&key.kind())
                .filter(|k| *k != key)
                .and_then(|k| self.entries.get(k))
                .and_then(|e| e.data.clone());

            if let Some(data) = previous {
                snap.data = Some(data);
                snap.status = QueryStatus::Success;
                snap.is_placeholder = true;
            }
        }

        snap
    }
}
