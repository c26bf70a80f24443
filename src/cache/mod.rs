pub(crate) mod client;
pub(crate) mod query;

pub(crate) use client::{use_query, QueryClient};
pub(crate) use query::{QueryKey, QueryOptions, QuerySnapshot, QueryStatus, ResourceKind};
