//! Page-scoped query client and the reactive helpers built on it.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides one `QueryClient` via context. Pages call `use_query` to
//! read a key (registering as an observer for the component's lifetime) and
//! `run_mutation` to perform a write whose success invalidates keys. Every
//! `use_query` effect tracks the shared cache signal, so an invalidation makes
//! each mounted observer re-evaluate `should_fetch` and refetch in the
//! background.

use std::future::Future;
use std::marker::PhantomData;
use std::rc::Rc;

use leptos::prelude::*;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::cache::{QueryCache, QueryKey, QueryOptions, QueryStatus};
use crate::net::error::ApiError;
use crate::util::clock::now_ms;

/// Handle to the page-wide cache.
#[derive(Clone, Copy)]
pub struct QueryClient {
    cache: RwSignal<QueryCache>,
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryClient {
    pub fn new() -> Self {
        Self { cache: RwSignal::new(QueryCache::new()) }
    }

    pub fn cache(&self) -> RwSignal<QueryCache> {
        self.cache
    }

    /// Mark keys stale; observed keys refetch through their `use_query` effects.
    pub fn invalidate(&self, keys: &[QueryKey]) {
        let refetch = self.cache.try_update(|c| c.invalidate(keys)).unwrap_or_default();
        #[cfg(feature = "hydrate")]
        {
            if !refetch.is_empty() {
                let names = refetch.iter().map(ToString::to_string).collect::<Vec<_>>();
                log::debug!("refetching {}", names.join(", "));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = refetch;
    }

    /// Replace cached data for `key` with a value returned by a mutation.
    pub fn set_data<T: Serialize>(&self, key: &QueryKey, value: &T) {
        if let Ok(data) = serde_json::to_value(value) {
            self.cache.update(|c| c.set_data(key, data, now_ms()));
        }
    }
}

/// Create the page-wide client and provide it to descendants.
pub fn provide_query_client() -> QueryClient {
    let client = QueryClient::new();
    provide_context(client);
    client
}

pub fn use_query_client() -> QueryClient {
    expect_context::<QueryClient>()
}

/// Reactive view of one cached key, decoded as `T`.
pub struct Query<T> {
    client: QueryClient,
    key: StoredValue<QueryKey>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for Query<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Query<T> {}

impl<T: DeserializeOwned> Query<T> {
    pub fn data(&self) -> Option<T> {
        self.key.with_value(|key| self.client.cache.with(|c| c.get(key)))
    }

    pub fn status(&self) -> QueryStatus {
        self.key.with_value(|key| self.client.cache.with(|c| c.status(key)))
    }

    pub fn error(&self) -> Option<ApiError> {
        self.key.with_value(|key| self.client.cache.with(|c| c.error(key).cloned()))
    }

    pub fn is_fetching(&self) -> bool {
        self.key.with_value(|key| self.client.cache.with(|c| c.is_fetching(key)))
    }
}

/// Subscribe the current component to `key`, fetching through `fetcher`
/// whenever the cache says a fetch is due and `enabled` is true. Turning
/// `enabled` back on re-checks staleness like a fresh mount.
pub fn use_query<T, F, Fut>(key: QueryKey, options: QueryOptions, enabled: Signal<bool>, fetcher: F) -> Query<T>
where
    T: Serialize + DeserializeOwned + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let client = use_query_client();
    client.cache.update(|c| c.observe(&key, options, now_ms()));

    let cleanup_key = key.clone();
    on_cleanup(move || {
        let _ = client.cache.try_update(|c| c.unobserve(&cleanup_key));
    });

    let fetcher = Rc::new(fetcher);
    let effect_key = key.clone();
    Effect::new(move |was_enabled: Option<bool>| {
        let enabled = enabled.get();
        if enabled && was_enabled == Some(false) {
            client.cache.update(|c| c.enable(&effect_key, options, now_ms()));
        }
        let due = client.cache.with(|c| c.should_fetch(&effect_key, enabled));
        if due && client.cache.try_update(|c| c.begin_fetch(&effect_key)).unwrap_or(false) {
            spawn_fetch(client, effect_key.clone(), options, Rc::clone(&fetcher));
        }
        enabled
    });

    Query { client, key: StoredValue::new(key), _marker: PhantomData }
}

fn spawn_fetch<T, F, Fut>(client: QueryClient, key: QueryKey, options: QueryOptions, fetcher: Rc<F>)
where
    T: Serialize + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use super::cache::{retry_delay_ms, should_retry};

        let mut failures = 0;
        let result = loop {
            match fetcher().await {
                Ok(data) => break serde_json::to_value(&data).map_err(|e| ApiError::Decode(e.to_string())),
                Err(err) => {
                    failures += 1;
                    if !should_retry(&err, failures, &options) {
                        break Err(err);
                    }
                    let delay = std::time::Duration::from_millis(u64::from(retry_delay_ms(failures)));
                    gloo_timers::future::sleep(delay).await;
                }
            }
        };
        if let Err(err) = &result {
            log::warn!("query {key} failed: {err}");
        }
        let _ = client.cache.try_update(|c| c.finish_fetch(&key, result, now_ms()));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (options, fetcher);
        let _ = client.cache.try_update(|c| c.finish_fetch(&key, Err(ApiError::Unavailable), now_ms()));
    }
}

/// Run a write. `pending` is true until it settles; `on_settled` sees the
/// result first, then on success `invalidates` are marked stale.
pub fn run_mutation<O, Fut, S>(
    client: QueryClient,
    pending: RwSignal<bool>,
    invalidates: Vec<QueryKey>,
    fut: Fut,
    on_settled: S,
) where
    O: 'static,
    Fut: Future<Output = Result<O, ApiError>> + 'static,
    S: FnOnce(Result<O, ApiError>) + 'static,
{
    pending.set(true);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = fut.await;
        let succeeded = result.is_ok();
        if let Err(err) = &result {
            log::error!("mutation failed: {err}");
        }
        let _ = pending.try_set(false);
        on_settled(result);
        if succeeded {
            client.invalidate(&invalidates);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (client, invalidates);
        drop(fut);
        pending.set(false);
        on_settled(Err(ApiError::Unavailable));
    }
}
