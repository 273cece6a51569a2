#![forbid(unsafe_code)]

use crate::error_message;
use dao_ops_client::ClientError;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, error};

pub type Fetcher<K, T> = Arc<dyn Fn(&K) -> Result<T, ClientError> + Send + Sync>;

#[derive(Clone, Debug, PartialEq)]
pub struct QueryState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> QueryState<T> {
    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if self.error.is_some() {
            Phase::Error
        } else if self.data.is_some() {
            Phase::Success
        } else {
            Phase::Idle
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Success,
    Error,
}

struct Shared<K, T> {
    key: Option<K>,
    state: QueryState<T>,
    mounted: bool,
    in_flight: usize,
}

/// A read handle keyed by an optional parameter.
///
/// No request is issued while the key is `None`. Clones share state, so a handle can
/// be refetched from another thread while a view reads it. Overlapping refetches are
/// not deduplicated: whichever response settles last is what the state holds.
pub struct Query<K, T> {
    name: &'static str,
    fetcher: Fetcher<K, T>,
    shared: Arc<Mutex<Shared<K, T>>>,
}

impl<K, T> Clone for Query<K, T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            fetcher: Arc::clone(&self.fetcher),
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<K, T> Query<K, T>
where
    K: Clone + PartialEq + Send,
    T: Clone + Send,
{
    /// Starts in `Loading` when `key` is present, `Idle` otherwise. Nothing is fetched
    /// until [`Query::mount`] or [`Query::refetch`].
    pub fn new(name: &'static str, key: Option<K>, fetcher: Fetcher<K, T>) -> Self {
        let loading = key.is_some();
        Self {
            name,
            fetcher,
            shared: Arc::new(Mutex::new(Shared {
                key,
                state: QueryState {
                    data: None,
                    loading,
                    error: None,
                },
                mounted: true,
                in_flight: 0,
            })),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    fn lock(&self) -> MutexGuard<'_, Shared<K, T>> {
        self.shared
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Initial fetch; a no-op without a key.
    pub fn mount(&self) -> Phase {
        self.refetch()
    }

    /// Any later settlement is dropped instead of written.
    pub fn unmount(&self) {
        self.lock().mounted = false;
    }

    pub fn refetch(&self) -> Phase {
        let key = {
            let mut shared = self.lock();
            if !shared.mounted {
                return shared.state.phase();
            }
            let Some(key) = shared.key.clone() else {
                return shared.state.phase();
            };
            shared.state.loading = true;
            shared.state.error = None;
            shared.in_flight += 1;
            key
        };

        debug!(query = self.name, "fetch");
        let result = (self.fetcher)(&key);

        let mut shared = self.lock();
        shared.in_flight -= 1;
        if !shared.mounted {
            debug!(query = self.name, "settled after unmount, dropped");
            return shared.state.phase();
        }
        match result {
            Ok(data) => {
                shared.state.data = Some(data);
                shared.state.error = None;
            }
            Err(err) => {
                error!(query = self.name, error = %err, "fetch failed");
                // last good data stays visible under the error line
                shared.state.error = Some(error_message(&err));
            }
        }
        shared.state.loading = false;
        shared.state.phase()
    }

    /// Swaps the key. A change to a different present key triggers exactly one fetch;
    /// clearing the key fetches nothing and drops a loading flag no request will settle.
    pub fn set_key(&self, key: Option<K>) -> Phase {
        let should_fetch = {
            let mut shared = self.lock();
            if shared.key == key {
                false
            } else {
                shared.key = key;
                if shared.key.is_none() && shared.in_flight == 0 {
                    shared.state.loading = false;
                }
                shared.key.is_some()
            }
        };
        if should_fetch {
            self.refetch()
        } else {
            self.phase()
        }
    }

    pub fn key(&self) -> Option<K> {
        self.lock().key.clone()
    }

    pub fn snapshot(&self) -> QueryState<T> {
        self.lock().state.clone()
    }

    pub fn phase(&self) -> Phase {
        self.lock().state.phase()
    }

    pub fn is_loading(&self) -> bool {
        self.lock().state.loading
    }

    pub fn error(&self) -> Option<String> {
        self.lock().state.error.clone()
    }

    pub fn data(&self) -> Option<T> {
        self.lock().state.data.clone()
    }

    /// Reads the current data without cloning it.
    pub fn with_data<R>(&self, f: impl FnOnce(Option<&T>) -> R) -> R {
        let shared = self.lock();
        f(shared.state.data.as_ref())
    }
}

/// Object-safe view of [`Query::refetch`], so handles of different types can be
/// refreshed together.
pub trait Refetch: Send + Sync {
    fn refetch(&self) -> Phase;
}

impl<K, T> Refetch for Query<K, T>
where
    K: Clone + PartialEq + Send,
    T: Clone + Send,
{
    fn refetch(&self) -> Phase {
        Query::refetch(self)
    }
}

/// Fires every refetch at once on scoped threads. Arrival order is whatever the
/// network gives; each handle settles independently.
pub fn refetch_all(queries: &[&dyn Refetch]) -> Vec<Phase> {
    std::thread::scope(|scope| {
        let handles = queries
            .iter()
            .map(|query| {
                let query: &dyn Refetch = *query;
                scope.spawn(move || query.refetch())
            })
            .collect::<Vec<_>>();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or(Phase::Error))
            .collect()
    })
}

#[cfg(test)]
mod tests;
