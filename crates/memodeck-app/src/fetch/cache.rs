//! Single-flight fetch memoization.

use std::future::Future;

use futures::future::{BoxFuture, FutureExt, Shared};
use parking_lot::Mutex;
use tracing::debug;

use memodeck_core::errors::FetchError;

/// The memoized future every caller of [`FetchCache::fetch`] shares.
pub type SharedFetch<T> = Shared<BoxFuture<'static, Result<T, FetchError>>>;

/// Single-flight memoization of one asynchronous fetch.
///
/// The first `fetch` invokes the producer exactly once and installs the
/// resulting future; every later call clones the same shared future,
/// whether it is still pending, fulfilled, or rejected. A rejected result
/// stays cached — there is deliberately no invalidation: a cache instance
/// is scoped to the lifetime its result should remain valid for, so a
/// retry means a new cache, not a reset.
///
/// The internal lock is held only to install or clone the slot, never
/// across an await.
pub struct FetchCache<T: Clone> {
    slot: Mutex<Option<SharedFetch<T>>>,
}

impl<T: Clone> Default for FetchCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> FetchCache<T> {
    /// Empty cache.
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    /// Return the cached fetch, invoking `producer` only on the first call.
    pub fn fetch<F, Fut>(&self, producer: F) -> SharedFetch<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, FetchError>> + Send + 'static,
    {
        let mut slot = self.slot.lock();
        slot.get_or_insert_with(|| {
            debug!("installing fetch");
            producer().boxed().shared()
        })
        .clone()
    }

    /// Whether a fetch has been installed.
    #[must_use]
    pub fn is_primed(&self) -> bool {
        self.slot.lock().is_some()
    }
}
