// ── Single-flight resource cache ──
//
// Concurrent keyed storage for remote records. Each key owns a `watch`
// channel carrying its `ResourceState`; observers subscribe to it, and a
// detached fetch task is the only writer.

use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use futures_util::FutureExt;
use tokio::sync::watch;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use super::handle::ResourceHandle;
use super::state::{ErrorInfo, FetchKey, ResourceState};

type Slot<T> = Arc<watch::Sender<ResourceState<T>>>;

/// Keyed cache with request coalescing and a freshness window.
///
/// - At most one loader runs per key at any time; observers arriving while
///   it runs attach to the same channel.
/// - A settled entry younger than the freshness window is served as-is.
/// - Fetches are spawned onto the tokio runtime and always run to
///   completion, even when every observer has gone away.
pub struct ResourceCache<T: Send + Sync + 'static> {
    entries: DashMap<FetchKey, Slot<T>>,
    freshness: Duration,
}

impl<T: Send + Sync + 'static> ResourceCache<T> {
    pub fn new(freshness: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            freshness,
        }
    }

    pub fn freshness(&self) -> Duration {
        self.freshness
    }

    /// Observe `key`, starting `loader` if the entry is idle or stale.
    ///
    /// Must be called from within a tokio runtime.
    pub fn observe<F, Fut>(&self, key: impl Into<FetchKey>, loader: F) -> ResourceHandle<T>
    where
        F: FnOnce(FetchKey) -> Fut,
        Fut: Future<Output = Result<T, ErrorInfo>> + Send + 'static,
    {
        self.observe_with(key, loader, |_: &T| {})
    }

    /// Like [`observe`](Self::observe), with a hook run by the fetch task
    /// after a successful load and before observers are notified.
    ///
    /// The hook fires once per transport call, no matter how many
    /// observers are attached. It is dropped unused when no fetch starts.
    pub fn observe_with<F, Fut, S>(
        &self,
        key: impl Into<FetchKey>,
        loader: F,
        on_success: S,
    ) -> ResourceHandle<T>
    where
        F: FnOnce(FetchKey) -> Fut,
        Fut: Future<Output = Result<T, ErrorInfo>> + Send + 'static,
        S: FnOnce(&T) + Send + 'static,
    {
        let key = key.into();
        let now = Instant::now();

        // Decide and mark `Loading` under the shard lock so two observers
        // can never both start a fetch for the same key.
        let (slot, start) = {
            let entry = self
                .entries
                .entry(key.clone())
                .or_insert_with(|| Arc::new(watch::channel(ResourceState::Idle).0));
            let slot = Arc::clone(entry.value());
            let start = self.needs_fetch(&slot.borrow(), now);
            if start {
                slot.send_replace(ResourceState::Loading);
            }
            (slot, start)
        };

        let handle = ResourceHandle::new(key.clone(), slot.subscribe());

        if start {
            debug!(key = %key, "starting fetch");
            let fut = loader(key.clone());
            tokio::spawn(run_fetch(key, fut, on_success, slot));
        } else {
            debug!(key = %key, state = slot.borrow().label(), "attached to cached entry");
        }

        handle
    }

    /// Current state of `key` without triggering a fetch.
    pub fn peek(&self, key: &FetchKey) -> ResourceState<T> {
        self.entries
            .get(key)
            .map_or(ResourceState::Idle, |slot| slot.borrow().clone())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All keys that have ever been observed.
    pub fn keys(&self) -> Vec<FetchKey> {
        self.entries.iter().map(|r| r.key().clone()).collect()
    }

    // ── Private helpers ──────────────────────────────────────────────

    fn needs_fetch(&self, state: &ResourceState<T>, now: Instant) -> bool {
        match state {
            ResourceState::Idle => true,
            ResourceState::Loading => false,
            ResourceState::Success { fetched_at: at, .. }
            | ResourceState::Error { failed_at: at, .. } => {
                now.saturating_duration_since(*at) >= self.freshness
            }
        }
    }
}

/// Drive one loader to completion and publish its outcome.
///
/// A panic in the loader or the hook is published as `Error` so the key
/// never stays `Loading`.
async fn run_fetch<T, Fut, S>(key: FetchKey, fut: Fut, on_success: S, slot: Slot<T>)
where
    T: Send + Sync + 'static,
    Fut: Future<Output = Result<T, ErrorInfo>> + Send + 'static,
    S: FnOnce(&T) + Send + 'static,
{
    let outcome = AssertUnwindSafe(async move {
        let value = fut.await?;
        on_success(&value);
        Ok::<T, ErrorInfo>(value)
    })
    .catch_unwind()
    .await
    .unwrap_or_else(|payload| Err(ErrorInfo::new(panic_message(payload.as_ref()))));

    let state = match outcome {
        Ok(value) => {
            info!(key = %key, "fetch succeeded");
            ResourceState::Success {
                value: Arc::new(value),
                fetched_at: Instant::now(),
            }
        }
        Err(cause) => {
            warn!(key = %key, error = %cause, "fetch failed");
            ResourceState::Error {
                cause,
                failed_at: Instant::now(),
            }
        }
    };
    // `send_replace` stores the value even with zero receivers.
    slot.send_replace(state);
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    let detail = payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_owned())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown cause".into());
    format!("fetch panicked: {detail}")
}
