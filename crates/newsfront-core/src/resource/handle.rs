// ── Resource observer handles ──

use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::Stream;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

use super::state::{FetchKey, ResourceState};

/// One observer's view of a cached resource.
///
/// Dropping the handle detaches the observer; the underlying fetch keeps
/// running and still populates the cache.
pub struct ResourceHandle<T: Send + Sync + 'static> {
    key: FetchKey,
    receiver: watch::Receiver<ResourceState<T>>,
}

impl<T: Send + Sync + 'static> ResourceHandle<T> {
    pub(crate) fn new(key: FetchKey, receiver: watch::Receiver<ResourceState<T>>) -> Self {
        Self { key, receiver }
    }

    pub fn key(&self) -> &FetchKey {
        &self.key
    }

    /// The latest state.
    pub fn state(&self) -> ResourceState<T> {
        self.receiver.borrow().clone()
    }

    /// Wait until the entry is `Success` or `Error`.
    ///
    /// Returns immediately when it already is. If the cache is dropped
    /// first, returns whatever state was last published.
    pub async fn settled(&mut self) -> ResourceState<T> {
        if let Ok(state) = self.receiver.wait_for(ResourceState::is_settled).await {
            return state.clone();
        }
        self.receiver.borrow().clone()
    }

    /// Wait for the next transition. Returns `None` once the cache is gone.
    pub async fn changed(&mut self) -> Option<ResourceState<T>> {
        self.receiver.changed().await.ok()?;
        Some(self.receiver.borrow_and_update().clone())
    }

    /// Convert into a `Stream` yielding the current state, then every
    /// transition.
    pub fn into_stream(self) -> ResourceWatchStream<T> {
        ResourceWatchStream {
            inner: WatchStream::new(self.receiver),
        }
    }
}

/// `Stream` adapter backed by a `watch::Receiver`.
pub struct ResourceWatchStream<T: Send + Sync + 'static> {
    inner: WatchStream<ResourceState<T>>,
}

impl<T: Send + Sync + 'static> Stream for ResourceWatchStream<T> {
    type Item = ResourceState<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        // WatchStream is Unpin.
        Pin::new(&mut self.inner).poll_next(cx)
    }
}
