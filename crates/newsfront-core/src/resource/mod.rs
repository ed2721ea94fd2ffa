// ── Remote resources ──
//
// Keyed single-flight + freshness-window cache for remote records, and the
// observer handles it vends. One `ResourceCache<T>` per record type.

mod cache;
mod handle;
mod state;

pub use cache::ResourceCache;
pub use handle::{ResourceHandle, ResourceWatchStream};
pub use state::{ErrorInfo, FetchKey, ResourceState};
