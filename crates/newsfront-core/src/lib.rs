//! Data layer between `newsfront-api` and front-ends (the CLI, or any other
//! renderer).
//!
//! - **[`ResourceCache<T>`]**: keyed single-flight cache with a freshness
//!   window. Concurrent observers of one key share one transport call;
//!   settled entries are reused until the window elapses. Each key's
//!   [`ResourceState`] is published over a `tokio::sync::watch` channel.
//!
//! - **[`ResourceHandle<T>`]**: observer handle vended by the cache.
//!   Exposes `state()` / `settled()` / `changed()` / `into_stream()`.
//!
//! - **[`Session`]**: explicitly injected current-user store with
//!   subscribe/publish semantics.
//!
//! - **[`Portal`]**: composition root wiring the API client, one cache per
//!   record type, and the session into ready-to-render views.
//!
//! - **Views** ([`view`]): pure functions from resource state, locale, and
//!   a [`Translate`] lookup to render models (`ProfileCard`, `NewsPage`).

pub mod config;
pub mod convert;
pub mod error;
pub mod i18n;
pub mod locale;
pub mod model;
pub mod portal;
pub mod resource;
pub mod session;
pub mod tags;
pub mod view;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{DEFAULT_FRESHNESS, Endpoints, PortalConfig, TlsVerification};
pub use error::CoreError;
pub use i18n::{Catalog, Translate};
pub use locale::{Direction, Locale};
pub use model::{NewsArticle, NewsImage, Publisher, UserProfile};
pub use portal::Portal;
pub use resource::{ErrorInfo, FetchKey, ResourceCache, ResourceHandle, ResourceState};
pub use session::{Session, SessionUser, SessionUserPatch};
pub use view::{NewsDetail, NewsPage, ProfileCard, Rendered};
