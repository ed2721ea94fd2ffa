// ── Domain model ──
//
// Canonical record types shared by the cache and the views. Immutable once
// fetched; the cache hands them out behind `Arc`.

pub mod news;
pub mod profile;

pub use news::{NewsArticle, NewsImage, Publisher};
pub use profile::UserProfile;
