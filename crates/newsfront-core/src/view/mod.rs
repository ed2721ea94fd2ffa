// ── View models ──
//
// Pure functions from resource state + locale + translations to render
// models. Front-ends (the CLI, or any other renderer) only format these.

mod news_detail;
mod profile_card;

use serde::Serialize;

use crate::resource::{ErrorInfo, ResourceState};

pub use news_detail::{Carousel, CoverImage, DetailLabels, NewsDetail, NewsPage, Sidebar, news_detail, news_page};
pub use profile_card::{ProfileCard, profile_card};

/// What a view shows for one resource: a spinner, a generic error
/// indicator, or the content.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "content", rename_all = "lowercase")]
pub enum Rendered<V> {
    Loading,
    Failed(ErrorInfo),
    Ready(V),
}

impl<V> Rendered<V> {
    /// Map a resource state; `Idle` renders as `Loading`.
    pub fn from_state<T>(state: &ResourceState<T>, ready: impl FnOnce(&T) -> V) -> Self {
        match state {
            ResourceState::Idle | ResourceState::Loading => Self::Loading,
            ResourceState::Error { cause, .. } => Self::Failed(cause.clone()),
            ResourceState::Success { value, .. } => Self::Ready(ready(value)),
        }
    }

    pub fn ready(&self) -> Option<&V> {
        match self {
            Self::Ready(v) => Some(v),
            _ => None,
        }
    }
}

/// An outbound navigation link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub label: String,
    pub href: String,
    /// Hover text, when the source markup carries one.
    pub title: Option<String>,
}

impl Link {
    pub(crate) fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            title: None,
        }
    }

    #[must_use]
    pub(crate) fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}
