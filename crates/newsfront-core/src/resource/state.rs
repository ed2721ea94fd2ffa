// ── Resource lifecycle state ──

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::Serialize;
use tokio::time::Instant;

const PROFILE_SCOPE: &str = "profileData";
const NEWS_SCOPE: &str = "news";

/// Identity of one cacheable remote request.
///
/// Equality and hashing use the raw key only. Keys built from a secret
/// (the profile key embeds the access token) are marked sensitive and
/// print only their scope.
#[derive(Clone)]
pub struct FetchKey {
    raw: String,
    sensitive: bool,
}

impl FetchKey {
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            sensitive: false,
        }
    }

    /// `profileData:<token>`
    pub fn profile(token: &str) -> Self {
        Self {
            raw: format!("{PROFILE_SCOPE}:{token}"),
            sensitive: true,
        }
    }

    /// `news:<id>`
    pub fn news(id: u64) -> Self {
        Self::new(format!("{NEWS_SCOPE}:{id}"))
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Prefix before the first `:` (the whole key when there is none).
    pub fn scope(&self) -> &str {
        self.raw.split_once(':').map_or(self.raw.as_str(), |(s, _)| s)
    }
}

impl PartialEq for FetchKey {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for FetchKey {}

impl Hash for FetchKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl fmt::Display for FetchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sensitive {
            write!(f, "{}:<redacted>", self.scope())
        } else {
            f.write_str(&self.raw)
        }
    }
}

impl fmt::Debug for FetchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FetchKey({self})")
    }
}

impl From<&str> for FetchKey {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for FetchKey {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

/// Failure extracted from a transport error.
///
/// Every failure kind (network, 4xx, 5xx, undecodable body) lands here
/// in the same shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorInfo {
    pub message: String,
    pub status_code: Option<u16>,
    /// Raw failure payload (`Null` when the transport produced none).
    pub raw: serde_json::Value,
}

impl ErrorInfo {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: None,
            raw: serde_json::Value::Null,
        }
    }

    #[must_use]
    pub fn with_status(mut self, status: u16) -> Self {
        self.status_code = Some(status);
        self
    }
}

impl fmt::Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status_code {
            Some(code) => write!(f, "{} (HTTP {code})", self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// Lifecycle of one key: `Idle → Loading → (Success | Error)`.
#[derive(Debug)]
pub enum ResourceState<T> {
    Idle,
    Loading,
    Success { value: Arc<T>, fetched_at: Instant },
    Error { cause: ErrorInfo, failed_at: Instant },
}

// Manual impl: cloning only bumps the `Arc`, so `T` need not be `Clone`.
impl<T> Clone for ResourceState<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Idle => Self::Idle,
            Self::Loading => Self::Loading,
            Self::Success { value, fetched_at } => Self::Success {
                value: Arc::clone(value),
                fetched_at: *fetched_at,
            },
            Self::Error { cause, failed_at } => Self::Error {
                cause: cause.clone(),
                failed_at: *failed_at,
            },
        }
    }
}

impl<T> ResourceState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// `true` once the loader has resolved either way.
    pub fn is_settled(&self) -> bool {
        self.is_success() || self.is_error()
    }

    pub fn data(&self) -> Option<&Arc<T>> {
        match self {
            Self::Success { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ErrorInfo> {
        match self {
            Self::Error { cause, .. } => Some(cause),
            _ => None,
        }
    }

    /// When the current value (or failure) was recorded.
    pub fn settled_at(&self) -> Option<Instant> {
        match self {
            Self::Success { fetched_at, .. } => Some(*fetched_at),
            Self::Error { failed_at, .. } => Some(*failed_at),
            _ => None,
        }
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Success { .. } => "success",
            Self::Error { .. } => "error",
        }
    }
}
