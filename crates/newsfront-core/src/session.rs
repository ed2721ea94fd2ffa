// ── Session store ──
//
// The "current user" shared by every view. Injected at the composition
// root (`Portal`) and passed explicitly; views read it, the profile fetch
// publishes into it.

use std::sync::Arc;

use secrecy::SecretString;
use tokio::sync::watch;
use tracing::debug;

/// The signed-in user as far as the front-end knows it.
#[derive(Debug, Clone, Default)]
pub struct SessionUser {
    /// Student/staff code; the sidebar profile card only renders when set.
    pub code: Option<String>,
    /// Bearer token used for the profile endpoint.
    pub token: Option<SecretString>,
    pub name: Option<String>,
    pub image_name: Option<String>,
}

/// Partial update merged into the current `SessionUser`.
///
/// `None` fields leave the existing value untouched. `image_name` is
/// doubly optional: `Some(None)` clears the avatar.
#[derive(Debug, Clone, Default)]
pub struct SessionUserPatch {
    pub code: Option<String>,
    pub token: Option<SecretString>,
    pub name: Option<String>,
    pub image_name: Option<Option<String>>,
}

impl SessionUserPatch {
    pub fn image_name(image_name: impl Into<String>) -> Self {
        Self::profile_image(Some(image_name.into()))
    }

    /// Overwrite the avatar with whatever the profile carried, including
    /// nothing.
    pub fn profile_image(image_name: Option<String>) -> Self {
        Self {
            image_name: Some(image_name),
            ..Self::default()
        }
    }
}

impl SessionUser {
    fn merge(&mut self, patch: SessionUserPatch) {
        if let Some(code) = patch.code {
            self.code = Some(code);
        }
        if let Some(token) = patch.token {
            self.token = Some(token);
        }
        if let Some(name) = patch.name {
            self.name = Some(name);
        }
        if let Some(image_name) = patch.image_name {
            self.image_name = image_name;
        }
    }
}

/// Observable current-user store.
///
/// Every `set_current_user` call publishes a new snapshot and bumps the
/// revision counter, whether or not any field actually changed.
pub struct Session {
    user: watch::Sender<Option<Arc<SessionUser>>>,
    revision: watch::Sender<u64>,
}

impl Session {
    pub fn new() -> Self {
        let (user, _) = watch::channel(None);
        let (revision, _) = watch::channel(0u64);
        Self { user, revision }
    }

    /// Start with a known user.
    pub fn with_user(user: SessionUser) -> Self {
        let session = Self::new();
        session.user.send_replace(Some(Arc::new(user)));
        session
    }

    pub fn current_user(&self) -> Option<Arc<SessionUser>> {
        self.user.borrow().clone()
    }

    /// Merge `patch` into the current user (creating one if absent) and
    /// publish the result.
    pub fn set_current_user(&self, patch: SessionUserPatch) {
        self.user.send_modify(|current| {
            let mut next = current.as_deref().cloned().unwrap_or_default();
            next.merge(patch);
            *current = Some(Arc::new(next));
        });
        self.revision.send_modify(|r| *r += 1);
        debug!(revision = *self.revision.borrow(), "session user updated");
    }

    /// Subscribe to current-user snapshots.
    pub fn subscribe(&self) -> watch::Receiver<Option<Arc<SessionUser>>> {
        self.user.subscribe()
    }

    /// Number of publications so far.
    pub fn revision(&self) -> u64 {
        *self.revision.borrow()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
