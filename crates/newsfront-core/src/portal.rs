// ── Portal facade ──
//
// Composition root for the front-end: owns the API client, one resource
// cache per record type, and the session store. Views are produced from
// the cached state; the profile fetch publishes the avatar into the session.

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use newsfront_api::PortalClient;
use newsfront_api::transport::{TlsMode, TransportConfig};

use crate::config::{PortalConfig, TlsVerification};
use crate::error::CoreError;
use crate::i18n::Translate;
use crate::model::{NewsArticle, UserProfile};
use crate::resource::{ErrorInfo, FetchKey, ResourceCache, ResourceHandle};
use crate::session::{Session, SessionUserPatch};
use crate::view::{self, NewsPage, ProfileCard, Rendered};

/// The main entry point for consumers.
///
/// Cheaply cloneable via `Arc<PortalInner>`; clones share caches and session.
#[derive(Clone)]
pub struct Portal {
    inner: Arc<PortalInner>,
}

struct PortalInner {
    config: PortalConfig,
    client: Arc<PortalClient>,
    session: Arc<Session>,
    profiles: ResourceCache<UserProfile>,
    articles: ResourceCache<NewsArticle>,
}

impl Portal {
    /// Build the HTTP client from `config` and start with an empty session.
    pub fn new(config: PortalConfig) -> Result<Self, CoreError> {
        let transport = build_transport(&config);
        let client = PortalClient::new(config.base_url.clone(), config.endpoints.clone(), &transport)?;
        Ok(Self::with_client(config, client, Arc::new(Session::new())))
    }

    /// Assemble from an existing client and session.
    pub fn with_client(config: PortalConfig, client: PortalClient, session: Arc<Session>) -> Self {
        let freshness = config.freshness;
        Self {
            inner: Arc::new(PortalInner {
                config,
                client: Arc::new(client),
                session,
                profiles: ResourceCache::new(freshness),
                articles: ResourceCache::new(freshness),
            }),
        }
    }

    pub fn config(&self) -> &PortalConfig {
        &self.inner.config
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.inner.session
    }

    pub fn profiles(&self) -> &ResourceCache<UserProfile> {
        &self.inner.profiles
    }

    pub fn articles(&self) -> &ResourceCache<NewsArticle> {
        &self.inner.articles
    }

    // ── Resources ────────────────────────────────────────────────

    /// Observe the profile owned by `token`.
    ///
    /// A successful transport call merges the avatar into the session user.
    pub fn profile(&self, token: &SecretString) -> ResourceHandle<UserProfile> {
        let client = Arc::clone(&self.inner.client);
        let session = Arc::clone(&self.inner.session);
        let token = token.clone();
        self.inner.profiles.observe_with(
            FetchKey::profile(token.expose_secret()),
            move |_| async move {
                client
                    .get_profile(&token)
                    .await
                    .map(UserProfile::from)
                    .map_err(ErrorInfo::from)
            },
            move |profile: &UserProfile| {
                debug!("publishing profile image to session");
                session.set_current_user(SessionUserPatch::profile_image(
                    profile.image_name.clone(),
                ));
            },
        )
    }

    /// Observe the article with `id`.
    pub fn news(&self, id: u64) -> ResourceHandle<NewsArticle> {
        let client = Arc::clone(&self.inner.client);
        self.inner.articles.observe(FetchKey::news(id), move |_| async move {
            client
                .get_news(id)
                .await
                .map(NewsArticle::from)
                .map_err(ErrorInfo::from)
        })
    }

    // ── Views ────────────────────────────────────────────────────

    /// Fetch (or reuse) the profile and render its card once settled.
    pub async fn profile_card(
        &self,
        token: &SecretString,
        t: &dyn Translate,
        profile_page: bool,
    ) -> Rendered<ProfileCard> {
        let state = self.profile(token).settled().await;
        view::profile_card(&state, t, profile_page)
    }

    /// Fetch (or reuse) the article and, when the session user has a code
    /// and a token, their profile; render the page once both settled.
    pub async fn news_page(&self, id: u64, t: &dyn Translate) -> NewsPage {
        let mut article = self.news(id);

        let sidebar_token = self
            .inner
            .session
            .current_user()
            .filter(|u| u.code.is_some())
            .and_then(|u| u.token.clone());
        let mut profile = sidebar_token.map(|token| self.profile(&token));

        let article_state = article.settled().await;
        let profile_state = match profile.as_mut() {
            Some(handle) => Some(handle.settled().await),
            None => None,
        };

        view::news_page(&article_state, profile_state.as_ref(), t)
    }
}

fn build_transport(config: &PortalConfig) -> TransportConfig {
    let tls = match &config.tls {
        TlsVerification::SystemDefaults => TlsMode::System,
        TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
        TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
    };
    TransportConfig {
        tls,
        timeout: config.timeout,
    }
}
