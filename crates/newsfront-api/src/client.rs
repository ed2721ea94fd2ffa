// Portal API HTTP client
//
// Wraps `reqwest::Client` with portal URL construction, bearer-token
// injection, and error-body decoding. Every endpoint returns the decoded
// payload; non-success responses become `Error::Api` with the backend's
// own message and status.

use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::models::{ErrorBody, NewsArticleResponse, ProfileResponse};
use crate::transport::TransportConfig;

/// Resource paths appended to the base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Authenticated profile of the token's owner (e.g. `/profile`).
    pub profile: String,
    /// Article collection; the id is appended as a path segment (e.g. `/news`).
    pub news: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            profile: "/profile".into(),
            news: "/news".into(),
        }
    }
}

/// Raw HTTP client for the news portal backend.
pub struct PortalClient {
    http: reqwest::Client,
    base_url: Url,
    endpoints: Endpoints,
}

impl PortalClient {
    /// Create a new client from a `TransportConfig`.
    ///
    /// `base_url` is the API root (e.g. `https://portal.example.edu/api`);
    /// endpoint paths are appended to it verbatim.
    pub fn new(
        base_url: Url,
        endpoints: Endpoints,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self {
            http,
            base_url,
            endpoints,
        })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        Ok(Self {
            http,
            base_url: Url::parse(base_url)?,
            endpoints: Endpoints::default(),
        })
    }

    /// Replace the endpoint paths.
    #[must_use]
    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// The API base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The configured endpoint paths.
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    // ── Endpoints ────────────────────────────────────────────────────

    /// Fetch the profile of the token's owner.
    ///
    /// `GET {base}{profile}` with `Authorization: Bearer <token>`
    pub async fn get_profile(&self, token: &SecretString) -> Result<ProfileResponse, Error> {
        let url = self.url(&self.endpoints.profile)?;
        debug!("fetching profile");
        let request = self.http.get(url).bearer_auth(token.expose_secret());
        self.send(request).await
    }

    /// Fetch a single article.
    ///
    /// `GET {base}{news}/{id}`
    pub async fn get_news(&self, id: u64) -> Result<NewsArticleResponse, Error> {
        let path = format!("{}/{id}", self.endpoints.news.trim_end_matches('/'));
        let url = self.url(&path)?;
        debug!(id, "fetching news article");
        self.send(self.http.get(url)).await
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Build a full URL: `{base}{path}`.
    pub(crate) fn url(&self, path: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        Ok(Url::parse(&format!("{base}/{path}"))?)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a request and decode the JSON body, or the error body on failure.
    async fn send<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<T, Error> {
        let resp = request.send().await.map_err(Error::Transport)?;
        let status = resp.status();
        debug!(%status, url = %resp.url(), "response received");

        let body = resp.text().await.map_err(Error::Transport)?;

        if !status.is_success() {
            return Err(parse_error_body(status, &body));
        }

        serde_json::from_str(&body).map_err(|e| Error::Deserialization {
            message: e.to_string(),
            body,
        })
    }
}

/// Turn a non-success response into `Error::Api`.
///
/// The body's `message` / `statusCode` win over the HTTP status line; a body
/// that is not JSON is kept as a JSON string.
fn parse_error_body(status: reqwest::StatusCode, body: &str) -> Error {
    let raw: serde_json::Value = serde_json::from_str(body)
        .unwrap_or_else(|_| serde_json::Value::String(body.to_owned()));
    let parsed: Option<ErrorBody> = serde_json::from_value(raw.clone()).ok();

    let message = parsed
        .as_ref()
        .and_then(|b| b.message.clone())
        .or_else(|| status.canonical_reason().map(str::to_owned))
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
    let status_code = parsed
        .and_then(|b| b.status())
        .unwrap_or_else(|| status.as_u16());

    Error::Api {
        message,
        status: Some(status_code),
        body: raw,
    }
}
