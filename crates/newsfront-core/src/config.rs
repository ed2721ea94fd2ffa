// ── Runtime portal configuration ──
//
// Describes *where* the backend lives and how long fetched records stay
// fresh. Never touches disk: the CLI (via `newsfront-config`) builds a
// `PortalConfig` and hands it in.

use std::time::Duration;

use url::Url;

pub use newsfront_api::Endpoints;

/// Default freshness window: one day, i.e. "for the session" of any
/// realistic front-end run.
pub const DEFAULT_FRESHNESS: Duration = Duration::from_secs(24 * 60 * 60);

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    #[default]
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(std::path::PathBuf),
    /// Skip verification (development backends with self-signed certs).
    DangerAcceptInvalid,
}

/// Configuration for talking to one portal backend.
#[derive(Debug, Clone)]
pub struct PortalConfig {
    /// API root (e.g., `https://portal.example.edu/api`).
    pub base_url: Url,
    /// Resource paths under `base_url`.
    pub endpoints: Endpoints,
    /// TLS verification strategy.
    pub tls: TlsVerification,
    /// Request timeout.
    pub timeout: Duration,
    /// How long a successful (or failed) fetch is reused before the next
    /// observation triggers a new transport call.
    pub freshness: Duration,
}

impl PortalConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            endpoints: Endpoints::default(),
            tls: TlsVerification::default(),
            timeout: Duration::from_secs(30),
            freshness: DEFAULT_FRESHNESS,
        }
    }
}
