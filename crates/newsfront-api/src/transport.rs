// Shared transport configuration for building reqwest::Client instances.
//
// Keeps TLS, timeout, and user-agent settings in one place so the portal
// client and tests build their HTTP clients the same way.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::Error;

const USER_AGENT: &str = concat!("newsfront/", env!("CARGO_PKG_VERSION"));

/// TLS verification mode (api-level mirror of core's `TlsVerification`).
#[derive(Debug, Clone, Default)]
pub enum TlsMode {
    /// Use the system certificate store.
    #[default]
    System,
    /// Use a custom CA certificate from the given PEM file.
    CustomCa(PathBuf),
    /// Accept any certificate (development backends with self-signed certs).
    DangerAcceptInvalid,
}

/// Shared transport configuration for building HTTP clients.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub tls: TlsMode,
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            tls: TlsMode::System,
            timeout: Duration::from_secs(30),
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        let mut builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT);

        match &self.tls {
            TlsMode::System => {}
            TlsMode::CustomCa(path) => {
                let cert_pem = std::fs::read(path)
                    .map_err(|e| Error::Tls(format!("failed to read CA cert: {e}")))?;
                let cert = reqwest::Certificate::from_pem(&cert_pem)
                    .map_err(|e| Error::Tls(format!("invalid CA cert: {e}")))?;
                builder = builder.add_root_certificate(cert);
            }
            TlsMode::DangerAcceptInvalid => {
                builder = builder.danger_accept_invalid_certs(true);
            }
        }

        builder
            .build()
            .map_err(|e| Error::Tls(format!("failed to build HTTP client: {e}")))
    }
}
