use thiserror::Error;

/// Top-level error type for the `newsfront-api` crate.
///
/// Covers every failure mode of the portal backend: transport, URL
/// construction, TLS setup, structured error bodies and undecodable payloads.
/// `newsfront-core` folds all of these into a single `ErrorInfo`.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS handshake or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Backend ─────────────────────────────────────────────────────
    /// Non-success response from the backend.
    ///
    /// `message` comes from the JSON error body when it carries one,
    /// otherwise from the HTTP reason phrase. `body` keeps the raw payload
    /// (parsed JSON, or a JSON string when the body was not JSON).
    #[error("API error{}: {message}", status.map(|s| format!(" (HTTP {s})")).unwrap_or_default())]
    Api {
        message: String,
        status: Option<u16>,
        body: serde_json::Value,
    },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// HTTP status code associated with this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            Self::Api { status, .. } => *status,
            _ => None,
        }
    }

    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Returns `true` if the backend rejected the bearer token.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }

    /// Raw payload carried by the failure, `Null` when there is none.
    pub fn raw_body(&self) -> serde_json::Value {
        match self {
            Self::Api { body, .. } => body.clone(),
            Self::Deserialization { body, .. } => serde_json::Value::String(body.clone()),
            _ => serde_json::Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn api_error_display_includes_status() {
        let err = Error::Api {
            message: "Not found".into(),
            status: Some(404),
            body: json!({ "message": "Not found", "statusCode": 404 }),
        };
        assert_eq!(err.to_string(), "API error (HTTP 404): Not found");
        assert!(err.is_not_found());
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn api_error_display_without_status() {
        let err = Error::Api {
            message: "boom".into(),
            status: None,
            body: serde_json::Value::Null,
        };
        assert_eq!(err.to_string(), "API error: boom");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn deserialization_raw_body_is_string() {
        let err = Error::Deserialization {
            message: "expected value".into(),
            body: "<html>".into(),
        };
        assert_eq!(err.raw_body(), json!("<html>"));
    }
}
