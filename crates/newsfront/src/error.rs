//! CLI error types with miette diagnostics.
//!
//! Maps config, core, and fetch failures into user-facing errors with
//! actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use newsfront_config::ConfigError;
use newsfront_core::{CoreError, ErrorInfo};

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Fetch ────────────────────────────────────────────────────────
    #[error("Could not load {resource}: {message}")]
    #[diagnostic(code(newsfront::fetch_failed))]
    Fetch {
        resource: String,
        message: String,
        status: Option<u16>,
    },

    #[error("Cannot reach the portal backend")]
    #[diagnostic(
        code(newsfront::client_setup),
        help("Check base_url, ca_cert and insecure in your profile.\n{reason}")
    )]
    ClientSetup { reason: String },

    // ── Authentication ───────────────────────────────────────────────
    #[error("No access token for profile '{profile}'")]
    #[diagnostic(
        code(newsfront::no_token),
        help(
            "Pass --token, set NEWSFRONT_TOKEN, or store one with:\n\
             newsfront config set-token <TOKEN> --profile {profile}"
        )
    )]
    NoToken { profile: String },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(newsfront::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Configuration file not found")]
    #[diagnostic(
        code(newsfront::no_config),
        help(
            "Create one with: newsfront config init --base-url <URL>\n\
             Or pass --base-url.\n\
             Expected at: {path}"
        )
    )]
    NoConfig { path: String },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(newsfront::config))]
    Config { message: String },

    #[error("Keyring error: {message}")]
    #[diagnostic(
        code(newsfront::keyring),
        help("Set token_env in the profile, or pass --token instead.")
    )]
    Keyring { message: String },

    #[error("Failed to render output: {message}")]
    #[diagnostic(code(newsfront::render))]
    Render { message: String },

    // ── IO ───────────────────────────────────────────────────────────
    #[error(transparent)]
    #[diagnostic(code(newsfront::io))]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to a process exit code.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Fetch { status, .. } => match status {
                Some(401 | 403) => exit_code::AUTH,
                Some(404) => exit_code::NOT_FOUND,
                None => exit_code::CONNECTION,
                Some(_) => exit_code::GENERAL,
            },
            Self::ClientSetup { .. } => exit_code::CONNECTION,
            Self::NoToken { .. } => exit_code::AUTH,
            Self::Validation { .. } | Self::NoConfig { .. } => exit_code::USAGE,
            Self::Config { .. } | Self::Keyring { .. } | Self::Render { .. } | Self::Io(_) => {
                exit_code::GENERAL
            }
        }
    }

    pub fn fetch(resource: impl Into<String>, cause: &ErrorInfo) -> Self {
        Self::Fetch {
            resource: resource.into(),
            message: cause.message.clone(),
            status: cause.status_code,
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => Self::Validation { field, reason },
            ConfigError::NoToken { profile } => Self::NoToken { profile },
            ConfigError::Keyring(e) => Self::Keyring {
                message: e.to_string(),
            },
            ConfigError::Io(e) => Self::Io(e),
            other => Self::Config {
                message: other.to_string(),
            },
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ClientSetup { reason } => Self::ClientSetup { reason },
            CoreError::Config { message } => Self::Config { message },
        }
    }
}
