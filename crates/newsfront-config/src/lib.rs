//! Shared configuration for newsfront front-ends.
//!
//! TOML profiles, access-token resolution (env + keyring + plaintext),
//! and translation to `newsfront_core::PortalConfig`. The CLI adds
//! `GlobalOpts`-aware overrides on top.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use newsfront_core::{Endpoints, Locale, PortalConfig, TlsVerification};

const KEYRING_SERVICE: &str = "newsfront";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no access token configured for profile '{profile}'")]
    NoToken { profile: String },

    #[error("keyring error: {0}")]
    Keyring(#[from] keyring::Error),

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name.
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named backend profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_locale")]
    pub locale: String,

    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,

    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            output: default_output(),
            color: default_color(),
            timeout: default_timeout(),
        }
    }
}

fn default_locale() -> String {
    "en".into()
}
fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}
fn default_timeout() -> u64 {
    30
}

/// A named backend profile.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Profile {
    /// API root (e.g., "https://portal.example.edu/api").
    pub base_url: String,

    /// Profile endpoint path.
    #[serde(default = "default_profile_path")]
    pub profile_path: String,

    /// Article endpoint path; the id is appended.
    #[serde(default = "default_news_path")]
    pub news_path: String,

    /// Access token (plaintext; keyring or env var preferred).
    pub token: Option<String>,

    /// Environment variable name containing the access token.
    pub token_env: Option<String>,

    /// Code of the signed-in user; enables the sidebar profile card.
    pub user_code: Option<String>,

    /// Freshness window for cached records, in seconds.
    pub freshness_secs: Option<u64>,

    /// Override the default locale.
    pub locale: Option<String>,

    /// Path to custom CA certificate.
    pub ca_cert: Option<PathBuf>,

    /// Accept invalid TLS certificates.
    pub insecure: Option<bool>,

    /// Override timeout.
    pub timeout: Option<u64>,
}

fn default_profile_path() -> String {
    "/profile".into()
}
fn default_news_path() -> String {
    "/news".into()
}

impl Profile {
    /// A profile pointing at `base_url` with every other field defaulted.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            profile_path: default_profile_path(),
            news_path: default_news_path(),
            token: None,
            token_env: None,
            user_code: None,
            freshness_secs: None,
            locale: None,
            ca_cert: None,
            insecure: None,
            timeout: None,
        }
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("edu", "newsfront", "newsfront").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("newsfront");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load Config from `path` + `NEWSFRONT_*` environment variables.
///
/// Nested keys use a double underscore:
/// `NEWSFRONT_PROFILES__DEFAULT__BASE_URL`.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("NEWSFRONT_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if the file doesn't exist.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<PathBuf, ConfigError> {
    let path = config_path();
    save_config_to(cfg, &path)?;
    Ok(path)
}

/// Serialize config to TOML and write it to `path`.
pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Token resolution (without CLI flags) ────────────────────────────

/// Resolve the access token from the credential chain (no CLI flag step).
pub fn resolve_token(profile: &Profile, profile_name: &str) -> Result<SecretString, ConfigError> {
    // 1. Profile's token_env → env var lookup
    if let Some(ref env_name) = profile.token_env {
        if let Ok(val) = std::env::var(env_name) {
            return Ok(SecretString::from(val));
        }
    }

    // 2. System keyring
    if let Ok(entry) = keyring::Entry::new(KEYRING_SERVICE, &format!("{profile_name}/token")) {
        if let Ok(secret) = entry.get_password() {
            return Ok(SecretString::from(secret));
        }
    }

    // 3. Plaintext in config
    if let Some(ref token) = profile.token {
        return Ok(SecretString::from(token.clone()));
    }

    Err(ConfigError::NoToken {
        profile: profile_name.into(),
    })
}

/// Store an access token in the system keyring for `profile_name`.
pub fn store_token(profile_name: &str, token: &str) -> Result<(), ConfigError> {
    let entry = keyring::Entry::new(KEYRING_SERVICE, &format!("{profile_name}/token"))?;
    entry.set_password(token)?;
    Ok(())
}

/// Parse the effective locale: profile override, then global default.
pub fn resolve_locale(profile: Option<&Profile>, defaults: &Defaults) -> Result<Locale, ConfigError> {
    let raw = profile
        .and_then(|p| p.locale.as_deref())
        .unwrap_or(&defaults.locale);
    raw.parse().map_err(|_| ConfigError::Validation {
        field: "locale".into(),
        reason: format!("expected 'en' or 'ar', got '{raw}'"),
    })
}

/// Build a `PortalConfig` from a profile, without CLI flag overrides.
pub fn profile_to_portal_config(
    profile: &Profile,
    defaults: &Defaults,
) -> Result<PortalConfig, ConfigError> {
    let base_url: url::Url = profile
        .base_url
        .parse()
        .map_err(|_| ConfigError::Validation {
            field: "base_url".into(),
            reason: format!("invalid URL: {}", profile.base_url),
        })?;

    let tls = if profile.insecure.unwrap_or(false) {
        TlsVerification::DangerAcceptInvalid
    } else if let Some(ref ca_path) = profile.ca_cert {
        TlsVerification::CustomCa(ca_path.clone())
    } else {
        TlsVerification::SystemDefaults
    };

    let mut config = PortalConfig::new(base_url);
    config.endpoints = Endpoints {
        profile: profile.profile_path.clone(),
        news: profile.news_path.clone(),
    };
    config.tls = tls;
    config.timeout = Duration::from_secs(profile.timeout.unwrap_or(defaults.timeout));
    if let Some(secs) = profile.freshness_secs {
        config.freshness = Duration::from_secs(secs);
    }
    Ok(config)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use figment::Jail;
    use secrecy::ExposeSecret;

    #[test]
    fn load_from_file_and_env() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                r#"
                default_profile = "campus"

                [defaults]
                locale = "ar"

                [profiles.campus]
                base_url = "https://portal.example.edu/api"
                freshness_secs = 600
                "#,
            )?;
            jail.set_env("NEWSFRONT_DEFAULTS__TIMEOUT", "5");

            let cfg = load_config_from(Path::new("config.toml")).unwrap();
            assert_eq!(cfg.default_profile.as_deref(), Some("campus"));
            assert_eq!(cfg.defaults.locale, "ar");
            assert_eq!(cfg.defaults.timeout, 5);

            let profile = &cfg.profiles["campus"];
            assert_eq!(profile.news_path, "/news");

            let portal = profile_to_portal_config(profile, &cfg.defaults).unwrap();
            assert_eq!(portal.base_url.as_str(), "https://portal.example.edu/api");
            assert_eq!(portal.freshness, Duration::from_secs(600));
            assert_eq!(portal.timeout, Duration::from_secs(5));
            assert_eq!(portal.tls, TlsVerification::SystemDefaults);
            Ok(())
        });
    }

    #[test]
    fn missing_file_yields_defaults() {
        Jail::expect_with(|_| {
            let cfg = load_config_from(Path::new("absent.toml")).unwrap();
            assert!(cfg.profiles.is_empty());
            assert_eq!(cfg.defaults.output, "table");
            Ok(())
        });
    }

    #[test]
    fn invalid_base_url_is_validation_error() {
        let profile = Profile::new("not a url");
        let err = profile_to_portal_config(&profile, &Defaults::default()).unwrap_err();
        assert!(matches!(err, ConfigError::Validation { ref field, .. } if field == "base_url"));
    }

    #[test]
    fn insecure_wins_over_ca_cert() {
        let mut profile = Profile::new("https://portal.example.edu");
        profile.insecure = Some(true);
        profile.ca_cert = Some(PathBuf::from("/etc/ca.pem"));
        let portal = profile_to_portal_config(&profile, &Defaults::default()).unwrap();
        assert_eq!(portal.tls, TlsVerification::DangerAcceptInvalid);
    }

    #[test]
    fn token_from_named_env_var() {
        Jail::expect_with(|jail| {
            jail.set_env("CAMPUS_TOKEN", "from-env");
            let mut profile = Profile::new("https://portal.example.edu");
            profile.token_env = Some("CAMPUS_TOKEN".into());
            profile.token = Some("plaintext".into());

            let token = resolve_token(&profile, "campus-test-env").unwrap();
            assert_eq!(token.expose_secret(), "from-env");
            Ok(())
        });
    }

    #[test]
    fn locale_resolution() {
        let defaults = Defaults::default();
        assert_eq!(resolve_locale(None, &defaults).unwrap(), Locale::En);

        let mut profile = Profile::new("https://portal.example.edu");
        profile.locale = Some("ar".into());
        assert_eq!(resolve_locale(Some(&profile), &defaults).unwrap(), Locale::Ar);

        profile.locale = Some("fr".into());
        assert!(resolve_locale(Some(&profile), &defaults).is_err());
    }

    #[test]
    fn save_and_reload_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut cfg = Config::default();
        let mut profile = Profile::new("https://portal.example.edu/api");
        profile.user_code = Some("s2024".into());
        cfg.profiles.insert("default".into(), profile);
        save_config_to(&cfg, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let reloaded: Config = toml::from_str(&text).unwrap();
        assert_eq!(
            reloaded.profiles["default"].user_code.as_deref(),
            Some("s2024")
        );
    }
}
