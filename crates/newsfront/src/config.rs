//! CLI configuration: thin wrapper around `newsfront_config` shared types.
//!
//! Adds resolution that respects `GlobalOpts` flag overrides
//! (--base-url, --token, --locale, ...).

use std::time::Duration;

use clap::ValueEnum;
use secrecy::SecretString;

use newsfront_core::{Locale, PortalConfig, TlsVerification};

use crate::cli::{ColorMode, GlobalOpts, OutputFormat};
use crate::error::CliError;

pub use newsfront_config::{
    Config, Profile, config_path, load_config_or_default, save_config, store_token,
};

/// Everything a portal command needs, after flags, env, and file merged.
pub struct Resolved {
    pub profile_name: String,
    pub portal: PortalConfig,
    pub locale: Locale,
    /// Absent when no step of the credential chain produced one.
    pub token: Option<SecretString>,
    pub user_code: Option<String>,
    pub output: OutputFormat,
    pub color: ColorMode,
}

impl Resolved {
    /// The token, or a `NoToken` error naming the profile.
    pub fn require_token(&self) -> Result<&SecretString, CliError> {
        self.token.as_ref().ok_or_else(|| CliError::NoToken {
            profile: self.profile_name.clone(),
        })
    }
}

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Merge the config file, the active profile, and flag overrides.
///
/// Without a matching profile, `--base-url` alone is enough.
pub fn resolve(global: &GlobalOpts, cfg: &Config) -> Result<Resolved, CliError> {
    let profile_name = active_profile_name(global, cfg);

    let profile = match cfg.profiles.get(&profile_name) {
        Some(p) => p.clone(),
        None => {
            let base_url = global.base_url.clone().ok_or_else(|| CliError::NoConfig {
                path: config_path().display().to_string(),
            })?;
            Profile::new(base_url)
        }
    };

    let mut portal = profile_with_overrides(&profile, global, cfg)?;
    if global.insecure {
        portal.tls = TlsVerification::DangerAcceptInvalid;
    }
    if let Some(secs) = global.timeout {
        portal.timeout = Duration::from_secs(secs);
    }

    let locale = match global.locale {
        Some(l) => l,
        None => newsfront_config::resolve_locale(Some(&profile), &cfg.defaults)?,
    };

    let token = match global.token {
        Some(ref t) => Some(SecretString::from(t.clone())),
        None => newsfront_config::resolve_token(&profile, &profile_name).ok(),
    };

    tracing::debug!(
        profile = %profile_name,
        base_url = %portal.base_url,
        %locale,
        has_token = token.is_some(),
        "resolved portal configuration"
    );

    let output = match global.output {
        Some(ref o) => o.clone(),
        None => parse_default("defaults.output", &cfg.defaults.output)?,
    };
    let color = match global.color {
        Some(ref c) => c.clone(),
        None => parse_default("defaults.color", &cfg.defaults.color)?,
    };

    Ok(Resolved {
        profile_name,
        portal,
        locale,
        token,
        user_code: profile.user_code,
        output,
        color,
    })
}

/// Parse a `[defaults]` value with the same names the flag accepts.
fn parse_default<T: ValueEnum>(field: &str, raw: &str) -> Result<T, CliError> {
    T::from_str(raw, true).map_err(|reason| CliError::Validation {
        field: field.into(),
        reason,
    })
}

fn profile_with_overrides(
    profile: &Profile,
    global: &GlobalOpts,
    cfg: &Config,
) -> Result<PortalConfig, CliError> {
    match global.base_url {
        Some(ref url) => {
            let mut p = profile.clone();
            p.base_url.clone_from(url);
            Ok(newsfront_config::profile_to_portal_config(&p, &cfg.defaults)?)
        }
        None => Ok(newsfront_config::profile_to_portal_config(profile, &cfg.defaults)?),
    }
}
