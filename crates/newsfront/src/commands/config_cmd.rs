//! Config subcommand handlers.

use std::fmt::Write;

use crate::cli::{ConfigArgs, ConfigCommand, ConfigInitArgs, GlobalOpts};
use crate::config::{self, Config, Profile};
use crate::error::CliError;
use crate::output;

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Path => {
            output::print_output(&config::config_path().display().to_string(), global.quiet);
            Ok(())
        }

        ConfigCommand::Show => {
            let cfg = config::load_config_or_default();
            output::print_output(&format_config_redacted(&cfg), global.quiet);
            Ok(())
        }

        ConfigCommand::Init(init) => {
            let mut cfg = config::load_config_or_default();
            let name = config::active_profile_name(global, &cfg);
            apply_init(&mut cfg, &name, init)?;
            let path = config::save_config(&cfg)?;
            if !global.quiet {
                eprintln!("Profile '{name}' saved to {}", path.display());
            }
            Ok(())
        }

        ConfigCommand::SetToken(set) => {
            let cfg = config::load_config_or_default();
            let name = config::active_profile_name(global, &cfg);
            config::store_token(&name, &set.token)?;
            if !global.quiet {
                eprintln!("Token stored in keyring for profile '{name}'");
            }
            Ok(())
        }
    }
}

/// Create or update profile `name`, keeping fields the flags don't touch.
fn apply_init(cfg: &mut Config, name: &str, init: ConfigInitArgs) -> Result<(), CliError> {
    init.base_url
        .parse::<url::Url>()
        .map_err(|_| CliError::Validation {
            field: "base_url".into(),
            reason: format!("invalid URL: {}", init.base_url),
        })?;

    let profile = cfg
        .profiles
        .entry(name.to_owned())
        .or_insert_with(|| Profile::new(init.base_url.clone()));
    profile.base_url = init.base_url;
    if init.user_code.is_some() {
        profile.user_code = init.user_code;
    }
    if init.token_env.is_some() {
        profile.token_env = init.token_env;
    }
    if let Some(locale) = init.locale {
        profile.locale = Some(locale.to_string());
    }

    let default_missing = cfg
        .default_profile
        .as_ref()
        .is_none_or(|d| !cfg.profiles.contains_key(d));
    if init.set_default || default_missing {
        cfg.default_profile = Some(name.to_owned());
    }
    Ok(())
}

/// Format config for display, masking tokens.
fn format_config_redacted(cfg: &Config) -> String {
    let mut out = String::new();

    if let Some(ref default) = cfg.default_profile {
        let _ = writeln!(out, "default_profile = \"{default}\"");
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "[defaults]");
    let _ = writeln!(out, "locale = \"{}\"", cfg.defaults.locale);
    let _ = writeln!(out, "output = \"{}\"", cfg.defaults.output);
    let _ = writeln!(out, "color = \"{}\"", cfg.defaults.color);
    let _ = writeln!(out, "timeout = {}", cfg.defaults.timeout);

    let mut names: Vec<_> = cfg.profiles.keys().collect();
    names.sort();
    for name in names {
        let p = &cfg.profiles[name];
        let _ = writeln!(out);
        let _ = writeln!(out, "[profiles.{name}]");
        let _ = writeln!(out, "base_url = \"{}\"", p.base_url);
        let _ = writeln!(out, "profile_path = \"{}\"", p.profile_path);
        let _ = writeln!(out, "news_path = \"{}\"", p.news_path);
        if p.token.is_some() {
            let _ = writeln!(out, "token = \"****\"");
        }
        if let Some(ref env) = p.token_env {
            let _ = writeln!(out, "token_env = \"{env}\"");
        }
        if let Some(ref code) = p.user_code {
            let _ = writeln!(out, "user_code = \"{code}\"");
        }
        if let Some(secs) = p.freshness_secs {
            let _ = writeln!(out, "freshness_secs = {secs}");
        }
        if let Some(ref locale) = p.locale {
            let _ = writeln!(out, "locale = \"{locale}\"");
        }
        if let Some(ref ca) = p.ca_cert {
            let _ = writeln!(out, "ca_cert = \"{}\"", ca.display());
        }
        if let Some(insecure) = p.insecure {
            let _ = writeln!(out, "insecure = {insecure}");
        }
        if let Some(timeout) = p.timeout {
            let _ = writeln!(out, "timeout = {timeout}");
        }
    }

    out
}
