//! CLI configuration: thin wrapper around `dotmon_config` shared types.
//!
//! Re-exports the shared types and adds CLI-specific resolution that
//! respects `GlobalOpts` flag overrides (--uid, --base-url, etc.).

use std::time::Duration;

use secrecy::SecretString;

use dotmon_core::{MonitorConfig, TlsVerification};

use crate::cli::GlobalOpts;
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use dotmon_config::{
    Config, Defaults, Profile, config_path, load_config_or_default, save_config, store_uid,
};

// ── CLI-specific helpers ────────────────────────────────────────────

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .unwrap_or_else(|| config.active_profile_name().to_owned())
}

/// Comma-separated profile names for help text.
pub fn available_profiles(config: &Config) -> String {
    let mut names: Vec<_> = config.profiles.keys().cloned().collect();
    if names.is_empty() {
        return "(none)".into();
    }
    names.sort();
    names.join(", ")
}

/// Translate the active profile + global flags into a `MonitorConfig`.
///
/// Flag overrides take priority over profile values. A missing profile is
/// only an error when it was asked for by name; otherwise flags and the
/// environment alone may be enough.
pub fn resolve_monitor_config(global: &GlobalOpts, cfg: &Config) -> Result<MonitorConfig, CliError> {
    let profile_name = active_profile_name(global, cfg);
    let fallback = Profile::default();
    let profile = match cfg.profiles.get(&profile_name) {
        Some(profile) => profile,
        None if global.profile.is_some() => {
            return Err(CliError::ProfileNotFound {
                name: profile_name,
                available: available_profiles(cfg),
            });
        }
        None => &fallback,
    };

    // 1. Base URL (flag > env > profile > default)
    let url = match global.base_url.as_deref() {
        Some(raw) => raw.parse().map_err(|_| CliError::Validation {
            field: "base-url".into(),
            reason: format!("invalid URL: {raw}"),
        })?,
        None => dotmon_config::profile_base_url(profile)?,
    };

    // 2. UID (flag/env > profile chain)
    let uid = match global.uid.as_deref().filter(|u| !u.trim().is_empty()) {
        Some(uid) => SecretString::from(uid.to_owned()),
        None => dotmon_config::resolve_uid(profile, &profile_name)?,
    };

    // 3. TLS verification
    let tls = if global.insecure {
        TlsVerification::DangerAcceptInvalid
    } else {
        dotmon_config::profile_tls(profile, &cfg.defaults)
    };

    // 4. Timeout
    let secs = global
        .timeout
        .or(profile.timeout)
        .unwrap_or(cfg.defaults.timeout);

    let mut config = MonitorConfig::new(url, uid);
    config.tls = tls;
    config.timeout = Duration::from_secs(secs);
    Ok(config)
}
