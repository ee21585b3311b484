//! Shared configuration for the dotmon CLI.
//!
//! TOML profiles, UID resolution (env + keyring + plaintext), and
//! translation to `dotmon_core::MonitorConfig`. The CLI layers its
//! `GlobalOpts` overrides on top of what this crate resolves.

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
use tracing::debug;

use dotmon_core::{MonitorConfig, TlsVerification};

pub use dotmon_api::DEFAULT_BASE_URL;

/// Keyring service name under which UIDs are stored.
pub const KEYRING_SERVICE: &str = "dotmon";

/// Last-resort environment variable holding the account UID.
pub const UID_ENV: &str = "DOTCOM_MONITOR_UID";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no UID configured for profile '{profile}'")]
    NoCredentials { profile: String },

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

    #[serde(default)]
    pub defaults: Defaults,

    /// Named account profiles.
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

impl Config {
    /// The profile name to use when none is given explicitly.
    pub fn active_profile_name(&self) -> &str {
        self.default_profile.as_deref().unwrap_or("default")
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default)]
    pub insecure: bool,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            insecure: false,
            timeout: default_timeout(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_timeout() -> u64 {
    30
}

/// A named Dotcom-Monitor account profile.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct Profile {
    /// API base URL. Defaults to the public config API.
    pub base_url: Option<String>,

    /// Account UID (plaintext, prefer keyring or env var).
    pub uid: Option<String>,

    /// Environment variable name containing the UID.
    pub uid_env: Option<String>,

    /// Path to custom CA certificate.
    pub ca_cert: Option<PathBuf>,

    /// Override insecure TLS setting.
    pub insecure: Option<bool>,

    /// Override timeout, in seconds.
    pub timeout: Option<u64>,
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "dotmon", "dotmon").map_or_else(
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
    p.push("dotmon");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load config from `path` + `DOTMON_*` environment overrides.
///
/// Nested keys use a double underscore: `DOTMON_DEFAULTS__TIMEOUT=60`.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    debug!(path = %path.display(), "loading config");
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("DOTMON_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if the file doesn't exist.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    save_config_to(cfg, &config_path())
}

pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── UID resolution ──────────────────────────────────────────────────

fn keyring_entry(profile_name: &str) -> Result<keyring::Entry, ConfigError> {
    Ok(keyring::Entry::new(
        KEYRING_SERVICE,
        &format!("{profile_name}/uid"),
    )?)
}

/// Store a profile's UID in the system keyring.
pub fn store_uid(profile_name: &str, uid: &str) -> Result<(), ConfigError> {
    keyring_entry(profile_name)?.set_password(uid)?;
    Ok(())
}

fn keyring_uid(profile_name: &str) -> Option<String> {
    keyring_entry(profile_name).ok()?.get_password().ok()
}

/// Resolve the account UID from the credential chain (no CLI flag step).
///
/// Order: the profile's `uid_env` variable, the system keyring,
/// `DOTCOM_MONITOR_UID`, then the plaintext `uid` in the profile.
pub fn resolve_uid(profile: &Profile, profile_name: &str) -> Result<SecretString, ConfigError> {
    resolve_uid_with(
        profile,
        profile_name,
        |name| std::env::var(name).ok(),
        keyring_uid,
    )
}

fn resolve_uid_with(
    profile: &Profile,
    profile_name: &str,
    env: impl Fn(&str) -> Option<String>,
    keyring: impl Fn(&str) -> Option<String>,
) -> Result<SecretString, ConfigError> {
    let non_empty = |v: Option<String>| v.filter(|s| !s.trim().is_empty());

    if let Some(ref env_name) = profile.uid_env {
        if let Some(val) = non_empty(env(env_name)) {
            return Ok(SecretString::from(val));
        }
    }

    if let Some(secret) = non_empty(keyring(profile_name)) {
        return Ok(SecretString::from(secret));
    }

    if let Some(val) = non_empty(env(UID_ENV)) {
        return Ok(SecretString::from(val));
    }

    if let Some(uid) = non_empty(profile.uid.clone()) {
        return Ok(SecretString::from(uid));
    }

    Err(ConfigError::NoCredentials {
        profile: profile_name.into(),
    })
}

// ── Translation ─────────────────────────────────────────────────────

/// Parse a profile's base URL, falling back to the public config API.
pub fn profile_base_url(profile: &Profile) -> Result<url::Url, ConfigError> {
    let raw = profile
        .base_url
        .as_deref()
        .unwrap_or(DEFAULT_BASE_URL);
    raw.parse().map_err(|_| ConfigError::Validation {
        field: "base_url".into(),
        reason: format!("invalid URL: {raw}"),
    })
}

/// TLS strategy for a profile. `insecure` wins over `ca_cert`.
pub fn profile_tls(profile: &Profile, defaults: &Defaults) -> TlsVerification {
    if profile.insecure.unwrap_or(defaults.insecure) {
        TlsVerification::DangerAcceptInvalid
    } else if let Some(ref ca_path) = profile.ca_cert {
        TlsVerification::CustomCa(ca_path.clone())
    } else {
        TlsVerification::SystemDefaults
    }
}

/// Build a `MonitorConfig` from a profile, with no CLI flag overrides.
pub fn profile_to_monitor_config(
    profile: &Profile,
    profile_name: &str,
    defaults: &Defaults,
) -> Result<MonitorConfig, ConfigError> {
    let url = profile_base_url(profile)?;
    let uid = resolve_uid(profile, profile_name)?;

    let mut config = MonitorConfig::new(url, uid);
    config.tls = profile_tls(profile, defaults);
    config.timeout = Duration::from_secs(profile.timeout.unwrap_or(defaults.timeout));
    Ok(config)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use pretty_assertions::assert_eq;
    use secrecy::ExposeSecret;

    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn load_reads_profiles_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
default_profile = "work"

[defaults]
output = "json"

[profiles.work]
uid = "abc-123"
timeout = 5
"#,
        )
        .unwrap();

        let cfg = load_config_from(&path).unwrap();
        assert_eq!(cfg.active_profile_name(), "work");
        assert_eq!(cfg.defaults.output, "json");
        assert_eq!(cfg.defaults.timeout, 30);
        let work = &cfg.profiles["work"];
        assert_eq!(work.uid.as_deref(), Some("abc-123"));
        assert_eq!(work.timeout, Some(5));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(cfg.active_profile_name(), "default");
        assert!(cfg.profiles.is_empty());
    }

    #[test]
    fn save_then_load_keeps_profile() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut cfg = Config::default();
        cfg.profiles.insert(
            "default".into(),
            Profile {
                uid_env: Some("MY_UID".into()),
                insecure: Some(true),
                ..Profile::default()
            },
        );
        save_config_to(&cfg, &path).unwrap();

        let loaded = load_config_from(&path).unwrap();
        assert_eq!(loaded.profiles["default"], cfg.profiles["default"]);
    }

    #[test]
    fn uid_chain_order() {
        let profile = Profile {
            uid: Some("plain".into()),
            uid_env: Some("MY_UID".into()),
            ..Profile::default()
        };
        let env = |name: &str| match name {
            "MY_UID" => Some("from-profile-env".to_owned()),
            UID_ENV => Some("from-global-env".to_owned()),
            _ => None,
        };
        let keyring = |_: &str| Some("from-keyring".to_owned());

        let uid = resolve_uid_with(&profile, "p", env, keyring).unwrap();
        assert_eq!(uid.expose_secret(), "from-profile-env");

        let uid = resolve_uid_with(&profile, "p", |n: &str| env(n).filter(|_| n == UID_ENV), keyring)
            .unwrap();
        assert_eq!(uid.expose_secret(), "from-keyring");

        let uid = resolve_uid_with(&profile, "p", env, |_: &str| None).unwrap();
        assert_eq!(uid.expose_secret(), "from-profile-env");

        let uid = resolve_uid_with(&profile, "p", |n: &str| env(n).filter(|_| n == UID_ENV), |_: &str| None)
            .unwrap();
        assert_eq!(uid.expose_secret(), "from-global-env");

        let uid = resolve_uid_with(&profile, "p", no_env, |_: &str| None).unwrap();
        assert_eq!(uid.expose_secret(), "plain");
    }

    #[test]
    fn blank_uid_is_no_credentials() {
        let profile = Profile {
            uid: Some("   ".into()),
            ..Profile::default()
        };
        let err = resolve_uid_with(&profile, "p", no_env, |_: &str| None).unwrap_err();
        assert!(matches!(err, ConfigError::NoCredentials { .. }));
    }

    #[test]
    fn tls_and_base_url_from_profile() {
        let defaults = Defaults::default();
        let mut profile = Profile::default();
        assert_eq!(
            profile_base_url(&profile).unwrap().as_str(),
            url::Url::parse(DEFAULT_BASE_URL).unwrap().as_str()
        );
        assert_eq!(profile_tls(&profile, &defaults), TlsVerification::SystemDefaults);

        profile.ca_cert = Some(PathBuf::from("/etc/ca.pem"));
        assert_eq!(
            profile_tls(&profile, &defaults),
            TlsVerification::CustomCa(PathBuf::from("/etc/ca.pem"))
        );

        profile.insecure = Some(true);
        assert_eq!(profile_tls(&profile, &defaults), TlsVerification::DangerAcceptInvalid);

        profile.base_url = Some("not a url".into());
        assert!(matches!(
            profile_base_url(&profile),
            Err(ConfigError::Validation { .. })
        ));
    }
}
