// ── Runtime connection configuration ──
//
// Describes *how* to reach the Dotcom-Monitor API. Carries the account
// UID and transport tuning but never touches disk; the CLI builds a
// `MonitorConfig` from its profile and hands it in.

use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;
use url::Url;

use dotmon_api::transport::{TlsMode, TransportConfig};

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// Bundled root store (strict).
    #[default]
    SystemDefaults,
    /// Trust an additional CA certificate file.
    CustomCa(PathBuf),
    /// Skip verification (intercepting proxies).
    DangerAcceptInvalid,
}

/// Configuration for one API account.
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// API base URL, normally [`dotmon_api::DEFAULT_BASE_URL`].
    pub base_url: Url,
    /// Account UID used for `POST /login`.
    pub uid: SecretString,
    pub tls: TlsVerification,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl MonitorConfig {
    pub fn new(base_url: Url, uid: SecretString) -> Self {
        Self {
            base_url,
            uid,
            tls: TlsVerification::default(),
            timeout: Duration::from_secs(30),
        }
    }

    pub(crate) fn transport(&self) -> TransportConfig {
        let tls = match &self.tls {
            TlsVerification::SystemDefaults => TlsMode::System,
            TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
            TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
        };
        TransportConfig {
            tls,
            timeout: self.timeout,
        }
    }
}
