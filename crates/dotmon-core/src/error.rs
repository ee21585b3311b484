// ── Core error types ──
//
// User-facing errors from dotmon-core. Consumers never see raw HTTP
// plumbing; the `From<dotmon_api::Error>` impl translates transport
// failures into domain-appropriate variants.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot connect to Dotcom-Monitor at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("Request timed out: {reason}")]
    Timeout { reason: String },

    // ── Data errors ──────────────────────────────────────────────────
    #[error("No {entity_type} found matching {identifier}")]
    NotFound {
        entity_type: String,
        identifier: String,
    },

    #[error("More than one {entity_type} matches {identifier}: ids {ids:?}")]
    Ambiguous {
        entity_type: String,
        identifier: String,
        ids: Vec<i64>,
    },

    // ── Operation errors ─────────────────────────────────────────────
    #[error("Operation rejected by Dotcom-Monitor: {message}")]
    Rejected { message: String },

    #[error("Invalid {entity_type}: {}", .violations.join("; "))]
    ValidationFailed {
        entity_type: String,
        violations: Vec<String>,
    },

    // ── API errors (wrapped, not exposed raw) ────────────────────────
    #[error("API error: {message}")]
    Api {
        message: String,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<dotmon_api::Error> for CoreError {
    fn from(err: dotmon_api::Error) -> Self {
        match err {
            dotmon_api::Error::Authentication { message } => {
                CoreError::AuthenticationFailed { message }
            }
            dotmon_api::Error::NotLoggedIn => CoreError::AuthenticationFailed {
                message: "Will not perform request; client is closed".into(),
            },
            dotmon_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout {
                        reason: e.to_string(),
                    }
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map_or_else(|| "<unknown>".into(), ToString::to_string),
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Api {
                        message: e.to_string(),
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            dotmon_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            dotmon_api::Error::Tls(msg) => CoreError::ConnectionFailed {
                url: String::new(),
                reason: format!("TLS error: {msg}"),
            },
            dotmon_api::Error::Api { status, message } => CoreError::Api {
                message: format!("HTTP {status}: {message}"),
                status: Some(status),
            },
            dotmon_api::Error::Rejected { message } => CoreError::Rejected { message },
            dotmon_api::Error::Encode(e) => {
                CoreError::Internal(format!("Failed to encode request: {e}"))
            }
            dotmon_api::Error::Deserialization { message, body: _ } => {
                CoreError::Internal(format!("Deserialization error: {message}"))
            }
        }
    }
}

impl CoreError {
    pub(crate) fn not_found(entity_type: &str, identifier: impl ToString) -> Self {
        Self::NotFound {
            entity_type: entity_type.into(),
            identifier: identifier.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_lists_every_violation() {
        let err = CoreError::ValidationFailed {
            entity_type: "task".into(),
            violations: vec!["name: must not be empty".into(), "timeout: must be >= 0".into()],
        };
        assert_eq!(
            err.to_string(),
            "Invalid task: name: must not be empty; timeout: must be >= 0"
        );
    }

    #[test]
    fn rejected_passes_through() {
        let err: CoreError = dotmon_api::Error::Rejected {
            message: "Name must be unique".into(),
        }
        .into();
        assert!(matches!(err, CoreError::Rejected { ref message } if message == "Name must be unique"));
    }

    #[test]
    fn closed_client_is_an_auth_failure() {
        let err: CoreError = dotmon_api::Error::NotLoggedIn.into();
        assert!(matches!(err, CoreError::AuthenticationFailed { .. }));
    }
}
