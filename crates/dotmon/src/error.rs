//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` variants into user-facing errors
//! with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use dotmon_config::ConfigError;
use dotmon_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const REJECTED: i32 = 5;
    pub const AMBIGUOUS: i32 = 6;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────

    #[error("Could not connect to the API at {url}")]
    #[diagnostic(
        code(dotmon::connection_failed),
        help(
            "Check network access and the configured base URL.\n\
             URL: {url}\n\
             Behind an intercepting proxy? Try --insecure or set ca_cert in your profile."
        )
    )]
    ConnectionFailed { url: String, reason: String },

    // ── Authentication ───────────────────────────────────────────────

    #[error("Authentication failed: {message}")]
    #[diagnostic(
        code(dotmon::auth_failed),
        help(
            "Verify the account UID for profile '{profile}'.\n\
             Run: dotmon config set-uid --profile {profile}"
        )
    )]
    AuthFailed { profile: String, message: String },

    #[error("No UID configured for profile '{profile}'")]
    #[diagnostic(
        code(dotmon::no_credentials),
        help(
            "Configure one with: dotmon config init\n\
             Or pass --uid / set the DOTCOM_MONITOR_UID environment variable."
        )
    )]
    NoCredentials { profile: String },

    // ── Resources ────────────────────────────────────────────────────

    #[error("{resource_type} {identifier} not found")]
    #[diagnostic(code(dotmon::not_found))]
    NotFound {
        resource_type: String,
        identifier: String,
    },

    #[error("{resource_type} {identifier} matches several resources: {ids}")]
    #[diagnostic(
        code(dotmon::ambiguous),
        help("Names must be unique to be looked up; select by id instead.")
    )]
    Ambiguous {
        resource_type: String,
        identifier: String,
        ids: String,
    },

    // ── API ──────────────────────────────────────────────────────────

    #[error("The API rejected the request: {message}")]
    #[diagnostic(code(dotmon::rejected))]
    Rejected { message: String },

    #[error("API error{}: {message}", .status.map(|s| format!(" (HTTP {s})")).unwrap_or_default())]
    #[diagnostic(code(dotmon::api_error))]
    ApiError { status: Option<u16>, message: String },

    // ── Validation ───────────────────────────────────────────────────

    #[error("Invalid {entity_type}: {}", .violations.join("; "))]
    #[diagnostic(
        code(dotmon::invalid_spec),
        help("Fix the listed fields in the resource file and try again.")
    )]
    InvalidSpec {
        entity_type: String,
        violations: Vec<String>,
    },

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(dotmon::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(dotmon::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: dotmon config init"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error(transparent)]
    #[diagnostic(code(dotmon::config))]
    Config(ConfigError),

    // ── Timeout ──────────────────────────────────────────────────────

    #[error("Request timed out: {reason}")]
    #[diagnostic(
        code(dotmon::timeout),
        help("Increase timeout with --timeout or retry later.")
    )]
    Timeout { reason: String },

    #[error("Internal error: {0}")]
    #[diagnostic(code(dotmon::internal))]
    Internal(String),

    // ── IO / Serialization ────────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid resource file: {0}")]
    #[diagnostic(code(dotmon::json), help("Check the resource file contents and try again."))]
    Json(#[from] serde_json::Error),

    #[error("Invalid resource file: {0}")]
    #[diagnostic(code(dotmon::yaml), help("Check the resource file contents and try again."))]
    Yaml(#[from] serde_yaml::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::AuthFailed { .. } | Self::NoCredentials { .. } => exit_code::AUTH,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Ambiguous { .. } => exit_code::AMBIGUOUS,
            Self::Rejected { .. } => exit_code::REJECTED,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::InvalidSpec { .. }
            | Self::Validation { .. }
            | Self::ProfileNotFound { .. }
            | Self::Json(_)
            | Self::Yaml(_) => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }

    /// Name the profile whose UID was rejected.
    pub fn for_profile(self, profile_name: &str) -> Self {
        match self {
            Self::AuthFailed { message, .. } => Self::AuthFailed {
                profile: profile_name.to_owned(),
                message,
            },
            other => other,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ConnectionFailed { url, reason } => Self::ConnectionFailed { url, reason },
            CoreError::AuthenticationFailed { message } => Self::AuthFailed {
                profile: "current".into(),
                message,
            },
            CoreError::Timeout { reason } => Self::Timeout { reason },
            CoreError::NotFound {
                entity_type,
                identifier,
            } => Self::NotFound {
                resource_type: entity_type,
                identifier,
            },
            CoreError::Ambiguous {
                entity_type,
                identifier,
                ids,
            } => Self::Ambiguous {
                resource_type: entity_type,
                identifier,
                ids: ids
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", "),
            },
            CoreError::Rejected { message } => Self::Rejected { message },
            CoreError::ValidationFailed {
                entity_type,
                violations,
            } => Self::InvalidSpec {
                entity_type,
                violations,
            },
            CoreError::Api { message, status } => Self::ApiError { status, message },
            CoreError::Config { message } => Self::Validation {
                field: "config".into(),
                reason: message,
            },
            CoreError::Internal(message) => Self::Internal(message),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::NoCredentials { profile } => Self::NoCredentials { profile },
            ConfigError::Validation { field, reason } => Self::Validation { field, reason },
            other => Self::Config(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_errors_map_to_exit_codes() {
        let cases = [
            (
                CoreError::AuthenticationFailed {
                    message: "bad uid".into(),
                },
                exit_code::AUTH,
            ),
            (
                CoreError::NotFound {
                    entity_type: "task".into(),
                    identifier: "id 5".into(),
                },
                exit_code::NOT_FOUND,
            ),
            (
                CoreError::Ambiguous {
                    entity_type: "device".into(),
                    identifier: "name \"web\"".into(),
                    ids: vec![1, 2],
                },
                exit_code::AMBIGUOUS,
            ),
            (
                CoreError::ValidationFailed {
                    entity_type: "task".into(),
                    violations: vec!["name: must not be empty".into()],
                },
                exit_code::USAGE,
            ),
            (
                CoreError::Rejected {
                    message: "quota".into(),
                },
                exit_code::REJECTED,
            ),
        ];
        for (core, code) in cases {
            assert_eq!(CliError::from(core).exit_code(), code);
        }
    }

    #[test]
    fn auth_failure_names_the_profile() {
        let err = CliError::from(CoreError::AuthenticationFailed {
            message: "session expired or invalid UID (HTTP 401)".into(),
        })
        .for_profile("work");
        match err {
            CliError::AuthFailed { profile, .. } => assert_eq!(profile, "work"),
            other => panic!("expected AuthFailed, got {other:?}"),
        }

        let untouched = CliError::Timeout {
            reason: "slow".into(),
        }
        .for_profile("work");
        assert_eq!(untouched.exit_code(), exit_code::TIMEOUT);
    }

    #[test]
    fn ambiguous_lists_every_id() {
        let err = CliError::from(CoreError::Ambiguous {
            entity_type: "notification group".into(),
            identifier: "name \"ops\"".into(),
            ids: vec![1, 3],
        });
        assert!(err.to_string().ends_with("1, 3"));
    }
}
