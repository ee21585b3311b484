// ── Alert filter spec ──

use serde::{Deserialize, Serialize};

/// Conditions that must all hold before an alert is raised.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterRuleSpec {
    /// Minutes the error must persist.
    #[serde(default)]
    pub num_minutes: i64,
    /// Locations that must report the error (at least 1 when set).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_locations: Option<i64>,
    /// Tasks that must fail (at least 1 when set).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_tasks: Option<i64>,
    /// Only alert when the owner device is down too.
    #[serde(default)]
    pub owner_device_down: bool,
}

/// Error codes of one type that never raise an alert.
///
/// `codes` is a semicolon-separated list with `-` for inclusive ranges,
/// e.g. `"404;500-504"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IgnoreErrorsSpec {
    #[serde(rename = "type")]
    pub error_type: String,
    pub codes: String,
}

/// Declarative description of an alert filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub rules: FilterRuleSpec,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ignore_errors: Vec<IgnoreErrorsSpec>,
}
