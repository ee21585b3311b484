// ── Scheduler spec ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const fn yes() -> bool {
    true
}

const fn end_of_day() -> i64 {
    1440
}

/// A repeating weekly window. Minutes are counted from midnight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyIntervalSpec {
    /// Full English day names, e.g. `Monday`.
    pub days: Vec<String>,
    #[serde(default)]
    pub from_minute: i64,
    #[serde(default = "end_of_day")]
    pub to_minute: i64,
    /// Whether monitoring runs (true) or pauses (false) in this window.
    #[serde(default = "yes")]
    pub enabled: bool,
}

/// A one-off window during which monitoring is suspended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExcludedInterval {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

/// Declarative description of a monitoring schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub weekly_intervals: Vec<WeeklyIntervalSpec>,
    #[serde(default)]
    pub excluded_time_intervals: Vec<ExcludedInterval>,
}
