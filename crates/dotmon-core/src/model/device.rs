// ── Device spec ──

use serde::{Deserialize, Serialize};

const fn yes() -> bool {
    true
}

/// A notification group alerted for a device, after an escalation delay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationGroupSpec {
    pub id: i64,
    /// Minutes to wait before alerting this group (0 = immediately).
    #[serde(default)]
    pub time_shift_min: i64,
}

/// Declarative description of a monitored device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceSpec {
    pub name: String,
    /// 1 = ServerView, 3 = MetricsView, 7 = BrowserView, 12 = WebView.
    #[serde(default = "DeviceSpec::default_platform_id")]
    pub platform_id: i64,
    /// Check frequency in seconds.
    #[serde(default = "DeviceSpec::default_frequency")]
    pub frequency: i64,
    #[serde(default)]
    pub locations: Vec<i64>,
    #[serde(default)]
    pub avoid_simultaneous_checks: bool,
    #[serde(default)]
    pub alert_silence_min: i64,
    #[serde(default = "yes")]
    pub false_positive_check: bool,
    #[serde(default = "yes")]
    pub send_uptime_alert: bool,
    #[serde(default)]
    pub postpone: bool,
    #[serde(default)]
    pub owner_device_id: i64,
    #[serde(default)]
    pub filter_id: i64,
    #[serde(default)]
    pub scheduler_id: i64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notification_groups: Vec<NotificationGroupSpec>,
}

impl DeviceSpec {
    /// ServerView.
    pub const DEFAULT_PLATFORM_ID: i64 = 1;
    pub const DEFAULT_FREQUENCY: i64 = 300;

    const fn default_platform_id() -> i64 {
        Self::DEFAULT_PLATFORM_ID
    }

    const fn default_frequency() -> i64 {
        Self::DEFAULT_FREQUENCY
    }

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            platform_id: Self::DEFAULT_PLATFORM_ID,
            frequency: Self::DEFAULT_FREQUENCY,
            locations: Vec::new(),
            avoid_simultaneous_checks: false,
            alert_silence_min: 0,
            false_positive_check: true,
            send_uptime_alert: true,
            postpone: false,
            owner_device_id: 0,
            filter_id: 0,
            scheduler_id: 0,
            notification_groups: Vec::new(),
        }
    }
}
