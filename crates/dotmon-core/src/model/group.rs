// ── Notification group spec ──

use serde::{Deserialize, Serialize};

/// Where and how an alert is delivered. Tagged by `type` in JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GroupAddress {
    Email {
        address: String,
        #[serde(default)]
        template_id: i64,
    },
    Phone {
        number: String,
        code: String,
        #[serde(default)]
        template_id: i64,
    },
    Pager {
        number: String,
        code: String,
        message: String,
        #[serde(default)]
        template_id: i64,
    },
    Sms {
        number: String,
        #[serde(default)]
        template_id: i64,
    },
    PagerDuty {
        integration_key: String,
        #[serde(default)]
        template_id: i64,
    },
    Script {
        message: String,
        #[serde(default)]
        template_id: i64,
    },
}

impl GroupAddress {
    /// The API's `Type` value.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Email { .. } => "Email",
            Self::Phone { .. } => "Phone",
            Self::Pager { .. } => "Pager",
            Self::Sms { .. } => "Sms",
            Self::PagerDuty { .. } => "PagerDuty",
            Self::Script { .. } => "Script",
        }
    }

    pub fn template_id(&self) -> i64 {
        match self {
            Self::Email { template_id, .. }
            | Self::Phone { template_id, .. }
            | Self::Pager { template_id, .. }
            | Self::Sms { template_id, .. }
            | Self::PagerDuty { template_id, .. }
            | Self::Script { template_id, .. } => *template_id,
        }
    }
}

/// Declarative description of a notification group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSpec {
    pub name: String,
    /// Schedule during which the group is alerted (0 = always).
    #[serde(default)]
    pub scheduler_id: i64,
    #[serde(default)]
    pub addresses: Vec<GroupAddress>,
}
