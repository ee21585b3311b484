// Dotcom-Monitor wire types
//
// Field names follow the API exactly (a mix of PascalCase and
// Snake_Pascal). Every type derives `Default + PartialEq` so an
// id-only payload can be told apart from a populated one. Fields the
// API treats as optional are skipped when empty, everything else is
// always sent.

use serde::{Deserialize, Serialize};

pub(crate) fn is_zero(v: &i64) -> bool {
    *v == 0
}

/// Entities addressed by a numeric id.
pub trait Identified {
    fn id(&self) -> i64;
    fn set_id(&mut self, id: i64);
}

macro_rules! identified {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Identified for $ty {
                fn id(&self) -> i64 {
                    self.id
                }

                fn set_id(&mut self, id: i64) {
                    self.id = id;
                }
            }
        )+
    };
}

identified!(Task, Device, Group, Scheduler, Filter);

// ── Response blocks ──────────────────────────────────────────────────

/// Generic response to update/delete/login calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseBlock {
    #[serde(rename = "Success", default)]
    pub success: bool,
    #[serde(rename = "Result", default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(
        rename = "ErrorDescription",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub error_description: Vec<String>,
}

/// Response to create calls; `Result` carries the new id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateResponseBlock {
    #[serde(rename = "Success", default)]
    pub success: bool,
    #[serde(rename = "Result", default, skip_serializing_if = "Option::is_none")]
    pub result: Option<i64>,
    #[serde(
        rename = "ErrorDescription",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub error_description: Vec<String>,
}

fn describe(errors: &[String]) -> String {
    if errors.is_empty() {
        "unspecified error".into()
    } else {
        errors.join("; ")
    }
}

impl ResponseBlock {
    pub fn error_message(&self) -> String {
        describe(&self.error_description)
    }
}

impl CreateResponseBlock {
    pub fn error_message(&self) -> String {
        describe(&self.error_description)
    }
}

/// Body of `POST /login`.
#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    #[serde(rename = "UID")]
    pub uid: &'a str,
}

// ── Task ─────────────────────────────────────────────────────────────

/// A name/value pair for GET, POST or header parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskParam {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Value")]
    pub value: String,
}

/// A monitoring task (HTTP(S) check) attached to a device.
///
/// `timeout` is in milliseconds on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
#[serde(default)]
pub struct Task {
    #[serde(rename = "Id", skip_serializing_if = "is_zero")]
    pub id: i64,
    #[serde(rename = "RequestType")]
    pub request_type: String,
    #[serde(rename = "Url")]
    pub url: String,
    #[serde(rename = "Keyword1", skip_serializing_if = "String::is_empty")]
    pub keyword1: String,
    #[serde(rename = "Keyword2", skip_serializing_if = "String::is_empty")]
    pub keyword2: String,
    #[serde(rename = "Keyword3", skip_serializing_if = "String::is_empty")]
    pub keyword3: String,
    #[serde(rename = "UserName", skip_serializing_if = "String::is_empty")]
    pub user_name: String,
    #[serde(rename = "UserPass", skip_serializing_if = "String::is_empty")]
    pub user_pass: String,
    #[serde(rename = "CheckCertificateAuthority")]
    pub check_certificate_authority: bool,
    #[serde(rename = "CheckCertificateCN")]
    pub check_certificate_cn: bool,
    #[serde(rename = "CheckCertificateDate")]
    pub check_certificate_date: bool,
    #[serde(rename = "CheckCertificateRevocation")]
    pub check_certificate_revocation: bool,
    #[serde(rename = "CheckCertificateUsage")]
    pub check_certificate_usage: bool,
    #[serde(rename = "ExpirationReminderInDays", skip_serializing_if = "is_zero")]
    pub expiration_reminder_in_days: i64,
    #[serde(rename = "ClientCertificate", skip_serializing_if = "String::is_empty")]
    pub client_certificate: String,
    #[serde(rename = "FullPageDownload")]
    pub full_page_download: bool,
    #[serde(rename = "Download_Html")]
    pub download_html: bool,
    #[serde(rename = "Download_Frames")]
    pub download_frames: bool,
    #[serde(rename = "Download_StyleSheets")]
    pub download_style_sheets: bool,
    #[serde(rename = "Download_Scripts")]
    pub download_scripts: bool,
    #[serde(rename = "Download_Images")]
    pub download_images: bool,
    #[serde(rename = "Download_Objects")]
    pub download_objects: bool,
    #[serde(rename = "Download_Applets")]
    pub download_applets: bool,
    #[serde(rename = "Download_Additional")]
    pub download_additional: bool,
    #[serde(rename = "GetParams", skip_serializing_if = "Vec::is_empty")]
    pub get_params: Vec<TaskParam>,
    #[serde(rename = "PostParams", skip_serializing_if = "Vec::is_empty")]
    pub post_params: Vec<TaskParam>,
    #[serde(rename = "HeaderParams", skip_serializing_if = "Vec::is_empty")]
    pub header_params: Vec<TaskParam>,
    #[serde(rename = "PrepareScript", skip_serializing_if = "String::is_empty")]
    pub prepare_script: String,
    #[serde(rename = "DNSResolveMode", skip_serializing_if = "String::is_empty")]
    pub dns_resolve_mode: String,
    #[serde(rename = "DNSserverIP", skip_serializing_if = "String::is_empty")]
    pub dns_server_ip: String,
    /// `host=ip;host=ip;`
    #[serde(rename = "CustomDNSHosts", skip_serializing_if = "String::is_empty")]
    pub custom_dns_hosts: String,
    #[serde(rename = "Device_Id")]
    pub device_id: i64,
    #[serde(rename = "Task_Type_Id")]
    pub task_type_id: i64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Timeout", skip_serializing_if = "is_zero")]
    pub timeout: i64,
}

// ── Device ───────────────────────────────────────────────────────────

/// A monitored device: a container of tasks with shared schedule,
/// locations and alerting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Device {
    #[serde(rename = "Id", skip_serializing_if = "is_zero")]
    pub id: i64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Platform_Id")]
    pub platform_id: i64,
    /// Check frequency in seconds.
    #[serde(rename = "Frequency")]
    pub frequency: i64,
    #[serde(rename = "Locations")]
    pub locations: Vec<i64>,
    #[serde(rename = "Avoid_Simultaneous_Checks")]
    pub avoid_simultaneous_checks: bool,
    #[serde(rename = "Alert_Silence_Min")]
    pub alert_silence_min: i64,
    #[serde(rename = "False_Positive_Check")]
    pub false_positive_check: bool,
    #[serde(rename = "Send_Uptime_Alert")]
    pub send_uptime_alert: bool,
    #[serde(rename = "Status_Description")]
    pub status_description: String,
    #[serde(rename = "Postpone")]
    pub postpone: bool,
    #[serde(rename = "Owner_Device_Id")]
    pub owner_device_id: i64,
    #[serde(rename = "Filter_Id")]
    pub filter_id: i64,
    #[serde(rename = "Scheduler_Id")]
    pub scheduler_id: i64,
    #[serde(rename = "Number_Of_Tasks")]
    pub number_of_tasks: i64,
    #[serde(rename = "Package_Id")]
    pub package_id: i64,
    #[serde(rename = "Notifications")]
    pub notifications: Option<DeviceNotifications>,
}

/// Per-device alert delivery settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
#[serde(default)]
pub struct DeviceNotifications {
    #[serde(rename = "E_Mail_Flag")]
    pub email_flag: bool,
    #[serde(rename = "E_Mail_Address", skip_serializing_if = "String::is_empty")]
    pub email_address: String,
    #[serde(rename = "E_Mail_TimeInterval_Min", skip_serializing_if = "is_zero")]
    pub email_time_interval_min: i64,
    #[serde(rename = "WL_Device_Flag")]
    pub wl_device_flag: bool,
    #[serde(
        rename = "WL_Device_Email_Address",
        skip_serializing_if = "String::is_empty"
    )]
    pub wl_device_email_address: String,
    #[serde(rename = "WL_Device_TimeInterval_Min", skip_serializing_if = "is_zero")]
    pub wl_device_time_interval_min: i64,
    #[serde(rename = "Pager_Flag")]
    pub pager_flag: bool,
    #[serde(rename = "Pager_Area_Code", skip_serializing_if = "String::is_empty")]
    pub pager_area_code: String,
    #[serde(rename = "Pager_Phone", skip_serializing_if = "String::is_empty")]
    pub pager_phone: String,
    #[serde(rename = "Pager_Num_Code", skip_serializing_if = "String::is_empty")]
    pub pager_num_code: String,
    #[serde(rename = "Pager_TimeInterval_Min", skip_serializing_if = "is_zero")]
    pub pager_time_interval_min: i64,
    #[serde(rename = "Phone_Flag")]
    pub phone_flag: bool,
    #[serde(rename = "Phone_Area_Code", skip_serializing_if = "String::is_empty")]
    pub phone_area_code: String,
    #[serde(rename = "Phone_Phone", skip_serializing_if = "String::is_empty")]
    pub phone_phone: String,
    #[serde(rename = "Phone_TimeInterval_Min", skip_serializing_if = "is_zero")]
    pub phone_time_interval_min: i64,
    #[serde(rename = "SMS_Flag")]
    pub sms_flag: bool,
    #[serde(rename = "SMS_Phone", skip_serializing_if = "String::is_empty")]
    pub sms_phone: String,
    #[serde(rename = "SMS_TimeInterval_Min", skip_serializing_if = "is_zero")]
    pub sms_time_interval_min: i64,
    #[serde(rename = "Script_Flag")]
    pub script_flag: bool,
    #[serde(
        rename = "Script_Batch_File_Name",
        skip_serializing_if = "String::is_empty"
    )]
    pub script_batch_file_name: String,
    #[serde(rename = "Script_TimeInterval_Min", skip_serializing_if = "is_zero")]
    pub script_time_interval_min: i64,
    #[serde(rename = "SNMP_TimeInterval_Min", skip_serializing_if = "is_zero")]
    pub snmp_time_interval_min: i64,
    #[serde(rename = "Notification_Groups")]
    pub notification_groups: Vec<NotificationGroupRef>,
}

/// A notification group attached to a device, with an escalation delay.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationGroupRef {
    #[serde(rename = "Id")]
    pub id: i64,
    #[serde(rename = "Time_Shift_Min", default)]
    pub time_shift_min: i64,
}

// ── Notification group ───────────────────────────────────────────────

/// A notification (alert) group: a named set of delivery addresses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Group {
    #[serde(rename = "Id", skip_serializing_if = "is_zero")]
    pub id: i64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Scheduler_Id", skip_serializing_if = "is_zero")]
    pub scheduler_id: i64,
    #[serde(rename = "Addresses", skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<Address>,
    #[serde(rename = "Assigned_To", skip_serializing_if = "Vec::is_empty")]
    pub assigned_to: Vec<i64>,
}

/// One delivery address. Which fields are set depends on `kind`:
/// Email → `address`; Phone → `number` + `code`; Pager → `number`,
/// `code`, `message`; Sms → `number`; PagerDuty → `integration_key`;
/// Script → `message`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    #[serde(rename = "Type")]
    pub kind: String,
    #[serde(rename = "Template_Id", skip_serializing_if = "is_zero")]
    pub template_id: i64,
    #[serde(rename = "Address", skip_serializing_if = "String::is_empty")]
    pub address: String,
    #[serde(rename = "Number", skip_serializing_if = "String::is_empty")]
    pub number: String,
    #[serde(rename = "Code", skip_serializing_if = "String::is_empty")]
    pub code: String,
    #[serde(rename = "Message", skip_serializing_if = "String::is_empty")]
    pub message: String,
    #[serde(rename = "IntegrationKey", skip_serializing_if = "String::is_empty")]
    pub integration_key: String,
}

// ── Scheduler ────────────────────────────────────────────────────────

/// A monitoring schedule: weekly active windows plus one-off exclusions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scheduler {
    #[serde(rename = "Id", skip_serializing_if = "is_zero")]
    pub id: i64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Description", skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(rename = "Weekly_Intervals", skip_serializing_if = "Vec::is_empty")]
    pub weekly_intervals: Vec<WeeklyInterval>,
    /// Maintenance windows. The API calls them date-time intervals.
    #[serde(rename = "Date_Time_Intervals", skip_serializing_if = "Vec::is_empty")]
    pub excluded_time_intervals: Vec<DateTimeInterval>,
    #[serde(rename = "Assigned_To", skip_serializing_if = "AssignedTo::is_empty")]
    pub assigned_to: AssignedTo,
}

/// A repeating weekly window, minutes counted from midnight.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeeklyInterval {
    #[serde(rename = "Days", skip_serializing_if = "Vec::is_empty")]
    pub days: Vec<String>,
    #[serde(rename = "From_Min")]
    pub from_minute: i64,
    #[serde(rename = "To_Min")]
    pub to_minute: i64,
    #[serde(rename = "Included")]
    pub enabled: bool,
}

/// A non-repeating window in Unix seconds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateTimeInterval {
    #[serde(rename = "From")]
    pub from: i64,
    #[serde(rename = "To")]
    pub to: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssignedTo {
    #[serde(rename = "Devices", skip_serializing_if = "Vec::is_empty")]
    pub devices: Vec<i64>,
    #[serde(rename = "Notification_Groups", skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<i64>,
}

impl AssignedTo {
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty() && self.groups.is_empty()
    }
}

// ── Filter ───────────────────────────────────────────────────────────

/// An alert filter: conditions that must hold before an alert is sent,
/// plus error codes to ignore entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Filter {
    #[serde(rename = "Id", skip_serializing_if = "is_zero")]
    pub id: i64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Description", skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(rename = "Rules")]
    pub rules: FilterRule,
    #[serde(rename = "Items", skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<IgnoredErrors>,
    #[serde(rename = "Assigned_To", skip_serializing_if = "Vec::is_empty")]
    pub assigned_to: Vec<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterRule {
    #[serde(rename = "Time_Min")]
    pub time_min: i64,
    #[serde(rename = "Number_Of_Locations")]
    pub number_of_locations: i64,
    #[serde(rename = "Number_Of_Tasks")]
    pub number_of_tasks: i64,
    #[serde(rename = "Owner_Device")]
    pub owner_device: bool,
}

/// Error codes of one error type that never raise an alert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IgnoredErrors {
    #[serde(rename = "Error_Type")]
    pub error_type: String,
    #[serde(rename = "Error_Code_To_Ignore")]
    pub codes: Vec<ErrorCode>,
}

/// Either a single code or an inclusive range `{"From": a, "To": b}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorCode {
    Single(i64),
    Range {
        #[serde(rename = "From")]
        from: i64,
        #[serde(rename = "To")]
        to: i64,
    },
}

// ── Locations & platforms ────────────────────────────────────────────

/// A monitoring agent location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    #[serde(rename = "Id")]
    pub id: i64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Available")]
    pub available: bool,
    #[serde(rename = "IsDeleted")]
    pub is_deleted: bool,
    #[serde(rename = "IsPrivate")]
    pub is_private: bool,
}

/// A monitoring platform (ServerView, MetricsView, BrowserView, WebView...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Platform {
    #[serde(rename = "Id")]
    pub id: i64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Packages")]
    pub packages: Vec<Package>,
    #[serde(rename = "Available")]
    pub available: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Package {
    #[serde(rename = "Package_Id")]
    pub package_id: i64,
    #[serde(rename = "Package_Name")]
    pub package_name: String,
    #[serde(rename = "Platform_Id")]
    pub platform_id: i64,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn filter_codes_accept_singles_and_ranges() {
        let filter: Filter = serde_json::from_value(json!({
            "Id": 9,
            "Name": "quiet",
            "Rules": { "Time_Min": 5, "Number_Of_Locations": 2, "Number_Of_Tasks": 1, "Owner_Device": false },
            "Items": [{ "Error_Type": "http", "Error_Code_To_Ignore": [404, { "From": 500, "To": 504 }] }]
        }))
        .unwrap();

        assert_eq!(
            filter.items[0].codes,
            vec![ErrorCode::Single(404), ErrorCode::Range { from: 500, to: 504 }]
        );
        assert_eq!(filter.rules.number_of_locations, 2);
    }

    #[test]
    fn optional_task_fields_are_omitted() {
        let task = Task {
            name: "home".into(),
            url: "https://example.com".into(),
            request_type: "GET".into(),
            device_id: 3,
            task_type_id: 2,
            ..Task::default()
        };
        let value = serde_json::to_value(&task).unwrap();
        let obj = value.as_object().unwrap();

        assert!(!obj.contains_key("Id"));
        assert!(!obj.contains_key("Keyword1"));
        assert!(!obj.contains_key("Timeout"));
        assert!(!obj.contains_key("GetParams"));
        assert_eq!(obj["Device_Id"], json!(3));
        assert_eq!(obj["CheckCertificateCN"], json!(false));
    }

    #[test]
    fn scheduler_exclusions_use_date_time_intervals_key() {
        let scheduler = Scheduler {
            name: "nightly".into(),
            excluded_time_intervals: vec![DateTimeInterval { from: 10, to: 20 }],
            ..Scheduler::default()
        };
        let value = serde_json::to_value(&scheduler).unwrap();
        assert_eq!(
            value["Date_Time_Intervals"],
            json!([{ "From": 10, "To": 20 }])
        );
        assert!(value.get("Assigned_To").is_none());
    }

    #[test]
    fn error_message_joins_descriptions() {
        let block = ResponseBlock {
            success: false,
            result: None,
            error_description: vec!["a".into(), "b".into()],
        };
        assert_eq!(block.error_message(), "a; b");
        assert_eq!(ResponseBlock::default().error_message(), "unspecified error");
    }
}
