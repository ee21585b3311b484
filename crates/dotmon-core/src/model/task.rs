// ── Task spec ──

use serde::{Deserialize, Serialize};

const fn yes() -> bool {
    true
}

/// A name/value request parameter or header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    pub name: String,
    pub value: String,
}

/// A static host entry the agent uses instead of DNS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsHost {
    pub host: String,
    pub ip_address: String,
}

/// Declarative description of an HTTP(S) monitoring task.
///
/// `device_id` cannot change once the task exists; the API refuses to
/// move tasks between devices. `timeout` is in seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct TaskSpec {
    pub name: String,
    pub url: String,
    pub device_id: i64,
    #[serde(default = "TaskSpec::default_request_type")]
    pub request_type: String,
    #[serde(default = "TaskSpec::default_task_type_id")]
    pub task_type_id: i64,
    #[serde(default = "TaskSpec::default_timeout")]
    pub timeout: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword3: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub userpass: Option<String>,

    #[serde(default)]
    pub full_page_download: bool,
    #[serde(default)]
    pub download_html: bool,
    #[serde(default)]
    pub download_frames: bool,
    #[serde(default)]
    pub download_style_sheets: bool,
    #[serde(default)]
    pub download_scripts: bool,
    #[serde(default)]
    pub download_images: bool,
    #[serde(default)]
    pub download_objects: bool,
    #[serde(default)]
    pub download_applets: bool,
    #[serde(default)]
    pub download_additional: bool,

    #[serde(default = "yes")]
    pub ssl_check_certificate_authority: bool,
    #[serde(default = "yes")]
    pub ssl_check_certificate_cn: bool,
    #[serde(default = "yes")]
    pub ssl_check_certificate_date: bool,
    #[serde(default = "yes")]
    pub ssl_check_certificate_revocation: bool,
    #[serde(default = "yes")]
    pub ssl_check_certificate_usage: bool,
    #[serde(default)]
    pub ssl_expiration_reminder_in_days: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssl_client_certificate: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub get_params: Vec<Param>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub post_params: Vec<Param>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub header_params: Vec<Param>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prepare_script: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns_resolve_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns_server_ip: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_dns_hosts: Vec<DnsHost>,
}

impl TaskSpec {
    /// Seconds the agent waits for a response.
    pub const DEFAULT_TIMEOUT: i64 = 120;
    /// HTTPS check.
    pub const DEFAULT_TASK_TYPE_ID: i64 = 2;

    fn default_request_type() -> String {
        "GET".into()
    }

    const fn default_task_type_id() -> i64 {
        Self::DEFAULT_TASK_TYPE_ID
    }

    const fn default_timeout() -> i64 {
        Self::DEFAULT_TIMEOUT
    }

    /// A `GET` task with every other setting at its default.
    pub fn new(device_id: i64, name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            device_id,
            request_type: Self::default_request_type(),
            task_type_id: Self::DEFAULT_TASK_TYPE_ID,
            timeout: Self::DEFAULT_TIMEOUT,
            keyword1: None,
            keyword2: None,
            keyword3: None,
            username: None,
            userpass: None,
            full_page_download: false,
            download_html: false,
            download_frames: false,
            download_style_sheets: false,
            download_scripts: false,
            download_images: false,
            download_objects: false,
            download_applets: false,
            download_additional: false,
            ssl_check_certificate_authority: true,
            ssl_check_certificate_cn: true,
            ssl_check_certificate_date: true,
            ssl_check_certificate_revocation: true,
            ssl_check_certificate_usage: true,
            ssl_expiration_reminder_in_days: 0,
            ssl_client_certificate: None,
            get_params: Vec::new(),
            post_params: Vec::new(),
            header_params: Vec::new(),
            prepare_script: None,
            dns_resolve_mode: None,
            dns_server_ip: None,
            custom_dns_hosts: Vec::new(),
        }
    }
}
