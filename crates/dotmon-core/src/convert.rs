// ── Spec ↔ wire conversions ──
//
// Bridges user-facing specs and the raw `dotmon_api` types. Outbound
// conversions normalize case-insensitive strings and apply unit changes
// (seconds → milliseconds, timestamps → Unix seconds); inbound ones undo
// them and turn the API's empty strings into `None`.

use chrono::DateTime;
use tracing::warn;

use dotmon_api::{
    Address, DateTimeInterval, Device, DeviceNotifications, ErrorCode, Filter, FilterRule, Group,
    IgnoredErrors, NotificationGroupRef, Scheduler, Task, TaskParam, WeeklyInterval,
};

use crate::model::common::{DnsResolveMode, RequestType, Weekday, canonical};
use crate::model::{
    DeviceSpec, DnsHost, ExcludedInterval, FilterRuleSpec, FilterSpec, GroupAddress, GroupSpec,
    IgnoreErrorsSpec, NotificationGroupSpec, Param, SchedulerSpec, TaskSpec, WeeklyIntervalSpec,
};

const CODE_SEPARATOR: char = ';';
const RANGE_SEPARATOR: char = '-';

// ── Helpers ────────────────────────────────────────────────────────

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}

fn param_to_wire(p: &Param) -> TaskParam {
    TaskParam {
        name: p.name.clone(),
        value: p.value.clone(),
    }
}

fn param_from_wire(p: TaskParam) -> Param {
    Param {
        name: p.name,
        value: p.value,
    }
}

/// Seconds → milliseconds. Zero stays zero so the API applies its default.
pub fn timeout_to_wire(seconds: i64) -> i64 {
    seconds.saturating_mul(1000)
}

pub fn timeout_from_wire(millis: i64) -> i64 {
    millis / 1000
}

/// Encode custom DNS hosts as `host=ip;host=ip;`.
pub fn encode_dns_hosts(hosts: &[DnsHost]) -> String {
    hosts
        .iter()
        .map(|h| format!("{}={};", h.host, h.ip_address))
        .collect()
}

pub fn decode_dns_hosts(raw: &str) -> Vec<DnsHost> {
    raw.split(';')
        .filter_map(|entry| {
            let (host, ip) = entry.trim().split_once('=')?;
            Some(DnsHost {
                host: host.trim().to_owned(),
                ip_address: ip.trim().to_owned(),
            })
        })
        .collect()
}

/// Parse one segment of an ignore-errors list: `404` or `500-504`.
pub(crate) fn parse_error_code(segment: &str) -> Option<ErrorCode> {
    let segment = segment.trim();
    if let Ok(code) = segment.parse() {
        return Some(ErrorCode::Single(code));
    }
    let (from, to) = segment.split_once(RANGE_SEPARATOR)?;
    Some(ErrorCode::Range {
        from: from.trim().parse().ok()?,
        to: to.trim().parse().ok()?,
    })
}

/// Parse `"1;2;5-10"` into wire codes, skipping unreadable segments.
pub fn parse_error_codes(codes: &str) -> Vec<ErrorCode> {
    codes
        .split(CODE_SEPARATOR)
        .filter(|s| !s.trim().is_empty())
        .filter_map(parse_error_code)
        .collect()
}

pub fn format_error_codes(codes: &[ErrorCode]) -> String {
    codes
        .iter()
        .map(|c| match c {
            ErrorCode::Single(code) => code.to_string(),
            ErrorCode::Range { from, to } => format!("{from}{RANGE_SEPARATOR}{to}"),
        })
        .collect::<Vec<_>>()
        .join(&CODE_SEPARATOR.to_string())
}

// ── Task ───────────────────────────────────────────────────────────

impl From<&TaskSpec> for Task {
    fn from(spec: &TaskSpec) -> Self {
        Task {
            id: 0,
            request_type: canonical::<RequestType>(&spec.request_type),
            url: spec.url.clone(),
            keyword1: spec.keyword1.clone().unwrap_or_default(),
            keyword2: spec.keyword2.clone().unwrap_or_default(),
            keyword3: spec.keyword3.clone().unwrap_or_default(),
            user_name: spec.username.clone().unwrap_or_default(),
            user_pass: spec.userpass.clone().unwrap_or_default(),
            check_certificate_authority: spec.ssl_check_certificate_authority,
            check_certificate_cn: spec.ssl_check_certificate_cn,
            check_certificate_date: spec.ssl_check_certificate_date,
            check_certificate_revocation: spec.ssl_check_certificate_revocation,
            check_certificate_usage: spec.ssl_check_certificate_usage,
            expiration_reminder_in_days: spec.ssl_expiration_reminder_in_days,
            client_certificate: spec.ssl_client_certificate.clone().unwrap_or_default(),
            full_page_download: spec.full_page_download,
            download_html: spec.download_html,
            download_frames: spec.download_frames,
            download_style_sheets: spec.download_style_sheets,
            download_scripts: spec.download_scripts,
            download_images: spec.download_images,
            download_objects: spec.download_objects,
            download_applets: spec.download_applets,
            download_additional: spec.download_additional,
            get_params: spec.get_params.iter().map(param_to_wire).collect(),
            post_params: spec.post_params.iter().map(param_to_wire).collect(),
            header_params: spec.header_params.iter().map(param_to_wire).collect(),
            prepare_script: spec.prepare_script.clone().unwrap_or_default(),
            dns_resolve_mode: spec
                .dns_resolve_mode
                .as_deref()
                .map(canonical::<DnsResolveMode>)
                .unwrap_or_default(),
            dns_server_ip: spec.dns_server_ip.clone().unwrap_or_default(),
            custom_dns_hosts: encode_dns_hosts(&spec.custom_dns_hosts),
            device_id: spec.device_id,
            task_type_id: spec.task_type_id,
            name: spec.name.clone(),
            timeout: timeout_to_wire(spec.timeout),
        }
    }
}

impl From<Task> for TaskSpec {
    fn from(task: Task) -> Self {
        TaskSpec {
            name: task.name,
            url: task.url,
            device_id: task.device_id,
            request_type: task.request_type,
            task_type_id: task.task_type_id,
            timeout: timeout_from_wire(task.timeout),
            keyword1: non_empty(task.keyword1),
            keyword2: non_empty(task.keyword2),
            keyword3: non_empty(task.keyword3),
            username: non_empty(task.user_name),
            userpass: non_empty(task.user_pass),
            full_page_download: task.full_page_download,
            download_html: task.download_html,
            download_frames: task.download_frames,
            download_style_sheets: task.download_style_sheets,
            download_scripts: task.download_scripts,
            download_images: task.download_images,
            download_objects: task.download_objects,
            download_applets: task.download_applets,
            download_additional: task.download_additional,
            ssl_check_certificate_authority: task.check_certificate_authority,
            ssl_check_certificate_cn: task.check_certificate_cn,
            ssl_check_certificate_date: task.check_certificate_date,
            ssl_check_certificate_revocation: task.check_certificate_revocation,
            ssl_check_certificate_usage: task.check_certificate_usage,
            ssl_expiration_reminder_in_days: task.expiration_reminder_in_days,
            ssl_client_certificate: non_empty(task.client_certificate),
            get_params: task.get_params.into_iter().map(param_from_wire).collect(),
            post_params: task.post_params.into_iter().map(param_from_wire).collect(),
            header_params: task.header_params.into_iter().map(param_from_wire).collect(),
            prepare_script: non_empty(task.prepare_script),
            dns_resolve_mode: non_empty(task.dns_resolve_mode),
            dns_server_ip: non_empty(task.dns_server_ip),
            custom_dns_hosts: decode_dns_hosts(&task.custom_dns_hosts),
        }
    }
}

// ── Device ─────────────────────────────────────────────────────────

impl From<&DeviceSpec> for Device {
    fn from(spec: &DeviceSpec) -> Self {
        Device {
            id: 0,
            name: spec.name.clone(),
            platform_id: spec.platform_id,
            frequency: spec.frequency,
            locations: spec.locations.clone(),
            avoid_simultaneous_checks: spec.avoid_simultaneous_checks,
            alert_silence_min: spec.alert_silence_min,
            false_positive_check: spec.false_positive_check,
            send_uptime_alert: spec.send_uptime_alert,
            postpone: spec.postpone,
            owner_device_id: spec.owner_device_id,
            filter_id: spec.filter_id,
            scheduler_id: spec.scheduler_id,
            notifications: Some(DeviceNotifications {
                notification_groups: spec
                    .notification_groups
                    .iter()
                    .map(|g| NotificationGroupRef {
                        id: g.id,
                        time_shift_min: g.time_shift_min,
                    })
                    .collect(),
                ..DeviceNotifications::default()
            }),
            ..Device::default()
        }
    }
}

impl From<Device> for DeviceSpec {
    fn from(device: Device) -> Self {
        DeviceSpec {
            name: device.name,
            platform_id: device.platform_id,
            frequency: device.frequency,
            locations: device.locations,
            avoid_simultaneous_checks: device.avoid_simultaneous_checks,
            alert_silence_min: device.alert_silence_min,
            false_positive_check: device.false_positive_check,
            send_uptime_alert: device.send_uptime_alert,
            postpone: device.postpone,
            owner_device_id: device.owner_device_id,
            filter_id: device.filter_id,
            scheduler_id: device.scheduler_id,
            notification_groups: device
                .notifications
                .map(|n| n.notification_groups)
                .unwrap_or_default()
                .into_iter()
                .map(|g| NotificationGroupSpec {
                    id: g.id,
                    time_shift_min: g.time_shift_min,
                })
                .collect(),
        }
    }
}

// ── Notification group ─────────────────────────────────────────────

impl From<&GroupAddress> for Address {
    fn from(addr: &GroupAddress) -> Self {
        let mut out = Address {
            kind: addr.kind().to_owned(),
            template_id: addr.template_id(),
            ..Address::default()
        };
        match addr {
            GroupAddress::Email { address, .. } => out.address.clone_from(address),
            GroupAddress::Phone { number, code, .. } => {
                out.number.clone_from(number);
                out.code.clone_from(code);
            }
            GroupAddress::Pager {
                number,
                code,
                message,
                ..
            } => {
                out.number.clone_from(number);
                out.code.clone_from(code);
                out.message.clone_from(message);
            }
            GroupAddress::Sms { number, .. } => out.number.clone_from(number),
            GroupAddress::PagerDuty {
                integration_key, ..
            } => out.integration_key.clone_from(integration_key),
            GroupAddress::Script { message, .. } => out.message.clone_from(message),
        }
        out
    }
}

fn address_from_wire(addr: Address) -> Option<GroupAddress> {
    let template_id = addr.template_id;
    let converted = match addr.kind.to_ascii_lowercase().as_str() {
        "email" => GroupAddress::Email {
            address: addr.address,
            template_id,
        },
        "phone" => GroupAddress::Phone {
            number: addr.number,
            code: addr.code,
            template_id,
        },
        "pager" => GroupAddress::Pager {
            number: addr.number,
            code: addr.code,
            message: addr.message,
            template_id,
        },
        "sms" => GroupAddress::Sms {
            number: addr.number,
            template_id,
        },
        "pagerduty" => GroupAddress::PagerDuty {
            integration_key: addr.integration_key,
            template_id,
        },
        "script" => GroupAddress::Script {
            message: addr.message,
            template_id,
        },
        other => {
            warn!(kind = other, "skipping notification address of unknown type");
            return None;
        }
    };
    Some(converted)
}

impl From<&GroupSpec> for Group {
    fn from(spec: &GroupSpec) -> Self {
        Group {
            id: 0,
            name: spec.name.clone(),
            scheduler_id: spec.scheduler_id,
            addresses: spec.addresses.iter().map(Address::from).collect(),
            assigned_to: Vec::new(),
        }
    }
}

impl From<Group> for GroupSpec {
    fn from(group: Group) -> Self {
        GroupSpec {
            name: group.name,
            scheduler_id: group.scheduler_id,
            addresses: group
                .addresses
                .into_iter()
                .filter_map(address_from_wire)
                .collect(),
        }
    }
}

// ── Scheduler ──────────────────────────────────────────────────────

impl From<&SchedulerSpec> for Scheduler {
    fn from(spec: &SchedulerSpec) -> Self {
        Scheduler {
            id: 0,
            name: spec.name.clone(),
            description: spec.description.clone().unwrap_or_default(),
            weekly_intervals: spec
                .weekly_intervals
                .iter()
                .map(|w| WeeklyInterval {
                    days: w.days.iter().map(|d| canonical::<Weekday>(d)).collect(),
                    from_minute: w.from_minute,
                    to_minute: w.to_minute,
                    enabled: w.enabled,
                })
                .collect(),
            excluded_time_intervals: spec
                .excluded_time_intervals
                .iter()
                .map(|e| DateTimeInterval {
                    from: e.from.timestamp(),
                    to: e.to.timestamp(),
                })
                .collect(),
            ..Scheduler::default()
        }
    }
}

impl From<Scheduler> for SchedulerSpec {
    fn from(scheduler: Scheduler) -> Self {
        SchedulerSpec {
            name: scheduler.name,
            description: non_empty(scheduler.description),
            weekly_intervals: scheduler
                .weekly_intervals
                .into_iter()
                .map(|w| WeeklyIntervalSpec {
                    days: w.days,
                    from_minute: w.from_minute,
                    to_minute: w.to_minute,
                    enabled: w.enabled,
                })
                .collect(),
            excluded_time_intervals: scheduler
                .excluded_time_intervals
                .into_iter()
                .filter_map(|e| {
                    Some(ExcludedInterval {
                        from: DateTime::from_timestamp(e.from, 0)?,
                        to: DateTime::from_timestamp(e.to, 0)?,
                    })
                })
                .collect(),
        }
    }
}

// ── Filter ─────────────────────────────────────────────────────────

impl From<&FilterSpec> for Filter {
    fn from(spec: &FilterSpec) -> Self {
        Filter {
            id: 0,
            name: spec.name.clone(),
            description: spec.description.clone().unwrap_or_default(),
            rules: FilterRule {
                time_min: spec.rules.num_minutes,
                number_of_locations: spec.rules.num_locations.unwrap_or_default(),
                number_of_tasks: spec.rules.num_tasks.unwrap_or_default(),
                owner_device: spec.rules.owner_device_down,
            },
            items: spec
                .ignore_errors
                .iter()
                .map(|i| IgnoredErrors {
                    error_type: i.error_type.to_lowercase(),
                    codes: parse_error_codes(&i.codes),
                })
                .collect(),
            assigned_to: Vec::new(),
        }
    }
}

impl From<Filter> for FilterSpec {
    fn from(filter: Filter) -> Self {
        let positive = |n: i64| (n > 0).then_some(n);
        FilterSpec {
            name: filter.name,
            description: non_empty(filter.description),
            rules: FilterRuleSpec {
                num_minutes: filter.rules.time_min,
                num_locations: positive(filter.rules.number_of_locations),
                num_tasks: positive(filter.rules.number_of_tasks),
                owner_device_down: filter.rules.owner_device,
            },
            ignore_errors: filter
                .items
                .into_iter()
                .map(|i| IgnoreErrorsSpec {
                    error_type: i.error_type.to_lowercase(),
                    codes: format_error_codes(&i.codes),
                })
                .collect(),
        }
    }
}
