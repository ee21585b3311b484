// ── Spec validation ──
//
// Every spec is checked before any request is sent. Checks never stop
// at the first problem; all violations are collected and reported in
// one `CoreError::ValidationFailed`.

use std::net::IpAddr;
use std::str::FromStr;

use strum::IntoEnumIterator;

use dotmon_api::ErrorCode;

use crate::convert::parse_error_code;
use crate::error::CoreError;
use crate::model::{
    DeviceSpec, DnsResolveMode, ErrorType, FilterSpec, GroupAddress, GroupSpec, Param,
    RequestType, SchedulerSpec, TaskSpec, Weekday,
};

const MAX_TEXT_LEN: usize = 255;
const SUPPORTED_PLATFORMS: [i64; 4] = [1, 3, 7, 12];
const FREQUENCIES: [i64; 10] = [60, 180, 300, 600, 900, 1800, 2700, 3600, 7200, 10800];
const MAX_TIME_SHIFT_MIN: i64 = 180;
const MAX_TASK_TYPE_ID: i64 = 20;

/// A spec that can check itself before it is sent.
pub trait Validate {
    /// Entity name used in error messages.
    const ENTITY: &'static str;

    /// Every rule this value breaks, as `field: problem` strings.
    fn violations(&self) -> Vec<String>;

    fn validate(&self) -> Result<(), CoreError> {
        let violations = self.violations();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(CoreError::ValidationFailed {
                entity_type: Self::ENTITY.into(),
                violations,
            })
        }
    }
}

// ── Rule helpers ─────────────────────────────────────────────────────

#[derive(Default)]
struct Checker(Vec<String>);

impl Checker {
    fn fail(&mut self, field: &str, problem: impl std::fmt::Display) {
        self.0.push(format!("{field}: {problem}"));
    }

    fn text(&mut self, field: &str, value: &str) {
        let len = value.chars().count();
        if !(1..=MAX_TEXT_LEN).contains(&len) {
            self.fail(field, format_args!("length must be between 1 and {MAX_TEXT_LEN}, got {len}"));
        }
    }

    fn optional_text(&mut self, field: &str, value: Option<&str>) {
        if let Some(v) = value {
            self.text(field, v);
        }
    }

    fn at_least(&mut self, field: &str, value: i64, min: i64) {
        if value < min {
            self.fail(field, format_args!("must be at least {min}, got {value}"));
        }
    }

    fn non_negative(&mut self, field: &str, value: i64) {
        self.at_least(field, value, 0);
    }

    fn range(&mut self, field: &str, value: i64, min: i64, max: i64) {
        if !(min..=max).contains(&value) {
            self.fail(field, format_args!("must be between {min} and {max}, got {value}"));
        }
    }

    fn one_of<E>(&mut self, field: &str, value: &str)
    where
        E: FromStr + IntoEnumIterator + std::fmt::Display,
    {
        if value.parse::<E>().is_err() {
            let allowed: Vec<String> = E::iter().map(|v| v.to_string()).collect();
            self.fail(
                field,
                format_args!("{value:?} is not one of {}", allowed.join(", ")),
            );
        }
    }

    fn ip(&mut self, field: &str, value: &str) {
        if value.parse::<IpAddr>().is_err() {
            self.fail(field, format_args!("{value:?} is not an IP address"));
        }
    }

    fn digits(&mut self, field: &str, value: &str, len: std::ops::RangeInclusive<usize>) {
        let count = value.chars().count();
        if !len.contains(&count) {
            if len.start() == len.end() {
                self.fail(field, format_args!("must be exactly {} digits", len.start()));
            } else {
                self.fail(
                    field,
                    format_args!("must be {} to {} digits", len.start(), len.end()),
                );
            }
        }
        if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
            self.fail(field, format_args!("{value:?} is not a number"));
        }
    }

    fn params(&mut self, field: &str, params: &[Param]) {
        for (i, p) in params.iter().enumerate() {
            self.text(&format!("{field}[{i}].name"), &p.name);
            self.text(&format!("{field}[{i}].value"), &p.value);
        }
    }

    fn finish(self) -> Vec<String> {
        self.0
    }
}

// ── Task ─────────────────────────────────────────────────────────────

impl Validate for TaskSpec {
    const ENTITY: &'static str = "task";

    fn violations(&self) -> Vec<String> {
        let mut c = Checker::default();
        c.text("name", &self.name);
        c.text("url", &self.url);
        c.non_negative("device_id", self.device_id);
        c.one_of::<RequestType>("request_type", &self.request_type);
        c.range("task_type_id", self.task_type_id, 1, MAX_TASK_TYPE_ID);
        c.non_negative("timeout", self.timeout);
        c.optional_text("keyword1", self.keyword1.as_deref());
        c.optional_text("keyword2", self.keyword2.as_deref());
        c.optional_text("keyword3", self.keyword3.as_deref());
        c.optional_text("username", self.username.as_deref());
        c.non_negative(
            "ssl_expiration_reminder_in_days",
            self.ssl_expiration_reminder_in_days,
        );

        c.params("get_params", &self.get_params);
        c.params("post_params", &self.post_params);
        c.params("header_params", &self.header_params);
        if !self.get_params.is_empty() && !self.post_params.is_empty() {
            c.fail("get_params", "conflicts with post_params; set only one");
        }

        if let Some(mode) = &self.dns_resolve_mode {
            c.one_of::<DnsResolveMode>("dns_resolve_mode", mode);
            if mode.parse::<DnsResolveMode>().ok() == Some(DnsResolveMode::ExternalDnsServer)
                && self.dns_server_ip.is_none()
            {
                c.fail("dns_server_ip", "required when dns_resolve_mode is External DNS Server");
            }
        }
        if let Some(ip) = &self.dns_server_ip {
            c.ip("dns_server_ip", ip);
        }
        for (i, h) in self.custom_dns_hosts.iter().enumerate() {
            c.text(&format!("custom_dns_hosts[{i}].host"), &h.host);
            c.ip(&format!("custom_dns_hosts[{i}].ip_address"), &h.ip_address);
        }
        c.finish()
    }
}

// ── Device ───────────────────────────────────────────────────────────

impl Validate for DeviceSpec {
    const ENTITY: &'static str = "device";

    fn violations(&self) -> Vec<String> {
        let mut c = Checker::default();
        c.text("name", &self.name);
        if !SUPPORTED_PLATFORMS.contains(&self.platform_id) {
            c.fail(
                "platform_id",
                format_args!("must be one of {SUPPORTED_PLATFORMS:?}, got {}", self.platform_id),
            );
        }
        if !FREQUENCIES.contains(&self.frequency) {
            c.fail(
                "frequency",
                format_args!("must be one of {FREQUENCIES:?} seconds, got {}", self.frequency),
            );
        }
        c.non_negative("alert_silence_min", self.alert_silence_min);
        c.non_negative("owner_device_id", self.owner_device_id);
        c.non_negative("filter_id", self.filter_id);
        c.non_negative("scheduler_id", self.scheduler_id);
        for (i, id) in self.locations.iter().enumerate() {
            c.non_negative(&format!("locations[{i}]"), *id);
        }
        for (i, g) in self.notification_groups.iter().enumerate() {
            c.non_negative(&format!("notification_groups[{i}].id"), g.id);
            let shift = g.time_shift_min;
            if !(0..=MAX_TIME_SHIFT_MIN).contains(&shift) || shift % 10 != 0 {
                c.fail(
                    &format!("notification_groups[{i}].time_shift_min"),
                    format_args!(
                        "must be a multiple of 10 between 0 and {MAX_TIME_SHIFT_MIN}, got {shift}"
                    ),
                );
            }
        }
        c.finish()
    }
}

// ── Notification group ───────────────────────────────────────────────

impl Validate for GroupSpec {
    const ENTITY: &'static str = "notification group";

    fn violations(&self) -> Vec<String> {
        let mut c = Checker::default();
        c.text("name", &self.name);
        c.non_negative("scheduler_id", self.scheduler_id);
        for (i, addr) in self.addresses.iter().enumerate() {
            let field = |name: &str| format!("addresses[{i}].{name}");
            c.non_negative(&field("template_id"), addr.template_id());
            match addr {
                GroupAddress::Email { address, .. } => c.text(&field("address"), address),
                GroupAddress::Phone { number, code, .. } => {
                    c.digits(&field("number"), number, 1..=16);
                    c.digits(&field("code"), code, 3..=3);
                }
                GroupAddress::Pager {
                    number,
                    code,
                    message,
                    ..
                } => {
                    c.digits(&field("number"), number, 1..=16);
                    c.digits(&field("code"), code, 3..=3);
                    c.text(&field("message"), message);
                }
                GroupAddress::Sms { number, .. } => c.digits(&field("number"), number, 1..=16),
                GroupAddress::PagerDuty {
                    integration_key, ..
                } => c.text(&field("integration_key"), integration_key),
                GroupAddress::Script { message, .. } => c.text(&field("message"), message),
            }
        }
        c.finish()
    }
}

// ── Scheduler ────────────────────────────────────────────────────────

impl Validate for SchedulerSpec {
    const ENTITY: &'static str = "scheduler";

    fn violations(&self) -> Vec<String> {
        let mut c = Checker::default();
        c.text("name", &self.name);
        c.optional_text("description", self.description.as_deref());
        for (i, w) in self.weekly_intervals.iter().enumerate() {
            let field = |name: &str| format!("weekly_intervals[{i}].{name}");
            if w.days.is_empty() {
                c.fail(&field("days"), "must list at least one day");
            }
            for day in &w.days {
                c.one_of::<Weekday>(&field("days"), day);
            }
            c.range(&field("from_minute"), w.from_minute, 0, 1439);
            c.range(&field("to_minute"), w.to_minute, 1, 1440);
            if w.from_minute >= w.to_minute {
                c.fail(&field("to_minute"), "must be after from_minute");
            }
        }
        for (i, e) in self.excluded_time_intervals.iter().enumerate() {
            if e.from.timestamp() < 0 {
                c.fail(
                    &format!("excluded_time_intervals[{i}].from"),
                    "must not be before 1970-01-01",
                );
            }
            if e.to < e.from {
                c.fail(
                    &format!("excluded_time_intervals[{i}].to"),
                    "must not be before from",
                );
            }
        }
        c.finish()
    }
}

// ── Filter ───────────────────────────────────────────────────────────

/// Check an ignore-errors code list such as `"404;500-504"`.
pub fn error_code_violations(codes: &str) -> Vec<String> {
    let segments: Vec<&str> = codes
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    if segments.is_empty() {
        return vec!["must list at least one code".into()];
    }
    segments
        .into_iter()
        .filter_map(|segment| match parse_error_code(segment) {
            None => Some(format!("{segment:?} is neither a code nor a from-to range")),
            Some(ErrorCode::Range { from, to }) if from > to => {
                Some(format!("range {segment:?} ends before it starts"))
            }
            Some(_) => None,
        })
        .collect()
}

impl Validate for FilterSpec {
    const ENTITY: &'static str = "filter";

    fn violations(&self) -> Vec<String> {
        let mut c = Checker::default();
        c.text("name", &self.name);
        c.optional_text("description", self.description.as_deref());
        c.non_negative("rules.num_minutes", self.rules.num_minutes);
        if let Some(n) = self.rules.num_locations {
            c.at_least("rules.num_locations", n, 1);
        }
        if let Some(n) = self.rules.num_tasks {
            c.at_least("rules.num_tasks", n, 1);
        }
        for (i, item) in self.ignore_errors.iter().enumerate() {
            c.one_of::<ErrorType>(&format!("ignore_errors[{i}].type"), &item.error_type);
            for problem in error_code_violations(&item.codes) {
                c.fail(&format!("ignore_errors[{i}].codes"), problem);
            }
        }
        c.finish()
    }
}
