// ── Shared vocabulary ──
//
// String-backed enums the API accepts in free-text fields. Specs keep
// the raw strings so validation can report every bad value at once;
// these enums are how those strings get checked and normalized.

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// HTTP method of a monitoring task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum RequestType {
    Get,
    Post,
    Head,
    Put,
    Delete,
    Options,
    Trace,
    Patch,
}

/// How the monitoring agent resolves the task's host name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(ascii_case_insensitive)]
pub enum DnsResolveMode {
    #[strum(serialize = "Device Cached")]
    DeviceCached,
    #[strum(serialize = "Non Cached")]
    NonCached,
    #[strum(serialize = "TTL Cached")]
    TtlCached,
    #[strum(serialize = "External DNS Server")]
    ExternalDnsServer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(ascii_case_insensitive)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

/// Error category an alert filter can ignore. Sent lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ErrorType {
    Validation,
    Runtime,
    CustomScript,
    Certificate,
    Cryptographic,
    Tcp,
    Dns,
    Udp,
    Http,
    Ftp,
    Sftp,
    Smtp,
    Pop3,
    Imap,
    Icmp,
    IcmpV6,
    DnsBL,
    Media,
    Sip,
}

/// Normalize a case-insensitive enum string to its canonical spelling,
/// leaving unknown values untouched for validation to report.
pub(crate) fn canonical<E>(raw: &str) -> String
where
    E: std::str::FromStr + Into<&'static str>,
{
    raw.parse::<E>()
        .map_or_else(|_| raw.to_owned(), |v| Into::<&'static str>::into(v).to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_type_is_case_insensitive() {
        assert_eq!("patch".parse::<RequestType>().ok(), Some(RequestType::Patch));
        assert_eq!(RequestType::Options.to_string(), "OPTIONS");
    }

    #[test]
    fn dns_modes_keep_their_spaces() {
        assert_eq!(
            "external dns server".parse::<DnsResolveMode>().ok(),
            Some(DnsResolveMode::ExternalDnsServer)
        );
        assert_eq!(DnsResolveMode::TtlCached.to_string(), "TTL Cached");
    }

    #[test]
    fn error_types_render_lowercase() {
        assert_eq!("CustomScript".parse::<ErrorType>().ok(), Some(ErrorType::CustomScript));
        assert_eq!(ErrorType::DnsBL.to_string(), "dnsbl");
        assert_eq!(ErrorType::IcmpV6.to_string(), "icmpv6");
    }

    #[test]
    fn canonical_fixes_case_and_keeps_unknowns() {
        assert_eq!(canonical::<Weekday>("monday"), "Monday");
        assert_eq!(canonical::<RequestType>("get"), "GET");
        assert_eq!(canonical::<Weekday>("Funday"), "Funday");
    }
}
