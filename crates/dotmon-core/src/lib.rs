// dotmon-core: Resource specs, validation and lifecycle on top of dotmon-api.
//
// Consumers describe resources with the `*Spec` types and drive them
// through `Monitor`: create, read, update, delete, existence checks and
// lookups, all serialized behind one process-wide lock.

pub mod config;
pub mod convert;
pub mod error;
pub mod lookup;
pub mod model;
pub mod monitor;
pub mod resource;
pub mod validate;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{MonitorConfig, TlsVerification};
pub use error::CoreError;
pub use lookup::{RESTRICTIVE_LOCATION_IDS, remove_restrictive};
pub use monitor::Monitor;
pub use resource::Resource;
pub use validate::Validate;

pub use model::{
    DeviceSpec, DnsHost, DnsResolveMode, ErrorType, ExcludedInterval, FilterRuleSpec, FilterSpec,
    GroupAddress, GroupSpec, IgnoreErrorsSpec, LocationFilter, LocationSelection, Lookup,
    NotificationGroupSpec, Param, RequestType, SchedulerSpec, TaskSpec, WeeklyIntervalSpec,
    Weekday,
};

// API types that appear in core signatures.
pub use dotmon_api::{Location, Package, Platform};
