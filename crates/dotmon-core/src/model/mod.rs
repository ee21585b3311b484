// ── Domain model ──
//
// User-facing resource specs. Field names are snake_case and defaults
// are filled in on deserialization, so a resource file only needs the
// fields that differ from the defaults.

pub mod common;
pub mod device;
pub mod filter;
pub mod group;
pub mod location;
pub mod scheduler;
pub mod task;

pub use common::{DnsResolveMode, ErrorType, RequestType, Weekday};
pub use device::{DeviceSpec, NotificationGroupSpec};
pub use filter::{FilterRuleSpec, FilterSpec, IgnoreErrorsSpec};
pub use group::{GroupAddress, GroupSpec};
pub use location::{LocationFilter, LocationSelection, Lookup};
pub use scheduler::{ExcludedInterval, SchedulerSpec, WeeklyIntervalSpec};
pub use task::{DnsHost, Param, TaskSpec};
