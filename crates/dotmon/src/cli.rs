//! Clap derive structures for the `dotmon` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use dotmon_core::{LocationFilter, LocationSelection, Lookup};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// dotmon -- manage Dotcom-Monitor resources from the command line
#[derive(Debug, Parser)]
#[command(
    name = "dotmon",
    version,
    about = "Manage Dotcom-Monitor tasks, devices and alerting from the command line",
    long_about = "Declarative management of Dotcom-Monitor configuration.\n\n\
        Every resource is described by a JSON or YAML file and driven\n\
        through create, read, update, delete and existence checks.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Account profile to use
    #[arg(long, short = 'p', env = "DOTMON_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Account UID (overrides profile and keyring)
    #[arg(long, env = "DOTCOM_MONITOR_UID", global = true, hide_env_values = true)]
    pub uid: Option<String>,

    /// API base URL (overrides profile)
    #[arg(long, env = "DOTMON_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "DOTMON_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Skip TLS certificate verification
    #[arg(long, short = 'k', env = "DOTMON_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds (overrides profile)
    #[arg(long, env = "DOTMON_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output Enum ──────────────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage monitoring tasks (HTTP/S checks)
    #[command(alias = "t")]
    Tasks(TasksArgs),

    /// Manage monitored devices
    #[command(alias = "dev", alias = "d")]
    Devices(DevicesArgs),

    /// Manage notification groups
    #[command(alias = "g")]
    Groups(GroupsArgs),

    /// Manage schedulers (alerting windows)
    Schedulers(SchedulersArgs),

    /// Manage alert filters
    Filters(FiltersArgs),

    /// Look up monitoring locations
    #[command(alias = "loc")]
    Locations(LocationsArgs),

    /// View monitoring platforms
    Platforms(PlatformsArgs),

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Shared Arguments ─────────────────────────────────────────────────

/// Spec file for create/update (JSON, or YAML by extension).
#[derive(Debug, Args)]
pub struct SpecFileArgs {
    /// Path to the resource spec
    #[arg(long, short = 'F', value_name = "FILE")]
    pub from_file: PathBuf,
}

/// Resource selected by id or by exact name.
#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct LookupArgs {
    /// Numeric id
    #[arg(long)]
    pub id: Option<i64>,

    /// Exact name
    #[arg(long)]
    pub name: Option<String>,
}

impl LookupArgs {
    pub fn lookup(&self) -> Lookup {
        match (&self.name, self.id) {
            (Some(name), _) => Lookup::Name(name.clone()),
            (None, id) => Lookup::Id(id.unwrap_or_default()),
        }
    }
}

/// Operations shared by every managed resource kind.
#[derive(Debug, Subcommand)]
pub enum LifecycleCommand {
    /// Show a resource
    Get {
        /// Resource id
        id: i64,
    },

    /// Report whether a resource exists
    Exists {
        /// Resource id
        id: i64,
    },

    /// Create a resource from a JSON or YAML file
    Create(SpecFileArgs),

    /// Replace a resource's settings from a JSON or YAML file
    Update {
        /// Resource id
        id: i64,

        #[command(flatten)]
        spec: SpecFileArgs,
    },

    /// Delete a resource
    #[command(alias = "rm")]
    Delete {
        /// Resource id
        id: i64,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  TASKS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct TasksArgs {
    #[command(subcommand)]
    pub command: TasksCommand,
}

#[derive(Debug, Subcommand)]
pub enum TasksCommand {
    #[command(flatten)]
    Lifecycle(LifecycleCommand),

    /// Find a task by name on a device
    Find {
        /// Owning device id
        #[arg(long)]
        device_id: i64,

        /// Exact task name
        #[arg(long)]
        name: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  DEVICES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct DevicesArgs {
    #[command(subcommand)]
    pub command: DevicesCommand,
}

#[derive(Debug, Subcommand)]
pub enum DevicesCommand {
    #[command(flatten)]
    Lifecycle(LifecycleCommand),

    /// Find a device by name on a platform
    Find {
        /// Platform id (1 = ServerView)
        #[arg(long, default_value = "1")]
        platform_id: i64,

        /// Exact device name
        #[arg(long)]
        name: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  GROUPS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct GroupsArgs {
    #[command(subcommand)]
    pub command: GroupsCommand,
}

#[derive(Debug, Subcommand)]
pub enum GroupsCommand {
    #[command(flatten)]
    Lifecycle(LifecycleCommand),

    /// Find a notification group by name
    Find {
        /// Exact group name
        #[arg(long)]
        name: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  SCHEDULERS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct SchedulersArgs {
    #[command(subcommand)]
    pub command: SchedulersCommand,
}

#[derive(Debug, Subcommand)]
pub enum SchedulersCommand {
    #[command(flatten)]
    Lifecycle(LifecycleCommand),

    /// Find a scheduler by id or name
    Find(LookupArgs),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  FILTERS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct FiltersArgs {
    #[command(subcommand)]
    pub command: FiltersCommand,
}

#[derive(Debug, Subcommand)]
pub enum FiltersCommand {
    #[command(flatten)]
    Lifecycle(LifecycleCommand),

    /// Find a filter by id or name
    Find(LookupArgs),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  LOCATIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct LocationsArgs {
    #[command(subcommand)]
    pub command: LocationsCommand,
}

#[derive(Debug, Subcommand)]
pub enum LocationsCommand {
    /// Find a single location by id or name
    Find {
        #[command(flatten)]
        lookup: LookupArgs,

        /// Platform id
        #[arg(long, default_value = "1")]
        platform_id: i64,
    },

    /// Resolve a location selection into concrete locations
    #[command(alias = "ls")]
    Select(SelectArgs),
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LocationScope {
    /// Every location
    All,
    /// Public locations only
    Public,
    /// Private agents only
    Private,
}

#[derive(Debug, Args)]
pub struct SelectArgs {
    /// Which locations to start from
    #[arg(long, default_value = "all", value_enum, conflicts_with_all = ["ids", "names"])]
    pub scope: LocationScope,

    /// Explicit location ids (comma-separated)
    #[arg(long, value_delimiter = ',', conflicts_with = "names")]
    pub ids: Vec<i64>,

    /// Explicit location names (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub names: Vec<String>,

    /// Platform id (only ServerView has locations)
    #[arg(long, default_value = "1")]
    pub platform_id: i64,

    /// Include locations currently marked unavailable
    #[arg(long)]
    pub include_unavailable: bool,

    /// Drop locations inside national firewalls
    #[arg(long)]
    pub exclude_restrictive: bool,
}

impl SelectArgs {
    pub fn selection(&self) -> LocationSelection {
        let filter = if !self.ids.is_empty() {
            LocationFilter::Ids(self.ids.clone())
        } else if !self.names.is_empty() {
            LocationFilter::Names(self.names.clone())
        } else {
            match self.scope {
                LocationScope::All => LocationFilter::All,
                LocationScope::Public => LocationFilter::Public,
                LocationScope::Private => LocationFilter::Private,
            }
        };
        let mut selection = LocationSelection::new(filter);
        selection.platform_id = self.platform_id;
        selection.include_unavailable = self.include_unavailable;
        selection.include_restrictive = !self.exclude_restrictive;
        selection
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  PLATFORMS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct PlatformsArgs {
    #[command(subcommand)]
    pub command: PlatformsCommand,
}

#[derive(Debug, Subcommand)]
pub enum PlatformsCommand {
    /// List platforms and their packages
    #[command(alias = "ls")]
    List,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create initial config file with guided setup
    Init,

    /// Display current configuration (UIDs masked)
    Show,

    /// List configured profiles
    Profiles,

    /// Set the default profile
    Use {
        /// Profile name to set as default
        name: String,
    },

    /// Store a profile's UID in the system keyring
    SetUid {
        /// Profile name
        #[arg(long)]
        profile: Option<String>,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_tree_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn select_args_prefer_explicit_ids() {
        let cli = Cli::try_parse_from([
            "dotmon",
            "locations",
            "select",
            "--ids",
            "1,23",
            "--exclude-restrictive",
        ])
        .unwrap();
        let Command::Locations(LocationsArgs {
            command: LocationsCommand::Select(args),
        }) = cli.command
        else {
            panic!("expected locations select");
        };
        let selection = args.selection();
        assert_eq!(selection.filter, LocationFilter::Ids(vec![1, 23]));
        assert!(!selection.include_restrictive);
        assert_eq!(selection.platform_id, 1);
    }

    #[test]
    fn lookup_args_require_exactly_one() {
        assert!(Cli::try_parse_from(["dotmon", "schedulers", "find"]).is_err());
        assert!(
            Cli::try_parse_from(["dotmon", "filters", "find", "--id", "1", "--name", "x"])
                .is_err()
        );
        let cli = Cli::try_parse_from(["dotmon", "filters", "find", "--name", "quiet"]).unwrap();
        let Command::Filters(FiltersArgs {
            command: FiltersCommand::Find(lookup),
        }) = cli.command
        else {
            panic!("expected filters find");
        };
        assert_eq!(lookup.lookup(), Lookup::Name("quiet".into()));
    }
}
