//! Command dispatch: bridges CLI args -> `Monitor` calls -> output formatting.

pub mod config_cmd;
pub mod devices;
pub mod filters;
pub mod groups;
pub mod lifecycle;
pub mod locations;
pub mod platforms;
pub mod schedulers;
pub mod tasks;
pub mod util;

use dotmon_core::Monitor;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a session-bound command to the appropriate handler.
pub async fn dispatch(cmd: Command, monitor: &Monitor, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Tasks(args) => tasks::handle(monitor, args, global).await,
        Command::Devices(args) => devices::handle(monitor, args, global).await,
        Command::Groups(args) => groups::handle(monitor, args, global).await,
        Command::Schedulers(args) => schedulers::handle(monitor, args, global).await,
        Command::Filters(args) => filters::handle(monitor, args, global).await,
        Command::Locations(args) => locations::handle(monitor, args, global).await,
        Command::Platforms(args) => platforms::handle(monitor, args, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => Err(CliError::Internal(
            "config and completions never reach the session dispatcher".into(),
        )),
    }
}
