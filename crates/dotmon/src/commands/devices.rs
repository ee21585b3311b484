//! Device command handlers.

use dotmon_core::{DeviceSpec, Monitor};

use crate::cli::{DevicesArgs, DevicesCommand, GlobalOpts};
use crate::error::CliError;
use crate::output::Stored;

use super::{lifecycle, util};

fn detail(d: &Stored<DeviceSpec>) -> String {
    let spec = &d.spec;
    let groups: Vec<String> = spec
        .notification_groups
        .iter()
        .map(|g| {
            if g.time_shift_min == 0 {
                g.id.to_string()
            } else {
                format!("{} (+{}m)", g.id, g.time_shift_min)
            }
        })
        .collect();
    [
        format!("ID:          {}", d.id),
        format!("Name:        {}", spec.name),
        format!("Platform:    {}", spec.platform_id),
        format!("Frequency:   {}s", spec.frequency),
        format!("Locations:   {}", util::join_ids(&spec.locations)),
        format!("Scheduler:   {}", util::id_or_dash(spec.scheduler_id)),
        format!("Filter:      {}", util::id_or_dash(spec.filter_id)),
        format!("Owner:       {}", util::id_or_dash(spec.owner_device_id)),
        format!("Postponed:   {}", spec.postpone),
        format!(
            "Notify:      {}",
            if groups.is_empty() { "-".into() } else { groups.join(", ") }
        ),
    ]
    .join("\n")
}

pub async fn handle(
    monitor: &Monitor,
    args: DevicesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        DevicesCommand::Lifecycle(cmd) => lifecycle::handle(monitor, cmd, global, detail).await,

        DevicesCommand::Find { platform_id, name } => {
            let (id, spec) = monitor.find_device(platform_id, &name).await?;
            lifecycle::show(global, &Stored::new(id, spec), detail);
            Ok(())
        }
    }
}
