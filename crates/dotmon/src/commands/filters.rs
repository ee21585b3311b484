//! Filter command handlers.

use dotmon_core::{FilterSpec, Monitor};

use crate::cli::{FiltersArgs, FiltersCommand, GlobalOpts};
use crate::error::CliError;
use crate::output::Stored;

use super::{lifecycle, util};

fn detail(f: &Stored<FilterSpec>) -> String {
    let spec = &f.spec;
    let rules = &spec.rules;
    let count = |n: Option<i64>| n.map_or_else(|| "-".into(), |n| n.to_string());
    let mut lines = vec![
        format!("ID:           {}", f.id),
        format!("Name:         {}", spec.name),
        format!(
            "Description:  {}",
            util::or_dash(spec.description.as_deref().unwrap_or_default())
        ),
        format!("Minutes:      {}", rules.num_minutes),
        format!("Locations:    {}", count(rules.num_locations)),
        format!("Tasks:        {}", count(rules.num_tasks)),
        format!("Owner down:   {}", rules.owner_device_down),
    ];
    for ignored in &spec.ignore_errors {
        lines.push(format!("  ignore {} {}", ignored.error_type, ignored.codes));
    }
    lines.join("\n")
}

pub async fn handle(
    monitor: &Monitor,
    args: FiltersArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        FiltersCommand::Lifecycle(cmd) => lifecycle::handle(monitor, cmd, global, detail).await,

        FiltersCommand::Find(lookup) => {
            let (id, spec) = monitor.find_filter(&lookup.lookup()).await?;
            lifecycle::show(global, &Stored::new(id, spec), detail);
            Ok(())
        }
    }
}
