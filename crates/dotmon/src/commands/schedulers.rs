//! Scheduler command handlers.

use dotmon_core::{Monitor, SchedulerSpec};

use crate::cli::{GlobalOpts, SchedulersArgs, SchedulersCommand};
use crate::error::CliError;
use crate::output::Stored;

use super::{lifecycle, util};

/// `570` -> `09:30`.
fn clock(minute: i64) -> String {
    format!("{:02}:{:02}", minute / 60, minute % 60)
}

fn detail(s: &Stored<SchedulerSpec>) -> String {
    let spec = &s.spec;
    let mut lines = vec![
        format!("ID:          {}", s.id),
        format!("Name:        {}", spec.name),
        format!(
            "Description: {}",
            util::or_dash(spec.description.as_deref().unwrap_or_default())
        ),
    ];
    for interval in &spec.weekly_intervals {
        lines.push(format!(
            "  weekly  {} {}-{}{}",
            interval.days.join(","),
            clock(interval.from_minute),
            clock(interval.to_minute),
            if interval.enabled { "" } else { " (disabled)" }
        ));
    }
    for window in &spec.excluded_time_intervals {
        lines.push(format!("  exclude {} .. {}", window.from.to_rfc3339(), window.to.to_rfc3339()));
    }
    lines.join("\n")
}

pub async fn handle(
    monitor: &Monitor,
    args: SchedulersArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        SchedulersCommand::Lifecycle(cmd) => lifecycle::handle(monitor, cmd, global, detail).await,

        SchedulersCommand::Find(lookup) => {
            let (id, spec) = monitor.find_scheduler(&lookup.lookup()).await?;
            lifecycle::show(global, &Stored::new(id, spec), detail);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minutes_render_as_clock_time() {
        assert_eq!(clock(0), "00:00");
        assert_eq!(clock(570), "09:30");
        assert_eq!(clock(1440), "24:00");
    }
}
