//! Task command handlers.

use dotmon_core::{Monitor, TaskSpec};

use crate::cli::{GlobalOpts, TasksArgs, TasksCommand};
use crate::error::CliError;
use crate::output::Stored;

use super::lifecycle;

fn detail(t: &Stored<TaskSpec>) -> String {
    let spec = &t.spec;
    let keywords: Vec<&str> = [&spec.keyword1, &spec.keyword2, &spec.keyword3]
        .into_iter()
        .filter_map(|k| k.as_deref())
        .collect();
    let mut lines = vec![
        format!("ID:        {}", t.id),
        format!("Name:      {}", spec.name),
        format!("Device:    {}", spec.device_id),
        format!("Request:   {} {}", spec.request_type, spec.url),
        format!("Type:      {}", spec.task_type_id),
        format!("Timeout:   {}s", spec.timeout),
        format!(
            "Keywords:  {}",
            if keywords.is_empty() { "-".into() } else { keywords.join(", ") }
        ),
    ];
    if let Some(ref mode) = spec.dns_resolve_mode {
        lines.push(format!("DNS:       {mode}"));
    }
    if !spec.custom_dns_hosts.is_empty() {
        lines.push(format!("DNS hosts: {}", spec.custom_dns_hosts.len()));
    }
    lines.join("\n")
}

pub async fn handle(monitor: &Monitor, args: TasksArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        TasksCommand::Lifecycle(cmd) => lifecycle::handle(monitor, cmd, global, detail).await,

        TasksCommand::Find { device_id, name } => {
            let (id, spec) = monitor.find_task(device_id, &name).await?;
            lifecycle::show(global, &Stored::new(id, spec), detail);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_lists_keywords() {
        let mut spec = TaskSpec::new(7, "home", "https://example.com");
        spec.keyword1 = Some("Welcome".into());
        spec.keyword3 = Some("Footer".into());
        let out = detail(&Stored::new(55, spec));
        assert!(out.contains("Keywords:  Welcome, Footer"));
        assert!(out.contains("Request:   GET https://example.com"));
    }
}
