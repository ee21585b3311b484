//! Notification group command handlers.

use dotmon_core::{GroupAddress, GroupSpec, Monitor};

use crate::cli::{GlobalOpts, GroupsArgs, GroupsCommand};
use crate::error::CliError;
use crate::output::Stored;

use super::{lifecycle, util};

fn target(address: &GroupAddress) -> String {
    match address {
        GroupAddress::Email { address, .. } => address.clone(),
        GroupAddress::Phone { number, code, .. } | GroupAddress::Pager { number, code, .. } => {
            format!("{number} (code {code})")
        }
        GroupAddress::Sms { number, .. } => number.clone(),
        GroupAddress::PagerDuty { .. } => "integration key ****".into(),
        GroupAddress::Script { message, .. } => message.clone(),
    }
}

fn detail(g: &Stored<GroupSpec>) -> String {
    let mut lines = vec![
        format!("ID:        {}", g.id),
        format!("Name:      {}", g.spec.name),
        format!("Scheduler: {}", util::id_or_dash(g.spec.scheduler_id)),
        format!("Addresses: {}", g.spec.addresses.len()),
    ];
    for address in &g.spec.addresses {
        lines.push(format!("  {:<10} {}", address.kind(), target(address)));
    }
    lines.join("\n")
}

pub async fn handle(monitor: &Monitor, args: GroupsArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        GroupsCommand::Lifecycle(cmd) => lifecycle::handle(monitor, cmd, global, detail).await,

        GroupsCommand::Find { name } => {
            let (id, spec) = monitor.find_group(&name).await?;
            lifecycle::show(global, &Stored::new(id, spec), detail);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagerduty_key_is_masked() {
        let spec = GroupSpec {
            name: "ops".into(),
            scheduler_id: 0,
            addresses: vec![
                GroupAddress::Email {
                    address: "ops@example.com".into(),
                    template_id: 0,
                },
                GroupAddress::PagerDuty {
                    integration_key: "secret-key".into(),
                    template_id: 0,
                },
            ],
        };
        let out = detail(&Stored::new(3, spec));
        assert!(out.contains("ops@example.com"));
        assert!(!out.contains("secret-key"));
        assert!(out.contains("Scheduler: -"));
    }
}
