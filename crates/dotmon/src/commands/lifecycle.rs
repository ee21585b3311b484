//! Get / exists / create / update / delete, shared by every resource kind.

use serde::Serialize;
use serde::de::DeserializeOwned;

use dotmon_core::{Monitor, Resource};

use crate::cli::{GlobalOpts, LifecycleCommand};
use crate::error::CliError;
use crate::output::{self, Stored};

use super::util;

#[derive(Serialize)]
struct ExistsReport {
    id: i64,
    exists: bool,
}

fn missing<R: Resource>(id: i64) -> CliError {
    CliError::NotFound {
        resource_type: R::ENTITY.into(),
        identifier: format!("id {id}"),
    }
}

/// Print one stored resource in the selected output format.
pub fn show<R: Serialize>(
    global: &GlobalOpts,
    stored: &Stored<R>,
    detail: fn(&Stored<R>) -> String,
) {
    let out = output::render_single(&global.output, stored, detail, |s| s.id.to_string());
    output::print_output(&out, global.quiet);
}

pub async fn handle<R>(
    monitor: &Monitor,
    cmd: LifecycleCommand,
    global: &GlobalOpts,
    detail: fn(&Stored<R>) -> String,
) -> Result<(), CliError>
where
    R: Resource + Serialize + DeserializeOwned,
{
    match cmd {
        LifecycleCommand::Get { id } => {
            let spec = monitor.read::<R>(id).await?.ok_or_else(|| missing::<R>(id))?;
            show(global, &Stored::new(id, spec), detail);
            Ok(())
        }

        LifecycleCommand::Exists { id } => {
            let report = ExistsReport {
                id,
                exists: monitor.exists::<R>(id).await,
            };
            let out = output::render_single(
                &global.output,
                &report,
                |r| format!("{} {}: {}", R::ENTITY, r.id, if r.exists { "exists" } else { "absent" }),
                |r| r.exists.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        LifecycleCommand::Create(file) => {
            let spec: R = util::read_spec_file(&file.from_file)?;
            let (id, stored) = monitor.create(&spec).await?;
            output::notice(&format!("Created {} {id}", R::ENTITY), global.quiet);
            show(global, &Stored::new(id, stored), detail);
            Ok(())
        }

        LifecycleCommand::Update { id, spec } => {
            let spec: R = util::read_spec_file(&spec.from_file)?;
            let stored = monitor
                .update(id, &spec)
                .await?
                .ok_or_else(|| missing::<R>(id))?;
            output::notice(&format!("Updated {} {id}", R::ENTITY), global.quiet);
            show(global, &Stored::new(id, stored), detail);
            Ok(())
        }

        LifecycleCommand::Delete { id } => {
            if !util::confirm(&format!("Delete {} {id}?", R::ENTITY), global.yes)? {
                return Ok(());
            }
            if monitor.delete::<R>(id).await? {
                output::notice(&format!("Deleted {} {id}", R::ENTITY), global.quiet);
            } else {
                output::notice(&format!("{} {id} was already gone", R::ENTITY), global.quiet);
            }
            Ok(())
        }
    }
}
