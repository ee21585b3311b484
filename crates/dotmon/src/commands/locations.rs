//! Location command handlers.

use tabled::Tabled;

use dotmon_core::{Location, Monitor};

use crate::cli::{GlobalOpts, LocationsArgs, LocationsCommand};
use crate::error::CliError;
use crate::output;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct LocationRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Available")]
    available: bool,
    #[tabled(rename = "Private")]
    private: bool,
}

impl From<&Location> for LocationRow {
    fn from(l: &Location) -> Self {
        Self {
            id: l.id,
            name: l.name.clone(),
            available: l.available,
            private: l.is_private,
        }
    }
}

fn detail(l: &Location) -> String {
    [
        format!("ID:        {}", l.id),
        format!("Name:      {}", l.name),
        format!("Available: {}", l.available),
        format!("Private:   {}", l.is_private),
    ]
    .join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    monitor: &Monitor,
    args: LocationsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        LocationsCommand::Find {
            lookup,
            platform_id,
        } => {
            let location = monitor.find_location(platform_id, &lookup.lookup()).await?;
            let out = output::render_single(&global.output, &location, detail, |l| l.id.to_string());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        LocationsCommand::Select(select) => {
            let locations = monitor.select_locations(&select.selection()).await?;
            let out = output::render_list(
                &global.output,
                &locations,
                |l| LocationRow::from(l),
                |l| l.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
