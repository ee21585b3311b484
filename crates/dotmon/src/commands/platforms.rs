//! Platform command handlers.

use tabled::Tabled;

use dotmon_core::{Monitor, Platform};

use crate::cli::{GlobalOpts, PlatformsArgs, PlatformsCommand};
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct PlatformRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Available")]
    available: bool,
    #[tabled(rename = "Packages")]
    packages: String,
}

impl From<&Platform> for PlatformRow {
    fn from(p: &Platform) -> Self {
        Self {
            id: p.id,
            name: p.name.clone(),
            available: p.available,
            packages: p
                .packages
                .iter()
                .map(|pkg| format!("{} ({})", pkg.package_name, pkg.package_id))
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

pub async fn handle(
    monitor: &Monitor,
    args: PlatformsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        PlatformsCommand::List => {
            let platforms = monitor.platforms().await?;
            let out = output::render_list(
                &global.output,
                &platforms,
                |p| PlatformRow::from(p),
                |p| p.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
