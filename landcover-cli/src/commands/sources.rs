//! `sources` command: list the source plan and check for missing archives.

use crate::error::CliError;
use crate::runner::CliRunner;
use landcover::sources::SourcePlan;
use std::path::Path;
use tracing::{info, warn};

pub fn run(runner: &CliRunner, archive_dir: Option<&Path>, check: bool) -> Result<(), CliError> {
    let settings = &runner.config().sources;
    let dir = archive_dir.unwrap_or(settings.archive_dir.as_path());
    let plan = SourcePlan::with_projection(dir, &settings.projection);

    if !check {
        for spec in plan.sources() {
            println!("{:<6} {} ({})", spec.name(), spec.path.display(), spec.projection);
        }
        println!();
        println!("{} sources in {}", plan.len(), dir.display());
        return Ok(());
    }

    let missing = plan.missing();
    for spec in &missing {
        warn!(source = %spec.name(), path = %spec.path.display(), "Missing source archive");
        println!("missing  {}", spec.path.display());
    }

    if missing.is_empty() {
        info!(count = plan.len(), dir = %dir.display(), "All source archives present");
        println!("All {} source archives present in {}", plan.len(), dir.display());
        Ok(())
    } else {
        Err(CliError::MissingSources {
            missing: missing.len(),
            total: plan.len(),
        })
    }
}
