//! `classify` command: resolve class and zoom band for source identifiers.

use crate::error::CliError;
use crate::runner::CliRunner;
use landcover::profile::Classification;
use tracing::debug;

pub fn run(runner: &CliRunner, ids: &[String], strict: bool, json: bool) -> Result<(), CliError> {
    let mut profile = runner.profile();
    if strict {
        profile = profile.with_strict_zoom(true);
    }

    let classifications = ids
        .iter()
        .map(|id| {
            profile
                .classify_source(id)
                .map_err(|error| CliError::Classify {
                    id: id.clone(),
                    error,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;
    debug!(count = classifications.len(), "Classified source identifiers");

    if json {
        println!("{}", serde_json::to_string_pretty(&classifications)?);
    } else {
        print_table(&classifications);
    }

    Ok(())
}

fn print_table(classifications: &[Classification]) {
    println!("{:<10} {:<12} ZOOMS", "SOURCE", "CLASS");
    for c in classifications {
        let class = format!("{:?}", c.class_attr());
        println!("{:<10} {:<12} {}", c.source, class, c.zoom_band);
    }
}
