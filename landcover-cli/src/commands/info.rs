//! `info` command: profile metadata and merge settings.

use crate::error::CliError;
use crate::runner::CliRunner;
use landcover::feature::{ATTR_CLASS, PIXEL_TOLERANCE};
use landcover::profile::Profile;

pub fn run(runner: &CliRunner) -> Result<(), CliError> {
    let profile = runner.profile();
    let metadata = profile.metadata();
    let coalescer = profile.coalescer();
    let policy = coalescer.policy();

    println!("{} v{}", metadata.name, metadata.version);
    println!();
    println!("{}", metadata.description);
    println!("Attribution: {}", metadata.attribution);
    println!();
    println!("Layer:");
    println!("  Name:            {}", coalescer.layer());
    println!("  Attribute:       {}", ATTR_CLASS);
    println!("  Pixel tolerance: {}", PIXEL_TOLERANCE);
    println!(
        "  Zoom codes:      {}",
        if profile.emitter().is_strict() {
            "strict"
        } else {
            "unknown codes shown at zooms 0-3"
        }
    );
    println!();
    println!("Merge:");
    println!("  Min area:        {}", policy.min_area);
    println!("  Min hole area:   {}", policy.min_hole_area);
    println!("  Min distance:    {}", policy.min_dist);
    println!("  Buffer:          {}", policy.buffer);

    Ok(())
}
