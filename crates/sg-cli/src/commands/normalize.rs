//! Normalize command implementation

use anyhow::Result;
use sg_core::{normalize_for_comparison, normalized_checksum};

use crate::cli::{GlobalArgs, NormalizeArgs};
use crate::commands::common::read_input;

/// Execute the normalize command
pub(crate) fn execute(args: &NormalizeArgs, global: &GlobalArgs) -> Result<()> {
    let text = read_input(&args.file)?;

    if global.verbose {
        eprintln!("[verbose] Checksum: {}", normalized_checksum(&text));
    }

    println!("{}", normalize_for_comparison(&text));
    Ok(())
}
