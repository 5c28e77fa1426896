//! Clean command implementation

use anyhow::Result;

use crate::cli::{CleanArgs, GlobalArgs};
use crate::commands::common::{load_config, read_input};

/// Execute the clean command
pub(crate) fn execute(args: &CleanArgs, global: &GlobalArgs) -> Result<()> {
    let config = load_config(global)?;
    let cleaner = config.cleaner()?;

    let sql = read_input(&args.file)?;
    println!("{}", cleaner.clean(&sql));
    Ok(())
}
