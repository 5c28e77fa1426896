//! Tables command implementation
//!
//! Cleans a script, parses it, and lists every name reachable through a
//! row-source clause.

use anyhow::{Context, Result};
use serde::Serialize;
use sg_core::Config;
use sg_sql::{table_names, unique_table_names, ParseTree};

use crate::cli::{GlobalArgs, OutputFormat, TablesArgs};
use crate::commands::common::{build_parser, load_config, read_input};

/// Table list for JSON output
#[derive(Debug, Serialize)]
struct TablesOutput<'a> {
    file: &'a str,
    unique: bool,
    tables: Vec<String>,
}

/// Execute the tables command
pub(crate) fn execute(args: &TablesArgs, global: &GlobalArgs) -> Result<()> {
    let input = read_input(&args.file)?;

    let tree = if args.tree_json {
        ParseTree::from_json_str(&input)
            .with_context(|| format!("Failed to read parse tree from {}", args.file))?
    } else {
        let config = load_config(global)?;
        parse_script(&input, &config, global)
            .with_context(|| format!("Failed to parse {}", args.file))?
    };

    let tables = extract_names(&tree, args.unique);

    if global.verbose {
        let tree_json = serde_json::to_string(&tree).context("Failed to serialize parse tree")?;
        eprintln!("[verbose] Parse tree: {}", tree_json);
        eprintln!("[verbose] Found {} table references", tables.len());
    }

    match args.output {
        OutputFormat::Text => {
            for table in &tables {
                println!("{}", table);
            }
        }
        OutputFormat::Json => {
            let output = TablesOutput {
                file: &args.file,
                unique: args.unique,
                tables,
            };
            let json =
                serde_json::to_string_pretty(&output).context("Failed to serialize tables")?;
            println!("{}", json);
        }
    }

    Ok(())
}

/// Clean a raw script with the configured cleaner and parse it into a tree.
fn parse_script(sql: &str, config: &Config, global: &GlobalArgs) -> Result<ParseTree> {
    let cleaned = config.cleaner()?.clean(sql);
    if global.verbose {
        eprintln!("[verbose] Cleaned SQL:\n{}", cleaned);
    }

    let parser = build_parser(global, config)?;
    Ok(parser.parse_tree(&cleaned)?)
}

fn extract_names(tree: &ParseTree, unique: bool) -> Vec<String> {
    if unique {
        unique_table_names(tree)
    } else {
        table_names(tree)
    }
}

#[cfg(test)]
#[path = "tables_test.rs"]
mod tests;
