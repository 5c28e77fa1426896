//! Compare command implementation
//!
//! Pairs canonical and candidate scripts by their `view <name>` declaration
//! and reports those whose normalized text differs.

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use sg_core::{
    compare_scripts_with, find_script, load_scripts, normalized_checksum, resolve_script_paths,
    ComparisonOutcome, MissingPolicy, ScriptRecord,
};
use std::path::{Path, PathBuf};

use crate::cli::{CompareArgs, GlobalArgs, OutputFormat};
use crate::commands::common::{load_config, ExitCode};

/// Comparison summary for JSON output
#[derive(Debug, Serialize)]
struct CompareSummary {
    timestamp: DateTime<Utc>,
    on_missing: MissingPolicy,
    canonical_count: usize,
    candidate_count: usize,
    mismatches: Vec<ScriptEntry>,
    missing: Vec<ScriptEntry>,
    success: bool,
}

/// A reported script
#[derive(Debug, Serialize)]
struct ScriptEntry {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<PathBuf>,
    canonical_checksum: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    candidate_checksum: Option<String>,
}

/// Execute the compare command
pub(crate) fn execute(args: &CompareArgs, global: &GlobalArgs) -> Result<()> {
    let config = load_config(global)?;
    let policy = args.on_missing.map(Into::into).unwrap_or(config.on_missing);

    let canonical_paths = side_paths(args.canonical.as_deref(), &config.canonical_paths);
    let candidate_paths = side_paths(args.candidate.as_deref(), &config.candidate_paths);
    if canonical_paths.is_empty() || candidate_paths.is_empty() {
        bail!(
            "Both canonical and candidate scripts are required: pass them as arguments \
             or set canonical_paths and candidate_paths in scriptguard.yml"
        );
    }

    let canonical = load_side(&canonical_paths, "canonical")?;
    let candidate = load_side(&candidate_paths, "candidate")?;

    if global.verbose {
        eprintln!(
            "[verbose] Comparing {} canonical against {} candidate scripts (on_missing={})",
            canonical.len(),
            candidate.len(),
            policy
        );
    }

    let outcome = compare_scripts_with(&canonical, &candidate, policy)
        .context("Comparison aborted")?;

    match args.output {
        OutputFormat::Text => print!("{}", render_text(&outcome)),
        OutputFormat::Json => {
            let summary = build_summary(&outcome, &canonical, &candidate, policy);
            let json = serde_json::to_string_pretty(&summary)
                .context("Failed to serialize comparison results")?;
            println!("{}", json);
        }
    }

    if !outcome.is_clean() {
        return Err(ExitCode(1).into());
    }
    Ok(())
}

/// Paths for one side: the CLI argument wins over configured defaults.
fn side_paths(arg: Option<&str>, configured: &[String]) -> Vec<String> {
    match arg {
        Some(path) => vec![path.to_string()],
        None => configured.to_vec(),
    }
}

fn load_side(paths: &[String], side: &str) -> Result<Vec<ScriptRecord>> {
    let mut files = Vec::new();
    for path in paths {
        let resolved = resolve_script_paths(Path::new(path))
            .with_context(|| format!("Failed to resolve {} scripts", side))?;
        if resolved.is_empty() {
            log::warn!("No .sql files found under {}", path);
        }
        files.extend(resolved);
    }
    load_scripts(&files).with_context(|| format!("Failed to load {} scripts", side))
}

/// Human-readable report: mismatches first, then scripts with no candidate.
fn render_text(outcome: &ComparisonOutcome) -> String {
    let mut out = String::new();

    if outcome.mismatches.is_empty() {
        out.push_str("No mismatches found.\n");
    } else {
        push_titled_list(&mut out, "Mismatches", &outcome.mismatches);
    }

    if !outcome.missing.is_empty() {
        push_titled_list(&mut out, "Missing in candidate", &outcome.missing);
    }

    out
}

fn push_titled_list(out: &mut String, title: &str, records: &[ScriptRecord]) {
    out.push('\n');
    out.push_str(title);
    out.push('\n');
    for record in records {
        out.push_str(&format!("\t> {}\n", record.name));
    }
}

fn build_summary(
    outcome: &ComparisonOutcome,
    canonical: &[ScriptRecord],
    candidate: &[ScriptRecord],
    policy: MissingPolicy,
) -> CompareSummary {
    let entry = |record: &ScriptRecord| ScriptEntry {
        name: record.name.clone(),
        path: record.path.clone(),
        canonical_checksum: normalized_checksum(&record.text),
        candidate_checksum: find_script(candidate, &record.name)
            .map(|c| normalized_checksum(&c.text)),
    };

    CompareSummary {
        timestamp: Utc::now(),
        on_missing: policy,
        canonical_count: canonical.len(),
        candidate_count: candidate.len(),
        mismatches: outcome.mismatches.iter().map(&entry).collect(),
        missing: outcome.missing.iter().map(&entry).collect(),
        success: outcome.is_clean(),
    }
}

#[cfg(test)]
#[path = "compare_test.rs"]
mod tests;
