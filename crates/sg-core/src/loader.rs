//! Script discovery and loading

use crate::error::{CoreError, CoreResult};
use crate::script::ScriptRecord;
use regex::Regex;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

fn view_name_regex() -> &'static Regex {
    static VIEW_NAME: OnceLock<Regex> = OnceLock::new();
    VIEW_NAME.get_or_init(|| Regex::new(r"(?im)view\s+([\w.]+)").expect("valid regex literal"))
}

/// Extract the object name declared by `view <name>` in a script.
///
/// Returns the first match; the search is case-insensitive and does not care
/// whether the marker sits inside a comment.
pub fn extract_script_name(text: &str) -> Option<String> {
    view_name_regex()
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Load a single script file.
///
/// The text is trimmed and the record is named after its `view <name>`
/// declaration.
pub fn load_script(path: &Path) -> CoreResult<ScriptRecord> {
    let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
        path: path.display().to_string(),
        source: e,
    })?;
    let text = content.trim();

    let name = extract_script_name(text).ok_or_else(|| CoreError::ScriptNameNotFound {
        path: path.display().to_string(),
    })?;

    log::debug!("Loaded script '{}' from {}", name, path.display());
    Ok(ScriptRecord::new(name, text).with_path(path))
}

/// Load scripts in the given order, stopping at the first failure.
///
/// Duplicate names are kept (lookups use the first) but logged.
pub fn load_scripts<P: AsRef<Path>>(paths: &[P]) -> CoreResult<Vec<ScriptRecord>> {
    let mut records = Vec::with_capacity(paths.len());
    let mut seen = HashSet::new();

    for path in paths {
        let record = load_script(path.as_ref())?;
        if !seen.insert(record.name.clone()) {
            log::warn!(
                "Duplicate script name '{}' in {}; the first definition is used",
                record.name,
                path.as_ref().display()
            );
        }
        records.push(record);
    }

    Ok(records)
}

/// Recursively find `.sql` files under `dir`, sorted by path.
pub fn discover_scripts(dir: &Path) -> CoreResult<Vec<PathBuf>> {
    let mut paths = Vec::new();
    discover_scripts_recursive(dir, &mut paths)?;
    paths.sort();
    Ok(paths)
}

fn discover_scripts_recursive(dir: &Path, paths: &mut Vec<PathBuf>) -> CoreResult<()> {
    for entry in std::fs::read_dir(dir).map_err(|e| CoreError::IoWithPath {
        path: dir.display().to_string(),
        source: e,
    })? {
        let entry = entry.map_err(|e| CoreError::IoWithPath {
            path: dir.display().to_string(),
            source: e,
        })?;
        let path = entry.path();
        if path.is_dir() {
            discover_scripts_recursive(&path, paths)?;
            continue;
        }
        if path
            .extension()
            .is_some_and(|e| e.eq_ignore_ascii_case("sql"))
        {
            paths.push(path);
        }
    }
    Ok(())
}

/// Resolve a file or directory argument into script paths.
///
/// A directory expands to every `.sql` file beneath it; a file is taken as is.
pub fn resolve_script_paths(path: &Path) -> CoreResult<Vec<PathBuf>> {
    if path.is_dir() {
        discover_scripts(path)
    } else if path.exists() {
        Ok(vec![path.to_path_buf()])
    } else {
        Err(CoreError::IoWithPath {
            path: path.display().to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file or directory"),
        })
    }
}

#[cfg(test)]
#[path = "loader_test.rs"]
mod tests;
