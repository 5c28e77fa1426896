//! sg-core - Core library for Scriptguard
//!
//! This crate provides the named script record, SQL text normalization,
//! script loading, configuration, and the canonical-vs-candidate script
//! comparison used across all Scriptguard components.

pub mod checksum;
pub mod compare;
pub mod config;
pub mod error;
pub mod loader;
pub mod normalize;
pub mod script;

pub use checksum::{compute_checksum, normalized_checksum};
pub use compare::{
    compare_scripts, compare_scripts_with, scripts_match, ComparisonOutcome, MismatchReport,
    MissingPolicy,
};
pub use config::{Config, Dialect};
pub use error::{CoreError, CoreResult};
pub use loader::{
    discover_scripts, extract_script_name, load_script, load_scripts, resolve_script_paths,
};
pub use normalize::{clean_sql, normalize_for_comparison, SqlCleaner};
pub use script::{find_script, ScriptRecord};
