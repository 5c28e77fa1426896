//! Script equivalence comparison
//!
//! Checks a canonical collection of scripts (the trusted source, e.g. files
//! in version control) against a candidate collection (e.g. definitions
//! pulled from a warehouse). Records are paired by declared name and compared
//! after [`normalize_for_comparison`]. The comparison is one-directional:
//! candidates with no canonical counterpart are never reported.

use crate::error::{CoreError, CoreResult};
use crate::normalize::normalize_for_comparison;
use crate::script::{find_script, ScriptRecord};
use serde::{Deserialize, Serialize};

/// Canonical records whose normalized text differs from their candidate.
pub type MismatchReport = Vec<ScriptRecord>;

/// What to do when a canonical script has no candidate with the same name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MissingPolicy {
    /// Abort the comparison with [`CoreError::ScriptNotFound`]
    #[default]
    Fail,
    /// Collect the script into [`ComparisonOutcome::missing`] and continue
    Report,
}

impl std::fmt::Display for MissingPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MissingPolicy::Fail => write!(f, "fail"),
            MissingPolicy::Report => write!(f, "report"),
        }
    }
}

/// Result of a policy-aware comparison
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComparisonOutcome {
    /// Canonical scripts whose text does not match the candidate
    pub mismatches: MismatchReport,

    /// Canonical scripts with no candidate of the same name
    /// (only populated under [`MissingPolicy::Report`])
    pub missing: Vec<ScriptRecord>,
}

impl ComparisonOutcome {
    /// True when every canonical script was found and matched
    pub fn is_clean(&self) -> bool {
        self.mismatches.is_empty() && self.missing.is_empty()
    }
}

/// Whether two scripts are equal once normalized for comparison.
pub fn scripts_match(a: &str, b: &str) -> bool {
    normalize_for_comparison(a) == normalize_for_comparison(b)
}

/// Compare `canonical` against `candidate`, failing on the first canonical
/// name that has no candidate.
///
/// Mismatched records are returned unmodified, in `canonical` order.
pub fn compare_scripts(
    canonical: &[ScriptRecord],
    candidate: &[ScriptRecord],
) -> CoreResult<MismatchReport> {
    compare_scripts_with(canonical, candidate, MissingPolicy::Fail).map(|o| o.mismatches)
}

/// Compare `canonical` against `candidate` under the given missing-name policy.
pub fn compare_scripts_with(
    canonical: &[ScriptRecord],
    candidate: &[ScriptRecord],
    policy: MissingPolicy,
) -> CoreResult<ComparisonOutcome> {
    let mut outcome = ComparisonOutcome::default();

    for record in canonical {
        let Some(counterpart) = find_script(candidate, &record.name) else {
            match policy {
                MissingPolicy::Fail => {
                    return Err(CoreError::ScriptNotFound {
                        name: record.name.clone(),
                    })
                }
                MissingPolicy::Report => {
                    log::debug!("Script '{}' missing from candidates", record.name);
                    outcome.missing.push(record.clone());
                    continue;
                }
            }
        };

        if scripts_match(&record.text, &counterpart.text) {
            log::debug!("Script '{}' matches", record.name);
        } else {
            log::debug!("Script '{}' differs", record.name);
            outcome.mismatches.push(record.clone());
        }
    }

    Ok(outcome)
}

#[cfg(test)]
#[path = "compare_test.rs"]
mod tests;
