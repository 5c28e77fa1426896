//! SHA-256 checksums of script text for reports.

use crate::normalize::normalize_for_comparison;
use sha2::{Digest, Sha256};

/// Compute SHA256 checksum of a string
pub fn compute_checksum(s: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(s.as_bytes());
    let result = hasher.finalize();
    format!("{:x}", result)
}

/// Checksum of a script after comparison normalization.
///
/// Two scripts have equal normalized checksums exactly when they compare as
/// matching.
pub fn normalized_checksum(text: &str) -> String {
    compute_checksum(&normalize_for_comparison(text))
}
