//! Named SQL script records

use serde::Serialize;
use std::path::PathBuf;

/// A SQL script identified by the object name it declares.
///
/// The name comes from the script body (`create view analytics.orders ...`)
/// rather than the file name, since file names drift from the objects they
/// define.
#[derive(Debug, Clone, Serialize)]
pub struct ScriptRecord {
    /// Declared object name, e.g. `analytics.orders`
    pub name: String,

    /// Raw script text
    pub text: String,

    /// File the script was loaded from, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl ScriptRecord {
    /// Create a record that did not come from a file
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            path: None,
        }
    }

    /// Attach the source file path
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }
}

// Identity is name + text; where the script was read from does not matter.
impl PartialEq for ScriptRecord {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.text == other.text
    }
}

impl Eq for ScriptRecord {}

/// Find the first record with the given name.
pub fn find_script<'a>(records: &'a [ScriptRecord], name: &str) -> Option<&'a ScriptRecord> {
    records.iter().find(|r| r.name == name)
}
