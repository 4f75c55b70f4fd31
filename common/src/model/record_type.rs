use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::PLACEHOLDER_RECORD_TYPES;

/// A server-defined category of manageable records, e.g. `"delusions"`.
///
/// The identifier doubles as the `table` query parameter of the admin API and
/// as the first path segment of the public card pages.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordType(String);

impl RecordType {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Display label: the identifier with its first letter upper-cased.
    pub fn label(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Types offered when the server list is unavailable.
    pub fn placeholders() -> Vec<RecordType> {
        PLACEHOLDER_RECORD_TYPES.iter().map(|name| RecordType::new(*name)).collect()
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordType {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_capitalises_first_letter() {
        assert_eq!(RecordType::from("delusions").label(), "Delusions");
        assert_eq!(RecordType::from("").label(), "");
    }

    #[test]
    fn placeholders_match_the_fixed_set() {
        let labels: Vec<String> = RecordType::placeholders().iter().map(RecordType::label).collect();
        assert_eq!(labels, ["Delusions", "Thoughts", "Interests", "Passions"]);
    }
}
