//! Mutation identity.

use std::fmt;

/// Identity of a class of mutation, for observability and de-duplication.
///
/// Keys are ordered segments, displayed joined by `.`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MutationKey(Vec<String>);

impl MutationKey {
    /// Creates a key from its segments.
    pub fn new<S: Into<String>>(segments: impl IntoIterator<Item = S>) -> Self {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// Returns the key segments.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.0
    }
}

impl From<&str> for MutationKey {
    fn from(key: &str) -> Self {
        Self::new([key])
    }
}

impl fmt::Display for MutationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("."))
    }
}
