//! Choice list items.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A `(code, name)` pair, as yielded when iterating the registry.
///
/// The separator inserted after the first block has an empty code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameTuple {
    /// Canonical code (empty for the separator).
    pub code: String,
    /// Translated display name.
    pub name: String,
}

impl GameTuple {
    /// Creates a new pair.
    #[inline]
    #[must_use]
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }

    /// Returns `true` for the separator pseudo-entry.
    #[inline]
    #[must_use]
    pub fn is_separator(&self) -> bool {
        self.code.is_empty()
    }
}

impl fmt::Display for GameTuple {
    /// Formats as a tuple, e.g. `("POE", "Path of Exile")`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.code, self.name)
    }
}

impl From<(String, String)> for GameTuple {
    fn from((code, name): (String, String)) -> Self {
        Self { code, name }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_as_tuple() {
        let pair = GameTuple::new("POE", "Path of Exile");
        assert_eq!(pair.to_string(), r#"("POE", "Path of Exile")"#);
    }

    #[test]
    fn test_separator() {
        assert!(GameTuple::new("", "---").is_separator());
        assert!(!GameTuple::new("WOW", "World of Warcraft").is_separator());
    }
}
