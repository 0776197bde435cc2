//! The `only` option.

use serde::{Deserialize, Serialize};

use crate::{FxIndexMap, GameName};

/// Restricts (and optionally relabels) the entries of a registry.
///
/// Accepted shapes, mirroring the settings file:
///
/// - a mapping `{"CODE": name}`: every entry is relabeled, custom codes allowed
/// - a list of codes `["WOW", "POE"]`: restriction against the static table
/// - a list of `[code, name]` pairs, optionally mixed with plain codes
///
/// # Examples
///
/// ```
/// use games_core::Only;
///
/// let only: Only = serde_json::from_str(r#"["WOW", ["XX", "Custom"]]"#).unwrap();
/// assert!(only.restricts());
/// assert_eq!(only.len(), 2);
///
/// let only: Only = serde_json::from_str(r#"{"XX": "Custom"}"#).unwrap();
/// assert!(!only.restricts());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Only {
    /// Code to name mapping.
    Choices(FxIndexMap<String, GameName>),
    /// Ordered list of codes and `[code, name]` pairs.
    Items(Vec<OnlyItem>),
}

/// One item of an [`Only::Items`] list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OnlyItem {
    /// A code kept with its static name.
    Code(String),
    /// A code with a custom name.
    Choice(String, GameName),
}

impl OnlyItem {
    /// Returns the code of this item.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::Code(code) | Self::Choice(code, _) => code,
        }
    }
}

impl Only {
    /// Returns `true` if at least one item is a plain code, meaning the
    /// entries are drawn from the static table rather than supplied whole.
    #[must_use]
    pub fn restricts(&self) -> bool {
        match self {
            Self::Choices(_) => false,
            Self::Items(items) => items.iter().any(|item| matches!(item, OnlyItem::Code(_))),
        }
    }

    /// Returns the number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Choices(choices) => choices.len(),
            Self::Items(items) => items.len(),
        }
    }

    /// Returns `true` if there are no items. An empty `only` is ignored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S: Into<String>> FromIterator<S> for Only {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::Items(iter.into_iter().map(|code| OnlyItem::Code(code.into())).collect())
    }
}
