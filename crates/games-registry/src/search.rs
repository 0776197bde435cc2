//! Name-based search.
//!
//! Names are compared in the language given by [`SearchOptions`]. The scan
//! translates into that language directly and never switches the
//! translator's active language. Every name of an entry is considered: the current
//! name, historical names of versioned entries, and shadowed names.
//!
//! [`NameLookup`] mirrors the filter operators a storage layer offers on a
//! game column (`name`, `contains`, `startswith`, ...) and reduces each of
//! them to a name search.

use std::collections::BTreeSet;
use std::fmt;

use games_i18n::SOURCE_LANGUAGE;
use regex::RegexBuilder;

use crate::error::RegistryError;
use crate::registry::Games;

/// Options for [`Games::by_name`] and [`Games::by_name_regex`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    /// Language the names are compared in.
    pub language: String,
    /// Case-insensitive comparison.
    pub insensitive: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            language: SOURCE_LANGUAGE.to_owned(),
            insensitive: true,
        }
    }
}

impl SearchOptions {
    /// Sets the comparison language.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Sets case sensitivity.
    #[must_use]
    pub const fn with_insensitive(mut self, insensitive: bool) -> Self {
        self.insensitive = insensitive;
        self
    }
}

impl Games {
    /// Returns the code of the first entry with a name equal to `name`, or
    /// an empty string.
    ///
    /// # Examples
    ///
    /// ```
    /// use games_registry::{Games, SearchOptions};
    ///
    /// let games = Games::new();
    /// assert_eq!(games.by_name("path of exile", &SearchOptions::default()), "POE");
    /// assert_eq!(games.by_name("Blade & Soul", &SearchOptions::default()), "BNS");
    /// assert_eq!(games.by_name("Not a game", &SearchOptions::default()), "");
    /// ```
    #[must_use]
    pub fn by_name(&self, name: &str, options: &SearchOptions) -> String {
        let needle = if options.insensitive {
            name.to_lowercase()
        } else {
            name.to_owned()
        };
        self.scan(options, true, |candidate| {
            if options.insensitive {
                candidate.to_lowercase() == needle
            } else {
                candidate == needle
            }
        })
        .pop_first()
        .unwrap_or_default()
    }

    /// Returns every code with at least one name matching `pattern`.
    ///
    /// The pattern is unanchored; case-insensitive matching follows
    /// [`SearchOptions::insensitive`].
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidPattern`] if `pattern` does not
    /// compile.
    ///
    /// # Examples
    ///
    /// ```
    /// use games_registry::{Games, SearchOptions};
    ///
    /// let games = Games::new();
    /// let codes = games.by_name_regex("^path of exile", &SearchOptions::default()).unwrap();
    /// assert_eq!(codes.into_iter().collect::<Vec<_>>(), ["POE", "POE2"]);
    /// ```
    pub fn by_name_regex(
        &self,
        pattern: &str,
        options: &SearchOptions,
    ) -> Result<BTreeSet<String>, RegistryError> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(options.insensitive)
            .build()?;
        Ok(self.scan(options, false, |candidate| regex.is_match(candidate)))
    }

    /// Runs a name lookup, returning the matching codes.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidPattern`] for a malformed
    /// [`NameLookup::Regex`] or [`NameLookup::IRegex`] pattern.
    pub fn lookup(&self, lookup: &NameLookup) -> Result<BTreeSet<String>, RegistryError> {
        self.lookup_with(lookup, &SearchOptions::default())
    }

    /// Runs a name lookup comparing names in `options.language`.
    ///
    /// Case sensitivity comes from the lookup variant, not from `options`.
    ///
    /// # Errors
    ///
    /// Same as [`Games::lookup`].
    pub fn lookup_with(
        &self,
        lookup: &NameLookup,
        options: &SearchOptions,
    ) -> Result<BTreeSet<String>, RegistryError> {
        let options = options.clone().with_insensitive(lookup.is_insensitive());
        match lookup.pattern() {
            None => {
                let code = self.by_name(lookup.text(), &options);
                Ok(std::iter::once(code).filter(|code| !code.is_empty()).collect())
            }
            Some(pattern) => self.by_name_regex(&pattern, &options),
        }
    }

    fn scan(
        &self,
        options: &SearchOptions,
        stop_at_first: bool,
        matches: impl Fn(&str) -> bool,
    ) -> BTreeSet<String> {
        let snapshot = self.snapshot();
        let translator = self.translator();

        let mut codes = BTreeSet::new();
        for (code, entry) in &snapshot.entries {
            let found = entry
                .names()
                .iter()
                .chain(snapshot.shadowed(code))
                .any(|name| matches(&translator.translate_in(&options.language, name, true)));
            if found {
                codes.insert(code.clone());
                if stop_at_first {
                    break;
                }
            }
        }
        codes
    }
}

/// A name filter, as offered on a game column.
///
/// The `I` variants compare case-insensitively. `Contains`, `StartsWith`
/// and `EndsWith` take literal text; `Regex` takes a pattern.
///
/// # Examples
///
/// ```
/// use games_registry::{Games, NameLookup};
///
/// let games = Games::new();
/// let codes = games.lookup(&NameLookup::IEndsWith("of exile".to_owned())).unwrap();
/// assert!(codes.contains("POE"));
///
/// let lookup = NameLookup::from_operator("istartswith", "diablo").unwrap();
/// assert_eq!(lookup, NameLookup::IStartsWith("diablo".to_owned()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameLookup {
    /// Exact name.
    Name(String),
    /// Exact name, ignoring case.
    IName(String),
    /// Name contains the text.
    Contains(String),
    /// Name contains the text, ignoring case.
    IContains(String),
    /// Name starts with the text.
    StartsWith(String),
    /// Name starts with the text, ignoring case.
    IStartsWith(String),
    /// Name ends with the text.
    EndsWith(String),
    /// Name ends with the text, ignoring case.
    IEndsWith(String),
    /// Name matches the pattern.
    Regex(String),
    /// Name matches the pattern, ignoring case.
    IRegex(String),
}

impl NameLookup {
    /// Builds a lookup from an operator name such as `icontains`.
    ///
    /// Returns `None` for an unknown operator.
    #[must_use]
    pub fn from_operator(operator: &str, text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        let lookup = match operator {
            "name" => Self::Name(text),
            "iname" => Self::IName(text),
            "contains" => Self::Contains(text),
            "icontains" => Self::IContains(text),
            "startswith" => Self::StartsWith(text),
            "istartswith" => Self::IStartsWith(text),
            "endswith" => Self::EndsWith(text),
            "iendswith" => Self::IEndsWith(text),
            "regex" => Self::Regex(text),
            "iregex" => Self::IRegex(text),
            _ => return None,
        };
        Some(lookup)
    }

    /// Returns the operator name.
    #[must_use]
    pub const fn operator(&self) -> &'static str {
        match self {
            Self::Name(_) => "name",
            Self::IName(_) => "iname",
            Self::Contains(_) => "contains",
            Self::IContains(_) => "icontains",
            Self::StartsWith(_) => "startswith",
            Self::IStartsWith(_) => "istartswith",
            Self::EndsWith(_) => "endswith",
            Self::IEndsWith(_) => "iendswith",
            Self::Regex(_) => "regex",
            Self::IRegex(_) => "iregex",
        }
    }

    /// Returns the searched text or pattern.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Name(text)
            | Self::IName(text)
            | Self::Contains(text)
            | Self::IContains(text)
            | Self::StartsWith(text)
            | Self::IStartsWith(text)
            | Self::EndsWith(text)
            | Self::IEndsWith(text)
            | Self::Regex(text)
            | Self::IRegex(text) => text,
        }
    }

    /// Returns `true` for the case-insensitive variants.
    #[must_use]
    pub const fn is_insensitive(&self) -> bool {
        matches!(
            self,
            Self::IName(_)
                | Self::IContains(_)
                | Self::IStartsWith(_)
                | Self::IEndsWith(_)
                | Self::IRegex(_)
        )
    }

    /// Returns the regex the lookup reduces to, or `None` for exact lookups.
    fn pattern(&self) -> Option<String> {
        match self {
            Self::Name(_) | Self::IName(_) => None,
            Self::Contains(text) | Self::IContains(text) => Some(regex::escape(text)),
            Self::StartsWith(text) | Self::IStartsWith(text) => {
                Some(format!("^{}", regex::escape(text)))
            }
            Self::EndsWith(text) | Self::IEndsWith(text) => {
                Some(format!("{}$", regex::escape(text)))
            }
            Self::Regex(pattern) | Self::IRegex(pattern) => Some(pattern.clone()),
        }
    }
}

impl fmt::Display for NameLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={:?}", self.operator(), self.text())
    }
}
