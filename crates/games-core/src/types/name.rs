//! Game display names.
//!
//! A registry entry resolves to a [`GameName`]: either a single translatable
//! string, or a [`VersionedName`] carrying the current name, its historical
//! names, and optional alternate codes.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::ConfigError;

/// The display name of a registry entry.
///
/// Static data only ever produces [`GameName::Simple`]. Configuration
/// (`override` and `only`) may supply richer [`GameName::Versioned`] records,
/// written in JSON either as a plain string or as an object:
///
/// ```json
/// { "names": ["New World: Aeternum", "New World"], "alpha3": "NWA", "numeric": 900 }
/// ```
///
/// # Examples
///
/// ```
/// use games_core::GameName;
///
/// let name: GameName = serde_json::from_str(r#""Path of Exile""#).unwrap();
/// assert_eq!(name.current(), "Path of Exile");
/// assert!(name.history().is_empty());
///
/// let name: GameName =
///     serde_json::from_str(r#"{"names": ["Lost Ark", "LOA"], "ioc_code": "LA"}"#).unwrap();
/// assert_eq!(name.current(), "Lost Ark");
/// assert_eq!(name.history().len(), 1);
/// assert_eq!(name.ioc_code(), Some("LA"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameName", into = "RawGameName")]
pub enum GameName {
    /// A single translatable name with no tracked history.
    Simple(Cow<'static, str>),
    /// An ordered name history plus optional alternate codes.
    Versioned(VersionedName),
}

impl GameName {
    /// Creates a simple name.
    #[inline]
    #[must_use]
    pub fn simple(name: impl Into<Cow<'static, str>>) -> Self {
        Self::Simple(name.into())
    }

    /// Returns the current (first) name.
    #[must_use]
    pub fn current(&self) -> &str {
        match self {
            Self::Simple(name) => name,
            Self::Versioned(versioned) => versioned.current(),
        }
    }

    /// Returns every name, current first.
    #[must_use]
    pub fn names(&self) -> &[Cow<'static, str>] {
        match self {
            Self::Simple(name) => std::slice::from_ref(name),
            Self::Versioned(versioned) => &versioned.names,
        }
    }

    /// Returns the historical names (everything after the current name).
    ///
    /// Always empty for [`GameName::Simple`]; the registry tracks shadowed
    /// names for simple entries separately.
    #[must_use]
    pub fn history(&self) -> &[Cow<'static, str>] {
        match self {
            Self::Simple(_) => &[],
            Self::Versioned(versioned) => versioned.history(),
        }
    }

    /// Returns the three-letter alternate code carried by the record, if any.
    #[must_use]
    pub fn alpha3(&self) -> Option<&str> {
        match self {
            Self::Simple(_) => None,
            Self::Versioned(versioned) => versioned.alpha3.as_deref(),
        }
    }

    /// Returns the numeric alternate code carried by the record, if any.
    #[must_use]
    pub const fn numeric(&self) -> Option<u16> {
        match self {
            Self::Simple(_) => None,
            Self::Versioned(versioned) => versioned.numeric,
        }
    }

    /// Returns the IOC-style alias carried by the record, if any.
    #[must_use]
    pub fn ioc_code(&self) -> Option<&str> {
        match self {
            Self::Simple(_) => None,
            Self::Versioned(versioned) => versioned.ioc_code.as_deref(),
        }
    }

    /// Returns `true` if the record overrides any alternate code.
    #[must_use]
    pub fn has_alt_codes(&self) -> bool {
        self.alpha3().is_some() || self.numeric().is_some()
    }
}

impl From<&'static str> for GameName {
    fn from(name: &'static str) -> Self {
        Self::Simple(Cow::Borrowed(name))
    }
}

impl From<String> for GameName {
    fn from(name: String) -> Self {
        Self::Simple(Cow::Owned(name))
    }
}

impl From<VersionedName> for GameName {
    fn from(versioned: VersionedName) -> Self {
        Self::Versioned(versioned)
    }
}

/// A name history with optional alternate codes.
///
/// The name list is never empty; the first element is the current name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionedName {
    names: SmallVec<[Cow<'static, str>; 2]>,
    /// Three-letter alternate code.
    pub alpha3: Option<Cow<'static, str>>,
    /// Numeric alternate code.
    pub numeric: Option<u16>,
    /// IOC-style short alias.
    pub ioc_code: Option<Cow<'static, str>>,
}

impl VersionedName {
    /// Creates a record from an ordered list of names, current first.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidName`] if `names` is empty.
    pub fn new<I, S>(names: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        let names: SmallVec<[Cow<'static, str>; 2]> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(ConfigError::InvalidName(
                "a names list must contain at least one name".to_owned(),
            ));
        }
        Ok(Self {
            names,
            alpha3: None,
            numeric: None,
            ioc_code: None,
        })
    }

    /// Sets the three-letter alternate code.
    #[must_use]
    pub fn with_alpha3(mut self, alpha3: impl Into<Cow<'static, str>>) -> Self {
        self.alpha3 = Some(alpha3.into());
        self
    }

    /// Sets the numeric alternate code.
    #[must_use]
    pub const fn with_numeric(mut self, numeric: u16) -> Self {
        self.numeric = Some(numeric);
        self
    }

    /// Sets the IOC-style alias.
    #[must_use]
    pub fn with_ioc_code(mut self, ioc_code: impl Into<Cow<'static, str>>) -> Self {
        self.ioc_code = Some(ioc_code.into());
        self
    }

    /// Returns the current name.
    #[must_use]
    pub fn current(&self) -> &str {
        // `new` rejects empty lists.
        self.names.first().map_or("", |name| name.as_ref())
    }

    /// Returns the names after the current one, newest first.
    #[must_use]
    pub fn history(&self) -> &[Cow<'static, str>] {
        self.names.get(1..).unwrap_or_default()
    }

    /// Returns every name, current first.
    #[must_use]
    pub fn names(&self) -> &[Cow<'static, str>] {
        &self.names
    }
}

/// Wire shape of a [`GameName`]: a bare string or a record.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawGameName {
    Simple(String),
    Record {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        names: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        alpha3: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        numeric: Option<u16>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        ioc_code: Option<String>,
    },
}

impl TryFrom<RawGameName> for GameName {
    type Error = ConfigError;

    fn try_from(raw: RawGameName) -> Result<Self, Self::Error> {
        match raw {
            RawGameName::Simple(name) => Ok(Self::from(name)),
            RawGameName::Record {
                name,
                names,
                alpha3,
                numeric,
                ioc_code,
            } => {
                let names = match (name, names.is_empty()) {
                    (Some(_), false) => {
                        return Err(ConfigError::InvalidName(
                            "`name` and `names` are mutually exclusive".to_owned(),
                        ));
                    }
                    (Some(name), true) => vec![name],
                    (None, false) => names,
                    (None, true) => {
                        return Err(ConfigError::InvalidName(
                            "record needs a `name` or a non-empty `names` list".to_owned(),
                        ));
                    }
                };
                let mut versioned = VersionedName::new(names)?;
                versioned.alpha3 = alpha3.map(|code| Cow::Owned(code.to_uppercase()));
                versioned.numeric = numeric;
                versioned.ioc_code = ioc_code.map(|code| Cow::Owned(code.to_uppercase()));
                Ok(Self::Versioned(versioned))
            }
        }
    }
}

impl From<GameName> for RawGameName {
    fn from(name: GameName) -> Self {
        match name {
            GameName::Simple(name) => Self::Simple(name.into_owned()),
            GameName::Versioned(versioned) => {
                let mut names: Vec<String> =
                    versioned.names.into_iter().map(Cow::into_owned).collect();
                let name = if names.len() == 1 { names.pop() } else { None };
                Self::Record {
                    name,
                    names,
                    alpha3: versioned.alpha3.map(Cow::into_owned),
                    numeric: versioned.numeric,
                    ioc_code: versioned.ioc_code.map(Cow::into_owned),
                }
            }
        }
    }
}
