//! The [`Game`] value object.
//!
//! A `Game` is a code bound to a registry, with every lookup the registry
//! offers exposed as a method. It is what a model attribute or a template
//! receives in place of the bare stored code.

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::registry::Games;

/// Which value a [`Game`] renders through [`Display`](fmt::Display).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrAttr {
    /// The canonical code.
    #[default]
    Code,
    /// The translated name.
    Name,
}

/// A game code bound to a [`Games`] registry.
///
/// The code is normalized on construction; input that does not resolve is
/// kept verbatim, so a stale stored code still round-trips.
///
/// # Examples
///
/// ```
/// use games_registry::{Game, Games, StrAttr};
///
/// let games = Games::new();
/// let game = Game::new("poe", &games);
/// assert_eq!(game, "POE");
/// assert_eq!(game.name(), "Path of Exile");
/// assert_eq!(game.numeric_padded().as_deref(), Some("329"));
/// assert_eq!(game.icon_url(), "icons/poe.gif");
///
/// let game = game.with_str_attr(StrAttr::Name);
/// assert_eq!(game.to_string(), "Path of Exile");
/// ```
#[derive(Clone)]
pub struct Game<'a> {
    code: String,
    games: &'a Games,
    str_attr: StrAttr,
    escape: bool,
}

impl<'a> Game<'a> {
    /// Binds `code` to `games`, normalizing it.
    #[must_use]
    pub fn new(code: impl fmt::Display, games: &'a Games) -> Self {
        let raw = code.to_string();
        let normalized = games.alpha2(&raw);
        Self {
            code: if normalized.is_empty() { raw } else { normalized },
            games,
            str_attr: StrAttr::default(),
            escape: false,
        }
    }

    /// Sets the value rendered by [`Display`](fmt::Display).
    #[must_use]
    pub const fn with_str_attr(mut self, str_attr: StrAttr) -> Self {
        self.str_attr = str_attr;
        self
    }

    /// Enables HTML escaping of the rendered name.
    #[must_use]
    pub const fn with_escape(mut self, escape: bool) -> Self {
        self.escape = escape;
        self
    }

    /// Returns the code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns `true` if the code is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    /// Returns the registry this game is bound to.
    #[must_use]
    pub const fn games(&self) -> &'a Games {
        self.games
    }

    /// Returns the translated name, HTML-escaped when escaping is enabled.
    #[must_use]
    pub fn name(&self) -> String {
        let name = self.games.name(&self.code);
        if self.escape {
            escape_html(&name).into_owned()
        } else {
            name
        }
    }

    /// Returns the three-letter alternate code, or an empty string.
    #[must_use]
    pub fn alpha3(&self) -> String {
        self.games.alpha3(&self.code)
    }

    /// Returns the numeric alternate code.
    #[must_use]
    pub fn numeric(&self) -> Option<u16> {
        self.games.numeric(&self.code)
    }

    /// Returns the numeric alternate code, zero-padded to three characters.
    #[must_use]
    pub fn numeric_padded(&self) -> Option<String> {
        self.games.numeric_padded(&self.code)
    }

    /// Returns the IOC-style alias, or an empty string.
    #[must_use]
    pub fn ioc_code(&self) -> String {
        self.games.ioc_code(&self.code)
    }

    /// Returns the icon URL from the registry's template, or an empty string
    /// for an empty code.
    ///
    /// `{code}` is replaced by the lower-case code and `{code_upper}` by the
    /// upper-case code.
    #[must_use]
    pub fn icon_url(&self) -> String {
        if self.code.is_empty() {
            return String::new();
        }
        self.games
            .settings()
            .icon_url
            .replace("{code_upper}", &self.code.to_uppercase())
            .replace("{code}", &self.code.to_lowercase())
    }
}

impl fmt::Debug for Game<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("Game");
        debug.field("code", &self.code);
        if self.str_attr != StrAttr::Code {
            debug.field("str_attr", &self.str_attr);
        }
        debug.finish()
    }
}

impl fmt::Display for Game<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.str_attr {
            StrAttr::Code => f.write_str(&self.code),
            StrAttr::Name => f.write_str(&self.name()),
        }
    }
}

impl PartialEq for Game<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Game<'_> {}

impl Hash for Game<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl PartialEq<str> for Game<'_> {
    fn eq(&self, other: &str) -> bool {
        self.code == other
    }
}

impl PartialEq<&str> for Game<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.code == *other
    }
}

impl PartialEq<String> for Game<'_> {
    fn eq(&self, other: &String) -> bool {
        &self.code == other
    }
}

impl Serialize for Game<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Game", 5)?;
        state.serialize_field("code", &self.code)?;
        state.serialize_field("name", &self.name())?;
        state.serialize_field("alpha3", &self.alpha3())?;
        state.serialize_field("numeric", &self.numeric())?;
        state.serialize_field("ioc_code", &self.ioc_code())?;
        state.end()
    }
}

/// Escapes the five HTML special characters.
pub(crate) fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}
