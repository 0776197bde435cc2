//! Choice-field helper.
//!
//! [`GameField`] holds the rules a storage column or a form/serializer field
//! applies to game codes: cleaning raw input, preparing the stored text,
//! validating against the registry, rendering the choice list, and
//! converting to and from a JSON representation.

use games_core::GameTuple;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::FieldError;
use crate::game::{Game, StrAttr};
use crate::registry::Games;
use crate::search::SearchOptions;

/// Label of the blank choice when none is configured.
pub const BLANK_LABEL: &str = "---------";

/// JSON shape produced by [`GameField::to_representation`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Representation {
    /// The canonical code.
    #[default]
    Code,
    /// The translated name only.
    Name,
    /// `{"code": ..., "name": ...}`.
    Dict,
}

/// A cleaned field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// No value.
    Null,
    /// One code.
    Single(String),
    /// Several codes (multiple fields only).
    Multiple(Vec<String>),
}

/// A game choice field bound to a registry.
///
/// # Examples
///
/// ```
/// use games_registry::{FieldValue, GameField, Games};
///
/// let games = Games::new();
/// let field = GameField::new(&games).with_multiple(true);
///
/// let value = field.clean(Some("WOW,POE"));
/// assert_eq!(field.prep_value(&value).as_deref(), Some("WOW,POE"));
/// assert!(field.validate(&value).is_ok());
///
/// let invalid = field.clean(Some("WOW,XX"));
/// assert!(field.validate(&invalid).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct GameField<'a> {
    games: &'a Games,
    multiple: bool,
    blank: bool,
    blank_label: Option<String>,
    max_length: Option<usize>,
    representation: Representation,
    str_attr: StrAttr,
}

impl<'a> GameField<'a> {
    /// Creates a single-valued, required field.
    #[must_use]
    pub const fn new(games: &'a Games) -> Self {
        Self {
            games,
            multiple: false,
            blank: false,
            blank_label: None,
            max_length: None,
            representation: Representation::Code,
            str_attr: StrAttr::Code,
        }
    }

    /// Stores several codes as one comma-joined string.
    #[must_use]
    pub const fn with_multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    /// Allows an empty value.
    #[must_use]
    pub const fn with_blank(mut self, blank: bool) -> Self {
        self.blank = blank;
        self
    }

    /// Sets the label of the blank choice.
    #[must_use]
    pub fn with_blank_label(mut self, label: impl Into<String>) -> Self {
        self.blank_label = Some(label.into());
        self
    }

    /// Sets an explicit maximum stored length.
    #[must_use]
    pub const fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Sets the JSON representation.
    #[must_use]
    pub const fn with_representation(mut self, representation: Representation) -> Self {
        self.representation = representation;
        self
    }

    /// Sets how [`Game`] values produced by this field render.
    #[must_use]
    pub const fn with_str_attr(mut self, str_attr: StrAttr) -> Self {
        self.str_attr = str_attr;
        self
    }

    /// Returns `true` for a multiple field.
    #[must_use]
    pub const fn is_multiple(&self) -> bool {
        self.multiple
    }

    /// Returns the maximum stored length.
    ///
    /// Unless set explicitly, this is the longest code, or for a multiple
    /// field every code joined with separators.
    #[must_use]
    pub fn max_length(&self) -> usize {
        if let Some(max_length) = self.max_length {
            return max_length;
        }
        let codes = self.games.codes();
        if self.multiple {
            let total: usize = codes.iter().map(String::len).sum();
            (self.games.len() + total).saturating_sub(1)
        } else {
            codes.iter().map(String::len).max().unwrap_or_default()
        }
    }

    /// Cleans raw stored or submitted text.
    ///
    /// A multiple field splits on commas and drops empty items.
    #[must_use]
    pub fn clean(&self, raw: Option<&str>) -> FieldValue {
        match raw {
            None => FieldValue::Null,
            Some(raw) if self.multiple => FieldValue::Multiple(
                raw.split(',')
                    .filter(|code| !code.is_empty())
                    .map(str::to_owned)
                    .collect(),
            ),
            Some(raw) => FieldValue::Single(raw.to_owned()),
        }
    }

    /// Cleans a list of codes for a multiple field, dropping empty items.
    #[must_use]
    pub fn clean_codes<I, S>(&self, codes: I) -> FieldValue
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldValue::Multiple(
            codes
                .into_iter()
                .map(Into::into)
                .filter(|code| !code.is_empty())
                .collect(),
        )
    }

    /// Returns the text to store, `None` for a null value.
    #[must_use]
    pub fn prep_value(&self, value: &FieldValue) -> Option<String> {
        match value {
            FieldValue::Null => None,
            FieldValue::Single(code) => Some(code.clone()),
            FieldValue::Multiple(codes) => Some(codes.join(",")),
        }
    }

    /// Validates a cleaned value against the registry.
    ///
    /// # Errors
    ///
    /// - [`FieldError::NullNotAllowed`] for a null value on a multiple field
    /// - [`FieldError::Blank`] for an empty value on a required field
    /// - [`FieldError::InvalidChoice`] for a code not in the registry
    pub fn validate(&self, value: &FieldValue) -> Result<(), FieldError> {
        let codes: &[String] = match value {
            FieldValue::Null if self.multiple => return Err(FieldError::NullNotAllowed),
            FieldValue::Null => &[],
            FieldValue::Single(code) if code.is_empty() => &[],
            FieldValue::Single(code) => std::slice::from_ref(code),
            FieldValue::Multiple(codes) => codes,
        };
        if codes.is_empty() {
            return if self.blank {
                Ok(())
            } else {
                Err(FieldError::Blank)
            };
        }
        match codes.iter().find(|code| !self.games.contains(code)) {
            Some(code) => Err(FieldError::InvalidChoice(code.clone())),
            None => Ok(()),
        }
    }

    /// Returns the choice list, headed by a blank choice when requested.
    ///
    /// Multiple fields never get a blank choice, and neither does a list
    /// that already has an entry with an empty code (the first-block
    /// separator).
    #[must_use]
    pub fn choices(&self, include_blank: bool) -> Vec<GameTuple> {
        let choices: Vec<GameTuple> = self.games.choices().collect();
        if !include_blank || self.multiple || choices.iter().any(GameTuple::is_separator) {
            return choices;
        }
        let label = self.blank_label.as_deref().unwrap_or(BLANK_LABEL);
        std::iter::once(GameTuple::new("", label))
            .chain(choices)
            .collect()
    }

    /// Wraps a stored code as a [`Game`].
    #[must_use]
    pub fn game(&self, code: &str) -> Game<'a> {
        Game::new(code, self.games).with_str_attr(self.str_attr)
    }

    /// Wraps every code of a cleaned value as a [`Game`].
    #[must_use]
    pub fn games(&self, value: &FieldValue) -> Vec<Game<'a>> {
        match value {
            FieldValue::Null => Vec::new(),
            FieldValue::Single(code) => vec![self.game(code)],
            FieldValue::Multiple(codes) => codes.iter().map(|code| self.game(code)).collect(),
        }
    }

    /// Renders a code for output. Unknown codes render as an empty string.
    #[must_use]
    pub fn to_representation(&self, code: &str) -> Value {
        let canonical = self.games.alpha2(code);
        if canonical.is_empty() {
            return Value::String(String::new());
        }
        match self.representation {
            Representation::Code => Value::String(canonical),
            Representation::Name => Value::String(self.games.name(&canonical)),
            Representation::Dict => {
                let name = self.games.name(&canonical);
                json!({ "code": canonical, "name": name })
            }
        }
    }

    /// Converts submitted data to a canonical code.
    ///
    /// Accepts a code (canonical or alternate), a `{"code": ...}` object, or a
    /// game name. An empty string is accepted only on a blank field.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::InvalidChoice`] when nothing resolves.
    pub fn to_internal_value(&self, data: &Value) -> Result<String, FieldError> {
        let data = match data {
            Value::Object(object) => object.get("code"),
            other => Some(other),
        };
        let text = match data {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(text)) => text.clone(),
            Some(Value::Number(number)) => number.to_string(),
            Some(other) => return Err(FieldError::InvalidChoice(other.to_string())),
        };
        if text.is_empty() {
            return if self.blank {
                Ok(text)
            } else {
                Err(FieldError::InvalidChoice(text))
            };
        }

        let code = self.games.alpha2(&text);
        if !code.is_empty() {
            return Ok(code);
        }
        let code = self.games.by_name(&text, &SearchOptions::default());
        if code.is_empty() {
            Err(FieldError::InvalidChoice(text))
        } else {
            Ok(code)
        }
    }
}

#[cfg(test)]
mod tests {
    use games_core::{GamesOptions, Only};

    use super::*;

    fn two_games() -> Games {
        Games::new().with_options(
            GamesOptions::default().with_only(["WOW", "POE"].into_iter().collect::<Only>()),
        )
    }

    #[test]
    fn test_max_length() {
        let games = two_games();
        assert_eq!(GameField::new(&games).max_length(), 3);
        assert_eq!(GameField::new(&games).with_multiple(true).max_length(), 7);
        assert_eq!(GameField::new(&games).with_max_length(2).max_length(), 2);
    }

    #[test]
    fn test_clean_and_prep_multiple() {
        let games = two_games();
        let field = GameField::new(&games).with_multiple(true);
        let value = field.clean(Some("WOW,,POE"));
        assert_eq!(
            value,
            FieldValue::Multiple(vec!["WOW".to_owned(), "POE".to_owned()])
        );
        assert_eq!(field.prep_value(&value).as_deref(), Some("WOW,POE"));
        assert_eq!(
            field.prep_value(&field.clean_codes(Vec::<String>::new())).as_deref(),
            Some("")
        );
        assert_eq!(field.prep_value(&FieldValue::Null), None);
    }

    #[test]
    fn test_validate() {
        let games = two_games();
        let field = GameField::new(&games);
        assert!(field.validate(&field.clean(Some("POE"))).is_ok());
        assert_eq!(
            field.validate(&field.clean(Some("TIB"))),
            Err(FieldError::InvalidChoice("TIB".to_owned()))
        );
        assert_eq!(field.validate(&field.clean(Some(""))), Err(FieldError::Blank));
        assert!(field.clone().with_blank(true).validate(&FieldValue::Null).is_ok());

        let multiple = GameField::new(&games).with_multiple(true);
        assert_eq!(
            multiple.validate(&FieldValue::Null),
            Err(FieldError::NullNotAllowed)
        );
        assert_eq!(
            multiple.validate(&multiple.clean_codes(["WOW", "TIB"])),
            Err(FieldError::InvalidChoice("TIB".to_owned()))
        );
    }

    #[test]
    fn test_choices_with_blank() {
        let games = two_games();
        let field = GameField::new(&games);
        let rendered: Vec<String> = field.choices(true).iter().map(ToString::to_string).collect();
        insta::assert_snapshot!(rendered.join("\n"), @r#"
        ("", "---------")
        ("POE", "Path of Exile")
        ("WOW", "World of Warcraft")
        "#);

        let labeled = field.clone().with_blank_label("(none)").choices(true);
        assert_eq!(labeled[0], GameTuple::new("", "(none)"));
        assert_eq!(field.choices(false).len(), 2);
        assert_eq!(field.with_multiple(true).choices(true).len(), 2);
    }

    #[test]
    fn test_choices_separator_counts_as_blank() {
        let games = Games::new().with_options(
            GamesOptions::default()
                .with_only(["WOW", "POE"].into_iter().collect())
                .with_first(["POE"])
                .with_first_break("---"),
        );
        let choices = GameField::new(&games).choices(true);
        assert_eq!(choices.len(), 3);
        assert_eq!(choices[0].code, "POE");
    }

    #[test]
    fn test_to_representation() {
        let games = two_games();
        let field = GameField::new(&games);
        assert_eq!(field.to_representation("wow"), json!("WOW"));
        assert_eq!(field.to_representation("nope"), json!(""));

        let name_only = field.clone().with_representation(Representation::Name);
        assert_eq!(name_only.to_representation("POE"), json!("Path of Exile"));

        let dict = field.with_representation(Representation::Dict);
        assert_eq!(
            dict.to_representation("POE"),
            json!({"code": "POE", "name": "Path of Exile"})
        );
    }

    #[test]
    fn test_to_internal_value() {
        let games = two_games();
        let field = GameField::new(&games);
        assert_eq!(field.to_internal_value(&json!("wow")), Ok("WOW".to_owned()));
        assert_eq!(field.to_internal_value(&json!(329)), Ok("POE".to_owned()));
        assert_eq!(field.to_internal_value(&json!({"code": "POE"})), Ok("POE".to_owned()));
        assert_eq!(
            field.to_internal_value(&json!("path of exile")),
            Ok("POE".to_owned())
        );
        assert_eq!(
            field.to_internal_value(&json!("nope")),
            Err(FieldError::InvalidChoice("nope".to_owned()))
        );
        assert_eq!(
            field.to_internal_value(&json!("")),
            Err(FieldError::InvalidChoice(String::new()))
        );
        assert_eq!(
            field.with_blank(true).to_internal_value(&json!("")),
            Ok(String::new())
        );
    }

    #[test]
    fn test_games_wrap_codes() {
        let games = two_games();
        let field = GameField::new(&games)
            .with_multiple(true)
            .with_str_attr(StrAttr::Name);
        let wrapped = field.games(&field.clean(Some("wow,POE")));
        let rendered: Vec<String> = wrapped.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, ["World of Warcraft", "Path of Exile"]);
    }
}
