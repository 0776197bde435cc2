//! Configuration structures for the games registry.
//!
//! - [`GamesSettings`] - Process-wide defaults for every registry option
//! - [`GamesOptions`] - Per-instance overrides; a set option wins over the setting
//! - [`I18nConfig`] - Active language and translation catalog location
//! - [`Config`] - Root configuration combining all settings
//!
//! All configuration types implement [`Default`] and deserialize with
//! missing fields falling back to those defaults.

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

use crate::{ConfigError, FxIndexMap, GameName, Only};

/// Default icon URL template.
pub const DEFAULT_ICON_URL: &str = "icons/{code}.gif";

/// Process-wide registry settings.
///
/// # Examples
///
/// ```
/// use games_core::GamesSettings;
///
/// let settings = GamesSettings::default();
/// assert!(settings.common_names);
/// assert!(settings.first.is_empty());
/// assert_eq!(settings.icon_url, "icons/{code}.gif");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GamesSettings {
    /// Icon URL template; `{code}` is replaced by the lower-case code and
    /// `{code_upper}` by the upper-case code.
    pub icon_url: String,

    /// Whether to apply the friendly common-name overlay.
    pub common_names: bool,

    /// Final overlay of code to name; `null` removes the code.
    #[serde(rename = "override")]
    pub override_names: FxIndexMap<String, Option<GameName>>,

    /// Restriction/relabel of the entry set.
    pub only: Option<Only>,

    /// Codes surfaced before the sorted body.
    pub first: Vec<String>,

    /// Whether first codes appear again in the sorted body.
    pub first_repeat: bool,

    /// Separator label inserted after the first block.
    pub first_break: Option<String>,

    /// Sort the first block by translated name instead of keeping its order.
    pub first_sort: bool,
}

impl Default for GamesSettings {
    fn default() -> Self {
        Self {
            icon_url: DEFAULT_ICON_URL.to_owned(),
            common_names: true,
            override_names: FxIndexMap::default(),
            only: None,
            first: Vec::new(),
            first_repeat: false,
            first_break: None,
            first_sort: false,
        }
    }
}

impl GamesSettings {
    /// Validates option values that cannot be expressed in the type.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOption`] when the icon URL has no code
    /// placeholder.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.icon_url.contains("{code}") && !self.icon_url.contains("{code_upper}") {
            return Err(ConfigError::invalid_option(
                "icon_url",
                "must contain a {code} or {code_upper} placeholder",
            ));
        }
        Ok(())
    }
}

/// Per-instance option overrides.
///
/// Each field left as `None` falls back to the matching [`GamesSettings`]
/// field when the registry resolves its options.
///
/// # Examples
///
/// ```
/// use games_core::GamesOptions;
///
/// let options = GamesOptions::default()
///     .with_first(["WOW", "POE"])
///     .with_first_break("---");
/// assert_eq!(options.first.as_deref().map(<[String]>::len), Some(2));
/// assert_eq!(options.common_names, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GamesOptions {
    /// See [`GamesSettings::only`].
    pub only: Option<Only>,
    /// See [`GamesSettings::override_names`].
    #[serde(rename = "override")]
    pub override_names: Option<FxIndexMap<String, Option<GameName>>>,
    /// See [`GamesSettings::first`].
    pub first: Option<Vec<String>>,
    /// See [`GamesSettings::first_repeat`].
    pub first_repeat: Option<bool>,
    /// See [`GamesSettings::first_break`].
    pub first_break: Option<String>,
    /// See [`GamesSettings::first_sort`].
    pub first_sort: Option<bool>,
    /// See [`GamesSettings::common_names`].
    pub common_names: Option<bool>,
}

impl GamesOptions {
    /// Sets the `only` option.
    #[must_use]
    pub fn with_only(mut self, only: Only) -> Self {
        self.only = Some(only);
        self
    }

    /// Adds one `override` entry; `None` removes the code.
    #[must_use]
    pub fn with_override(mut self, code: impl Into<String>, name: Option<GameName>) -> Self {
        self.override_names
            .get_or_insert_with(FxIndexMap::default)
            .insert(code.into(), name);
        self
    }

    /// Sets the `first` codes.
    #[must_use]
    pub fn with_first<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.first = Some(codes.into_iter().map(Into::into).collect());
        self
    }

    /// Sets `first_repeat`.
    #[must_use]
    pub const fn with_first_repeat(mut self, repeat: bool) -> Self {
        self.first_repeat = Some(repeat);
        self
    }

    /// Sets the `first_break` label.
    #[must_use]
    pub fn with_first_break(mut self, label: impl Into<String>) -> Self {
        self.first_break = Some(label.into());
        self
    }

    /// Sets `first_sort`.
    #[must_use]
    pub const fn with_first_sort(mut self, sort: bool) -> Self {
        self.first_sort = Some(sort);
        self
    }

    /// Sets `common_names`.
    #[must_use]
    pub const fn with_common_names(mut self, enabled: bool) -> Self {
        self.common_names = Some(enabled);
        self
    }
}

/// Translation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    /// Language activated at startup.
    pub language: String,

    /// JSON translation catalog (`{"de": {"source": "translation"}}`).
    pub catalog: Option<Utf8PathBuf>,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            language: "en".to_owned(),
            catalog: None,
        }
    }
}

/// Root configuration.
///
/// # Examples
///
/// ```
/// use games_core::Config;
///
/// let config = Config::from_json(r#"{"games": {"first": ["WOW"]}}"#).unwrap();
/// assert_eq!(config.games.first, ["WOW"]);
/// assert_eq!(config.i18n.language, "en");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Registry settings.
    pub games: GamesSettings,

    /// Translation settings.
    pub i18n: I18nConfig,
}

impl Config {
    /// Parses and validates a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed JSON and
    /// [`ConfigError::InvalidOption`] on invalid values.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.games.validate()?;
        Ok(config)
    }

    /// Loads a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPath`] if `path` is not a file, and the
    /// errors of [`Config::from_json`] otherwise.
    pub fn from_file(path: &Utf8Path) -> Result<Self, ConfigError> {
        if !path.is_file() {
            return Err(ConfigError::InvalidPath {
                path: path.to_owned(),
                reason: "not a file".to_owned(),
            });
        }
        let contents = std::fs::read_to_string(path.as_std_path())?;
        Self::from_json(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_games_settings_defaults() {
        let settings = GamesSettings::default();
        assert_eq!(settings.icon_url, DEFAULT_ICON_URL);
        assert!(settings.common_names);
        assert!(settings.override_names.is_empty());
        assert!(settings.only.is_none());
        assert!(!settings.first_repeat);
        assert!(settings.first_break.is_none());
        assert!(!settings.first_sort);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_override_accepts_null() {
        let config =
            Config::from_json(r#"{"games": {"override": {"POE": null, "XX": "Custom"}}}"#)
                .unwrap();
        let overrides = &config.games.override_names;
        assert_eq!(overrides.get("POE"), Some(&None));
        assert_eq!(
            overrides.get("XX").and_then(Option::as_ref).map(GameName::current),
            Some("Custom")
        );
    }

    #[test]
    fn test_config_deserialize_with_missing_fields() {
        let config = Config::from_json(r#"{"i18n": {"language": "de"}}"#).unwrap();
        assert_eq!(config.i18n.language, "de");
        assert!(config.games.common_names);
    }

    #[test]
    fn test_invalid_icon_url() {
        let result = Config::from_json(r#"{"games": {"icon_url": "static/icon.png"}}"#);
        assert!(matches!(result, Err(ConfigError::InvalidOption { .. })));
    }

    #[test]
    fn test_options_builders() {
        let options = GamesOptions::default()
            .with_override("POE", None)
            .with_override("WOW", Some(GameName::from("Warcraft")))
            .with_first_sort(true)
            .with_common_names(false);
        let overrides = options.override_names.unwrap();
        assert_eq!(overrides.len(), 2);
        assert_eq!(options.first_sort, Some(true));
        assert_eq!(options.common_names, Some(false));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("games.json");
        std::fs::write(&path, r#"{"games": {"first_break": "---"}}"#).unwrap();
        let path = Utf8PathBuf::try_from(path).unwrap();
        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.games.first_break.as_deref(), Some("---"));
    }

    #[test]
    fn test_from_file_missing() {
        let result = Config::from_file(Utf8Path::new("/definitely/not/here.json"));
        assert!(matches!(result, Err(ConfigError::InvalidPath { .. })));
    }
}
