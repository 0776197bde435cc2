//! Message catalog and the [`Translator`] seam.

use std::fmt;

use camino::Utf8Path;
use games_core::{fx_hash_map, FxHashMap};
use parking_lot::RwLock;
use tracing::{debug, info};

use crate::I18nError;

/// Language the registry's source strings are written in.
pub const SOURCE_LANGUAGE: &str = "en";

/// Translation of source strings into the active language.
pub trait Translator: Send + Sync + fmt::Debug {
    /// Returns the active language tag.
    fn language(&self) -> String;

    /// Activates `language` and returns the previously active tag.
    fn activate(&self, language: &str) -> String;

    /// Translates `message` into `language` without touching the active one.
    ///
    /// With `allow_fallback`, a missing translation yields `message` itself,
    /// so the result is never empty for a non-empty message. Without it, a
    /// missing translation yields an empty string.
    fn translate_in(&self, language: &str, message: &str, allow_fallback: bool) -> String;

    /// Translates `message` into the active language.
    fn translate(&self, message: &str, allow_fallback: bool) -> String {
        self.translate_in(&self.language(), message, allow_fallback)
    }
}

/// Scoped language switch.
///
/// Activates a language on creation and restores the previous one when
/// dropped, including during unwinding. The active language is shared by
/// every user of the translator, so concurrent callers that need a specific
/// language should use [`Translator::translate_in`] instead.
#[must_use = "the previous language is restored as soon as the guard is dropped"]
pub struct LanguageOverride<'a> {
    translator: &'a dyn Translator,
    previous: String,
}

impl<'a> LanguageOverride<'a> {
    /// Activates `language` on `translator` until the guard is dropped.
    pub fn new(translator: &'a dyn Translator, language: &str) -> Self {
        let previous = translator.activate(language);
        Self {
            translator,
            previous,
        }
    }
}

impl Drop for LanguageOverride<'_> {
    fn drop(&mut self) {
        self.translator.activate(&self.previous);
    }
}

/// In-memory message catalog keyed by language, then by source string.
///
/// Language tags are matched case-insensitively with `_` and `-` treated
/// alike; a regional tag (`de-at`) falls back to its primary language (`de`).
/// Empty translations count as missing.
#[derive(Debug)]
pub struct Catalog {
    messages: FxHashMap<String, FxHashMap<String, String>>,
    active: RwLock<String>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            messages: fx_hash_map(),
            active: RwLock::new(SOURCE_LANGUAGE.to_owned()),
        }
    }
}

impl Catalog {
    /// Creates an empty catalog with the source language active.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one translation.
    #[must_use]
    pub fn with_message(
        mut self,
        language: &str,
        message: impl Into<String>,
        translation: impl Into<String>,
    ) -> Self {
        self.insert(language, message, translation);
        self
    }

    /// Adds or replaces one translation.
    pub fn insert(
        &mut self,
        language: &str,
        message: impl Into<String>,
        translation: impl Into<String>,
    ) {
        self.messages
            .entry(normalize_tag(language))
            .or_default()
            .insert(message.into(), translation.into());
    }

    /// Parses a catalog from JSON text.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the text is not an object of
    /// objects of strings.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let raw: FxHashMap<String, FxHashMap<String, String>> = serde_json::from_str(json)?;
        let mut catalog = Self::new();
        for (language, messages) in raw {
            catalog
                .messages
                .entry(normalize_tag(&language))
                .or_default()
                .extend(messages);
        }
        Ok(catalog)
    }

    /// Loads a catalog file.
    ///
    /// # Errors
    ///
    /// Returns [`I18nError::Read`] or [`I18nError::Parse`].
    pub fn from_file(path: &Utf8Path) -> Result<Self, I18nError> {
        let contents =
            std::fs::read_to_string(path.as_std_path()).map_err(|source| I18nError::Read {
                path: path.to_owned(),
                source,
            })?;
        let catalog = Self::from_json(&contents).map_err(|source| I18nError::Parse {
            path: path.to_owned(),
            source,
        })?;
        info!(
            path = %path,
            languages = catalog.messages.len(),
            "Loaded translation catalog"
        );
        Ok(catalog)
    }

    /// Returns the languages with at least one translation, sorted.
    #[must_use]
    pub fn languages(&self) -> Vec<&str> {
        let mut languages: Vec<&str> = self.messages.keys().map(String::as_str).collect();
        languages.sort_unstable();
        languages
    }

    fn lookup(&self, language: &str, message: &str) -> Option<&str> {
        let tag = normalize_tag(language);
        let primary = tag.split('-').next().unwrap_or_default();
        [tag.as_str(), primary]
            .into_iter()
            .filter_map(|candidate| self.messages.get(candidate))
            .find_map(|messages| messages.get(message))
            .map(String::as_str)
            .filter(|translation| !translation.is_empty())
    }
}

impl Translator for Catalog {
    fn language(&self) -> String {
        self.active.read().clone()
    }

    fn activate(&self, language: &str) -> String {
        let previous = std::mem::replace(&mut *self.active.write(), language.to_owned());
        if previous != language {
            debug!(from = %previous, to = %language, "Switched active language");
        }
        previous
    }

    fn translate_in(&self, language: &str, message: &str, allow_fallback: bool) -> String {
        match self.lookup(language, message) {
            Some(translation) => translation.to_owned(),
            None if allow_fallback => message.to_owned(),
            None => String::new(),
        }
    }
}

fn normalize_tag(language: &str) -> String {
    language.trim().replace('_', "-").to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn german() -> Catalog {
        Catalog::new()
            .with_message("de", "Path of Exile", "Pfad des Exils")
            .with_message("de", "Tibia", "")
            .with_message("de-AT", "Tibia", "Tibia (AT)")
    }

    #[test]
    fn test_source_language_falls_back_to_message() {
        let catalog = german();
        assert_eq!(catalog.translate("Path of Exile", true), "Path of Exile");
        assert_eq!(catalog.translate("Path of Exile", false), "");
    }

    #[test]
    fn test_translation_in_active_language() {
        let catalog = german();
        catalog.activate("de");
        assert_eq!(catalog.translate("Path of Exile", false), "Pfad des Exils");
        assert_eq!(catalog.translate("Rust", true), "Rust");
        assert_eq!(catalog.translate("Rust", false), "");
    }

    #[test]
    fn test_empty_translation_counts_as_missing() {
        let catalog = german();
        catalog.activate("de");
        assert_eq!(catalog.translate("Tibia", false), "");
        assert_eq!(catalog.translate("Tibia", true), "Tibia");
    }

    #[test]
    fn test_regional_tag_falls_back_to_primary() {
        let catalog = german();
        catalog.activate("de_at");
        assert_eq!(catalog.translate("Tibia", false), "Tibia (AT)");
        assert_eq!(catalog.translate("Path of Exile", false), "Pfad des Exils");
    }

    #[test]
    fn test_translate_in_leaves_active_language() {
        let catalog = german();
        assert_eq!(catalog.translate_in("de", "Path of Exile", false), "Pfad des Exils");
        assert_eq!(catalog.translate_in("de-AT", "Tibia", false), "Tibia (AT)");
        assert_eq!(catalog.translate_in("fr", "Path of Exile", true), "Path of Exile");
        assert_eq!(catalog.language(), SOURCE_LANGUAGE);
        assert_eq!(catalog.translate("Path of Exile", false), "");
    }

    #[test]
    fn test_override_restores_previous_language() {
        let catalog = german();
        {
            let _guard = LanguageOverride::new(&catalog, "de");
            assert_eq!(catalog.language(), "de");
        }
        assert_eq!(catalog.language(), SOURCE_LANGUAGE);
    }

    #[test]
    fn test_override_restores_on_unwind() {
        let catalog = german();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = LanguageOverride::new(&catalog, "de");
            panic!("scan failed");
        }));
        assert!(result.is_err());
        assert_eq!(catalog.language(), SOURCE_LANGUAGE);
    }

    #[test]
    fn test_from_json() {
        let catalog =
            Catalog::from_json(r#"{"FR": {"Rust": "Rouille"}, "de": {"Rust": "Rost"}}"#).unwrap();
        assert_eq!(catalog.languages(), ["de", "fr"]);
        catalog.activate("fr");
        assert_eq!(catalog.translate("Rust", false), "Rouille");
    }

    #[test]
    fn test_from_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = camino::Utf8PathBuf::try_from(dir.path().join("games.json")).unwrap();

        let missing = Catalog::from_file(&path);
        assert!(matches!(missing, Err(I18nError::Read { .. })));

        std::fs::write(&path, "[1, 2]").unwrap();
        let malformed = Catalog::from_file(&path);
        assert!(matches!(malformed, Err(I18nError::Parse { .. })));
    }
}
