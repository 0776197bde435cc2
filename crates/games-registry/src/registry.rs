//! The [`Games`] registry.
//!
//! A `Games` instance owns its configuration and a lazily built
//! [`Snapshot`](crate::snapshot) of the effective entry set. Every lookup
//! goes through the snapshot; [`Games::invalidate`] drops it so the next
//! access rebuilds from the current settings and the static tables.
//!
//! # Example
//!
//! ```
//! use games_core::GamesOptions;
//! use games_registry::Games;
//!
//! let games = Games::new().with_options(
//!     GamesOptions::default()
//!         .with_only(["WOW", "POE"].into_iter().collect())
//!         .with_first(["WOW"])
//!         .with_first_break("---"),
//! );
//!
//! let names: Vec<_> = games.choices().map(|choice| choice.name).collect();
//! assert_eq!(names, ["World of Warcraft", "---", "Path of Exile"]);
//! assert_eq!(games.alpha2("wow"), "WOW");
//! assert_eq!(games.len(), 4);
//! ```

use std::borrow::Cow;
use std::fmt;
use std::ops::{Bound, RangeBounds};
use std::sync::Arc;

use games_core::{fx_hash_set, FxHashSet, GameName, GameTuple, GamesOptions, GamesSettings};
use games_i18n::{sort_key, Catalog, Translator};
use parking_lot::RwLock;
use tracing::{debug, error, info};

use crate::error::RegistryError;
use crate::options::ResolvedOptions;
use crate::snapshot::Snapshot;

/// A lazily built, cached registry of game codes and display names.
///
/// Configuration comes from two layers: process-wide [`GamesSettings`] and
/// per-instance [`GamesOptions`], the latter taking precedence option by
/// option. The effective entry set is built once on first use and memoized
/// until [`invalidate`](Self::invalidate) or
/// [`reconfigure`](Self::reconfigure).
///
/// Lookups never fail. A code that does not resolve yields an empty string
/// (or `None`), and a configuration that cannot be built is logged and
/// answered from an empty registry; call [`ensure_built`](Self::ensure_built)
/// at startup to surface such errors instead.
///
/// # Thread Safety
///
/// `Games` is `Send + Sync`. The build is guarded by a lock and runs at most
/// once per invalidation, even when several threads race for it.
#[derive(Debug)]
pub struct Games {
    /// Process-wide defaults.
    settings: RwLock<Arc<GamesSettings>>,

    /// Instance options.
    options: GamesOptions,

    /// Translation collaborator.
    translator: Arc<dyn Translator>,

    /// The memoized snapshot, `None` until first use.
    cache: RwLock<Option<Arc<Snapshot>>>,
}

impl Default for Games {
    fn default() -> Self {
        Self {
            settings: RwLock::new(Arc::new(GamesSettings::default())),
            options: GamesOptions::default(),
            translator: Arc::new(Catalog::new()),
            cache: RwLock::new(None),
        }
    }
}

impl Games {
    /// Creates a registry with default settings, no instance options, and an
    /// empty translation catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the process-wide settings.
    #[must_use]
    pub fn with_settings(mut self, settings: GamesSettings) -> Self {
        *self.settings.get_mut() = Arc::new(settings);
        *self.cache.get_mut() = None;
        self
    }

    /// Replaces the instance options.
    #[must_use]
    pub fn with_options(mut self, options: GamesOptions) -> Self {
        self.options = options;
        *self.cache.get_mut() = None;
        self
    }

    /// Replaces the translator.
    #[must_use]
    pub fn with_translator(mut self, translator: Arc<dyn Translator>) -> Self {
        self.translator = translator;
        *self.cache.get_mut() = None;
        self
    }

    /// Returns the translator.
    #[must_use]
    pub fn translator(&self) -> &dyn Translator {
        self.translator.as_ref()
    }

    /// Returns the current process-wide settings.
    #[must_use]
    pub fn settings(&self) -> Arc<GamesSettings> {
        Arc::clone(&self.settings.read())
    }

    /// Returns the options in effect: each instance option when set,
    /// otherwise the matching setting.
    #[must_use]
    pub fn options(&self) -> ResolvedOptions {
        ResolvedOptions::resolve(&self.options, &self.settings.read())
    }

    /// Builds the effective entry set if it is not built yet.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownCode`] if `only` names a code missing
    /// from the static table.
    pub fn ensure_built(&self) -> Result<(), RegistryError> {
        self.try_snapshot().map(drop)
    }

    /// Drops the memoized entry set, alternate codes, IOC codes, and shadowed
    /// names together. The next access rebuilds them.
    pub fn invalidate(&self) {
        if self.cache.write().take().is_some() {
            debug!("Invalidated games registry");
        }
    }

    /// Replaces the process-wide settings and invalidates the registry.
    pub fn reconfigure(&self, settings: GamesSettings) {
        *self.settings.write() = Arc::new(settings);
        self.invalidate();
        info!("Reconfigured games registry");
    }

    /// Returns the built snapshot, rebuilding over a cached failure.
    pub(crate) fn try_snapshot(&self) -> Result<Arc<Snapshot>, RegistryError> {
        if let Some(snapshot) = self.cached(false) {
            return Ok(snapshot);
        }

        let mut cache = self.cache.write();
        if let Some(snapshot) = cache.as_ref().filter(|snapshot| !snapshot.degraded) {
            return Ok(Arc::clone(snapshot));
        }
        let snapshot = Arc::new(Snapshot::build(self.options())?);
        *cache = Some(Arc::clone(&snapshot));
        Ok(snapshot)
    }

    /// Returns the cached snapshot, building it on first use.
    ///
    /// A failed build is logged once and cached as an empty snapshot until
    /// the next invalidation.
    pub(crate) fn snapshot(&self) -> Arc<Snapshot> {
        if let Some(snapshot) = self.cached(true) {
            return snapshot;
        }

        let mut cache = self.cache.write();
        if let Some(snapshot) = cache.as_ref() {
            return Arc::clone(snapshot);
        }
        let snapshot = match Snapshot::build(self.options()) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                error!(
                    error = %err,
                    "Games registry failed to build; answering from an empty registry"
                );
                Snapshot::degraded()
            }
        };
        let snapshot = Arc::new(snapshot);
        *cache = Some(Arc::clone(&snapshot));
        snapshot
    }

    fn cached(&self, allow_degraded: bool) -> Option<Arc<Snapshot>> {
        self.cache
            .read()
            .as_ref()
            .filter(|snapshot| allow_degraded || !snapshot.degraded)
            .map(Arc::clone)
    }

    /// Normalizes any code-like value to its canonical code.
    ///
    /// The input is upper-cased. A code present in the registry is returned
    /// as is; otherwise an all-digit input is resolved as a numeric code and
    /// a three-character input as an alpha3 code. Returns an empty string
    /// when nothing resolves.
    ///
    /// # Examples
    ///
    /// ```
    /// use games_registry::Games;
    ///
    /// let games = Games::new();
    /// assert_eq!(games.alpha2("poe"), "POE");
    /// assert_eq!(games.alpha2("DIA"), "D1");
    /// assert_eq!(games.alpha2(100), "WOW");
    /// assert_eq!(games.alpha2("999"), "");
    /// ```
    #[must_use]
    pub fn alpha2(&self, code: impl fmt::Display) -> String {
        self.snapshot()
            .alpha2(&code.to_string())
            .map(str::to_owned)
            .unwrap_or_default()
    }

    /// Returns the translated current name of a code, or an empty string.
    #[must_use]
    pub fn name(&self, code: impl fmt::Display) -> String {
        let snapshot = self.snapshot();
        snapshot
            .alpha2(&code.to_string())
            .and_then(|canonical| self.pair(&snapshot, canonical))
            .map(|pair| pair.name)
            .unwrap_or_default()
    }

    /// Returns the three-letter alternate code, or an empty string.
    #[must_use]
    pub fn alpha3(&self, code: impl fmt::Display) -> String {
        let snapshot = self.snapshot();
        snapshot
            .alpha2(&code.to_string())
            .and_then(|canonical| snapshot.alt_codes.get(canonical))
            .map(|alt| alt.alpha3.to_string())
            .unwrap_or_default()
    }

    /// Returns the numeric alternate code.
    #[must_use]
    pub fn numeric(&self, code: impl fmt::Display) -> Option<u16> {
        let snapshot = self.snapshot();
        snapshot
            .alpha2(&code.to_string())
            .and_then(|canonical| snapshot.alt_codes.get(canonical))
            .and_then(|alt| alt.numeric)
    }

    /// Returns the numeric alternate code as a zero-padded three character
    /// string.
    ///
    /// # Examples
    ///
    /// ```
    /// use games_registry::Games;
    ///
    /// let games = Games::new();
    /// assert_eq!(games.numeric("WOW"), Some(100));
    /// assert_eq!(games.numeric_padded("WOW").as_deref(), Some("100"));
    /// assert_eq!(games.numeric_padded("nope"), None);
    /// ```
    #[must_use]
    pub fn numeric_padded(&self, code: impl fmt::Display) -> Option<String> {
        self.numeric(code).map(|numeric| format!("{numeric:03}"))
    }

    /// Returns the IOC-style alias of a code, or an empty string.
    #[must_use]
    pub fn ioc_code(&self, code: impl fmt::Display) -> String {
        let snapshot = self.snapshot();
        snapshot
            .alpha2(&code.to_string())
            .and_then(|canonical| snapshot.ioc_codes.get(canonical))
            .map(|alias| alias.to_string())
            .unwrap_or_default()
    }

    /// Resolves an IOC-style alias, current or historical, to its canonical
    /// code. Returns an empty string when the alias is unknown or its code is
    /// not in the registry.
    ///
    /// # Examples
    ///
    /// ```
    /// use games_registry::Games;
    ///
    /// let games = Games::new();
    /// assert_eq!(games.by_ioc_code("tbc"), "TBCC");
    /// assert_eq!(games.by_ioc_code("DIAB"), "D1");
    /// assert_eq!(games.by_ioc_code("NOPE"), "");
    /// ```
    #[must_use]
    pub fn by_ioc_code(&self, alias: &str) -> String {
        let snapshot = self.snapshot();
        snapshot
            .ioc_aliases
            .get(alias.trim().to_uppercase().as_str())
            .filter(|code| snapshot.entries.contains_key(code.as_str()))
            .cloned()
            .unwrap_or_default()
    }

    /// Returns the `(code, name)` pair of a code, its name translated with
    /// the fallback chain.
    ///
    /// When the current name has no translation in the active language, the
    /// first translated historical or shadowed name is used; if none has one
    /// either, the untranslated current name is.
    #[must_use]
    pub fn translate_pair(&self, code: impl fmt::Display) -> Option<GameTuple> {
        let snapshot = self.snapshot();
        let canonical = snapshot.alpha2(&code.to_string())?;
        self.pair(&snapshot, canonical)
    }

    /// Returns one translated pair per name of a code, current first.
    ///
    /// With `ignore_first`, the current name is skipped, leaving only the
    /// historical names of a versioned entry.
    #[must_use]
    pub fn translate_code(&self, code: impl fmt::Display, ignore_first: bool) -> Vec<GameTuple> {
        let snapshot = self.snapshot();
        snapshot
            .alpha2(&code.to_string())
            .and_then(|canonical| snapshot.entries.get_key_value(canonical))
            .map(|(canonical, name)| self.expand(&snapshot, canonical, name, ignore_first))
            .unwrap_or_default()
    }

    /// Returns the effective codes, in registry order.
    #[must_use]
    pub fn codes(&self) -> Vec<String> {
        self.snapshot().entries.keys().cloned().collect()
    }

    /// Returns the normalized pinned codes, in configured order.
    #[must_use]
    pub fn first(&self) -> Vec<String> {
        self.snapshot().first.clone()
    }

    /// Returns the choice list: pinned codes, an optional separator, then
    /// every entry sorted by translated name.
    ///
    /// The list is rendered in the active language when this is called.
    pub fn choices(&self) -> Choices {
        let snapshot = self.snapshot();
        let options = &snapshot.options;

        let mut head: Vec<GameTuple> = snapshot
            .first
            .iter()
            .filter_map(|code| self.pair(&snapshot, code))
            .collect();
        if options.first_sort {
            head.sort_by_cached_key(|pair| sort_key(&pair.name));
        }
        if let Some(label) = options.first_break.as_deref().filter(|_| snapshot.has_break()) {
            head.push(GameTuple::new("", self.translator.translate(label, true)));
        }

        let pinned: FxHashSet<&str> = if options.first_repeat {
            fx_hash_set()
        } else {
            snapshot.first.iter().map(String::as_str).collect()
        };
        let mut body: Vec<GameTuple> = snapshot
            .entries
            .iter()
            .flat_map(|(code, name)| {
                self.expand(&snapshot, code, name, pinned.contains(code.as_str()))
            })
            .collect();
        body.sort_by_cached_key(|pair| sort_key(&pair.name));

        head.extend(body);
        Choices {
            inner: head.into_iter(),
        }
    }

    /// Returns the number of effective entries, plus the pinned codes and
    /// the separator when present.
    #[must_use]
    pub fn len(&self) -> usize {
        let snapshot = self.snapshot();
        snapshot.entries.len() + snapshot.first.len() + usize::from(snapshot.has_break())
    }

    /// Returns `true` if the effective entry set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshot().entries.is_empty()
    }

    /// Returns `true` if `code` is an effective code. No normalization is
    /// applied.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.snapshot().entries.contains_key(code)
    }

    /// Returns the choice at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<GameTuple> {
        self.choices().nth(index)
    }

    /// Returns the choices within `range`.
    #[must_use]
    pub fn slice(&self, range: impl RangeBounds<usize>) -> Vec<GameTuple> {
        let start = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&end) => end.saturating_add(1),
            Bound::Excluded(&end) => end,
            Bound::Unbounded => usize::MAX,
        };
        self.choices()
            .skip(start)
            .take(end.saturating_sub(start))
            .collect()
    }

    pub(crate) fn pair(&self, snapshot: &Snapshot, code: &str) -> Option<GameTuple> {
        let (code, name) = snapshot.entries.get_key_value(code)?;
        let (current, fallbacks): (&str, &[Cow<'static, str>]) = match name {
            GameName::Simple(name) => (name.as_ref(), snapshot.shadowed(code)),
            GameName::Versioned(versioned) => (versioned.current(), versioned.history()),
        };
        Some(GameTuple::new(
            code.as_str(),
            self.translate_with_fallbacks(current, fallbacks),
        ))
    }

    fn expand(
        &self,
        snapshot: &Snapshot,
        code: &str,
        name: &GameName,
        ignore_first: bool,
    ) -> Vec<GameTuple> {
        let skip = usize::from(ignore_first);
        let fallbacks = snapshot.shadowed(code);
        name.names()
            .iter()
            .skip(skip)
            .map(|name| GameTuple::new(code, self.translate_with_fallbacks(name, fallbacks)))
            .collect()
    }

    fn translate_with_fallbacks(&self, name: &str, fallbacks: &[Cow<'static, str>]) -> String {
        if !fallbacks.is_empty() {
            let translated = self.translator.translate(name, false);
            if !translated.is_empty() {
                return translated;
            }
            if let Some(translated) = fallbacks
                .iter()
                .map(|fallback| self.translator.translate(fallback, false))
                .find(|translated| !translated.is_empty())
            {
                return translated;
            }
        }
        self.translator.translate(name, true)
    }
}

impl IntoIterator for &Games {
    type Item = GameTuple;
    type IntoIter = Choices;

    fn into_iter(self) -> Self::IntoIter {
        self.choices()
    }
}

/// Iterator over the choice list of a [`Games`] registry.
///
/// Created by [`Games::choices`]. The names are rendered eagerly when the
/// iterator is created; iterating again means calling `choices` again.
#[derive(Debug, Clone)]
pub struct Choices {
    inner: std::vec::IntoIter<GameTuple>,
}

impl Iterator for Choices {
    type Item = GameTuple;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.inner.nth(n)
    }
}

impl ExactSizeIterator for Choices {}

impl std::iter::FusedIterator for Choices {}

#[cfg(test)]
mod tests {
    use std::thread;

    use games_core::{Only, VersionedName};
    use games_i18n::SOURCE_LANGUAGE;

    use super::*;

    fn two_games() -> Games {
        Games::new().with_options(GamesOptions::default().with_only(
            ["WOW", "POE"].into_iter().collect::<Only>(),
        ))
    }

    fn render(games: &Games) -> String {
        games
            .choices()
            .map(|choice| choice.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_iterates_sorted_by_name() {
        insta::assert_snapshot!(render(&two_games()), @r#"
        ("POE", "Path of Exile")
        ("WOW", "World of Warcraft")
        "#);
    }

    #[test]
    fn test_first_block_with_break() {
        let games = Games::new().with_options(
            GamesOptions::default()
                .with_only(["WOW", "POE"].into_iter().collect())
                .with_first(["WOW"])
                .with_first_break("---"),
        );
        insta::assert_snapshot!(render(&games), @r#"
        ("WOW", "World of Warcraft")
        ("", "---")
        ("POE", "Path of Exile")
        "#);
        assert_eq!(games.len(), 4);
    }

    #[test]
    fn test_first_repeat() {
        let games = Games::new().with_options(
            GamesOptions::default()
                .with_only(["WOW", "POE"].into_iter().collect())
                .with_first(["WOW"])
                .with_first_repeat(true),
        );
        insta::assert_snapshot!(render(&games), @r#"
        ("WOW", "World of Warcraft")
        ("POE", "Path of Exile")
        ("WOW", "World of Warcraft")
        "#);
        assert_eq!(games.len(), 3);
    }

    #[test]
    fn test_first_sort() {
        let options = GamesOptions::default()
            .with_only(["WOW", "POE", "TIB"].into_iter().collect())
            .with_first(["WOW", "POE"]);
        let unsorted = Games::new().with_options(options.clone());
        let sorted = Games::new().with_options(options.with_first_sort(true));

        let codes = |games: &Games| -> Vec<String> {
            games.choices().map(|choice| choice.code).collect()
        };
        assert_eq!(codes(&unsorted), ["WOW", "POE", "TIB"]);
        assert_eq!(codes(&sorted), ["POE", "WOW", "TIB"]);
    }

    #[test]
    fn test_break_needs_first_codes() {
        let games = Games::new().with_options(
            GamesOptions::default()
                .with_only(["WOW", "POE"].into_iter().collect())
                .with_first(["NOPE"])
                .with_first_break("---"),
        );
        assert!(games.choices().all(|choice| !choice.is_separator()));
        assert_eq!(games.len(), 2);
    }

    #[test]
    fn test_override_to_none_removes_code() {
        let games = Games::new();
        let before = games.len();
        let games = games.with_options(GamesOptions::default().with_override("POE", None));
        assert!(!games.contains("POE"));
        assert_eq!(games.len(), before - 1);
        assert!(games.choices().all(|choice| choice.code != "POE"));
        assert_eq!(games.name("POE"), "");
    }

    #[test]
    fn test_alpha2_idempotent_and_case_insensitive() {
        let games = Games::new();
        for code in games.codes() {
            assert_eq!(games.alpha2(&code), code);
            assert_eq!(games.alpha2(code.to_lowercase()), code);
        }
    }

    #[test]
    fn test_alternate_codes_round_trip() {
        let games = Games::new();
        for (code, alpha3, numeric) in crate::data::ALT_CODES {
            assert_eq!(games.alpha2(alpha3), *code);
            assert_eq!(games.alpha3(code), *alpha3);
            assert_eq!(games.numeric(code), Some(*numeric));
            assert_eq!(games.numeric_padded(code), Some(format!("{numeric:03}")));
            assert_eq!(games.alpha2(numeric), *code);
        }
    }

    #[test]
    fn test_unresolvable_lookups_are_empty() {
        let games = Games::new();
        assert_eq!(games.alpha2("999"), "");
        assert_eq!(games.name("nope"), "");
        assert_eq!(games.alpha3("nope"), "");
        assert_eq!(games.numeric("nope"), None);
        assert_eq!(games.ioc_code("nope"), "");
        assert!(games.translate_pair("nope").is_none());
        assert!(games.translate_code("nope", false).is_empty());
    }

    #[test]
    fn test_ioc_code_and_reverse() {
        let games = Games::new();
        let alias = games.ioc_code("TBCC");
        assert!(!alias.is_empty());
        assert_eq!(games.by_ioc_code(&alias), "TBCC");
    }

    #[test]
    fn test_unknown_only_code() {
        let games = Games::new().with_options(
            GamesOptions::default().with_only(["WOW", "NOPE"].into_iter().collect()),
        );
        let err = games.ensure_built().unwrap_err();
        assert!(err.is_config());
        assert!(games.is_empty());
        assert_eq!(games.alpha2("WOW"), "");
    }

    #[test]
    fn test_failed_build_is_cached_until_reconfigured() {
        let settings = GamesSettings {
            only: Some(["NOPE"].into_iter().collect()),
            ..GamesSettings::default()
        };
        let games = Games::new().with_settings(settings);
        assert_eq!(games.alpha2("WOW"), "");
        assert!(Arc::ptr_eq(&games.snapshot(), &games.snapshot()));
        assert!(games.ensure_built().is_err());
        assert!(games.is_empty());

        games.reconfigure(GamesSettings::default());
        assert!(games.ensure_built().is_ok());
        assert_eq!(games.alpha2("WOW"), "WOW");
    }

    #[test]
    fn test_translation_falls_back_to_shadowed_name() {
        let catalog = Catalog::new().with_message("de", "Blade & Soul", "Klinge und Seele");
        catalog.activate("de");
        let games = Games::new().with_translator(Arc::new(catalog));
        assert_eq!(games.name("BNS"), "Klinge und Seele");
        assert_eq!(games.name("POE"), "Path of Exile");
    }

    #[test]
    fn test_translation_prefers_current_name() {
        let catalog = Catalog::new()
            .with_message("de", "Blade and Soul", "Blade and Soul (DE)")
            .with_message("de", "Blade & Soul", "Klinge und Seele");
        catalog.activate("de");
        let games = Games::new().with_translator(Arc::new(catalog));
        assert_eq!(games.name("BNS"), "Blade and Soul (DE)");
    }

    #[test]
    fn test_versioned_entry_expands_every_name() {
        let record = VersionedName::new(["New World: Aeternum", "New World"]).unwrap();
        let games = Games::new().with_options(
            GamesOptions::default()
                .with_only(["POE"].into_iter().collect())
                .with_override("NWA", Some(record.into())),
        );
        insta::assert_snapshot!(render(&games), @r#"
        ("NWA", "New World")
        ("NWA", "New World: Aeternum")
        ("POE", "Path of Exile")
        "#);
        assert_eq!(games.translate_code("NWA", true).len(), 1);
        assert_eq!(games.name("nwa"), "New World: Aeternum");
    }

    #[test]
    fn test_versioned_entry_falls_back_to_history() {
        let catalog = Catalog::new().with_message("fr", "New World", "Nouveau Monde");
        catalog.activate("fr");
        let record = VersionedName::new(["New World: Aeternum", "New World"]).unwrap();
        let games = Games::new()
            .with_translator(Arc::new(catalog))
            .with_options(GamesOptions::default().with_override("NWA", Some(record.into())));
        assert_eq!(games.name("NWA"), "Nouveau Monde");
    }

    #[test]
    fn test_get_and_slice() {
        let games = two_games();
        assert_eq!(games.get(1).map(|choice| choice.code).as_deref(), Some("WOW"));
        assert!(games.get(2).is_none());
        assert_eq!(games.slice(..1).len(), 1);
        assert_eq!(games.slice(1..).len(), 1);
        assert_eq!(games.slice(..).len(), 2);
        assert!(games.slice(5..9).is_empty());
    }

    #[test]
    fn test_reconfigure_rebuilds() {
        let games = Games::new();
        assert!(games.contains("POE"));
        let mut settings = GamesSettings::default();
        settings.override_names.insert("POE".to_owned(), None);
        games.reconfigure(settings);
        assert!(!games.contains("POE"));
    }

    #[test]
    fn test_instance_options_beat_settings() {
        let settings = GamesSettings {
            first: vec!["WOW".to_owned()],
            ..GamesSettings::default()
        };
        let games = Games::new()
            .with_settings(settings)
            .with_options(GamesOptions::default().with_first(["POE"]));
        assert_eq!(games.first(), ["POE"]);
    }

    #[test]
    fn test_concurrent_first_access() {
        let games = Arc::new(Games::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let games = Arc::clone(&games);
                thread::spawn(move || games.len())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), crate::data::GAMES.len());
        }
    }

    #[test]
    fn test_translator_language_untouched() {
        let games = Games::new();
        let _ = games.choices().count();
        assert_eq!(games.translator().language(), SOURCE_LANGUAGE);
    }
}
