//! Option resolution.

use games_core::{FxIndexMap, GameName, GamesOptions, GamesSettings, Only};

/// The seven registry options after resolution.
///
/// Each value is the instance option when set, otherwise the process-wide
/// setting. Produced by [`Games::options`](crate::Games::options).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedOptions {
    /// Restriction/relabel of the entry set. Never empty when present.
    pub only: Option<Only>,
    /// Final overlay; `None` values remove the code.
    pub override_names: FxIndexMap<String, Option<GameName>>,
    /// Codes pinned ahead of the sorted body, before normalization.
    pub first: Vec<String>,
    /// Whether pinned codes appear again in the sorted body.
    pub first_repeat: bool,
    /// Separator label after the pinned block. Never empty when present.
    pub first_break: Option<String>,
    /// Whether the pinned block is sorted by name.
    pub first_sort: bool,
    /// Whether the friendly common-name overlay applies.
    pub common_names: bool,
}

impl ResolvedOptions {
    /// Resolves `options` against `settings`.
    ///
    /// # Examples
    ///
    /// ```
    /// use games_core::{GamesOptions, GamesSettings};
    /// use games_registry::ResolvedOptions;
    ///
    /// let settings = GamesSettings {
    ///     first: vec!["WOW".to_owned()],
    ///     ..GamesSettings::default()
    /// };
    /// let options = GamesOptions::default().with_common_names(false);
    ///
    /// let resolved = ResolvedOptions::resolve(&options, &settings);
    /// assert_eq!(resolved.first, ["WOW"]);
    /// assert!(!resolved.common_names);
    /// ```
    #[must_use]
    pub fn resolve(options: &GamesOptions, settings: &GamesSettings) -> Self {
        Self {
            only: options
                .only
                .as_ref()
                .or(settings.only.as_ref())
                .filter(|only| !only.is_empty())
                .cloned(),
            override_names: options
                .override_names
                .as_ref()
                .unwrap_or(&settings.override_names)
                .clone(),
            first: options
                .first
                .as_ref()
                .unwrap_or(&settings.first)
                .clone(),
            first_repeat: options.first_repeat.unwrap_or(settings.first_repeat),
            first_break: options
                .first_break
                .as_ref()
                .or(settings.first_break.as_ref())
                .filter(|label| !label.is_empty())
                .cloned(),
            first_sort: options.first_sort.unwrap_or(settings.first_sort),
            common_names: options.common_names.unwrap_or(settings.common_names),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_come_from_settings() {
        let resolved =
            ResolvedOptions::resolve(&GamesOptions::default(), &GamesSettings::default());
        assert!(resolved.only.is_none());
        assert!(resolved.override_names.is_empty());
        assert!(resolved.first.is_empty());
        assert!(resolved.common_names);
        assert!(!resolved.first_sort);
    }

    #[test]
    fn test_instance_option_wins() {
        let settings = GamesSettings {
            first_sort: true,
            first_break: Some("---".to_owned()),
            ..GamesSettings::default()
        };
        let options = GamesOptions::default()
            .with_first_sort(false)
            .with_first_break("===");
        let resolved = ResolvedOptions::resolve(&options, &settings);
        assert!(!resolved.first_sort);
        assert_eq!(resolved.first_break.as_deref(), Some("==="));
    }

    #[test]
    fn test_empty_values_are_absent() {
        let options = GamesOptions::default()
            .with_only(Vec::<String>::new().into_iter().collect())
            .with_first_break("");
        let resolved = ResolvedOptions::resolve(&options, &GamesSettings::default());
        assert!(resolved.only.is_none());
        assert!(resolved.first_break.is_none());
    }
}
