//! The memoized view a [`Games`](crate::Games) registry answers from.
//!
//! A [`Snapshot`] is built in one pass from the static tables and the
//! resolved options:
//!
//! 1. `only` restriction or relabel (unknown static codes are fatal)
//! 2. common-name overlay, recording the displaced static names
//! 3. `override` overlay, `None` removing the code
//! 4. legacy names appended to the shadowed names
//! 5. alternate-code and IOC tables merged with per-entry records
//! 6. `first` codes normalized and filtered to the effective set
//!
//! Once built, a snapshot is immutable; invalidation swaps it out whole.

use std::borrow::Cow;
use std::sync::LazyLock;

use games_core::{
    fx_hash_map, fx_hash_set, fx_index_map_with_capacity, AltCodes, FxHashMap, FxHashSet,
    FxIndexMap, GameName, Only, OnlyItem,
};
use tracing::{debug, info};

use crate::data::ioc::{IOC_ALIASES, IOC_CODES, IOC_HISTORICAL};
use crate::data::{ALT_CODES, COMMON_NAMES, GAMES, LEGACY_CODES, OLD_NAMES};
use crate::error::RegistryError;
use crate::options::ResolvedOptions;

static STATIC_NAMES: LazyLock<FxHashMap<&'static str, &'static str>> =
    LazyLock::new(|| GAMES.iter().copied().collect());

static LEGACY: LazyLock<FxHashMap<&'static str, &'static str>> =
    LazyLock::new(|| LEGACY_CODES.iter().copied().collect());

/// Returns the static display name of `code`.
pub(crate) fn static_name(code: &str) -> Option<&'static str> {
    STATIC_NAMES.get(code).copied()
}

#[derive(Debug, Default)]
pub(crate) struct Snapshot {
    /// Effective code to name mapping, in registry order.
    pub(crate) entries: FxIndexMap<String, GameName>,
    /// Translation fallbacks for simple entries.
    pub(crate) shadowed: FxHashMap<String, Vec<Cow<'static, str>>>,
    /// Alternate codes; scanned in order, so the first duplicate wins.
    pub(crate) alt_codes: FxIndexMap<String, AltCodes>,
    /// Code to the IOC alias it reports.
    pub(crate) ioc_codes: FxHashMap<String, Cow<'static, str>>,
    /// IOC alias (current or historical) to code.
    pub(crate) ioc_aliases: FxHashMap<String, String>,
    /// Normalized pinned codes, deduplicated.
    pub(crate) first: Vec<String>,
    /// The options this snapshot was built from.
    pub(crate) options: ResolvedOptions,
    /// Stand-in for a failed build.
    pub(crate) degraded: bool,
}

impl Snapshot {
    /// An empty snapshot answering in place of a failed build.
    pub(crate) fn degraded() -> Self {
        Self {
            degraded: true,
            ..Self::default()
        }
    }

    pub(crate) fn build(options: ResolvedOptions) -> Result<Self, RegistryError> {
        let mut relabeled: FxHashSet<String> = fx_hash_set();
        let mut entries = match &options.only {
            None => GAMES
                .iter()
                .map(|&(code, name)| (code.to_owned(), GameName::from(name)))
                .collect(),
            Some(only) => restrict(only, &mut relabeled)?,
        };
        debug!(
            entries = entries.len(),
            relabeled = relabeled.len(),
            "Applied only restriction"
        );

        let overrides = &options.override_names;
        let mut shadowed: FxHashMap<String, Vec<Cow<'static, str>>> = fx_hash_map();

        if options.common_names {
            for &(code, friendly) in COMMON_NAMES {
                if relabeled.contains(code) {
                    continue;
                }
                let Some(name) = entries.get_mut(code) else {
                    continue;
                };
                *name = GameName::from(friendly);
                if overrides.contains_key(code) {
                    continue;
                }
                if let Some(original) = static_name(code).filter(|original| *original != friendly)
                {
                    push_unique(shadowed.entry(code.to_owned()).or_default(), original);
                }
            }
        }

        for (code, name) in overrides {
            match name {
                Some(name) => {
                    entries.insert(code.clone(), name.clone());
                }
                None => {
                    entries.shift_remove(code);
                }
            }
        }
        debug!(overrides = overrides.len(), "Applied override overlay");

        for &(code, names) in OLD_NAMES {
            if !entries.contains_key(code)
                || overrides.contains_key(code)
                || relabeled.contains(code)
            {
                continue;
            }
            let fallbacks = shadowed.entry(code.to_owned()).or_default();
            for &name in names {
                push_unique(fallbacks, name);
            }
        }

        let mut alt_codes: FxIndexMap<String, AltCodes> =
            fx_index_map_with_capacity(ALT_CODES.len());
        for &(code, alpha3, numeric) in ALT_CODES {
            alt_codes.insert(code.to_owned(), AltCodes::new(alpha3, Some(numeric)));
        }
        let mut ioc_codes: FxHashMap<String, Cow<'static, str>> = IOC_CODES
            .iter()
            .map(|&(code, alias)| (code.to_owned(), Cow::Borrowed(alias)))
            .collect();
        let mut ioc_aliases: FxHashMap<String, String> = IOC_ALIASES
            .iter()
            .map(|&(alias, code)| (alias.to_owned(), code.to_owned()))
            .collect();
        for &(alias, code) in IOC_HISTORICAL {
            ioc_aliases
                .entry(alias.to_owned())
                .or_insert_with(|| code.to_owned());
        }

        for (code, name) in &entries {
            if name.has_alt_codes() {
                let alt = alt_codes.entry(code.clone()).or_default();
                if let Some(alpha3) = name.alpha3() {
                    alt.alpha3 = Cow::Owned(alpha3.to_owned());
                }
                if let Some(numeric) = name.numeric() {
                    alt.numeric = Some(numeric);
                }
            }
            if let Some(alias) = name.ioc_code() {
                ioc_codes.insert(code.clone(), Cow::Owned(alias.to_owned()));
                ioc_aliases.insert(alias.to_owned(), code.clone());
            }
        }

        let mut snapshot = Self {
            entries,
            shadowed,
            alt_codes,
            ioc_codes,
            ioc_aliases,
            first: Vec::new(),
            options,
            degraded: false,
        };
        snapshot.first = snapshot.resolve_first();

        info!(
            entries = snapshot.entries.len(),
            shadowed = snapshot.shadowed.len(),
            alt_codes = snapshot.alt_codes.len(),
            first = snapshot.first.len(),
            "Built games registry"
        );
        Ok(snapshot)
    }

    /// Normalizes `code` to a canonical code present in the entry set.
    ///
    /// A direct hit on the upper-cased input wins over alternate-code
    /// resolution; an all-digit input is looked up as a numeric code and a
    /// three-character input as an alpha3 code, the first entry in registry
    /// order winning. Retired codes from [`LEGACY_CODES`] are tried last.
    pub(crate) fn alpha2(&self, code: &str) -> Option<&str> {
        let code = code.to_uppercase();
        if let Some((canonical, _)) = self.entries.get_key_value(&code) {
            return Some(canonical.as_str());
        }

        let found = if !code.is_empty() && code.bytes().all(|byte| byte.is_ascii_digit()) {
            code.parse::<u16>().ok().and_then(|numeric| {
                self.alt_codes
                    .iter()
                    .find(|(_, alt)| alt.numeric == Some(numeric))
            })
        } else if code.chars().count() == 3 {
            self.alt_codes.iter().find(|(_, alt)| alt.alpha3 == code)
        } else {
            None
        };

        let candidate = found
            .map(|(candidate, _)| candidate.as_str())
            .or_else(|| LEGACY.get(code.as_str()).copied())?;
        self.entries
            .get_key_value(candidate)
            .map(|(canonical, _)| canonical.as_str())
    }

    /// Returns the shadowed names of `code`, oldest displacement first.
    pub(crate) fn shadowed(&self, code: &str) -> &[Cow<'static, str>] {
        self.shadowed.get(code).map_or(&[], Vec::as_slice)
    }

    /// Returns `true` if the separator follows the pinned block.
    pub(crate) fn has_break(&self) -> bool {
        !self.first.is_empty() && self.options.first_break.is_some()
    }

    fn resolve_first(&self) -> Vec<String> {
        let mut seen: FxHashSet<&str> = fx_hash_set();
        let mut first = Vec::with_capacity(self.options.first.len());
        for code in &self.options.first {
            match self.alpha2(code) {
                Some(canonical) if seen.insert(canonical) => first.push(canonical.to_owned()),
                Some(_) => {}
                None => debug!(code = %code, "Dropped unknown first code"),
            }
        }
        first
    }
}

fn restrict(
    only: &Only,
    relabeled: &mut FxHashSet<String>,
) -> Result<FxIndexMap<String, GameName>, RegistryError> {
    let mut entries = fx_index_map_with_capacity(only.len());
    match only {
        Only::Choices(choices) => {
            for (code, name) in choices {
                relabeled.insert(code.clone());
                entries.insert(code.clone(), name.clone());
            }
        }
        Only::Items(items) => {
            for item in items {
                match item {
                    OnlyItem::Code(code) => {
                        let name = static_name(code)
                            .ok_or_else(|| RegistryError::unknown_code("only", code.as_str()))?;
                        entries.insert(code.clone(), GameName::from(name));
                    }
                    OnlyItem::Choice(code, name) => {
                        relabeled.insert(code.clone());
                        entries.insert(code.clone(), name.clone());
                    }
                }
            }
        }
    }
    Ok(entries)
}

fn push_unique(names: &mut Vec<Cow<'static, str>>, name: &'static str) {
    if !names.iter().any(|existing| existing == name) {
        names.push(Cow::Borrowed(name));
    }
}

#[cfg(test)]
mod tests {
    use games_core::{GamesOptions, GamesSettings, VersionedName};

    use super::*;

    fn build(options: GamesOptions) -> Snapshot {
        Snapshot::build(ResolvedOptions::resolve(&options, &GamesSettings::default())).unwrap()
    }

    #[test]
    fn test_full_table_by_default() {
        let snapshot = build(GamesOptions::default());
        assert_eq!(snapshot.entries.len(), GAMES.len());
        let (first, _) = snapshot.entries.get_index(0).unwrap();
        assert_eq!(first, "WOW");
    }

    #[test]
    fn test_common_names_shadow_static_names() {
        let snapshot = build(GamesOptions::default());
        assert_eq!(snapshot.entries["BNS"].current(), "Blade and Soul");
        assert_eq!(snapshot.shadowed("BNS"), ["Blade & Soul"]);

        let plain = build(GamesOptions::default().with_common_names(false));
        assert_eq!(plain.entries["BNS"].current(), "Blade & Soul");
        assert!(plain.shadowed("BNS").is_empty());
    }

    #[test]
    fn test_identical_common_name_is_not_shadowed() {
        let snapshot = build(GamesOptions::default());
        assert!(snapshot.shadowed("WOW").iter().all(|name| name != "World of Warcraft"));
    }

    #[test]
    fn test_legacy_names_follow_shadowed_names() {
        let snapshot = build(GamesOptions::default());
        let legacy = OLD_NAMES
            .iter()
            .find(|(code, _)| *code == "POE")
            .map(|(_, names)| *names)
            .unwrap();
        let shadowed = snapshot.shadowed("POE");
        assert!(legacy.iter().all(|name| shadowed.iter().any(|s| s == name)));
    }

    #[test]
    fn test_override_removes_and_suppresses_fallbacks() {
        let snapshot = build(
            GamesOptions::default()
                .with_override("POE", None)
                .with_override("BNS", Some(GameName::from("B&S"))),
        );
        assert!(!snapshot.entries.contains_key("POE"));
        assert_eq!(snapshot.entries["BNS"].current(), "B&S");
        assert!(snapshot.shadowed("BNS").is_empty());
        assert!(snapshot.shadowed("POE").is_empty());
    }

    #[test]
    fn test_override_adds_custom_code_at_end() {
        let options = GamesOptions::default().with_override("XX", Some(GameName::from("Custom")));
        let snapshot = build(options);
        let (last, _) = snapshot.entries.last().unwrap();
        assert_eq!(last, "XX");
    }

    #[test]
    fn test_only_restricts_in_given_order() {
        let only: Only = ["POE", "WOW"].into_iter().collect();
        let snapshot = build(GamesOptions::default().with_only(only));
        let codes: Vec<_> = snapshot.entries.keys().map(String::as_str).collect();
        assert_eq!(codes, ["POE", "WOW"]);
    }

    #[test]
    fn test_only_unknown_code_is_fatal() {
        let only: Only = ["WOW", "NOPE"].into_iter().collect();
        let options = GamesOptions::default().with_only(only);
        let resolved = ResolvedOptions::resolve(&options, &GamesSettings::default());
        let result = Snapshot::build(resolved);
        assert!(matches!(
            result,
            Err(RegistryError::UnknownCode { option: "only", ref code }) if code == "NOPE"
        ));
    }

    #[test]
    fn test_relabeled_codes_skip_overlays() {
        let only: Only = serde_json::from_str(r#"[["BNS", "Blade"], "POE"]"#).unwrap();
        let snapshot = build(GamesOptions::default().with_only(only));
        assert_eq!(snapshot.entries["BNS"].current(), "Blade");
        assert!(snapshot.shadowed("BNS").is_empty());
        assert!(!snapshot.shadowed("POE").is_empty());
    }

    #[test]
    fn test_versioned_record_merges_alt_codes() {
        let record = VersionedName::new(["Corepunk"])
            .unwrap()
            .with_alpha3("CRX")
            .with_ioc_code("PUNK");
        let snapshot = build(GamesOptions::default().with_override("CORE", Some(record.into())));
        let alt = &snapshot.alt_codes["CORE"];
        assert_eq!(alt.alpha3, "CRX");
        assert!(alt.numeric.is_some());
        assert_eq!(snapshot.ioc_codes["CORE"], "PUNK");
        assert_eq!(snapshot.ioc_aliases["PUNK"], "CORE");
    }

    #[test]
    fn test_alpha2_direct_hit_beats_alt_code() {
        let options = GamesOptions::default().with_override("DIA", Some(GameName::from("Custom")));
        let snapshot = build(options);
        assert_eq!(snapshot.alpha2("dia"), Some("DIA"));
        assert_eq!(build(GamesOptions::default()).alpha2("dia"), Some("D1"));
    }

    #[test]
    fn test_alpha2_numeric_and_misses() {
        let snapshot = build(GamesOptions::default());
        assert_eq!(snapshot.alpha2("100"), Some("WOW"));
        assert_eq!(snapshot.alpha2("0100"), Some("WOW"));
        assert_eq!(snapshot.alpha2("999"), None);
        assert_eq!(snapshot.alpha2("99999999"), None);
        assert_eq!(snapshot.alpha2(""), None);
        assert_eq!(snapshot.alpha2("not a code"), None);
    }

    #[test]
    fn test_alpha2_duplicate_alt_codes_resolve_to_first_entry() {
        let record = VersionedName::new(["Custom"])
            .unwrap()
            .with_alpha3("DIA")
            .with_numeric(200);
        let snapshot = build(GamesOptions::default().with_override("XX", Some(record.into())));
        assert_eq!(snapshot.alt_codes["XX"].alpha3, "DIA");
        assert_eq!(snapshot.alpha2("DIA"), Some("D1"));
        assert_eq!(snapshot.alpha2("200"), Some("D1"));
        assert_eq!(snapshot.alpha2("xx"), Some("XX"));
    }

    #[test]
    fn test_alpha2_resolves_legacy_codes() {
        let snapshot = build(GamesOptions::default());
        for (legacy, code) in LEGACY_CODES {
            assert_eq!(snapshot.alpha2(legacy), Some(*code), "{legacy}");
        }
        assert_eq!(snapshot.alpha2("lostark"), Some("LARK"));
        assert_eq!(snapshot.alpha2("2k"), Some("NBA2K"));
    }

    #[test]
    fn test_alpha2_legacy_code_requires_effective_entry() {
        let snapshot = build(GamesOptions::default().with_override("LARK", None));
        assert_eq!(snapshot.alpha2("LOSTARK"), None);
        assert_eq!(snapshot.alpha2("LAR"), None);
    }

    #[test]
    fn test_alpha2_requires_effective_entry() {
        let snapshot = build(GamesOptions::default().with_override("D1", None));
        assert_eq!(snapshot.alpha2("DIA"), None);
        assert_eq!(snapshot.alpha2("200"), None);
    }

    #[test]
    fn test_first_normalized_and_deduplicated() {
        let snapshot = build(
            GamesOptions::default()
                .with_first(["wow", "100", "NOPE", "DIA"])
                .with_first_break("---"),
        );
        assert_eq!(snapshot.first, ["WOW", "D1"]);
        assert!(snapshot.has_break());
    }
}
