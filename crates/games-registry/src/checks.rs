//! Consistency checks over the static tables and a registry.
//!
//! [`run`] reports data problems rather than failing on them:
//!
//! - common-name keys that are neither canonical codes nor IOC aliases
//! - IOC aliases pointing at codes missing from the static table
//! - alternate-code entries for codes that exist nowhere
//! - alpha3 or numeric codes shared by several entries, where lookups
//!   silently pick the first
//! - with an icon directory, codes without a `<CODE>.svg` icon and icon
//!   files no code uses

use std::collections::BTreeMap;
use std::fmt;

use camino::Utf8Path;
use games_core::{fx_hash_set, FxHashSet};
use serde::Serialize;
use tracing::{debug, warn};

use crate::data::ioc::{IOC_ALIASES, IOC_CODES, IOC_HISTORICAL};
use crate::data::{COMMON_NAMES, GAMES};
use crate::registry::Games;
use crate::snapshot::static_name;

/// Findings of [`run`]. Every list is sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    /// Common-name keys that resolve to nothing.
    pub unmapped_common_names: Vec<String>,
    /// `(alias, code)` pairs whose code is not in the static table.
    pub unknown_ioc_targets: Vec<(String, String)>,
    /// Alternate-code entries whose code is neither static nor configured.
    pub unknown_alt_codes: Vec<String>,
    /// Alpha3 codes used by several entries; the first code listed wins.
    pub duplicate_alpha3: Vec<(String, Vec<String>)>,
    /// Numeric codes used by several entries; the first code listed wins.
    pub duplicate_numeric: Vec<(u16, Vec<String>)>,
    /// Whether the icon directory was scanned.
    pub icons_checked: bool,
    /// Codes without an icon file.
    pub missing_icons: Vec<String>,
    /// Icon files (upper-cased stems) no code or alpha3 code uses.
    pub unused_icons: Vec<String>,
}

impl CheckReport {
    /// Returns the total number of findings.
    #[must_use]
    pub fn problem_count(&self) -> usize {
        self.unmapped_common_names.len()
            + self.unknown_ioc_targets.len()
            + self.unknown_alt_codes.len()
            + self.duplicate_alpha3.len()
            + self.duplicate_numeric.len()
            + self.missing_icons.len()
            + self.unused_icons.len()
    }

    /// Returns `true` if nothing was found.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.problem_count() == 0
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.unmapped_common_names.is_empty() {
            writeln!(
                f,
                "Unmapped common names: {}",
                self.unmapped_common_names.join(", ")
            )?;
        }
        for (alias, code) in &self.unknown_ioc_targets {
            writeln!(f, "IOC alias {alias} points at unknown code {code}")?;
        }
        if !self.unknown_alt_codes.is_empty() {
            writeln!(
                f,
                "Alternate codes for unknown games: {}",
                self.unknown_alt_codes.join(", ")
            )?;
        }
        for (alpha3, codes) in &self.duplicate_alpha3 {
            writeln!(f, "Alpha3 {alpha3} shared by {}", codes.join(", "))?;
        }
        for (numeric, codes) in &self.duplicate_numeric {
            writeln!(f, "Numeric {numeric:03} shared by {}", codes.join(", "))?;
        }
        if !self.missing_icons.is_empty() {
            writeln!(f, "Missing icons: {}", self.missing_icons.join(", "))?;
        }
        if !self.unused_icons.is_empty() {
            writeln!(f, "Unused icon files: {}", self.unused_icons.join(", "))?;
        }
        if self.is_clean() {
            write!(f, "No problems found")?;
            if !self.icons_checked {
                write!(f, " (icons not checked)")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Checks `games` and the static tables, and the icons in `icon_dir` if
/// given.
///
/// A missing or unreadable icon directory is logged and skipped.
#[must_use]
pub fn run(games: &Games, icon_dir: Option<&Utf8Path>) -> CheckReport {
    let snapshot = games.snapshot();
    let mut report = CheckReport::default();

    let aliases: FxHashSet<&str> = IOC_ALIASES.iter().map(|&(alias, _)| alias).collect();
    report.unmapped_common_names = COMMON_NAMES
        .iter()
        .map(|&(code, _)| code)
        .filter(|code| static_name(code).is_none() && !aliases.contains(code))
        .map(str::to_owned)
        .collect();
    report.unmapped_common_names.sort_unstable();

    report.unknown_ioc_targets = IOC_ALIASES
        .iter()
        .chain(IOC_HISTORICAL)
        .map(|&(alias, code)| (alias, code))
        .chain(IOC_CODES.iter().map(|&(code, alias)| (alias, code)))
        .filter(|(_, code)| static_name(code).is_none())
        .map(|(alias, code)| (alias.to_owned(), code.to_owned()))
        .collect();
    report.unknown_ioc_targets.sort_unstable();
    report.unknown_ioc_targets.dedup();

    report.unknown_alt_codes = snapshot
        .alt_codes
        .keys()
        .filter(|code| static_name(code).is_none() && !snapshot.entries.contains_key(*code))
        .cloned()
        .collect();
    report.unknown_alt_codes.sort_unstable();

    let mut by_alpha3: BTreeMap<&str, Vec<String>> = BTreeMap::new();
    let mut by_numeric: BTreeMap<u16, Vec<String>> = BTreeMap::new();
    for (code, alt) in &snapshot.alt_codes {
        if !alt.alpha3.is_empty() {
            by_alpha3.entry(alt.alpha3.as_ref()).or_default().push(code.clone());
        }
        if let Some(numeric) = alt.numeric {
            by_numeric.entry(numeric).or_default().push(code.clone());
        }
    }
    report.duplicate_alpha3 = by_alpha3
        .into_iter()
        .filter(|(_, codes)| codes.len() > 1)
        .map(|(alpha3, codes)| (alpha3.to_owned(), codes))
        .collect();
    report.duplicate_numeric = by_numeric
        .into_iter()
        .filter(|(_, codes)| codes.len() > 1)
        .collect();

    if let Some(dir) = icon_dir {
        match icon_stems(dir) {
            Ok(stems) => {
                report.icons_checked = true;
                let mut used: FxHashSet<&str> = fx_hash_set();
                for code in snapshot.entries.keys() {
                    used.insert(code.as_str());
                    if !stems.contains(code) {
                        report.missing_icons.push(code.clone());
                    }
                }
                used.extend(snapshot.alt_codes.values().map(|alt| alt.alpha3.as_ref()));
                report.unused_icons = stems
                    .iter()
                    .filter(|stem| !used.contains(stem.as_str()))
                    .cloned()
                    .collect();
                report.missing_icons.sort_unstable();
                report.unused_icons.sort_unstable();
            }
            Err(err) => warn!(dir = %dir, error = %err, "Skipping icon check"),
        }
    }

    debug!(
        problems = report.problem_count(),
        statics = GAMES.len(),
        "Ran registry checks"
    );
    report
}

/// Returns the upper-cased stems of the `.svg` files in `dir`.
fn icon_stems(dir: &Utf8Path) -> std::io::Result<FxHashSet<String>> {
    let mut stems = fx_hash_set();
    for entry in dir.read_dir_utf8()? {
        let entry = entry?;
        let path = entry.path();
        if path.extension() == Some("svg") && entry.file_type()?.is_file() {
            if let Some(stem) = path.file_stem() {
                stems.insert(stem.to_uppercase());
            }
        }
    }
    Ok(stems)
}
