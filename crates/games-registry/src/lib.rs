//! Lazily built registry of game codes, names, and alternate codes.
//!
//! This crate turns the static game tables into a configurable, translated
//! registry. It resolves user input (codes, alternate codes, IOC aliases,
//! names) to canonical codes and produces ordered choice lists for forms
//! and pickers.
//!
//! # Overview
//!
//! The main entry point is [`Games`], which combines:
//!
//! - the static tables in [`data`]
//! - process-wide settings ([`GamesSettings`](games_core::GamesSettings))
//!   overridden by per-instance [`GamesOptions`](games_core::GamesOptions)
//! - a [`Translator`](games_i18n::Translator) for display names
//!
//! On top of it sit [`Game`], a code bound to a registry, and
//! [`GameField`], which cleans, validates, and represents stored values.
//!
//! # Example
//!
//! ```
//! use games_core::GamesOptions;
//! use games_registry::{Games, NameLookup, SearchOptions};
//!
//! let games = Games::new().with_options(
//!     GamesOptions::default()
//!         .with_first(["TIB"])
//!         .with_first_break("---"),
//! );
//!
//! assert_eq!(games.alpha2("dia"), "D1");
//! assert_eq!(games.by_name("tibia", &SearchOptions::default()), "TIB");
//!
//! let choices: Vec<_> = games.choices().take(3).collect();
//! assert_eq!(choices[0].code, "TIB");
//! assert!(choices[1].is_separator());
//!
//! let found = games.lookup(&NameLookup::IStartsWith("path of".to_owned()))?;
//! assert!(found.contains("POE"));
//! # Ok::<(), games_registry::RegistryError>(())
//! ```
//!
//! # Architecture
//!
//! ```text
//! Games (configuration + cache)
//!     │
//!     ├── ResolvedOptions (instance options over settings)
//!     │
//!     ├── Snapshot (built once, swapped on invalidation)
//!     │       │
//!     │       ├── entries (FxIndexMap, registry order)
//!     │       ├── shadowed names (translation fallbacks)
//!     │       └── alternate + IOC code tables
//!     │
//!     ├── Choices (sorted, translated iterator)
//!     │
//!     └── search (by_name, by_name_regex, lookup)
//! ```
//!
//! Lookups never fail: an invalid configuration is logged and answered from
//! an empty registry. Call [`Games::ensure_built`] to surface it instead.

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod checks;
pub mod data;

mod error;
mod field;
mod game;
mod options;
mod registry;
mod search;
mod shared;
mod snapshot;

pub use checks::CheckReport;
pub use error::{FieldError, RegistryError};
pub use field::{FieldValue, GameField, Representation, BLANK_LABEL};
pub use game::{Game, StrAttr};
pub use options::ResolvedOptions;
pub use registry::{Choices, Games};
pub use search::{NameLookup, SearchOptions};
pub use shared::{games, install};
