//! Core types, errors, and configuration for the games registry.
//!
//! This crate provides the foundational types used across the workspace:
//!
//! - [`ConfigError`] for configuration loading and validation failures
//! - Configuration structures ([`Config`], [`GamesSettings`], [`GamesOptions`])
//! - Domain types ([`GameName`], [`AltCodes`], [`GameTuple`], [`Only`])
//! - Type aliases for `FxHashMap`/`FxHashSet` and the insertion-ordered
//!   [`FxIndexMap`]

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod hash;
pub mod types;

pub use config::{Config, GamesOptions, GamesSettings, I18nConfig, DEFAULT_ICON_URL};
pub use error::ConfigError;
pub use hash::{
    fx_hash_map, fx_hash_set, fx_index_map, fx_index_map_with_capacity, FxBuildHasher, FxHashMap,
    FxHashSet, FxIndexMap,
};
pub use types::{AltCodes, GameName, GameTuple, Only, OnlyItem, VersionedName};
