//! Translation and collation for the games registry.
//!
//! The registry needs three things from its translation layer:
//!
//! - a lookup of a source string in the active language or an explicit
//!   one, with the fallback-to-source behavior controllable per call
//!   ([`Translator`])
//! - a way to switch the active language for a bounded scope, restored on
//!   every exit path ([`LanguageOverride`])
//! - a sort key for ordering display names ([`sort_key`])
//!
//! [`Catalog`] is the bundled [`Translator`]: an in-memory message table,
//! optionally loaded from a JSON file.
//!
//! # Example
//!
//! ```
//! use games_i18n::{Catalog, LanguageOverride, Translator};
//!
//! let catalog = Catalog::new().with_message("de", "Path of Exile", "Pfad des Exils");
//! assert_eq!(catalog.translate("Path of Exile", true), "Path of Exile");
//!
//! {
//!     let _german = LanguageOverride::new(&catalog, "de");
//!     assert_eq!(catalog.translate("Path of Exile", true), "Pfad des Exils");
//! }
//! assert_eq!(catalog.language(), "en");
//! assert_eq!(catalog.translate_in("de", "Path of Exile", false), "Pfad des Exils");
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

mod catalog;
mod collation;
mod error;

pub use catalog::{Catalog, LanguageOverride, Translator, SOURCE_LANGUAGE};
pub use collation::{fold_ascii, sort_key, SortKey};
pub use error::I18nError;
