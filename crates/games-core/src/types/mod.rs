//! Domain types for the games registry.
//!
//! # Module Organization
//!
//! - [`name`] - Display names, plain or versioned
//! - [`codes`] - Alternate (three-letter and numeric) codes
//! - [`choice`] - `(code, name)` pairs yielded by the choice list
//! - [`only`] - The `only` restriction/relabel option
//!
//! All public types are re-exported here and at the crate root:
//!
//! ```
//! use games_core::{AltCodes, GameName, GameTuple, Only};
//! ```

mod choice;
mod codes;
mod name;
mod only;

pub use choice::GameTuple;
pub use codes::AltCodes;
pub use name::{GameName, VersionedName};
pub use only::{Only, OnlyItem};
