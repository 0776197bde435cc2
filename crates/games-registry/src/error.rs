//! Error types for the games-registry crate.
//!
//! Lookups never fail: a code that does not resolve yields an empty value.
//! The errors here cover configuration that cannot be built, malformed
//! search patterns, and values rejected by a [`GameField`](crate::GameField).

use games_core::ConfigError;

/// Errors raised while building the registry or searching it.
///
/// # Error Recovery Strategy
///
/// - **Configuration errors** ([`RegistryError::UnknownCode`],
///   [`RegistryError::Config`]): fatal, surface them at startup
/// - **Pattern errors** ([`RegistryError::InvalidPattern`]): returned to the
///   caller of the search, the registry itself is unaffected
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// An option names a code missing from the static table.
    #[error("option '{option}' references unknown game code '{code}'")]
    UnknownCode {
        /// The option holding the reference.
        option: &'static str,
        /// The unknown code.
        code: String,
    },

    /// A search pattern failed to compile.
    #[error("invalid search pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Invalid settings.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl RegistryError {
    /// Creates a new [`RegistryError::UnknownCode`] error.
    #[inline]
    pub fn unknown_code(option: &'static str, code: impl Into<String>) -> Self {
        Self::UnknownCode {
            option,
            code: code.into(),
        }
    }

    /// Returns `true` if this error comes from the registry configuration.
    #[inline]
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::UnknownCode { .. } | Self::Config(_))
    }
}

/// Errors raised when a [`GameField`](crate::GameField) rejects a value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// The value is not one of the available choices.
    #[error("\"{0}\" is not a valid choice")]
    InvalidChoice(String),

    /// A value is required.
    #[error("this field cannot be blank")]
    Blank,

    /// A `multiple` field was given a null value.
    #[error("a multiple field cannot be null")]
    NullNotAllowed,
}
