//! Alternate codes.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// The three-letter and numeric alternate codes of an entry.
///
/// # Examples
///
/// ```
/// use games_core::AltCodes;
///
/// let codes = AltCodes::new("DIA", Some(7));
/// assert_eq!(codes.padded_numeric().as_deref(), Some("007"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AltCodes {
    /// Three-letter code, empty when the entry has none.
    pub alpha3: Cow<'static, str>,
    /// Numeric code.
    pub numeric: Option<u16>,
}

impl AltCodes {
    /// Creates a new pair of alternate codes.
    #[inline]
    #[must_use]
    pub fn new(alpha3: impl Into<Cow<'static, str>>, numeric: Option<u16>) -> Self {
        Self {
            alpha3: alpha3.into(),
            numeric,
        }
    }

    /// Returns the numeric code as a zero-padded three character string.
    #[must_use]
    pub fn padded_numeric(&self) -> Option<String> {
        self.numeric.map(|numeric| format!("{numeric:03}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padded_numeric() {
        assert_eq!(
            AltCodes::new("WOW", Some(100)).padded_numeric().as_deref(),
            Some("100")
        );
        assert_eq!(
            AltCodes::new("XYZ", Some(4)).padded_numeric().as_deref(),
            Some("004")
        );
        assert_eq!(AltCodes::new("XYZ", None).padded_numeric(), None);
    }

    #[test]
    fn test_default_is_empty() {
        let codes = AltCodes::default();
        assert!(codes.alpha3.is_empty());
        assert_eq!(codes.numeric, None);
    }
}
