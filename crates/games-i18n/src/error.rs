//! Error types for the games-i18n crate.

use camino::Utf8PathBuf;

/// Errors that can occur while loading a translation catalog.
#[derive(Debug, thiserror::Error)]
pub enum I18nError {
    /// The catalog file could not be read.
    #[error("failed to read catalog {path}: {source}")]
    Read {
        /// The catalog path.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The catalog file is not a `{language: {message: translation}}` object.
    #[error("failed to parse catalog {path}: {source}")]
    Parse {
        /// The catalog path.
        path: Utf8PathBuf,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },
}

impl I18nError {
    /// Returns the catalog path associated with this error.
    #[must_use]
    pub fn path(&self) -> &Utf8PathBuf {
        match self {
            Self::Read { path, .. } | Self::Parse { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_read_error_display() {
        let err = I18nError::Read {
            path: Utf8PathBuf::from("locale/games.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.path().as_str(), "locale/games.json");
        assert!(err.to_string().contains("locale/games.json"));
    }
}
