//! The process-wide default registry.
//!
//! [`games()`] initializes a default [`Games`] exactly once, on first use.
//! An application that needs different settings calls [`install`] before
//! anything touches the default. Later changes go through
//! [`Games::reconfigure`] and [`Games::invalidate`] on the shared instance.

use std::sync::OnceLock;

use tracing::{debug, info};

use crate::registry::Games;

static DEFAULT: OnceLock<Games> = OnceLock::new();

/// Returns the process-wide registry, creating a default one on first use.
///
/// # Examples
///
/// ```
/// let games = games_registry::games();
/// assert_eq!(games.alpha2("poe"), "POE");
/// ```
pub fn games() -> &'static Games {
    DEFAULT.get_or_init(|| {
        debug!("Initializing default games registry");
        Games::new()
    })
}

/// Installs `games` as the process-wide registry.
///
/// # Errors
///
/// Returns `games` back if the process-wide registry is already
/// initialized.
pub fn install(games: Games) -> Result<&'static Games, Games> {
    let mut pending = Some(games);
    let installed = DEFAULT.get_or_init(|| pending.take().unwrap_or_default());
    match pending {
        Some(rejected) => Err(rejected),
        None => {
            info!("Installed process-wide games registry");
            Ok(installed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_initialized_once() {
        let first = games();
        let second = games();
        assert!(std::ptr::eq(first, second));

        let rejected = install(Games::new());
        assert!(rejected.is_err());
        assert!(std::ptr::eq(games(), first));
    }
}
