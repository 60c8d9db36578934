//! Engine configuration and validation.

use std::error::Error;
use std::fmt;
use std::num::NonZeroUsize;
use std::thread;

/// Configuration for [`Engine`](crate::Engine).
///
/// # Examples
///
/// ```
/// use strata_engine::{Engine, EngineConfig};
///
/// // Auto-detected worker count.
/// let engine = Engine::new(EngineConfig::default()).unwrap();
/// assert!(engine.workers() >= 1);
///
/// // Pinned worker count (useful for determinism experiments,
/// // though results never depend on it).
/// let engine = Engine::new(EngineConfig { workers: Some(2) }).unwrap();
/// assert_eq!(engine.workers(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct EngineConfig {
    /// Number of step workers. `None` = auto-detect from
    /// `std::thread::available_parallelism`.
    pub workers: Option<usize>,
}

impl EngineConfig {
    /// Resolve the effective worker count.
    pub fn resolve_workers(&self) -> Result<usize, ConfigError> {
        match self.workers {
            Some(0) => Err(ConfigError::ZeroWorkers),
            Some(n) => Ok(n),
            None => Ok(thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(1)),
        }
    }
}

/// Errors from engine configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A worker count of zero was requested.
    ZeroWorkers,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroWorkers => write!(f, "worker count must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_workers_rejected() {
        let config = EngineConfig { workers: Some(0) };
        assert_eq!(config.resolve_workers(), Err(ConfigError::ZeroWorkers));
    }

    #[test]
    fn explicit_count_passes_through() {
        let config = EngineConfig { workers: Some(5) };
        assert_eq!(config.resolve_workers(), Ok(5));
    }

    #[test]
    fn default_auto_detects_at_least_one() {
        assert!(EngineConfig::default().resolve_workers().unwrap() >= 1);
    }
}
