//! Engine configuration
//!
//! Defaults match the reference service: a 5 second budget per move and a
//! cache large enough for several games. Both can be overridden from the
//! environment:
//!
//! - `GOMOKU_AI_TIME_LIMIT_MS`: wall-clock budget per `compute_move` call
//! - `GOMOKU_AI_CACHE_CAPACITY`: maximum cache entries (0 = unbounded)

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Environment key for the per-move time budget in milliseconds
pub const ENV_TIME_LIMIT_MS: &str = "GOMOKU_AI_TIME_LIMIT_MS";
/// Environment key for the cache capacity in entries
pub const ENV_CACHE_CAPACITY: &str = "GOMOKU_AI_CACHE_CAPACITY";

/// Default wall-clock budget per move
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(5);
/// Default cache capacity (entries)
pub const DEFAULT_CACHE_CAPACITY: usize = 1 << 20;

/// Tunables for an [`crate::AIEngine`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Wall-clock budget bounding any single move computation
    pub time_limit: Duration,
    /// Maximum transposition cache entries; 0 disables the cap
    pub cache_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            time_limit: DEFAULT_TIME_LIMIT,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl EngineConfig {
    /// Load from process environment, falling back to defaults for unset keys.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_TIME_LIMIT_MS) {
            let ms = parse_value::<u64>(ENV_TIME_LIMIT_MS, &raw)?;
            config.time_limit = Duration::from_millis(ms);
        }
        if let Some(raw) = lookup(ENV_CACHE_CAPACITY) {
            config.cache_capacity = parse_value::<usize>(ENV_CACHE_CAPACITY, &raw)?;
        }

        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = time_limit;
        self
    }

    #[must_use]
    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    /// Reject configurations the engine cannot honour.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.time_limit.is_zero() {
            return Err(ConfigError::ZeroTimeLimit);
        }
        Ok(())
    }
}

fn parse_value<T: std::str::FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.time_limit, Duration::from_secs(5));
        assert_eq!(config.cache_capacity, DEFAULT_CACHE_CAPACITY);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_lookup_unset_uses_defaults() {
        let config = EngineConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_lookup_overrides() {
        let config = EngineConfig::from_lookup(lookup_from(&[
            (ENV_TIME_LIMIT_MS, "250"),
            (ENV_CACHE_CAPACITY, " 4096 "),
        ]))
        .unwrap();
        assert_eq!(config.time_limit, Duration::from_millis(250));
        assert_eq!(config.cache_capacity, 4096);
    }

    #[test]
    fn test_lookup_rejects_garbage() {
        let err = EngineConfig::from_lookup(lookup_from(&[(ENV_TIME_LIMIT_MS, "soon")]))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: ENV_TIME_LIMIT_MS,
                value: "soon".to_string()
            }
        );
    }

    #[test]
    fn test_zero_time_limit_rejected() {
        let err = EngineConfig::from_lookup(lookup_from(&[(ENV_TIME_LIMIT_MS, "0")])).unwrap_err();
        assert_eq!(err, ConfigError::ZeroTimeLimit);
    }

    #[test]
    fn test_builders() {
        let config = EngineConfig::default()
            .with_time_limit(Duration::from_millis(10))
            .with_cache_capacity(0);
        assert_eq!(config.time_limit, Duration::from_millis(10));
        assert_eq!(config.cache_capacity, 0);
    }

    #[test]
    fn test_serde_round_trip() {
        let config = EngineConfig::default().with_cache_capacity(77);
        let json = serde_json::to_string(&config).unwrap();
        let back: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
