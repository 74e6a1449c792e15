use crate::error::ConfigError;
use serde::Deserialize;

const ENV_PREFIX: &str = "TIMELINE_ORDERING_";

/// Tunables for the ordering policy. Defaults reproduce the reference policy.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderingConfig {
    /// Per-actor quota inside capped categories
    #[serde(default = "default_max_per_actor")]
    pub max_per_actor: usize,
    /// Scales `pagination_key` down to a pure tie-breaker in popularity scores
    #[serde(default = "default_popularity_tiebreak_divisor")]
    pub popularity_tiebreak_divisor: f64,
}

fn default_max_per_actor() -> usize {
    5
}

fn default_popularity_tiebreak_divisor() -> f64 {
    1e13
}

impl Default for OrderingConfig {
    fn default() -> Self {
        Self {
            max_per_actor: default_max_per_actor(),
            popularity_tiebreak_divisor: default_popularity_tiebreak_divisor(),
        }
    }
}

impl OrderingConfig {
    /// Load from `TIMELINE_ORDERING_*` environment variables (and `.env` if present)
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config: OrderingConfig = envy::prefixed(ENV_PREFIX).from_env()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_per_actor == 0 {
            return Err(ConfigError::Invalid(
                "max_per_actor must be at least 1".to_string(),
            ));
        }
        if !(self.popularity_tiebreak_divisor.is_finite() && self.popularity_tiebreak_divisor > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "popularity_tiebreak_divisor must be positive, got {}",
                self.popularity_tiebreak_divisor
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clear_env() {
        std::env::remove_var("TIMELINE_ORDERING_MAX_PER_ACTOR");
        std::env::remove_var("TIMELINE_ORDERING_POPULARITY_TIEBREAK_DIVISOR");
    }

    #[test]
    #[serial_test::serial]
    fn test_from_env_uses_defaults() {
        clear_env();

        let config = OrderingConfig::from_env().unwrap();
        assert_eq!(config, OrderingConfig::default());
        assert_eq!(config.max_per_actor, 5);
    }

    #[test]
    #[serial_test::serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var("TIMELINE_ORDERING_MAX_PER_ACTOR", "3");
        std::env::set_var("TIMELINE_ORDERING_POPULARITY_TIEBREAK_DIVISOR", "1e12");

        let config = OrderingConfig::from_env().unwrap();
        assert_eq!(config.max_per_actor, 3);
        assert_eq!(config.popularity_tiebreak_divisor, 1e12);

        clear_env();
    }

    #[test]
    #[serial_test::serial]
    fn test_from_env_rejects_zero_quota() {
        clear_env();
        std::env::set_var("TIMELINE_ORDERING_MAX_PER_ACTOR", "0");

        let result = OrderingConfig::from_env();
        assert!(matches!(result, Err(ConfigError::Invalid(_))));

        clear_env();
    }

    #[test]
    #[serial_test::serial]
    fn test_from_env_rejects_unparseable_value() {
        clear_env();
        std::env::set_var("TIMELINE_ORDERING_MAX_PER_ACTOR", "many");

        let result = OrderingConfig::from_env();
        assert!(matches!(result, Err(ConfigError::Env(_))));

        clear_env();
    }

    #[test]
    fn test_validate_rejects_non_positive_divisor() {
        let config = OrderingConfig {
            popularity_tiebreak_divisor: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
