//! Cycle timing configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::utilities::errors::TrafficLightError;

/// Timing parameters for the phase cycling loop.
///
/// Each cycle duration is drawn uniformly from `[min_cycle, max_cycle)`.
/// The loop polls at `poll_interval` resolution, so actual toggles land
/// within one poll interval of the drawn target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightConfig {
    /// Lower bound (inclusive) for a drawn cycle duration.
    pub min_cycle: Duration,
    /// Upper bound (exclusive) for a drawn cycle duration.
    pub max_cycle: Duration,
    /// Sleep between loop iterations; bounds both toggle accuracy and
    /// shutdown latency.
    pub poll_interval: Duration,
}

impl Default for LightConfig {
    /// Street-light timing: 4 to 6 second cycles, 1ms polling.
    fn default() -> Self {
        Self {
            min_cycle: Duration::from_millis(4000),
            max_cycle: Duration::from_millis(6000),
            poll_interval: Duration::from_millis(1),
        }
    }
}

impl LightConfig {
    /// Check the bounds make sense before handing the config to a light.
    pub fn validate(&self) -> Result<(), TrafficLightError> {
        if self.min_cycle >= self.max_cycle {
            return Err(TrafficLightError::InvalidConfig {
                message: format!(
                    "min_cycle ({:?}) must be shorter than max_cycle ({:?})",
                    self.min_cycle, self.max_cycle
                ),
            });
        }
        if self.poll_interval.is_zero() {
            return Err(TrafficLightError::InvalidConfig {
                message: "poll_interval must be non-zero".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = LightConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.min_cycle, Duration::from_millis(4000));
        assert_eq!(config.max_cycle, Duration::from_millis(6000));
        assert_eq!(config.poll_interval, Duration::from_millis(1));
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let config = LightConfig {
            min_cycle: Duration::from_millis(500),
            max_cycle: Duration::from_millis(500),
            ..LightConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(TrafficLightError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_zero_poll_interval_rejected() {
        let config = LightConfig {
            poll_interval: Duration::ZERO,
            ..LightConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(TrafficLightError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_deserializes_from_json() {
        let config: LightConfig = serde_json::from_value(serde_json::json!({
            "min_cycle": { "secs": 4, "nanos": 0 },
            "max_cycle": { "secs": 6, "nanos": 0 },
            "poll_interval": { "secs": 0, "nanos": 1_000_000 },
        }))
        .unwrap();
        assert_eq!(config, LightConfig::default());
    }
}
