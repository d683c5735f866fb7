use serde::{Deserialize, Serialize};

use crate::domain::{
    chart::{AxisRange, DEFAULT_TEMPERATURE_AXIS_C},
    environment::{TemperatureUnit, WINDOW_CAPACITY},
    errors::{AppError, AppResult},
    logging::LogLevel,
};

pub const DEFAULT_CADENCE_MS: u32 = 2_000;
/// Upper bound on `capacity`: one day of readings at one per second.
pub const MAX_CAPACITY: usize = 86_400;

/// Dashboard settings. Every field is optional in JSON and falls back to the
/// defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    /// Sampling interval in milliseconds.
    pub cadence_ms: u32,
    /// Maximum number of readings kept in the window.
    pub capacity: usize,
    pub initial_unit: TemperatureUnit,
    /// Fixed temperature axis in Celsius, `(min, max)`.
    pub temperature_axis_celsius: (f64, f64),
    pub log_level: LogLevel,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            cadence_ms: DEFAULT_CADENCE_MS,
            capacity: WINDOW_CAPACITY,
            initial_unit: TemperatureUnit::Fahrenheit,
            temperature_axis_celsius: (DEFAULT_TEMPERATURE_AXIS_C.min, DEFAULT_TEMPERATURE_AXIS_C.max),
            log_level: LogLevel::Debug,
        }
    }
}

impl DashboardConfig {
    /// Parse a (possibly partial) JSON object and validate it.
    pub fn from_json(json: &str) -> AppResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.capacity == 0 {
            return Err(AppError::ValidationError("capacity must be at least 1".to_string()));
        }
        if self.capacity > MAX_CAPACITY {
            return Err(AppError::ValidationError(format!(
                "capacity {} exceeds the maximum of {}",
                self.capacity, MAX_CAPACITY
            )));
        }
        if self.cadence_ms == 0 {
            return Err(AppError::ValidationError("cadence_ms must be at least 1".to_string()));
        }
        if !self.temperature_axis().is_valid() {
            return Err(AppError::ValidationError(format!(
                "temperature axis {:?} must be finite with min < max",
                self.temperature_axis_celsius
            )));
        }
        Ok(())
    }

    pub fn temperature_axis(&self) -> AxisRange {
        AxisRange::new(self.temperature_axis_celsius.0, self.temperature_axis_celsius.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_dashboard() {
        let config = DashboardConfig::default();
        assert_eq!(config.cadence_ms, 2000);
        assert_eq!(config.capacity, 60);
        assert_eq!(config.initial_unit, TemperatureUnit::Fahrenheit);
        assert_eq!(config.temperature_axis(), AxisRange::new(15.0, 30.0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config =
            DashboardConfig::from_json(r#"{"cadence_ms": 500, "initial_unit": "celsius"}"#).unwrap();
        assert_eq!(config.cadence_ms, 500);
        assert_eq!(config.initial_unit, TemperatureUnit::Celsius);
        assert_eq!(config.capacity, 60);
    }

    #[test]
    fn empty_object_is_the_default() {
        assert_eq!(DashboardConfig::from_json("{}").unwrap(), DashboardConfig::default());
    }

    #[test]
    fn rejects_zero_capacity() {
        let err = DashboardConfig::from_json(r#"{"capacity": 0}"#).unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[test]
    fn rejects_oversized_capacity() {
        for json in [r#"{"capacity": 18446744073709551615}"#, r#"{"capacity": 100000000000}"#] {
            let err = DashboardConfig::from_json(json).unwrap_err();
            assert!(matches!(err, AppError::ValidationError(_)), "{json}: {err}");
        }
        let at_limit = format!(r#"{{"capacity": {}}}"#, MAX_CAPACITY);
        assert_eq!(DashboardConfig::from_json(&at_limit).unwrap().capacity, MAX_CAPACITY);
    }

    #[test]
    fn rejects_inverted_axis() {
        let err = DashboardConfig::from_json(r#"{"temperature_axis_celsius": [30.0, 15.0]}"#)
            .unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = DashboardConfig::from_json(r#"{"capacity": "many"}"#).unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
        let err = DashboardConfig::from_json(r#"{"colour": "red"}"#).unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
    }

    #[test]
    fn log_level_is_read_by_name() {
        let config = DashboardConfig::from_json(r#"{"log_level": "warn"}"#).unwrap();
        assert_eq!(config.log_level, LogLevel::Warn);
    }
}
