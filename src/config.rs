use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::queue::{DEFAULT_CAPACITY, DEFAULT_GROW_FACTOR};

/// Construction parameters for an [`IntQueue`](crate::IntQueue).
///
/// Missing fields fall back to the defaults:
/// ```
/// let config = intqueue::QueueConfig::from_json(r#"{ "initial_capacity": 64 }"#).unwrap();
/// assert_eq!(config.initial_capacity, 64);
/// assert_eq!(config.grow_factor, 2.0);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueueConfig {
    /// Number of slots allocated up front
    pub initial_capacity: usize,
    /// Multiplier applied to the capacity when the buffer is full
    pub grow_factor: f64,
}

impl QueueConfig {
    /// Parse a config from JSON text and validate it
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the initial capacity
    pub fn initial_capacity(mut self, cap: usize) -> Self {
        self.initial_capacity = cap;
        self
    }

    /// Set the grow factor
    pub fn grow_factor(mut self, factor: f64) -> Self {
        self.grow_factor = factor;
        self
    }

    /// The grow factor has to be a finite number greater than one,
    /// otherwise a full buffer could never make room.
    pub fn validate(&self) -> Result<()> {
        if !self.grow_factor.is_finite() || self.grow_factor <= 1.0 {
            return Err(Error::InvalidArgument(format!(
                "grow factor must be a finite number greater than 1, got {}",
                self.grow_factor
            )));
        }
        Ok(())
    }
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            grow_factor: DEFAULT_GROW_FACTOR,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults() {
        let config = QueueConfig::default();
        assert_eq!(config.initial_capacity, DEFAULT_CAPACITY);
        assert_eq!(config.grow_factor, DEFAULT_GROW_FACTOR);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn from_empty_json() {
        let config = QueueConfig::from_json("{}").unwrap();
        assert_eq!(config, QueueConfig::default());
    }

    #[test]
    fn from_json() {
        let config = QueueConfig::from_json(r#"{ "initial_capacity": 3, "grow_factor": 1.5 }"#).unwrap();
        assert_eq!(config.initial_capacity, 3);
        assert_eq!(config.grow_factor, 1.5);
    }

    #[test]
    fn reject_small_grow_factor() {
        let err = QueueConfig::from_json(r#"{ "grow_factor": 1.0 }"#).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));

        let config = QueueConfig::default().grow_factor(0.5);
        assert!(config.validate().is_err());
    }

    #[test]
    fn reject_non_finite_grow_factor() {
        assert!(QueueConfig::default().grow_factor(f64::NAN).validate().is_err());
        assert!(QueueConfig::default().grow_factor(f64::INFINITY).validate().is_err());
    }

    #[test]
    fn reject_negative_capacity() {
        let err = QueueConfig::from_json(r#"{ "initial_capacity": -1 }"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn round_trip_through_json() {
        let config = QueueConfig::default().initial_capacity(7).grow_factor(3.0);
        let text = serde_json::to_string(&config).unwrap();
        assert_eq!(QueueConfig::from_json(&text).unwrap(), config);
    }
}
