//! Healthiness range selector.
//!
//! Two endpoints in `[HEALTH_MIN, HEALTH_MAX]` with `min <= max` restored
//! immediately after every change.

use serde::{Deserialize, Serialize};

pub const HEALTH_MIN: u8 = 1;
pub const HEALTH_MAX: u8 = 5;

/// What happens when a changed endpoint crosses the other one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeClamp {
    /// The changed endpoint keeps its value and the other one follows it.
    Push,
    /// The changed endpoint is held at the other endpoint's value.
    #[default]
    Stop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthRange {
    min: u8,
    max: u8,
    clamp: RangeClamp,
}

impl Default for HealthRange {
    fn default() -> Self {
        Self::new(RangeClamp::default())
    }
}

impl HealthRange {
    pub fn new(clamp: RangeClamp) -> Self {
        Self {
            min: HEALTH_MIN,
            max: HEALTH_MAX,
            clamp,
        }
    }

    pub fn min(&self) -> u8 {
        self.min
    }

    pub fn max(&self) -> u8 {
        self.max
    }

    #[cfg(test)]
    pub fn clamp_mode(&self) -> RangeClamp {
        self.clamp
    }

    /// Move the lower endpoint. Out-of-bounds values are clamped to the scale.
    pub fn set_min(&mut self, value: u8) {
        self.min = value.clamp(HEALTH_MIN, HEALTH_MAX);
        if self.min > self.max {
            match self.clamp {
                RangeClamp::Push => self.max = self.min,
                RangeClamp::Stop => self.min = self.max,
            }
        }
    }

    /// Move the upper endpoint. Out-of-bounds values are clamped to the scale.
    pub fn set_max(&mut self, value: u8) {
        self.max = value.clamp(HEALTH_MIN, HEALTH_MAX);
        if self.max < self.min {
            match self.clamp {
                RangeClamp::Push => self.min = self.max,
                RangeClamp::Stop => self.max = self.min,
            }
        }
    }

    pub fn reset(&mut self) {
        self.min = HEALTH_MIN;
        self.max = HEALTH_MAX;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_full_scale() {
        let range = HealthRange::default();
        assert_eq!((range.min(), range.max()), (1, 5));
        assert_eq!(range.clamp_mode(), RangeClamp::Stop);
    }

    #[test]
    fn test_default_range_holds_dragged_endpoint() {
        let mut range = HealthRange::default();
        range.set_max(2);
        range.set_min(4);
        assert_eq!((range.min(), range.max()), (2, 2));
    }

    #[test]
    fn test_push_moves_other_endpoint() {
        let mut range = HealthRange::new(RangeClamp::Push);
        range.set_max(2);
        range.set_min(4);
        assert_eq!((range.min(), range.max()), (4, 4));

        range.set_max(1);
        assert_eq!((range.min(), range.max()), (1, 1));
    }

    #[test]
    fn test_stop_holds_dragged_endpoint() {
        let mut range = HealthRange::new(RangeClamp::Stop);
        range.set_max(2);
        range.set_min(4);
        assert_eq!((range.min(), range.max()), (2, 2));

        range.set_min(1);
        range.set_max(3);
        range.set_min(2);
        assert_eq!((range.min(), range.max()), (2, 3));
        range.set_max(1);
        assert_eq!((range.min(), range.max()), (2, 2));
    }

    #[test]
    fn test_values_clamped_to_scale() {
        let mut range = HealthRange::default();
        range.set_min(0);
        range.set_max(9);
        assert_eq!((range.min(), range.max()), (1, 5));
    }

    #[test]
    fn test_invariant_holds_for_any_sequence() {
        for clamp in [RangeClamp::Push, RangeClamp::Stop] {
            let mut range = HealthRange::new(clamp);
            // Deterministic pseudo-random walk over both endpoints
            let mut seed: u32 = 7;
            for _ in 0..500 {
                seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
                let value = ((seed >> 16) % 7) as u8;
                if seed & 1 == 0 {
                    range.set_min(value);
                } else {
                    range.set_max(value);
                }
                assert!(range.min() <= range.max());
                assert!(range.min() >= HEALTH_MIN && range.max() <= HEALTH_MAX);
            }
        }
    }

    #[test]
    fn test_clamp_mode_serialization() {
        assert_eq!(serde_json::to_string(&RangeClamp::Stop).unwrap(), "\"stop\"");
        let parsed: RangeClamp = serde_json::from_str("\"push\"").unwrap();
        assert_eq!(parsed, RangeClamp::Push);
    }
}
