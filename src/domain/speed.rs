// SPDX-License-Identifier: MPL-2.0
//! Speed-limit settings derived from slider positions.
//!
//! Each slider produces an integer in its configured range; the displayed
//! limit is `raw / divisor` with plain float division. The three limits are
//! independent: nothing keeps the minimum below the maximum.

/// Slider ranges and start positions.
pub mod slider_bounds {
    /// Max linear speed slider (0–10 m/s at 0.1 m/s resolution).
    pub const MAX_SPEED_MAX: u16 = 100;
    /// Angular speed slider (0–3.14 rad/s at 0.01 rad/s resolution).
    pub const ANGULAR_SPEED_MAX: u16 = 314;
    /// Min linear speed slider (0–5 m/s at 0.1 m/s resolution).
    pub const MIN_SPEED_MAX: u16 = 50;

    pub const MAX_SPEED_DEFAULT: u16 = 50;
    pub const ANGULAR_SPEED_DEFAULT: u16 = 157;
    pub const MIN_SPEED_DEFAULT: u16 = 10;
}

/// Inclusive integer range of a slider control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderRange {
    pub min: u16,
    pub max: u16,
}

impl SliderRange {
    #[must_use]
    pub const fn new(min: u16, max: u16) -> Self {
        Self { min, max }
    }

    /// Clamps `raw` into the range.
    #[must_use]
    pub fn clamp(self, raw: u16) -> u16 {
        raw.clamp(self.min, self.max)
    }

    #[must_use]
    pub fn contains(self, raw: u16) -> bool {
        (self.min..=self.max).contains(&raw)
    }
}

/// The three independent limits exposed as sliders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpeedLimit {
    /// Maximum linear speed (m/s).
    MaxLinear,
    /// Maximum angular speed (rad/s).
    Angular,
    /// Minimum linear speed (m/s).
    MinLinear,
}

impl SpeedLimit {
    pub const ALL: [SpeedLimit; 3] = [
        SpeedLimit::MaxLinear,
        SpeedLimit::Angular,
        SpeedLimit::MinLinear,
    ];

    /// Fixed scale factor between slider units and physical units.
    #[must_use]
    pub fn divisor(self) -> f64 {
        match self {
            SpeedLimit::MaxLinear => 10.0,
            SpeedLimit::Angular => 100.0,
            SpeedLimit::MinLinear => 10.0,
        }
    }

    #[must_use]
    pub fn range(self) -> SliderRange {
        match self {
            SpeedLimit::MaxLinear => SliderRange::new(0, slider_bounds::MAX_SPEED_MAX),
            SpeedLimit::Angular => SliderRange::new(0, slider_bounds::ANGULAR_SPEED_MAX),
            SpeedLimit::MinLinear => SliderRange::new(0, slider_bounds::MIN_SPEED_MAX),
        }
    }

    /// Slider position set at startup.
    #[must_use]
    pub fn default_raw(self) -> u16 {
        match self {
            SpeedLimit::MaxLinear => slider_bounds::MAX_SPEED_DEFAULT,
            SpeedLimit::Angular => slider_bounds::ANGULAR_SPEED_DEFAULT,
            SpeedLimit::MinLinear => slider_bounds::MIN_SPEED_DEFAULT,
        }
    }

    /// Converts a slider position to the displayed physical value.
    #[must_use]
    pub fn scale(self, raw: u16) -> f64 {
        f64::from(raw) / self.divisor()
    }

    /// Unit suffix shown next to the readout.
    #[must_use]
    pub fn unit(self) -> &'static str {
        match self {
            SpeedLimit::MaxLinear | SpeedLimit::MinLinear => "m/s",
            SpeedLimit::Angular => "rad/s",
        }
    }

    /// Localization key for the slider caption.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            SpeedLimit::MaxLinear => "limit-max-speed",
            SpeedLimit::Angular => "limit-angular-speed",
            SpeedLimit::MinLinear => "limit-min-speed",
        }
    }
}

/// Scales a max-speed slider position to m/s.
#[must_use]
pub fn scale_max_speed(raw: u16) -> f64 {
    SpeedLimit::MaxLinear.scale(raw)
}

/// Scales an angular-speed slider position to rad/s.
#[must_use]
pub fn scale_angular_speed(raw: u16) -> f64 {
    SpeedLimit::Angular.scale(raw)
}

/// Scales a min-speed slider position to m/s.
#[must_use]
pub fn scale_min_speed(raw: u16) -> f64 {
    SpeedLimit::MinLinear.scale(raw)
}

/// Current slider positions for the three limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeedLimits {
    max_linear: u16,
    angular: u16,
    min_linear: u16,
}

impl SpeedLimits {
    /// Builds the limits from raw positions, clamping each to its range.
    #[must_use]
    pub fn new(max_linear: u16, angular: u16, min_linear: u16) -> Self {
        Self {
            max_linear: SpeedLimit::MaxLinear.range().clamp(max_linear),
            angular: SpeedLimit::Angular.range().clamp(angular),
            min_linear: SpeedLimit::MinLinear.range().clamp(min_linear),
        }
    }

    #[must_use]
    pub fn raw(&self, limit: SpeedLimit) -> u16 {
        match limit {
            SpeedLimit::MaxLinear => self.max_linear,
            SpeedLimit::Angular => self.angular,
            SpeedLimit::MinLinear => self.min_linear,
        }
    }

    /// Physical value currently shown for `limit`.
    #[must_use]
    pub fn value(&self, limit: SpeedLimit) -> f64 {
        limit.scale(self.raw(limit))
    }

    /// Stores a new slider position (clamped) and returns the scaled value.
    pub fn set(&mut self, limit: SpeedLimit, raw: u16) -> f64 {
        let raw = limit.range().clamp(raw);
        match limit {
            SpeedLimit::MaxLinear => self.max_linear = raw,
            SpeedLimit::Angular => self.angular = raw,
            SpeedLimit::MinLinear => self.min_linear = raw,
        }
        limit.scale(raw)
    }
}

impl Default for SpeedLimits {
    fn default() -> Self {
        Self::new(
            slider_bounds::MAX_SPEED_DEFAULT,
            slider_bounds::ANGULAR_SPEED_DEFAULT,
            slider_bounds::MIN_SPEED_DEFAULT,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_speed_scale_matches_division_over_range() {
        for v in 0..=slider_bounds::MAX_SPEED_MAX {
            assert_eq!(scale_max_speed(v), f64::from(v) / 10.0);
        }
    }

    #[test]
    fn angular_scale_matches_division_over_range() {
        for v in 0..=slider_bounds::ANGULAR_SPEED_MAX {
            assert_eq!(scale_angular_speed(v), f64::from(v) / 100.0);
        }
    }

    #[test]
    fn min_speed_scale_matches_division_over_range() {
        for v in 0..=slider_bounds::MIN_SPEED_MAX {
            assert_eq!(scale_min_speed(v), f64::from(v) / 10.0);
        }
    }

    #[test]
    fn defaults_produce_documented_readouts() {
        let limits = SpeedLimits::default();
        assert_eq!(limits.value(SpeedLimit::MaxLinear), 5.0);
        assert_eq!(limits.value(SpeedLimit::Angular), 1.57);
        assert_eq!(limits.value(SpeedLimit::MinLinear), 1.0);
    }

    #[test]
    fn set_clamps_to_control_range() {
        let mut limits = SpeedLimits::default();
        assert_eq!(limits.set(SpeedLimit::MinLinear, 500), 5.0);
        assert_eq!(limits.raw(SpeedLimit::MinLinear), 50);
        assert_eq!(limits.set(SpeedLimit::Angular, 400), 3.14);
    }

    #[test]
    fn min_above_max_is_allowed() {
        let mut limits = SpeedLimits::default();
        limits.set(SpeedLimit::MaxLinear, 0);
        limits.set(SpeedLimit::MinLinear, 50);
        assert!(limits.value(SpeedLimit::MinLinear) > limits.value(SpeedLimit::MaxLinear));
    }

    #[test]
    fn ranges_contain_their_defaults() {
        for limit in SpeedLimit::ALL {
            assert!(limit.range().contains(limit.default_raw()));
        }
    }
}
