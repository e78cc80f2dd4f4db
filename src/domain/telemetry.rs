// SPDX-License-Identifier: MPL-2.0
//! Telemetry readouts shown on the console.
//!
//! No live sensor feeds these values. They are set to literal defaults at
//! startup and only the movement handlers overwrite speed and angular speed.

/// Every numeric readout on the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TelemetryField {
    FrontLeftMotorCurrent,
    FrontRightMotorCurrent,
    BackRightMotorCurrent,
    BackLeftMotorCurrent,
    JetsonModuleVoltage,
    ArduinoModuleVoltage,
    LidarModuleVoltage,
    BatteryVoltage,
    FrameRate,
    Speed,
    AngularSpeed,
    Heading,
}

impl TelemetryField {
    pub const ALL: [TelemetryField; 12] = [
        TelemetryField::FrontLeftMotorCurrent,
        TelemetryField::FrontRightMotorCurrent,
        TelemetryField::BackRightMotorCurrent,
        TelemetryField::BackLeftMotorCurrent,
        TelemetryField::JetsonModuleVoltage,
        TelemetryField::ArduinoModuleVoltage,
        TelemetryField::LidarModuleVoltage,
        TelemetryField::BatteryVoltage,
        TelemetryField::FrameRate,
        TelemetryField::Speed,
        TelemetryField::AngularSpeed,
        TelemetryField::Heading,
    ];

    /// Motor, module, battery and frame-rate readouts.
    pub const SENSORS: [TelemetryField; 9] = [
        TelemetryField::FrontLeftMotorCurrent,
        TelemetryField::FrontRightMotorCurrent,
        TelemetryField::BackRightMotorCurrent,
        TelemetryField::BackLeftMotorCurrent,
        TelemetryField::JetsonModuleVoltage,
        TelemetryField::ArduinoModuleVoltage,
        TelemetryField::LidarModuleVoltage,
        TelemetryField::BatteryVoltage,
        TelemetryField::FrameRate,
    ];

    /// Robot status readouts.
    pub const STATUS: [TelemetryField; 3] = [
        TelemetryField::Speed,
        TelemetryField::AngularSpeed,
        TelemetryField::Heading,
    ];

    /// Value written at startup.
    #[must_use]
    pub fn default_value(self) -> f64 {
        match self {
            TelemetryField::FrontLeftMotorCurrent => 12.5,
            TelemetryField::FrontRightMotorCurrent => 12.3,
            TelemetryField::BackRightMotorCurrent => 12.4,
            TelemetryField::BackLeftMotorCurrent => 12.6,
            TelemetryField::JetsonModuleVoltage => 5.2,
            TelemetryField::ArduinoModuleVoltage => 5.1,
            TelemetryField::LidarModuleVoltage => 24.1,
            TelemetryField::BatteryVoltage => 24.8,
            TelemetryField::FrameRate => 30.0,
            TelemetryField::Speed | TelemetryField::AngularSpeed | TelemetryField::Heading => 0.0,
        }
    }

    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            TelemetryField::FrontLeftMotorCurrent => "telemetry-motor-front-left",
            TelemetryField::FrontRightMotorCurrent => "telemetry-motor-front-right",
            TelemetryField::BackRightMotorCurrent => "telemetry-motor-back-right",
            TelemetryField::BackLeftMotorCurrent => "telemetry-motor-back-left",
            TelemetryField::JetsonModuleVoltage => "telemetry-jetson-module",
            TelemetryField::ArduinoModuleVoltage => "telemetry-arduino-module",
            TelemetryField::LidarModuleVoltage => "telemetry-lidar-module",
            TelemetryField::BatteryVoltage => "telemetry-battery",
            TelemetryField::FrameRate => "telemetry-frame-rate",
            TelemetryField::Speed => "telemetry-speed",
            TelemetryField::AngularSpeed => "telemetry-angular-speed",
            TelemetryField::Heading => "telemetry-heading",
        }
    }

    /// Unit suffix shown next to the readout.
    #[must_use]
    pub fn unit(self) -> &'static str {
        match self {
            TelemetryField::FrontLeftMotorCurrent
            | TelemetryField::FrontRightMotorCurrent
            | TelemetryField::BackRightMotorCurrent
            | TelemetryField::BackLeftMotorCurrent => "A",
            TelemetryField::JetsonModuleVoltage
            | TelemetryField::ArduinoModuleVoltage
            | TelemetryField::LidarModuleVoltage
            | TelemetryField::BatteryVoltage => "V",
            TelemetryField::FrameRate => "fps",
            TelemetryField::Speed => "m/s",
            TelemetryField::AngularSpeed => "rad/s",
            TelemetryField::Heading => "°",
        }
    }

    // Declaration order matches `ALL`.
    fn slot(self) -> usize {
        self as usize
    }
}

/// Write-only store behind the numeric readouts.
#[derive(Debug, Clone, PartialEq)]
pub struct TelemetryDisplay {
    values: [f64; 12],
}

impl TelemetryDisplay {
    /// Display populated with every field's literal default.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut values = [0.0; 12];
        for field in TelemetryField::ALL {
            values[field.slot()] = field.default_value();
        }
        Self { values }
    }

    /// Overwrites one readout.
    pub fn set(&mut self, field: TelemetryField, value: f64) {
        self.values[field.slot()] = value;
    }

    /// Value currently shown for `field`.
    #[must_use]
    pub fn get(&self, field: TelemetryField) -> f64 {
        self.values[field.slot()]
    }
}

impl Default for TelemetryDisplay {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_literal_readings() {
        let display = TelemetryDisplay::with_defaults();
        assert_eq!(display.get(TelemetryField::FrontLeftMotorCurrent), 12.5);
        assert_eq!(display.get(TelemetryField::FrontRightMotorCurrent), 12.3);
        assert_eq!(display.get(TelemetryField::BackRightMotorCurrent), 12.4);
        assert_eq!(display.get(TelemetryField::BackLeftMotorCurrent), 12.6);
        assert_eq!(display.get(TelemetryField::JetsonModuleVoltage), 5.2);
        assert_eq!(display.get(TelemetryField::ArduinoModuleVoltage), 5.1);
        assert_eq!(display.get(TelemetryField::LidarModuleVoltage), 24.1);
        assert_eq!(display.get(TelemetryField::BatteryVoltage), 24.8);
        assert_eq!(display.get(TelemetryField::FrameRate), 30.0);
        for field in TelemetryField::STATUS {
            assert_eq!(display.get(field), 0.0);
        }
    }

    #[test]
    fn set_overwrites_only_its_field() {
        let mut display = TelemetryDisplay::with_defaults();
        display.set(TelemetryField::Heading, 90.0);
        assert_eq!(display.get(TelemetryField::Heading), 90.0);
        assert_eq!(display.get(TelemetryField::Speed), 0.0);
        assert_eq!(display.get(TelemetryField::BatteryVoltage), 24.8);
    }

    #[test]
    fn sensor_and_status_partition_all_fields() {
        assert_eq!(
            TelemetryField::SENSORS.len() + TelemetryField::STATUS.len(),
            TelemetryField::ALL.len()
        );
        for field in TelemetryField::ALL {
            let in_sensors = TelemetryField::SENSORS.contains(&field);
            let in_status = TelemetryField::STATUS.contains(&field);
            assert!(in_sensors ^ in_status, "{field:?} must be in exactly one group");
        }
    }
}
