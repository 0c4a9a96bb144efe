//! Convenience interfaces for common decoding patterns.
//!
//! The functions in [`slice`] decode a complete characteristic value held in
//! a contiguous buffer, either by calling the decoder for a known
//! characteristic directly or by dispatching on a [`Characteristic`]. Decoded
//! values render as human-readable text through [`core::fmt::Display`].
//!
//! Cycling Speed and Cadence measurements carry cumulative counters rather
//! than speeds. To derive speed, distance and cadence, feed successive
//! measurements to a [`tracker::CscTracker`].

use core::fmt;

use crate::sans::{
    cycling::{CrankRevolutions, WheelRevolutions},
    enumerated::{AlertLevel, TemperatureType},
    thermometer::{DateTime, Temperature},
};

#[cfg(feature = "std")]
pub mod report;
pub mod slice;
pub mod tracker;

pub use slice::decode as decode_slice;

/// A supported characteristic type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Characteristic {
    /// Health Thermometer Measurement.
    TemperatureMeasurement,
    /// Temperature Type.
    TemperatureType,
    /// Cycling Speed and Cadence Measurement.
    CscMeasurement,
    /// Battery Level.
    BatteryLevel,
    /// Alert Level.
    AlertLevel,
    /// Heart Rate Measurement, decoded only as far as its leading field.
    ///
    /// This is the layout used by the template profile.
    HeartRateMeasurement,
}

impl Characteristic {
    /// All supported characteristics.
    pub const ALL: [Self; 6] = [
        Self::TemperatureMeasurement,
        Self::TemperatureType,
        Self::CscMeasurement,
        Self::BatteryLevel,
        Self::AlertLevel,
        Self::HeartRateMeasurement,
    ];

    /// The assigned 16-bit UUID.
    pub fn uuid16(self) -> u16 {
        match self {
            Self::TemperatureMeasurement => 0x2A1C,
            Self::TemperatureType => 0x2A1D,
            Self::CscMeasurement => 0x2A5B,
            Self::BatteryLevel => 0x2A19,
            Self::AlertLevel => 0x2A06,
            Self::HeartRateMeasurement => 0x2A37,
        }
    }

    /// Look up a characteristic by its assigned 16-bit UUID.
    pub fn from_uuid16(uuid: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.uuid16() == uuid)
    }
}

impl TryFrom<u16> for Characteristic {
    type Error = slice::Error;

    fn try_from(uuid: u16) -> Result<Self, Self::Error> {
        Self::from_uuid16(uuid).ok_or(slice::Error::UnsupportedCharacteristic(uuid))
    }
}

/// A decoded Health Thermometer Measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureMeasurement {
    pub temperature: Temperature,
    pub timestamp: Option<DateTime>,
    pub temperature_type: Option<TemperatureType>,
}

impl fmt::Display for TemperatureMeasurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}°C", self.temperature.celsius())?;

        if let Some(timestamp) = self.timestamp {
            write!(f, "\nTime: {timestamp}")?;
        }
        if let Some(temperature_type) = self.temperature_type {
            write!(f, "\nType: {temperature_type}")?;
        }

        Ok(())
    }
}

/// A decoded Cycling Speed and Cadence Measurement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CscMeasurement {
    pub wheel: Option<WheelRevolutions>,
    pub crank: Option<CrankRevolutions>,
}

impl fmt::Display for CscMeasurement {
    /// Write one labelled line per value present, separated by newlines.
    ///
    /// A measurement without wheel or crank data renders as an empty string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines = [None; 4];

        if let Some(wheel) = self.wheel {
            lines[0] = Some(("Wheel revolutions", wheel.revolutions));
            lines[1] = Some(("Last wheel event time", u32::from(wheel.event_time)));
        }
        if let Some(crank) = self.crank {
            lines[2] = Some(("Crank revolutions", u32::from(crank.revolutions)));
            lines[3] = Some(("Last crank event time", u32::from(crank.event_time)));
        }

        for (n, (label, value)) in lines.into_iter().flatten().enumerate() {
            if n != 0 {
                f.write_str("\n")?;
            }
            write!(f, "{label}: {value}")?;
        }

        Ok(())
    }
}

/// A decoded characteristic value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Measurement {
    Temperature(TemperatureMeasurement),
    TemperatureType(TemperatureType),
    Csc(CscMeasurement),
    /// Battery charge as a percentage. Values above 100 are passed through.
    BatteryLevel(u8),
    AlertLevel(AlertLevel),
    LeadingField(u16),
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Temperature(m) => fmt::Display::fmt(m, f),
            Self::TemperatureType(t) => fmt::Display::fmt(t, f),
            Self::Csc(m) => fmt::Display::fmt(m, f),
            Self::BatteryLevel(b) => write!(f, "{b}%"),
            Self::AlertLevel(a) => fmt::Display::fmt(a, f),
            Self::LeadingField(v) => write!(f, "{v}"),
        }
    }
}
