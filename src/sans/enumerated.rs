//! Total conversions from coded bytes to enumerations.
//!
//! Every byte value maps to some variant. Codes outside the published range
//! are kept in a fallback variant rather than rejected.

use core::fmt;

/// An Alert Level (`0x2A06`) value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    NoAlert,
    MildAlert,
    HighAlert,
    /// A code reserved for future use.
    Reserved(u8),
}

impl From<u8> for AlertLevel {
    fn from(r: u8) -> Self {
        match r {
            0 => Self::NoAlert,
            1 => Self::MildAlert,
            2 => Self::HighAlert,
            r => Self::Reserved(r),
        }
    }
}

impl From<AlertLevel> for u8 {
    fn from(level: AlertLevel) -> Self {
        match level {
            AlertLevel::NoAlert => 0,
            AlertLevel::MildAlert => 1,
            AlertLevel::HighAlert => 2,
            AlertLevel::Reserved(r) => r,
        }
    }
}

impl fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoAlert => f.write_str("No Alert"),
            Self::MildAlert => f.write_str("Mild Alert"),
            Self::HighAlert => f.write_str("High Alert"),
            Self::Reserved(r) => write!(f, "Reserved value ({r})"),
        }
    }
}

/// A Temperature Type (`0x2A1D`) value: where on the body a temperature was
/// taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureType {
    Armpit,
    Body,
    Ear,
    Finger,
    GastrointestinalTract,
    Mouth,
    Rectum,
    Toe,
    Tympanum,
    /// Code zero, or a code reserved for future use.
    Unknown(u8),
}

impl From<u8> for TemperatureType {
    fn from(r: u8) -> Self {
        match r {
            1 => Self::Armpit,
            2 => Self::Body,
            3 => Self::Ear,
            4 => Self::Finger,
            5 => Self::GastrointestinalTract,
            6 => Self::Mouth,
            7 => Self::Rectum,
            8 => Self::Toe,
            9 => Self::Tympanum,
            r => Self::Unknown(r),
        }
    }
}

impl fmt::Display for TemperatureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Armpit => "Armpit",
            Self::Body => "Body",
            Self::Ear => "Ear",
            Self::Finger => "Finger",
            Self::GastrointestinalTract => "Gastro-intestinal Tract",
            Self::Mouth => "Mouth",
            Self::Rectum => "Rectum",
            Self::Toe => "Toe",
            Self::Tympanum => "Tympanum",
            Self::Unknown(_) => "Unknown",
        })
    }
}

/// The unit a Health Thermometer Measurement was taken in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
}

impl From<bool> for TemperatureUnit {
    /// Map the measurement's unit flag.
    fn from(is_fahrenheit: bool) -> Self {
        if is_fahrenheit {
            Self::Fahrenheit
        } else {
            Self::Celsius
        }
    }
}
