//! States processing Health Thermometer Measurement values.

use core::fmt;

use either::Either::{self, Left, Right};
use tartan_bitfield::bitfield;
use zerocopy::FromBytes;

use super::{
    enumerated::{TemperatureType, TemperatureUnit},
    float::Float,
};

bitfield! {
    struct Flags(u8) {
        [0] is_fahrenheit,
        [1] has_timestamp,
        [2] has_temperature_type,
    }
}

/// A temperature as transmitted, together with its unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Temperature {
    pub value: Float,
    pub unit: TemperatureUnit,
}

impl Temperature {
    /// The temperature in degrees Celsius, converting from Fahrenheit if
    /// necessary.
    pub fn celsius(self) -> f64 {
        let value = self.value.value();

        match self.unit {
            TemperatureUnit::Celsius => value,
            TemperatureUnit::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
        }
    }

    /// Encode as a minimal measurement: a flags byte holding only the unit,
    /// followed by the value.
    pub fn to_bytes(self) -> [u8; 5] {
        let flags = u8::from(self.unit == TemperatureUnit::Fahrenheit);
        let [b0, b1, b2, b3] = self.value.to_bytes();
        [flags, b0, b1, b2, b3]
    }
}

/// A Date Time (`0x2A08`) value.
///
/// Zero in any date field means the field is not known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hours, self.minutes, self.seconds
        )
    }
}

/// State token to decode the flags byte and temperature value of a
/// measurement.
#[derive(Debug)]
pub struct MeasurementHeader;

impl MeasurementHeader {
    /// Bytes holding the flags and temperature value.
    pub const SIZE: usize = 5;

    /// Transition to another state by decoding the flags byte and the
    /// temperature value.
    ///
    /// Returns the temperature, and a successor state token for the first
    /// optional field present, if any.
    pub fn advance(
        r: [u8; 5],
    ) -> (
        Temperature,
        Option<Either<TimestampField, TemperatureTypeField>>,
    ) {
        let [flags, value @ ..] = r;
        let flags = Flags(flags);

        let temperature = Temperature {
            value: Float::from_bytes(value),
            unit: flags.is_fahrenheit().into(),
        };

        let temperature_type = flags
            .has_temperature_type()
            .then_some(TemperatureTypeField(()));

        let successor = if flags.has_timestamp() {
            Some(Left(TimestampField { temperature_type }))
        } else {
            temperature_type.map(Right)
        };

        (temperature, successor)
    }
}

/// State token to decode the timestamp of a measurement.
#[derive(Debug)]
pub struct TimestampField {
    temperature_type: Option<TemperatureTypeField>,
}

impl TimestampField {
    /// Bytes required by this field and any fields following it.
    pub fn remaining(&self) -> usize {
        7 + self
            .temperature_type
            .as_ref()
            .map_or(0, TemperatureTypeField::remaining)
    }

    /// Transition to another state by decoding a timestamp.
    ///
    /// Returns the timestamp, and a successor state token if a temperature
    /// type follows.
    pub fn advance(self, r: [u8; 7]) -> (DateTime, Option<TemperatureTypeField>) {
        #[repr(C, packed)]
        #[derive(FromBytes)]
        struct DateTimeBytes {
            year: [u8; 2],
            month: u8,
            day: u8,
            hours: u8,
            minutes: u8,
            seconds: u8,
        }

        let DateTimeBytes {
            year,
            month,
            day,
            hours,
            minutes,
            seconds,
        } = zerocopy::transmute!(r);

        let timestamp = DateTime {
            year: u16::from_le_bytes(year),
            month,
            day,
            hours,
            minutes,
            seconds,
        };

        (timestamp, self.temperature_type)
    }
}

/// State token to decode the temperature type of a measurement.
#[derive(Debug)]
pub struct TemperatureTypeField(pub(super) ());

impl TemperatureTypeField {
    /// Bytes required by this field.
    pub fn remaining(&self) -> usize {
        1
    }

    /// Decode the temperature type, ending the measurement.
    pub fn advance(self, r: [u8; 1]) -> TemperatureType {
        r[0].into()
    }
}
