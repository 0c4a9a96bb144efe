//! Slice-based decoder implementation.

use either::{
    Either::{Left, Right},
    for_both,
};
use log::debug;
use thiserror::Error;

use crate::sans::{
    cycling::MeasurementFlags,
    enumerated::{AlertLevel, TemperatureType},
    field::{AnyField, Field, FieldInner, LeadingFlags},
    thermometer::MeasurementHeader,
};

use super::{Characteristic, CscMeasurement, Measurement, TemperatureMeasurement};

/// Errors occurring while decoding from a slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The slice is shorter than its flags require.
    #[error("Expected at least {required} bytes, found {found}.")]
    MalformedLength { required: usize, found: usize },
    /// No decoder exists for the characteristic UUID.
    #[error("Unsupported characteristic ({0:#06x}).")]
    UnsupportedCharacteristic(u16),
}

/// Decode a characteristic value from a slice.
///
/// Health Thermometer Measurements are decoded in full, so the slice must hold
/// every optional field its flags announce. Use [`decode_temperature`] to read
/// only the temperature from a value that may omit them.
///
/// This method is also re-exported as `gattcodec::avec::decode_slice`.
pub fn decode(c: Characteristic, r: &[u8]) -> Result<Measurement, Error> {
    Ok(match c {
        Characteristic::TemperatureMeasurement => {
            Measurement::Temperature(decode_temperature_measurement(r)?)
        }
        Characteristic::TemperatureType => {
            Measurement::TemperatureType(decode_temperature_type(r, 0)?)
        }
        Characteristic::CscMeasurement => Measurement::Csc(decode_csc_measurement(r)?),
        Characteristic::BatteryLevel => Measurement::BatteryLevel(decode_battery_level(r)?),
        Characteristic::AlertLevel => Measurement::AlertLevel(decode_alert_level(r)?),
        Characteristic::HeartRateMeasurement => {
            Measurement::LeadingField(decode_leading_field(r)?)
        }
    })
}

/// Decode the temperature, in degrees Celsius, from a Health Thermometer
/// Measurement.
///
/// Only the unit flag is consulted, so any five-byte value decodes, whatever
/// optional fields its flags announce.
pub fn decode_temperature(r: &[u8]) -> Result<f64, Error> {
    let (temperature, _) = MeasurementHeader::advance(take(r, &mut 0)?);

    Ok(temperature.celsius())
}

/// Decode a Health Thermometer Measurement, including the timestamp and
/// temperature type when its flags announce them.
pub fn decode_temperature_measurement(r: &[u8]) -> Result<TemperatureMeasurement, Error> {
    let i = &mut 0;

    let (temperature, successor) = MeasurementHeader::advance(take(r, i)?);

    let mut measurement = TemperatureMeasurement {
        temperature,
        timestamp: None,
        temperature_type: None,
    };

    if let Some(state) = &successor {
        ensure(r, *i + for_both!(state, s => s.remaining()))?;
    }

    let temperature_type = match successor {
        Some(Left(state)) => {
            let (timestamp, successor) = state.advance(take(r, i)?);
            measurement.timestamp = Some(timestamp);
            successor
        }
        Some(Right(state)) => Some(state),
        None => None,
    };

    if let Some(state) = temperature_type {
        measurement.temperature_type = Some(state.advance(take(r, i)?));
    }

    Ok(measurement)
}

/// Decode a Cycling Speed and Cadence Measurement.
pub fn decode_csc_measurement(r: &[u8]) -> Result<CscMeasurement, Error> {
    let i = &mut 0;

    let successor = MeasurementFlags::advance(take(r, i)?);

    if let Some(state) = &successor {
        ensure(r, *i + for_both!(state, s => s.remaining()))?;
    }

    let mut measurement = CscMeasurement::default();

    let crank = match successor {
        Some(Left(state)) => {
            let (wheel, successor) = state.advance(take(r, i)?);
            measurement.wheel = Some(wheel);
            successor
        }
        Some(Right(state)) => Some(state),
        None => None,
    };

    if let Some(state) = crank {
        measurement.crank = Some(state.advance(take(r, i)?));
    }

    Ok(measurement)
}

/// Decode a Battery Level percentage.
///
/// Values above 100 are returned as received.
pub fn decode_battery_level(r: &[u8]) -> Result<u8, Error> {
    let [level] = take::<1>(r, &mut 0)?;
    Ok(level)
}

/// Decode an Alert Level.
///
/// Every byte value maps to a level; this fails only for an empty slice.
pub fn decode_alert_level(r: &[u8]) -> Result<AlertLevel, Error> {
    let [level] = take::<1>(r, &mut 0)?;
    Ok(level.into())
}

/// Decode a Temperature Type stored at an offset.
///
/// Every byte value maps to a type; this fails only if the slice ends before
/// the offset.
pub fn decode_temperature_type(r: &[u8], offset: usize) -> Result<TemperatureType, Error> {
    let [code] = take::<1>(r, &mut { offset })?;
    Ok(code.into())
}

/// Decode a leading `uint8` or `uint16` field, as selected by bit 0 of the
/// flags byte preceding it.
pub fn decode_leading_field(r: &[u8]) -> Result<u16, Error> {
    let i = &mut 0;

    ensure(r, 2)?;
    let state = LeadingFlags::advance(take(r, i)?);
    ensure(r, *i + state.remaining())?;

    fn decode_field<T: FieldInner<From = [u8; N]>, const N: usize>(
        state: Field<T>,
        r: &[u8],
        i: &mut usize,
    ) -> Result<T::Into, Error> {
        Ok(state.advance(take(r, i)?))
    }

    match state {
        AnyField::U8(s) => decode_field(s, r, i).map(u16::from),
        AnyField::U16(s) => decode_field(s, r, i),
    }
}

/// Check that a slice holds at least a required number of bytes.
fn ensure(r: &[u8], required: usize) -> Result<(), Error> {
    if r.len() < required {
        debug!(
            "Discarding {}-byte value, expected at least {required}.",
            r.len()
        );
        Err(Error::MalformedLength {
            required,
            found: r.len(),
        })?;
    }

    Ok(())
}

/// Take an exact number of bytes from an offset in a slice, advancing the offset.
fn take<const N: usize>(r: &[u8], i: &mut usize) -> Result<[u8; N], Error> {
    let s = *i;
    ensure(r, s.saturating_add(N))?;
    *i = s + N;

    r.get(s..*i)
        .and_then(|b| b.try_into().ok())
        .ok_or(Error::MalformedLength {
            required: *i,
            found: r.len(),
        })
}
