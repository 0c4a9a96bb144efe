//! States processing Cycling Speed and Cadence Measurement values.

use either::Either::{self, Left, Right};
use tartan_bitfield::bitfield;
use zerocopy::FromBytes;

bitfield! {
    struct Flags(u8) {
        [0] has_wheel_data,
        [1] has_crank_data,
    }
}

/// Cumulative wheel revolutions and the time of the latest revolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WheelRevolutions {
    pub revolutions: u32,
    /// Event time, in units of 1/1024 second. Wraps every 64 seconds.
    pub event_time: u16,
}

/// Cumulative crank revolutions and the time of the latest revolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrankRevolutions {
    pub revolutions: u16,
    /// Event time, in units of 1/1024 second. Wraps every 64 seconds.
    pub event_time: u16,
}

/// State token to decode the flags byte of a measurement.
#[derive(Debug)]
pub struct MeasurementFlags;

impl MeasurementFlags {
    /// Transition to another state by decoding the flags byte.
    ///
    /// Returns a successor state token for the first field present, if any.
    pub fn advance(r: [u8; 1]) -> Option<Either<WheelData, CrankData>> {
        let flags = Flags(r[0]);

        let crank = flags.has_crank_data().then_some(CrankData(()));

        if flags.has_wheel_data() {
            Some(Left(WheelData { crank }))
        } else {
            crank.map(Right)
        }
    }
}

/// State token to decode wheel revolution data.
#[derive(Debug)]
pub struct WheelData {
    crank: Option<CrankData>,
}

impl WheelData {
    /// Bytes required by this field and any fields following it.
    pub fn remaining(&self) -> usize {
        6 + self.crank.as_ref().map_or(0, CrankData::remaining)
    }

    /// Transition to another state by decoding wheel revolution data.
    ///
    /// Returns the wheel data, and a successor state token if crank data
    /// follows.
    pub fn advance(self, r: [u8; 6]) -> (WheelRevolutions, Option<CrankData>) {
        #[repr(C, packed)]
        #[derive(FromBytes)]
        struct WheelBytes {
            revolutions: [u8; 4],
            event_time: [u8; 2],
        }

        let WheelBytes {
            revolutions,
            event_time,
        } = zerocopy::transmute!(r);

        let wheel = WheelRevolutions {
            revolutions: u32::from_le_bytes(revolutions),
            event_time: u16::from_le_bytes(event_time),
        };

        (wheel, self.crank)
    }
}

/// State token to decode crank revolution data.
#[derive(Debug)]
pub struct CrankData(pub(super) ());

impl CrankData {
    /// Bytes required by this field.
    pub fn remaining(&self) -> usize {
        4
    }

    /// Decode crank revolution data, ending the measurement.
    pub fn advance(self, r: [u8; 4]) -> CrankRevolutions {
        #[repr(C, packed)]
        #[derive(FromBytes)]
        struct CrankBytes {
            revolutions: [u8; 2],
            event_time: [u8; 2],
        }

        let CrankBytes {
            revolutions,
            event_time,
        } = zerocopy::transmute!(r);

        CrankRevolutions {
            revolutions: u16::from_le_bytes(revolutions),
            event_time: u16::from_le_bytes(event_time),
        }
    }
}
