//! Human-readable reports for presentation layers.
//!
//! _Requires Cargo feature `std`._

use std::string::{String, ToString};

use super::{Characteristic, slice};

extern crate std;

/// Decode a characteristic value from a slice and render it as text.
///
/// Multi-line reports (Cycling Speed and Cadence, timestamped temperatures)
/// separate lines with `\n` and carry no trailing separator.
///
/// _Requires Cargo feature `std`._
pub fn describe(c: Characteristic, r: &[u8]) -> Result<String, slice::Error> {
    slice::decode(c, r).map(|m| m.to_string())
}

/// Decode a characteristic value identified by its 16-bit UUID and render it
/// as text.
///
/// _Requires Cargo feature `std`._
pub fn describe_uuid16(uuid: u16, r: &[u8]) -> Result<String, slice::Error> {
    describe(Characteristic::try_from(uuid)?, r)
}
