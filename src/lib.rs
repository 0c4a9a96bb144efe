#![no_std]

//! A decoder for standard Bluetooth Low Energy GATT characteristic values.
//!
//! Gattcodec interprets the raw bytes a peripheral delivers for a read,
//! notification or indication, following the bit-packed layouts published by
//! the Bluetooth SIG: flags bytes selecting optional fields, little-endian
//! integers of varying width, and IEEE-11073 floating-point numbers.
//!
//! Supported characteristics are Health Thermometer Measurement, Temperature
//! Type, Cycling Speed and Cadence Measurement, Battery Level, Alert Level,
//! and the flags-prefixed leading field used by simple template profiles.
//!
//! Most users should begin with the functions in the [`avec`] module. If
//! these prove insufficient (for example, when reading from a buffer that is
//! not contiguous), drive the finite-state machine in the [`sans`] module
//! directly.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `std`: enable `String` reports for presentation layers (default).

pub mod avec;
pub mod sans;
