//! Internal finite-state machine for implementing decoders.
//!
//! This module is intended for applications that need fine control over
//! decoder internals, such as those assembling characteristic values from
//! several buffers. See [`crate::avec`] for implementations covering common
//! decoding patterns.
//!
//! # Architecture
//!
//! Each characteristic with optional fields is decoded by a chain of
//! zero-size or near-zero-size, non-copy state tokens. The entry token reads
//! the flags byte (together with any mandatory fields) and returns a successor
//! token for the first optional field its flags mark as present. Calling a
//! token's `advance` method with exactly the bytes of that field returns the
//! extracted value and the next successor, if any. Absent fields never produce
//! a token, so they occupy no bytes.
//!
//! Tokens for optional fields report, through `remaining`, how many bytes they
//! and all of their successors still require. Implementations should check
//! this against the available input before advancing, so that a value shorter
//! than its own flags claim is rejected without a partial result.
//!
//! Only the entry tokens can be constructed:
//!
//! - [`thermometer::MeasurementHeader`] for Health Thermometer Measurement.
//! - [`cycling::MeasurementFlags`] for Cycling Speed and Cadence Measurement.
//! - [`field::LeadingFlags`] for a flags-prefixed `uint8` or `uint16` field.
//!
//! Single-byte characteristics carry no flags and are mapped directly by the
//! total conversions in [`enumerated`]. Floating-point primitives shared by
//! these decoders live in [`float`].

pub mod cycling;
pub mod enumerated;
pub mod field;
pub mod float;
pub mod thermometer;
