//! IEEE-11073 floating-point primitives.
//!
//! Medical device profiles encode measurements as a base-10 exponent and a
//! signed mantissa packed into 32 bits (`FLOAT`) or 16 bits (`SFLOAT`). Both
//! mantissa widths fall outside the native integer sizes, so their sign is
//! recovered explicitly with [`sign_extend`].

use tartan_bitfield::bitfield;

/// Interpret the low `bits` of a value as a two's complement integer.
///
/// The value is masked to the field width before its sign bit is tested, so
/// any higher bits are ignored. `bits` must lie within `2..32`.
pub fn sign_extend(raw: u32, bits: u32) -> i32 {
    debug_assert!((2..32).contains(&bits));

    let mask = u32::MAX >> (32 - bits);
    let raw = raw & mask;

    if raw & (1 << (bits - 1)) != 0 {
        -((((!raw) & mask) + 1) as i32)
    } else {
        raw as i32
    }
}

/// Multiply a mantissa by ten raised to a signed exponent.
///
/// Negative exponents divide by the corresponding positive power, keeping
/// short decimal values such as `590e-2` exact to the nearest `f64`.
pub fn scale(mantissa: i32, exponent: i8) -> f64 {
    let factor = (0..exponent.unsigned_abs()).fold(1.0_f64, |f, _| f * 10.0);

    if exponent < 0 {
        mantissa as f64 / factor
    } else {
        mantissa as f64 * factor
    }
}

/// A reserved encoding standing in for a measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Special {
    /// Not a number.
    NaN,
    /// Not at this resolution.
    NRes,
    /// Positive infinity.
    PositiveInfinity,
    /// Negative infinity.
    NegativeInfinity,
    /// Reserved for future use.
    Reserved,
}

/// A 32-bit `FLOAT`: a signed 8-bit exponent and a signed 24-bit mantissa.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Float {
    /// Mantissa, within the signed 24-bit range.
    pub mantissa: i32,
    /// Base-10 exponent.
    pub exponent: i8,
}

impl Float {
    /// Decode a `FLOAT` stored as a little-endian mantissa followed by the
    /// exponent byte.
    pub fn from_bytes(r: [u8; 4]) -> Self {
        let [b0, b1, b2, exponent] = r;

        let raw = (u32::from(b2) << 16) | (u32::from(b1) << 8) | u32::from(b0);

        Self {
            mantissa: sign_extend(raw & 0x00FF_FFFF, 24),
            exponent: exponent as i8,
        }
    }

    /// Encode as a little-endian mantissa followed by the exponent byte.
    ///
    /// Mantissa bits above the 24-bit field are discarded.
    pub fn to_bytes(self) -> [u8; 4] {
        let [b0, b1, b2, _] = (self.mantissa as u32 & 0x00FF_FFFF).to_le_bytes();
        [b0, b1, b2, self.exponent as u8]
    }

    /// The numeric value, `mantissa * 10^exponent`.
    ///
    /// Special values are not interpreted; check [`Float::special`] first if
    /// they matter.
    pub fn value(self) -> f64 {
        scale(self.mantissa, self.exponent)
    }

    /// The reserved meaning of this encoding, if it has one.
    pub fn special(self) -> Option<Special> {
        if self.exponent != 0 {
            return None;
        }

        match self.mantissa as u32 & 0x00FF_FFFF {
            0x7F_FFFF => Some(Special::NaN),
            0x80_0000 => Some(Special::NRes),
            0x7F_FFFE => Some(Special::PositiveInfinity),
            0x80_0002 => Some(Special::NegativeInfinity),
            0x80_0001 => Some(Special::Reserved),
            _ => None,
        }
    }
}

bitfield! {
    struct SFloatBits(u16) {
        [0..12] mantissa: u16,
        [12..16] exponent: u16,
    }
}

/// A 16-bit `SFLOAT`: a signed 4-bit exponent and a signed 12-bit mantissa.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SFloat {
    /// Mantissa, within the signed 12-bit range.
    pub mantissa: i16,
    /// Exponent, within the signed 4-bit range.
    pub exponent: i8,
}

impl SFloat {
    /// Decode a little-endian `SFLOAT`.
    pub fn from_bytes(r: [u8; 2]) -> Self {
        let bits = SFloatBits(u16::from_le_bytes(r));

        Self {
            mantissa: sign_extend(u32::from(bits.mantissa()), 12) as i16,
            exponent: sign_extend(u32::from(bits.exponent()), 4) as i8,
        }
    }

    /// Encode as a little-endian `SFLOAT`.
    ///
    /// Bits outside the mantissa and exponent fields are discarded.
    pub fn to_bytes(self) -> [u8; 2] {
        let raw = ((self.exponent as u16 & 0x000F) << 12) | (self.mantissa as u16 & 0x0FFF);
        raw.to_le_bytes()
    }

    /// The numeric value, `mantissa * 10^exponent`.
    pub fn value(self) -> f64 {
        scale(i32::from(self.mantissa), self.exponent)
    }

    /// The reserved meaning of this encoding, if it has one.
    pub fn special(self) -> Option<Special> {
        if self.exponent != 0 {
            return None;
        }

        match self.mantissa as u16 & 0x0FFF {
            0x07FF => Some(Special::NaN),
            0x0800 => Some(Special::NRes),
            0x07FE => Some(Special::PositiveInfinity),
            0x0802 => Some(Special::NegativeInfinity),
            0x0801 => Some(Special::Reserved),
            _ => None,
        }
    }
}
