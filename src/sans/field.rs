//! States processing a flags-prefixed leading field.
//!
//! Simple profiles (the Heart Rate Measurement layout is the usual example)
//! open with a flags byte whose lowest bit selects the width of the field that
//! follows it.

use core::marker::PhantomData;

use tartan_bitfield::bitfield;

/// State token to decode the flags byte preceding a leading field.
#[derive(Debug)]
pub struct LeadingFlags;

impl LeadingFlags {
    /// Transition to another state by decoding the flags byte.
    ///
    /// Returns a successor state token for a field of the selected width.
    pub fn advance(r: [u8; 1]) -> AnyField {
        bitfield! {
            struct Flags(u8) {
                [0] is_uint16,
            }
        }

        if Flags(r[0]).is_uint16() {
            AnyField::U16(Field(PhantomData))
        } else {
            AnyField::U8(Field(PhantomData))
        }
    }
}

/// State token to decode a field of base type `T`.
#[derive(Debug)]
pub struct Field<T>(PhantomData<T>);

impl<T: FieldInner> Field<T> {
    /// Bytes required by this field.
    pub fn remaining(&self) -> usize {
        T::SIZE
    }

    /// Decode a field of base type `T`, ending the value.
    pub fn advance(self, r: T::From) -> T::Into {
        T::from(r)
    }
}

pub trait FieldInner {
    /// Number of bytes storing this base type.
    const SIZE: usize;
    /// The data storing this base type.
    type From;
    /// The primitive corresponding to this base type.
    type Into;

    /// Convert little-endian data of this base type to the corresponding
    /// primitive.
    fn from(r: Self::From) -> Self::Into;
}

macro_rules! field_inner {
    ($t:ident, $into:ident, $(#[$attr:meta])*) => {
        $(#[$attr])*
        #[derive(Debug)]
        pub struct $t;

        impl FieldInner for $t {
            const SIZE: usize = size_of::<$into>();
            type From = [u8; size_of::<$into>()];
            type Into = $into;

            fn from(r: Self::From) -> Self::Into {
                $into::from_le_bytes(r)
            }
        }
    };
}

field_inner!(U8, u8, /** `uint8` */);
field_inner!(U16, u16, /** `uint16` */);

/// A `Field` state token for a base type.
#[derive(Debug)]
pub enum AnyField {
    U8(Field<U8>),
    U16(Field<U16>),
}

impl AnyField {
    /// Bytes required by the selected field.
    pub fn remaining(&self) -> usize {
        match self {
            Self::U8(s) => s.remaining(),
            Self::U16(s) => s.remaining(),
        }
    }
}
