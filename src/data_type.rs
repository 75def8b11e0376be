// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Element data types understood by OpenGL.
//!
//! `glTexImage2D`, `glVertexAttribPointer`, `glReadPixels` and friends take a `type`
//! argument describing how each element of the client data is stored.  This module
//! provides that argument as a closed enum, [`DataType`], and a compile-time table
//! from the Rust numeric types to it, [`HasDataType`].
//!
//! # Design
//!
//! The table is a sealed trait with an associated constant rather than a runtime
//! lookup.  Resolving the tag is free, and asking for a type that GL cannot take
//! is rejected by the compiler:
//!
//! ```
//! use prgl::{DataType, data_type_of};
//!
//! const TYPE: DataType = data_type_of::<f32>();
//! assert_eq!(TYPE, DataType::Float);
//! ```
//!
//! ```compile_fail
//! // u64 has no GL data type.
//! let _ = prgl::data_type_of::<u64>();
//! ```
//!
//! ```compile_fail
//! // The table is closed; downstream crates can't add entries.
//! struct Fixed(u32);
//! impl prgl::HasDataType for Fixed {
//!     const DATA_TYPE: prgl::DataType = prgl::DataType::UnsignedInt;
//! }
//! ```

use crate::constants;
use crate::data_type::sealed::Sealed;
use crate::error::UnknownDataType;
use half::f16;
use std::fmt::Display;

pub(crate) mod sealed {
    /// Keeps [`super::HasDataType`] closed to the nine GL element types.
    pub trait Sealed {}
}

/// Specifies the data type of pixel or vertex data.
///
/// The discriminant of each variant is the GL constant, so `DataType::Float as u32`
/// is `GL_FLOAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum DataType {
    UnsignedByte = constants::UNSIGNED_BYTE,
    Byte = constants::BYTE,
    UnsignedShort = constants::UNSIGNED_SHORT,
    Short = constants::SHORT,
    UnsignedInt = constants::UNSIGNED_INT,
    Int = constants::INT,
    HalfFloat = constants::HALF_FLOAT,
    Float = constants::FLOAT,
    Double = constants::DOUBLE,
}

impl DataType {
    /// Every variant, in declaration order.
    pub const ALL: [DataType; 9] = [
        DataType::UnsignedByte,
        DataType::Byte,
        DataType::UnsignedShort,
        DataType::Short,
        DataType::UnsignedInt,
        DataType::Int,
        DataType::HalfFloat,
        DataType::Float,
        DataType::Double,
    ];

    /// The GL constant to pass as a `type` argument.
    #[inline]
    pub const fn raw(self) -> u32 {
        self as u32
    }

    /// Size of one element in bytes.
    pub const fn byte_size(self) -> usize {
        match self {
            DataType::UnsignedByte | DataType::Byte => 1,
            DataType::UnsignedShort | DataType::Short | DataType::HalfFloat => 2,
            DataType::UnsignedInt | DataType::Int | DataType::Float => 4,
            DataType::Double => 8,
        }
    }

    pub const fn is_floating_point(self) -> bool {
        matches!(
            self,
            DataType::HalfFloat | DataType::Float | DataType::Double
        )
    }

    /// Whether the type can represent negative values.  Floating point types are signed.
    pub const fn is_signed(self) -> bool {
        !matches!(
            self,
            DataType::UnsignedByte | DataType::UnsignedShort | DataType::UnsignedInt
        )
    }

    /// The name of the GL constant, e.g. `GL_UNSIGNED_BYTE`.
    pub const fn gl_name(self) -> &'static str {
        match self {
            DataType::UnsignedByte => "GL_UNSIGNED_BYTE",
            DataType::Byte => "GL_BYTE",
            DataType::UnsignedShort => "GL_UNSIGNED_SHORT",
            DataType::Short => "GL_SHORT",
            DataType::UnsignedInt => "GL_UNSIGNED_INT",
            DataType::Int => "GL_INT",
            DataType::HalfFloat => "GL_HALF_FLOAT",
            DataType::Float => "GL_FLOAT",
            DataType::Double => "GL_DOUBLE",
        }
    }
}

impl Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.gl_name())
    }
}

impl From<DataType> for u32 {
    fn from(value: DataType) -> Self {
        value.raw()
    }
}

impl TryFrom<u32> for DataType {
    type Error = UnknownDataType;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        DataType::ALL
            .into_iter()
            .find(|t| t.raw() == value)
            .ok_or(UnknownDataType(value))
    }
}

/// Native numeric types with a GL data type.
///
/// Implemented for exactly `u8`, `i8`, `u16`, `i16`, `u32`, `i32`, [`f16`], `f32` and `f64`.
/// The trait is sealed.
pub trait HasDataType: Sealed + Copy + Send + Sync + 'static {
    /// The GL data type of `Self`.
    const DATA_TYPE: DataType;

    /// Size of `Self` in bytes.  Always agrees with `DATA_TYPE.byte_size()`.
    const BYTE_SIZE: usize = std::mem::size_of::<Self>();
}

/// Resolves the [`DataType`] of `T` at compile time.
#[inline]
pub const fn data_type_of<T: HasDataType>() -> DataType {
    T::DATA_TYPE
}

macro_rules! data_type_table {
    ($($native:ty => $variant:ident),* $(,)?) => {
        $(
            impl Sealed for $native {}
            impl HasDataType for $native {
                const DATA_TYPE: DataType = DataType::$variant;
            }
        )*
    };
}

data_type_table! {
    u8 => UnsignedByte,
    i8 => Byte,
    u16 => UnsignedShort,
    i16 => Short,
    u32 => UnsignedInt,
    i32 => Int,
    f16 => HalfFloat,
    f32 => Float,
    f64 => Double,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check<T: HasDataType>(expected: DataType) {
        assert_eq!(data_type_of::<T>(), expected);
        assert_eq!(T::BYTE_SIZE, expected.byte_size());
    }

    #[test]
    fn table() {
        check::<u8>(DataType::UnsignedByte);
        check::<i8>(DataType::Byte);
        check::<u16>(DataType::UnsignedShort);
        check::<i16>(DataType::Short);
        check::<u32>(DataType::UnsignedInt);
        check::<i32>(DataType::Int);
        check::<f16>(DataType::HalfFloat);
        check::<f32>(DataType::Float);
        check::<f64>(DataType::Double);
    }

    #[test]
    fn discriminants_are_gl_constants() {
        assert_eq!(DataType::UnsignedByte as u32, 0x1401);
        assert_eq!(DataType::Byte.raw(), 0x1400);
        assert_eq!(DataType::HalfFloat.raw(), 0x140B);
        assert_eq!(DataType::Double.raw(), 0x140A);
        assert_eq!(u32::from(DataType::Float), 0x1406);
    }

    #[test]
    fn try_from_accepts_only_data_types() {
        for t in DataType::ALL {
            assert_eq!(DataType::try_from(t.raw()), Ok(t));
        }
        //0x1407 is GL_2_BYTES, which GL accepts in some legacy entry points only
        assert_eq!(DataType::try_from(0x1407), Err(UnknownDataType(0x1407)));
        assert_eq!(DataType::try_from(0), Err(UnknownDataType(0)));
    }

    #[test]
    fn signedness() {
        let signed: Vec<_> = DataType::ALL.into_iter().filter(|t| t.is_signed()).collect();
        assert_eq!(
            signed,
            [
                DataType::Byte,
                DataType::Short,
                DataType::Int,
                DataType::HalfFloat,
                DataType::Float,
                DataType::Double
            ]
        );
        assert!(!DataType::Int.is_floating_point());
        assert!(DataType::HalfFloat.is_floating_point());
    }

    #[test]
    fn display() {
        assert_eq!(DataType::UnsignedShort.to_string(), "GL_UNSIGNED_SHORT");
    }
}
