//! Scalar casts from the eleven source encodings to the eight native kinds.
//!
//! Integer conversions are two's-complement: signed sources sign-extend,
//! unsigned sources zero-extend, and narrower targets keep the low-order
//! bits. Float targets round to nearest. Float sources converted to an
//! integer kind truncate toward zero and saturate, NaN becoming zero.

use crate::endian::{
    load_reversed, read_f32_ne, read_f64_ne, read_i16_ne, read_i32_ne, read_i64_ne, read_i8,
    read_u16_ne, read_u32_ne, read_u64_ne, read_u8, Reversible,
};
use crate::kind::NativeValue;

/// A decoded source value that can be cast to every native kind.
pub trait Scalar: Copy {
    /// True for any nonzero value; `-0.0` is false and NaN is true.
    fn to_boolean(self) -> bool;
    /// Sign- or zero-extend, then keep the low 8 bits.
    fn to_byte(self) -> i8;
    /// Keep the low 16 bits as an unsigned code unit.
    fn to_char(self) -> u16;
    /// Sign- or zero-extend, then keep the low 16 bits.
    fn to_short(self) -> i16;
    /// Sign- or zero-extend, then keep the low 32 bits.
    fn to_int(self) -> i32;
    /// Sign- or zero-extend to 64 bits.
    fn to_long(self) -> i64;
    /// Nearest `f32`.
    fn to_float(self) -> f32;
    /// Nearest `f64`.
    fn to_double(self) -> f64;
}

macro_rules! impl_scalar {
    ($($ty:ty => $zero:expr),* $(,)?) => {
        $(
            impl Scalar for $ty {
                #[inline]
                fn to_boolean(self) -> bool {
                    self != $zero
                }
                #[inline]
                fn to_byte(self) -> i8 {
                    self as i8
                }
                #[inline]
                fn to_char(self) -> u16 {
                    self as u16
                }
                #[inline]
                fn to_short(self) -> i16 {
                    self as i16
                }
                #[inline]
                fn to_int(self) -> i32 {
                    self as i32
                }
                #[inline]
                fn to_long(self) -> i64 {
                    self as i64
                }
                #[inline]
                fn to_float(self) -> f32 {
                    self as f32
                }
                #[inline]
                fn to_double(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_scalar!(
    i8 => 0,
    u8 => 0,
    i16 => 0,
    u16 => 0,
    i32 => 0,
    u32 => 0,
    i64 => 0,
    u64 => 0,
    f32 => 0.0,
    f64 => 0.0,
);

/// A scalar that can be read from the head of a host-order byte slice.
pub trait Element: Scalar {
    /// Decode one element from the head of `buf`.
    ///
    /// # Panics
    /// Panics if `buf` is shorter than the element.
    fn read(buf: &[u8]) -> Self;
}

/// An element wide enough to have a byte order.
pub trait WideElement: Element {
    /// Fixed-size byte array holding one element.
    type Bytes: Reversible;

    /// Decode one element from host-order bytes.
    fn from_ne(bytes: Self::Bytes) -> Self;

    /// Decode one element whose bytes are stored in the opposite order.
    #[inline]
    fn read_reversed(buf: &[u8]) -> Self {
        Self::from_ne(load_reversed(buf))
    }
}

impl Element for i8 {
    #[inline]
    fn read(buf: &[u8]) -> Self {
        read_i8(buf)
    }
}

impl Element for u8 {
    #[inline]
    fn read(buf: &[u8]) -> Self {
        read_u8(buf)
    }
}

macro_rules! impl_wide_element {
    ($($ty:ty, $n:literal, $reader:ident);* $(;)?) => {
        $(
            impl Element for $ty {
                #[inline]
                fn read(buf: &[u8]) -> Self {
                    $reader(<[u8; $n] as Reversible>::load(buf))
                }
            }

            impl WideElement for $ty {
                type Bytes = [u8; $n];

                #[inline]
                fn from_ne(bytes: [u8; $n]) -> Self {
                    $reader(bytes)
                }
            }
        )*
    };
}

impl_wide_element!(
    i16, 2, read_i16_ne;
    u16, 2, read_u16_ne;
    i32, 4, read_i32_ne;
    u32, 4, read_u32_ne;
    i64, 8, read_i64_ne;
    u64, 8, read_u64_ne;
    f32, 4, read_f32_ne;
    f64, 8, read_f64_ne;
);

/// Selects which native kind a converter produces.
pub trait Cast {
    /// Wrap `value`, cast to this kind, in its tagged variant.
    fn cast<T: Scalar>(value: T) -> NativeValue;
}

macro_rules! cast_marker {
    ($($name:ident => $kind:ident, $method:ident);* $(;)?) => {
        $(
            pub struct $name;

            impl Cast for $name {
                #[inline]
                fn cast<T: Scalar>(value: T) -> NativeValue {
                    NativeValue::$kind(value.$method())
                }
            }
        )*
    };
}

cast_marker!(
    ToBoolean => Boolean, to_boolean;
    ToByte => Byte, to_byte;
    ToChar => Char, to_char;
    ToShort => Short, to_short;
    ToInt => Int, to_int;
    ToLong => Long, to_long;
    ToFloat => Float, to_float;
    ToDouble => Double, to_double;
);

/// Read one host-order element and cast it.
#[inline]
pub fn direct<T: Element, K: Cast>(buf: &[u8]) -> NativeValue {
    K::cast(T::read(buf))
}

/// Read one opposite-order element through a private reversed copy, then
/// cast it.
#[inline]
pub fn reversed<T: WideElement, K: Cast>(buf: &[u8]) -> NativeValue {
    K::cast(T::read_reversed(buf))
}
