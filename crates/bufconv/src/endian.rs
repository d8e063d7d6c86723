//! Byte-order handling for raw buffer elements.
//!
//! Buffers arrive in whatever order their producer wrote them. Elements are
//! always decoded in host order from a fixed-width byte array; when the
//! producer's order differs from the host, the array is reversed first.
//! This module provides the host order query, the width-specific reversal
//! capability, and the fixed-width readers.

/// Byte order of a buffer or of the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// Most-significant byte first (network order).
    Big,
    /// Least-significant byte first.
    Little,
}

impl ByteOrder {
    /// The byte order of the target this crate was compiled for.
    #[inline]
    pub const fn native() -> Self {
        if cfg!(target_endian = "big") {
            ByteOrder::Big
        } else {
            ByteOrder::Little
        }
    }
}

/// A fixed-width element whose byte order can be inverted.
///
/// Implemented for the only widths that ever need reversal: 2, 4 and 8
/// bytes. Single bytes have no order.
pub trait Reversible: Copy {
    /// Width of the element in bytes.
    const WIDTH: usize;

    /// Copy the first `WIDTH` bytes of `buf` into a fresh array.
    ///
    /// # Panics
    /// Panics if `buf` is shorter than `WIDTH`.
    fn load(buf: &[u8]) -> Self;

    /// Return the array with its byte order fully reversed.
    fn reversed(self) -> Self;
}

impl Reversible for [u8; 2] {
    const WIDTH: usize = 2;

    #[inline]
    fn load(buf: &[u8]) -> Self {
        [buf[0], buf[1]]
    }

    #[inline]
    fn reversed(self) -> Self {
        [self[1], self[0]]
    }
}

impl Reversible for [u8; 4] {
    const WIDTH: usize = 4;

    #[inline]
    fn load(buf: &[u8]) -> Self {
        [buf[0], buf[1], buf[2], buf[3]]
    }

    #[inline]
    fn reversed(self) -> Self {
        [self[3], self[2], self[1], self[0]]
    }
}

impl Reversible for [u8; 8] {
    const WIDTH: usize = 8;

    #[inline]
    fn load(buf: &[u8]) -> Self {
        [
            buf[0], buf[1], buf[2], buf[3], buf[4], buf[5], buf[6], buf[7],
        ]
    }

    #[inline]
    fn reversed(self) -> Self {
        [
            self[7], self[6], self[5], self[4], self[3], self[2], self[1], self[0],
        ]
    }
}

/// Copy the first `B::WIDTH` bytes of `buf` reversed into a local array.
///
/// The caller's buffer is never written.
#[inline]
pub fn load_reversed<B: Reversible>(buf: &[u8]) -> B {
    B::load(buf).reversed()
}

// --- Host-order fixed-width reads ---

/// Read an `i8` from the first byte of the slice.
#[inline]
pub fn read_i8(buf: &[u8]) -> i8 {
    buf[0] as i8
}

/// Read a `u8` from the first byte of the slice.
#[inline]
pub fn read_u8(buf: &[u8]) -> u8 {
    buf[0]
}

/// Read a host-order `i16` from a 2-byte array.
#[inline]
pub fn read_i16_ne(bytes: [u8; 2]) -> i16 {
    i16::from_ne_bytes(bytes)
}

/// Read a host-order `u16` from a 2-byte array.
#[inline]
pub fn read_u16_ne(bytes: [u8; 2]) -> u16 {
    u16::from_ne_bytes(bytes)
}

/// Read a host-order `i32` from a 4-byte array.
#[inline]
pub fn read_i32_ne(bytes: [u8; 4]) -> i32 {
    i32::from_ne_bytes(bytes)
}

/// Read a host-order `u32` from a 4-byte array.
#[inline]
pub fn read_u32_ne(bytes: [u8; 4]) -> u32 {
    u32::from_ne_bytes(bytes)
}

/// Read a host-order `i64` from an 8-byte array.
#[inline]
pub fn read_i64_ne(bytes: [u8; 8]) -> i64 {
    i64::from_ne_bytes(bytes)
}

/// Read a host-order `u64` from an 8-byte array.
#[inline]
pub fn read_u64_ne(bytes: [u8; 8]) -> u64 {
    u64::from_ne_bytes(bytes)
}

/// Read a host-order `f32` (IEEE 754) from a 4-byte array.
#[inline]
pub fn read_f32_ne(bytes: [u8; 4]) -> f32 {
    f32::from_ne_bytes(bytes)
}

/// Read a host-order `f64` (IEEE 754) from an 8-byte array.
#[inline]
pub fn read_f64_ne(bytes: [u8; 8]) -> f64 {
    f64::from_ne_bytes(bytes)
}
