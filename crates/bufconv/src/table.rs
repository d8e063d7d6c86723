//! The conversion table and the converter handle it hands out.
//!
//! The table is a static `[source][reversed][target]` array of plain
//! function pointers, so resolving a converter is two index operations and
//! converting an element is one indirect call.

use crate::cast::{
    direct, reversed, ToBoolean, ToByte, ToChar, ToDouble, ToFloat, ToInt, ToLong, ToShort,
};
use crate::descriptor::SourceType;
use crate::kind::{NativeValue, TargetKind};

/// Signature of every table entry: read one element from the head of the
/// slice and produce one native value.
pub type ConvertFn = fn(&[u8]) -> NativeValue;

macro_rules! row {
    ($wrap:ident, $ty:ty) => {
        [
            $wrap::<$ty, ToBoolean> as ConvertFn,
            $wrap::<$ty, ToByte> as ConvertFn,
            $wrap::<$ty, ToChar> as ConvertFn,
            $wrap::<$ty, ToShort> as ConvertFn,
            $wrap::<$ty, ToInt> as ConvertFn,
            $wrap::<$ty, ToLong> as ConvertFn,
            $wrap::<$ty, ToFloat> as ConvertFn,
            $wrap::<$ty, ToDouble> as ConvertFn,
        ]
    };
}

// Single-byte rows have no order; both slots hold the direct routines.
macro_rules! narrow {
    ($ty:ty) => {
        [row!(direct, $ty), row!(direct, $ty)]
    };
}

macro_rules! wide {
    ($ty:ty) => {
        [row!(direct, $ty), row!(reversed, $ty)]
    };
}

/// Indexed by `SourceType::index()`, then `reverse as usize`, then
/// `TargetKind::index()`.
static TABLE: [[[ConvertFn; 8]; 2]; 11] = [
    narrow!(i8),
    narrow!(i8),
    narrow!(u8),
    wide!(i16),
    wide!(u16),
    wide!(i32),
    wide!(u32),
    wide!(i64),
    wide!(u64),
    wide!(f32),
    wide!(f64),
];

/// A resolved, stateless element converter.
///
/// Holds a function pointer and the classification it was resolved from;
/// no buffer references and no heap state. Copy it freely and call it from
/// any thread.
#[derive(Clone, Copy)]
pub struct Converter {
    func: ConvertFn,
    source: SourceType,
    target: TargetKind,
    reversed: bool,
}

impl Converter {
    /// Convert the element starting at `element[0]`.
    ///
    /// Reads exactly [`width`](Self::width) bytes; anything after them is
    /// ignored.
    ///
    /// # Panics
    /// Panics if `element` is shorter than the source width.
    #[inline]
    pub fn convert(&self, element: &[u8]) -> NativeValue {
        (self.func)(element)
    }

    /// The raw table entry.
    #[inline]
    pub fn as_fn(&self) -> ConvertFn {
        self.func
    }

    pub fn source(&self) -> SourceType {
        self.source
    }

    pub fn target(&self) -> TargetKind {
        self.target
    }

    /// Whether this converter reverses element bytes before decoding.
    /// Always `false` for single-byte sources.
    pub fn reversed(&self) -> bool {
        self.reversed
    }

    /// Bytes consumed per element.
    pub fn width(&self) -> usize {
        self.source.width()
    }
}

impl core::fmt::Debug for Converter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Converter")
            .field("source", &self.source)
            .field("target", &self.target)
            .field("reversed", &self.reversed)
            .finish()
    }
}

/// Two converters are equal when they were resolved from the same table
/// slot.
impl PartialEq for Converter {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
            && self.target == other.target
            && self.reversed == other.reversed
    }
}

impl Eq for Converter {}

/// Look up the converter for a classified source and a target kind.
///
/// Total: every combination has an entry. A reversal request on a
/// single-byte source yields the direct converter.
pub fn lookup(source: SourceType, reverse: bool, target: TargetKind) -> Converter {
    let reverse = reverse && source.width() > 1;
    Converter {
        func: TABLE[source.index()][reverse as usize][target.index()],
        source,
        target,
        reversed: reverse,
    }
}

/// Look up a converter by format code and target code.
///
/// Returns `None` when either code is outside the table. `source_code` is
/// taken as-is; `l`/`L` normalization is the descriptor parser's job.
pub fn lookup_codes(source_code: char, reverse: bool, target_code: char) -> Option<Converter> {
    let source = SourceType::from_code(source_code)?;
    let target = TargetKind::from_code(target_code)?;
    Some(lookup(source, reverse, target))
}
