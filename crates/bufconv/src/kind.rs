//! Native scalar kinds a converter can produce.
//!
//! The eight kinds match the fixed-width scalars of a foreign call boundary:
//! an unsigned byte-sized boolean, signed integers of 8/16/32/64 bits, an
//! unsigned 16-bit UTF-16 code unit, and IEEE 754 binary32/binary64.

/// One of the eight native scalar kinds, identified by a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKind {
    /// `z` -- boolean.
    Boolean,
    /// `b` -- signed 8-bit integer.
    Byte,
    /// `c` -- UTF-16 code unit (unsigned 16-bit).
    Char,
    /// `s` -- signed 16-bit integer.
    Short,
    /// `i` -- signed 32-bit integer.
    Int,
    /// `j` -- signed 64-bit integer.
    Long,
    /// `f` -- 32-bit IEEE float.
    Float,
    /// `d` -- 64-bit IEEE float.
    Double,
}

impl TargetKind {
    /// All kinds, in table order.
    pub const ALL: [TargetKind; 8] = [
        TargetKind::Boolean,
        TargetKind::Byte,
        TargetKind::Char,
        TargetKind::Short,
        TargetKind::Int,
        TargetKind::Long,
        TargetKind::Float,
        TargetKind::Double,
    ];

    /// Look up a kind by its code character.
    pub fn from_code(code: char) -> Option<Self> {
        Some(match code {
            'z' => TargetKind::Boolean,
            'b' => TargetKind::Byte,
            'c' => TargetKind::Char,
            's' => TargetKind::Short,
            'i' => TargetKind::Int,
            'j' => TargetKind::Long,
            'f' => TargetKind::Float,
            'd' => TargetKind::Double,
            _ => return None,
        })
    }

    /// The code character for this kind.
    pub fn code(self) -> char {
        match self {
            TargetKind::Boolean => 'z',
            TargetKind::Byte => 'b',
            TargetKind::Char => 'c',
            TargetKind::Short => 's',
            TargetKind::Int => 'i',
            TargetKind::Long => 'j',
            TargetKind::Float => 'f',
            TargetKind::Double => 'd',
        }
    }

    /// Column of this kind in the conversion table.
    #[inline]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

/// A converted scalar, tagged with its kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NativeValue {
    Boolean(bool),
    Byte(i8),
    Char(u16),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
}

impl NativeValue {
    /// The kind of this value.
    pub fn kind(&self) -> TargetKind {
        match self {
            NativeValue::Boolean(_) => TargetKind::Boolean,
            NativeValue::Byte(_) => TargetKind::Byte,
            NativeValue::Char(_) => TargetKind::Char,
            NativeValue::Short(_) => TargetKind::Short,
            NativeValue::Int(_) => TargetKind::Int,
            NativeValue::Long(_) => TargetKind::Long,
            NativeValue::Float(_) => TargetKind::Float,
            NativeValue::Double(_) => TargetKind::Double,
        }
    }

    /// Drop the tag, producing a foreign-call argument slot.
    pub fn into_raw(self) -> RawValue {
        RawValue::from(self)
    }
}

impl core::fmt::Display for NativeValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            NativeValue::Boolean(v) => write!(f, "{v}"),
            NativeValue::Byte(v) => write!(f, "{v}"),
            NativeValue::Char(v) => write!(f, "{v:#06x}"),
            NativeValue::Short(v) => write!(f, "{v}"),
            NativeValue::Int(v) => write!(f, "{v}"),
            NativeValue::Long(v) => write!(f, "{v}"),
            NativeValue::Float(v) => write!(f, "{v}"),
            NativeValue::Double(v) => write!(f, "{v}"),
        }
    }
}

/// Untagged argument slot, laid out like the value union of a C foreign
/// call interface.
///
/// Reading a field is only meaningful for the kind that was written;
/// callers track the kind themselves (usually from the [`Converter`] that
/// produced the value).
///
/// [`Converter`]: crate::table::Converter
#[repr(C)]
#[derive(Clone, Copy)]
pub union RawValue {
    pub z: u8,
    pub b: i8,
    pub c: u16,
    pub s: i16,
    pub i: i32,
    pub j: i64,
    pub f: f32,
    pub d: f64,
}

impl From<NativeValue> for RawValue {
    fn from(value: NativeValue) -> Self {
        match value {
            NativeValue::Boolean(v) => RawValue { z: v as u8 },
            NativeValue::Byte(v) => RawValue { b: v },
            NativeValue::Char(v) => RawValue { c: v },
            NativeValue::Short(v) => RawValue { s: v },
            NativeValue::Int(v) => RawValue { i: v },
            NativeValue::Long(v) => RawValue { j: v },
            NativeValue::Float(v) => RawValue { f: v },
            NativeValue::Double(v) => RawValue { d: v },
        }
    }
}

impl core::fmt::Debug for RawValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("RawValue { .. }")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn codes_roundtrip() {
        for kind in TargetKind::ALL {
            assert_eq!(TargetKind::from_code(kind.code()), Some(kind));
        }
    }

    #[test]
    fn unknown_codes() {
        for code in ['Z', 'B', 'l', 'x', ' ', 'q', '\0'] {
            assert_eq!(TargetKind::from_code(code), None, "code {code:?}");
        }
    }

    #[test]
    fn index_follows_table_order() {
        for (i, kind) in TargetKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn value_kind() {
        assert_eq!(NativeValue::Boolean(true).kind(), TargetKind::Boolean);
        assert_eq!(NativeValue::Char(65).kind(), TargetKind::Char);
        assert_eq!(NativeValue::Double(0.5).kind(), TargetKind::Double);
    }

    #[test]
    fn display() {
        assert_eq!(NativeValue::Boolean(false).to_string(), "false");
        assert_eq!(NativeValue::Byte(-1).to_string(), "-1");
        assert_eq!(NativeValue::Char(0x41).to_string(), "0x0041");
        assert_eq!(NativeValue::Long(1 << 40).to_string(), "1099511627776");
        assert_eq!(NativeValue::Float(1.5).to_string(), "1.5");
    }

    #[test]
    fn raw_value_holds_payload() {
        let raw = NativeValue::Long(-5).into_raw();
        assert_eq!(unsafe { raw.j }, -5);

        let raw = NativeValue::Boolean(true).into_raw();
        assert_eq!(unsafe { raw.z }, 1);

        let raw = NativeValue::Char(0xFFFF).into_raw();
        assert_eq!(unsafe { raw.c }, 0xFFFF);

        let raw = NativeValue::Double(2.25).into_raw();
        assert_eq!(unsafe { raw.d }, 2.25);
    }

    #[test]
    fn raw_value_is_eight_bytes() {
        assert_eq!(core::mem::size_of::<RawValue>(), 8);
    }
}
