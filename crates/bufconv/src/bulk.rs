//! Whole-buffer conversion into typed native arrays.
//!
//! These helpers drive a resolved [`Converter`] over every element of a
//! buffer, the way an embedding runtime fills a native array from a foreign
//! buffer: one converter call per element, stepping by a byte stride.

use alloc::vec::Vec;

use crate::kind::{NativeValue, TargetKind};
use crate::table::Converter;

/// Converted elements, typed by target kind.
///
/// Booleans are stored as `u8` 0/1, the foreign-call representation.
#[derive(Debug, Clone, PartialEq)]
pub enum NativeArray {
    Boolean(Vec<u8>),
    Byte(Vec<i8>),
    Char(Vec<u16>),
    Short(Vec<i16>),
    Int(Vec<i32>),
    Long(Vec<i64>),
    Float(Vec<f32>),
    Double(Vec<f64>),
}

impl NativeArray {
    /// An empty array of the given kind with room for `capacity` elements.
    pub fn with_capacity(kind: TargetKind, capacity: usize) -> Self {
        match kind {
            TargetKind::Boolean => NativeArray::Boolean(Vec::with_capacity(capacity)),
            TargetKind::Byte => NativeArray::Byte(Vec::with_capacity(capacity)),
            TargetKind::Char => NativeArray::Char(Vec::with_capacity(capacity)),
            TargetKind::Short => NativeArray::Short(Vec::with_capacity(capacity)),
            TargetKind::Int => NativeArray::Int(Vec::with_capacity(capacity)),
            TargetKind::Long => NativeArray::Long(Vec::with_capacity(capacity)),
            TargetKind::Float => NativeArray::Float(Vec::with_capacity(capacity)),
            TargetKind::Double => NativeArray::Double(Vec::with_capacity(capacity)),
        }
    }

    pub fn kind(&self) -> TargetKind {
        match self {
            NativeArray::Boolean(_) => TargetKind::Boolean,
            NativeArray::Byte(_) => TargetKind::Byte,
            NativeArray::Char(_) => TargetKind::Char,
            NativeArray::Short(_) => TargetKind::Short,
            NativeArray::Int(_) => TargetKind::Int,
            NativeArray::Long(_) => TargetKind::Long,
            NativeArray::Float(_) => TargetKind::Float,
            NativeArray::Double(_) => TargetKind::Double,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            NativeArray::Boolean(v) => v.len(),
            NativeArray::Byte(v) => v.len(),
            NativeArray::Char(v) => v.len(),
            NativeArray::Short(v) => v.len(),
            NativeArray::Int(v) => v.len(),
            NativeArray::Long(v) => v.len(),
            NativeArray::Float(v) => v.len(),
            NativeArray::Double(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append a value.
    ///
    /// # Panics
    /// Panics if the value's kind differs from the array's kind.
    pub fn push(&mut self, value: NativeValue) {
        match (self, value) {
            (NativeArray::Boolean(v), NativeValue::Boolean(x)) => v.push(x as u8),
            (NativeArray::Byte(v), NativeValue::Byte(x)) => v.push(x),
            (NativeArray::Char(v), NativeValue::Char(x)) => v.push(x),
            (NativeArray::Short(v), NativeValue::Short(x)) => v.push(x),
            (NativeArray::Int(v), NativeValue::Int(x)) => v.push(x),
            (NativeArray::Long(v), NativeValue::Long(x)) => v.push(x),
            (NativeArray::Float(v), NativeValue::Float(x)) => v.push(x),
            (NativeArray::Double(v), NativeValue::Double(x)) => v.push(x),
            (array, value) => panic!(
                "cannot push {:?} value into {:?} array",
                value.kind(),
                array.kind()
            ),
        }
    }

    /// The element at `index`, tagged.
    pub fn get(&self, index: usize) -> Option<NativeValue> {
        Some(match self {
            NativeArray::Boolean(v) => NativeValue::Boolean(*v.get(index)? != 0),
            NativeArray::Byte(v) => NativeValue::Byte(*v.get(index)?),
            NativeArray::Char(v) => NativeValue::Char(*v.get(index)?),
            NativeArray::Short(v) => NativeValue::Short(*v.get(index)?),
            NativeArray::Int(v) => NativeValue::Int(*v.get(index)?),
            NativeArray::Long(v) => NativeValue::Long(*v.get(index)?),
            NativeArray::Float(v) => NativeValue::Float(*v.get(index)?),
            NativeArray::Double(v) => NativeValue::Double(*v.get(index)?),
        })
    }

    /// The elements as host-order bytes, ready to copy into a native array.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            NativeArray::Boolean(v) => v.as_slice(),
            NativeArray::Byte(v) => bytemuck::cast_slice(v.as_slice()),
            NativeArray::Char(v) => bytemuck::cast_slice(v.as_slice()),
            NativeArray::Short(v) => bytemuck::cast_slice(v.as_slice()),
            NativeArray::Int(v) => bytemuck::cast_slice(v.as_slice()),
            NativeArray::Long(v) => bytemuck::cast_slice(v.as_slice()),
            NativeArray::Float(v) => bytemuck::cast_slice(v.as_slice()),
            NativeArray::Double(v) => bytemuck::cast_slice(v.as_slice()),
        }
    }
}

/// Convert `count` elements, element `i` starting at byte `i * stride`.
///
/// `stride` is usually the converter's width but may be larger for
/// interleaved or padded buffers.
///
/// # Panics
/// Panics if `buf` is too short to hold the last element, or if `stride`
/// is smaller than the converter's width while `count > 1`.
pub fn convert_strided(
    converter: &Converter,
    buf: &[u8],
    stride: usize,
    count: usize,
) -> NativeArray {
    let width = converter.width();
    assert!(
        count <= 1 || stride >= width,
        "stride {stride} is smaller than element width {width}"
    );
    if count > 0 {
        let needed = (count - 1) * stride + width;
        assert!(
            buf.len() >= needed,
            "buffer holds {} bytes, {count} elements need {needed}",
            buf.len()
        );
    }

    let mut out = NativeArray::with_capacity(converter.target(), count);
    for i in 0..count {
        out.push(converter.convert(&buf[i * stride..]));
    }
    out
}

/// Convert every whole element of a contiguous buffer.
///
/// Trailing bytes that do not form a full element are ignored.
pub fn convert_all(converter: &Converter, buf: &[u8]) -> NativeArray {
    let width = converter.width();
    convert_strided(converter, buf, width, buf.len() / width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::SourceType;
    use crate::table::lookup;
    use alloc::vec;

    fn ne_i16(values: &[i16]) -> Vec<u8> {
        values.iter().flat_map(|v| v.to_ne_bytes()).collect()
    }

    #[test]
    fn convert_all_contiguous() {
        let buf = ne_i16(&[1, -2, 300]);
        let c = lookup(SourceType::Short, false, TargetKind::Long);
        assert_eq!(convert_all(&c, &buf), NativeArray::Long(vec![1, -2, 300]));
    }

    #[test]
    fn convert_all_ignores_partial_tail() {
        let mut buf = ne_i16(&[7, 8]);
        buf.push(0xFF);
        let c = lookup(SourceType::Short, false, TargetKind::Int);
        assert_eq!(convert_all(&c, &buf), NativeArray::Int(vec![7, 8]));
    }

    #[test]
    fn strided_picks_every_other_element() {
        let buf = ne_i16(&[10, 99, 20, 99, 30]);
        let c = lookup(SourceType::Short, false, TargetKind::Short);
        let out = convert_strided(&c, &buf, 4, 3);
        assert_eq!(out, NativeArray::Short(vec![10, 20, 30]));
    }

    #[test]
    fn boolean_array_bytes() {
        let c = lookup(SourceType::Byte, false, TargetKind::Boolean);
        let out = convert_all(&c, &[0, 5, 0xFF, 0]);
        assert_eq!(out, NativeArray::Boolean(vec![0, 1, 1, 0]));
        assert_eq!(out.get(1), Some(NativeValue::Boolean(true)));
        assert_eq!(out.as_bytes(), &[0, 1, 1, 0]);
    }

    #[test]
    fn as_bytes_is_host_order() {
        let array = NativeArray::Int(vec![0x0102_0304, -1]);
        let mut expected = Vec::new();
        expected.extend_from_slice(&0x0102_0304_i32.to_ne_bytes());
        expected.extend_from_slice(&(-1_i32).to_ne_bytes());
        assert_eq!(array.as_bytes(), expected.as_slice());
    }

    #[test]
    fn as_bytes_borrows_storage() {
        let array = NativeArray::Double(vec![1.5, -0.25]);
        let bytes: &[u8] = array.as_bytes();
        assert_eq!(bytes.len(), 16);
        assert_eq!(&bytes[8..], &(-0.25_f64).to_ne_bytes());
        let NativeArray::Double(values) = &array else {
            unreachable!()
        };
        assert_eq!(bytes.as_ptr(), values.as_ptr().cast::<u8>());
    }

    #[test]
    fn empty_buffer() {
        let c = lookup(SourceType::Double, false, TargetKind::Double);
        let out = convert_all(&c, &[]);
        assert!(out.is_empty());
        assert_eq!(out.kind(), TargetKind::Double);
        assert_eq!(convert_strided(&c, &[], 0, 0).len(), 0);
    }

    #[test]
    fn get_out_of_range() {
        let array = NativeArray::Char(vec![0x41]);
        assert_eq!(array.get(0), Some(NativeValue::Char(0x41)));
        assert_eq!(array.get(1), None);
    }

    #[test]
    #[should_panic(expected = "elements need")]
    fn strided_short_buffer_panics() {
        let c = lookup(SourceType::Int, false, TargetKind::Int);
        convert_strided(&c, &[0u8; 7], 4, 2);
    }

    #[test]
    #[should_panic(expected = "smaller than element width")]
    fn strided_overlapping_panics() {
        let c = lookup(SourceType::Int, false, TargetKind::Int);
        convert_strided(&c, &[0u8; 16], 2, 3);
    }

    #[test]
    #[should_panic(expected = "cannot push")]
    fn push_mismatched_kind_panics() {
        let mut array = NativeArray::with_capacity(TargetKind::Int, 1);
        array.push(NativeValue::Long(1));
    }
}
