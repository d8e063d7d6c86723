//! Buffer format descriptor parsing.
//!
//! A descriptor is a short string in the buffer-protocol format language:
//! an optional byte-order/alignment marker followed by a single type code,
//! e.g. `"<i"` or `"d"`. Only the first type code is significant.

use crate::endian::ByteOrder;
use crate::error::{Error, Result};

/// Descriptor assumed when a buffer does not report one.
pub const DEFAULT_DESCRIPTOR: &str = "B";

/// The numeric encoding of one buffer element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceType {
    /// `?` or `c` -- boolean or char byte, read as a signed 8-bit value.
    Char,
    /// `b` -- signed 8-bit integer.
    Byte,
    /// `B` -- unsigned 8-bit integer.
    UnsignedByte,
    /// `h` -- signed 16-bit integer.
    Short,
    /// `H` -- unsigned 16-bit integer.
    UnsignedShort,
    /// `i` or `l` -- signed 32-bit integer.
    Int,
    /// `I` or `L` -- unsigned 32-bit integer.
    UnsignedInt,
    /// `q` -- signed 64-bit integer.
    LongLong,
    /// `Q` -- unsigned 64-bit integer.
    UnsignedLongLong,
    /// `f` -- 32-bit IEEE float.
    Float,
    /// `d` -- 64-bit IEEE float.
    Double,
}

impl SourceType {
    /// All source types, in table order.
    pub const ALL: [SourceType; 11] = [
        SourceType::Char,
        SourceType::Byte,
        SourceType::UnsignedByte,
        SourceType::Short,
        SourceType::UnsignedShort,
        SourceType::Int,
        SourceType::UnsignedInt,
        SourceType::LongLong,
        SourceType::UnsignedLongLong,
        SourceType::Float,
        SourceType::Double,
    ];

    /// Look up a source type by its format code.
    ///
    /// `l`/`L` map to the standard 4-byte width here; the 8-byte
    /// reinterpretation happens in [`Descriptor::parse`].
    pub fn from_code(code: char) -> Option<Self> {
        Some(match code {
            '?' | 'c' => SourceType::Char,
            'b' => SourceType::Byte,
            'B' => SourceType::UnsignedByte,
            'h' => SourceType::Short,
            'H' => SourceType::UnsignedShort,
            'i' | 'l' => SourceType::Int,
            'I' | 'L' => SourceType::UnsignedInt,
            'q' => SourceType::LongLong,
            'Q' => SourceType::UnsignedLongLong,
            'f' => SourceType::Float,
            'd' => SourceType::Double,
            _ => return None,
        })
    }

    /// The canonical format code.
    pub fn code(self) -> char {
        match self {
            SourceType::Char => 'c',
            SourceType::Byte => 'b',
            SourceType::UnsignedByte => 'B',
            SourceType::Short => 'h',
            SourceType::UnsignedShort => 'H',
            SourceType::Int => 'i',
            SourceType::UnsignedInt => 'I',
            SourceType::LongLong => 'q',
            SourceType::UnsignedLongLong => 'Q',
            SourceType::Float => 'f',
            SourceType::Double => 'd',
        }
    }

    /// Number of bytes one element occupies.
    pub fn width(self) -> usize {
        match self {
            SourceType::Char | SourceType::Byte | SourceType::UnsignedByte => 1,
            SourceType::Short | SourceType::UnsignedShort => 2,
            SourceType::Int | SourceType::UnsignedInt | SourceType::Float => 4,
            SourceType::LongLong | SourceType::UnsignedLongLong | SourceType::Double => 8,
        }
    }

    /// Row of this type in the conversion table.
    #[inline]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

/// Leading byte-order/alignment marker of a descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderMarker {
    /// `!` -- network order (big-endian).
    Network,
    /// `>` -- big-endian.
    Big,
    /// `<` -- little-endian.
    Little,
    /// `@` -- native order and alignment.
    Native,
    /// `=` -- native order, standard alignment.
    Standard,
}

impl OrderMarker {
    /// Look up a marker by its character.
    pub fn from_char(c: char) -> Option<Self> {
        Some(match c {
            '!' => OrderMarker::Network,
            '>' => OrderMarker::Big,
            '<' => OrderMarker::Little,
            '@' => OrderMarker::Native,
            '=' => OrderMarker::Standard,
            _ => return None,
        })
    }

    /// The byte order this marker declares, or `None` for host order.
    pub fn byte_order(self) -> Option<ByteOrder> {
        match self {
            OrderMarker::Network | OrderMarker::Big => Some(ByteOrder::Big),
            OrderMarker::Little => Some(ByteOrder::Little),
            OrderMarker::Native | OrderMarker::Standard => None,
        }
    }
}

/// Classification of a descriptor: what to read and whether to reverse it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Descriptor {
    /// Element encoding, after `l`/`L` normalization.
    pub source: SourceType,
    /// Marker that was stripped, if any.
    pub marker: Option<OrderMarker>,
    /// Whether element bytes must be reversed before decoding on the host.
    pub reverse: bool,
}

impl Descriptor {
    /// Parse a descriptor for the byte order of the running host.
    ///
    /// `None` is treated as [`DEFAULT_DESCRIPTOR`]. `item_size` is only
    /// consulted to reinterpret `l`/`L` as 64-bit when elements are 8 bytes.
    pub fn parse(descriptor: Option<&str>, item_size: usize) -> Result<Self> {
        Self::parse_for_host(descriptor, item_size, ByteOrder::native())
    }

    /// Parse a descriptor as seen from a host with the given byte order.
    pub fn parse_for_host(
        descriptor: Option<&str>,
        item_size: usize,
        host: ByteOrder,
    ) -> Result<Self> {
        let original = descriptor.unwrap_or(DEFAULT_DESCRIPTOR);
        let mut chars = original.chars();

        let first = chars.next().ok_or_else(|| Error::unsupported(original))?;
        let (marker, code) = match OrderMarker::from_char(first) {
            Some(marker) => (Some(marker), chars.next()),
            None => (None, Some(first)),
        };
        // A marker with nothing after it names no type.
        let code = code.ok_or_else(|| Error::unsupported(original))?;

        let code = match (code, item_size) {
            ('l', 8) => 'q',
            ('L', 8) => 'Q',
            (c, _) => c,
        };
        let source = SourceType::from_code(code).ok_or_else(|| Error::unsupported(original))?;

        let reverse = marker
            .and_then(OrderMarker::byte_order)
            .is_some_and(|order| order != host);

        Ok(Descriptor {
            source,
            marker,
            reverse,
        })
    }
}
