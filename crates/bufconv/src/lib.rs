//! Buffer format descriptors to native scalar converters.
//!
//! Given a buffer descriptor such as `"<i"` or `"d"`, an element size and a
//! target kind code, [`resolve`] returns a [`Converter`]: a stateless
//! function handle that decodes one element of that buffer into a tagged
//! [`NativeValue`]. All parsing happens once; every later element costs a
//! single indirect call.
//!
//! ```
//! use bufconv::{resolve, NativeValue};
//!
//! let conv = resolve(Some(">h"), 2, 'j').unwrap();
//! assert_eq!(conv.convert(&[0xFF, 0xFE]), NativeValue::Long(-2));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod bulk;
pub mod cast;
pub mod descriptor;
pub mod endian;
pub mod error;
pub mod kind;
pub mod resolve;
pub mod table;

pub use bulk::{convert_all, convert_strided, NativeArray};
pub use descriptor::{Descriptor, OrderMarker, SourceType};
pub use endian::ByteOrder;
pub use error::{Error, Result};
pub use kind::{NativeValue, RawValue, TargetKind};
pub use resolve::{resolve, resolve_kind};
pub use table::{lookup, lookup_codes, ConvertFn, Converter};
