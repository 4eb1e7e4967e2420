//! Allocation-free conversions between numbers, text and raw bytes.
//!
//! Converters are picked at compile time from the (destination, source)
//! pair through [`Dispatch`]. Types outside the library opt in by declaring
//! a [`Preferred`] converter, by hand or with `#[derive(Preferred)]`.
//!
//! ```
//! use vconv::{ByteArray, Convert, Text, converter};
//!
//! let mut text = converter::<Text, f64>();
//! assert_eq!(text.convert(0.5_f64), "0.5");
//!
//! let bytes = vconv::convert::<ByteArray, u16>(0x0102);
//! assert_eq!(bytes, 0x0102_u16.to_ne_bytes());
//! ```

pub mod buffer;
pub mod bytes;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod text;

pub use vconv_derive::Preferred;

pub use buffer::{BufferMode, ConversionBuffer, DEFAULT_CAPACITY};
pub use bytes::{BigEndian, ByteArrayConverter, ByteOrder, FixedWidth, LittleEndian, NativeEndian};
pub use config::{Config, Order, TextConfig};
pub use dispatch::{
    ByteArray, Convert, Converter, Dispatch, Preferred, Text, ValueConvert, Widen, convert,
    converter,
};
pub use error::ConvertError;
pub use text::{
    Format, Integral, MIN_CAPACITY, TextConverter, ToText, min_capacity, min_capacity_radix,
    radix_capacity,
};
