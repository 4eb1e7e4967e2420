use std::ffi::CStr;

use crate::buffer::{BufferMode, ConversionBuffer, Cursor};
use crate::config::TextConfig;
use crate::dispatch::{Convert, Dispatch, Text};
use crate::error::ConvertError;

mod float;
mod int;

pub use int::{Integral, min_capacity, min_capacity_radix, radix_capacity};

/// Smallest owned buffer: fits every primitive integer in base 10.
///
/// Other radixes raise the floor, see [`radix_capacity`].
pub const MIN_CAPACITY: usize = radix_capacity(10);

mod sealed {
    pub trait Sealed {}
}

/// Per-call formatting knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Format {
    /// Fraction digits for floats. `None`: shortest representation.
    pub precision: Option<u32>,
    /// Base for integers, 2..=36.
    pub radix: u32,
}

impl Default for Format {
    fn default() -> Self {
        Self {
            precision: None,
            radix: 10,
        }
    }
}

/// A value the text converter can write without heap allocation.
///
/// This trait is sealed; it covers primitive integers, floats and `bool`.
pub trait ToText: Copy + sealed::Sealed {
    #[doc(hidden)]
    fn write_text(self, buf: &mut [u8], format: Format) -> usize;
}

macro_rules! integral_text {
    ($($t:ty),*) => {$(
        impl ToText for $t {
            #[inline]
            fn write_text(self, buf: &mut [u8], format: Format) -> usize {
                int::write_integral(self, buf, format.radix)
            }
        }

        impl Dispatch<Text> for $t {
            type Converter = TextConverter<'static>;
        }
    )*};
}

integral_text!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! float_text {
    ($($t:ty),*) => {$(
        impl sealed::Sealed for $t {}

        impl ToText for $t {
            #[inline]
            fn write_text(self, buf: &mut [u8], format: Format) -> usize {
                float::write_float(self, self.is_finite(), buf, format.precision)
            }
        }

        impl Dispatch<Text> for $t {
            type Converter = TextConverter<'static>;
        }
    )*};
}

float_text!(f32, f64);

impl sealed::Sealed for bool {}

impl ToText for bool {
    fn write_text(self, buf: &mut [u8], _format: Format) -> usize {
        let mut out = Cursor::new(buf);
        out.push_slice(if self { b"true" } else { b"false" });
        out.finish()
    }
}

impl Dispatch<Text> for bool {
    type Converter = TextConverter<'static>;
}

fn check_radix(radix: u32) -> Result<u32, ConvertError> {
    if (2..=36).contains(&radix) {
        Ok(radix)
    } else {
        Err(ConvertError::Radix(radix))
    }
}

/// Numeric-to-text converter over a reusable buffer.
///
/// Every result is a view into the converter's buffer and lives until the
/// next call. Output that does not fit is truncated and stays
/// NUL-terminated inside the buffer.
///
/// ```
/// use vconv::{Convert, TextConverter};
///
/// let mut conv = TextConverter::new();
/// assert_eq!(conv.convert(-42_i32), "-42");
/// assert_eq!(conv.convert_with_precision(2.134_f64, Some(2)), "2.13");
/// ```
pub struct TextConverter<'b> {
    buffer: ConversionBuffer<'b>,
    len: usize,
    format: Format,
}

impl Default for TextConverter<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'b> TextConverter<'b> {
    /// Converter over the inline default buffer.
    pub fn new() -> Self {
        Self::from_buffer(ConversionBuffer::default())
    }

    /// Converter owning a heap buffer of at least `capacity` bytes.
    ///
    /// The capacity is raised to [`MIN_CAPACITY`] so every decimal integer
    /// fits. [`Self::with_radix`] raises it further for smaller radixes.
    pub fn with_capacity(capacity: usize) -> Self {
        if capacity < MIN_CAPACITY {
            tracing::debug!(
                requested = capacity,
                capacity = MIN_CAPACITY,
                "text capacity raised to minimum"
            );
        }
        Self::from_buffer(ConversionBuffer::owned(capacity.max(MIN_CAPACITY)))
    }

    /// Converter writing into a caller-owned region.
    ///
    /// No minimum applies: a small region truncates output.
    pub fn with_buffer(region: &'b mut [u8]) -> Self {
        if let Some(first) = region.first_mut() {
            *first = 0;
        }
        Self::from_buffer(ConversionBuffer::borrowed(region))
    }

    /// Converter built from configured defaults.
    pub fn from_config(config: &TextConfig) -> Result<Self, ConvertError> {
        let conv = match config.capacity {
            Some(capacity) => Self::with_capacity(capacity),
            None => Self::new(),
        };
        conv.with_precision(config.precision)
            .with_radix(config.radix)
    }

    fn from_buffer(buffer: ConversionBuffer<'b>) -> Self {
        tracing::trace!(
            mode = ?buffer.mode(),
            capacity = buffer.capacity(),
            "text converter created"
        );
        Self {
            buffer,
            len: 0,
            format: Format::default(),
        }
    }

    /// Default float precision for [`Convert::convert`].
    pub fn with_precision(mut self, precision: Option<u32>) -> Self {
        self.format.precision = precision;
        self
    }

    /// Default integer radix for [`Convert::convert`].
    ///
    /// An owned buffer grows to [`radix_capacity`] so every integer still
    /// fits.
    pub fn with_radix(mut self, radix: u32) -> Result<Self, ConvertError> {
        self.format.radix = check_radix(radix)?;
        self.buffer.reserve(radix_capacity(radix));
        Ok(self)
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn mode(&self) -> BufferMode {
        self.buffer.mode()
    }

    /// Buffer size in bytes, terminator included.
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    pub fn convert_with_precision<T: ToText>(&mut self, value: T, precision: Option<u32>) -> &str {
        let format = Format {
            precision,
            ..self.format
        };
        self.write(value, format)
    }

    pub fn convert_radix<T>(&mut self, value: T, radix: u32) -> Result<&str, ConvertError>
    where
        T: Integral + ToText,
    {
        let format = Format {
            radix: check_radix(radix)?,
            ..self.format
        };
        self.buffer.reserve(min_capacity_radix::<T>(radix));
        Ok(self.write(value, format))
    }

    /// Text of the last conversion.
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.buffer.as_slice()[..self.len]).unwrap_or_default()
    }

    /// Text of the last conversion with its terminator.
    pub fn as_c_str(&self) -> &CStr {
        CStr::from_bytes_until_nul(self.buffer.as_slice()).unwrap_or_default()
    }

    #[inline]
    fn write<T: ToText>(&mut self, value: T, format: Format) -> &str {
        self.len = value.write_text(self.buffer.as_mut_slice(), format);
        self.as_str()
    }
}

impl<T: ToText> Convert<T> for TextConverter<'_> {
    type Output<'a>
        = &'a str
    where
        Self: 'a;

    #[inline]
    fn convert(&mut self, value: T) -> Self::Output<'_> {
        let format = self.format;
        self.write(value, format)
    }
}

impl std::fmt::Debug for TextConverter<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextConverter")
            .field("buffer", &self.buffer)
            .field("format", &self.format)
            .field("text", &self.as_str())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::converter;

    #[test]
    fn construction_variants_agree() {
        let mut region = [0_u8; 48];
        let mut shared = TextConverter::new();
        let mut owned = TextConverter::with_capacity(48);
        let mut borrowed = TextConverter::with_buffer(&mut region);

        for value in [0_i64, 7, -7, i64::MAX, i64::MIN] {
            let expected = value.to_string();
            assert_eq!(shared.convert(value), expected);
            assert_eq!(owned.convert(value), expected);
            assert_eq!(borrowed.convert(value), expected);
        }
        assert_eq!(shared.mode(), BufferMode::SharedDefault);
        assert_eq!(owned.mode(), BufferMode::Owned);
        assert_eq!(borrowed.mode(), BufferMode::Borrowed);
    }

    #[test]
    fn owned_capacity_has_a_floor() {
        assert_eq!(TextConverter::with_capacity(4).capacity(), MIN_CAPACITY);
        assert_eq!(TextConverter::with_capacity(128).capacity(), 128);
        let mut conv = TextConverter::with_capacity(0);
        assert_eq!(conv.convert(i128::MIN), i128::MIN.to_string());
    }

    #[test]
    fn borrowed_region_truncates() {
        let mut region = [0xaa_u8; 4];
        let mut conv = TextConverter::with_buffer(&mut region);
        assert_eq!(conv.convert(-12345_i32), "-12");
        assert_eq!(conv.as_c_str().to_bytes(), b"-12");
        drop(conv);
        assert_eq!(region, [b'-', b'1', b'2', 0]);
    }

    #[test]
    fn empty_region_yields_empty_text() {
        let mut region: [u8; 0] = [];
        let mut conv = TextConverter::with_buffer(&mut region);
        assert_eq!(conv.convert(99_u8), "");
        assert_eq!(conv.as_c_str().to_bytes(), b"");
    }

    #[test]
    fn default_precision_and_override() {
        let mut conv = TextConverter::new().with_precision(Some(3));
        assert_eq!(conv.convert(1.0_f64), "1.000");
        assert_eq!(conv.convert_with_precision(1.0_f64, None), "1");
        assert_eq!(conv.convert(5_u8), "5");
    }

    #[test]
    fn radix_conversions() {
        let mut conv = TextConverter::new();
        assert_eq!(conv.convert_radix(255_u8, 16).unwrap(), "ff");
        assert_eq!(conv.convert_radix(-8_i16, 2).unwrap(), "-1000");
        assert_eq!(conv.convert_radix(1_u8, 37), Err(ConvertError::Radix(37)));
        assert!(TextConverter::new().with_radix(1).is_err());

        let mut hex = TextConverter::new().with_radix(16).unwrap();
        assert_eq!(hex.convert(0xbeef_u32), "beef");
    }

    #[test]
    fn binary_fits_default_and_owned_buffers() {
        let mut conv = TextConverter::new().with_radix(2).unwrap();
        assert_eq!(conv.convert(i64::MIN).len(), 65);
        assert_eq!(conv.convert(i128::MIN).len(), 129);

        let mut owned = TextConverter::with_capacity(0).with_radix(2).unwrap();
        assert_eq!(owned.capacity(), radix_capacity(2));
        assert_eq!(owned.convert(u64::MAX), format!("{:b}", u64::MAX));

        let mut shared = TextConverter::new();
        assert_eq!(shared.convert_radix(u128::MAX, 2).unwrap().len(), 128);

        let mut grown = TextConverter::with_capacity(0);
        assert_eq!(grown.convert_radix(i128::MIN, 2).unwrap().len(), 129);
        assert_eq!(grown.capacity(), min_capacity_radix::<i128>(2));
        assert_eq!(grown.convert(-5_i8), "-5");
    }

    #[test]
    fn borrowed_region_still_truncates_in_binary() {
        let mut region = [0_u8; 9];
        let mut conv = TextConverter::with_buffer(&mut region)
            .with_radix(2)
            .unwrap();
        assert_eq!(conv.convert(u16::MAX), "11111111");
        assert_eq!(conv.capacity(), 9);
    }

    #[test]
    fn bools() {
        let mut conv = converter::<Text, bool>();
        assert_eq!(conv.convert(true), "true");
        assert_eq!(conv.convert(false), "false");
    }

    #[test]
    fn from_config_applies_defaults() {
        let config = TextConfig {
            capacity: Some(100),
            precision: Some(1),
            radix: 8,
        };
        let mut conv = TextConverter::from_config(&config).unwrap();
        assert_eq!(conv.capacity(), 100);
        assert_eq!(conv.convert(8_u32), "10");
        assert_eq!(conv.convert(0.25_f32), "0.2");

        let bad = TextConfig {
            radix: 0,
            ..TextConfig::default()
        };
        assert!(TextConverter::from_config(&bad).is_err());
    }
}
