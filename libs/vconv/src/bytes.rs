use std::fmt;
use std::marker::PhantomData;

use crate::dispatch::{ByteArray, Convert, Dispatch, ValueConvert};
use crate::error::ConvertError;

mod sealed {
    pub trait Sealed {}
}

/// A primitive integer with a fixed byte width.
///
/// This trait is sealed; negative values use two's complement.
pub trait FixedWidth: Copy + sealed::Sealed {
    const WIDTH: usize;
    const NAME: &'static str;

    /// `[u8; WIDTH]`.
    type Bytes: AsRef<[u8]> + AsMut<[u8]> + Copy + Default + fmt::Debug + PartialEq;

    #[doc(hidden)]
    fn to_le(self) -> Self::Bytes;
    #[doc(hidden)]
    fn to_be(self) -> Self::Bytes;
    #[doc(hidden)]
    fn to_ne(self) -> Self::Bytes;
    #[doc(hidden)]
    fn from_le(bytes: Self::Bytes) -> Self;
    #[doc(hidden)]
    fn from_be(bytes: Self::Bytes) -> Self;
    #[doc(hidden)]
    fn from_ne(bytes: Self::Bytes) -> Self;
}

macro_rules! fixed_width {
    ($($t:ty),*) => {$(
        impl sealed::Sealed for $t {}

        impl FixedWidth for $t {
            const WIDTH: usize = size_of::<$t>();
            const NAME: &'static str = stringify!($t);
            type Bytes = [u8; size_of::<$t>()];

            #[inline]
            fn to_le(self) -> Self::Bytes {
                self.to_le_bytes()
            }

            #[inline]
            fn to_be(self) -> Self::Bytes {
                self.to_be_bytes()
            }

            #[inline]
            fn to_ne(self) -> Self::Bytes {
                self.to_ne_bytes()
            }

            #[inline]
            fn from_le(bytes: Self::Bytes) -> Self {
                <$t>::from_le_bytes(bytes)
            }

            #[inline]
            fn from_be(bytes: Self::Bytes) -> Self {
                <$t>::from_be_bytes(bytes)
            }

            #[inline]
            fn from_ne(bytes: Self::Bytes) -> Self {
                <$t>::from_ne_bytes(bytes)
            }
        }

        impl Dispatch<ByteArray> for $t {
            type Converter = ByteArrayConverter<$t>;
        }

        impl<'s> Dispatch<$t> for &'s [u8] {
            type Converter = ByteArrayConverter<$t>;
        }
    )*};
}

fixed_width!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Compile-time byte order policy.
pub trait ByteOrder: sealed::Sealed {
    const NAME: &'static str;

    fn encode<T: FixedWidth>(value: T) -> T::Bytes;
    fn decode<T: FixedWidth>(bytes: T::Bytes) -> T;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LittleEndian;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BigEndian;

/// Host order. The default policy: no byte swapping on any target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NativeEndian;

impl sealed::Sealed for LittleEndian {}
impl sealed::Sealed for BigEndian {}
impl sealed::Sealed for NativeEndian {}

impl ByteOrder for LittleEndian {
    const NAME: &'static str = "little";

    #[inline]
    fn encode<T: FixedWidth>(value: T) -> T::Bytes {
        value.to_le()
    }

    #[inline]
    fn decode<T: FixedWidth>(bytes: T::Bytes) -> T {
        T::from_le(bytes)
    }
}

impl ByteOrder for BigEndian {
    const NAME: &'static str = "big";

    #[inline]
    fn encode<T: FixedWidth>(value: T) -> T::Bytes {
        value.to_be()
    }

    #[inline]
    fn decode<T: FixedWidth>(bytes: T::Bytes) -> T {
        T::from_be(bytes)
    }
}

impl ByteOrder for NativeEndian {
    const NAME: &'static str = "native";

    #[inline]
    fn encode<T: FixedWidth>(value: T) -> T::Bytes {
        value.to_ne()
    }

    #[inline]
    fn decode<T: FixedWidth>(bytes: T::Bytes) -> T {
        T::from_ne(bytes)
    }
}

/// Integer <-> raw bytes in the byte order `O`.
///
/// Stateless. Encoding cannot fail; decoding requires the exact width and
/// reports anything else as [`ConvertError::Length`].
///
/// ```
/// use vconv::{ByteArrayConverter, LittleEndian};
///
/// let conv = ByteArrayConverter::<i32, LittleEndian>::new();
/// assert_eq!(conv.to_bytes(363), [0x6b, 0x01, 0x00, 0x00]);
/// assert_eq!(conv.read(&[0xfe, 0xff, 0xff, 0xff]), Ok(-2));
/// ```
pub struct ByteArrayConverter<T, O = NativeEndian>(PhantomData<fn() -> (T, O)>);

impl<T: FixedWidth, O: ByteOrder> ByteArrayConverter<T, O> {
    pub const WIDTH: usize = T::WIDTH;

    pub const fn new() -> Self {
        Self(PhantomData)
    }

    #[inline]
    pub fn to_bytes(&self, value: T) -> T::Bytes {
        O::encode(value)
    }

    /// Write the encoded value into the first `WIDTH` bytes of `dest`.
    ///
    /// `dest` is never resized; the remaining bytes are left untouched.
    pub fn write_into(&self, dest: &mut [u8], value: T) -> Result<(), ConvertError> {
        let actual = dest.len();
        let slot = dest
            .get_mut(..T::WIDTH)
            .ok_or_else(|| ConvertError::length(T::NAME, T::WIDTH, actual))?;
        slot.copy_from_slice(O::encode(value).as_ref());
        Ok(())
    }

    /// Decode exactly `WIDTH` bytes.
    pub fn read(&self, bytes: &[u8]) -> Result<T, ConvertError> {
        if bytes.len() != T::WIDTH {
            return Err(ConvertError::length(T::NAME, T::WIDTH, bytes.len()));
        }
        let mut raw = T::Bytes::default();
        raw.as_mut().copy_from_slice(bytes);
        Ok(O::decode(raw))
    }

    /// Decode the leading `WIDTH` bytes and return the rest of the payload.
    pub fn read_prefix<'s>(&self, bytes: &'s [u8]) -> Result<(T, &'s [u8]), ConvertError> {
        if bytes.len() < T::WIDTH {
            return Err(ConvertError::length(T::NAME, T::WIDTH, bytes.len()));
        }
        let (head, rest) = bytes.split_at(T::WIDTH);
        Ok((self.read(head)?, rest))
    }
}

impl<T: FixedWidth, O: ByteOrder> Default for ByteArrayConverter<T, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, O> Clone for ByteArrayConverter<T, O> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, O> Copy for ByteArrayConverter<T, O> {}

impl<T: FixedWidth, O: ByteOrder> fmt::Debug for ByteArrayConverter<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ByteArrayConverter<{}, {}>", T::NAME, O::NAME)
    }
}

impl<T: FixedWidth, O: ByteOrder> ValueConvert<T> for ByteArrayConverter<T, O> {
    type Value = T::Bytes;

    #[inline]
    fn convert_value(&self, value: T) -> T::Bytes {
        self.to_bytes(value)
    }
}

impl<'s, T: FixedWidth, O: ByteOrder> ValueConvert<&'s [u8]> for ByteArrayConverter<T, O> {
    type Value = Result<T, ConvertError>;

    #[inline]
    fn convert_value(&self, bytes: &'s [u8]) -> Result<T, ConvertError> {
        self.read(bytes)
    }
}

impl<T: FixedWidth, O: ByteOrder> Convert<T> for ByteArrayConverter<T, O> {
    type Output<'a>
        = T::Bytes
    where
        Self: 'a;

    #[inline]
    fn convert(&mut self, value: T) -> T::Bytes {
        self.to_bytes(value)
    }
}

impl<'s, T: FixedWidth, O: ByteOrder> Convert<&'s [u8]> for ByteArrayConverter<T, O> {
    type Output<'a>
        = Result<T, ConvertError>
    where
        Self: 'a;

    #[inline]
    fn convert(&mut self, bytes: &'s [u8]) -> Result<T, ConvertError> {
        self.read(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_vectors() {
        let le = ByteArrayConverter::<i32, LittleEndian>::new();
        let be = ByteArrayConverter::<i32, BigEndian>::new();
        assert_eq!(le.to_bytes(363), [0x6b, 0x01, 0x00, 0x00]);
        assert_eq!(le.to_bytes(-2), [0xfe, 0xff, 0xff, 0xff]);
        assert_eq!(be.to_bytes(363), [0x00, 0x00, 0x01, 0x6b]);
        assert_eq!(be.read(&[0x00, 0x00, 0x01, 0x6b]), Ok(363));
    }

    #[test]
    fn native_matches_host() {
        let conv = ByteArrayConverter::<u64>::new();
        assert_eq!(
            conv.to_bytes(0x0102_0304_0506_0708),
            0x0102_0304_0506_0708_u64.to_ne_bytes()
        );
    }

    #[test]
    fn write_into_leaves_tail() {
        let conv = ByteArrayConverter::<u16, LittleEndian>::new();
        let mut dest = [0xaa_u8; 4];
        conv.write_into(&mut dest, 0x1234).unwrap();
        assert_eq!(dest, [0x34, 0x12, 0xaa, 0xaa]);
    }

    #[test]
    fn write_into_short_container_fails() {
        let conv = ByteArrayConverter::<u32, LittleEndian>::new();
        let mut dest = [0xaa_u8; 3];
        assert_eq!(
            conv.write_into(&mut dest, 1),
            Err(ConvertError::Length {
                type_name: "u32",
                expected: 4,
                actual: 3,
            })
        );
        assert_eq!(dest, [0xaa; 3]);
    }

    #[test]
    fn read_requires_exact_width() {
        let conv = ByteArrayConverter::<i16, LittleEndian>::new();
        assert!(conv.read(&[0x01]).is_err());
        assert!(conv.read(&[]).is_err());
        assert!(conv.read(&[0x01, 0x02, 0x03]).is_err());
        assert_eq!(conv.read(&[0xff, 0x7f]), Ok(i16::MAX));
    }

    #[test]
    fn read_prefix_splits_payload() {
        let conv = ByteArrayConverter::<u16, BigEndian>::new();
        let payload = [0x00, 0x2a, 0xde, 0xad];
        let (value, rest) = conv.read_prefix(&payload).unwrap();
        assert_eq!(value, 42);
        assert_eq!(rest, &[0xde, 0xad]);
        assert!(conv.read_prefix(&payload[..1]).is_err());
    }

    #[test]
    fn debug_names_type_and_order() {
        let conv = ByteArrayConverter::<i64, BigEndian>::new();
        assert_eq!(format!("{conv:?}"), "ByteArrayConverter<i64, big>");
    }
}
