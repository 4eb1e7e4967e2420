use crate::buffer::Cursor;

/// Longest digit run: 128 bits in base 2.
const SCRATCH_LEN: usize = 128;

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// A primitive integer with a dedicated digit writer.
///
/// This trait is sealed; it is implemented for every primitive integer.
pub trait Integral: Copy + super::sealed::Sealed {
    /// Largest magnitude the type can hold (`MIN` for signed types).
    const MAX_MAGNITUDE: u128;

    /// Decimal digits of [`Self::MAX_MAGNITUDE`].
    const MAX_DIGITS: usize = digits(Self::MAX_MAGNITUDE, 10);

    #[doc(hidden)]
    type Magnitude: Magnitude;

    #[doc(hidden)]
    fn split_sign(self) -> (bool, Self::Magnitude);
}

#[doc(hidden)]
pub trait Magnitude: Copy {
    fn is_zero(self) -> bool;

    /// Divide in place by `radix`, returning the remainder.
    fn pop_digit(&mut self, radix: u32) -> u8;
}

/// Digits of `magnitude` in `radix`. Radixes below 2 count as 2.
const fn digits(mut magnitude: u128, radix: u32) -> usize {
    let radix = if radix < 2 { 2 } else { radix as u128 };
    let mut count = 1;
    while magnitude >= radix {
        magnitude /= radix;
        count += 1;
    }
    count
}

/// Smallest buffer that holds any value of `T` in base 10: digits, sign and
/// terminator.
pub const fn min_capacity<T: Integral>() -> usize {
    min_capacity_radix::<T>(10)
}

/// Smallest buffer that holds any value of `T` in `radix`.
pub const fn min_capacity_radix<T: Integral>(radix: u32) -> usize {
    digits(T::MAX_MAGNITUDE, radix) + 2
}

/// Smallest buffer that holds every primitive integer in `radix`.
pub const fn radix_capacity(radix: u32) -> usize {
    let unsigned = min_capacity_radix::<u128>(radix);
    let signed = min_capacity_radix::<i128>(radix);
    if unsigned > signed { unsigned } else { signed }
}

/// Write `value` in `radix` (already validated to 2..=36).
pub(crate) fn write_integral<T: Integral>(value: T, buf: &mut [u8], radix: u32) -> usize {
    let (negative, mut n) = value.split_sign();
    let mut scratch = [0_u8; SCRATCH_LEN];
    let mut pos = SCRATCH_LEN;

    if n.is_zero() {
        pos -= 1;
        scratch[pos] = b'0';
    }
    while !n.is_zero() {
        pos -= 1;
        scratch[pos] = DIGITS[n.pop_digit(radix) as usize];
    }

    let mut out = Cursor::new(buf);
    if negative {
        out.push(b'-');
    }
    out.push_slice(&scratch[pos..]);
    out.finish()
}

macro_rules! magnitude {
    ($($u:ty),*) => {$(
        impl Magnitude for $u {
            #[inline]
            fn is_zero(self) -> bool {
                self == 0
            }

            #[inline]
            fn pop_digit(&mut self, radix: u32) -> u8 {
                let r = radix as $u;
                let digit = (*self % r) as u8;
                *self /= r;
                digit
            }
        }
    )*};
}

magnitude!(u8, u16, u32, u64, u128, usize);

macro_rules! unsigned {
    ($($t:ty),*) => {$(
        impl super::sealed::Sealed for $t {}

        impl Integral for $t {
            const MAX_MAGNITUDE: u128 = <$t>::MAX as u128;
            type Magnitude = $t;

            #[inline]
            fn split_sign(self) -> (bool, $t) {
                (false, self)
            }
        }
    )*};
}

macro_rules! signed {
    ($($t:ty => $u:ty),*) => {$(
        impl super::sealed::Sealed for $t {}

        impl Integral for $t {
            const MAX_MAGNITUDE: u128 = <$t>::MIN.unsigned_abs() as u128;
            type Magnitude = $u;

            #[inline]
            fn split_sign(self) -> (bool, $u) {
                (self < 0, self.unsigned_abs())
            }
        }
    )*};
}

unsigned!(u8, u16, u32, u64, u128, usize);
signed!(i8 => u8, i16 => u16, i32 => u32, i64 => u64, i128 => u128, isize => usize);
