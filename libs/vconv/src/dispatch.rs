use std::marker::PhantomData;

/// A converter from `S`.
///
/// Buffer-writing converters hand out a view borrowed from `self`, so the
/// next call cannot happen while a previous result is still alive.
pub trait Convert<S> {
    type Output<'a>
    where
        Self: 'a;

    fn convert(&mut self, source: S) -> Self::Output<'_>;
}

/// A converter whose result does not borrow the converter.
///
/// Value converters implement it next to [`Convert`]. It is what
/// [`convert`] needs for one-shot calls.
pub trait ValueConvert<S> {
    type Value;

    fn convert_value(&self, source: S) -> Self::Value;
}

/// Static converter selection for the pair `(D, Self)`.
///
/// Implemented directly for every built-in pair. A type without a direct
/// impl gets one through its [`Preferred`] declaration; a pair with
/// neither does not compile.
pub trait Dispatch<D>: Sized {
    type Converter: Convert<Self> + Default;
}

/// Fallback association: "convert me to `D` with this converter".
///
/// Lets a type opt into dispatch without the library knowing about it.
/// Declaring two converters for the same `D` is a conflicting-impl error.
/// `#[derive(Preferred)]` generates these impls.
pub trait Preferred<D>: Sized {
    type Converter: Convert<Self> + Default;
}

impl<D, T: Preferred<D>> Dispatch<D> for T {
    type Converter = <T as Preferred<D>>::Converter;
}

/// The converter resolved for destination `D` and source `S`.
pub type Converter<D, S> = <S as Dispatch<D>>::Converter;

/// Create the converter for `(D, S)`.
///
/// This is the one-time setup step; keep the result and call it repeatedly.
pub fn converter<D, S: Dispatch<D>>() -> Converter<D, S> {
    Default::default()
}

/// One-shot conversion for value converters.
pub fn convert<D, S>(source: S) -> <Converter<D, S> as ValueConvert<S>>::Value
where
    S: Dispatch<D>,
    Converter<D, S>: ValueConvert<S>,
{
    converter::<D, S>().convert_value(source)
}

/// Destination marker: numeric text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Text;

/// Destination marker: fixed-width raw bytes in host order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByteArray;

/// Lossless primitive widening (`u8 -> u32`, `i16 -> i64`, ...). Stateless.
pub struct Widen<S, D>(PhantomData<fn(S) -> D>);

impl<S, D> Default for Widen<S, D> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<S, D> Clone for Widen<S, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, D> Copy for Widen<S, D> {}

impl<S, D: From<S>> ValueConvert<S> for Widen<S, D> {
    type Value = D;

    #[inline]
    fn convert_value(&self, source: S) -> D {
        D::from(source)
    }
}

impl<S, D: From<S>> Convert<S> for Widen<S, D> {
    type Output<'a>
        = D
    where
        Self: 'a;

    #[inline]
    fn convert(&mut self, source: S) -> D {
        D::from(source)
    }
}

macro_rules! widen {
    ($src:ty => $($dst:ty),+) => {
        $(
            impl Dispatch<$dst> for $src {
                type Converter = Widen<$src, $dst>;
            }
        )+
    };
}

widen!(u8 => u16, u32, u64, u128, usize, i16, i32, i64, i128, f32, f64);
widen!(u16 => u32, u64, u128, usize, i32, i64, i128, f32, f64);
widen!(u32 => u64, u128, i64, i128, f64);
widen!(u64 => u128, i128);
widen!(i8 => i16, i32, i64, i128, isize, f32, f64);
widen!(i16 => i32, i64, i128, isize, f32, f64);
widen!(i32 => i64, i128, f64);
widen!(i64 => i128);
widen!(f32 => f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widen_byte_to_unsigned() {
        let value: u32 = convert::<u32, u8>(0xfe);
        assert_eq!(value, 254);
    }

    #[test]
    fn widen_keeps_sign() {
        assert_eq!(convert::<i64, i16>(-300), -300_i64);
        assert_eq!(convert::<f64, i32>(-7), -7.0);
    }

    #[test]
    fn converter_is_reusable() {
        let mut conv = converter::<u64, u16>();
        let total: u64 = [1_u16, 2, u16::MAX]
            .into_iter()
            .map(|v| conv.convert(v))
            .sum();
        assert_eq!(total, 3 + u16::MAX as u64);
    }
}
