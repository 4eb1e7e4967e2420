use vconv::config::{Config, Order};
use vconv::{
    BigEndian, ByteArrayConverter, Convert, ConvertError, FixedWidth, LittleEndian, NativeEndian,
    TextConverter,
};

use super::parse_value;
use crate::config::{BytesArgs, IntArgs, NumType};
use crate::error::CliError;

type Little<T> = ByteArrayConverter<T, LittleEndian>;
type Big<T> = ByteArrayConverter<T, BigEndian>;
type Native<T> = ByteArrayConverter<T, NativeEndian>;

fn encode_with<T: FixedWidth>(value: T, order: Order) -> T::Bytes {
    match order {
        Order::Little => Little::<T>::new().to_bytes(value),
        Order::Big => Big::<T>::new().to_bytes(value),
        Order::Native => Native::<T>::new().to_bytes(value),
    }
}

fn decode_with<T: FixedWidth>(bytes: &[u8], order: Order) -> Result<T, ConvertError> {
    match order {
        Order::Little => Little::<T>::new().read(bytes),
        Order::Big => Big::<T>::new().read(bytes),
        Order::Native => Native::<T>::new().read(bytes),
    }
}

/// `[0x6b, 0x01]` -> `"6b 01"`.
fn to_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Drops one leading `0x` or `0X`.
fn strip_hex_prefix(word: &str) -> &str {
    word.strip_prefix("0x")
        .or_else(|| word.strip_prefix("0X"))
        .unwrap_or(word)
}

/// Accepts `6b 01`, `6b01`, `0x6b01` across any number of arguments.
fn from_hex(parts: &[String]) -> Result<Vec<u8>, CliError> {
    let digits: String = parts
        .iter()
        .flat_map(|p| p.split_whitespace())
        .map(strip_hex_prefix)
        .collect();
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(CliError::Hex(format!("non-hex characters in {digits:?}")));
    }
    if digits.len() % 2 != 0 {
        return Err(CliError::Hex(format!("odd number of hex digits in {digits:?}")));
    }
    digits
        .as_bytes()
        .chunks_exact(2)
        .map(|pair| {
            let hi = (pair[0] as char).to_digit(16);
            let lo = (pair[1] as char).to_digit(16);
            match (hi, lo) {
                (Some(hi), Some(lo)) => Ok((hi * 16 + lo) as u8),
                _ => Err(CliError::Hex(format!("bad byte {pair:?}"))),
            }
        })
        .collect()
}

pub fn encode(args: &BytesArgs, config: &Config) -> Result<String, CliError> {
    let order = args.order.unwrap_or(config.bytes.order);
    tracing::debug!(ty = ?args.ty, ?order, "byte encoding");

    macro_rules! encode {
        ($t:ty) => {{
            let value: $t = parse_value(stringify!($t), &args.value)?;
            to_hex(encode_with(value, order).as_ref())
        }};
    }

    let out = match args.ty {
        NumType::I8 => encode!(i8),
        NumType::I16 => encode!(i16),
        NumType::I32 => encode!(i32),
        NumType::I64 => encode!(i64),
        NumType::I128 => encode!(i128),
        NumType::Isize => encode!(isize),
        NumType::U8 => encode!(u8),
        NumType::U16 => encode!(u16),
        NumType::U32 => encode!(u32),
        NumType::U64 => encode!(u64),
        NumType::U128 => encode!(u128),
        NumType::Usize => encode!(usize),
        NumType::F32 | NumType::F64 => {
            return Err(CliError::Usage("byte conversion requires an integer type"));
        }
    };
    Ok(out)
}

pub fn decode(args: &IntArgs, config: &Config) -> Result<String, CliError> {
    let order = args.order.unwrap_or(config.bytes.order);
    let bytes = from_hex(&args.bytes)?;
    tracing::debug!(ty = ?args.ty, ?order, len = bytes.len(), "byte decoding");

    let mut text = TextConverter::new();
    macro_rules! decode {
        ($t:ty) => {{
            let value: $t = decode_with(&bytes, order)?;
            text.convert(value).to_owned()
        }};
    }

    let out = match args.ty {
        NumType::I8 => decode!(i8),
        NumType::I16 => decode!(i16),
        NumType::I32 => decode!(i32),
        NumType::I64 => decode!(i64),
        NumType::I128 => decode!(i128),
        NumType::Isize => decode!(isize),
        NumType::U8 => decode!(u8),
        NumType::U16 => decode!(u16),
        NumType::U32 => decode!(u32),
        NumType::U64 => decode!(u64),
        NumType::U128 => decode!(u128),
        NumType::Usize => decode!(usize),
        NumType::F32 | NumType::F64 => {
            return Err(CliError::Usage("byte conversion requires an integer type"));
        }
    };
    Ok(out)
}
