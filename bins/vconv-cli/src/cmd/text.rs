use vconv::config::{Config, TextConfig};
use vconv::{Convert, TextConverter};

use super::parse_value;
use crate::config::{NumType, TextArgs};
use crate::error::CliError;

/// Flags override the `[text]` section of the config file.
fn effective(args: &TextArgs, config: &Config) -> TextConfig {
    TextConfig {
        capacity: args.capacity.or(config.text.capacity),
        precision: args.precision.or(config.text.precision),
        radix: args.radix.unwrap_or(config.text.radix),
    }
}

pub fn run(args: &TextArgs, config: &Config) -> Result<String, CliError> {
    let text_config = effective(args, config);
    if args.ty.is_float() && text_config.radix != 10 {
        return Err(CliError::Usage("--radix applies to integer types only"));
    }

    let mut conv = TextConverter::from_config(&text_config)?;
    tracing::debug!(ty = ?args.ty, converter = ?conv, "text conversion");

    macro_rules! render {
        ($t:ty) => {{
            let value: $t = parse_value(stringify!($t), &args.value)?;
            conv.convert(value).to_owned()
        }};
    }

    let out = match args.ty {
        NumType::I8 => render!(i8),
        NumType::I16 => render!(i16),
        NumType::I32 => render!(i32),
        NumType::I64 => render!(i64),
        NumType::I128 => render!(i128),
        NumType::Isize => render!(isize),
        NumType::U8 => render!(u8),
        NumType::U16 => render!(u16),
        NumType::U32 => render!(u32),
        NumType::U64 => render!(u64),
        NumType::U128 => render!(u128),
        NumType::Usize => render!(usize),
        NumType::F32 => render!(f32),
        NumType::F64 => render!(f64),
    };
    Ok(out)
}
