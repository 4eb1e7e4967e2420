use clap::{Args, Parser, Subcommand, ValueEnum};

use vconv::config::{Config, Order};

use crate::error::CliError;

#[derive(Parser, Debug)]
#[command(name = "vconv", about = "Convert numbers to text and raw bytes")]
pub struct Cli {
    /// Path to a TOML file with converter defaults.
    #[arg(long, global = true, env = "VCONV_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a number as text
    Text(TextArgs),
    /// Encode an integer as hex bytes
    Bytes(BytesArgs),
    /// Decode hex bytes into an integer
    Int(IntArgs),
}

#[derive(Args, Clone, Debug)]
pub struct TextArgs {
    #[arg(value_enum)]
    pub ty: NumType,
    #[arg(allow_hyphen_values = true)]
    pub value: String,
    /// Fraction digits for floats (truncated, not rounded)
    #[arg(long)]
    pub precision: Option<u32>,
    /// Integer base, 2..=36
    #[arg(long)]
    pub radix: Option<u32>,
    /// Buffer size in bytes; longer output is truncated
    #[arg(long)]
    pub capacity: Option<usize>,
}

#[derive(Args, Clone, Debug)]
pub struct BytesArgs {
    #[arg(value_enum)]
    pub ty: NumType,
    #[arg(allow_hyphen_values = true)]
    pub value: String,
    /// little | big | native
    #[arg(long)]
    pub order: Option<Order>,
}

#[derive(Args, Clone, Debug)]
pub struct IntArgs {
    #[arg(value_enum)]
    pub ty: NumType,
    /// Hex bytes, e.g. `6b 01 00 00` or `6b010000`
    #[arg(required = true, num_args = 1..)]
    pub bytes: Vec<String>,
    /// little | big | native
    #[arg(long)]
    pub order: Option<Order>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum NumType {
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
    U8,
    U16,
    U32,
    U64,
    U128,
    Usize,
    F32,
    F64,
}

impl NumType {
    pub fn is_float(self) -> bool {
        matches!(self, NumType::F32 | NumType::F64)
    }
}

/// Converter defaults from the optional config file.
pub fn load(path: Option<&str>) -> Result<Config, CliError> {
    match path {
        Some(path) => {
            let config = Config::load(path)?;
            tracing::info!(config = %path, "configuration loaded");
            Ok(config)
        }
        None => Ok(Config::default()),
    }
}
