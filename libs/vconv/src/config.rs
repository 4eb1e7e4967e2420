use std::str::FromStr;

use serde::Deserialize;

use crate::error::ConvertError;

/// Converter defaults, parsed from TOML (or JSON).
///
/// ```toml
/// [text]
/// capacity = 96
/// precision = 3
/// radix = 10
///
/// [bytes]
/// order = "little"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub text: TextConfig,
    pub bytes: BytesConfig,
}

/// Text converter defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Owned buffer size in bytes. `None` keeps the inline default buffer.
    pub capacity: Option<usize>,
    /// Float fraction digits. `None` writes the shortest representation.
    pub precision: Option<u32>,
    /// Integer base, 2..=36.
    pub radix: u32,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            capacity: None,
            precision: None,
            radix: 10,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BytesConfig {
    pub order: Order,
}

/// Byte order selected at runtime (CLI, config).
///
/// Converters take the order as a type; this only picks which one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    #[serde(alias = "le")]
    Little,
    #[serde(alias = "be")]
    Big,
    #[default]
    Native,
}

impl FromStr for Order {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "little" | "le" => Ok(Order::Little),
            "big" | "be" => Ok(Order::Big),
            "native" | "ne" => Ok(Order::Native),
            other => Err(ConvertError::Config(format!(
                "byte order must be \"little\", \"big\" or \"native\", got {other:?}"
            ))),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self, ConvertError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConvertError::Config(format!("{path}: {e}")))?;
        Self::parse(&content).map_err(|e| e.with_context(path))
    }

    /// Parse configuration from a TOML string.
    pub fn parse(toml_str: &str) -> Result<Self, ConvertError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a JSON string.
    pub fn parse_json(json: &str) -> Result<Self, ConvertError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConvertError> {
        if !(2..=36).contains(&self.text.radix) {
            return Err(ConvertError::Config(format!(
                "text.radix must be in 2..=36, got {}",
                self.text.radix
            )));
        }
        if self.text.capacity == Some(0) {
            return Err(ConvertError::Config("text.capacity must be positive".into()));
        }
        Ok(())
    }
}
