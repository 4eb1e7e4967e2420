/// Runtime conversion failure.
///
/// Only structured-data paths report errors. Text output never fails: it is
/// truncated to the buffer instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// Byte input or output region does not match the integer width.
    #[error("{type_name}: expected {expected} bytes, got {actual}")]
    Length {
        type_name: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("radix {0} out of range (expected 2..=36)")]
    Radix(u32),

    #[error("config error: {0}")]
    Config(String),
}

impl ConvertError {
    pub(crate) fn length(type_name: &'static str, expected: usize, actual: usize) -> Self {
        tracing::debug!(type_name, expected, actual, "byte length mismatch");
        Self::Length {
            type_name,
            expected,
            actual,
        }
    }

    /// Add context to the error.
    ///
    /// Only the `Config` message can carry it; structured variants are
    /// returned unchanged so callers can still match on their fields.
    pub fn with_context(self, ctx: impl std::fmt::Display) -> Self {
        match self {
            ConvertError::Config(msg) => ConvertError::Config(format!("{ctx}: {msg}")),
            other => other,
        }
    }
}

impl From<toml::de::Error> for ConvertError {
    fn from(e: toml::de::Error) -> Self {
        Self::Config(e.to_string())
    }
}

impl From<serde_json::Error> for ConvertError {
    fn from(e: serde_json::Error) -> Self {
        Self::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_prefixes_config_message() {
        let e = ConvertError::Config("bad capacity".into());
        let e = e.with_context("vconv.toml");
        assert_eq!(e.to_string(), "config error: vconv.toml: bad capacity");
    }

    #[test]
    fn context_keeps_length_fields() {
        let e = ConvertError::length("i32", 4, 3).with_context("payload");
        assert_eq!(
            e,
            ConvertError::Length {
                type_name: "i32",
                expected: 4,
                actual: 3,
            }
        );
        assert_eq!(e.to_string(), "i32: expected 4 bytes, got 3");
    }
}
