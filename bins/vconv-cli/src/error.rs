use vconv::ConvertError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Convert(#[from] ConvertError),

    #[error("invalid {ty} value {value:?}: {detail}")]
    Value {
        ty: &'static str,
        value: String,
        detail: String,
    },

    #[error("invalid hex input: {0}")]
    Hex(String),

    #[error("{0}")]
    Usage(&'static str),
}
