use thiserror::Error;

/// Rejected parameter override from the URL query or the command line.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParamError {
    #[error("unknown parameter `{0}`")]
    UnknownKey(String),

    #[error("invalid value `{value}` for `{key}`")]
    InvalidValue { key: String, value: String },

    #[error("`{key}` out of range: {value} (expected {expected})")]
    OutOfRange {
        key: &'static str,
        value: f64,
        expected: &'static str,
    },

    #[error("missing `=` in parameter `{0}`")]
    MissingValue(String),
}

pub type ParamResult<T> = Result<T, ParamError>;
