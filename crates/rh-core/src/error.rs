use thiserror::Error;

pub type RhResult<T> = Result<T, RhError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RhError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}
