use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatusError {
    /// A nullable source produced no value.
    #[error("status code is absent")]
    InvalidArgument,

    #[error("unknown status code: {0:?}")]
    UnknownCode(String),

    #[error("unknown status name: {0:?}")]
    UnknownName(String),

    #[error("invalid status configuration: {0}")]
    Config(#[from] envy::Error),
}
