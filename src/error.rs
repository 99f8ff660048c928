use thiserror::Error;

pub type CommandResult<T> = Result<T, GreeterError>;

#[derive(Debug, Error)]
pub enum GreeterError {
    #[error("argument {index} is not valid unicode: {lossy:?}")]
    InvalidArgument { index: usize, lossy: String },

    #[error("failed to serialize greeting")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to write greeting")]
    Write(#[source] std::io::Error),
}
