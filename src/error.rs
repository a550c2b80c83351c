use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskError {
    #[error("No task found with id {0}.")]
    NotFound(u32),

    #[error("The title must not be empty.")]
    EmptyTitle,

    #[error("The '|' character is not allowed in titles or descriptions.")]
    SeparatorInField,

    #[error("The id must be a whole number.")]
    InvalidId,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TaskError>;
