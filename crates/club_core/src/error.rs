use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("invalid option index {index}: node has {available} options")]
    InvalidOptionIndex { index: usize, available: usize },

    #[error("category already completed this cycle: {0}")]
    CategoryAlreadyCompleted(String),

    #[error("no category in progress")]
    NoActiveCategory,

    #[error("cycle locked for another {remaining_secs} seconds")]
    CycleLocked { remaining_secs: i64 },

    #[error("cycle not complete: {completed} of {required} categories played")]
    CycleIncomplete { completed: usize, required: usize },

    #[error("store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
