use crate::model::Field;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LadleError {
    #[error("Recipe with ID {0} not found")]
    RecipeNotFound(u32),

    #[error("Recipe '{0}' already exists. Use the edit command to modify it")]
    DuplicateName(String),

    #[error("Field '{field}' expects {expected}")]
    ValueMismatch { field: Field, expected: &'static str },

    #[error("{field} must be a number, got '{value}'")]
    InvalidNumber { field: Field, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LadleError>;
