use thiserror::Error;

/// Errors produced by model constructors and validation routines.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("slide {index} has an empty {field}")]
    EmptyField { index: usize, field: &'static str },
}

pub type Result<T> = std::result::Result<T, ModelError>;
