//! Error types for layout operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
