//! Error types for the joist CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use crate::template::TemplateError;
use thiserror::Error;

/// Main error type for joist operations.
///
/// Each variant maps to a specific exit code.
#[derive(Error, Debug)]
pub enum JoistError {
    /// User provided invalid arguments or the target is in an invalid state.
    #[error("{0}")]
    UserError(String),

    /// Template rendering failed.
    #[error("Template rendering failed: {0}")]
    TemplateError(#[from] TemplateError),

    /// Filesystem operation failed.
    #[error("{0}")]
    IoError(String),
}

impl JoistError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            JoistError::UserError(_) => exit_codes::USER_ERROR,
            JoistError::TemplateError(_) => exit_codes::TEMPLATE_FAILURE,
            JoistError::IoError(_) => exit_codes::IO_FAILURE,
        }
    }
}

/// Result type alias for joist operations.
pub type Result<T> = std::result::Result<T, JoistError>;
