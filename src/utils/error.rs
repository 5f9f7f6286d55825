use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZooError {
    #[error("Validation error on {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Value out of range for {field} ({value}): {message}")]
    Range {
        field: String,
        value: i64,
        message: String,
    },

    #[error("Invalid number for {field}: {input:?}")]
    InvalidNumber { field: String, input: String },

    #[error("Input closed while waiting for {prompt:?}")]
    InputClosed { prompt: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ZooError {
    /// Errors a user can fix by typing something else, as opposed to a broken console.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ZooError::Validation { .. } | ZooError::Range { .. } | ZooError::InvalidNumber { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ZooError>;
