use thiserror::Error;

#[derive(Error, Debug)]
pub enum PagemartError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl PagemartError {
    /// Get an actionable hint for how to resolve this error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            PagemartError::IoError(_) => Some(
                "Check that the input file exists and is readable, or pass `-` to read from stdin",
            ),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, PagemartError>;
