use thiserror::Error;

#[derive(Error, Debug)]
pub enum HexAlignError {
    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Invalid hex digit '{digit}' in '{token}'")]
    InvalidDigit { token: String, digit: char },

    #[error("No numbers entered.")]
    EmptyInput,

    #[error("Invalid input on line {line}: {input}")]
    InvalidLine {
        line: usize,
        input: String,
        #[source]
        source: Box<HexAlignError>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl HexAlignError {
    /// Returns true for errors caused by the user's input rather than the
    /// environment.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            HexAlignError::InvalidNumber(_)
                | HexAlignError::InvalidDigit { .. }
                | HexAlignError::EmptyInput
                | HexAlignError::InvalidLine { .. }
        )
    }
}

pub type Error = HexAlignError;
pub type Result<T> = std::result::Result<T, Error>;
