use thiserror::Error;

/// Errors raised while interpreting UI input.
///
/// None of these reach the user. Callers log them and carry on with the
/// documented fallback (ignore the click, or store an invalid range).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GardenError {
    /// A tool-selector identifier that is not one of the four known buttons
    #[error("unknown tool button: {0}")]
    UnknownTool(String),
    /// The sprinkler range input did not start with an integer
    #[error("invalid sprinkler range: {0:?}")]
    InvalidRange(String),
}

pub type GardenResult<T> = Result<T, GardenError>;
