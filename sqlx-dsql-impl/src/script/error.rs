use thiserror::Error as ThisError;

/// Error returned when running a SQL script through a [`crate::ScriptRunner`].
#[derive(Debug, ThisError)]
pub enum ScriptError<E> {
    #[error("script does not contain any statement")]
    Empty,
    #[error("statement #{index} failed: {source}\n{statement}")]
    Statement {
        /// Zero-based position of the statement in the script.
        index: usize,
        statement: String,
        #[source]
        source: E,
    },
}

impl<E> ScriptError<E> {
    /// Returns the failed statement, if the error was caused by one.
    #[must_use]
    pub fn statement(&self) -> Option<&str> {
        match self {
            Self::Empty => None,
            Self::Statement { statement, .. } => Some(statement),
        }
    }
}

/// Error returned for invalid script runner configuration values.
#[derive(Debug, ThisError)]
pub enum ScriptConfigError {
    #[error("invalid value for {0}: {1}")]
    InvalidParameter(&'static str, String),
}
