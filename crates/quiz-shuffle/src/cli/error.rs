//! Error types for the quiz shuffle CLI.

use thiserror::Error;

use crate::error::QuizError;

/// Errors surfaced by the CLI parsing and shuffle flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// Quiz path was not supplied.
    #[error("missing required flag: --quiz")]
    MissingQuizPath,
    /// A flag expected a value but none was provided.
    #[error("missing value for {flag}")]
    MissingValue {
        /// Flag that was missing its value.
        flag: &'static str,
    },
    /// An unsupported argument was supplied.
    #[error("unknown argument: {value}")]
    UnknownArgument {
        /// Argument value that was not recognized.
        value: String,
    },
    /// The quiz path has no file name component.
    #[error("quiz path '{path}' does not name a file")]
    InvalidQuizPath {
        /// Path as supplied on the command line.
        path: String,
    },
    /// The shuffled output could not be serialized.
    #[error("failed to render output: {message}")]
    RenderError {
        /// Serializer error message.
        message: String,
    },
    /// An error occurred while loading or querying the quiz.
    #[error("quiz error: {source}")]
    QuizError {
        /// Underlying quiz error.
        #[from]
        #[source]
        source: QuizError,
    },
}
