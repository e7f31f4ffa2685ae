//! Error types for quiz documents.
//!
//! The shuffle primitives never fail; errors only arise when a quiz document
//! is read, parsed or queried.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when loading or querying a quiz document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// The quiz file could not be read.
    #[error("failed to read quiz file at '{path}': {message}")]
    IoError {
        /// Path to the quiz file.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The quiz JSON is malformed or missing required fields.
    #[error("invalid quiz JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The quiz version is not supported.
    #[error("unsupported quiz version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the document.
        actual: u32,
    },

    /// The quiz contains no questions.
    #[error("quiz contains no questions")]
    EmptyQuestions,

    /// Two questions share the same identifier.
    #[error("duplicate question id '{id}' at index {index}")]
    DuplicateQuestionId {
        /// The repeated identifier.
        id: String,
        /// Index of the second occurrence.
        index: usize,
    },

    /// The requested question was not found.
    #[error("question '{id}' not found in quiz")]
    QuestionNotFound {
        /// The identifier that was not found.
        id: String,
    },
}
