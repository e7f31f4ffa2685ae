//! Quiz documents and JSON parsing.
//!
//! A quiz is a versioned list of questions. Loading validates the document
//! up front so that every identifier maps to exactly one question and
//! therefore to exactly one option order.

use std::collections::HashSet;

use camino::Utf8Path;
use cap_std::fs::Dir;
use rand::Rng;
use serde::Deserialize;

use crate::error::QuizError;
use crate::question::{Question, ShuffledQuestion};

/// Current supported quiz version.
const SUPPORTED_VERSION: u32 = 1;

/// A validated quiz document.
///
/// # Example
///
/// ```
/// use quiz_shuffle::Quiz;
///
/// let json = r#"{
///     "version": 1,
///     "questions": [
///         {"id": "seed1", "options": ["A", "B", "C", "D"], "correct": ["B"]}
///     ]
/// }"#;
///
/// let quiz = Quiz::from_json(json).expect("valid quiz");
/// let shuffled = quiz.shuffle_all();
///
/// assert_eq!(shuffled.len(), 1);
/// assert_eq!(shuffled.first().map(|q| q.options.clone()), Some(vec![
///     "C".to_owned(), "D".to_owned(), "A".to_owned(), "B".to_owned(),
/// ]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quiz {
    version: u32,
    questions: Vec<Question>,
}

impl Quiz {
    /// Parses a quiz from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`QuizError`] if:
    /// - The JSON is malformed or missing required fields
    /// - The version is unsupported
    /// - The questions array is empty
    /// - Two questions share an identifier
    pub fn from_json(json: &str) -> Result<Self, QuizError> {
        let raw: RawQuiz = serde_json::from_str(json).map_err(|e| QuizError::ParseError {
            message: e.to_string(),
        })?;

        Self::from_raw(raw)
    }

    /// Loads a quiz from `path` relative to `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`QuizError`] if the file cannot be read or parsed.
    pub fn from_file(dir: &Dir, path: &Utf8Path) -> Result<Self, QuizError> {
        let contents = dir
            .read_to_string(path)
            .map_err(|e| QuizError::IoError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        Self::from_json(&contents)
    }

    fn from_raw(raw: RawQuiz) -> Result<Self, QuizError> {
        if raw.version != SUPPORTED_VERSION {
            return Err(QuizError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        if raw.questions.is_empty() {
            return Err(QuizError::EmptyQuestions);
        }

        let mut seen = HashSet::new();
        for (index, question) in raw.questions.iter().enumerate() {
            let Some(id) = question.seed() else {
                continue;
            };
            if !seen.insert(id.clone()) {
                return Err(QuizError::DuplicateQuestionId { id, index });
            }
        }

        Ok(Self {
            version: raw.version,
            questions: raw.questions,
        })
    }

    /// Returns the quiz version.
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// Returns all questions in document order.
    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Finds a question by identifier.
    ///
    /// Numeric ids are matched by their decimal form, so `"7"` finds a
    /// question declared with `"id": 7`.
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::QuestionNotFound`] if no question has the id.
    pub fn find_question(&self, id: &str) -> Result<&Question, QuizError> {
        self.questions
            .iter()
            .find(|q| q.seed().as_deref() == Some(id))
            .ok_or_else(|| QuizError::QuestionNotFound { id: id.to_owned() })
    }

    /// Shuffles every question's options, seeding each from its id.
    ///
    /// Questions without an id get a random seed, recorded in the result.
    #[must_use]
    pub fn shuffle_all(&self) -> Vec<ShuffledQuestion> {
        self.shuffle_all_with_rng(&mut rand::rng())
    }

    /// Like [`Quiz::shuffle_all`], drawing fallback seeds from `rng`.
    pub fn shuffle_all_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<ShuffledQuestion> {
        self.questions
            .iter()
            .map(|q| q.shuffle_with_rng(&mut *rng))
            .collect()
    }

    /// Shuffles every question's options with the same explicit seed.
    #[must_use]
    pub fn shuffle_with_seed(&self, seed: &str) -> Vec<ShuffledQuestion> {
        self.questions
            .iter()
            .map(|q| q.shuffle_with_seed(seed))
            .collect()
    }
}

/// Raw JSON representation for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawQuiz {
    version: u32,
    questions: Vec<Question>,
}
