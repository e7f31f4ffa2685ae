//! Quiz questions and per-question option shuffling.
//!
//! A question's identifier doubles as its shuffle seed, so a given question
//! presents its options in the same order on every render. Questions without
//! an identifier get a random nine-character seed instead.

use std::fmt;

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::compare::arrays_equal;
use crate::shuffle::deterministic_shuffle;

/// Length of a generated fallback seed.
pub const RANDOM_SEED_LEN: usize = 9;

/// Characters a generated fallback seed is drawn from.
const SEED_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Identifier of a question, either textual or numeric in JSON.
///
/// Numeric ids seed the shuffle with their decimal form, so `0` seeds as
/// `"0"`. Orderings stored by the older browser helper, which seeded every
/// numeric id identically and gave id `0` a random seed, do not reproduce
/// for numeric ids.
///
/// # Example
///
/// ```
/// use quiz_shuffle::QuestionId;
///
/// let id: QuestionId = serde_json::from_str("42").expect("numeric id");
/// assert_eq!(id.to_seed(), "42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuestionId {
    /// Numeric identifier.
    Number(i64),
    /// Textual identifier.
    Text(String),
}

impl QuestionId {
    /// Returns the string used to seed the shuffle for this identifier.
    #[must_use]
    pub fn to_seed(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{number}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<&str> for QuestionId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<i64> for QuestionId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

/// A quiz question with its answer options.
///
/// Also accepts the legacy `opciones` and `respuestas` keys when
/// deserializing.
///
/// # Example
///
/// ```
/// use quiz_shuffle::Question;
///
/// let json = r#"{"id": "q1", "opciones": ["a", "b", "c"], "respuestas": ["b"]}"#;
/// let question: Question = serde_json::from_str(json).expect("valid question");
///
/// assert_eq!(question.seed().as_deref(), Some("q1"));
/// assert!(question.is_answer_correct(&["b".to_owned()]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Identifier, also used as the shuffle seed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<QuestionId>,
    /// Question text shown to the user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    /// Answer options in authoring order.
    #[serde(default, alias = "opciones", skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    /// Options that make up the correct answer.
    #[serde(default, alias = "respuestas", skip_serializing_if = "Vec::is_empty")]
    pub correct: Vec<String>,
}

impl Question {
    /// Returns the identifier's seed form, if the question has a usable id.
    ///
    /// An empty textual id counts as absent. Numeric ids, including `0`,
    /// always yield their decimal form; see [`QuestionId`].
    #[must_use]
    pub fn seed(&self) -> Option<String> {
        self.id
            .as_ref()
            .map(QuestionId::to_seed)
            .filter(|seed| !seed.is_empty())
    }

    /// Returns `true` when `selected` contains exactly the correct options,
    /// in any order.
    ///
    /// Questions without correct options never accept an answer.
    #[must_use]
    pub fn is_answer_correct(&self, selected: &[String]) -> bool {
        !self.correct.is_empty() && arrays_equal(selected, &self.correct)
    }

    /// Shuffles the options with the question's own seed, falling back to a
    /// random seed from the thread-local generator.
    #[must_use]
    pub fn shuffle(&self) -> ShuffledQuestion {
        self.shuffle_with_rng(&mut rand::rng())
    }

    /// Shuffles the options with the question's own seed, falling back to a
    /// random seed drawn from `rng`.
    ///
    /// A question without options leaves `rng` untouched and records its own
    /// seed, or an empty seed when it has no id.
    pub fn shuffle_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> ShuffledQuestion {
        if self.options.is_none() {
            return ShuffledQuestion {
                id: self.id.clone(),
                seed: self.seed().unwrap_or_default(),
                options: Vec::new(),
            };
        }

        let seed = self.seed().unwrap_or_else(|| fallback_seed(rng));
        self.shuffle_with_seed(&seed)
    }

    /// Shuffles the options with an explicit seed, ignoring the id.
    #[must_use]
    pub fn shuffle_with_seed(&self, seed: &str) -> ShuffledQuestion {
        let options = self
            .options
            .as_deref()
            .map(|options| deterministic_shuffle(options, seed))
            .unwrap_or_default();

        ShuffledQuestion {
            id: self.id.clone(),
            seed: seed.to_owned(),
            options,
        }
    }
}

/// Options of one question after shuffling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShuffledQuestion {
    /// Identifier of the source question.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<QuestionId>,
    /// Seed the options were shuffled with.
    pub seed: String,
    /// Options in presentation order.
    pub options: Vec<String>,
}

/// Shuffles a question's options using its id as the seed.
///
/// Returns an empty list when the question has no options. Without an id, a
/// random seed is generated, so the order is not reproducible.
///
/// # Examples
///
/// ```
/// use quiz_shuffle::{Question, shuffle_question_options};
///
/// let question = Question {
///     id: Some("seed1".into()),
///     options: Some(vec!["A".into(), "B".into(), "C".into(), "D".into()]),
///     ..Question::default()
/// };
///
/// assert_eq!(shuffle_question_options(&question), ["C", "D", "A", "B"]);
/// assert!(shuffle_question_options(&Question::default()).is_empty());
/// ```
#[must_use]
pub fn shuffle_question_options(question: &Question) -> Vec<String> {
    shuffle_question_options_with_rng(question, &mut rand::rng())
}

/// Like [`shuffle_question_options`], drawing any fallback seed from `rng`.
pub fn shuffle_question_options_with_rng<R: Rng + ?Sized>(
    question: &Question,
    rng: &mut R,
) -> Vec<String> {
    let Some(options) = question.options.as_deref() else {
        return Vec::new();
    };

    let seed = question.seed().unwrap_or_else(|| fallback_seed(rng));
    deterministic_shuffle(options, &seed)
}

/// Generates a random seed of [`RANDOM_SEED_LEN`] lowercase base-36 characters.
///
/// # Example
///
/// ```
/// use quiz_shuffle::random_seed;
///
/// let seed = random_seed(&mut rand::rng());
/// assert_eq!(seed.len(), 9);
/// ```
pub fn random_seed<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..RANDOM_SEED_LEN)
        .filter_map(|_| SEED_ALPHABET.choose(&mut *rng).copied().map(char::from))
        .collect()
}

fn fallback_seed<R: Rng + ?Sized>(rng: &mut R) -> String {
    let seed = random_seed(rng);
    debug!(%seed, "question has no id; using random seed");
    seed
}
