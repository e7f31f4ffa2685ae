//! Seeded, reproducible shuffling of quiz answer options.
//!
//! Quiz front-ends want the options of a question to appear in a scrambled
//! but stable order: the same question must look the same every time it is
//! rendered, on every machine. This crate provides that ordering and the
//! small helpers around it.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Deterministic Fisher-Yates shuffles seeded by a string
//! - A uniform random shuffle with no reproducibility guarantee
//! - Order-independent comparison for checking multiple-choice answers
//! - Per-question shuffling keyed on the question id
//! - Loading versioned quiz documents from JSON
//!
//! # Example
//!
//! ```
//! use quiz_shuffle::{arrays_equal, deterministic_shuffle};
//!
//! let options = ["A", "B", "C", "D"];
//! let shuffled = deterministic_shuffle(&options, "seed1");
//!
//! assert_eq!(shuffled, deterministic_shuffle(&options, "seed1"));
//! assert!(arrays_equal(&shuffled, &options));
//! ```

pub mod cli;
mod compare;
mod error;
mod hash;
mod lcg;
mod question;
mod quiz;
mod shuffle;

pub use compare::arrays_equal;
pub use error::QuizError;
pub use hash::simple_hash;
pub use lcg::{LCG_INCREMENT, LCG_MODULUS, LCG_MULTIPLIER, Lcg};
pub use question::{
    Question, QuestionId, RANDOM_SEED_LEN, ShuffledQuestion, random_seed,
    shuffle_question_options, shuffle_question_options_with_rng,
};
pub use quiz::Quiz;
pub use shuffle::{deterministic_shuffle, shuffle_array, shuffle_array_with_rng};
