//! CLI support for shuffling the options of a quiz file.
//!
//! The binary delegates to these functions so they can be exercised in tests
//! without spawning a subprocess.

mod error;

use std::io::{self, Write};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use tracing::{debug, info};

pub use self::error::CliError;
use crate::error::QuizError;
use crate::question::{Question, ShuffledQuestion};
use crate::quiz::Quiz;

/// Parsed options for the quiz shuffle CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    quiz_path: Utf8PathBuf,
    question: Option<String>,
    seed: Option<String>,
    pretty: bool,
}

impl Options {
    /// Returns the quiz path supplied on the command line.
    ///
    /// # Example
    ///
    /// ```
    /// use quiz_shuffle::cli::{ParseOutcome, parse_args};
    ///
    /// let args = vec!["--quiz".to_owned(), "quiz.json".to_owned()];
    /// let ParseOutcome::Options(options) = parse_args(args.into_iter()).expect("parse") else {
    ///     panic!("expected options");
    /// };
    ///
    /// assert_eq!(options.quiz_path().as_str(), "quiz.json");
    /// ```
    #[must_use]
    pub fn quiz_path(&self) -> &Utf8Path {
        &self.quiz_path
    }

    /// Returns the question filter, if any.
    #[must_use]
    pub fn question(&self) -> Option<&str> {
        self.question.as_deref()
    }

    /// Returns the seed override, if any.
    #[must_use]
    pub fn seed(&self) -> Option<&str> {
        self.seed.as_deref()
    }

    /// Returns whether output should be pretty-printed.
    #[must_use]
    pub const fn pretty(&self) -> bool {
        self.pretty
    }
}

/// Outcome of parsing CLI arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// Show help output and exit successfully.
    Help,
    /// Continue with the parsed options.
    Options(Options),
}

/// Parses CLI arguments.
///
/// # Errors
///
/// Returns [`CliError`] when `--quiz` is missing, a flag lacks its value, or
/// an argument is not recognized.
///
/// # Example
///
/// ```
/// use quiz_shuffle::cli::{ParseOutcome, parse_args};
///
/// let args = vec![
///     "--quiz".to_owned(),
///     "quiz.json".to_owned(),
///     "--seed".to_owned(),
///     "session-17".to_owned(),
/// ];
///
/// let outcome = parse_args(args.into_iter()).expect("parse args");
/// assert!(matches!(outcome, ParseOutcome::Options(_)));
/// ```
pub fn parse_args<I>(mut args: I) -> Result<ParseOutcome, CliError>
where
    I: Iterator<Item = String>,
{
    let mut quiz_path: Option<Utf8PathBuf> = None;
    let mut question: Option<String> = None;
    let mut seed: Option<String> = None;
    let mut pretty = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(ParseOutcome::Help),
            "--quiz" => {
                let value = next_value(&mut args, "--quiz")?;
                quiz_path = Some(Utf8PathBuf::from(value));
            }
            "--question" => question = Some(next_value(&mut args, "--question")?),
            "--seed" => seed = Some(next_value(&mut args, "--seed")?),
            "--pretty" => pretty = true,
            _ => return Err(CliError::UnknownArgument { value: arg }),
        }
    }

    let resolved_quiz_path = quiz_path.ok_or(CliError::MissingQuizPath)?;
    Ok(ParseOutcome::Options(Options {
        quiz_path: resolved_quiz_path,
        question,
        seed,
        pretty,
    }))
}

/// Loads the quiz named by `options` and shuffles the selected questions.
///
/// With `--question`, only that question is shuffled. With `--seed`, every
/// selected question uses that seed instead of its id.
///
/// # Errors
///
/// Returns [`CliError`] when the quiz cannot be read or parsed, or when the
/// requested question does not exist.
pub fn run(options: &Options) -> Result<Vec<ShuffledQuestion>, CliError> {
    let quiz = load_quiz(&options.quiz_path)?;
    info!(
        path = %options.quiz_path,
        questions = quiz.questions().len(),
        "loaded quiz"
    );

    let selected: Vec<&Question> = options.question.as_deref().map_or_else(
        || Ok(quiz.questions().iter().collect()),
        |id| quiz.find_question(id).map(|question| vec![question]),
    )?;

    let shuffled = selected
        .into_iter()
        .map(|question| {
            options.seed.as_deref().map_or_else(
                || question.shuffle(),
                |seed| question.shuffle_with_seed(seed),
            )
        })
        .collect();
    Ok(shuffled)
}

/// Serializes shuffled questions as JSON.
///
/// # Errors
///
/// Returns [`CliError::RenderError`] if serialization fails.
///
/// # Example
///
/// ```
/// use quiz_shuffle::ShuffledQuestion;
/// use quiz_shuffle::cli::render_output;
///
/// let shuffled = vec![ShuffledQuestion {
///     id: Some("q1".into()),
///     seed: "q1".to_owned(),
///     options: vec!["b".to_owned(), "a".to_owned()],
/// }];
///
/// let json = render_output(&shuffled, false).expect("render");
/// assert_eq!(json, r#"[{"id":"q1","seed":"q1","options":["b","a"]}]"#);
/// ```
pub fn render_output(questions: &[ShuffledQuestion], pretty: bool) -> Result<String, CliError> {
    let rendered = if pretty {
        serde_json::to_string_pretty(questions)
    } else {
        serde_json::to_string(questions)
    };
    rendered.map_err(|err| CliError::RenderError {
        message: err.to_string(),
    })
}

/// Writes the user-facing message for a failed run, one line, no log
/// decoration.
///
/// # Errors
///
/// Returns any error raised by `out`.
///
/// # Example
///
/// ```
/// use quiz_shuffle::cli::{CliError, write_error};
///
/// let mut out = Vec::new();
/// write_error(&mut out, &CliError::MissingQuizPath).expect("write");
///
/// assert_eq!(out, b"missing required flag: --quiz\n");
/// ```
pub fn write_error(out: &mut impl Write, err: &CliError) -> io::Result<()> {
    writeln!(out, "{err}")
}

fn load_quiz(path: &Utf8Path) -> Result<Quiz, CliError> {
    let file_name = path
        .file_name()
        .map(Utf8Path::new)
        .ok_or_else(|| CliError::InvalidQuizPath {
            path: path.to_string(),
        })?;
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    debug!(%parent, %file_name, "opening quiz directory");

    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|err| {
        QuizError::IoError {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    })?;
    Ok(Quiz::from_file(&dir, file_name)?)
}

fn next_value<I>(args: &mut I, flag: &'static str) -> Result<String, CliError>
where
    I: Iterator<Item = String>,
{
    args.next().ok_or(CliError::MissingValue { flag })
}

#[cfg(test)]
mod tests;
