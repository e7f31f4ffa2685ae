//! Unit tests for the quiz shuffle CLI helpers.

use std::sync::atomic::{AtomicUsize, Ordering};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs::Dir};
use rstest::{fixture, rstest};

use super::*;
use crate::error::QuizError;
use crate::question::{QuestionId, ShuffledQuestion};

const VALID_JSON: &str = r#"{
    "version": 1,
    "questions": [
        {"id": "seed1", "options": ["A", "B", "C", "D"]},
        {"id": 42, "options": ["x", "y", "z"]}
    ]
}"#;

struct QuizFixture {
    path: Utf8PathBuf,
}

impl QuizFixture {
    fn options(&self, extra: &[&str]) -> Options {
        let mut args = vec!["--quiz".to_owned(), self.path.to_string()];
        args.extend(extra.iter().map(|arg| (*arg).to_owned()));
        match parse_args(args.into_iter()).expect("parse args") {
            ParseOutcome::Options(options) => options,
            ParseOutcome::Help => panic!("expected options"),
        }
    }
}

impl Drop for QuizFixture {
    fn drop(&mut self) {
        if let Some(parent) = self.path.parent() {
            let root = Dir::open_ambient_dir(".", ambient_authority()).expect("open cwd");
            drop(root.remove_dir_all(parent));
        }
    }
}

#[fixture]
fn quiz_fixture() -> QuizFixture {
    QuizFixture {
        path: write_quiz(VALID_JSON),
    }
}

fn write_quiz(contents: &str) -> Utf8PathBuf {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let counter = COUNTER.fetch_add(1, Ordering::Relaxed);
    let dir = Utf8PathBuf::from("target")
        .join("quiz-shuffle-cli-tests")
        .join(format!("{}-{counter}", std::process::id()));
    let root = Dir::open_ambient_dir(".", ambient_authority()).expect("open cwd");
    root.create_dir_all(&dir).expect("create temp dir");
    let path = dir.join("quiz.json");
    root.write(&path, contents).expect("write quiz");
    path
}

#[test]
fn parse_args_returns_help_for_help_flag() {
    let args = vec!["-h".to_owned()];

    let outcome = parse_args(args.into_iter()).expect("parse args");

    assert_eq!(outcome, ParseOutcome::Help);
}

#[test]
fn parse_args_requires_quiz_path() {
    let args = vec!["--seed".to_owned(), "abc".to_owned()];

    let err = parse_args(args.into_iter()).expect_err("expected error");

    assert_eq!(err, CliError::MissingQuizPath);
}

#[rstest]
#[case("--quiz")]
#[case("--question")]
#[case("--seed")]
fn parse_args_reports_missing_value(#[case] flag: &'static str) {
    let args = vec![flag.to_owned()];

    let err = parse_args(args.into_iter()).expect_err("expected error");

    assert_eq!(err, CliError::MissingValue { flag });
}

#[test]
fn parse_args_reports_unknown_arguments() {
    let args = vec!["--shuffle-harder".to_owned()];

    let err = parse_args(args.into_iter()).expect_err("expected error");

    assert_eq!(
        err,
        CliError::UnknownArgument {
            value: "--shuffle-harder".to_owned()
        }
    );
}

#[test]
fn parse_args_collects_all_flags() {
    let args = [
        "--quiz",
        "quizzes/a.json",
        "--question",
        "q7",
        "--seed",
        "s",
        "--pretty",
    ]
    .map(str::to_owned);

    let outcome = parse_args(args.into_iter()).expect("parse args");

    let ParseOutcome::Options(options) = outcome else {
        panic!("expected options");
    };
    assert_eq!(options.quiz_path().as_str(), "quizzes/a.json");
    assert_eq!(options.question(), Some("q7"));
    assert_eq!(options.seed(), Some("s"));
    assert!(options.pretty());
}

#[rstest]
fn run_shuffles_every_question(quiz_fixture: QuizFixture) {
    let options = quiz_fixture.options(&[]);

    let shuffled = run(&options).expect("run");

    assert_eq!(shuffled.len(), 2);
    let first = shuffled.first().expect("first question");
    assert_eq!(first.seed, "seed1");
    assert_eq!(first.options, ["C", "D", "A", "B"]);
}

#[rstest]
fn run_filters_by_numeric_question_id(quiz_fixture: QuizFixture) {
    let options = quiz_fixture.options(&["--question", "42"]);

    let shuffled = run(&options).expect("run");

    assert_eq!(shuffled.len(), 1);
    assert_eq!(
        shuffled.first().and_then(|q| q.id.clone()),
        Some(QuestionId::Number(42))
    );
}

#[rstest]
fn run_applies_seed_override(quiz_fixture: QuizFixture) {
    let options = quiz_fixture.options(&["--seed", "question-42"]);

    let shuffled = run(&options).expect("run");

    assert!(shuffled.iter().all(|q| q.seed == "question-42"));
}

#[rstest]
fn run_reports_unknown_question(quiz_fixture: QuizFixture) {
    let options = quiz_fixture.options(&["--question", "nope"]);

    let err = run(&options).expect_err("expected error");

    assert_eq!(
        err,
        CliError::QuizError {
            source: QuizError::QuestionNotFound {
                id: "nope".to_owned()
            }
        }
    );
}

#[test]
fn run_reports_missing_file() {
    let args = vec![
        "--quiz".to_owned(),
        "target/quiz-shuffle-cli-tests/does-not-exist.json".to_owned(),
    ];
    let ParseOutcome::Options(options) = parse_args(args.into_iter()).expect("parse") else {
        panic!("expected options");
    };

    let err = run(&options).expect_err("expected error");

    assert!(matches!(
        err,
        CliError::QuizError {
            source: QuizError::IoError { .. }
        }
    ));
}

#[test]
fn load_quiz_rejects_path_without_file_name() {
    let err = load_quiz(Utf8Path::new("..")).expect_err("expected error");

    assert_eq!(
        err,
        CliError::InvalidQuizPath {
            path: "..".to_owned()
        }
    );
}

#[test]
fn render_output_pretty_prints_on_request() {
    let shuffled = vec![ShuffledQuestion {
        id: None,
        seed: "s".to_owned(),
        options: vec!["a".to_owned()],
    }];

    let compact = render_output(&shuffled, false).expect("render");
    let pretty = render_output(&shuffled, true).expect("render");

    assert!(!compact.contains('\n'));
    assert!(pretty.contains('\n'));
    let reparsed: Vec<ShuffledQuestion> = serde_json::from_str(&pretty).expect("reparse");
    assert_eq!(reparsed, shuffled);
}

#[test]
fn write_error_emits_only_the_plain_message() {
    let args = vec!["--bogus".to_owned()];
    let err = parse_args(args.into_iter()).expect_err("expected error");
    let mut out = Vec::new();

    write_error(&mut out, &err).expect("write error");

    let written = String::from_utf8(out).expect("utf-8 output");
    assert_eq!(written, "unknown argument: --bogus\n");
    assert_eq!(written.lines().count(), 1);
}
