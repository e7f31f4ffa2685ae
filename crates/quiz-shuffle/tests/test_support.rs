//! Shared capability-based filesystem helpers for quiz-shuffle tests.

use camino::Utf8PathBuf;
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Writes `contents` to a unique file under `target/quiz-shuffle-tests`.
///
/// # Errors
///
/// Returns any filesystem errors encountered while creating the directory or
/// writing the file.
pub fn write_temp_quiz(prefix: &str, contents: &str) -> io::Result<Utf8PathBuf> {
    static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);
    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let process_id = std::process::id();
    let dir = Utf8PathBuf::from("target")
        .join("quiz-shuffle-tests")
        .join(format!("{prefix}-{process_id}-{counter}"));
    let root = Dir::open_ambient_dir(".", ambient_authority())?;
    root.create_dir_all(&dir)?;
    let path = dir.join("quiz.json");
    root.write(&path, contents)?;
    Ok(path)
}
