//! Question text shown for each undecided pair.

/// Instructions repeated under every question.
pub const ANSWER_HINT: &str = "Which ranks higher? [1/2, = for a tie, q to save and quit]";

/// Build the question for one comparison.
///
/// `number` is the 1-based question number (answers recorded so far + 1).
/// `progress` is shown when the caller wants it.
pub fn build_question(number: usize, progress: Option<u8>, option1: &str, option2: &str) -> String {
    let header = match progress {
        Some(p) => format!("Question {number} ({p}% done)"),
        None => format!("Question {number}"),
    };
    format!("\n{header}\n  1) {option1}\n  2) {option2}\n{ANSWER_HINT}: ")
}
