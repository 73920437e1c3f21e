/// Interactive question loop.
///
/// Asks one question per undecided pair, records the answer, and ranks again
/// until the ranking completes or the user quits. Input and output are
/// generic so the loop can be driven from a script or a test.
use pairsort_core::{RankedResult, Sorter};
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::info;

use crate::parse::{Answer, answer_to_decision, parse_answer};
use crate::prompt::build_question;
use crate::state::save_state;

pub struct SessionOptions<'a> {
    pub limit: Option<usize>,
    pub show_progress: bool,
    /// Snapshot path rewritten after every answer.
    pub state_path: Option<&'a Path>,
}

#[derive(Debug, PartialEq)]
pub enum SessionOutcome {
    Complete(RankedResult<String>),
    /// The user quit (or input ran out) before the ranking completed.
    Stopped,
}

pub fn run_session<R: BufRead, W: Write>(
    sorter: &mut Sorter<String>,
    options: &SessionOptions,
    input: &mut R,
    output: &mut W,
) -> io::Result<SessionOutcome> {
    loop {
        let pair = match sorter.rank(options.limit) {
            Ok(result) => {
                if let Some(path) = options.state_path {
                    save_state(path, sorter.state());
                }
                info!(round = sorter.round(), "ranking complete");
                return Ok(SessionOutcome::Complete(result));
            }
            Err(pair) => pair,
        };

        let progress = options.show_progress.then(|| sorter.progress());
        let question = build_question(sorter.round() + 1, progress, &pair.a, &pair.b);

        let answer = loop {
            write!(output, "{question}")?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                break Answer::Quit;
            }
            match parse_answer(&line) {
                Some(answer) => break answer,
                None => writeln!(output, "Please answer 1, 2, = or q.")?,
            }
        };

        let (a, b) = pair.into_pair();
        let Some(decision) = answer_to_decision(answer, a, b) else {
            info!(round = sorter.round(), "session stopped before completion");
            return Ok(SessionOutcome::Stopped);
        };
        sorter.add_decision(decision);

        if let Some(path) = options.state_path {
            save_state(path, sorter.state());
        }
    }
}
