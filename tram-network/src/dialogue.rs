//! Interactive question loop.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::distance::DistanceProvider;
use crate::query::QueryEngine;

/// Counts of the commands answered in one dialogue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DialogueSummary {
    /// Commands that got an answer, failures included
    pub answered: usize,

    /// Commands answered with a failure marker
    pub failed: usize,
}

/// Read commands from `input` and write answers to `output` until the exit
/// keyword (compared case-insensitively) or end of input.
pub fn run_dialogue<D, R, W>(
    engine: &QueryEngine<D>,
    mut input: R,
    mut output: W,
    exit_keyword: &str,
) -> io::Result<DialogueSummary>
where
    D: DistanceProvider,
    R: BufRead,
    W: Write,
{
    let mut line = String::new();
    let mut summary = DialogueSummary::default();

    loop {
        write!(output, "> ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(summary);
        }

        let command = line.trim();
        if command.eq_ignore_ascii_case(exit_keyword) {
            writeln!(output, "Exiting the dialogue.")?;
            return Ok(summary);
        }

        let answer = engine.answer(command);
        summary.answered += 1;
        if answer.is_error() {
            summary.failed += 1;
            debug!(command, %answer, "command not answered");
        }
        writeln!(output, "{answer}")?;
    }
}
