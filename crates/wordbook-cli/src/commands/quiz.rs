// Rust guideline compliant 2026-10-19

//! Implementation of the `wb quiz` command.
//!
//! Runs an interactive multiple-choice session on the terminal. The loop is
//! generic over its input and output so it can be driven from tests.

use crate::OutputFormatter;
use anyhow::Result;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Duration;
use wordbook_app::{Answer, Question, QuizEngine, QuizSettings, QuizSummary, Workspace};
use wordbook_core::EntryStore;

/// Runs a quiz on the terminal and prints the summary.
///
/// Prompts go to stdout, or to stderr when the formatter emits structured
/// output.
///
/// Returns `None` if the user quit before the end.
///
/// # Errors
///
/// Returns an error if:
/// - The workspace is not initialized
/// - The store has no entries
/// - Reading input or writing to the store fails
pub fn execute(
    root: Option<&Path>,
    seed: Option<u64>,
    formatter: &dyn OutputFormatter,
) -> Result<Option<QuizSummary>> {
    let workspace = Workspace::discover(root)?;
    let config = workspace.load_config()?;
    let mut store = workspace.open_store()?;

    let settings = QuizSettings::from_config(&config);
    let mut engine = match seed {
        Some(seed) => QuizEngine::with_seed(settings, seed),
        None => QuizEngine::new(settings),
    };

    // Structured output keeps stdout for the final envelope.
    let mut session_output: Box<dyn Write> = if formatter.is_structured() {
        Box::new(io::stderr().lock())
    } else {
        Box::new(io::stdout().lock())
    };
    let summary = run(
        &mut store,
        &mut engine,
        Duration::from_millis(config.quiz_pacing_ms),
        &mut io::stdin().lock(),
        &mut session_output,
    )?;
    drop(session_output);

    if let Some(summary) = &summary {
        println!("{}", formatter.format_summary(summary, engine.tested()));
    }

    Ok(summary)
}

/// Drives a full session over arbitrary input and output streams.
///
/// `pacing` is slept between an answer and the next question.
///
/// # Errors
///
/// Returns an error if the session cannot start, a store write fails, or the
/// streams fail.
pub fn run<S, R, W>(
    store: &mut S,
    engine: &mut QuizEngine,
    pacing: Duration,
    input: &mut R,
    output: &mut W,
) -> Result<Option<QuizSummary>>
where
    S: EntryStore + ?Sized,
    R: BufRead,
    W: Write,
{
    let mut question = engine.start(&*store)?;

    loop {
        write_question(output, &question, engine.total_questions())?;

        let Some(answer) = read_answer(input, output, question.choices.len())? else {
            engine.reset();
            writeln!(output, "Quiz cancelled.")?;
            return Ok(None);
        };

        let outcome = engine.answer(&mut *store, answer)?;
        if outcome.correct {
            writeln!(output, "Correct!")?;
        } else {
            writeln!(
                output,
                "Incorrect. \"{}\" means: {}",
                outcome.word.text, outcome.word.meaning
            )?;
        }

        if outcome.finished {
            break;
        }

        if !pacing.is_zero() {
            std::thread::sleep(pacing);
        }

        match engine.next_question()? {
            Some(next) => question = next,
            None => break,
        }
    }

    Ok(engine.summary())
}

fn write_question<W: Write>(output: &mut W, question: &Question, total: usize) -> io::Result<()> {
    writeln!(output)?;
    writeln!(
        output,
        "Question {}/{}: {} ({})",
        question.number,
        total,
        question.word.text,
        question.word.subject.label()
    )?;
    for (idx, choice) in question.choices.iter().enumerate() {
        writeln!(output, "  {}) {}", idx + 1, choice.meaning)?;
    }
    writeln!(output, "  s) skip")?;
    Ok(())
}

/// Reads until a valid answer. `None` means quit or end of input.
fn read_answer<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    choices: usize,
) -> io::Result<Option<Answer>> {
    loop {
        write!(output, "Answer (1-{}, s to skip, q to quit): ", choices)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        match line.trim().to_lowercase().as_str() {
            "s" | "skip" => return Ok(Some(Answer::Skip)),
            "q" | "quit" => return Ok(None),
            value => {
                if let Ok(n) = value.parse::<usize>() {
                    if (1..=choices).contains(&n) {
                        return Ok(Some(Answer::Choice(n - 1)));
                    }
                }
            }
        }

        writeln!(output, "Please enter a number between 1 and {}.", choices)?;
    }
}
