//! Interactive play mode
//!
//! Suggests a guess, reads the feedback the game gave, narrows the
//! candidates and repeats. Reads commands line by line so any reader works.

use crate::core::{GuessHistory, Pattern, Word};
use crate::progress::ProgressSink;
use crate::solver::entropy::calculate_metrics;
use crate::solver::{Session, SessionError};
use colored::Colorize;
use std::io::{BufRead, Write};

/// Candidates shown by `list` before the rest are summarized
pub const LIST_LIMIT: usize = 50;

/// Candidates shown automatically below each suggestion
const AUTO_LIST_LIMIT: usize = 10;

enum Turn {
    Continue,
    Quit,
}

/// Run the interactive loop until the player quits or input ends
///
/// `history` holds any feedback already applied to `session`, for example
/// from a resumed game.
///
/// # Errors
///
/// Returns an error on an I/O failure reading input or writing output.
pub fn run_play<R, W>(
    session: &mut Session<'_>,
    history: &mut GuessHistory,
    input: &mut R,
    out: &mut W,
    progress: &mut impl ProgressSink,
) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
{
    print_banner(out, session.word_length())?;

    loop {
        let guess = session.best_guess_with_progress(progress)?.clone();
        describe_suggestion(out, session, history.len() + 1, &guess)?;

        if let Turn::Quit = read_feedback(session, history, guess, input, out, progress)? {
            writeln!(out, "\n👋 Thanks for playing!\n")?;
            return Ok(());
        }
    }
}

fn print_banner(out: &mut impl Write, word_length: usize) -> std::io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(62).bright_cyan())?;
    writeln!(out, "{}", "  Wordle Advisor - Interactive Mode".bright_cyan().bold())?;
    writeln!(out, "{}\n", "═".repeat(62).bright_cyan())?;
    writeln!(out, "After each guess, enter the {word_length}-symbol feedback:")?;
    writeln!(out, "  - 2, G or 🟩 for green (correct position)")?;
    writeln!(out, "  - 1, Y or 🟨 for yellow (wrong position)")?;
    writeln!(out, "  - 0, - or ⬜ for gray (not in word)\n")?;
    writeln!(out, "Commands: next, use <word>, list, undo, new, win, quit\n")
}

fn describe_suggestion(
    out: &mut impl Write,
    session: &Session<'_>,
    turn: usize,
    guess: &Word,
) -> std::io::Result<()> {
    let count = session.candidate_count();
    writeln!(out, "{}", "─".repeat(62))?;
    writeln!(out, "Turn {turn}: {count} candidates remaining")?;
    writeln!(out, "{}", "─".repeat(62))?;

    writeln!(
        out,
        "\n📊 Suggested guess: {}",
        guess.text().to_uppercase().bright_yellow().bold()
    )?;
    describe_metrics(out, session, guess)?;

    if count <= AUTO_LIST_LIMIT {
        writeln!(out, "Remaining candidates:")?;
        for candidate in session.candidates() {
            writeln!(out, "  • {}", candidate.text().to_uppercase())?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn describe_metrics(
    out: &mut impl Write,
    session: &Session<'_>,
    guess: &Word,
) -> std::io::Result<()> {
    if session.candidate_count() <= 1 {
        return writeln!(out);
    }
    let metrics = calculate_metrics(guess, session.candidates());
    writeln!(out, "   Entropy:          {:.3} bits", metrics.entropy)?;
    writeln!(
        out,
        "   Expected remain:  {:.1} candidates",
        metrics.expected_remaining
    )?;
    writeln!(out, "   Worst case:       {} candidates\n", metrics.max_partition)
}

fn prompt<R: BufRead>(
    input: &mut R,
    out: &mut impl Write,
    text: &str,
) -> anyhow::Result<Option<String>> {
    write!(out, "{text}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Handle commands until feedback is applied or the player leaves
fn read_feedback<R: BufRead>(
    session: &mut Session<'_>,
    history: &mut GuessHistory,
    mut guess: Word,
    input: &mut R,
    out: &mut impl Write,
    progress: &mut impl ProgressSink,
) -> anyhow::Result<Turn> {
    loop {
        let Some(line) = prompt(input, out, "Feedback (or command)")? else {
            return Ok(Turn::Quit);
        };
        let lowered = line.to_lowercase();
        let (command, argument) = lowered
            .split_once(char::is_whitespace)
            .map_or((lowered.as_str(), ""), |(c, a)| (c, a.trim()));

        match command {
            "" => {}
            "quit" | "q" | "exit" => return Ok(Turn::Quit),
            "new" | "n" => {
                history.clear();
                session.restart();
                writeln!(out, "\n🔄 New game started!\n")?;
                return Ok(Turn::Continue);
            }
            "undo" | "u" => {
                if history.pop().is_some() {
                    let remaining = session.rollback(history)?;
                    writeln!(out, "✓ Undone! {remaining} candidates\n")?;
                    return Ok(Turn::Continue);
                }
                writeln!(out, "Nothing to undo!\n")?;
            }
            "next" => match session.next_suggestion_with_progress(progress) {
                Ok(suggestion) => {
                    guess = suggestion.word.clone();
                    writeln!(
                        out,
                        "Alternative {}/{}: {}",
                        suggestion.position,
                        suggestion.total,
                        guess.text().to_uppercase().bright_yellow().bold()
                    )?;
                    describe_metrics(out, session, &guess)?;
                }
                Err(e) => writeln!(out, "{e}")?,
            },
            "use" => match Word::with_length(argument, session.word_length()) {
                Ok(word) => {
                    guess = word;
                    writeln!(out, "Guessing {}", guess.text().to_uppercase().bold())?;
                    describe_metrics(out, session, &guess)?;
                }
                Err(e) => writeln!(out, "❌ {e}")?,
            },
            "list" | "l" => list_candidates(out, session)?,
            "win" | "correct" | "solved" => {
                let pattern = Pattern::perfect(session.word_length());
                if let Some(turn) = apply(session, history, &guess, pattern, input, out)? {
                    return Ok(turn);
                }
            }
            _ => match Pattern::parse(&line) {
                Ok(pattern) => {
                    if let Some(turn) = apply(session, history, &guess, pattern, input, out)? {
                        return Ok(turn);
                    }
                }
                Err(e) => writeln!(out, "❌ {e}. Use 0/1/2, G/Y/- or emoji.\n")?,
            },
        }
    }
}

fn list_candidates(out: &mut impl Write, session: &Session<'_>) -> std::io::Result<()> {
    let candidates = session.candidates();
    for candidate in candidates.iter().take(LIST_LIMIT) {
        writeln!(out, "  • {}", candidate.text().to_uppercase())?;
    }
    if candidates.len() > LIST_LIMIT {
        writeln!(out, "  ... {} more", candidates.len() - LIST_LIMIT)?;
    }
    writeln!(out)
}

/// Apply feedback; `None` means it was rejected and the turn goes on
fn apply<R: BufRead>(
    session: &mut Session<'_>,
    history: &mut GuessHistory,
    guess: &Word,
    pattern: Pattern,
    input: &mut R,
    out: &mut impl Write,
) -> anyhow::Result<Option<Turn>> {
    match session.filter(guess, pattern) {
        Ok(_) => history.push(guess.clone(), pattern),
        Err(
            e @ (SessionError::InconsistentFeedback { .. } | SessionError::LengthMismatch { .. }),
        ) => {
            writeln!(out, "❌ {e}")?;
            writeln!(out, "Check the feedback and try again.\n")?;
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    }

    if !pattern.is_perfect() {
        return Ok(Some(Turn::Continue));
    }

    celebrate(out, history)?;
    let again = prompt(input, out, "Play again? (yes/no)")?.unwrap_or_default();
    if matches!(again.to_lowercase().as_str(), "yes" | "y") {
        history.clear();
        session.restart();
        writeln!(out, "\n🔄 New game started!\n")?;
        Ok(Some(Turn::Continue))
    } else {
        Ok(Some(Turn::Quit))
    }
}

fn celebrate(out: &mut impl Write, history: &GuessHistory) -> std::io::Result<()> {
    let turns = history.len();
    writeln!(out, "\n{}", "═".repeat(62).bright_cyan())?;
    writeln!(
        out,
        "{}",
        format!(
            "  🎉 Solved in {turns} {}!",
            if turns == 1 { "guess" } else { "guesses" }
        )
        .bright_green()
        .bold()
    )?;
    writeln!(out, "{}", "═".repeat(62).bright_cyan())?;

    for (i, entry) in history.iter().enumerate() {
        writeln!(
            out,
            "    {}. {} {}",
            i + 1,
            entry.word.text().to_uppercase().bold(),
            entry.pattern.to_emoji()
        )?;
    }
    writeln!(out)
}
