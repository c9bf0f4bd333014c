//! Simple interactive CLI mode
//!
//! Line-based read-evaluate-print loop: the user types a guess, then the
//! feedback they received, and the solver narrows the pool and suggests the
//! next guess under both strategies.

use crate::core::Word;
use crate::output::{ProgressBarHook, write_recommendation, write_stats};
use crate::session::Session;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Pool size up to which `show` lists every word
const SHOW_ALL_LIMIT: usize = 50;
/// Words listed by `show` for larger pools
const SHOW_PREVIEW: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Interactive solver over any line source and sink
pub struct Repl<R, W> {
    session: Session,
    input: R,
    output: W,
    show_progress: bool,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    #[must_use]
    pub fn new(session: Session, input: R, output: W) -> Self {
        Self {
            session,
            input,
            output,
            show_progress: false,
        }
    }

    /// Draw a progress bar on stderr while suggestions are computed
    #[must_use]
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Run until the user quits or input ends
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run(&mut self) -> io::Result<()> {
        self.print_banner()?;

        loop {
            writeln!(self.output, "\n{}", "-".repeat(60))?;
            write_stats(&mut self.output, &self.session)?;

            if self.session.candidates().is_empty() {
                if self.handle_empty_pool()? == Flow::Quit {
                    return Ok(());
                }
                continue;
            }

            self.print_suggestions()?;
            writeln!(self.output, "{}", "-".repeat(60))?;

            let Some(line) = self.prompt("\nEnter your guess (or command): ")? else {
                return self.farewell();
            };

            let flow = match line.to_ascii_lowercase().as_str() {
                "quit" | "exit" => Flow::Quit,
                "reset" => {
                    self.session.reset();
                    writeln!(self.output, "\n♻️  Solver reset! Starting fresh...")?;
                    Flow::Continue
                }
                "show" => {
                    self.show_candidates()?;
                    Flow::Continue
                }
                "undo" => {
                    self.undo()?;
                    Flow::Continue
                }
                _ => self.play_turn(&line)?,
            };

            if flow == Flow::Quit {
                return self.farewell();
            }
        }
    }

    fn print_banner(&mut self) -> io::Result<()> {
        let out = &mut self.output;
        writeln!(out, "{}", "=".repeat(60))?;
        writeln!(out, "{}", "WORDLE SOLVER - DUAL STRATEGY".bright_cyan().bold())?;
        writeln!(out, "{}", "=".repeat(60))?;
        writeln!(out, "\nHow to use:")?;
        writeln!(out, "1. Enter your guess (5 letters)")?;
        writeln!(out, "2. Enter the result (5 digits):")?;
        writeln!(out, "   0 = Letter not in word (gray)")?;
        writeln!(out, "   1 = Letter in word, wrong position (yellow)")?;
        writeln!(out, "   2 = Letter in correct position (green)")?;
        writeln!(out, "\nExample:")?;
        writeln!(out, "   STAGE")?;
        writeln!(out, "   01002")?;
        writeln!(out, "\nCommands:")?;
        writeln!(out, "   'quit' or 'exit' - Exit the program")?;
        writeln!(out, "   'reset' - Start over with a new puzzle")?;
        writeln!(out, "   'show' - Show all remaining possible words")?;
        writeln!(out, "   'undo' - Take back the last guess")?;
        writeln!(out, "{}", "=".repeat(60))
    }

    fn print_suggestions(&mut self) -> io::Result<()> {
        let total = self.session.candidates().len();
        writeln!(self.output, "\n🔍 Analyzing {total} candidates...")?;

        let recommendation = if self.show_progress {
            let mut hook = ProgressBarHook::new(total);
            self.session.suggest_with_progress(&mut hook).ok().flatten()
        } else {
            self.session.suggest()
        };

        match recommendation {
            Some(rec) => write_recommendation(&mut self.output, &rec),
            None => Ok(()),
        }
    }

    fn play_turn(&mut self, guess: &str) -> io::Result<Flow> {
        if let Err(e) = Word::new(guess) {
            writeln!(self.output, "{} {e}", "❌ Error:".red())?;
            return Ok(Flow::Continue);
        }

        let Some(feedback) = self.prompt("Enter the result (5 digits, 0/1/2): ")? else {
            return Ok(Flow::Quit);
        };

        if let Err(e) = self.session.update(guess, &feedback) {
            debug!(guess, feedback = %feedback, error = %e, "rejected turn");
            writeln!(self.output, "{} {e}", "❌ Error:".red())?;
            return Ok(Flow::Continue);
        }

        if !self.session.is_solved() {
            return Ok(Flow::Continue);
        }

        let guesses = self.session.history().len();
        writeln!(
            self.output,
            "\n🎉 {}",
            format!(
                "Congratulations! You solved it in {guesses} {}!",
                if guesses == 1 { "guess" } else { "guesses" }
            )
            .bright_green()
            .bold()
        )?;

        match self.prompt("Play again? (yes/no): ")? {
            Some(answer) if matches!(answer.to_ascii_lowercase().as_str(), "yes" | "y") => {
                self.session.reset();
                writeln!(self.output, "\n♻️  Starting new puzzle...")?;
                Ok(Flow::Continue)
            }
            _ => Ok(Flow::Quit),
        }
    }

    fn handle_empty_pool(&mut self) -> io::Result<Flow> {
        let out = &mut self.output;
        writeln!(out, "\n{}", "❌ No possible words found!".red().bold())?;
        writeln!(out, "\nThis usually means:")?;
        writeln!(out, "  1. You entered a word that's not in the word list")?;
        writeln!(out, "  2. There was an error in the feedback pattern")?;
        writeln!(out, "  3. The answer isn't in your word list")?;
        writeln!(out, "\nOptions:")?;
        writeln!(out, "  - Type 'undo' to take back the last guess")?;
        writeln!(out, "  - Type 'reset' to start over")?;
        writeln!(out, "  - Type 'quit' to exit")?;

        let Some(choice) = self.prompt("\nWhat would you like to do? ")? else {
            return self.farewell().map(|()| Flow::Quit);
        };

        match choice.to_ascii_lowercase().as_str() {
            "quit" | "exit" => self.farewell().map(|()| Flow::Quit),
            "reset" => {
                self.session.reset();
                writeln!(self.output, "\n♻️  Solver reset! Starting fresh...")?;
                Ok(Flow::Continue)
            }
            "undo" => {
                self.undo()?;
                Ok(Flow::Continue)
            }
            _ => Ok(Flow::Continue),
        }
    }

    fn show_candidates(&mut self) -> io::Result<()> {
        let mut words: Vec<&str> = self.session.candidates().iter().map(Word::text).collect();
        words.sort_unstable();

        if words.len() <= SHOW_ALL_LIMIT {
            writeln!(self.output, "\nAll possible words:")?;
            for (i, word) in words.iter().enumerate() {
                writeln!(self.output, "  {:2}. {word}", i + 1)?;
            }
        } else {
            writeln!(
                self.output,
                "\nToo many words to display ({})",
                words.len()
            )?;
            writeln!(
                self.output,
                "First {SHOW_PREVIEW}: {}",
                words[..SHOW_PREVIEW].join(", ")
            )?;
        }
        Ok(())
    }

    fn undo(&mut self) -> io::Result<()> {
        match self.session.undo() {
            Some((word, pattern)) => writeln!(
                self.output,
                "✓ Undid {} {}",
                word.text().bright_white().bold(),
                pattern.to_emoji()
            ),
            None => writeln!(self.output, "Nothing to undo!"),
        }
    }

    fn farewell(&mut self) -> io::Result<()> {
        writeln!(self.output, "Thanks for playing!")
    }

    /// Print `prompt` and read one trimmed line, `None` at end of input
    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing
/// output.
pub fn run_simple(session: Session, show_progress: bool) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Repl::new(session, stdin.lock(), stdout.lock())
        .with_progress(show_progress)
        .run()
}
